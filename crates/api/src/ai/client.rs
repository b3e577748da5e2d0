//! AI provider client.
//!
//! Talks to an OpenAI-compatible chat completions endpoint (OpenRouter by
//! default) with strict-JSON reply mode for interpretation turns. The
//! request timeout is set on the underlying HTTP client; there is no retry.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::AiConfig;
use crate::models::{ChatMessage, ChatOrderItem};

use super::Assistant;
use super::error::{AiError, ApiErrorResponse};
use super::types::{
    AiOrderResponse, CompletionMessage, CompletionRequest, CompletionResponse, ResponseFormat,
};

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Reply used when the assistant returns an empty message field.
const DEFAULT_GREETING: &str =
    "I'm here to help you order food, medicines, or groceries. What would you like today?";

const SYSTEM_PROMPT: &str = r#"You are an AI assistant for Dastak, a delivery service for rural areas. You help users order food, medicines, and groceries.

Instructions:
- Respond in a friendly, helpful manner
- Support both English and Urdu (romanized)
- Understand local food items, medicines, and grocery needs
- Parse user requests for ordering items
- Always respond in JSON format with the structure provided
- If user wants to order something, extract items with quantities
- For unclear requests, ask for clarification
- For complex medical needs, suggest consulting a doctor
- Be culturally sensitive and appropriate for a rural context

Categories:
- food: biryani, karahi, roti, naan, curry, rice, dal, etc.
- medicine: panadol, disprin, cough syrup, bandages, etc.
- groceries: rice, flour, oil, spices, vegetables, milk, etc.

Respond with JSON in this exact format:
{
  "intent": "order|inquiry|complaint|other",
  "items": [{"name": "item name", "quantity": number, "category": "food|medicine|groceries", "specifications": "optional details"}],
  "location": "if mentioned",
  "message": "your response message",
  "requiresHumanHelp": boolean
}"#;

const SUMMARY_PROMPT: &str = "Create a friendly order summary in both English and Urdu \
     (romanized) for a delivery service. Be concise and helpful.";

/// AI provider client.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct OpenRouterClient {
    inner: Arc<OpenRouterClientInner>,
}

struct OpenRouterClientInner {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OpenRouterClient {
    /// Create a new provider client.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &AiConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let bearer = format!("Bearer {}", config.api_key.expose_secret());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer).expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(OpenRouterClientInner {
                client,
                base_url: config.base_url.trim_end_matches('/').to_string(),
                model: config.model.clone(),
            }),
        }
    }

    /// Send one completion request and return the first choice's text.
    #[instrument(skip(self, messages, response_format), fields(model = %self.inner.model))]
    async fn complete(
        &self,
        messages: Vec<CompletionMessage>,
        response_format: Option<ResponseFormat>,
    ) -> Result<String, AiError> {
        let request = CompletionRequest {
            model: self.inner.model.clone(),
            messages,
            response_format,
        };

        let url = format!("{}{}", self.inner.base_url, CHAT_COMPLETIONS_PATH);
        let response = self.inner.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(handle_error_status(status, response).await);
        }

        let body = response.text().await?;
        let parsed: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| AiError::Parse(format!("Failed to parse response: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AiError::Parse("response contained no choices".to_string()))
    }
}

impl Assistant for OpenRouterClient {
    fn interpret<'a>(
        &'a self,
        text: &'a str,
        context: &'a [ChatMessage],
    ) -> BoxFuture<'a, Result<AiOrderResponse, AiError>> {
        async move {
            let mut messages = Vec::with_capacity(context.len() + 2);
            messages.push(CompletionMessage::system(SYSTEM_PROMPT));
            for prior in context {
                messages.push(if prior.is_from_user {
                    CompletionMessage::user(prior.message.as_str())
                } else {
                    CompletionMessage::assistant(prior.message.as_str())
                });
            }
            messages.push(CompletionMessage::user(text));

            let content = self
                .complete(messages, Some(ResponseFormat::json_object()))
                .await?;

            let mut response: AiOrderResponse = serde_json::from_str(content.trim())
                .map_err(|e| AiError::Parse(format!("reply was not the expected JSON: {e}")))?;
            if response.message.is_empty() {
                response.message = DEFAULT_GREETING.to_string();
            }
            Ok(response)
        }
        .boxed()
    }

    fn summarize_order<'a>(
        &'a self,
        items: &'a [ChatOrderItem],
    ) -> BoxFuture<'a, Result<String, AiError>> {
        async move {
            let payload = serde_json::to_string(items)
                .map_err(|e| AiError::Parse(format!("could not encode items: {e}")))?;
            let messages = vec![
                CompletionMessage::system(SUMMARY_PROMPT),
                CompletionMessage::user(format!(
                    "Create an order summary for these items: {payload}"
                )),
            ];

            let content = self.complete(messages, None).await?;
            let trimmed = content.trim();
            if trimmed.is_empty() {
                Err(AiError::Parse("empty summary".to_string()))
            } else {
                Ok(trimmed.to_string())
            }
        }
        .boxed()
    }
}

/// Map an error status code to an [`AiError`].
async fn handle_error_status(status: reqwest::StatusCode, response: reqwest::Response) -> AiError {
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);
        return AiError::RateLimited(retry_after);
    }

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return AiError::Unauthorized("Invalid API key".to_string());
    }

    match response.text().await {
        Ok(body) => {
            if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                AiError::Api {
                    error_type: api_error
                        .error
                        .error_type
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: api_error.error.message,
                }
            } else {
                AiError::Api {
                    error_type: "unknown".to_string(),
                    message: body,
                }
            }
        }
        Err(e) => AiError::Http(e),
    }
}
