//! Shared helpers for API integration tests.
//!
//! Tests drive the full router in process via `tower::ServiceExt::oneshot`;
//! no socket is bound and no network is touched. The assistant capability
//! is stubbed per test.

// Not every test binary uses every helper
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use futures::FutureExt;
use futures::future::BoxFuture;
use secrecy::SecretString;

use dastak_api::ai::{AiError, AiOrderResponse, Assistant, Intent};
use dastak_api::config::{AiConfig, ApiConfig};
use dastak_api::models::{ChatMessage, ChatOrderItem};
use dastak_api::state::AppState;
use dastak_api::store::MemStore;

/// Configuration for tests; never used to reach the network.
pub fn test_config() -> ApiConfig {
    ApiConfig {
        host: "127.0.0.1".parse().expect("valid ip"),
        port: 0,
        ai: AiConfig {
            api_key: SecretString::from("test-key-not-used"),
            model: "test/model".to_string(),
            base_url: "http://localhost:9".to_string(),
            timeout: Duration::from_secs(1),
        },
        sentry_dsn: None,
    }
}

/// Assistant stub replying with a fixed interpretation and summary.
pub struct ScriptedAssistant {
    pub response: AiOrderResponse,
    pub summary: String,
}

impl Default for ScriptedAssistant {
    fn default() -> Self {
        Self {
            response: AiOrderResponse {
                intent: Intent::Inquiry,
                items: Vec::new(),
                location: None,
                message: "How can I help you today?".to_string(),
                requires_human_help: false,
            },
            summary: "Summary: your order is on its way.".to_string(),
        }
    }
}

impl Assistant for ScriptedAssistant {
    fn interpret<'a>(
        &'a self,
        _text: &'a str,
        _context: &'a [ChatMessage],
    ) -> BoxFuture<'a, Result<AiOrderResponse, AiError>> {
        async move { Ok(self.response.clone()) }.boxed()
    }

    fn summarize_order<'a>(
        &'a self,
        _items: &'a [ChatOrderItem],
    ) -> BoxFuture<'a, Result<String, AiError>> {
        async move { Ok(self.summary.clone()) }.boxed()
    }
}

/// Assistant stub that fails every call, like an unreachable provider.
pub struct DeadAssistant;

impl Assistant for DeadAssistant {
    fn interpret<'a>(
        &'a self,
        _text: &'a str,
        _context: &'a [ChatMessage],
    ) -> BoxFuture<'a, Result<AiOrderResponse, AiError>> {
        async move { Err(AiError::Parse("provider unreachable".to_string())) }.boxed()
    }

    fn summarize_order<'a>(
        &'a self,
        _items: &'a [ChatOrderItem],
    ) -> BoxFuture<'a, Result<String, AiError>> {
        async move { Err(AiError::Parse("provider unreachable".to_string())) }.boxed()
    }
}

/// Router over a freshly seeded store and the given assistant.
pub fn app_with(assistant: Arc<dyn Assistant>) -> Router {
    let state = AppState::new(test_config(), MemStore::seeded(), assistant);
    dastak_api::app(state)
}

/// Router with the default scripted assistant.
pub fn app() -> Router {
    app_with(Arc::new(ScriptedAssistant::default()))
}

/// GET request.
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

/// Request with a JSON body.
pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

/// Read a response body as JSON.
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is JSON")
}
