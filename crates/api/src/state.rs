//! Application state shared across handlers.

use std::sync::Arc;

use crate::ai::Assistant;
use crate::config::ApiConfig;
use crate::store::MemStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the in-memory store and the injected AI assistant. The
/// store's lifecycle is the state's lifecycle: construct, serve, discard.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    store: MemStore,
    assistant: Arc<dyn Assistant>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ApiConfig, store: MemStore, assistant: Arc<dyn Assistant>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                assistant,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the entity store.
    #[must_use]
    pub fn store(&self) -> &MemStore {
        &self.inner.store
    }

    /// Get a reference to the AI assistant capability.
    #[must_use]
    pub fn assistant(&self) -> &dyn Assistant {
        self.inner.assistant.as_ref()
    }
}
