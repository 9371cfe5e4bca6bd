//! Shared application state injected into the MCP server.
//!
//! Everything a request needs is constructed once at startup and handed to
//! [`WorkshopServer`](super::handler::WorkshopServer); there are no global
//! singletons.

use std::sync::Arc;

use crate::config::GlobalConfig;
use crate::llm::ModelClient;
use crate::storage::DocumentStore;

/// Immutable dependencies shared by every concurrent request.
pub struct AppState {
    /// Global configuration.
    pub config: Arc<GlobalConfig>,
    /// Language-model collaborator.
    pub model: Arc<dyn ModelClient>,
    /// Backing store for resource documents.
    pub documents: Arc<dyn DocumentStore>,
}

impl AppState {
    /// Bundle the application dependencies.
    #[must_use]
    pub fn new(
        config: Arc<GlobalConfig>,
        model: Arc<dyn ModelClient>,
        documents: Arc<dyn DocumentStore>,
    ) -> Self {
        Self {
            config,
            model,
            documents,
        }
    }
}
