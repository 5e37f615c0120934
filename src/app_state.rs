//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::ListService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// List service for all business logic.
    pub list_service: Arc<ListService>,
}

impl AppState {
    /// Wraps a service for sharing across handlers.
    #[must_use]
    pub fn new(list_service: ListService) -> Self {
        Self {
            list_service: Arc::new(list_service),
        }
    }
}
