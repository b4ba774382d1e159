//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::ContactStore;
use crate::templates::Templates;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// Both members are built once at startup; cloning is cheap handle
/// duplication per request. No other cross-request state exists.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Contact store handle.
    pub store: Arc<dyn ContactStore>,
    /// Compiled page templates.
    pub templates: Arc<Templates>,
}
