//! HTTP layer: page handlers, system endpoints, and router composition.

pub mod pages;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete router with all endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new().merge(pages::routes()).merge(system::routes())
}
