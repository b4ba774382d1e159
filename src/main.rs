//! contact-board server entry point.
//!
//! Starts the Axum HTTP server serving the contact-form pages.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::mysql::MySqlPoolOptions;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use contact_board::app_state::AppState;
use contact_board::config::BoardConfig;
use contact_board::persistence::ContactStore;
use contact_board::persistence::mysql::MySqlContactStore;
use contact_board::templates::Templates;
use contact_board::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = BoardConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting contact-board");

    // Connect to the database and ensure the schema exists
    let pool = MySqlPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url())
        .await?;

    let store = MySqlContactStore::new(pool);
    store.initialize_schema().await?;
    tracing::info!(database = %config.db_name, "schema ready");

    // Compile page templates
    let templates = Templates::new()?;

    // Build application state
    let app_state = AppState {
        store: Arc::new(store),
        templates: Arc::new(templates),
    };

    // Build router
    let app = Router::new()
        .merge(web::build_router())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
