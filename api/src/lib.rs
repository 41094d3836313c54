pub mod core;
pub mod error_handler;
mod middleware_layer;
mod routes;

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use tokio::signal;
use tracing::{error, info};

pub use crate::core::{
    app_config::{AppConfig, ConfigError},
    app_state::AppState,
};
pub use crate::error_handler::{AppError, AppResult};
pub use crate::middleware_layer::request_id::REQUEST_ID_HEADER;

use crate::{
    middleware_layer::request_id::request_id,
    routes::{
        conversation::conversation_route::conversation_route,
        conversation_llm::conversation_llm_route::{conversation_llm_route, missing_position_route},
        health_route::health_route,
    },
};

/// Builds the HTTP router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/conversation/{id}", get(conversation_route))
        .route("/conversation_llm", get(missing_position_route))
        .route("/conversation_llm/", get(missing_position_route))
        .route("/conversation_llm/{position}", get(conversation_llm_route))
        .route("/health", get(health_route))
        .layer(middleware::from_fn(request_id))
        .with_state(state)
}

/// Builds clients from `config`, binds the listener and serves until Ctrl+C.
pub async fn start(config: AppConfig) -> AppResult<()> {
    let state = Arc::new(AppState::from_config(&config)?);
    let app = router(state);

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&config.api_address)
        .await
        .map_err(AppError::Bind)?;

    info!(address = %config.api_address, "listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
