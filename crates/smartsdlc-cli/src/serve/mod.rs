//! HTTP server exposing the SmartSDLC features.
//!
//! Every route is a single stateless round trip to the hosted model, except
//! the feedback routes which read and append to the feedback file.
//!
//! # Module Structure
//!
//! - `handlers` - HTTP route handlers
//! - `models` - API request/response types (DTOs)
//! - `error` - mapping from library errors to HTTP responses

mod error;
mod handlers;
mod models;


use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use smartsdlc_core::{Config, FeatureRunner, FeedbackStore, FileFeedbackStore, ModelGateway, WatsonxClient};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state for the server.
pub struct AppState {
    /// Runs the assistant features against the configured model gateway.
    pub runner: FeatureRunner<Box<dyn ModelGateway>>,
    /// Feedback persistence.
    pub feedback: Arc<dyn FeedbackStore>,
}

impl AppState {
    /// Builds the production state: watsonx gateway and file-backed feedback.
    pub fn from_config(config: &Config) -> Self {
        let gateway: Box<dyn ModelGateway> = Box::new(WatsonxClient::from_config(&config.upstream));

        Self {
            runner: FeatureRunner::new(gateway, config.upstream.clone()),
            feedback: Arc::new(FileFeedbackStore::with_config(&config.storage)),
        }
    }
}

// =============================================================================
// Router
// =============================================================================

/// Builds the router with every endpoint.
pub fn build_router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/fix-bug/", post(handlers::fix_bug))
        .route("/generate-code/", post(handlers::generate_code))
        .route("/generate-test-cases/", post(handlers::generate_test_cases))
        .route("/check-test-cases/", post(handlers::check_test_cases))
        .route("/chat/", post(handlers::chat))
        .route("/classify-pdf-sdlc/", post(handlers::classify_pdf))
        .route(
            "/api/feedback",
            post(handlers::submit).get(handlers::list_feedback),
        )
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        // The browser front-end is served from another origin
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state)
}

// =============================================================================
// Server Entry Point
// =============================================================================

/// Start the HTTP server and run until interrupted.
pub async fn start_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    if config.upstream.api_key.is_none() {
        tracing::warn!("API_KEY is not set; model-backed endpoints will fail");
    }

    let state = Arc::new(AppState::from_config(&config));
    let app = build_router(state, config.server.max_upload_bytes);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, model = %config.upstream.model_id, "starting SmartSDLC server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
