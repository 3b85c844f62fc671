//! Web server wiring: the guide API under `/api`, static frontend otherwise

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api;
use crate::config::GuideConfig;

/// Directory the built frontend is served from
const FRONTEND_DIST: &str = "frontend/dist";

/// Serve the guide until the process is stopped.
pub async fn run(config: &GuideConfig) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", api::router())
        .fallback_service(ServeDir::new(FRONTEND_DIST))
        .layer(cors);

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(port = config.server.port, "guide server listening");
    axum::serve(listener, app)
        .await
        .context("Web server terminated unexpectedly")?;
    Ok(())
}
