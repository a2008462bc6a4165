//! HTTP surface: health check, score lookup and the rank table.

pub mod error;
pub mod handlers;

use std::net::SocketAddr;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::analysis::ScorePipeline;
use crate::error::Result;

pub use error::ApiError;

/// Shared across handlers; the pipeline itself is stateless.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: ScorePipeline,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/ranks", get(handlers::ranks))
        .route("/api/score/:username", get(handlers::score))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
