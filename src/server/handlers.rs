use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::github::require_username;
use crate::models::{Rank, RankInfo, ScoreReport};
use crate::server::error::ApiError;
use crate::server::AppState;

pub const SERVICE_NAME: &str = "pudim.dev";

/// Field order is part of the response contract.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: SERVICE_NAME,
    })
}

pub async fn score(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ScoreReport>, ApiError> {
    let username =
        require_username(&username).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let report = state.pipeline.score_user(username).await?;
    Ok(Json(report))
}

pub async fn ranks() -> Json<Vec<RankInfo>> {
    Json(Rank::ALL.iter().map(|r| r.info()).collect())
}
