use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::error::LookupError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Lookup(#[from] LookupError),

    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Lookup(LookupError::UserNotFound) => StatusCode::NOT_FOUND,
            ApiError::Lookup(LookupError::Unexpected) => StatusCode::BAD_GATEWAY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
