use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::similarity::SimilarityError;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Body parsed but a field broke the request contract.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Body could not be read as a `SimilarityRequest`.
    #[error("{0}")]
    MalformedBody(#[from] JsonRejection),

    #[error("{0}")]
    ComputationFailed(#[from] SimilarityError),
}

/// Error body, shaped `{"detail": "..."}` for every failure.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::MalformedBody(rejection) => rejection.status(),
            GatewayError::ComputationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            GatewayError::MalformedBody(rejection) => rejection.body_text(),
            _ => self.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), %detail, "Similarity request failed");
        } else {
            tracing::debug!(status = status.as_u16(), %detail, "Rejected similarity request");
        }

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
