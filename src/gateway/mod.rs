//! HTTP gateway (Axum) for word-pair similarity.
//!
//! This module is primarily used by the `riddle` server binary.

#![allow(missing_docs)]

pub mod cors;
pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use cors::cors_layer;
pub use error::{ErrorResponse, GatewayError};
pub use handler::{home_handler, similarity_handler};
pub use payload::{HealthResponse, HomeResponse, SimilarityRequest, SimilarityResponse};
pub use state::HandlerState;

use crate::embedding::TextEmbedder;

pub fn create_router_with_state<E: TextEmbedder>(
    state: HandlerState<E>,
    cors: CorsLayer,
) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/healthz", get(health_handler))
        .route("/similarity", post(similarity_handler::<E>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
        .into_response()
}
