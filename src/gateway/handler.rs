use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{debug, instrument};

use crate::constants::HOME_MESSAGE;
use crate::embedding::TextEmbedder;
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{HomeResponse, SimilarityRequest, SimilarityResponse};
use crate::gateway::state::HandlerState;
use crate::similarity::SimilarityError;

#[instrument]
pub async fn home_handler() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: HOME_MESSAGE.to_string(),
    })
}

#[instrument(skip(state, payload))]
pub async fn similarity_handler<E: TextEmbedder>(
    State(state): State<HandlerState<E>>,
    payload: Result<Json<SimilarityRequest>, JsonRejection>,
) -> Result<Json<SimilarityResponse>, GatewayError> {
    let Json(request) = payload?;
    request.validate()?;

    debug!(
        main_len = request.main_word.len(),
        guess_len = request.guess_word.len(),
        "Scoring word pair"
    );

    let service = state.service.clone();
    let similarity_percentage = tokio::task::spawn_blocking(move || {
        service.compute(&request.main_word, &request.guess_word)
    })
    .await
    .map_err(|e| SimilarityError::TaskFailed {
        reason: e.to_string(),
    })??;

    Ok(Json(SimilarityResponse {
        similarity_percentage,
    }))
}
