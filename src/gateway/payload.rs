use serde::{Deserialize, Serialize};

use crate::gateway::error::GatewayError;

/// Body of `POST /similarity`.
///
/// Both words must contain a non-whitespace character. A blank word has no
/// meaningful embedding, so `"  "` is rejected like `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityRequest {
    pub main_word: String,
    pub guess_word: String,
}

impl SimilarityRequest {
    /// Rejects empty or whitespace-only words.
    pub fn validate(&self) -> Result<(), GatewayError> {
        let fields = [
            ("main_word", &self.main_word),
            ("guess_word", &self.guess_word),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(GatewayError::InvalidRequest(format!(
                    "`{field}` must be a non-empty string"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResponse {
    pub similarity_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
