//! Mock embedder with caller-supplied vectors and failure injection.

use std::collections::HashMap;

use parking_lot::Mutex;

use super::encoder::TextEmbedder;
use super::error::EmbeddingError;

/// In-memory [`TextEmbedder`] for tests.
///
/// Texts without a registered vector fail with
/// [`EmbeddingError::InferenceFailed`]. Every `encode` call is recorded.
#[derive(Debug, Default)]
pub struct MockEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    failure: Option<String>,
    dim: usize,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockEmbedder {
    /// Creates an empty mock producing `dim`-length vectors.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            ..Default::default()
        }
    }

    /// Registers the vector returned for `text`.
    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }

    /// Makes every `encode` call fail with `reason`.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    /// Returns the batches passed to `encode`, oldest first.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().clone()
    }
}

impl TextEmbedder for MockEmbedder {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.calls
            .lock()
            .push(texts.iter().map(|t| t.to_string()).collect());

        if let Some(reason) = &self.failure {
            return Err(EmbeddingError::InferenceFailed {
                reason: reason.clone(),
            });
        }

        texts
            .iter()
            .map(|text| {
                self.vectors
                    .get(*text)
                    .cloned()
                    .ok_or_else(|| EmbeddingError::InferenceFailed {
                        reason: format!("no mock vector for '{text}'"),
                    })
            })
            .collect()
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }

    fn is_stub(&self) -> bool {
        true
    }
}
