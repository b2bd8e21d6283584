//! Word-pair similarity scoring.
//!
//! [`SimilarityService`] encodes the ordered pair `[main_word, guess_word]`,
//! takes the cosine of the two vectors and maps it to a percentage in
//! `[0, 100]` with two decimals.

mod error;
mod math;


pub use error::SimilarityError;
pub use math::{cosine_similarity, to_percentage};

use std::sync::Arc;

use tracing::debug;

use crate::embedding::TextEmbedder;

/// Scores word pairs against a shared, read-only embedder.
pub struct SimilarityService<E: TextEmbedder> {
    embedder: Arc<E>,
}

impl<E: TextEmbedder> Clone for SimilarityService<E> {
    fn clone(&self) -> Self {
        Self {
            embedder: Arc::clone(&self.embedder),
        }
    }
}

impl<E: TextEmbedder> std::fmt::Debug for SimilarityService<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityService")
            .field("embedding_dim", &self.embedder.embedding_dim())
            .field("stub", &self.embedder.is_stub())
            .finish()
    }
}

impl<E: TextEmbedder> SimilarityService<E> {
    pub fn new(embedder: Arc<E>) -> Self {
        Self { embedder }
    }

    /// Returns the similarity percentage of `main_word` and `guess_word`.
    ///
    /// Synchronous and CPU-bound; async callers should run it on the blocking pool.
    pub fn compute(&self, main_word: &str, guess_word: &str) -> Result<f64, SimilarityError> {
        let vectors = self.embedder.encode(&[main_word, guess_word])?;
        let [main, guess] = vectors.as_slice() else {
            return Err(SimilarityError::UnexpectedVectorCount {
                expected: 2,
                actual: vectors.len(),
            });
        };

        let similarity = cosine_similarity(main, guess)?;
        let percentage = to_percentage(similarity);

        debug!(
            main_len = main_word.len(),
            guess_len = guess_word.len(),
            similarity,
            percentage,
            "Computed similarity"
        );

        Ok(percentage)
    }
}
