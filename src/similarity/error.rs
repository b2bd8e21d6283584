use thiserror::Error;

use crate::embedding::EmbeddingError;

/// Errors raised while scoring a word pair.
#[derive(Debug, Error)]
pub enum SimilarityError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error("expected {expected} embeddings from encoder, got {actual}")]
    UnexpectedVectorCount { expected: usize, actual: usize },

    #[error("embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("cannot compare empty embedding vectors")]
    EmptyVector,

    #[error("cosine similarity is undefined for a zero-norm vector")]
    ZeroNorm,

    #[error("cosine similarity produced a non-finite value")]
    NonFinite,

    #[error("similarity task failed: {reason}")]
    TaskFailed { reason: String },
}
