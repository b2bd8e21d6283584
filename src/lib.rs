//! Riddle library crate (used by the server binary and integration tests).
//!
//! # Public API Surface
//!
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`SentenceEmbedder`], [`SentenceEmbedderConfig`], [`TextEmbedder`] - Embedding generation
//! - [`SimilarityService`], [`SimilarityError`] - Cosine scoring and percentage mapping
//! - [`gateway`] - Axum router, handlers and error mapping
//!
//! ## Test/Mock Support
//! [`MockEmbedder`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod embedding;
pub mod gateway;
pub mod similarity;

pub use config::{Config, ConfigError};
pub use constants::{DEFAULT_EMBEDDING_DIM, DEFAULT_MODEL_ID, HOME_MESSAGE};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use embedding::{
    EmbeddingError, ModelFiles, ModelSource, SentenceEmbedder, SentenceEmbedderConfig,
    TextEmbedder,
};
pub use similarity::{SimilarityError, SimilarityService, cosine_similarity, to_percentage};
