//! Embedding + model utilities.
//!
//! - [`encoder`] defines the [`TextEmbedder`] seam the similarity layer depends on.
//! - [`sentence`] provides the BERT sentence embedder (MiniLM family).
//! - [`hub`] resolves model files from a local directory or the Hugging Face hub.

/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// Text → vector capability.
pub mod encoder;
mod error;
/// Model file resolution.
pub mod hub;
#[cfg(any(test, feature = "mock"))]
mod mock;
/// Sentence embedder (mean-pooled BERT).
pub mod sentence;
/// Tokenizer loading helpers.
pub mod utils;

pub use encoder::TextEmbedder;
pub use error::EmbeddingError;
pub use hub::{ModelFiles, ModelSource};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
pub use sentence::{SentenceEmbedder, SentenceEmbedderConfig};
