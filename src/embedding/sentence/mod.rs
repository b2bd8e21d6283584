//! Sentence embedder (BERT + tokenizer, mean pooling).
//!
//! Use [`SentenceEmbedderConfig::stub`] for tests/examples without model files.

/// Sentence embedder configuration.
pub mod config;
pub(crate) mod model;


pub use config::SentenceEmbedderConfig;

use candle_core::{Device, Tensor};
use tokenizers::{Encoding, Tokenizer};
use tracing::{debug, info, warn};

use crate::embedding::device::{device_label, select_device};
use crate::embedding::encoder::TextEmbedder;
use crate::embedding::error::EmbeddingError;
use crate::embedding::hub::ModelFiles;
use crate::embedding::utils::load_sentence_tokenizer;

use model::BertSentenceEncoder;

enum EmbedderBackend {
    Model {
        encoder: BertSentenceEncoder,
        tokenizer: Tokenizer,
        device: Device,
    },
    Stub {
        device: Device,
    },
}

/// Embedding generator backed by a sentence-transformers BERT (supports stub mode).
///
/// Immutable after [`load`](Self::load); share it behind an `Arc`.
pub struct SentenceEmbedder {
    backend: EmbedderBackend,
    config: SentenceEmbedderConfig,
    embedding_dim: usize,
}

impl std::fmt::Debug for SentenceEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EmbedderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EmbedderBackend::Stub { device } => format!("Stub({:?})", device),
                },
            )
            .field("source", &self.config.source)
            .field("embedding_dim", &self.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl SentenceEmbedder {
    /// Loads the embedder from a config (stub mode is supported).
    ///
    /// Blocks while model files are resolved, downloaded and mapped.
    pub fn load(config: SentenceEmbedderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        let device = select_device()?;
        debug!(?device, "Selected compute device for sentence embedder");

        if config.testing_stub {
            warn!("Sentence embedder running in STUB mode (testing only)");
            return Ok(Self {
                backend: EmbedderBackend::Stub { device },
                embedding_dim: config.embedding_dim,
                config,
            });
        }

        let files = ModelFiles::resolve(&config.source)?;

        let tokenizer = load_sentence_tokenizer(&files.tokenizer, config.max_seq_len).map_err(
            |e| EmbeddingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            },
        )?;

        let encoder = BertSentenceEncoder::load(&files, &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            }
        })?;
        let embedding_dim = encoder.hidden_size();

        info!(
            source = %config.source,
            device = device_label(&device),
            embedding_dim,
            max_seq_len = config.max_seq_len,
            "Sentence embedder loaded successfully"
        );

        Ok(Self {
            backend: EmbedderBackend::Model {
                encoder,
                tokenizer,
                device,
            },
            config,
            embedding_dim,
        })
    }

    /// Generates an embedding for a single string.
    pub fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.embed_batch(&[text])?
            .pop()
            .ok_or_else(|| EmbeddingError::InferenceFailed {
                reason: "encoder returned no vector".to_string(),
            })
    }

    /// Generates embeddings for a batch of strings, preserving order.
    pub fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        match &self.backend {
            EmbedderBackend::Model {
                encoder,
                tokenizer,
                device,
            } => self.embed_batch_with_model(texts, encoder, tokenizer, device),
            EmbedderBackend::Stub { .. } => {
                texts.iter().map(|text| Ok(self.embed_stub(text))).collect()
            }
        }
    }

    fn embed_batch_with_model(
        &self,
        texts: &[&str],
        encoder: &BertSentenceEncoder,
        tokenizer: &Tokenizer,
        device: &Device,
    ) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let encodings = tokenizer
            .encode_batch(texts.to_vec(), true)
            .map_err(|e| EmbeddingError::TokenizationFailed {
                reason: e.to_string(),
            })?;

        debug!(
            batch_size = texts.len(),
            seq_len = encodings.first().map(|e| e.len()).unwrap_or(0),
            "Generating embeddings (transformer forward pass)"
        );

        let input_ids = stack_rows(&encodings, Encoding::get_ids, device)?;
        let token_type_ids = stack_rows(&encodings, Encoding::get_type_ids, device)?;
        let attention_mask = stack_rows(&encodings, Encoding::get_attention_mask, device)?;

        let pooled = encoder
            .forward(&input_ids, &token_type_ids, &attention_mask)
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("Transformer forward pass failed: {}", e),
            })?;

        pooled
            .to_vec2::<f32>()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("Failed to convert embeddings to vec: {}", e),
            })
    }

    fn embed_stub(&self, text: &str) -> Vec<f32> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        debug!(text_len = text.len(), "Generating stub embedding");

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let mut state = hasher.finish();

        (0..self.embedding_dim)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
                ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0
            })
            .collect()
    }

    /// Returns the output embedding dimension.
    pub fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Stub { .. })
    }

    /// Returns `true` if a model is loaded.
    pub fn has_model(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Model { .. })
    }

    /// Returns the embedder configuration.
    pub fn config(&self) -> &SentenceEmbedderConfig {
        &self.config
    }
}

impl TextEmbedder for SentenceEmbedder {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.embed_batch(texts)
    }

    fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    fn is_stub(&self) -> bool {
        SentenceEmbedder::is_stub(self)
    }
}

/// Builds a `[batch, seq_len]` u32 tensor from one field of each encoding.
fn stack_rows(
    encodings: &[Encoding],
    field: fn(&Encoding) -> &[u32],
    device: &Device,
) -> Result<Tensor, EmbeddingError> {
    let rows = encodings
        .iter()
        .map(|encoding| Tensor::new(field(encoding), device))
        .collect::<candle_core::Result<Vec<_>>>()?;
    Ok(Tensor::stack(&rows, 0)?)
}
