use std::path::PathBuf;

use crate::config::Config;
use crate::constants::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN, DEFAULT_MODEL_ID, DEFAULT_MODEL_REVISION,
};
use crate::embedding::error::EmbeddingError;
use crate::embedding::hub::ModelSource;

#[derive(Debug, Clone)]
/// Configuration for [`SentenceEmbedder`](super::SentenceEmbedder).
pub struct SentenceEmbedderConfig {
    /// Local directory or hub repository to load from.
    pub source: ModelSource,
    /// Max tokens per input.
    pub max_seq_len: usize,
    /// Vector dimension used in stub mode (loaded models report their own).
    pub embedding_dim: usize,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for SentenceEmbedderConfig {
    fn default() -> Self {
        Self {
            source: ModelSource::Hub {
                model_id: DEFAULT_MODEL_ID.to_string(),
                revision: DEFAULT_MODEL_REVISION.to_string(),
            },
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            testing_stub: false,
        }
    }
}

impl SentenceEmbedderConfig {
    /// Creates a config for a local model directory.
    pub fn local<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            source: ModelSource::Local(model_dir.into()),
            ..Default::default()
        }
    }

    /// Creates a config for a hub repository.
    pub fn hub(model_id: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            source: ModelSource::Hub {
                model_id: model_id.into(),
                revision: revision.into(),
            },
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Derives the embedder config from server configuration.
    ///
    /// A local path wins over the hub id.
    pub fn from_config(config: &Config) -> Self {
        if config.embedder_stub {
            return Self::stub();
        }

        match &config.model_path {
            Some(path) => Self::local(path.clone()),
            None => Self::hub(config.model_id.clone(), config.model_revision.clone()),
        }
    }

    /// Overrides the max sequence length.
    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    /// Overrides the stub vector dimension.
    pub fn with_embedding_dim(mut self, embedding_dim: usize) -> Self {
        self.embedding_dim = embedding_dim;
        self
    }

    /// Validates required fields.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be greater than zero".to_string(),
            });
        }

        if self.testing_stub {
            if self.embedding_dim == 0 {
                return Err(EmbeddingError::InvalidConfig {
                    reason: "embedding_dim must be greater than zero".to_string(),
                });
            }
            return Ok(());
        }

        match &self.source {
            ModelSource::Local(path) if path.as_os_str().is_empty() => {
                Err(EmbeddingError::InvalidConfig {
                    reason: "model path is required (stubbing is disabled)".to_string(),
                })
            }
            ModelSource::Local(path) if !path.exists() => {
                Err(EmbeddingError::ModelNotFound { path: path.clone() })
            }
            ModelSource::Hub { model_id, .. } if model_id.trim().is_empty() => {
                Err(EmbeddingError::InvalidConfig {
                    reason: "model id is required (stubbing is disabled)".to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}
