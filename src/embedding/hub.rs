use std::path::{Path, PathBuf};

use hf_hub::api::sync::ApiBuilder;
use hf_hub::{Repo, RepoType};
use tracing::{debug, info};

use super::error::EmbeddingError;
use crate::constants::{MODEL_CONFIG_FILE, MODEL_TOKENIZER_FILE, MODEL_WEIGHTS_FILE};

/// Where the embedding model comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// A directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    Local(PathBuf),
    /// A Hugging Face repository, fetched into the local hub cache.
    Hub { model_id: String, revision: String },
}

impl std::fmt::Display for ModelSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelSource::Local(path) => write!(f, "{}", path.display()),
            ModelSource::Hub { model_id, revision } => write!(f, "{model_id}@{revision}"),
        }
    }
}

/// Resolved on-disk paths of the three files a sentence embedder needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFiles {
    pub config: PathBuf,
    pub weights: PathBuf,
    pub tokenizer: PathBuf,
}

impl ModelFiles {
    /// Resolves files for `source`, downloading hub files on first use.
    ///
    /// Blocks the calling thread for the duration of any download.
    pub fn resolve(source: &ModelSource) -> Result<Self, EmbeddingError> {
        match source {
            ModelSource::Local(dir) => Self::from_dir(dir),
            ModelSource::Hub { model_id, revision } => Self::from_hub(model_id, revision),
        }
    }

    /// Resolves files from a local model directory.
    pub fn from_dir(dir: &Path) -> Result<Self, EmbeddingError> {
        if !dir.is_dir() {
            return Err(EmbeddingError::ModelNotFound {
                path: dir.to_path_buf(),
            });
        }

        let require = |file: &'static str| -> Result<PathBuf, EmbeddingError> {
            let path = dir.join(file);
            if path.is_file() {
                Ok(path)
            } else {
                Err(EmbeddingError::MissingModelFile {
                    file,
                    dir: dir.to_path_buf(),
                })
            }
        };

        Ok(Self {
            config: require(MODEL_CONFIG_FILE)?,
            weights: require(MODEL_WEIGHTS_FILE)?,
            tokenizer: require(MODEL_TOKENIZER_FILE)?,
        })
    }

    fn from_hub(model_id: &str, revision: &str) -> Result<Self, EmbeddingError> {
        info!(model_id, revision, "Resolving embedding model from Hugging Face hub");

        let api = ApiBuilder::new()
            .with_progress(false)
            .build()
            .map_err(|e| EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to initialize hub client: {}", e),
            })?;
        let repo = api.repo(Repo::with_revision(
            model_id.to_string(),
            RepoType::Model,
            revision.to_string(),
        ));

        let fetch = |file: &'static str| -> Result<PathBuf, EmbeddingError> {
            let path = repo.get(file).map_err(|e| EmbeddingError::DownloadFailed {
                model_id: model_id.to_string(),
                file,
                reason: e.to_string(),
            })?;
            debug!(file, path = %path.display(), "Model file available");
            Ok(path)
        };

        Ok(Self {
            config: fetch(MODEL_CONFIG_FILE)?,
            weights: fetch(MODEL_WEIGHTS_FILE)?,
            tokenizer: fetch(MODEL_TOKENIZER_FILE)?,
        })
    }
}
