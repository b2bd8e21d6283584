//! Cross-cutting, shared constants.
//!
//! The embedding dimension and sequence length describe the default model
//! (`all-MiniLM-L6-v2`). Loaded models report their own hidden size, so these
//! act as defaults for stub mode and configuration.

/// Hugging Face id of the default sentence-embedding model.
pub const DEFAULT_MODEL_ID: &str = "sentence-transformers/all-MiniLM-L6-v2";

/// Hub revision fetched when none is configured.
pub const DEFAULT_MODEL_REVISION: &str = "main";

/// Output dimension of the default model.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens per input for the default model (longer inputs are truncated).
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Body returned by `GET /`.
pub const HOME_MESSAGE: &str = "Riddle AI Backend Running 🚀";

/// Upper bound of a similarity percentage.
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Lower bound of a similarity percentage.
pub const MIN_PERCENTAGE: f64 = 0.0;

/// Files every local or hub model directory must provide.
pub const MODEL_CONFIG_FILE: &str = "config.json";
/// Safetensors weights file name.
pub const MODEL_WEIGHTS_FILE: &str = "model.safetensors";
/// Tokenizer definition file name.
pub const MODEL_TOKENIZER_FILE: &str = "tokenizer.json";
