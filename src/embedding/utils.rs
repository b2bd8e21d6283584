use std::io;
use std::path::Path;

use tokenizers::{PaddingParams, PaddingStrategy, Tokenizer, TruncationParams};

/// Loads `tokenizer.json` configured for batched sentence encoding.
///
/// Inputs longer than `max_len` tokens are truncated and every batch is padded
/// to its longest member, so the attention mask marks the real tokens.
pub fn load_sentence_tokenizer(tokenizer_path: &Path, max_len: usize) -> io::Result<Tokenizer> {
    let mut tokenizer = Tokenizer::from_file(tokenizer_path).map_err(io::Error::other)?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };
    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| io::Error::other(format!("Failed to configure truncation: {}", e)))?;

    // Keep the tokenizer's own pad token when it declares one.
    let padding = match tokenizer.get_padding() {
        Some(existing) => PaddingParams {
            strategy: PaddingStrategy::BatchLongest,
            ..existing.clone()
        },
        None => PaddingParams {
            strategy: PaddingStrategy::BatchLongest,
            ..Default::default()
        },
    };
    tokenizer.with_padding(Some(padding));

    Ok(tokenizer)
}
