use super::error::EmbeddingError;

/// Maps an ordered batch of texts to one fixed-length vector per text.
///
/// Implementations are immutable after construction and shared across
/// request handlers, so `encode` takes `&self` and must be safe to call
/// concurrently.
pub trait TextEmbedder: Send + Sync + 'static {
    /// Encodes `texts`, returning vectors in the same order.
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Dimensionality of every vector returned by [`encode`](Self::encode).
    fn embedding_dim(&self) -> usize;

    /// Returns `true` for deterministic stand-ins that carry no model.
    fn is_stub(&self) -> bool {
        false
    }
}
