use std::sync::Arc;

use crate::embedding::TextEmbedder;
use crate::similarity::SimilarityService;

pub struct HandlerState<E: TextEmbedder> {
    pub service: Arc<SimilarityService<E>>,
}

impl<E: TextEmbedder> Clone for HandlerState<E> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<E: TextEmbedder> HandlerState<E> {
    pub fn new(service: SimilarityService<E>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Builds state straight from a loaded embedder.
    pub fn from_embedder(embedder: Arc<E>) -> Self {
        Self::new(SimilarityService::new(embedder))
    }
}
