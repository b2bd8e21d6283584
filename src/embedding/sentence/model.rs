//! BERT encoder with attention-masked mean pooling.
//!
//! Sentence-transformers checkpoints (MiniLM, MPNet-style BERTs) ship the bare
//! encoder weights; the pooling head is a plain mean over token states.

use candle_core::{DType, Device, Result, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};

use crate::embedding::hub::ModelFiles;

pub(crate) struct BertSentenceEncoder {
    bert: BertModel,
    hidden_size: usize,
}

impl BertSentenceEncoder {
    pub(crate) fn load(files: &ModelFiles, device: &Device) -> Result<Self> {
        let config_content = std::fs::read_to_string(&files.config)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle_core::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(
                std::slice::from_ref(&files.weights),
                DType::F32,
                device,
            )?
        };

        let bert = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), &config)?
        } else {
            BertModel::load(vb, &config)?
        };

        Ok(Self {
            bert,
            hidden_size: config.hidden_size,
        })
    }

    /// Runs the encoder and mean-pools each row over its unmasked tokens.
    ///
    /// Inputs are `[batch, seq_len]`; the result is `[batch, hidden_size]`.
    pub(crate) fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: &Tensor,
    ) -> Result<Tensor> {
        let hidden = self
            .bert
            .forward(input_ids, token_type_ids, Some(attention_mask))?;

        // [batch, seq_len] -> [batch, seq_len, 1]
        let mask = attention_mask.to_dtype(DType::F32)?.unsqueeze(2)?;
        let summed = hidden.broadcast_mul(&mask)?.sum(1)?;
        let counts = mask.sum(1)?.clamp(1e-9f32, f32::MAX)?;
        summed.broadcast_div(&counts)
    }

    pub(crate) fn hidden_size(&self) -> usize {
        self.hidden_size
    }
}
