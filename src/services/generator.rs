use async_trait::async_trait;

use crate::error::GenerationError;

/// Sampling knobs forwarded to the generation service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl SamplingParams {
    /// Fixed settings for every interview call.
    pub const INTERVIEW: Self = Self {
        temperature: 0.7,
        top_p: 1.0,
        top_k: 1,
        max_output_tokens: 1024,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub sampling: SamplingParams,
}

/// A hosted text-generation backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError>;
}
