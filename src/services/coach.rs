use std::sync::Arc;

use super::generator::{GenerationRequest, SamplingParams, TextGenerator};
use super::persona::PERSONA;
use crate::error::GenerationError;

/// Reply sent to the client whenever generation fails for any reason.
pub const FALLBACK_REPLY: &str = "Error: Could not generate response.";

#[derive(Clone)]
pub struct InterviewCoach {
    generator: Arc<dyn TextGenerator>,
}

impl InterviewCoach {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// One call to the generator with the persona and fixed sampling settings.
    pub async fn try_generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerationRequest {
            system_instruction: PERSONA.to_string(),
            prompt: prompt.to_string(),
            sampling: SamplingParams::INTERVIEW,
        };
        self.generator.generate(request).await
    }

    /// Like `try_generate`, but every failure is logged and collapsed into
    /// `FALLBACK_REPLY`.
    pub async fn generate(&self, prompt: &str) -> String {
        match self.try_generate(prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(error = %e, "generation failed");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}
