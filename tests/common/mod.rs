#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use interview_coach_backend::error::GenerationError;
use interview_coach_backend::routes::create_router;
use interview_coach_backend::services::generator::{GenerationRequest, TextGenerator};
use interview_coach_backend::state::AppState;

pub const ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Always answers with the same text.
pub struct StaticGenerator(pub &'static str);

#[async_trait]
impl TextGenerator for StaticGenerator {
    async fn generate(&self, _request: GenerationRequest) -> Result<String, GenerationError> {
        Ok(self.0.to_string())
    }
}

/// Fails every call the way an unreachable upstream would.
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _request: GenerationRequest) -> Result<String, GenerationError> {
        Err(GenerationError::Api {
            status: 503,
            body: "upstream unavailable".to_string(),
        })
    }
}

/// Records every request it receives.
#[derive(Default)]
pub struct CapturingGenerator {
    pub seen: Mutex<Vec<GenerationRequest>>,
}

#[async_trait]
impl TextGenerator for CapturingGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        let reply = format!("echo: {}", request.prompt);
        self.seen.lock().unwrap().push(request);
        Ok(reply)
    }
}

pub fn app_with(generator: Arc<dyn TextGenerator>) -> Router {
    let state = Arc::new(AppState::new(generator));
    create_router(ALLOWED_ORIGIN.parse().unwrap()).with_state(state)
}
