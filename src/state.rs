// src/state.rs
use std::sync::Arc;

use crate::services::coach::InterviewCoach;
use crate::services::generator::TextGenerator;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub coach: InterviewCoach,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            coach: InterviewCoach::new(generator),
        }
    }
}
