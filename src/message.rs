// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct InterviewRequest {
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct InterviewResponse {
    pub reply: String,
}
