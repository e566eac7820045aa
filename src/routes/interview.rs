use axum::{Json, extract::State};

use crate::{
    message::{InterviewRequest, InterviewResponse},
    state::SharedState,
};

/// Generation failures come back as the fallback reply, never as an error status.
pub async fn interview_handler(
    State(state): State<SharedState>,
    Json(payload): Json<InterviewRequest>,
) -> Json<InterviewResponse> {
    tracing::info!(message_len = payload.message.len(), "interview prompt received");

    let reply = state.coach.generate(&payload.message).await;

    Json(InterviewResponse { reply })
}
