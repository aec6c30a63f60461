//! Axum route handler for resume Q&A.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::chat::answer_question;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Session returned by the upload endpoint. Absent or unknown sessions
    /// get the fixed no-document answer, not an error.
    pub session_id: Option<Uuid>,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let parsed = match request.session_id {
        Some(id) => state.get_resume(id).await,
        None => None,
    };

    debug!(
        session_known = parsed.is_some(),
        "answering question: {}", request.question
    );

    let answer = answer_question(&request.question, parsed.as_deref(), state.llm.as_ref()).await;

    Ok(Json(ChatResponse { answer }))
}
