pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat;
use crate::resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes", post(resume::handlers::handle_upload))
        .route("/api/v1/chat", post(chat::handlers::handle_chat))
        .with_state(state)
}
