use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::Config;
use crate::llm_client::AnswerDelegate;
use crate::resume::ParsedResume;

/// A session's current document. Replaced wholesale on re-upload.
pub struct SessionDoc {
    pub parsed: Arc<ParsedResume>,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Per-session parsed resumes. Replacement is a single map insert, so
    /// concurrent readers observe either the old or the fully-new document,
    /// never a torn one.
    pub sessions: Arc<RwLock<HashMap<Uuid, SessionDoc>>>,
    /// Pluggable answer delegate. Default: `GeminiClient`; mocked in tests.
    pub llm: Arc<dyn AnswerDelegate>,
    pub config: Config,
}

impl AppState {
    pub fn new(llm: Arc<dyn AnswerDelegate>, config: Config) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            llm,
            config,
        }
    }

    /// Stores (or replaces) a session's document. Last upload wins.
    pub async fn put_session(&self, session_id: Uuid, doc: SessionDoc) {
        self.sessions.write().await.insert(session_id, doc);
    }

    /// Snapshot of a session's parsed resume, if one has been uploaded.
    pub async fn get_resume(&self, session_id: Uuid) -> Option<Arc<ParsedResume>> {
        self.sessions
            .read()
            .await
            .get(&session_id)
            .map(|doc| Arc::clone(&doc.parsed))
    }
}
