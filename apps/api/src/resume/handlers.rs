//! Axum route handler for resume upload.

use axum::extract::{Multipart, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::resume::parse_document_text;
use crate::state::{AppState, SessionDoc};

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub session_id: Uuid,
    pub filename: String,
    /// Section keys in order of first appearance.
    pub sections: Vec<String>,
}

/// POST /api/v1/resumes
///
/// Multipart upload: a required `file` field and an optional `session_id`
/// field to replace an existing session's document (last upload wins).
/// Parses the decoded text into sections and stores the result for the
/// session; answers are computed against it until the next upload.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut session_id: Option<Uuid> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("resume.txt").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read file field: {e}")))?;
                file = Some((filename, data.to_vec()));
            }
            Some("session_id") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read session_id: {e}")))?;
                session_id = Some(
                    raw.parse()
                        .map_err(|_| AppError::Validation("session_id must be a UUID".to_string()))?,
                );
            }
            _ => {}
        }
    }

    let Some((filename, data)) = file else {
        return Err(AppError::Validation("missing 'file' field".to_string()));
    };

    let text = extract_text(&data, &filename)?;
    if text.trim().is_empty() {
        return Err(AppError::Extraction(
            "no text could be extracted from the uploaded file".to_string(),
        ));
    }

    let parsed = parse_document_text(&text);
    let sections: Vec<String> = parsed.sections.keys().cloned().collect();

    let session_id = session_id.unwrap_or_else(Uuid::new_v4);
    state
        .put_session(
            session_id,
            SessionDoc {
                parsed: Arc::new(parsed),
                filename: filename.clone(),
                uploaded_at: Utc::now(),
            },
        )
        .await;

    info!(
        %session_id,
        filename = %filename,
        section_count = sections.len(),
        "resume parsed and stored"
    );

    Ok(Json(UploadResponse {
        session_id,
        filename,
        sections,
    }))
}
