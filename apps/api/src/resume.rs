//! Resume extraction — accepts a multipart upload and returns plain text for
//! the analysis resume branch. PDFs go through `pdf-extract`; plain-text
//! files pass through as-is. Nothing is stored.

use axum::{extract::Multipart, Json};
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;

#[derive(Debug, Serialize)]
pub struct ResumeTextResponse {
    pub text: String,
}

/// POST /api/v1/resume/extract
pub async fn handle_extract_resume(
    mut multipart: Multipart,
) -> Result<Json<ResumeTextResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_lowercase();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;

        let text = extract_text(&filename, &content_type, data)?;

        if text.trim().is_empty() {
            return Err(AppError::Validation(
                "no text could be extracted from the uploaded resume".to_string(),
            ));
        }

        return Ok(Json(ResumeTextResponse { text }));
    }

    Err(AppError::Validation(
        "multipart field \"file\" is required".to_string(),
    ))
}

fn extract_text(filename: &str, content_type: &str, data: Bytes) -> Result<String, AppError> {
    if content_type == "application/pdf" || filename.ends_with(".pdf") {
        return pdf_extract::extract_text_from_mem(&data)
            .map_err(|e| AppError::Validation(format!("could not read PDF: {e}")));
    }

    if content_type.starts_with("text/") || filename.ends_with(".txt") {
        return String::from_utf8(data.to_vec())
            .map_err(|_| AppError::Validation("text upload is not valid UTF-8".to_string()));
    }

    Err(AppError::Validation(
        "unsupported resume format; upload a .pdf or .txt file".to_string(),
    ))
}
