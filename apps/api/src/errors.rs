use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::github::GithubError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant maps to one section-level display state — a failed analysis
/// or summarization never takes the rest of the page down with it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Summarization error: {0}")]
    Summarization(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<GithubError> for AppError {
    fn from(err: GithubError) -> Self {
        match err {
            GithubError::NotFound(handle) => {
                AppError::NotFound(format!("GitHub user \"{handle}\" not found"))
            }
            GithubError::Upstream { status, message } => AppError::Upstream { status, message },
            GithubError::Http(e) => AppError::Upstream {
                status: 0,
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Upstream { status, message } => {
                tracing::error!("GitHub upstream error ({status}): {message}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "GitHub could not be reached".to_string(),
                )
            }
            AppError::Analysis(AnalysisError::Overloaded) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "AI_OVERLOADED",
                "The AI service is temporarily overloaded. Please try again in a few moments."
                    .to_string(),
            ),
            AppError::Analysis(AnalysisError::Unknown(msg)) => {
                tracing::error!("Analysis error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ANALYSIS_ERROR",
                    "Could not generate AI analysis. This might be a temporary issue.".to_string(),
                )
            }
            AppError::Summarization(msg) => {
                tracing::error!("Summarization error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SUMMARIZATION_ERROR",
                    "Could not generate an AI summary for this article.".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
