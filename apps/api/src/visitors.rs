//! Visitor counter — one document per handle: `{username, views,
//! created_at}`. A page load reads the current count, then creates the
//! document or increments it unless the client's session marker says this
//! visitor was already counted.
//!
//! The read and the conditional write are separate statements. Concurrent
//! page loads can race and lose an increment; counts are approximate on
//! purpose (the accuracy/cost trade-off is recorded in DESIGN.md).

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::errors::AppError;
use crate::state::AppState;

/// Decision derived from the point read and the client's debounce marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitAction {
    /// Session already counted: report the current value unchanged.
    Skip(i64),
    /// No document yet: create with an initial count of 1.
    Create,
    /// Document exists: atomic increment.
    Increment(i64),
}

fn next_action(existing: Option<i64>, already_counted: bool) -> VisitAction {
    match (existing, already_counted) {
        (current, true) => VisitAction::Skip(current.unwrap_or(0)),
        (None, false) => VisitAction::Create,
        (Some(current), false) => VisitAction::Increment(current),
    }
}

pub async fn get_views(db: &PgPool, handle: &str) -> Result<i64, sqlx::Error> {
    let views: Option<i64> =
        sqlx::query_scalar("SELECT views FROM portfolio_visits WHERE username = $1")
            .bind(handle)
            .fetch_optional(db)
            .await?;
    Ok(views.unwrap_or(0))
}

/// Records a visit and returns the resulting count. `already_counted` is the
/// client's local session marker; when set, the count is only read.
pub async fn record_visit(
    db: &PgPool,
    handle: &str,
    already_counted: bool,
) -> Result<i64, sqlx::Error> {
    let existing: Option<i64> =
        sqlx::query_scalar("SELECT views FROM portfolio_visits WHERE username = $1")
            .bind(handle)
            .fetch_optional(db)
            .await?;

    match next_action(existing, already_counted) {
        VisitAction::Skip(current) => Ok(current),
        VisitAction::Create => {
            sqlx::query(
                "INSERT INTO portfolio_visits (username, views, created_at) \
                 VALUES ($1, 1, now())",
            )
            .bind(handle)
            .execute(db)
            .await?;
            Ok(1)
        }
        VisitAction::Increment(current) => {
            sqlx::query("UPDATE portfolio_visits SET views = views + 1 WHERE username = $1")
                .bind(handle)
                .execute(db)
                .await?;
            Ok(current + 1)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct VisitRequest {
    /// True when the client's session marker says this page was already
    /// counted for this visitor.
    #[serde(default)]
    pub already_counted: bool,
}

#[derive(Debug, Serialize)]
pub struct ViewsResponse {
    pub views: i64,
}

/// GET /api/v1/portfolios/:handle/views
pub async fn handle_get_views(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<ViewsResponse>, AppError> {
    let views = get_views(&state.db, handle.trim()).await?;
    Ok(Json(ViewsResponse { views }))
}

/// POST /api/v1/portfolios/:handle/visit
pub async fn handle_record_visit(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Json(request): Json<VisitRequest>,
) -> Result<Json<ViewsResponse>, AppError> {
    let views = record_visit(&state.db, handle.trim(), request.already_counted).await?;
    Ok(Json(ViewsResponse { views }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counted_session_only_reads() {
        assert_eq!(next_action(Some(41), true), VisitAction::Skip(41));
        assert_eq!(next_action(None, true), VisitAction::Skip(0));
    }

    #[test]
    fn test_first_visitor_creates_document() {
        assert_eq!(next_action(None, false), VisitAction::Create);
    }

    #[test]
    fn test_returning_page_increments_existing_document() {
        assert_eq!(next_action(Some(41), false), VisitAction::Increment(41));
    }
}
