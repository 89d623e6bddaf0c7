//! Diary entry listing endpoint

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};

use super::ApiState;
use crate::db::DiaryEntry;

/// Default number of entries returned
const DEFAULT_LIMIT: usize = 20;

/// Hard cap on the number of entries returned
const MAX_LIMIT: usize = 100;

/// Query parameters for `GET /api/entries`
#[derive(Debug, Deserialize)]
pub struct EntriesQuery {
    /// Maximum number of entries to return
    pub limit: Option<usize>,
}

/// Response body for `GET /api/entries`
#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<DiaryEntry>,
    pub count: usize,
}

/// List recent diary entries, newest first
async fn list_entries(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<EntriesQuery>,
) -> Result<Json<EntriesResponse>, StatusCode> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);

    let entries = state.entry_repo.list_recent(limit).map_err(|e| {
        tracing::error!(error = %e, "failed to list diary entries");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let count = entries.len();
    Ok(Json(EntriesResponse { entries, count }))
}

/// Build the entries router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/entries", get(list_entries))
        .with_state(state)
}
