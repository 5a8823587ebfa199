/// Record collection API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use vinyl_core::{Record, RecordId, RecordSummary};

#[derive(Debug, Serialize)]
pub struct RecordListResponse {
    /// Newest first
    pub records: Vec<RecordSummary>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub removed: u64,
}

fn parse_id(id: &str) -> Result<RecordId> {
    id.parse()
        .map_err(|_| ServerError::BadRequest(format!("Invalid record id: {id}")))
}

/// GET /api/records - List the collection
pub async fn list_records(State(app_state): State<AppState>) -> Result<Json<RecordListResponse>> {
    let records = app_state.store.get_record_summaries().await?;
    let total = records.len();

    Ok(Json(RecordListResponse { records, total }))
}

/// GET /api/records/:id - Get one record including its audio
pub async fn get_record(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record>> {
    let id = parse_id(&id)?;

    let record = app_state
        .store
        .get_record(id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Record {id}")))?;

    Ok(Json(record))
}

/// DELETE /api/records/:id - Remove a record from the collection
pub async fn delete_record(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;

    if app_state.store.delete_record(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServerError::NotFound(format!("Record {id}")))
    }
}

/// DELETE /api/records - Clear the whole collection
pub async fn clear_records(State(app_state): State<AppState>) -> Result<Json<ClearResponse>> {
    let removed = app_state.store.clear_records().await?;
    Ok(Json(ClearResponse { removed }))
}
