/// Album art extraction API routes
use crate::state::AppState;
use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub found: bool,
    pub mime_type: Option<String>,
    pub data_uri: Option<String>,
}

/// POST /api/artwork/extract - Extract embedded album art from raw file bytes
///
/// Only the first 100 KiB of the body are inspected.
pub async fn extract(State(app_state): State<AppState>, body: Bytes) -> Json<ExtractResponse> {
    let art = app_state.artwork.extract_from_bytes(&body);

    Json(ExtractResponse {
        found: art.is_some(),
        data_uri: art.as_ref().map(vinyl_artwork::ArtworkData::to_data_uri),
        mime_type: art.map(|art| art.mime_type),
    })
}
