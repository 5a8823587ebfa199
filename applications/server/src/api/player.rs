/// Turntable API routes
use crate::{
    api::content_type,
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use vinyl_core::{RecordId, RecordSummary};
use vinyl_playback::{PlaybackError, TurntableEvent, TurntableView};

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    #[serde(flatten)]
    pub view: TurntableView,

    /// Events since the previous player response
    pub events: Vec<TurntableEvent>,
}

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    pub file_name: String,
}

#[derive(Debug, Serialize)]
pub struct AudioResponse {
    pub data_uri: String,
}

async fn respond(app_state: &AppState) -> Json<PlayerResponse> {
    let mut turntable = app_state.turntable.lock().await;
    Json(PlayerResponse {
        view: turntable.view(),
        events: turntable.drain_events(),
    })
}

/// GET /api/player - Current turntable view
pub async fn get_player(State(app_state): State<AppState>) -> Json<PlayerResponse> {
    respond(&app_state).await
}

/// POST /api/player/upload?file_name= - Put an uploaded audio file on the turntable
pub async fn upload(
    State(app_state): State<AppState>,
    params: std::result::Result<Query<UploadParams>, QueryRejection>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<PlayerResponse>> {
    let Query(params) = params?;
    let mime_type = content_type(&headers);

    app_state
        .turntable
        .lock()
        .await
        .load_upload(&params.file_name, &mime_type, body.to_vec())?;

    Ok(respond(&app_state).await)
}

/// POST /api/player/artwork - Replace album art with the uploaded image
pub async fn set_artwork(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<PlayerResponse>> {
    let mime_type = content_type(&headers);

    app_state
        .turntable
        .lock()
        .await
        .set_album_art(&mime_type, &body)?;

    Ok(respond(&app_state).await)
}

/// DELETE /api/player/artwork - Show the placeholder instead of album art
pub async fn clear_artwork(State(app_state): State<AppState>) -> Json<PlayerResponse> {
    app_state.turntable.lock().await.clear_album_art();
    respond(&app_state).await
}

/// POST /api/player/toggle - Drop or lift the needle
pub async fn toggle(State(app_state): State<AppState>) -> Result<Json<PlayerResponse>> {
    app_state.turntable.lock().await.toggle()?;
    Ok(respond(&app_state).await)
}

/// GET /api/player/audio - Audio for the media element
pub async fn audio(State(app_state): State<AppState>) -> Result<Json<AudioResponse>> {
    let data_uri = app_state
        .turntable
        .lock()
        .await
        .audio_data_uri()
        .ok_or(PlaybackError::NoSongLoaded)?;

    Ok(Json(AudioResponse { data_uri }))
}

/// POST /api/player/save - Save the current song to the collection
pub async fn save(
    State(app_state): State<AppState>,
) -> Result<(StatusCode, Json<RecordSummary>)> {
    // Held across the insert so a concurrent load cannot swap the song
    let mut turntable = app_state.turntable.lock().await;

    let new_record = turntable.prepare_record()?;
    let record = app_state.store.save_record(new_record).await?;
    turntable.mark_saved();

    Ok((StatusCode::CREATED, Json(record.summary())))
}

/// POST /api/player/load/:id - Put a saved record on the turntable
pub async fn load_record(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlayerResponse>> {
    let id: RecordId = id
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("Invalid record id: {id}")))?;

    let record = app_state
        .store
        .get_record(id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Record {id}")))?;

    app_state.turntable.lock().await.load_record(&record);

    Ok(respond(&app_state).await)
}
