/// Player settings API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use vinyl_core::{PlayerSettings, SettingsUpdate};

/// GET /api/settings - Current player settings
pub async fn get_settings(State(app_state): State<AppState>) -> Result<Json<PlayerSettings>> {
    let settings = app_state.store.load_settings().await?;
    Ok(Json(settings))
}

/// PUT /api/settings - Partially update settings
///
/// The result is persisted and applied to the turntable right away.
pub async fn update_settings(
    State(app_state): State<AppState>,
    update: std::result::Result<Json<SettingsUpdate>, JsonRejection>,
) -> Result<Json<PlayerSettings>> {
    let Json(update) = update?;
    let settings = if update.is_empty() {
        app_state.store.load_settings().await?
    } else {
        app_state.store.update_settings(update).await?
    };

    app_state.turntable.lock().await.apply_settings(&settings);

    Ok(Json(settings))
}
