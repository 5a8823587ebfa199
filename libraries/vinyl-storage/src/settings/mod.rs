//! Player settings management
//!
//! Settings are stored as key-value pairs with JSON-serialized values, so a
//! partial update only touches the keys it names and new settings need no
//! migration.
//!
//! # Example
//!
//! ```rust,no_run
//! use vinyl_storage::settings;
//! # async fn example(pool: &sqlx::SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//! // Set a theme preference
//! settings::set_setting(pool, settings::SETTING_THEME, &serde_json::json!("midnight")).await?;
//!
//! // Load the typed settings (defaults for anything unset)
//! let player = settings::load_player_settings(pool).await?;
//! assert_eq!(player.color_theme.as_str(), "midnight");
//! # Ok(())
//! # }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sqlx::{Row, SqliteConnection, SqlitePool};
use vinyl_core::{PlayerSettings, SettingsUpdate};

use crate::error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;

// Setting key constants
/// Music volume (0-100)
pub const SETTING_MUSIC_VOLUME: &str = "audio.music_volume";

/// Vinyl crackle volume (0-100)
pub const SETTING_CRACKLE_VOLUME: &str = "audio.crackle_volume";

/// Animation speed ("slow", "normal", "fast")
pub const SETTING_ANIMATION_SPEED: &str = "ui.animation_speed";

/// Whether the musical notes animate while playing
pub const SETTING_SHOW_NOTES: &str = "ui.show_notes";

/// Color theme slug (e.g. "default", "midnight")
pub const SETTING_THEME: &str = "ui.theme";

/// Setting entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    /// Setting key
    pub key: String,
    /// Setting value (JSON)
    pub value: serde_json::Value,
}

/// Get a single setting value
///
/// Returns `Ok(Some(value))` if the setting exists, `Ok(None)` if not found
///
/// # Errors
///
/// Returns an error if the database query fails or JSON deserialization fails
pub async fn get_setting(pool: &SqlitePool, key: &str) -> Result<Option<serde_json::Value>> {
    let stored: Option<String> = sqlx::query_scalar("SELECT value FROM settings WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    stored.map(|raw| parse_value(&raw)).transpose()
}

/// Set a setting value (insert or replace)
///
/// # Errors
///
/// Returns an error if the database query fails or JSON serialization fails
pub async fn set_setting(pool: &SqlitePool, key: &str, value: &serde_json::Value) -> Result<()> {
    let mut conn = pool.acquire().await?;
    upsert(&mut conn, key, value).await
}

/// Get all stored settings, ordered by key
///
/// # Errors
///
/// Returns an error if the database query fails or JSON deserialization fails
pub async fn get_all_settings(pool: &SqlitePool) -> Result<Vec<Setting>> {
    let mut conn = pool.acquire().await?;
    fetch_all(&mut conn).await
}

/// Delete a setting
///
/// Returns `Ok(true)` if a setting was deleted, `Ok(false)` if no setting was found
pub async fn delete_setting(pool: &SqlitePool, key: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM settings WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Load the typed player settings
///
/// Unset keys take their default. A stored value that no longer parses is
/// logged and replaced by the default instead of failing the whole load.
pub async fn load_player_settings(pool: &SqlitePool) -> Result<PlayerSettings> {
    Ok(player_settings_from(get_all_settings(pool).await?))
}

/// Persist every player setting in one transaction
pub async fn save_player_settings(pool: &SqlitePool, settings: &PlayerSettings) -> Result<()> {
    let update = SettingsUpdate {
        music_volume: Some(settings.music_volume),
        crackle_volume: Some(settings.crackle_volume),
        animation_speed: Some(settings.animation_speed),
        show_notes: Some(settings.show_notes),
        color_theme: Some(settings.color_theme.clone()),
    };

    let mut tx = pool.begin().await?;
    write_update(&mut tx, &update).await?;
    tx.commit().await?;

    Ok(())
}

/// Apply a partial update, writing only the named keys
///
/// The writes and the read-back share one transaction, so the update lands
/// completely or not at all. Returns the settings as they stand after it.
pub async fn update_player_settings(
    pool: &SqlitePool,
    update: &SettingsUpdate,
) -> Result<PlayerSettings> {
    let clamped = update.clamped();

    let mut tx = pool.begin().await?;
    // Writing first takes the write lock before anything is read
    write_update(&mut tx, &clamped).await?;
    let settings = player_settings_from(fetch_all(&mut tx).await?);
    tx.commit().await?;

    Ok(settings)
}

async fn upsert(conn: &mut SqliteConnection, key: &str, value: &serde_json::Value) -> Result<()> {
    let value_str = serde_json::to_string(value)
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO settings (key, value, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )
    .bind(key)
    .bind(value_str)
    .bind(now)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

async fn fetch_all(conn: &mut SqliteConnection) -> Result<Vec<Setting>> {
    let rows = sqlx::query("SELECT key, value FROM settings ORDER BY key")
        .fetch_all(&mut *conn)
        .await?;

    rows.iter()
        .map(|row| -> Result<Setting> {
            let raw: String = row.try_get("value")?;
            Ok(Setting {
                key: row.try_get("key")?,
                value: parse_value(&raw)?,
            })
        })
        .collect()
}

async fn write_update(conn: &mut SqliteConnection, update: &SettingsUpdate) -> Result<()> {
    if let Some(volume) = update.music_volume {
        upsert(conn, SETTING_MUSIC_VOLUME, &serde_json::json!(volume)).await?;
    }
    if let Some(volume) = update.crackle_volume {
        upsert(conn, SETTING_CRACKLE_VOLUME, &serde_json::json!(volume)).await?;
    }
    if let Some(speed) = update.animation_speed {
        upsert(conn, SETTING_ANIMATION_SPEED, &serde_json::json!(speed)).await?;
    }
    if let Some(show) = update.show_notes {
        upsert(conn, SETTING_SHOW_NOTES, &serde_json::json!(show)).await?;
    }
    if let Some(theme) = &update.color_theme {
        upsert(conn, SETTING_THEME, &serde_json::json!(theme)).await?;
    }
    Ok(())
}

fn player_settings_from(entries: Vec<Setting>) -> PlayerSettings {
    let defaults = PlayerSettings::default();
    let mut settings = defaults.clone();

    for Setting { key, value } in entries {
        match key.as_str() {
            SETTING_MUSIC_VOLUME => {
                settings.music_volume = typed(&key, value, defaults.music_volume).min(100);
            }
            SETTING_CRACKLE_VOLUME => {
                settings.crackle_volume = typed(&key, value, defaults.crackle_volume).min(100);
            }
            SETTING_ANIMATION_SPEED => {
                settings.animation_speed = typed(&key, value, defaults.animation_speed);
            }
            SETTING_SHOW_NOTES => {
                settings.show_notes = typed(&key, value, defaults.show_notes);
            }
            SETTING_THEME => {
                settings.color_theme = typed(&key, value, defaults.color_theme.clone());
            }
            _ => tracing::debug!(%key, "Ignoring unknown setting"),
        }
    }

    settings
}

fn parse_value(raw: &str) -> Result<serde_json::Value> {
    serde_json::from_str(raw).map_err(|e| StorageError::SerializationError(e.to_string()))
}

fn typed<T: DeserializeOwned>(key: &str, value: serde_json::Value, default: T) -> T {
    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::warn!(%key, error = %e, "Stored setting is invalid, using default");
        default
    })
}
