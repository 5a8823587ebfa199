/// API route modules
pub mod artwork;
pub mod health;
pub mod player;
pub mod records;
pub mod settings;

use axum::http::{header, HeaderMap};

/// Media type from `Content-Type`, without parameters
pub(crate) fn content_type(headers: &HeaderMap) -> String {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|value| value.trim().to_ascii_lowercase())
        .unwrap_or_default()
}
