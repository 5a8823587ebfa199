/// Server error types
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use vinyl_core::VinylError;
use vinyl_playback::PlaybackError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Collection error: {0}")]
    Collection(#[from] VinylError),

    #[error("Turntable error: {0}")]
    Turntable(#[from] PlaybackError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<vinyl_storage::StorageError> for ServerError {
    fn from(err: vinyl_storage::StorageError) -> Self {
        // Convert StorageError -> VinylError -> ServerError
        ServerError::Collection(err.into())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Turntable(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ServerError::Collection(e) => match e {
                VinylError::NotFound { .. } | VinylError::RecordNotFound(_) => {
                    (StatusCode::NOT_FOUND, e.to_string())
                }
                VinylError::Duplicate(_) => (
                    StatusCode::CONFLICT,
                    "This record is already saved!".to_string(),
                ),
                other => {
                    tracing::error!("Collection error: {:?}", other);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Collection error".to_string(),
                    )
                }
            },
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
