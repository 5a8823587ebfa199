//! Error types for turntable operations

use thiserror::Error;

/// Turntable errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    /// No song is on the turntable
    #[error("Please load a song first")]
    NoSongLoaded,

    /// Upload was not audio
    #[error("Please upload an audio file (got {0:?})")]
    NotAudio(String),

    /// Album art upload was not an image
    #[error("Please upload an image file (got {0:?})")]
    NotImage(String),

    /// The song's original bytes are no longer available
    #[error("Please upload the file again")]
    SourceUnavailable,
}

/// Result type for turntable operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
