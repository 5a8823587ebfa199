use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during artwork extraction
#[derive(Debug, Error)]
pub enum ArtworkError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for artwork operations
pub type Result<T> = std::result::Result<T, ArtworkError>;

/// Why an ID3v2 buffer produced no album art
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Id3Error {
    /// Buffer does not start with an ID3v2 tag
    #[error("No ID3v2 tag")]
    NoTag,

    /// Tag present but no APIC frame or an empty picture payload
    #[error("No embedded artwork")]
    NoArt,

    /// Structural inconsistency inside the tag
    #[error("Malformed ID3v2 tag: {0}")]
    Malformed(&'static str),
}

impl From<ArtworkError> for vinyl_core::VinylError {
    fn from(err: ArtworkError) -> Self {
        match err {
            ArtworkError::FileNotFound(path) => {
                vinyl_core::VinylError::not_found("File", path.display().to_string())
            }
            ArtworkError::Io(e) => vinyl_core::VinylError::Io(e),
        }
    }
}
