//! Vinyl Server Library
//!
//! HTTP backend for the virtual record player: album art extraction, the
//! turntable session, the saved record collection and player settings.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
