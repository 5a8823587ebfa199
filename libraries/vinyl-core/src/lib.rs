//! Vinyl Player Core
//!
//! Platform-agnostic domain types, traits, and error handling for Vinyl Player.
//!
//! This crate provides the building blocks shared by the artwork decoder,
//! the collection store, the turntable, and the server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Record`, `RecordId`, `PlayerSettings`, etc.
//! - **Core Traits**: `RecordStore`
//! - **Error Handling**: Unified `VinylError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use vinyl_core::types::{AnimationSpeed, NewRecord, PlayerSettings};
//!
//! let record = NewRecord::new("Blue Monday", "data:audio/mpeg;base64,AAAA");
//! assert!(record.album_art.is_none());
//!
//! let settings = PlayerSettings::default();
//! assert_eq!(settings.music_volume, 70);
//! assert_eq!(settings.animation_speed, AnimationSpeed::Normal);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, VinylError};
pub use storage::RecordStore;

pub use types::{
    AnimationSpeed, ColorTheme, NewRecord, PlayerSettings, Record, RecordId, RecordSummary,
    SettingsUpdate,
};
