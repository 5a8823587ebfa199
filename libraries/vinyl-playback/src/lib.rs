//! Vinyl Player - Turntable
//!
//! Platform-agnostic turntable session state.
//!
//! This crate provides:
//! - The loaded song (uploaded file or saved record) and its album art
//! - Needle up / needle down with the matching status text
//! - Music and crackle volumes (linear, 0-100%)
//! - Preparing the current song for the collection
//! - Events for UI synchronization
//!
//! # Architecture
//!
//! `vinyl-playback` decodes no audio and owns no output device. The browser
//! plays the audio; the turntable decides what it should be doing. There is
//! no global state: the application owns one [`Turntable`] and mutates it
//! through its methods.
//!
//! # Example
//!
//! ```rust
//! use vinyl_playback::{DeckState, Turntable, TurntableEvent};
//!
//! let mut turntable = Turntable::default();
//!
//! turntable
//!     .load_upload("Blue Monday.mp3", "audio/mpeg", vec![0xFF, 0xFB, 0x90, 0x64])
//!     .unwrap();
//! assert_eq!(turntable.toggle().unwrap(), DeckState::Playing);
//!
//! let view = turntable.view();
//! assert_eq!(view.song_label, "Blue Monday");
//! assert!(view.tonearm_engaged);
//!
//! let events = turntable.drain_events();
//! assert!(matches!(events[0], TurntableEvent::SongLoaded { .. }));
//! ```

pub mod error;
pub mod events;
pub mod turntable;
pub mod types;
pub mod volume;

pub use error::{PlaybackError, Result};
pub use events::TurntableEvent;
pub use turntable::{song_name_from_file_name, Turntable};
pub use types::{AudioChannel, DeckState, SongSource, TurntableView};
pub use volume::Volume;
