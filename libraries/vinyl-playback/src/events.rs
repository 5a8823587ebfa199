//! Turntable events
//!
//! Emitted at every state mutation so a UI can sync without diffing views.
//! Collected in order and drained with `Turntable::drain_events`.

use serde::{Deserialize, Serialize};

use crate::types::{AudioChannel, DeckState};

/// Events emitted by the turntable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurntableEvent {
    /// A new song was put on the turntable
    SongLoaded {
        name: String,
        /// Whether the song can be saved to the collection
        can_save: bool,
    },

    /// Album art was set, replaced or cleared
    ArtworkChanged {
        /// Image data URI, `None` when cleared
        album_art: Option<String>,
    },

    /// Deck state changed (idle, playing, paused)
    StateChanged { state: DeckState },

    /// A channel should restart from the beginning
    Rewound { channel: AudioChannel },

    /// Volumes, theme or animation preferences changed
    SettingsApplied,
}
