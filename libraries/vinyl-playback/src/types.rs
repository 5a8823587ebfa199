//! Core types for the turntable

use serde::{Deserialize, Serialize};
use vinyl_core::{AnimationSpeed, RecordId};

/// Where the current song's audio came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SongSource {
    /// Freshly uploaded file; the original bytes are kept for saving
    Upload { mime_type: String, bytes: Vec<u8> },

    /// Loaded from the collection; only the stored data URI is available
    Collection { record_id: RecordId, data_uri: String },
}

impl SongSource {
    pub fn is_upload(&self) -> bool {
        matches!(self, Self::Upload { .. })
    }
}

/// Deck state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckState {
    /// Needle up, nothing played since the song was loaded
    #[default]
    Idle,

    /// Needle down, record spinning
    Playing,

    /// Needle lifted after playing; music rewound to the start
    Paused,
}

/// Audio channels driven by the turntable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioChannel {
    Music,
    Crackle,
}

/// Everything the UI needs to render the turntable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurntableView {
    pub song_label: String,
    pub status_line: String,
    pub state: DeckState,
    pub tonearm_engaged: bool,
    pub record_spinning: bool,
    pub notes_animating: bool,

    /// Album art data URI, `None` shows the placeholder
    pub album_art: Option<String>,

    /// Whether the save button is offered
    pub can_save: bool,

    /// Set when the song was loaded from the collection
    pub record_id: Option<RecordId>,

    pub music_gain: f32,
    pub crackle_gain: f32,

    /// CSS class for the page body (`theme-<slug>`)
    pub theme_class: String,
    pub animation_speed: AnimationSpeed,
}
