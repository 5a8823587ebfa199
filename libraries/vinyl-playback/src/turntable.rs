//! The turntable session
//!
//! One owned value holds the loaded song, deck state, album art and the
//! settings snapshot. Every change goes through a method here and leaves a
//! `TurntableEvent` behind.

use vinyl_artwork::{
    encode_data_uri, extract_album_art, is_audio_mime, is_image_mime, READ_WINDOW,
};
use vinyl_core::{AnimationSpeed, ColorTheme, NewRecord, PlayerSettings, Record};

use crate::error::{PlaybackError, Result};
use crate::events::TurntableEvent;
use crate::types::{AudioChannel, DeckState, SongSource, TurntableView};
use crate::volume::Volume;

pub const STATUS_IDLE: &str = "Click the needle to start playing";
pub const STATUS_PLAYING: &str = "🎵 Music is playing...";
pub const STATUS_PAUSED: &str = "⏸ Paused - Ready to drop the needle";
pub const LABEL_NO_SONG: &str = "No song loaded";
pub const LABEL_UNNAMED: &str = "Unnamed Song";

#[derive(Debug, Clone)]
struct LoadedSong {
    name: String,
    source: SongSource,
}

/// Turntable session state
#[derive(Debug)]
pub struct Turntable {
    song: Option<LoadedSong>,
    state: DeckState,
    album_art: Option<String>,
    can_save: bool,

    music: Volume,
    crackle: Volume,
    show_notes: bool,
    animation_speed: AnimationSpeed,
    color_theme: ColorTheme,

    events: Vec<TurntableEvent>,
}

impl Turntable {
    /// Create an empty turntable using `settings`
    pub fn new(settings: &PlayerSettings) -> Self {
        Self {
            song: None,
            state: DeckState::Idle,
            album_art: None,
            can_save: false,
            music: Volume::new(settings.music_volume),
            crackle: Volume::new(settings.crackle_volume),
            show_notes: settings.show_notes,
            animation_speed: settings.animation_speed,
            color_theme: settings.color_theme.clone(),
            events: Vec::new(),
        }
    }

    // ===== Loading =====

    /// Put an uploaded audio file on the turntable
    ///
    /// Stops playback, derives the song name from `file_name` and replaces
    /// the album art with whatever the file's ID3 tag embeds (or nothing).
    /// Returns whether embedded art was found.
    ///
    /// # Errors
    ///
    /// `PlaybackError::NotAudio` if `mime_type` is not `audio/*`
    pub fn load_upload(
        &mut self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<bool> {
        if !is_audio_mime(mime_type) {
            return Err(PlaybackError::NotAudio(mime_type.to_string()));
        }

        self.stop();

        let name = song_name_from_file_name(file_name);
        let head = &bytes[..bytes.len().min(READ_WINDOW)];
        let art = extract_album_art(head).map(|art| art.to_data_uri());
        let found = art.is_some();

        tracing::debug!(%name, size = bytes.len(), found_art = found, "Loaded upload");

        self.song = Some(LoadedSong {
            name: name.clone(),
            source: SongSource::Upload {
                mime_type: mime_type.to_string(),
                bytes,
            },
        });
        self.can_save = true;
        self.events.push(TurntableEvent::SongLoaded { name, can_save: true });
        self.replace_album_art(art);

        Ok(found)
    }

    /// Put a saved record on the turntable
    ///
    /// The record's own art (or none) replaces the current art. A record
    /// from the collection is not offered for saving again.
    pub fn load_record(&mut self, record: &Record) {
        self.stop();

        tracing::debug!(id = %record.id, name = %record.name, "Loaded record from collection");

        self.song = Some(LoadedSong {
            name: record.name.clone(),
            source: SongSource::Collection {
                record_id: record.id,
                data_uri: record.file_data.clone(),
            },
        });
        self.can_save = false;
        self.events.push(TurntableEvent::SongLoaded {
            name: record.name.clone(),
            can_save: false,
        });
        self.replace_album_art(record.album_art.clone());
    }

    // ===== Album art =====

    /// Replace the album art with an uploaded image
    ///
    /// # Errors
    ///
    /// `PlaybackError::NotImage` if `mime_type` is not `image/*`
    pub fn set_album_art(&mut self, mime_type: &str, bytes: &[u8]) -> Result<()> {
        if !is_image_mime(mime_type) {
            return Err(PlaybackError::NotImage(mime_type.to_string()));
        }

        self.replace_album_art(Some(encode_data_uri(mime_type, bytes)));
        Ok(())
    }

    /// Show the placeholder instead of album art
    pub fn clear_album_art(&mut self) {
        self.replace_album_art(None);
    }

    fn replace_album_art(&mut self, album_art: Option<String>) {
        self.album_art.clone_from(&album_art);
        self.events.push(TurntableEvent::ArtworkChanged { album_art });
    }

    // ===== Playback =====

    /// Drop or lift the needle
    ///
    /// Dropping restarts the crackle from the beginning. Lifting rewinds the
    /// music so the next drop starts the song over.
    ///
    /// # Errors
    ///
    /// `PlaybackError::NoSongLoaded` if nothing is on the turntable
    pub fn toggle(&mut self) -> Result<DeckState> {
        if self.song.is_none() {
            return Err(PlaybackError::NoSongLoaded);
        }

        if self.state == DeckState::Playing {
            self.set_state(DeckState::Paused);
            self.events.push(TurntableEvent::Rewound {
                channel: AudioChannel::Music,
            });
        } else {
            self.set_state(DeckState::Playing);
            self.events.push(TurntableEvent::Rewound {
                channel: AudioChannel::Crackle,
            });
        }

        Ok(self.state)
    }

    fn stop(&mut self) {
        if self.state != DeckState::Idle {
            self.set_state(DeckState::Idle);
        }
    }

    fn set_state(&mut self, state: DeckState) {
        self.state = state;
        self.events.push(TurntableEvent::StateChanged { state });
    }

    // ===== Collection =====

    /// Build the record to save for the current song
    ///
    /// The audio is re-encoded from the uploaded bytes as a data URI.
    ///
    /// # Errors
    ///
    /// - `PlaybackError::NoSongLoaded` if there is no song or it has no name
    /// - `PlaybackError::SourceUnavailable` if the song came from the
    ///   collection and its upload is no longer held
    pub fn prepare_record(&self) -> Result<NewRecord> {
        let song = self
            .song
            .as_ref()
            .filter(|song| !song.name.is_empty())
            .ok_or(PlaybackError::NoSongLoaded)?;

        match &song.source {
            SongSource::Upload { mime_type, bytes } => {
                let record = NewRecord::new(song.name.clone(), encode_data_uri(mime_type, bytes));
                Ok(match &self.album_art {
                    Some(art) => record.with_album_art(art.clone()),
                    None => record,
                })
            }
            SongSource::Collection { .. } => Err(PlaybackError::SourceUnavailable),
        }
    }

    /// Record that the current song is now in the collection
    pub fn mark_saved(&mut self) {
        self.can_save = false;
    }

    // ===== Settings =====

    pub fn apply_settings(&mut self, settings: &PlayerSettings) {
        self.music.set_level(settings.music_volume);
        self.crackle.set_level(settings.crackle_volume);
        self.show_notes = settings.show_notes;
        self.animation_speed = settings.animation_speed;
        self.color_theme = settings.color_theme.clone();
        self.events.push(TurntableEvent::SettingsApplied);
    }

    // ===== Queries =====

    pub fn state(&self) -> DeckState {
        self.state
    }

    pub fn song_name(&self) -> Option<&str> {
        self.song.as_ref().map(|song| song.name.as_str())
    }

    pub fn source(&self) -> Option<&SongSource> {
        self.song.as_ref().map(|song| &song.source)
    }

    /// Audio for the media element as a data URI
    pub fn audio_data_uri(&self) -> Option<String> {
        self.source().map(|source| match source {
            SongSource::Upload { mime_type, bytes } => encode_data_uri(mime_type, bytes),
            SongSource::Collection { data_uri, .. } => data_uri.clone(),
        })
    }

    pub fn view(&self) -> TurntableView {
        let name = self.song_name().unwrap_or_default();
        let engaged = self.state == DeckState::Playing;

        let (song_label, status_line) = match self.state {
            DeckState::Idle => (or_default_label(name, LABEL_NO_SONG), STATUS_IDLE),
            DeckState::Playing => (or_default_label(name, LABEL_UNNAMED), STATUS_PLAYING),
            DeckState::Paused => (or_default_label(name, LABEL_UNNAMED), STATUS_PAUSED),
        };

        TurntableView {
            song_label,
            status_line: status_line.to_string(),
            state: self.state,
            tonearm_engaged: engaged,
            record_spinning: engaged,
            notes_animating: engaged && self.show_notes,
            album_art: self.album_art.clone(),
            can_save: self.can_save,
            record_id: match self.source() {
                Some(SongSource::Collection { record_id, .. }) => Some(*record_id),
                _ => None,
            },
            music_gain: self.music.gain(),
            crackle_gain: self.crackle.gain(),
            theme_class: self.color_theme.css_class(),
            animation_speed: self.animation_speed,
        }
    }

    /// Take every event emitted since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<TurntableEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for Turntable {
    fn default() -> Self {
        Self::new(&PlayerSettings::default())
    }
}

fn or_default_label(name: &str, fallback: &str) -> String {
    if name.is_empty() {
        fallback.to_string()
    } else {
        name.to_string()
    }
}

/// Display name for an uploaded file
///
/// Removes the first `.mp3`, then one trailing extension.
///
/// ```
/// use vinyl_playback::song_name_from_file_name;
///
/// assert_eq!(song_name_from_file_name("Blue Monday.mp3"), "Blue Monday");
/// assert_eq!(song_name_from_file_name("track.flac"), "track");
/// assert_eq!(song_name_from_file_name("a.mp3.bak"), "a");
/// ```
pub fn song_name_from_file_name(file_name: &str) -> String {
    let mut name = file_name.replacen(".mp3", "", 1);

    if let Some(dot) = name.rfind('.') {
        let extension = &name[dot + 1..];
        if !extension.is_empty() && !extension.contains('/') {
            name.truncate(dot);
        }
    }

    name
}
