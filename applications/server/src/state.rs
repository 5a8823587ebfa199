/// Shared application state
use std::sync::Arc;
use tokio::sync::Mutex;
use vinyl_artwork::ArtworkExtractor;
use vinyl_core::{PlayerSettings, RecordStore};
use vinyl_playback::Turntable;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub turntable: Arc<Mutex<Turntable>>,
    pub artwork: Arc<ArtworkExtractor>,
}

impl AppState {
    /// Build the state with a turntable configured from `settings`
    pub fn new(
        store: Arc<dyn RecordStore>,
        settings: &PlayerSettings,
        artwork: Arc<ArtworkExtractor>,
    ) -> Self {
        Self {
            store,
            turntable: Arc::new(Mutex::new(Turntable::new(settings))),
            artwork,
        }
    }
}
