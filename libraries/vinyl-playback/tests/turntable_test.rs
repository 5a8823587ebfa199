//! Turntable session behaviour across loads, toggles and saves

use vinyl_artwork::id3::encode_synchsafe;
use vinyl_core::{AnimationSpeed, ColorTheme, PlayerSettings, Record, RecordId};
use vinyl_playback::{
    AudioChannel, DeckState, PlaybackError, SongSource, Turntable, TurntableEvent,
};

// ===== Helpers =====

fn tagged_mp3(image: &[u8]) -> Vec<u8> {
    let mut region = b"APIC\x00\x00\x00\x00\x00\x00\x00image/png\x00\x03\x00".to_vec();
    region.extend_from_slice(image);

    let mut bytes = b"ID3\x03\x00\x00".to_vec();
    bytes.extend_from_slice(&encode_synchsafe(region.len() as u32));
    bytes.extend_from_slice(&region);
    bytes.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x64]);
    bytes
}

fn saved_record(album_art: Option<&str>) -> Record {
    Record {
        id: RecordId::new(1_767_225_600_000),
        name: "From The Shelf".to_string(),
        date_added: "2026-01-01".to_string(),
        file_data: "data:audio/mpeg;base64,SUQz".to_string(),
        album_art: album_art.map(str::to_string),
    }
}

// ===== Loading =====

#[test]
fn upload_extracts_embedded_art() {
    let mut turntable = Turntable::default();

    let found = turntable
        .load_upload("Cover Me.mp3", "audio/mpeg", tagged_mp3(&[0x89, 0x50, 0x4E, 0x47]))
        .unwrap();

    assert!(found);
    let view = turntable.view();
    assert_eq!(view.song_label, "Cover Me");
    assert_eq!(view.status_line, "Click the needle to start playing");
    assert_eq!(view.album_art.as_deref(), Some("data:image/png;base64,iVBORw=="));
    assert!(view.can_save);
    assert!(view.record_id.is_none());
}

#[test]
fn upload_without_art_clears_previous_art() {
    let mut turntable = Turntable::default();
    turntable.set_album_art("image/jpeg", &[1, 2, 3]).unwrap();

    let found = turntable
        .load_upload("plain.mp3", "audio/mpeg", vec![0xFF, 0xFB, 0x90])
        .unwrap();

    assert!(!found);
    assert!(turntable.view().album_art.is_none());
}

#[test]
fn upload_rejects_non_audio() {
    let mut turntable = Turntable::default();

    let result = turntable.load_upload("cover.jpg", "image/jpeg", vec![0xFF, 0xD8]);

    assert_eq!(result, Err(PlaybackError::NotAudio("image/jpeg".to_string())));
    assert!(turntable.song_name().is_none());
}

#[test]
fn loading_stops_playback() {
    let mut turntable = Turntable::default();
    turntable.load_upload("one.mp3", "audio/mpeg", vec![1]).unwrap();
    turntable.toggle().unwrap();

    turntable.load_upload("two.mp3", "audio/mpeg", vec![2]).unwrap();

    let view = turntable.view();
    assert_eq!(view.state, DeckState::Idle);
    assert!(!view.record_spinning);
    assert_eq!(view.song_label, "two");

    turntable.toggle().unwrap();
    turntable.load_record(&saved_record(None));
    assert_eq!(turntable.state(), DeckState::Idle);
}

#[test]
fn record_from_collection() {
    let mut turntable = Turntable::default();
    turntable.load_upload("fresh.mp3", "audio/mpeg", vec![1]).unwrap();

    let record = saved_record(Some("data:image/jpeg;base64,/9j/"));
    turntable.load_record(&record);

    let view = turntable.view();
    assert_eq!(view.song_label, "From The Shelf");
    assert_eq!(view.album_art, record.album_art);
    assert_eq!(view.record_id, Some(record.id));
    assert!(!view.can_save);
    assert_eq!(turntable.audio_data_uri().as_deref(), Some("data:audio/mpeg;base64,SUQz"));

    turntable.load_record(&saved_record(None));
    assert!(turntable.view().album_art.is_none());
}

// ===== Album art =====

#[test]
fn album_art_upload_must_be_image() {
    let mut turntable = Turntable::default();

    assert_eq!(
        turntable.set_album_art("text/plain", b"hello"),
        Err(PlaybackError::NotImage("text/plain".to_string()))
    );

    turntable.set_album_art("image/gif", b"GIF89a").unwrap();
    assert_eq!(
        turntable.view().album_art.as_deref(),
        Some("data:image/gif;base64,R0lGODlh")
    );

    turntable.clear_album_art();
    assert!(turntable.view().album_art.is_none());
}

// ===== Playback =====

#[test]
fn toggle_cycle() {
    let mut turntable = Turntable::default();
    turntable.load_upload("", "audio/mpeg", vec![1]).unwrap();
    turntable.drain_events();

    assert_eq!(turntable.toggle().unwrap(), DeckState::Playing);
    let view = turntable.view();
    assert_eq!(view.song_label, "Unnamed Song");
    assert_eq!(view.status_line, "🎵 Music is playing...");
    assert!(view.tonearm_engaged && view.record_spinning && view.notes_animating);

    assert_eq!(turntable.toggle().unwrap(), DeckState::Paused);
    let view = turntable.view();
    assert_eq!(view.status_line, "⏸ Paused - Ready to drop the needle");
    assert!(!view.tonearm_engaged && !view.record_spinning && !view.notes_animating);

    assert_eq!(
        turntable.drain_events(),
        vec![
            TurntableEvent::StateChanged {
                state: DeckState::Playing
            },
            TurntableEvent::Rewound {
                channel: AudioChannel::Crackle
            },
            TurntableEvent::StateChanged {
                state: DeckState::Paused
            },
            TurntableEvent::Rewound {
                channel: AudioChannel::Music
            },
        ]
    );
}

#[test]
fn notes_hidden_when_disabled() {
    let settings = PlayerSettings {
        show_notes: false,
        ..PlayerSettings::default()
    };
    let mut turntable = Turntable::new(&settings);
    turntable.load_upload("song.mp3", "audio/mpeg", vec![1]).unwrap();
    turntable.toggle().unwrap();

    let view = turntable.view();
    assert!(view.record_spinning);
    assert!(!view.notes_animating);
}

// ===== Saving =====

#[test]
fn prepare_record_reencodes_upload() {
    let mut turntable = Turntable::default();
    turntable
        .load_upload("Keeper.mp3", "audio/mpeg", b"ID3".to_vec())
        .unwrap();
    turntable.set_album_art("image/png", &[0x89]).unwrap();

    let record = turntable.prepare_record().unwrap();

    assert_eq!(record.name, "Keeper");
    assert_eq!(record.file_data, "data:audio/mpeg;base64,SUQz");
    assert_eq!(record.album_art.as_deref(), Some("data:image/png;base64,iQ=="));

    turntable.mark_saved();
    assert!(!turntable.view().can_save);
}

#[test]
fn prepare_record_errors() {
    let mut turntable = Turntable::default();
    assert_eq!(turntable.prepare_record(), Err(PlaybackError::NoSongLoaded));

    turntable.load_upload(".mp3", "audio/mpeg", vec![1]).unwrap();
    assert_eq!(turntable.prepare_record(), Err(PlaybackError::NoSongLoaded));

    turntable.load_record(&saved_record(None));
    assert_eq!(turntable.prepare_record(), Err(PlaybackError::SourceUnavailable));
    assert!(matches!(turntable.source(), Some(SongSource::Collection { .. })));
}

// ===== Settings =====

#[test]
fn settings_flow_into_view() {
    let mut turntable = Turntable::default();

    turntable.apply_settings(&PlayerSettings {
        music_volume: 100,
        crackle_volume: 0,
        animation_speed: AnimationSpeed::Fast,
        show_notes: true,
        color_theme: ColorTheme::parse("sunset").unwrap(),
    });

    let view = turntable.view();
    assert!((view.music_gain - 1.0).abs() < f32::EPSILON);
    assert_eq!(view.crackle_gain, 0.0);
    assert_eq!(view.animation_speed, AnimationSpeed::Fast);
    assert_eq!(view.theme_class, "theme-sunset");
    assert_eq!(turntable.drain_events(), vec![TurntableEvent::SettingsApplied]);
}

#[test]
fn view_serializes_for_the_web_ui() {
    let view = Turntable::default().view();
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["state"], "idle");
    assert_eq!(json["animation_speed"], "normal");
    assert_eq!(json["album_art"], serde_json::Value::Null);
}
