//! Property-based tests for the turntable
//!
//! Uses proptest to verify invariants across arbitrary uploads and
//! operation sequences.

use proptest::prelude::*;
use vinyl_playback::{song_name_from_file_name, DeckState, Turntable};

#[derive(Debug, Clone)]
enum Op {
    Upload(Vec<u8>),
    Toggle,
    ClearArt,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..256).prop_map(Op::Upload),
        Just(Op::Toggle),
        Just(Op::ClearArt),
    ]
}

proptest! {
    #[test]
    fn song_name_never_longer_than_file_name(file_name in ".{0,40}") {
        let name = song_name_from_file_name(&file_name);
        prop_assert!(name.len() <= file_name.len());
    }

    #[test]
    fn song_name_has_no_trailing_extension(stem in "[A-Za-z ]{1,20}", ext in "[a-z0-9]{1,4}") {
        let name = song_name_from_file_name(&format!("{stem}.{ext}"));
        prop_assert_eq!(name, stem);
    }

    #[test]
    fn arbitrary_uploads_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..1024)) {
        let mut turntable = Turntable::default();
        turntable.load_upload("fuzz.mp3", "audio/mpeg", bytes).unwrap();
        prop_assert_eq!(turntable.view().song_label, "fuzz");
    }

    #[test]
    fn view_is_consistent_with_state(ops in prop::collection::vec(arbitrary_op(), 0..30)) {
        let mut turntable = Turntable::default();

        for op in ops {
            match op {
                Op::Upload(bytes) => {
                    turntable.load_upload("song.mp3", "audio/mpeg", bytes).unwrap();
                }
                Op::Toggle => {
                    let _ = turntable.toggle();
                }
                Op::ClearArt => turntable.clear_album_art(),
            }

            let view = turntable.view();
            let playing = turntable.state() == DeckState::Playing;
            prop_assert_eq!(view.tonearm_engaged, playing);
            prop_assert_eq!(view.record_spinning, playing);
            if turntable.song_name().is_none() {
                prop_assert_eq!(turntable.state(), DeckState::Idle);
            }
        }
    }
}
