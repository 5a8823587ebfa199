//! Property-based tests for the ID3v2 decoder
//!
//! The decoder must never panic, whatever bytes it is handed, and must give
//! the same answer every time.

use proptest::prelude::*;
use vinyl_artwork::id3::{decode_synchsafe, encode_synchsafe};
use vinyl_artwork::{extract_album_art, parse_album_art};

/// Arbitrary bytes behind a valid-looking header, so the frame scan is exercised
fn tagged_bytes() -> impl Strategy<Value = Vec<u8>> {
    (
        prop::collection::vec(any::<u8>(), 0..512),
        0u32..1024,
        any::<bool>(),
    )
        .prop_map(|(body, declared_size, inject_apic)| {
            let mut bytes = b"ID3\x03\x00\x00".to_vec();
            bytes.extend_from_slice(&encode_synchsafe(declared_size));
            if inject_apic {
                bytes.extend_from_slice(b"APIC");
            }
            bytes.extend_from_slice(&body);
            bytes
        })
}

proptest! {
    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..2048)) {
        let _ = extract_album_art(&bytes);
    }

    #[test]
    fn tagged_bytes_never_panic_and_are_idempotent(bytes in tagged_bytes()) {
        let first = parse_album_art(&bytes);
        let second = parse_album_art(&bytes);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn extracted_payload_lies_inside_the_buffer(bytes in tagged_bytes()) {
        if let Some(art) = extract_album_art(&bytes) {
            prop_assert!(!art.data.is_empty());
            prop_assert!(art.data.len() < bytes.len());
        }
    }

    #[test]
    fn synchsafe_round_trip(value in 0u32..(1 << 28)) {
        prop_assert_eq!(decode_synchsafe(encode_synchsafe(value)), value);
    }

    #[test]
    fn non_id3_prefix_is_always_absent(mut bytes in prop::collection::vec(any::<u8>(), 3..256)) {
        if bytes.starts_with(b"ID3") {
            bytes[0] = b'X';
        }
        prop_assert!(extract_album_art(&bytes).is_none());
    }
}
