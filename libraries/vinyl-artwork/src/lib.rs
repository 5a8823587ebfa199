//! Vinyl Artwork - embedded album-art extraction
//!
//! This library pulls the embedded picture (ID3v2 `APIC` frame) out of the
//! head of an MP3 file. The decoder itself is a pure function over a byte
//! buffer; [`ArtworkExtractor`] adds a bounded asynchronous file read and an
//! LRU cache in front of it.
//!
//! # Features
//!
//! - Hand-rolled ID3v2 header and APIC decoding, no panics on malformed input
//! - Bounded reads: only the first 100 KiB of a file are examined
//! - LRU caching for repeated lookups
//! - Base64 `data:` URIs for the web player
//!
//! # Example
//!
//! ```
//! use vinyl_artwork::{extract_album_art, id3::encode_synchsafe};
//!
//! let mut frame = b"APIC\0\0\0\0\0\0\0image/png\0\x03cover\0".to_vec();
//! frame.extend_from_slice(&[0x89, b'P', b'N', b'G']);
//!
//! let mut tag = b"ID3\x03\x00\x00".to_vec();
//! tag.extend_from_slice(&encode_synchsafe(frame.len() as u32));
//! tag.extend_from_slice(&frame);
//!
//! let art = extract_album_art(&tag).expect("tag carries a picture");
//! assert_eq!(art.mime_type, "image/png");
//! assert_eq!(art.data, [0x89, b'P', b'N', b'G']);
//! ```

mod error;
mod extractor;
pub mod id3;
mod types;

// Re-export public API
pub use error::{ArtworkError, Id3Error, Result};
pub use extractor::ArtworkExtractor;
pub use id3::{extract_album_art, parse_album_art, READ_WINDOW};
pub use types::{encode_data_uri, is_audio_mime, is_image_mime, ArtworkData, DEFAULT_MIME_TYPE};
