//! ID3v2 album-art decoding
//!
//! A linear scan over the head of an MP3 file: validate the 10-byte tag
//! header, slice the frame region, locate the first `APIC` frame and peel
//! off its encoding byte, MIME string, picture type and description. What
//! remains of the frame region is the picture payload.
//!
//! The APIC sub-frame size is not consulted; the payload runs to the end of
//! the frame region. Every out-of-bounds cursor or missing terminator is a
//! [`Id3Error::Malformed`] value, never a panic.

use crate::error::Id3Error;
use crate::types::{ArtworkData, DEFAULT_MIME_TYPE};

/// How much of a file is read when looking for a tag (100 KiB)
pub const READ_WINDOW: usize = 100 * 1024;

/// Length of the tag header ("ID3" + version + revision + flags + size)
pub const HEADER_LEN: usize = 10;

/// Frame id (4) + size (4) + flags (2)
const FRAME_HEADER_LEN: usize = 10;

const TAG_MAGIC: &[u8; 3] = b"ID3";
const APIC_ID: &[u8; 4] = b"APIC";

/// Decode a 28-bit synchsafe integer (7 significant bits per byte, big-endian)
pub fn decode_synchsafe(bytes: [u8; 4]) -> u32 {
    (u32::from(bytes[0] & 0x7F) << 21)
        | (u32::from(bytes[1] & 0x7F) << 14)
        | (u32::from(bytes[2] & 0x7F) << 7)
        | u32::from(bytes[3] & 0x7F)
}

/// Encode a value as a synchsafe integer; bits above 28 are dropped
pub fn encode_synchsafe(value: u32) -> [u8; 4] {
    [
        ((value >> 21) & 0x7F) as u8,
        ((value >> 14) & 0x7F) as u8,
        ((value >> 7) & 0x7F) as u8,
        (value & 0x7F) as u8,
    ]
}

/// Fixed 10-byte ID3v2 tag header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagHeader {
    pub major_version: u8,
    pub revision: u8,
    pub flags: u8,
    /// Size of the tag body, excluding this header
    pub size: u32,
}

impl TagHeader {
    /// Parse the header at the start of `bytes`
    pub fn parse(bytes: &[u8]) -> Result<Self, Id3Error> {
        if !bytes.starts_with(TAG_MAGIC) {
            return Err(Id3Error::NoTag);
        }

        let header = bytes
            .get(..HEADER_LEN)
            .ok_or(Id3Error::Malformed("truncated tag header"))?;

        Ok(Self {
            major_version: header[3],
            revision: header[4],
            flags: header[5],
            size: decode_synchsafe([header[6], header[7], header[8], header[9]]),
        })
    }

    /// Offset one past the last byte of the frame region
    pub fn frame_region_end(&self) -> usize {
        HEADER_LEN + self.size as usize
    }
}

/// Decode the first embedded picture, reporting why none was produced
pub fn parse_album_art(bytes: &[u8]) -> Result<ArtworkData, Id3Error> {
    let header = TagHeader::parse(bytes)?;

    let region = bytes
        .get(HEADER_LEN..header.frame_region_end())
        .ok_or(Id3Error::Malformed("tag size exceeds buffer"))?;

    let frame_start = region
        .windows(APIC_ID.len())
        .position(|window| window == APIC_ID)
        .ok_or(Id3Error::NoArt)?;

    // Skip the frame header and the text-encoding byte
    let pos = frame_start + FRAME_HEADER_LEN + 1;
    let (mime, pos) =
        read_terminated(region, pos).ok_or(Id3Error::Malformed("unterminated MIME type"))?;

    // Skip the picture-type byte
    let (_description, pos) = read_terminated(region, pos + 1)
        .ok_or(Id3Error::Malformed("unterminated description"))?;

    let payload = region
        .get(pos..)
        .ok_or(Id3Error::Malformed("picture data out of bounds"))?;
    if payload.is_empty() {
        return Err(Id3Error::NoArt);
    }

    let mime_type = if mime.is_empty() {
        DEFAULT_MIME_TYPE.to_string()
    } else {
        mime.iter().copied().map(char::from).collect()
    };

    Ok(ArtworkData::new(payload.to_vec(), mime_type))
}

/// Decode the first embedded picture, or `None` if there is none
///
/// Malformed tags are treated the same as tags without art.
pub fn extract_album_art(bytes: &[u8]) -> Option<ArtworkData> {
    match parse_album_art(bytes) {
        Ok(artwork) => {
            tracing::debug!(
                mime_type = %artwork.mime_type,
                size = artwork.data.len(),
                "Extracted embedded album art"
            );
            Some(artwork)
        }
        Err(Id3Error::Malformed(reason)) => {
            tracing::debug!(reason, "Ignoring malformed ID3v2 tag");
            None
        }
        Err(reason) => {
            tracing::debug!(%reason, "No album art found in ID3 tags");
            None
        }
    }
}

/// Bytes from `start` up to the next NUL, plus the offset just past the NUL
fn read_terminated(region: &[u8], start: usize) -> Option<(&[u8], usize)> {
    let rest = region.get(start..)?;
    let len = rest.iter().position(|&b| b == 0)?;
    Some((&rest[..len], start + len + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synchsafe_decodes_seven_bit_groups() {
        assert_eq!(decode_synchsafe([0x00, 0x00, 0x02, 0x01]), 257);
        assert_eq!(decode_synchsafe([0x7F, 0x7F, 0x7F, 0x7F]), 0x0FFF_FFFF);
    }

    #[test]
    fn synchsafe_ignores_high_bits() {
        assert_eq!(decode_synchsafe([0x80, 0x80, 0x82, 0x81]), 257);
    }

    #[test]
    fn synchsafe_encode_inverts_decode() {
        for value in [0, 1, 127, 128, 257, 100 * 1024, 0x0FFF_FFFF] {
            assert_eq!(decode_synchsafe(encode_synchsafe(value)), value);
        }
        assert!(encode_synchsafe(0x0FFF_FFFF).iter().all(|b| b & 0x80 == 0));
    }

    #[test]
    fn header_fields() {
        let bytes = [b'I', b'D', b'3', 4, 0, 0x40, 0x00, 0x00, 0x02, 0x01];
        let header = TagHeader::parse(&bytes).unwrap();
        assert_eq!(header.major_version, 4);
        assert_eq!(header.revision, 0);
        assert_eq!(header.flags, 0x40);
        assert_eq!(header.size, 257);
        assert_eq!(header.frame_region_end(), 267);
    }

    #[test]
    fn header_without_magic_is_no_tag() {
        assert_eq!(TagHeader::parse(b"RIFF....WAVE"), Err(Id3Error::NoTag));
        assert_eq!(TagHeader::parse(b""), Err(Id3Error::NoTag));
        assert_eq!(TagHeader::parse(b"ID"), Err(Id3Error::NoTag));
    }

    #[test]
    fn truncated_header_is_malformed() {
        assert!(matches!(
            TagHeader::parse(b"ID3\x03\x00"),
            Err(Id3Error::Malformed(_))
        ));
    }

    #[test]
    fn read_terminated_stops_at_nul() {
        let region = b"abc\0def\0";
        assert_eq!(read_terminated(region, 0), Some((&b"abc"[..], 4)));
        assert_eq!(read_terminated(region, 4), Some((&b"def"[..], 8)));
        assert_eq!(read_terminated(region, 8), None);
        assert_eq!(read_terminated(region, 100), None);
        assert_eq!(read_terminated(b"abc", 0), None);
    }
}
