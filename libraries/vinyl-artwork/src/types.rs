use base64::{engine::general_purpose::STANDARD, Engine as _};

/// MIME type assumed when an APIC frame leaves it blank
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Artwork data extracted from an audio file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkData {
    /// Raw image bytes
    pub data: Vec<u8>,
    /// MIME type (e.g., "image/jpeg", "image/png")
    pub mime_type: String,
}

impl ArtworkData {
    /// Create new artwork data
    pub fn new(data: Vec<u8>, mime_type: String) -> Self {
        Self { data, mime_type }
    }

    /// Get the data as a base64-encoded string
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }

    /// Get the data as a `data:` URI suitable for an `<img src>`
    pub fn to_data_uri(&self) -> String {
        encode_data_uri(&self.mime_type, &self.data)
    }
}

/// Encode bytes as a base64 `data:` URI
pub fn encode_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Whether a MIME type names an image (`image/*`)
pub fn is_image_mime(mime_type: &str) -> bool {
    has_top_level_type(mime_type, "image")
}

/// Whether a MIME type names audio (`audio/*`)
pub fn is_audio_mime(mime_type: &str) -> bool {
    has_top_level_type(mime_type, "audio")
}

fn has_top_level_type(mime_type: &str, top: &str) -> bool {
    mime_type
        .trim()
        .split_once('/')
        .is_some_and(|(t, sub)| t.eq_ignore_ascii_case(top) && !sub.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_format() {
        let art = ArtworkData::new(vec![0xFF, 0xD8, 0xFF], "image/jpeg".to_string());
        assert_eq!(art.to_base64(), "/9j/");
        assert_eq!(art.to_data_uri(), "data:image/jpeg;base64,/9j/");
    }

    #[test]
    fn mime_classification() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("IMAGE/JPEG"));
        assert!(!is_image_mime("image/"));
        assert!(!is_image_mime("audio/mpeg"));
        assert!(is_audio_mime("audio/mpeg"));
        assert!(!is_audio_mime("application/octet-stream"));
        assert!(!is_audio_mime("audiofile"));
    }
}
