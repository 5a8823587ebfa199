//! Saved record types

use serde::{Deserialize, Serialize};

use super::RecordId;

/// A track saved to the user's collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,

    /// Display name derived from the uploaded file name (unique)
    pub name: String,

    /// Calendar date the record was saved (`YYYY-MM-DD`)
    pub date_added: String,

    /// The original audio file as a base64 data URI
    pub file_data: String,

    /// Album art as an image data URI
    pub album_art: Option<String>,
}

impl Record {
    /// Listing view of this record
    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            id: self.id,
            name: self.name.clone(),
            date_added: self.date_added.clone(),
            album_art: self.album_art.clone(),
        }
    }
}

/// Record listing without the audio payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub id: RecordId,
    pub name: String,
    pub date_added: String,
    pub album_art: Option<String>,
}

/// Data for saving a new record; id and date are assigned by storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub name: String,
    pub file_data: String,
    pub album_art: Option<String>,
}

impl NewRecord {
    pub fn new(name: impl Into<String>, file_data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_data: file_data.into(),
            album_art: None,
        }
    }

    /// Attach album art
    #[must_use]
    pub fn with_album_art(mut self, album_art: impl Into<String>) -> Self {
        self.album_art = Some(album_art.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_drops_file_data() {
        let record = Record {
            id: RecordId::new(1),
            name: "Song".to_string(),
            date_added: "2026-01-02".to_string(),
            file_data: "data:audio/mpeg;base64,AAAA".to_string(),
            album_art: Some("data:image/png;base64,iVBO".to_string()),
        };

        let summary = record.summary();
        assert_eq!(summary.id, record.id);
        assert_eq!(summary.name, "Song");
        assert_eq!(summary.album_art, record.album_art);

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("file_data").is_none());
    }

    #[test]
    fn new_record_builder() {
        let record = NewRecord::new("Song", "data:audio/mpeg;base64,AAAA")
            .with_album_art("data:image/jpeg;base64,/9j/");
        assert_eq!(record.album_art.as_deref(), Some("data:image/jpeg;base64,/9j/"));
    }
}
