//! Storage trait for the record collection

use crate::error::Result;
use crate::types::{NewRecord, PlayerSettings, Record, RecordId, RecordSummary, SettingsUpdate};
use async_trait::async_trait;

/// Persistent collection of saved records plus player preferences
///
/// This trait abstracts storage operations so the server can run against
/// the local `SQLite` store or a test double.
#[async_trait]
pub trait RecordStore: Send + Sync {
    // ========================================================================
    // Records
    // ========================================================================

    /// Get all records, newest first
    async fn get_all_records(&self) -> Result<Vec<Record>>;

    /// Get record listings (no audio payload), newest first
    async fn get_record_summaries(&self) -> Result<Vec<RecordSummary>>;

    /// Get record by ID
    async fn get_record(&self, id: RecordId) -> Result<Option<Record>>;

    /// Save a new record
    ///
    /// Fails with `VinylError::Duplicate` if a record with the same name exists.
    async fn save_record(&self, record: NewRecord) -> Result<Record>;

    /// Delete a record, returning whether it existed
    async fn delete_record(&self, id: RecordId) -> Result<bool>;

    /// Delete every record, returning how many were removed
    async fn clear_records(&self) -> Result<u64>;

    /// Number of records in the collection
    async fn count_records(&self) -> Result<i64>;

    // ========================================================================
    // Settings
    // ========================================================================

    /// Load player settings (defaults for anything never saved)
    async fn load_settings(&self) -> Result<PlayerSettings>;

    /// Persist every player setting
    async fn save_settings(&self, settings: &PlayerSettings) -> Result<()>;

    /// Apply a partial update and return the resulting settings
    async fn update_settings(&self, update: SettingsUpdate) -> Result<PlayerSettings>;
}
