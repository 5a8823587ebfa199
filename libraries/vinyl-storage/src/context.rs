use crate::{records, settings, StorageError};
use async_trait::async_trait;
use sqlx::SqlitePool;
use vinyl_core::{
    error::Result, storage::RecordStore, NewRecord, PlayerSettings, Record, RecordId,
    RecordSummary, SettingsUpdate,
};

/// Local record store using `SQLite`
#[derive(Clone)]
pub struct LocalRecordStore {
    pool: SqlitePool,
}

impl LocalRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and bring the schema up to date
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn open(database_url: &str) -> std::result::Result<Self, StorageError> {
        let pool = crate::create_pool(database_url).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl RecordStore for LocalRecordStore {
    // Records
    async fn get_all_records(&self) -> Result<Vec<Record>> {
        Ok(records::get_all(&self.pool).await?)
    }

    async fn get_record_summaries(&self) -> Result<Vec<RecordSummary>> {
        Ok(records::get_summaries(&self.pool).await?)
    }

    async fn get_record(&self, id: RecordId) -> Result<Option<Record>> {
        Ok(records::get_by_id(&self.pool, id).await?)
    }

    async fn save_record(&self, record: NewRecord) -> Result<Record> {
        Ok(records::create(&self.pool, record).await?)
    }

    async fn delete_record(&self, id: RecordId) -> Result<bool> {
        Ok(records::delete(&self.pool, id).await?)
    }

    async fn clear_records(&self) -> Result<u64> {
        Ok(records::clear(&self.pool).await?)
    }

    async fn count_records(&self) -> Result<i64> {
        Ok(records::count(&self.pool).await?)
    }

    // Settings
    async fn load_settings(&self) -> Result<PlayerSettings> {
        Ok(settings::load_player_settings(&self.pool).await?)
    }

    async fn save_settings(&self, player_settings: &PlayerSettings) -> Result<()> {
        Ok(settings::save_player_settings(&self.pool, player_settings).await?)
    }

    async fn update_settings(&self, update: SettingsUpdate) -> Result<PlayerSettings> {
        Ok(settings::update_player_settings(&self.pool, &update).await?)
    }
}
