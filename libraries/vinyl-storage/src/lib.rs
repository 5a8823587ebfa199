//! Vinyl Player Storage
//!
//! `SQLite` persistence for the record collection and player settings.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each feature owns its own queries (`records`, `settings`)
//! - **Trait Boundary**: [`LocalRecordStore`] implements `vinyl_core::RecordStore`
//!   so the application never touches SQL directly
//!
//! # Example
//!
//! ```rust,no_run
//! use vinyl_storage::{create_pool, run_migrations, LocalRecordStore};
//! use vinyl_core::RecordStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://vinyl.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = LocalRecordStore::new(pool);
//! let records = store.get_record_summaries().await?;
//! println!("{} records in the collection", records.len());
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod records;
pub mod settings;

pub use context::LocalRecordStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://vinyl.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    // Parse the URL into options so we can configure SQLite behavior
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("SQLite pool created");

    Ok(pool)
}
