//! Saved record persistence
//!
//! Records are keyed by a millisecond timestamp taken at save time. Ids are
//! kept strictly increasing, so "newest first" is simply `ORDER BY id DESC`.
//!
//! # Example
//!
//! ```rust,no_run
//! use vinyl_core::NewRecord;
//! use vinyl_storage::records;
//! # async fn example(pool: &sqlx::SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//! let saved = records::create(pool, NewRecord::new("Song", "data:audio/mpeg;base64,AAAA")).await?;
//! let listing = records::get_summaries(pool).await?;
//! assert_eq!(listing[0].id, saved.id);
//! # Ok(())
//! # }
//! ```

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use vinyl_core::{NewRecord, Record, RecordId, RecordSummary};

use crate::error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Format of `Record::date_added`
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Save a new record
///
/// Assigns the id (current time in milliseconds, bumped past the newest
/// existing id if needed) and today's date.
///
/// # Errors
///
/// Returns `StorageError::Duplicate` if a record with the same name exists
pub async fn create(pool: &SqlitePool, record: NewRecord) -> Result<Record> {
    let mut tx = pool.begin().await?;

    let existing: Option<RecordId> = sqlx::query_scalar("SELECT id FROM records WHERE name = ?")
        .bind(&record.name)
        .fetch_optional(&mut *tx)
        .await?;
    if existing.is_some() {
        return Err(duplicate_name(&record.name));
    }

    let newest: Option<RecordId> = sqlx::query_scalar("SELECT MAX(id) FROM records")
        .fetch_one(&mut *tx)
        .await?;

    let now = chrono::Utc::now();
    let mut id = RecordId::new(now.timestamp_millis());
    if let Some(newest) = newest {
        id = id.max(newest.next());
    }
    let date_added = chrono::Local::now().format(DATE_FORMAT).to_string();

    sqlx::query(
        "INSERT INTO records (id, name, date_added, file_data, album_art, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&record.name)
    .bind(&date_added)
    .bind(&record.file_data)
    .bind(&record.album_art)
    .bind(now.timestamp())
    .execute(&mut *tx)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => duplicate_name(&record.name),
        other => StorageError::Database(other),
    })?;

    tx.commit().await?;

    tracing::info!(%id, name = %record.name, "Saved record to collection");

    Ok(Record {
        id,
        name: record.name,
        date_added,
        file_data: record.file_data,
        album_art: record.album_art,
    })
}

/// Get a record by id
pub async fn get_by_id(pool: &SqlitePool, id: RecordId) -> Result<Option<Record>> {
    let row = sqlx::query(
        "SELECT id, name, date_added, file_data, album_art FROM records WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(record_from_row).transpose()
}

/// Get every record, newest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Record>> {
    let rows = sqlx::query(
        "SELECT id, name, date_added, file_data, album_art FROM records ORDER BY id DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(record_from_row).collect()
}

/// Get record listings without the audio payload, newest first
pub async fn get_summaries(pool: &SqlitePool) -> Result<Vec<RecordSummary>> {
    let rows = sqlx::query("SELECT id, name, date_added, album_art FROM records ORDER BY id DESC")
        .fetch_all(pool)
        .await?;

    rows.iter().map(summary_from_row).collect()
}

/// Whether a record with this name is already saved
pub async fn exists_by_name(pool: &SqlitePool, name: &str) -> Result<bool> {
    let found: Option<RecordId> = sqlx::query_scalar("SELECT id FROM records WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    Ok(found.is_some())
}

/// Delete a record
///
/// Returns `Ok(true)` if a record was deleted, `Ok(false)` if none matched
pub async fn delete(pool: &SqlitePool, id: RecordId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM records WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        tracing::info!(%id, "Deleted record from collection");
    }
    Ok(deleted)
}

/// Delete every record, returning how many were removed
pub async fn clear(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM records").execute(pool).await?;

    tracing::info!(removed = result.rows_affected(), "Cleared collection");
    Ok(result.rows_affected())
}

/// Number of saved records
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM records")
        .fetch_one(pool)
        .await?;

    Ok(total)
}

fn record_from_row(row: &SqliteRow) -> Result<Record> {
    Ok(Record {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        date_added: row.try_get("date_added")?,
        file_data: row.try_get("file_data")?,
        album_art: row.try_get("album_art")?,
    })
}

fn summary_from_row(row: &SqliteRow) -> Result<RecordSummary> {
    Ok(RecordSummary {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        date_added: row.try_get("date_added")?,
        album_art: row.try_get("album_art")?,
    })
}

fn duplicate_name(name: &str) -> StorageError {
    StorageError::Duplicate(format!("record {name:?} is already saved"))
}
