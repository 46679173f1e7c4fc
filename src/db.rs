use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use tracing::{debug, info};

use crate::models::{AssessmentRecord, ScoreSet};

pub const LATEST_KEY: &str = "latestAssessment";
pub const HISTORY_KEY: &str = "assessmentHistory";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("stored data is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid date {0:?}, expected RFC 3339")]
    InvalidDate(String),

    #[error("invalid {column} score {value}, expected a finite number")]
    InvalidScore { column: &'static str, value: f64 },
}

pub type StorageResult<T> = Result<T, StorageError>;

pub async fn connect(database_url: &str) -> StorageResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    init_db(&pool).await?;
    info!(database_url, "storage ready");
    Ok(pool)
}

pub async fn init_db(pool: &SqlitePool) -> StorageResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

async fn get_value(conn: &mut SqliteConnection, key: &str) -> StorageResult<Option<String>> {
    let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
        .bind(key)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.map(|row| row.get("value")))
}

async fn set_value(conn: &mut SqliteConnection, key: &str, value: &str) -> StorageResult<()> {
    sqlx::query(
        r#"
        INSERT INTO kv_store (key, value, updated_at)
        VALUES (?, ?, ?)
        ON CONFLICT (key) DO UPDATE
        SET value = excluded.value, updated_at = excluded.updated_at
        "#,
    )
    .bind(key)
    .bind(value)
    .bind(Utc::now().to_rfc3339())
    .execute(&mut *conn)
    .await?;
    debug!(key, bytes = value.len(), "stored value");
    Ok(())
}

async fn read_history(conn: &mut SqliteConnection) -> StorageResult<Vec<AssessmentRecord>> {
    match get_value(conn, HISTORY_KEY).await? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

pub async fn get(pool: &SqlitePool, key: &str) -> StorageResult<Option<String>> {
    let mut conn = pool.acquire().await?;
    get_value(&mut conn, key).await
}

#[cfg(test)]
pub async fn set(pool: &SqlitePool, key: &str, value: &str) -> StorageResult<()> {
    let mut conn = pool.acquire().await?;
    set_value(&mut conn, key, value).await
}

/// Removing a key that was never written is not an error.
pub async fn remove(pool: &SqlitePool, key: &str) -> StorageResult<()> {
    sqlx::query("DELETE FROM kv_store WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await?;
    Ok(())
}

/// Overwrites the latest slot and appends to history in one transaction.
pub async fn save_assessment(pool: &SqlitePool, record: &AssessmentRecord) -> StorageResult<()> {
    let mut tx = pool.begin().await?;

    set_value(&mut tx, LATEST_KEY, &serde_json::to_string(record)?).await?;

    let mut history = read_history(&mut tx).await?;
    history.push(record.clone());
    set_value(&mut tx, HISTORY_KEY, &serde_json::to_string(&history)?).await?;

    tx.commit().await?;
    info!(
        timestamp = record.timestamp,
        history_len = history.len(),
        "assessment saved"
    );
    Ok(())
}

pub async fn latest(pool: &SqlitePool) -> StorageResult<Option<AssessmentRecord>> {
    match get(pool, LATEST_KEY).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Oldest first, as appended.
pub async fn history(pool: &SqlitePool) -> StorageResult<Vec<AssessmentRecord>> {
    let mut conn = pool.acquire().await?;
    read_history(&mut conn).await
}

pub async fn clear_history(pool: &SqlitePool) -> StorageResult<()> {
    remove(pool, HISTORY_KEY).await?;
    info!("assessment history cleared");
    Ok(())
}

pub async fn import_csv(pool: &SqlitePool, csv_path: &Path) -> StorageResult<usize> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        date: String,
        health: f64,
        work: f64,
        hobby: f64,
        relationships: f64,
        learning: f64,
    }

    let mut reader = csv::Reader::from_path(csv_path)?;
    let mut imported = Vec::new();

    for result in reader.deserialize::<CsvRow>() {
        let row = result?;
        let taken_at = DateTime::parse_from_rfc3339(&row.date)
            .map_err(|_| StorageError::InvalidDate(row.date.clone()))?
            .with_timezone(&Utc);
        let scores = ScoreSet {
            health: row.health,
            work: row.work,
            hobby: row.hobby,
            relationships: row.relationships,
            learning: row.learning,
        };
        // serde_json writes non-finite floats as null, which would not read back.
        if let Some((category, value)) = scores.iter().find(|(_, score)| !score.is_finite()) {
            return Err(StorageError::InvalidScore {
                column: category.key(),
                value,
            });
        }
        imported.push(AssessmentRecord::new(scores, taken_at));
    }

    let inserted = imported.len();
    let mut tx = pool.begin().await?;
    let mut history = read_history(&mut tx).await?;
    history.extend(imported);
    set_value(&mut tx, HISTORY_KEY, &serde_json::to_string(&history)?).await?;
    tx.commit().await?;

    info!(inserted, path = %csv_path.display(), "imported assessments");
    Ok(inserted)
}
