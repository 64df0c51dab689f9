use std::path::Path;

use chrono::Utc;
use sqlx::{
    FromRow, SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::debug;

use crate::game::BestRecord;

use super::{RecordStore, StoreError, StoreFuture, validate};

#[derive(Debug, FromRow)]
struct RecordRow {
    id: i64,
    player_name: String,
    attempts: i64,
    time_seconds: i64,
}

impl RecordRow {
    fn into_record(self) -> Result<BestRecord, StoreError> {
        let attempts = u32::try_from(self.attempts)
            .ok()
            .filter(|a| *a > 0)
            .ok_or_else(|| StoreError::Invalid(format!("row {} has attempts {}", self.id, self.attempts)))?;
        let time_seconds = u64::try_from(self.time_seconds).map_err(|_| {
            StoreError::Invalid(format!("row {} has time_seconds {}", self.id, self.time_seconds))
        })?;

        Ok(BestRecord {
            player_name: self.player_name,
            attempts,
            time_seconds,
        })
    }
}

/// Records kept in a local SQLite file.
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    /// Open (creating if missing) the database at `path` and run migrations.
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, running migrations first.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    pub async fn best(&self) -> Result<Option<BestRecord>, StoreError> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT id, player_name, attempts, time_seconds
            FROM records
            ORDER BY attempts ASC, time_seconds ASC, id ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        row.map(RecordRow::into_record).transpose()
    }

    pub async fn insert(&self, record: &BestRecord) -> Result<i64, StoreError> {
        validate(record)?;

        let attempts = i64::from(record.attempts);
        let time_seconds = record.time_seconds as i64;
        let created_at = Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO records (player_name, attempts, time_seconds, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&record.player_name)
        .bind(attempts)
        .bind(time_seconds)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        debug!(id = result.last_insert_rowid(), "record inserted");
        Ok(result.last_insert_rowid())
    }
}

impl RecordStore for SqliteRecordStore {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn fetch_best(&self) -> StoreFuture<'_, Option<BestRecord>> {
        Box::pin(self.best())
    }

    fn save_record(&self, record: BestRecord) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            self.insert(&record).await?;
            Ok::<(), StoreError>(())
        })
    }
}
