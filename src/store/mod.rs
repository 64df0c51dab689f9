//! Best-record persistence.
//!
//! Stores are append-only: every improving result is inserted and the best
//! record is whatever sorts first by (attempts, time_seconds).

pub mod memory;
pub mod rest;
pub mod sqlite;

pub use memory::MemoryRecordStore;
pub use rest::{RestConfig, RestRecordStore};
pub use sqlite::SqliteRecordStore;

use std::{future::Future, path::PathBuf, pin::Pin, sync::Arc};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{error, info};

use crate::{config::StoreConfig, game::BestRecord};

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send + 'a>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("record service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("stored record is invalid: {0}")]
    Invalid(String),

    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

pub trait RecordStore: Send + Sync {
    fn name(&self) -> &'static str;

    /// The best stored record, or `None` when nothing has been stored yet.
    /// Transport and query failures are errors, never `None`.
    fn fetch_best(&self) -> StoreFuture<'_, Option<BestRecord>>;

    fn save_record(&self, record: BestRecord) -> StoreFuture<'_, ()>;
}

/// Open the configured store.
///
/// A SQLite file that cannot be opened degrades to an in-memory store so the
/// game stays playable; the failure is logged.
pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn RecordStore>> {
    match config {
        StoreConfig::Memory => Ok(Arc::new(MemoryRecordStore::new())),
        StoreConfig::Rest(rest) => {
            info!(url = %rest.url, table = %rest.table, "using REST record store");
            Ok(Arc::new(RestRecordStore::new(rest.clone())))
        }
        StoreConfig::Sqlite { path } => {
            let path = match path {
                Some(path) => path.clone(),
                None => default_db_path()?,
            };
            match SqliteRecordStore::open(&path).await {
                Ok(store) => {
                    info!(path = %path.display(), "using SQLite record store");
                    Ok(Arc::new(store))
                }
                Err(err) => {
                    error!(path = %path.display(), error = %err, "cannot open record database, records will not persist");
                    Ok(Arc::new(MemoryRecordStore::new()))
                }
            }
        }
    }
}

/// Default location of the SQLite file, under the platform data directory.
pub fn default_db_path() -> Result<PathBuf> {
    let mut path = data_dir()?;
    path.push("records.db");
    Ok(path)
}

/// `<platform data dir>/number-quest`, created if missing.
pub fn data_dir() -> Result<PathBuf> {
    let mut path = dirs::data_dir().context("Unable to determine data directory for your platform")?;

    path.push("number-quest");

    std::fs::create_dir_all(&path).context("Failed to create number-quest data directory")?;

    Ok(path)
}

pub(crate) fn validate(record: &BestRecord) -> Result<(), StoreError> {
    if record.attempts == 0 {
        return Err(StoreError::Invalid("attempts must be positive".to_string()));
    }
    if i64::try_from(record.time_seconds).is_err() {
        return Err(StoreError::Invalid(format!(
            "time_seconds {} does not fit the store",
            record.time_seconds
        )));
    }
    Ok(())
}
