//! PostgREST-backed store (e.g. a Supabase `records` table).

use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::game::BestRecord;

use super::{RecordStore, StoreError, StoreFuture, validate};

const BEST_QUERY: &str =
    "select=player_name,attempts,time_seconds&order=attempts.asc,time_seconds.asc&limit=1";

#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`.
    pub url: String,
    pub api_key: String,
    pub table: String,
}

impl RestConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            table: "records".to_string(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), self.table)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RecordPayload {
    player_name: String,
    attempts: u32,
    time_seconds: u64,
}

impl From<&BestRecord> for RecordPayload {
    fn from(record: &BestRecord) -> Self {
        Self {
            player_name: record.player_name.clone(),
            attempts: record.attempts,
            time_seconds: record.time_seconds,
        }
    }
}

impl From<RecordPayload> for BestRecord {
    fn from(payload: RecordPayload) -> Self {
        Self {
            player_name: payload.player_name,
            attempts: payload.attempts,
            time_seconds: payload.time_seconds,
        }
    }
}

pub struct RestRecordStore {
    config: RestConfig,
    client: Client,
}

impl RestRecordStore {
    pub fn new(config: RestConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    async fn best(&self) -> Result<Option<BestRecord>, StoreError> {
        let url = format!("{}?{}", self.config.table_url(), BEST_QUERY);
        let response = self.authorize(self.client.get(url)).send().await?;
        let response = check_status(response).await?;

        let rows: Vec<RecordPayload> = response.json().await?;
        debug!(rows = rows.len(), "fetched best record");
        first_record(rows)
    }

    async fn insert(&self, record: BestRecord) -> Result<(), StoreError> {
        validate(&record)?;

        let response = self
            .authorize(self.client.post(self.config.table_url()))
            .header("Prefer", "return=minimal")
            .json(&[RecordPayload::from(&record)])
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

impl RecordStore for RestRecordStore {
    fn name(&self) -> &'static str {
        "rest"
    }

    fn fetch_best(&self) -> StoreFuture<'_, Option<BestRecord>> {
        Box::pin(self.best())
    }

    fn save_record(&self, record: BestRecord) -> StoreFuture<'_, ()> {
        Box::pin(self.insert(record))
    }
}

async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Status { status, body })
}

fn first_record(rows: Vec<RecordPayload>) -> Result<Option<BestRecord>, StoreError> {
    match rows.into_iter().next() {
        None => Ok(None),
        Some(row) if row.attempts == 0 => {
            Err(StoreError::Invalid("stored record has zero attempts".to_string()))
        }
        Some(row) => Ok(Some(row.into())),
    }
}
