use std::sync::{Arc, Mutex};

use crate::game::BestRecord;

use super::{RecordStore, StoreError, StoreFuture, validate};

/// Process-local store. Cloning shares the same rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    rows: Arc<Mutex<Vec<BestRecord>>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: BestRecord) -> Self {
        let store = Self::new();
        store.lock().push(record);
        store
    }

    /// Every saved row in insertion order.
    pub fn records(&self) -> Vec<BestRecord> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<BestRecord>> {
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn best(&self) -> Option<BestRecord> {
        self.lock()
            .iter()
            .min_by_key(|r| (r.attempts, r.time_seconds))
            .cloned()
    }
}

impl RecordStore for MemoryRecordStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn fetch_best(&self) -> StoreFuture<'_, Option<BestRecord>> {
        Box::pin(async move { Ok::<_, StoreError>(self.best()) })
    }

    fn save_record(&self, record: BestRecord) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            validate(&record)?;
            self.lock().push(record);
            Ok::<(), StoreError>(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, attempts: u32, time_seconds: u64) -> BestRecord {
        BestRecord {
            player_name: name.to_string(),
            attempts,
            time_seconds,
        }
    }

    #[tokio::test]
    async fn test_empty_store_has_no_best() {
        let store = MemoryRecordStore::new();
        assert_eq!(store.fetch_best().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_best_orders_by_attempts_then_time() {
        let store = MemoryRecordStore::new();
        store.save_record(record("slow", 3, 90)).await.unwrap();
        store.save_record(record("many", 5, 1)).await.unwrap();
        store.save_record(record("fast", 3, 20)).await.unwrap();

        let best = store.fetch_best().await.unwrap().unwrap();
        assert_eq!(best.player_name, "fast");
        assert_eq!(store.records().len(), 3);
    }

    #[tokio::test]
    async fn test_first_of_equal_records_stays_best() {
        let store = MemoryRecordStore::with_record(record("first", 4, 40));
        store.save_record(record("second", 4, 40)).await.unwrap();

        let best = store.fetch_best().await.unwrap().unwrap();
        assert_eq!(best.player_name, "first");
    }

    #[tokio::test]
    async fn test_invalid_record_is_rejected() {
        let store = MemoryRecordStore::new();
        let err = store.save_record(record("zero", 0, 1)).await.unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
        assert!(store.records().is_empty());
    }
}
