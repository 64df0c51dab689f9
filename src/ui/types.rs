use std::sync::{Arc, Mutex};

use crate::{game::BestRecord, store::StoreError};

pub const MAX_LOG_LINES: usize = 300;

/// Thread-safe bounded log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push(&self, msg: String) {
        let mut buf = self.inner.lock().unwrap();
        buf.push(msg);
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().unwrap().clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Input validation status.
pub enum InputStatus {
    Incomplete,
    Invalid(&'static str),
    Valid,
}

/// Messages sent back to the UI loop by background tasks.
#[derive(Debug)]
pub enum AppEvent {
    /// One second elapsed in the session with this generation.
    Tick { generation: u64 },
    /// Hint text for the given session and attempt number.
    Hint {
        generation: u64,
        attempt: u32,
        text: String,
    },
    BestLoaded(Result<Option<BestRecord>, StoreError>),
    RecordSaved {
        record: BestRecord,
        result: Result<(), StoreError>,
    },
}
