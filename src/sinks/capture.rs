//! In-memory capture sink for tests

use crate::core::{LogRecord, Sink};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Retains every emitted record in memory and lets tests toggle the
/// readiness flag, standing in for "has a backend been installed yet".
pub struct CaptureSink {
    records: Mutex<Vec<LogRecord>>,
    ready: AtomicBool,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            ready: AtomicBool::new(true),
        }
    }

    /// Start unready; `set_ready(true)` later models installing a
    /// backend after loggers were already handed out.
    pub fn unready() -> Self {
        let sink = Self::new();
        sink.ready.store(false, Ordering::Relaxed);
        sink
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::Relaxed);
    }

    /// Snapshot of everything emitted so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn emit_count(&self) -> usize {
        self.records.lock().len()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for CaptureSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for CaptureSink {
    fn ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }

    fn emit(&self, record: &LogRecord) {
        self.records.lock().push(record.clone());
    }
}
