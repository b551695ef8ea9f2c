#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use telemetry_log_bridge::{AnyValue, Field, Key, LogEntry, StructuredLogger};

/// A fake sink that records every emitted entry and counts close calls.
///
/// Clones share the same recording, so a handle kept by the test observes
/// entries emitted through handles held by the bridge.
#[derive(Clone, Default)]
pub struct RecordingLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
    closes: Arc<AtomicUsize>,
    fields: Vec<Field>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl StructuredLogger for RecordingLogger {
    fn emit(&self, mut entry: LogEntry) {
        // Latest-attached context first, matching the entry's
        // first-insert-wins policy.
        for field in self.fields.iter().rev() {
            entry.add_field(field.clone());
        }
        self.entries.lock().unwrap().push(entry);
    }

    fn with_field(&self, key: Key, value: AnyValue, destructure: bool) -> Self {
        let mut decorated = self.clone();
        decorated.fields.push(Field::new(key, value, destructure));
        decorated
    }

    fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}
