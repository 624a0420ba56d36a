//! Per-entry diagnostics.
//!
//! The codec reports every entry it writes to a [`DiagnosticSink`]. Sinks are
//! observers only: they receive a copy of what happened and cannot influence
//! the encoding. Production code uses [`TracingSink`]; tests that want to
//! inspect the records use [`RecordingSink`].

use std::sync::{Mutex, PoisonError};

use crate::tag::Tag;

/// One written entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRecord {
    /// Entry tag
    pub tag: Tag,
    /// Value length in bytes
    pub len: usize,
    /// Offset of the tag byte in the buffer
    pub pos: usize,
}

/// Observer for written entries.
///
/// Implementations must tolerate concurrent calls from several builders.
pub trait DiagnosticSink: Send + Sync {
    /// Called after an entry has been written.
    fn entry_written(&self, record: EntryRecord);
}

/// Emits each record as a `tracing` debug event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn entry_written(&self, record: EntryRecord) {
        tracing::debug!(tag = record.tag.to_u8(), size = record.len, pos = record.pos, "add tag");
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn entry_written(&self, _record: EntryRecord) {}
}

/// Keeps every record in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<EntryRecord>>,
}

impl RecordingSink {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records received so far, in arrival order.
    pub fn records(&self) -> Vec<EntryRecord> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Drop all records.
    pub fn clear(&self) {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn entry_written(&self, record: EntryRecord) {
        // A poisoned lock still holds usable records.
        self.records.lock().unwrap_or_else(PoisonError::into_inner).push(record);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn entry_written(&self, record: EntryRecord) {
        (**self).entry_written(record);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<S> {
    fn entry_written(&self, record: EntryRecord) {
        (**self).entry_written(record);
    }
}
