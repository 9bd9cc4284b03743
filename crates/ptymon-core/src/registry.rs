//! Device registry: the authoritative, insertion-ordered set of known devices
//!
//! The registry owns every [`DeviceRecord`] ever observed, keyed by path.
//! Rows are appended in first-seen order and never re-sorted or deleted, so
//! a row position stays valid for the lifetime of the process. Removal is a
//! flag flip on the record.
//!
//! All access goes through a single [`parking_lot::RwLock`]: ingestion takes
//! the write guard for the whole lookup-append-update sequence, and every
//! accessor takes the read guard and hands back owned copies. Lock guards are
//! never exposed outside this module.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::Serialize;

use crate::events::{DeviceEvent, EventKind};

/// Per-device state: identity, activity count, and removal flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceRecord {
    /// Device path, unique within the registry
    pub path: String,
    /// Number of non-create/remove notifications seen for this path
    pub activity_count: u64,
    /// True while the backing device node no longer exists
    pub removed: bool,
}

impl DeviceRecord {
    fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            activity_count: 0,
            removed: false,
        }
    }

    fn apply(&mut self, kind: EventKind) {
        match kind {
            EventKind::Created => self.removed = false,
            EventKind::Removed => self.removed = true,
            EventKind::Other => self.activity_count = self.activity_count.saturating_add(1),
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<DeviceRecord>,
    index: HashMap<String, usize>,
}

impl Inner {
    /// Find the record for `path`, appending a fresh one if it is unseen.
    fn resolve(&mut self, path: &str) -> &mut DeviceRecord {
        let position = match self.index.get(path) {
            Some(&position) => position,
            None => {
                let position = self.rows.len();
                self.rows.push(DeviceRecord::new(path));
                self.index.insert(path.to_string(), position);
                position
            }
        };
        &mut self.rows[position]
    }

    fn is_consistent(&self) -> bool {
        self.rows.len() == self.index.len()
            && self
                .rows
                .iter()
                .enumerate()
                .all(|(i, record)| self.index.get(&record.path) == Some(&i))
    }
}

/// Thread-safe device registry. Single writer, many readers.
#[derive(Debug, Default)]
pub struct Registry {
    inner: RwLock<Inner>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one notification for `path`.
    ///
    /// An unseen path gets a new row at the end. `Created` clears the removed
    /// flag, `Removed` sets it, and `Other` bumps the activity count. The
    /// whole operation runs under the write guard.
    ///
    /// The registry does not validate `path`; an empty string is a key like
    /// any other. Filtering belongs to the event source.
    pub fn ingest(&self, path: &str, kind: EventKind) {
        self.inner.write().resolve(path).apply(kind);
    }

    /// Convenience wrapper over [`Registry::ingest`].
    pub fn ingest_event(&self, event: &DeviceEvent) {
        self.ingest(&event.path, event.kind);
    }

    /// Number of distinct paths seen so far
    pub fn len(&self) -> usize {
        self.inner.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().rows.is_empty()
    }

    /// Copy of the record for `path`, if it has been seen
    pub fn get(&self, path: &str) -> Option<DeviceRecord> {
        let inner = self.inner.read();
        inner
            .index
            .get(path)
            .and_then(|&position| inner.rows.get(position))
            .cloned()
    }

    /// Copy of the record at zero-based row `position`
    pub fn record_at(&self, position: usize) -> Option<DeviceRecord> {
        self.inner.read().rows.get(position).cloned()
    }

    /// Zero-based row position of `path`
    pub fn position_of(&self, path: &str) -> Option<usize> {
        self.inner.read().index.get(path).copied()
    }

    /// Copy of every row, taken under a single read guard
    pub fn snapshot(&self) -> Vec<DeviceRecord> {
        self.inner.read().rows.clone()
    }

    /// Verify `index[rows[i].path] == i` for every row, under one read guard.
    pub fn is_consistent(&self) -> bool {
        self.inner.read().is_consistent()
    }
}
