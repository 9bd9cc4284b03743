//! Headless mode - NDJSON device activity on stdout
//!
//! Runs the same watch and ingestion pipeline as the TUI, but instead of a
//! grid it prints one JSON object per line for every applied event. Useful
//! for piping into `jq` or for scripted checks.
//!
//! # Event Format
//!
//! Each line carries an `"event"` field naming its type:
//!
//! ```json
//! {"event":"device_updated","path":"/dev/pts/3","row":1,"ops":0,"removed":false,"kind":"created","timestamp":1704700001000}
//! {"event":"device_updated","path":"/dev/pts/3","row":1,"ops":1,"removed":false,"kind":"other","timestamp":1704700001250}
//! {"event":"watcher_error","message":"...","timestamp":1704700002000}
//! {"event":"lagged","skipped":12,"timestamp":1704700003000}
//! ```
//!
//! `row` is the grid row (the header is row 0), `ops` the activity count
//! after the event was applied. A `lagged` line means the output fell
//! behind the broadcast and `skipped` updates were dropped; the registry
//! itself is unaffected.

pub mod runner;

use chrono::Utc;
use ptymon_app::MonitorEvent;
use ptymon_core::EventKind;
use serde::Serialize;
use std::io::{self, Write};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A device event was applied to the registry
    DeviceUpdated {
        path: String,
        row: usize,
        ops: u64,
        removed: bool,
        kind: EventKind,
        timestamp: i64,
    },

    /// The watcher reported a non-fatal delivery error
    WatcherError { message: String, timestamp: i64 },

    /// Output fell behind and `skipped` updates were never printed
    Lagged { skipped: u64, timestamp: i64 },
}

impl HeadlessEvent {
    /// Write this event as one JSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        out.write_all(b"\n")?;
        out.flush()
    }

    pub fn lagged(skipped: u64) -> Self {
        Self::Lagged {
            skipped,
            timestamp: Self::now(),
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }
}

impl From<MonitorEvent> for HeadlessEvent {
    fn from(event: MonitorEvent) -> Self {
        match event {
            MonitorEvent::DeviceUpdated { row, kind, record } => Self::DeviceUpdated {
                path: record.path,
                row: row + 1,
                ops: record.activity_count,
                removed: record.removed,
                kind,
                timestamp: Self::now(),
            },
            MonitorEvent::WatcherError { message } => Self::WatcherError {
                message,
                timestamp: Self::now(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptymon_core::Registry;

    fn updated(path: &str, kind: EventKind, registry: &Registry) -> MonitorEvent {
        registry.ingest(path, kind);
        let row = registry.position_of(path).unwrap();
        MonitorEvent::DeviceUpdated {
            row,
            kind,
            record: registry.record_at(row).unwrap(),
        }
    }

    fn json_line(event: &HeadlessEvent) -> serde_json::Value {
        let mut out = Vec::new();
        event.write_to(&mut out).unwrap();
        assert_eq!(out.last(), Some(&b'\n'));
        assert_eq!(out.iter().filter(|b| **b == b'\n').count(), 1);
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_device_updated_line() {
        let registry = Registry::new();
        updated("/dev/pts/3", EventKind::Created, &registry);
        let event: HeadlessEvent =
            updated("/dev/pts/3", EventKind::Other, &registry).into();

        let json = json_line(&event);
        assert_eq!(json["event"], "device_updated");
        assert_eq!(json["path"], "/dev/pts/3");
        assert_eq!(json["row"], 1);
        assert_eq!(json["ops"], 1);
        assert_eq!(json["removed"], false);
        assert_eq!(json["kind"], "other");
        assert!(json["timestamp"].as_i64().unwrap() > 0);
    }

    #[test]
    fn test_row_counts_from_header() {
        let registry = Registry::new();
        updated("/dev/pts/0", EventKind::Created, &registry);
        let event: HeadlessEvent =
            updated("/dev/pts/9", EventKind::Removed, &registry).into();

        let json = json_line(&event);
        assert_eq!(json["row"], 2);
        assert_eq!(json["removed"], true);
        assert_eq!(json["kind"], "removed");
    }

    #[test]
    fn test_watcher_error_line() {
        let event: HeadlessEvent = MonitorEvent::WatcherError {
            message: "inotify queue overflow".to_string(),
        }
        .into();

        let json = json_line(&event);
        assert_eq!(json["event"], "watcher_error");
        assert_eq!(json["message"], "inotify queue overflow");
    }

    #[test]
    fn test_lagged_line() {
        let json = json_line(&HeadlessEvent::lagged(7));
        assert_eq!(json["event"], "lagged");
        assert_eq!(json["skipped"], 7);
        assert!(json["timestamp"].as_i64().unwrap() > 0);
    }
}
