//! Domain events published by the ingestion loop for external consumers
//!
//! Subscribers (headless mode, tests) receive these via
//! `Monitor::subscribe()`. Each event is sent after the registry update it
//! describes has been applied.

use ptymon_core::{DeviceRecord, EventKind};

/// Events describing registry changes and watcher diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorEvent {
    /// A device event was applied; `record` is the state right after it
    DeviceUpdated {
        /// Zero-based registry row
        row: usize,
        kind: EventKind,
        record: DeviceRecord,
    },

    /// The watcher reported a non-fatal delivery error
    WatcherError { message: String },
}

impl MonitorEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::DeviceUpdated { .. } => "device_updated",
            Self::WatcherError { .. } => "watcher_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_labels() {
        let err = MonitorEvent::WatcherError {
            message: "overflow".into(),
        };
        assert_eq!(err.event_type(), "watcher_error");
    }
}
