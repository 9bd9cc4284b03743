//! Device notification types flowing from the watcher into the registry

use serde::Serialize;

/// Directory holding the host's pseudo-terminal device nodes
pub const PTS_DIR: &str = "/dev/pts";

/// Kind of filesystem notification observed for a device node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The device node appeared
    Created,
    /// The device node disappeared
    Removed,
    /// Any other activity (writes, attribute changes, access)
    Other,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Created => "created",
            EventKind::Removed => "removed",
            EventKind::Other => "other",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `(path, kind)` notification, in the order the watcher saw it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceEvent {
    pub path: String,
    pub kind: EventKind,
}

impl DeviceEvent {
    pub fn new(path: impl Into<String>, kind: EventKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn created(path: impl Into<String>) -> Self {
        Self::new(path, EventKind::Created)
    }

    pub fn removed(path: impl Into<String>) -> Self {
        Self::new(path, EventKind::Removed)
    }

    pub fn other(path: impl Into<String>) -> Self {
        Self::new(path, EventKind::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(DeviceEvent::created("/dev/pts/1").kind, EventKind::Created);
        assert_eq!(DeviceEvent::removed("/dev/pts/1").kind, EventKind::Removed);
        assert_eq!(DeviceEvent::other("/dev/pts/1").kind, EventKind::Other);
    }

    #[test]
    fn test_event_kind_serializes_snake_case() {
        let json = serde_json::to_string(&DeviceEvent::created("/dev/pts/4")).unwrap();
        assert_eq!(json, r#"{"path":"/dev/pts/4","kind":"created"}"#);
    }

    #[test]
    fn test_event_kind_display() {
        assert_eq!(EventKind::Other.to_string(), "other");
    }
}
