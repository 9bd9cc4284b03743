//! Device directory watcher (the event source)
//!
//! Subscribes to filesystem notifications for a single directory and turns
//! each notified path into a [`DeviceEvent`] on an unbounded, ordered queue.
//! Delivery errors go to a separate diagnostics queue. Nothing is debounced
//! or coalesced: every notification becomes one event per path.

use std::path::PathBuf;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use ptymon_core::prelude::*;
use ptymon_core::{DeviceEvent, EventKind};
use tokio::sync::mpsc;

/// Non-fatal diagnostic reported by the watcher backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    pub message: String,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Receiving ends of the watcher's two output queues
#[derive(Debug)]
pub struct EventStreams {
    pub events: mpsc::UnboundedReceiver<DeviceEvent>,
    pub errors: mpsc::UnboundedReceiver<SourceError>,
}

/// Map a backend notification kind onto the registry's three kinds.
///
/// Access notifications (open, close, read) are not activity: `None` means
/// the notification is dropped. Data, metadata and name changes all count.
pub fn classify(kind: &notify::EventKind) -> Option<EventKind> {
    match kind {
        notify::EventKind::Create(_) => Some(EventKind::Created),
        notify::EventKind::Remove(_) => Some(EventKind::Removed),
        notify::EventKind::Access(_) => None,
        // Modify, Any, Other
        _ => Some(EventKind::Other),
    }
}

/// Split a backend notification into one [`DeviceEvent`] per path.
///
/// Access notifications yield nothing. Paths that are empty after
/// conversion are dropped with a warning; the registry never sees them.
pub fn translate(event: &notify::Event) -> Vec<DeviceEvent> {
    let Some(kind) = classify(&event.kind) else {
        return Vec::new();
    };
    event
        .paths
        .iter()
        .filter_map(|path| {
            let path = path.to_string_lossy();
            if path.is_empty() {
                warn!("Dropping {:?} notification with an empty path", event.kind);
                None
            } else {
                Some(DeviceEvent::new(path.into_owned(), kind))
            }
        })
        .collect()
}

/// Live subscription to a directory. Dropping it stops the watch and closes
/// both output queues.
pub struct EventSource {
    target: PathBuf,
    _watcher: RecommendedWatcher,
}

impl std::fmt::Debug for EventSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSource")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl EventSource {
    /// Start watching `target` (non-recursively).
    ///
    /// Fails with [`Error::WatchInit`] if the backend can't be created or the
    /// directory can't be watched. That failure is fatal for the caller.
    pub fn start(target: impl Into<PathBuf>) -> Result<(Self, EventStreams)> {
        let target = target.into();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (error_tx, error_rx) = mpsc::unbounded_channel();

        let mut watcher = notify::recommended_watcher(
            move |result: notify::Result<notify::Event>| match result {
                Ok(event) => {
                    for device_event in translate(&event) {
                        trace!("{} {}", device_event.kind, device_event.path);
                        // Receiver gone means we are shutting down
                        let _ = event_tx.send(device_event);
                    }
                }
                Err(e) => {
                    let _ = error_tx.send(SourceError::new(e.to_string()));
                }
            },
        )
        .map_err(|e| Error::watch_init(&target, e.to_string()))?;

        watcher
            .watch(&target, RecursiveMode::NonRecursive)
            .map_err(|e| Error::watch_init(&target, e.to_string()))?;

        info!("Watching: {}", target.display());

        Ok((
            Self {
                target,
                _watcher: watcher,
            },
            EventStreams {
                events: event_rx,
                errors: error_rx,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{
        AccessKind, AccessMode, CreateKind, DataChange, MetadataKind, ModifyKind, RemoveKind,
        RenameMode,
    };

    fn notify_event(kind: notify::EventKind, paths: &[&str]) -> notify::Event {
        paths
            .iter()
            .fold(notify::Event::new(kind), |event, path| {
                event.add_path(PathBuf::from(path))
            })
    }

    #[test]
    fn test_classify_create_and_remove() {
        assert_eq!(
            classify(&notify::EventKind::Create(CreateKind::File)),
            Some(EventKind::Created)
        );
        assert_eq!(
            classify(&notify::EventKind::Remove(RemoveKind::Any)),
            Some(EventKind::Removed)
        );
    }

    #[test]
    fn test_classify_modifications_as_other() {
        for kind in [
            notify::EventKind::Modify(ModifyKind::Any),
            notify::EventKind::Modify(ModifyKind::Data(DataChange::Content)),
            notify::EventKind::Modify(ModifyKind::Metadata(MetadataKind::Permissions)),
            notify::EventKind::Modify(ModifyKind::Name(RenameMode::Any)),
            notify::EventKind::Any,
            notify::EventKind::Other,
        ] {
            assert_eq!(classify(&kind), Some(EventKind::Other), "{kind:?}");
        }
    }

    #[test]
    fn test_classify_drops_access() {
        for kind in [
            notify::EventKind::Access(AccessKind::Open(AccessMode::Any)),
            notify::EventKind::Access(AccessKind::Close(AccessMode::Write)),
            notify::EventKind::Access(AccessKind::Close(AccessMode::Read)),
            notify::EventKind::Access(AccessKind::Read),
            notify::EventKind::Access(AccessKind::Any),
        ] {
            assert_eq!(classify(&kind), None, "{kind:?}");
        }
    }

    #[test]
    fn test_translate_drops_access_events() {
        let event = notify_event(
            notify::EventKind::Access(AccessKind::Close(AccessMode::Write)),
            &["/dev/pts/1"],
        );
        assert!(translate(&event).is_empty());
    }

    #[test]
    fn test_translate_one_event_per_path_in_order() {
        let event = notify_event(
            notify::EventKind::Modify(ModifyKind::Any),
            &["/dev/pts/1", "/dev/pts/2"],
        );
        assert_eq!(
            translate(&event),
            vec![
                DeviceEvent::other("/dev/pts/1"),
                DeviceEvent::other("/dev/pts/2")
            ]
        );
    }

    #[test]
    fn test_translate_drops_empty_paths() {
        let event = notify_event(
            notify::EventKind::Create(CreateKind::File),
            &["", "/dev/pts/4"],
        );
        assert_eq!(translate(&event), vec![DeviceEvent::created("/dev/pts/4")]);
    }

    #[test]
    fn test_translate_pathless_event_yields_nothing() {
        let event = notify_event(notify::EventKind::Other, &[]);
        assert!(translate(&event).is_empty());
    }

    #[test]
    fn test_start_on_missing_directory_is_fatal() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("does-not-exist");

        let err = EventSource::start(&missing).unwrap_err();

        assert!(matches!(err, Error::WatchInit { .. }));
        assert!(err.is_fatal());
        assert!(err.to_string().contains("does-not-exist"));
    }

    #[tokio::test]
    async fn test_start_on_existing_directory() {
        let temp = tempfile::tempdir().unwrap();
        let (source, _streams) = EventSource::start(temp.path()).unwrap();
        assert!(format!("{source:?}").contains(&*temp.path().to_string_lossy()));
    }
}
