//! Monitor - shared orchestration for the TUI and headless frontends
//!
//! Wires the pieces together: the [`EventSource`] feeding an unbounded queue,
//! the ingestion task writing the [`Registry`], the diagnostics task, the
//! coalescing redraw signal, and a broadcast of [`MonitorEvent`]s.
//!
//! Construction is split in two so subscribers can attach before any event
//! is applied: [`Monitor::watch`] establishes the watch (the only fallible,
//! fatal step) and [`Monitor::start_ingestion`] spawns the tasks. Events
//! arriving in between wait in the queue.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use ptymon_core::prelude::*;
use ptymon_core::{DeviceGrid, Registry};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::ingest::{spawn_error_logger, spawn_ingestion};
use crate::monitor_event::MonitorEvent;
use crate::redraw::{redraw_channel, RedrawReceiver, RedrawSignal};
use crate::watcher::{EventSource, EventStreams};

/// Capacity of the monitor event broadcast
const EVENT_BROADCAST_CAPACITY: usize = 1024;

/// How long shutdown waits for each background task to drain
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

pub struct Monitor {
    registry: Arc<Registry>,
    source: Option<EventSource>,
    streams: Option<EventStreams>,
    redraw_tx: RedrawSignal,
    redraw_rx: RedrawReceiver,
    event_tx: broadcast::Sender<MonitorEvent>,
    tasks: Vec<JoinHandle<usize>>,
}

impl Monitor {
    /// Subscribe to `target`. Fails fatally if the watch can't be established.
    pub fn watch(target: impl Into<PathBuf>) -> Result<Self> {
        let (source, streams) = EventSource::start(target)?;
        let (redraw_tx, redraw_rx) = redraw_channel();
        let (event_tx, _) = broadcast::channel(EVENT_BROADCAST_CAPACITY);

        Ok(Self {
            registry: Arc::new(Registry::new()),
            source: Some(source),
            streams: Some(streams),
            redraw_tx,
            redraw_rx,
            event_tx,
            tasks: Vec::new(),
        })
    }

    /// Spawn the ingestion and diagnostics tasks. Calling it again is a no-op.
    ///
    /// Must run inside a tokio runtime.
    pub fn start_ingestion(&mut self) {
        let Some(streams) = self.streams.take() else {
            debug!("Ingestion already running");
            return;
        };

        self.tasks.push(spawn_ingestion(
            self.registry.clone(),
            streams.events,
            self.redraw_tx.clone(),
            self.event_tx.clone(),
        ));
        self.tasks
            .push(spawn_error_logger(streams.errors, self.event_tx.clone()));
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Read-only grid over the registry
    pub fn grid(&self) -> DeviceGrid<'_> {
        DeviceGrid::new(&self.registry)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MonitorEvent> {
        self.event_tx.subscribe()
    }

    pub fn redraw_receiver(&mut self) -> &mut RedrawReceiver {
        &mut self.redraw_rx
    }

    /// Stop watching and let the background tasks drain their queues.
    pub async fn shutdown(mut self) {
        info!("Monitor shutting down");
        // Dropping the source closes both queues
        self.source.take();
        self.streams.take();

        for task in self.tasks.drain(..) {
            match tokio::time::timeout(SHUTDOWN_GRACE, task).await {
                Ok(Ok(count)) => debug!("Background task finished after {} items", count),
                Ok(Err(e)) => warn!("Background task failed: {}", e),
                Err(_) => warn!("Background task did not finish within {:?}", SHUTDOWN_GRACE),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptymon_core::GridSource;

    #[test]
    fn test_watch_missing_directory_fails() {
        let temp = tempfile::tempdir().unwrap();
        let result = Monitor::watch(temp.path().join("nope"));
        assert!(matches!(result, Err(Error::WatchInit { .. })));
    }

    #[tokio::test]
    async fn test_fresh_monitor_is_empty() {
        let temp = tempfile::tempdir().unwrap();
        let mut monitor = Monitor::watch(temp.path()).unwrap();
        monitor.start_ingestion();

        assert_eq!(monitor.grid().row_count(), 1);
        assert!(!monitor.redraw_receiver().take_pending());

        monitor.shutdown().await;
    }

    #[tokio::test]
    async fn test_start_ingestion_twice_is_noop() {
        let temp = tempfile::tempdir().unwrap();
        let mut monitor = Monitor::watch(temp.path()).unwrap();
        monitor.start_ingestion();
        monitor.start_ingestion();
        assert_eq!(monitor.tasks.len(), 2);
        monitor.shutdown().await;
    }
}
