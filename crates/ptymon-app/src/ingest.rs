//! Ingestion loop: the registry's only writer
//!
//! One task drains the watcher's event queue and applies each event to the
//! registry in arrival order, one at a time, then requests a redraw. A second
//! task drains the diagnostics queue into the log. Neither stops on errors;
//! both end when their queue closes.

use std::sync::Arc;

use ptymon_core::prelude::*;
use ptymon_core::{DeviceEvent, Registry};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::monitor_event::MonitorEvent;
use crate::redraw::RedrawSignal;
use crate::watcher::SourceError;

/// Spawn the ingestion task. Resolves to the number of events applied.
pub fn spawn_ingestion(
    registry: Arc<Registry>,
    events: mpsc::UnboundedReceiver<DeviceEvent>,
    redraw: RedrawSignal,
    publisher: broadcast::Sender<MonitorEvent>,
) -> JoinHandle<usize> {
    tokio::spawn(run_ingestion(registry, events, redraw, publisher))
}

/// Apply events until the queue closes.
pub async fn run_ingestion(
    registry: Arc<Registry>,
    mut events: mpsc::UnboundedReceiver<DeviceEvent>,
    redraw: RedrawSignal,
    publisher: broadcast::Sender<MonitorEvent>,
) -> usize {
    info!("Ingestion started");
    let mut applied = 0usize;

    while let Some(event) = events.recv().await {
        registry.ingest(&event.path, event.kind);
        applied += 1;

        if publisher.receiver_count() > 0 {
            publish_update(&registry, &event, &publisher);
        }

        redraw.request();
    }

    info!("Ingestion stopped after {} events", applied);
    applied
}

fn publish_update(
    registry: &Registry,
    event: &DeviceEvent,
    publisher: &broadcast::Sender<MonitorEvent>,
) {
    // This task is the only writer, so the record can't move between reads
    let Some(row) = registry.position_of(&event.path) else {
        return;
    };
    if let Some(record) = registry.record_at(row) {
        let _ = publisher.send(MonitorEvent::DeviceUpdated {
            row,
            kind: event.kind,
            record,
        });
    }
}

/// Spawn the diagnostics task. Resolves to the number of errors reported.
pub fn spawn_error_logger(
    mut errors: mpsc::UnboundedReceiver<SourceError>,
    publisher: broadcast::Sender<MonitorEvent>,
) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut reported = 0usize;
        while let Some(err) = errors.recv().await {
            warn!("Watcher error: {}", err);
            reported += 1;
            let _ = publisher.send(MonitorEvent::WatcherError {
                message: err.message,
            });
        }
        reported
    })
}
