//! Headless mode runner - event loop without TUI

use std::future::Future;
use std::io::Write;
use std::path::Path;

use ptymon_app::signals::wait_for_signal;
use ptymon_app::{Monitor, MonitorEvent};
use ptymon_core::prelude::*;
use tokio::sync::broadcast;

use super::HeadlessEvent;

/// Run in headless mode - output NDJSON instead of the TUI
pub async fn run_headless(target: &Path) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("ptymon starting in HEADLESS mode");
    info!("Target: {}", target.display());
    info!("═══════════════════════════════════════════════════════");

    let mut monitor = Monitor::watch(target)?;

    // Subscribe before ingestion starts so no update is missed
    let events = monitor.subscribe();
    monitor.start_ingestion();

    let result = headless_event_loop(events, wait_for_signal(), &mut std::io::stdout()).await;

    monitor.shutdown().await;

    info!("ptymon headless mode exiting");
    result
}

/// Forward monitor events to `out` until `shutdown` resolves or the
/// broadcast closes
async fn headless_event_loop<F, W>(
    mut events: broadcast::Receiver<MonitorEvent>,
    shutdown: F,
    out: &mut W,
) -> Result<()>
where
    F: Future<Output = Result<()>>,
    W: Write,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            signal = &mut shutdown => {
                signal?;
                info!("Quit requested");
                break;
            }
            received = events.recv() => match received {
                Ok(event) => {
                    debug!("Forwarding {} event", event.event_type());
                    emit(HeadlessEvent::from(event), out);
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Headless output fell behind, skipped {} events", skipped);
                    emit(HeadlessEvent::lagged(skipped), out);
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("Monitor event channel closed");
                    break;
                }
            },
        }
    }

    Ok(())
}

fn emit<W: Write>(event: HeadlessEvent, out: &mut W) {
    if let Err(e) = event.write_to(out) {
        error!("Failed to write headless event: {}", e);
    }
}
