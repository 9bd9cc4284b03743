//! Main TUI runner - entry point and event loop
//!
//! Lifecycle:
//! 1. Establish the watch. A failure here is returned before the terminal is
//!    touched, so the caller can print a plain diagnostic.
//! 2. Enter the alternate screen with mouse capture, start ingestion and the
//!    signal handler.
//! 3. Loop: drain external messages, redraw when the registry changed or
//!    the state asked for it, poll terminal input. Clicks are hit-tested
//!    against the table layout of the last drawn frame.
//! 4. Restore the terminal and shut the monitor down.

use std::path::Path;

use ptymon_app::config::Settings;
use ptymon_app::signals::spawn_signal_handler;
use ptymon_app::{update, AppState, Message, Monitor};
use ptymon_core::prelude::*;
use ptymon_core::{GridSource, PTS_DIR};
use tokio::sync::mpsc;

use crate::widgets::TableLayout;
use crate::{event, render, terminal};

/// Run the TUI over the pseudo-terminal directory
pub async fn run(settings: Settings) -> Result<()> {
    run_watching(Path::new(PTS_DIR), settings).await
}

/// Run the TUI over an arbitrary directory
pub async fn run_watching(target: &Path, settings: Settings) -> Result<()> {
    let mut monitor = Monitor::watch(target)?;

    terminal::install_panic_hook();
    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse_capture() {
        warn!("Mouse capture unavailable: {}", e);
    }

    // Unified channel for messages from outside the input loop
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    spawn_signal_handler(msg_tx);

    monitor.start_ingestion();

    let mut state = AppState::with_settings(settings);
    let result = run_loop(&mut term, &mut state, &mut monitor, msg_rx);

    terminal::restore();
    monitor.shutdown().await;

    info!("ptymon exiting");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    monitor: &mut Monitor,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    let poll_interval = state.settings.ui.poll_interval();
    // First frame is always drawn
    let mut dirty = true;
    let mut table = TableLayout::default();

    while !state.should_quit() {
        // Process external messages (signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            dirty |= process_message(state, msg);
        }
        if state.should_quit() {
            break;
        }

        if monitor.redraw_receiver().take_pending() {
            dirty = true;
        }

        if dirty {
            let snapshot = monitor.grid().snapshot();
            state.sync_grid(snapshot.row_count(), snapshot.column_count());
            terminal
                .draw(|frame| table = render::view(frame, state, &snapshot))
                .context("Failed to draw frame")?;
            dirty = false;
        }

        if let Some(message) =
            event::poll(poll_interval, &table).context("Failed to poll terminal")?
        {
            dirty |= process_message(state, message);
        }
    }

    Ok(())
}

/// Run a message through `update`, following up chained messages.
/// Returns whether anything asked for a redraw.
pub fn process_message(state: &mut AppState, msg: Message) -> bool {
    let mut redraw = false;
    let mut next = Some(msg);
    while let Some(msg) = next {
        let result = update(state, msg);
        redraw |= result.redraw;
        next = result.message;
    }
    redraw
}
