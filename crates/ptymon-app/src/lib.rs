//! ptymon-app - Application state and orchestration for ptymon
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! selection state machine, the directory watcher that feeds device events,
//! the single-writer ingestion loop, the coalescing redraw signal, and the
//! [`Monitor`] that ties them together for both frontends.

pub mod config;
pub mod handler;
pub mod ingest;
pub mod input_key;
pub mod message;
pub mod monitor;
pub mod monitor_event;
pub mod redraw;
pub mod signals;
pub mod state;
pub mod watcher;

// Re-export primary types
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use monitor::Monitor;
pub use monitor_event::MonitorEvent;
pub use redraw::{redraw_channel, RedrawReceiver, RedrawSignal};
pub use state::{AppState, Cursor, SelectionMode};
pub use watcher::{EventSource, EventStreams, SourceError};
