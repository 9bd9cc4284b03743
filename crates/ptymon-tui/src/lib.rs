//! ptymon-tui - Terminal UI for ptymon
//!
//! This crate provides the ratatui-based terminal interface. It creates a
//! [`ptymon_app::Monitor`] over the pseudo-terminal directory and adds
//! terminal rendering, event polling, and the device grid widget.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry points
pub use runner::{run, run_watching};
