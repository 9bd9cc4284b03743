//! Configuration file parsing for ptymon
//!
//! Supports:
//! - `~/.config/ptymon/config.toml` - Global settings
//! - `--config <PATH>` - Explicit settings file
//!
//! The watch target is deliberately absent: it is always [`ptymon_core::PTS_DIR`].

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, load_settings_from};
pub use types::*;
