//! Configuration types for ptymon

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lower bound on the terminal input poll interval
pub const MIN_POLL_INTERVAL_MS: u64 = 10;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Draw borders around the grid and between cells
    #[serde(default = "default_true")]
    pub show_borders: bool,

    /// How long the render loop waits for terminal input before checking
    /// for redraw requests again
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Center cell text horizontally
    #[serde(default = "default_true")]
    pub center_cells: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_borders: true,
            poll_interval_ms: default_poll_interval_ms(),
            center_cells: true,
        }
    }
}

impl UiSettings {
    /// Poll interval as a `Duration`, never below [`MIN_POLL_INTERVAL_MS`]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(MIN_POLL_INTERVAL_MS))
    }
}

fn default_poll_interval_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}
