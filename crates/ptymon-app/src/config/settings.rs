//! Settings loader for config.toml

use super::types::Settings;
use ptymon_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const PTYMON_DIR: &str = "ptymon";

/// Default settings location: `<config_dir>/ptymon/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(PTYMON_DIR).join(CONFIG_FILENAME))
}

/// Load settings from an explicit path, or from [`default_config_path`].
///
/// Returns default settings if no file exists or it can't be parsed.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    match explicit.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config directory available, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from `config_path`, falling back to defaults.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
