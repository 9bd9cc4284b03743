//! Widget components for the TUI

mod device_table;
mod status_bar;

pub use device_table::{DeviceTable, TableLayout};
pub use status_bar::StatusBar;
