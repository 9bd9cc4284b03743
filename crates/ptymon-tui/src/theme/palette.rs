//! Color palette.

use ratatui::style::Color;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Grid cells ---
pub const HEADER: Color = Color::Yellow;
pub const DEVICE_ACTIVE: Color = Color::White;
pub const DEVICE_REMOVED: Color = Color::DarkGray;
pub const MARKED: Color = Color::Red;

// --- Selection ---
pub const ROW_HIGHLIGHT_BG: Color = Color::Rgb(28, 33, 43);
pub const CELL_SELECTED_FG: Color = Color::Black;
pub const CELL_SELECTED_BG: Color = Color::Cyan;

// --- Mode badges ---
pub const MODE_BROWSING: Color = Color::Green;
pub const MODE_EDITING: Color = Color::Cyan;
pub const MODE_LOCKED: Color = Color::Red;
