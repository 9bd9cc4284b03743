//! Semantic style builders.

use ptymon_app::SelectionMode;
use ptymon_core::CellStyle;
use ratatui::style::{Modifier, Style};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

// --- Border styles ---
pub fn border() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

// --- Grid cells ---

/// Base style for a grid cell, before any selection is applied
pub fn cell(style: CellStyle) -> Style {
    match style {
        CellStyle::Header => Style::default()
            .fg(palette::HEADER)
            .add_modifier(Modifier::BOLD),
        CellStyle::Active => Style::default().fg(palette::DEVICE_ACTIVE),
        CellStyle::Removed => Style::default().fg(palette::DEVICE_REMOVED),
    }
}

/// Cell marked by activation
pub fn marked() -> Style {
    Style::default()
        .fg(palette::MARKED)
        .add_modifier(Modifier::BOLD)
}

pub fn row_highlight() -> Style {
    Style::default().bg(palette::ROW_HIGHLIGHT_BG)
}

pub fn cell_selected() -> Style {
    Style::default()
        .fg(palette::CELL_SELECTED_FG)
        .bg(palette::CELL_SELECTED_BG)
        .add_modifier(Modifier::BOLD)
}

// --- Status bar ---
pub fn mode_badge(mode: SelectionMode) -> Style {
    let color = match mode {
        SelectionMode::Browsing => palette::MODE_BROWSING,
        SelectionMode::Editing => palette::MODE_EDITING,
        SelectionMode::Locked => palette::MODE_LOCKED,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
