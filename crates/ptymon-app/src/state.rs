//! Application state (Model in TEA pattern)
//!
//! Holds the interaction state only. Device data lives in the
//! [`ptymon_core::Registry`] and is read through a grid snapshot each frame;
//! the state just remembers the grid dimensions it last saw so the cursor can
//! be kept inside them.

use crate::config::Settings;

/// Rows moved by PageUp/PageDown
pub const PAGE_ROWS: usize = 10;

/// Selection/interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Row highlight only; arrows move between data rows
    #[default]
    Browsing,
    /// Cell-level navigation; Enter on a data cell marks it
    Editing,
    /// Browsing after a cell was marked; activation is disabled
    Locked,
}

/// Current cursor position in grid coordinates (row 0 is the header)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { row: 1, column: 0 }
    }
}

/// Complete application state
#[derive(Debug, Default)]
pub struct AppState {
    pub settings: Settings,
    pub mode: SelectionMode,
    pub cursor: Cursor,
    /// Cell marked by activation in `Editing` mode
    pub marked: Option<Cursor>,
    rows: usize,
    columns: usize,
    quitting: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    /// Record the latest grid dimensions and pull the cursor back inside them.
    pub fn sync_grid(&mut self, rows: usize, columns: usize) {
        self.rows = rows;
        self.columns = columns;
        self.clamp_cursor();
    }

    pub fn grid_rows(&self) -> usize {
        self.rows
    }

    pub fn grid_columns(&self) -> usize {
        self.columns
    }

    /// Highlighted data row while browsing, `None` when there is none
    pub fn highlighted_row(&self) -> Option<usize> {
        match self.mode {
            SelectionMode::Browsing | SelectionMode::Locked => {
                (self.cursor.row >= 1 && self.cursor.row < self.rows).then_some(self.cursor.row)
            }
            SelectionMode::Editing => None,
        }
    }

    /// Selected cell while editing, `None` otherwise
    pub fn selected_cell(&self) -> Option<Cursor> {
        (self.mode == SelectionMode::Editing && self.cursor.row < self.rows).then_some(self.cursor)
    }

    /// Smallest row the cursor may sit on in the current mode.
    fn min_row(&self) -> usize {
        let last_row = self.rows.saturating_sub(1);
        match self.mode {
            SelectionMode::Editing => 0,
            SelectionMode::Browsing | SelectionMode::Locked => 1.min(last_row),
        }
    }

    pub(crate) fn clamp_cursor(&mut self) {
        let last_row = self.rows.saturating_sub(1);
        let last_column = self.columns.saturating_sub(1);
        self.cursor.row = self.cursor.row.clamp(self.min_row(), last_row);
        self.cursor.column = self.cursor.column.min(last_column);
    }

    pub(crate) fn move_rows(&mut self, delta: isize) {
        self.cursor.row = self.cursor.row.saturating_add_signed(delta);
        self.clamp_cursor();
    }

    pub(crate) fn move_columns(&mut self, delta: isize) {
        self.cursor.column = self.cursor.column.saturating_add_signed(delta);
        self.clamp_cursor();
    }

    pub(crate) fn move_to(&mut self, target: Cursor) {
        self.cursor = target;
        self.clamp_cursor();
    }

    pub(crate) fn move_to_top(&mut self) {
        self.cursor.row = 0;
        self.clamp_cursor();
    }

    pub(crate) fn move_to_bottom(&mut self) {
        self.cursor.row = usize::MAX;
        self.clamp_cursor();
    }
}
