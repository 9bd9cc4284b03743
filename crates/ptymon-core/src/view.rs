//! Read-only grid view over the [`Registry`]
//!
//! Row 0 is a fixed header; row `n` (n >= 1) shows the `n - 1`th registry
//! record. Column 0 is the device path, column 1 the activity count.
//!
//! Coordinates are signed so callers can probe outside the grid: any negative
//! or out-of-range coordinate yields `None` rather than an error or panic.

use crate::registry::{DeviceRecord, Registry};

/// Number of grid columns: device path and activity count
pub const COLUMN_COUNT: usize = 2;

/// Header row labels, by column
pub const HEADER_LABELS: [&str; COLUMN_COUNT] = ["pts", "ops count"];

/// Styling hint attached to each cell; renderers map it to colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// Header row
    Header,
    /// Device whose node currently exists
    Active,
    /// Device whose node has been removed (rendered dim)
    Removed,
}

/// Content and styling of one grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub text: String,
    pub style: CellStyle,
}

impl GridCell {
    fn new(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Row/column query contract consumed by renderers.
pub trait GridSource {
    /// Number of rows including the header row
    fn row_count(&self) -> usize;

    /// Number of columns
    fn column_count(&self) -> usize {
        COLUMN_COUNT
    }

    /// Cell at `(row, column)`, or `None` when either coordinate is negative
    /// or out of range.
    fn cell_at(&self, row: isize, column: isize) -> Option<GridCell>;
}

/// Convert signed coordinates to a `(row, column)` pair inside the column range.
fn checked_coords(row: isize, column: isize) -> Option<(usize, usize)> {
    let row = usize::try_from(row).ok()?;
    let column = usize::try_from(column).ok()?;
    (column < COLUMN_COUNT).then_some((row, column))
}

fn header_cell(column: usize) -> Option<GridCell> {
    HEADER_LABELS
        .get(column)
        .map(|label| GridCell::new(*label, CellStyle::Header))
}

fn record_cell(record: &DeviceRecord, column: usize) -> Option<GridCell> {
    let style = if record.removed {
        CellStyle::Removed
    } else {
        CellStyle::Active
    };
    match column {
        0 => Some(GridCell::new(record.path.as_str(), style)),
        1 => Some(GridCell::new(record.activity_count.to_string(), style)),
        _ => None,
    }
}

/// Live view over a registry. Each query takes the registry's read guard
/// on its own; use [`DeviceGrid::snapshot`] when several cells must agree.
#[derive(Debug, Clone, Copy)]
pub struct DeviceGrid<'a> {
    registry: &'a Registry,
}

impl<'a> DeviceGrid<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Copy the current rows under a single read guard.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            rows: self.registry.snapshot(),
        }
    }
}

impl GridSource for DeviceGrid<'_> {
    fn row_count(&self) -> usize {
        self.registry.len() + 1
    }

    fn cell_at(&self, row: isize, column: isize) -> Option<GridCell> {
        match checked_coords(row, column)? {
            (0, column) => header_cell(column),
            (row, column) => record_cell(&self.registry.record_at(row - 1)?, column),
        }
    }
}

/// Owned copy of the grid rows, consistent for a whole draw cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridSnapshot {
    rows: Vec<DeviceRecord>,
}

impl GridSnapshot {
    pub fn records(&self) -> &[DeviceRecord] {
        &self.rows
    }
}

impl GridSource for GridSnapshot {
    fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    fn cell_at(&self, row: isize, column: isize) -> Option<GridCell> {
        match checked_coords(row, column)? {
            (0, column) => header_cell(column),
            (row, column) => record_cell(self.rows.get(row - 1)?, column),
        }
    }
}
