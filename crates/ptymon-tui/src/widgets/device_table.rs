//! # Device Table Widget
//!
//! Renders any [`GridSource`] as a table: row 0 is the header and stays
//! pinned, data rows scroll so the focused row is always visible. Supports a
//! row highlight (browsing), a single selected cell (editing), and a marked
//! cell drawn in red.
//!
//! [`DeviceTable::layout`] returns the [`TableLayout`] the widget draws
//! with, so mouse positions can be mapped back onto grid cells.

use ptymon_app::Cursor;
use ptymon_core::GridSource;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Widget};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

/// Vertical rule drawn between columns when borders are on
const COLUMN_SEPARATOR: &str = "│";

/// Screen geometry of one rendered table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableLayout {
    inner: Rect,
    columns: Vec<Rect>,
    /// Grid row drawn on the first line below the header
    first_row: usize,
    row_count: usize,
}

impl TableLayout {
    /// Grid cell under the terminal position `(x, y)`, if any.
    ///
    /// Borders, column separators and lines past the last row hit nothing.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<Cursor> {
        if y < self.inner.top() || y >= self.inner.bottom() {
            return None;
        }
        let column = self
            .columns
            .iter()
            .position(|area| x >= area.left() && x < area.right())?;
        let row = match usize::from(y - self.inner.y) {
            0 => 0,
            line => self.first_row + line - 1,
        };
        (row < self.row_count).then_some(Cursor { row, column })
    }
}

/// Table widget over a grid snapshot.
///
/// The widget is pure: it owns no state. The caller takes the snapshot and
/// passes in the selection from `AppState`.
pub struct DeviceTable<'a, G: GridSource + ?Sized> {
    grid: &'a G,
    highlighted_row: Option<usize>,
    selected_cell: Option<Cursor>,
    marked: Option<Cursor>,
    show_borders: bool,
    center_cells: bool,
}

impl<'a, G: GridSource + ?Sized> DeviceTable<'a, G> {
    pub fn new(grid: &'a G) -> Self {
        Self {
            grid,
            highlighted_row: None,
            selected_cell: None,
            marked: None,
            show_borders: true,
            center_cells: true,
        }
    }

    /// Grid row to highlight across its full width
    pub fn highlighted_row(mut self, row: Option<usize>) -> Self {
        self.highlighted_row = row;
        self
    }

    /// Single cell with the editing cursor
    pub fn selected_cell(mut self, cell: Option<Cursor>) -> Self {
        self.selected_cell = cell;
        self
    }

    pub fn marked(mut self, cell: Option<Cursor>) -> Self {
        self.marked = cell;
        self
    }

    pub fn show_borders(mut self, show: bool) -> Self {
        self.show_borders = show;
        self
    }

    pub fn center_cells(mut self, center: bool) -> Self {
        self.center_cells = center;
        self
    }
}

impl<G: GridSource + ?Sized> Widget for DeviceTable<'_, G> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.show_borders {
            self.block().render(area, buf);
        }

        let layout = self.layout(area);
        let inner = layout.inner;
        if layout.columns.is_empty() {
            return;
        }

        // Header stays pinned to the first line
        self.render_row(0, inner, inner.y, &layout.columns, buf);

        let visible = usize::from(inner.height - 1);
        for (offset, row) in (layout.first_row..layout.row_count)
            .take(visible)
            .enumerate()
        {
            // offset < inner.height, so it fits in u16
            let y = inner.y + 1 + offset as u16;
            self.render_row(row, inner, y, &layout.columns, buf);
        }

        if self.show_borders {
            self.render_separators(inner, &layout.columns, buf);
        }
    }
}

impl<G: GridSource + ?Sized> DeviceTable<'_, G> {
    /// Geometry the widget will draw with in `area`
    pub fn layout(&self, area: Rect) -> TableLayout {
        let inner = if self.show_borders {
            self.block().inner(area)
        } else {
            area
        };
        let count = self.grid.column_count();
        let columns = if inner.width == 0 || inner.height == 0 || count == 0 {
            Vec::new()
        } else {
            self.column_areas(inner, count)
        };

        TableLayout {
            inner,
            columns,
            first_row: self.first_visible_row(usize::from(inner.height.saturating_sub(1))),
            row_count: self.grid.row_count(),
        }
    }

    fn block(&self) -> Block<'static> {
        Block::bordered()
            .border_style(styles::border())
            .title(Line::styled(" ptymon ", styles::accent()))
    }

    fn separator_width(&self) -> u16 {
        u16::from(self.show_borders)
    }

    /// Split `area` into equal column slices. The last column takes the
    /// remainder.
    fn column_areas(&self, area: Rect, columns: usize) -> Vec<Rect> {
        let count = u16::try_from(columns).unwrap_or(u16::MAX).max(1);
        let separator = self.separator_width();
        let usable = area
            .width
            .saturating_sub(separator.saturating_mul(count - 1));
        let base = usable / count;
        let remainder = usable % count;

        let mut x = area.x;
        (0..count)
            .map(|index| {
                let width = if index == count - 1 {
                    base + remainder
                } else {
                    base
                };
                let column = Rect {
                    x,
                    width,
                    ..area
                };
                x = x.saturating_add(width + separator);
                column
            })
            .collect()
    }

    /// First data row to draw so the focused row fits in `visible` lines
    fn first_visible_row(&self, visible: usize) -> usize {
        let focus = self
            .highlighted_row
            .or(self.selected_cell.map(|cell| cell.row))
            .unwrap_or(1);
        if visible == 0 {
            return self.grid.row_count();
        }
        if focus > visible {
            focus - visible + 1
        } else {
            1
        }
    }

    fn render_row(&self, row: usize, inner: Rect, y: u16, columns: &[Rect], buf: &mut Buffer) {
        if self.highlighted_row == Some(row) {
            buf.set_style(Rect { y, height: 1, ..inner }, styles::row_highlight());
        }

        for (column, area) in columns.iter().enumerate() {
            let Some(cell) = self.grid.cell_at(row as isize, column as isize) else {
                continue;
            };
            let position = Cursor { row, column };
            let cell_area = Rect {
                y,
                height: 1,
                ..*area
            };

            let mut style = styles::cell(cell.style);
            if self.marked == Some(position) {
                style = style.patch(styles::marked());
            }
            if self.selected_cell == Some(position) {
                style = style.patch(styles::cell_selected());
                buf.set_style(cell_area, style);
            }

            self.render_text(&cell.text, cell_area, style, buf);
        }
    }

    fn render_text(&self, text: &str, area: Rect, style: Style, buf: &mut Buffer) {
        if area.width == 0 {
            return;
        }
        let text_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let x = if self.center_cells && text_width < area.width {
            area.x + (area.width - text_width) / 2
        } else {
            area.x
        };
        buf.set_stringn(x, area.y, text, usize::from(area.right() - x), style);
    }

    fn render_separators(&self, inner: Rect, columns: &[Rect], buf: &mut Buffer) {
        for area in columns.iter().take(columns.len().saturating_sub(1)) {
            let x = area.right();
            if x >= inner.right() {
                break;
            }
            for y in inner.top()..inner.bottom() {
                buf.set_string(x, y, COLUMN_SEPARATOR, styles::border());
            }
        }
    }
}
