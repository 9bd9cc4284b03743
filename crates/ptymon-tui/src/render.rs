//! Main render/view function (View in TEA pattern)

use ptymon_app::AppState;
use ptymon_core::{GridSnapshot, GridSource};
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::widgets::{DeviceTable, StatusBar, TableLayout};

/// Render the complete UI from one grid snapshot and return the table
/// geometry for mouse hit-testing.
///
/// Pure apart from drawing; the caller syncs `state` with the snapshot's
/// dimensions first.
pub fn view(frame: &mut Frame, state: &AppState, grid: &GridSnapshot) -> TableLayout {
    let [table_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let ui = &state.settings.ui;
    let table = DeviceTable::new(grid)
        .highlighted_row(state.highlighted_row())
        .selected_cell(state.selected_cell())
        .marked(state.marked)
        .show_borders(ui.show_borders)
        .center_cells(ui.center_cells);
    let layout = table.layout(table_area);
    frame.render_widget(table, table_area);

    frame.render_widget(
        StatusBar::new(state.mode, grid.row_count().saturating_sub(1)),
        status_area,
    );

    layout
}
