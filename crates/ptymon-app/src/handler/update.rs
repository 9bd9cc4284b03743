//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, Cursor, SelectionMode, PAGE_ROWS};
use ptymon_core::prelude::*;

use super::{keys, UpdateResult};

/// Process a message and update state
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::Resize => UpdateResult::redraw(),

        Message::Quit => {
            info!("Quit requested");
            state.request_quit();
            UpdateResult::none()
        }

        Message::MoveUp => {
            state.move_rows(-1);
            UpdateResult::redraw()
        }
        Message::MoveDown => {
            state.move_rows(1);
            UpdateResult::redraw()
        }
        Message::PageUp => {
            state.move_rows(-(PAGE_ROWS as isize));
            UpdateResult::redraw()
        }
        Message::PageDown => {
            state.move_rows(PAGE_ROWS as isize);
            UpdateResult::redraw()
        }
        Message::MoveTop => {
            state.move_to_top();
            UpdateResult::redraw()
        }
        Message::MoveBottom => {
            state.move_to_bottom();
            UpdateResult::redraw()
        }

        Message::MoveLeft | Message::MoveRight if state.mode != SelectionMode::Editing => {
            UpdateResult::none()
        }
        Message::MoveLeft => {
            state.move_columns(-1);
            UpdateResult::redraw()
        }
        Message::MoveRight => {
            state.move_columns(1);
            UpdateResult::redraw()
        }

        Message::Activate => handle_activate(state),

        Message::Click { row, column } => handle_click(state, Cursor { row, column }),
    }
}

/// A click moves the cursor onto the cell. While editing it also marks the
/// cell, exactly like Enter would.
fn handle_click(state: &mut AppState, target: Cursor) -> UpdateResult {
    if target.row >= state.grid_rows() || target.column >= state.grid_columns() {
        return UpdateResult::none();
    }
    match state.mode {
        SelectionMode::Editing => {
            state.move_to(target);
            UpdateResult {
                message: Some(Message::Activate),
                redraw: true,
            }
        }
        // The header is not a selectable row while browsing
        SelectionMode::Browsing | SelectionMode::Locked if target.row == 0 => {
            UpdateResult::none()
        }
        SelectionMode::Browsing | SelectionMode::Locked => {
            state.move_to(Cursor {
                row: target.row,
                column: state.cursor.column,
            });
            UpdateResult::redraw()
        }
    }
}

fn handle_activate(state: &mut AppState) -> UpdateResult {
    match state.mode {
        SelectionMode::Browsing => {
            debug!("Entering cell selection");
            state.mode = SelectionMode::Editing;
            state.clamp_cursor();
            UpdateResult::redraw()
        }
        SelectionMode::Editing if state.cursor.row == 0 => UpdateResult::none(),
        SelectionMode::Editing => {
            if state.cursor.row >= state.grid_rows() {
                return UpdateResult::none();
            }
            debug!(
                "Marked cell row={} column={}",
                state.cursor.row, state.cursor.column
            );
            state.marked = Some(state.cursor);
            state.mode = SelectionMode::Locked;
            state.clamp_cursor();
            UpdateResult::redraw()
        }
        SelectionMode::Locked => UpdateResult::none(),
    }
}
