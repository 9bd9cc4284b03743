//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Cursor, SelectionMode};

/// State over a grid with a header and `data_rows` device rows
fn state_with_rows(data_rows: usize) -> AppState {
    let mut state = AppState::new();
    state.sync_grid(data_rows + 1, 2);
    state
}

/// Run a key through handle_key + update, following up like the event loop does
fn press(state: &mut AppState, key: InputKey) -> bool {
    let mut redraw = false;
    let mut next = Some(Message::Key(key));
    while let Some(msg) = next {
        let result = update(state, msg);
        redraw |= result.redraw;
        next = result.message;
    }
    redraw
}

#[test]
fn test_quit_message_sets_quitting() {
    let mut state = AppState::new();
    assert!(!state.should_quit());

    update(&mut state, Message::Quit);

    assert!(state.should_quit());
}

#[test]
fn test_quit_keys_work_in_every_mode() {
    for mode in [
        SelectionMode::Browsing,
        SelectionMode::Editing,
        SelectionMode::Locked,
    ] {
        for key in [InputKey::Esc, InputKey::Char('q'), InputKey::CharCtrl('c')] {
            let mut state = state_with_rows(2);
            state.mode = mode;
            assert_eq!(handle_key(&state, key), Some(Message::Quit));
        }
    }
}

#[test]
fn test_tick_does_not_redraw() {
    let mut state = state_with_rows(1);
    assert!(!update(&mut state, Message::Tick).redraw);
}

#[test]
fn test_resize_redraws() {
    let mut state = state_with_rows(1);
    assert!(update(&mut state, Message::Resize).redraw);
}

#[test]
fn test_browsing_moves_row_highlight() {
    let mut state = state_with_rows(3);
    assert_eq!(state.highlighted_row(), Some(1));

    assert!(press(&mut state, InputKey::Down));
    press(&mut state, InputKey::Char('j'));
    assert_eq!(state.highlighted_row(), Some(3));

    press(&mut state, InputKey::Down);
    assert_eq!(state.highlighted_row(), Some(3));

    press(&mut state, InputKey::Up);
    assert_eq!(state.highlighted_row(), Some(2));
}

#[test]
fn test_browsing_never_highlights_header() {
    let mut state = state_with_rows(3);
    press(&mut state, InputKey::Up);
    press(&mut state, InputKey::Home);
    assert_eq!(state.cursor.row, 1);
}

#[test]
fn test_browsing_ignores_column_keys() {
    let mut state = state_with_rows(3);
    assert!(!press(&mut state, InputKey::Right));
    assert_eq!(state.cursor.column, 0);
}

#[test]
fn test_page_keys_jump_by_page() {
    let mut state = state_with_rows(25);
    press(&mut state, InputKey::PageDown);
    assert_eq!(state.cursor.row, 11);
    press(&mut state, InputKey::PageDown);
    press(&mut state, InputKey::PageDown);
    assert_eq!(state.cursor.row, 25);
    press(&mut state, InputKey::PageUp);
    assert_eq!(state.cursor.row, 15);
}

#[test]
fn test_end_moves_to_last_row() {
    let mut state = state_with_rows(6);
    press(&mut state, InputKey::End);
    assert_eq!(state.cursor.row, 6);
    press(&mut state, InputKey::Char('g'));
    assert_eq!(state.cursor.row, 1);
}

#[test]
fn test_enter_switches_to_editing() {
    let mut state = state_with_rows(2);
    press(&mut state, InputKey::Enter);

    assert_eq!(state.mode, SelectionMode::Editing);
    assert_eq!(state.selected_cell(), Some(Cursor { row: 1, column: 0 }));
    assert_eq!(state.highlighted_row(), None);
}

#[test]
fn test_editing_navigates_cells() {
    let mut state = state_with_rows(2);
    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Down);

    assert_eq!(state.selected_cell(), Some(Cursor { row: 2, column: 1 }));

    press(&mut state, InputKey::Char('h'));
    assert_eq!(state.cursor.column, 0);
}

#[test]
fn test_activating_header_cell_does_nothing() {
    let mut state = state_with_rows(2);
    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::Up);
    assert_eq!(state.cursor.row, 0);

    assert!(!press(&mut state, InputKey::Enter));
    assert_eq!(state.mode, SelectionMode::Editing);
    assert!(state.marked.is_none());
}

#[test]
fn test_activating_data_cell_marks_and_locks() {
    let mut state = state_with_rows(3);
    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Enter);

    assert_eq!(state.mode, SelectionMode::Locked);
    assert_eq!(state.marked, Some(Cursor { row: 2, column: 1 }));
}

#[test]
fn test_locked_mode_disables_activation() {
    let mut state = state_with_rows(3);
    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::Enter);
    assert_eq!(state.mode, SelectionMode::Locked);

    assert_eq!(handle_key(&state, InputKey::Enter), None);
    update(&mut state, Message::Activate);
    assert_eq!(state.mode, SelectionMode::Locked);
    assert_eq!(state.marked, Some(Cursor { row: 1, column: 0 }));
}

#[test]
fn test_locked_mode_still_browses_rows() {
    let mut state = state_with_rows(3);
    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::Enter);

    press(&mut state, InputKey::Down);
    assert_eq!(state.highlighted_row(), Some(2));
}

#[test]
fn test_grid_growth_in_any_mode_keeps_cursor_valid() {
    for mode in [
        SelectionMode::Browsing,
        SelectionMode::Editing,
        SelectionMode::Locked,
    ] {
        let mut state = state_with_rows(0);
        state.mode = mode;
        press(&mut state, InputKey::Down);
        state.sync_grid(5, 2);
        press(&mut state, InputKey::End);
        assert_eq!(state.cursor.row, 4);
        assert!(!state.should_quit());
    }
}

#[test]
fn test_activate_on_empty_grid_is_harmless() {
    let mut state = state_with_rows(0);
    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::Enter);

    assert_eq!(state.mode, SelectionMode::Editing);
    assert!(state.marked.is_none());
}

/// Run a message through update, following up like the event loop does
fn dispatch(state: &mut AppState, msg: Message) -> bool {
    let mut redraw = false;
    let mut next = Some(msg);
    while let Some(msg) = next {
        let result = update(state, msg);
        redraw |= result.redraw;
        next = result.message;
    }
    redraw
}

#[test]
fn test_click_selects_row_while_browsing() {
    let mut state = state_with_rows(4);

    assert!(dispatch(&mut state, Message::Click { row: 3, column: 1 }));

    assert_eq!(state.mode, SelectionMode::Browsing);
    assert_eq!(state.cursor.row, 3);
    assert_eq!(state.highlighted_row(), Some(3));
    assert!(state.marked.is_none());
}

#[test]
fn test_click_on_header_while_browsing_is_ignored() {
    let mut state = state_with_rows(4);
    press(&mut state, InputKey::Down);

    assert!(!dispatch(&mut state, Message::Click { row: 0, column: 0 }));
    assert_eq!(state.cursor.row, 2);
}

#[test]
fn test_click_while_editing_marks_cell() {
    let mut state = state_with_rows(3);
    press(&mut state, InputKey::Enter);
    assert_eq!(state.mode, SelectionMode::Editing);

    assert!(dispatch(&mut state, Message::Click { row: 2, column: 1 }));

    assert_eq!(state.marked, Some(Cursor { row: 2, column: 1 }));
    assert_eq!(state.mode, SelectionMode::Locked);
}

#[test]
fn test_click_on_header_while_editing_only_moves() {
    let mut state = state_with_rows(3);
    press(&mut state, InputKey::Enter);

    dispatch(&mut state, Message::Click { row: 0, column: 1 });

    assert_eq!(state.cursor, Cursor { row: 0, column: 1 });
    assert_eq!(state.mode, SelectionMode::Editing);
    assert!(state.marked.is_none());
}

#[test]
fn test_click_in_locked_mode_moves_without_marking() {
    let mut state = state_with_rows(3);
    press(&mut state, InputKey::Enter);
    dispatch(&mut state, Message::Click { row: 1, column: 0 });
    assert_eq!(state.mode, SelectionMode::Locked);

    assert!(dispatch(&mut state, Message::Click { row: 3, column: 1 }));

    assert_eq!(state.cursor.row, 3);
    assert_eq!(state.marked, Some(Cursor { row: 1, column: 0 }));
    assert_eq!(state.mode, SelectionMode::Locked);
}

#[test]
fn test_click_outside_grid_is_ignored() {
    let mut state = state_with_rows(2);
    press(&mut state, InputKey::Enter);

    assert!(!dispatch(&mut state, Message::Click { row: 3, column: 0 }));
    assert!(!dispatch(&mut state, Message::Click { row: 1, column: 2 }));
    assert_eq!(state.mode, SelectionMode::Editing);
    assert!(state.marked.is_none());
}
