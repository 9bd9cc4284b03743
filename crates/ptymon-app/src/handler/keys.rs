//! Key event handlers for the selection modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, SelectionMode};

/// Convert key events to messages based on current selection mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Quit keys work from every mode
    if matches!(
        key,
        InputKey::Esc | InputKey::Char('q') | InputKey::CharCtrl('c')
    ) {
        return Some(Message::Quit);
    }

    match state.mode {
        SelectionMode::Browsing => handle_key_browsing(key),
        SelectionMode::Editing => handle_key_editing(key),
        SelectionMode::Locked => handle_key_locked(key),
    }
}

/// Row navigation shared by every mode
fn handle_row_navigation(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::MoveUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::MoveDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::MoveTop),
        InputKey::End | InputKey::Char('G') => Some(Message::MoveBottom),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        _ => None,
    }
}

fn handle_key_browsing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::Activate),
        _ => handle_row_navigation(key),
    }
}

fn handle_key_editing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::Activate),
        InputKey::Left | InputKey::Char('h') => Some(Message::MoveLeft),
        InputKey::Right | InputKey::Char('l') => Some(Message::MoveRight),
        _ => handle_row_navigation(key),
    }
}

/// Locked mode ignores Enter: a cell has already been marked
fn handle_key_locked(key: InputKey) -> Option<Message> {
    handle_row_navigation(key)
}
