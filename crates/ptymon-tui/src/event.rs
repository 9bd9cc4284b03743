//! Terminal event polling

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ptymon_app::{InputKey, Message};
use ptymon_core::prelude::*;
use std::time::Duration;

use crate::widgets::TableLayout;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}

/// Map a terminal event onto a message, if it means anything to us.
///
/// Left clicks are resolved against `table`, the geometry of the last drawn
/// frame.
pub fn translate(event: Event, table: &TableLayout) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => table
            .cell_at(mouse.column, mouse.row)
            .map(|cell| Message::Click {
                row: cell.row,
                column: cell.column,
            }),
        Event::Resize(_, _) => Some(Message::Resize),
        _ => None,
    }
}

/// Poll for terminal events, waiting at most `timeout`.
///
/// A timeout yields [`Message::Tick`] so the caller gets a chance to check
/// for pending redraws.
pub fn poll(timeout: Duration, table: &TableLayout) -> Result<Option<Message>> {
    if event::poll(timeout)? {
        Ok(translate(event::read()?, table))
    } else {
        Ok(Some(Message::Tick))
    }
}
