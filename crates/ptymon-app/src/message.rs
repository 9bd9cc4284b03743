//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Poll timeout with no input
    Tick,

    /// Terminal was resized
    Resize,

    /// Quit immediately (Esc, q, Ctrl+C, or a termination signal)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Jump to the first selectable row
    MoveTop,
    /// Jump to the last row
    MoveBottom,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Selection Messages
    // ─────────────────────────────────────────────────────────
    /// Enter cell editing from browsing, or mark the current cell
    Activate,

    /// Left click on a grid cell (row 0 is the header)
    Click { row: usize, column: usize },
}
