//! Terminal setup and restoration

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

/// Install a panic hook that restores the terminal before the default hook
/// prints the panic message
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Ask the terminal to report mouse clicks
pub fn enable_mouse_capture() -> std::io::Result<()> {
    execute!(std::io::stdout(), EnableMouseCapture)
}

/// Stop mouse reporting and leave the alternate screen
pub fn restore() {
    if let Err(e) = execute!(std::io::stdout(), DisableMouseCapture) {
        tracing::warn!("Failed to disable mouse capture: {}", e);
    }
    ratatui::restore();
}
