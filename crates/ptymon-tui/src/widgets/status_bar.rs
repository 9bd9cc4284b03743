//! One-line status bar: mode badge, device count, key hints

use ptymon_app::SelectionMode;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::theme::styles;

pub struct StatusBar {
    mode: SelectionMode,
    devices: usize,
}

impl StatusBar {
    pub fn new(mode: SelectionMode, devices: usize) -> Self {
        Self { mode, devices }
    }

    fn mode_label(&self) -> &'static str {
        match self.mode {
            SelectionMode::Browsing => "BROWSE",
            SelectionMode::Editing => "EDIT",
            SelectionMode::Locked => "LOCKED",
        }
    }

    fn hints(&self) -> &'static str {
        match self.mode {
            SelectionMode::Browsing => "↑/↓ move  Enter edit  q quit",
            SelectionMode::Editing => "←/↑/↓/→ move  Enter mark  q quit",
            SelectionMode::Locked => "↑/↓ move  q quit",
        }
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let noun = if self.devices == 1 { "device" } else { "devices" };
        Line::from(vec![
            Span::styled(format!(" {} ", self.mode_label()), styles::mode_badge(self.mode)),
            Span::styled(format!(" {} {} ", self.devices, noun), styles::text_primary()),
            Span::styled(format!(" {}", self.hints()), styles::text_muted()),
        ])
        .render(area, buf);
    }
}
