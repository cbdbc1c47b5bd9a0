//! Action button with a busy state

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Braille spinner, advanced once per tick
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Button<'a> {
    label: &'a str,
    busy_label: &'a str,
    focused: bool,
    enabled: bool,
    busy: bool,
    spinner_frame: usize,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            busy_label: label,
            focused: false,
            enabled: true,
            busy: false,
            spinner_frame: 0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Show `busy_label` with a spinner instead of the button
    pub fn busy(mut self, busy: bool, busy_label: &'a str, spinner_frame: usize) -> Self {
        self.busy = busy;
        self.busy_label = busy_label;
        self.spinner_frame = spinner_frame;
        self
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.busy {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{} {}", spinner, self.busy_label), styles::status_yellow()),
            ])
        } else {
            let style = if !self.enabled {
                styles::text_muted()
            } else if self.focused {
                styles::focused_selected()
            } else {
                styles::accent()
            };
            Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("[ {} ]", self.label), style),
            ])
        };

        Paragraph::new(line).render(area, buf);
    }
}
