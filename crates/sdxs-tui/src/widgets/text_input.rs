//! Single-line text input
//!
//! Shows the tail of the value so the cursor stays visible, with a trailing
//! `_` cursor while focused.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::styles;

pub struct TextInput<'a> {
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
    enabled: bool,
}

impl<'a> TextInput<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            placeholder: "",
            focused: false,
            enabled: true,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Longest suffix of `text` no wider than `max_width` columns
pub(crate) fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &text[start..]
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height == 0 {
            return;
        }

        let marker = if self.focused {
            Span::styled("› ", styles::accent_bold())
        } else {
            Span::raw("  ")
        };

        // Marker takes 2 columns; the cursor takes 1 while focused
        let room = area.width as usize - 2 - usize::from(self.focused);

        let mut spans = vec![marker];
        if self.value.is_empty() && !self.focused {
            spans.push(Span::styled(
                visible_tail(self.placeholder, room).to_string(),
                styles::text_muted(),
            ));
        } else {
            let style = if self.enabled {
                styles::text_primary()
            } else {
                styles::text_muted()
            };
            spans.push(Span::styled(visible_tail(self.value, room).to_string(), style));
        }
        if self.focused {
            spans.push(Span::styled("_", styles::accent()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
