//! Key hint footer

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const HINTS: &[(&str, &str)] = &[
    ("Tab", "focus"),
    ("Enter", "run"),
    ("^L", "load"),
    ("^G", "generate"),
    ("^R", "refiner"),
    ("^F", "refine"),
    ("^Q", "quit"),
];

#[derive(Default)]
pub struct KeyHints;

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(HINTS.len() * 2);
        for (key, action) in HINTS {
            spans.push(Span::styled(format!(" {}", key), styles::keybinding()));
            spans.push(Span::styled(format!(" {} ", action), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_key_hints_render() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(KeyHints, term.area());
        assert!(term.buffer_contains("^G generate"));
        assert!(term.buffer_contains("^Q quit"));
    }
}
