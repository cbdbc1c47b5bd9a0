//! Status lines for the model/generate workflow and the refiner workflow

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use sdxs_app::AppState;

use super::row;
use crate::theme::styles;

pub struct StatusPanel<'a> {
    state: &'a AppState,
}

impl<'a> StatusPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

fn status_line(text: &str) -> Line<'static> {
    if text.is_empty() {
        Line::from(Span::styled(" Ready", styles::text_muted()))
    } else {
        Line::from(Span::styled(format!(" {}", text), styles::status_line(text)))
    }
}

impl Widget for StatusPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = &self.state.session;

        let block = styles::glass_block(false).title(" Status ");
        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(r) = row(inner, 0) {
            Paragraph::new(status_line(&session.status_message)).render(r, buf);
        }
        if let Some(r) = row(inner, 1) {
            // The refiner line only appears once the refiner workflow has said something
            if !session.refiner_status_message.is_empty() {
                Paragraph::new(status_line(&session.refiner_status_message)).render(r, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_state, TestTerminal};

    #[test]
    fn test_idle_status() {
        let state = test_state();
        let mut term = TestTerminal::with_size(60, 4);
        term.render_widget(StatusPanel::new(&state), term.area());
        assert!(term.line_contains(1, "Ready"));
    }

    #[test]
    fn test_both_status_lines() {
        let mut state = test_state();
        state.session.status_message = "✓ Image generated: a.png".into();
        state.session.refiner_status_message =
            "Refining image... (this may take 30-60 seconds)".into();

        let mut term = TestTerminal::with_size(60, 4);
        term.render_widget(StatusPanel::new(&state), term.area());

        assert!(term.line_contains(1, "Image generated: a.png"));
        assert!(term.line_contains(2, "Refining image..."));
    }
}
