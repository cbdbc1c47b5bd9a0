//! Header bar
//!
//! App title on the left, backend reachability and address on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use sdxs_app::{AppState, BackendStatus};

use crate::theme::{palette, styles};

pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(" SDXS Studio", styles::accent_bold()),
            Span::styled("  local image generation", styles::text_muted()),
        ]);
        Paragraph::new(title).render(inner, buf);

        let (icon, label, style) = styles::backend_indicator(&self.state.backend_status);
        let mut spans = vec![
            Span::styled(format!("{} {}", icon, label), style),
            Span::styled(format!("  {} ", self.state.backend_url), styles::text_secondary()),
        ];
        if let BackendStatus::Offline { error } = &self.state.backend_status {
            // Narrow screens keep the indicator and drop the reason
            if inner.width > 100 {
                spans.insert(1, Span::styled(format!(" ({})", error), styles::status_red()));
            }
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_state, TestTerminal};

    #[test]
    fn test_header_shows_title_and_backend() {
        let state = test_state();
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new(&state), Rect::new(0, 0, 80, 3));

        assert!(term.line_contains(1, "SDXS Studio"));
        assert!(term.line_contains(1, "http://host:1234"));
        assert!(term.line_contains(1, "Checking"));
    }

    #[test]
    fn test_header_reflects_backend_status() {
        let mut state = test_state();
        state.backend_status = BackendStatus::Online {
            message: "SD-XS Local Image Generation API".into(),
        };
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new(&state), Rect::new(0, 0, 80, 3));
        assert!(term.buffer_contains("Online"));

        state.backend_status = BackendStatus::Offline {
            error: "connection refused".into(),
        };
        term.render_widget(MainHeader::new(&state), Rect::new(0, 0, 80, 3));
        assert!(term.buffer_contains("Offline"));
    }
}
