//! Fallback screen shown after a render fault

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use super::modal_overlay::centered_rect;
use crate::theme::styles;

pub struct FallbackScreen<'a> {
    message: &'a str,
}

impl<'a> FallbackScreen<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for FallbackScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = centered_rect(56, 8, area);
        let block = styles::modal_block(" Error ");
        let inner = block.inner(rect);

        Clear.render(rect, buf);
        block.render(rect, buf);

        let lines = vec![
            Line::from(Span::styled(
                "Something went wrong",
                styles::status_red().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.message.to_string(), styles::text_muted())),
            Line::default(),
            Line::from(vec![
                Span::styled("Press r to reload", styles::keybinding()),
                Span::styled("  q to quit", styles::text_muted()),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
