//! Toast notifications, stacked in the top-right corner

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use sdxs_app::ToastStack;

use super::modal_overlay::top_right_rect;
use crate::theme::styles;

const TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 3;

pub struct ToastOverlay<'a> {
    toasts: &'a ToastStack,
}

impl<'a> ToastOverlay<'a> {
    pub fn new(toasts: &'a ToastStack) -> Self {
        Self { toasts }
    }
}

impl Widget for ToastOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toasts: Vec<_> = self.toasts.iter().collect();

        // Newest toast on top
        for (i, toast) in toasts.into_iter().rev().enumerate() {
            let offset = TOAST_HEIGHT * i as u16;
            if offset + TOAST_HEIGHT > area.height {
                break;
            }
            let slot = Rect {
                y: area.y + offset,
                height: area.height - offset,
                ..area
            };
            let rect = top_right_rect(TOAST_WIDTH, TOAST_HEIGHT, 1, slot);

            let (icon, style) = styles::toast_indicator(toast.kind);
            let block = styles::modal_block("").border_style(style);
            let inner = block.inner(rect);

            Clear.render(rect, buf);
            block.render(rect, buf);
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {} ", icon), style),
                Span::styled(toast.text.clone(), styles::text_primary()),
            ]))
            .render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_toasts_render_newest_first() {
        let mut toasts = ToastStack::new();
        toasts.success("Model loaded successfully!");
        toasts.error("Failed to load model: boom");

        let mut term = TestTerminal::new();
        term.render_widget(ToastOverlay::new(&toasts), term.area());

        let (_, newest_y) = term.find("Failed to load model").unwrap();
        let (_, oldest_y) = term.find("Model loaded successfully!").unwrap();
        assert!(newest_y < oldest_y);
    }

    #[test]
    fn test_no_toasts_draw_nothing() {
        let toasts = ToastStack::new();
        let mut term = TestTerminal::with_size(60, 10);
        term.render_widget(ToastOverlay::new(&toasts), term.area());
        assert_eq!(term.content().trim(), "");
    }
}
