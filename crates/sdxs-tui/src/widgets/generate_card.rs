//! Prompt entry and the generate button

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::{Paragraph, Widget},
};

use sdxs_app::{AppState, Focus};
use sdxs_backend::GenerateRequest;

use super::{row, Button, TextInput};
use crate::theme::styles;

pub struct GenerateCard<'a> {
    state: &'a AppState,
}

impl<'a> GenerateCard<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for GenerateCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let session = &state.session;
        let focused = matches!(state.focus, Focus::Prompt | Focus::Generate);

        let block = styles::glass_block(focused).title(" Generate ");
        let inner = block.inner(area);
        block.render(area, buf);

        let placeholder = if session.model_loaded {
            "Describe the image..."
        } else {
            "Load a model first"
        };

        if let Some(r) = row(inner, 0) {
            Paragraph::new(Span::styled(" Prompt", styles::text_secondary())).render(r, buf);
        }
        if let Some(r) = row(inner, 1) {
            TextInput::new(session.prompt.value())
                .placeholder(placeholder)
                .focused(state.focus == Focus::Prompt)
                .enabled(state.is_enabled(Focus::Prompt))
                .render(r, buf);
        }
        if let Some(r) = row(inner, 2) {
            Button::new("Generate Image")
                .focused(state.focus == Focus::Generate)
                .enabled(state.is_enabled(Focus::Generate))
                .busy(session.is_generating, "Generating...", state.spinner_frame)
                .render(r, buf);
        }
        if let Some(r) = row(inner, 3) {
            let params = format!(
                " {} · {} steps · guidance {:.1}",
                GenerateRequest::DEFAULT_SIZE,
                GenerateRequest::DEFAULT_STEPS,
                GenerateRequest::DEFAULT_GUIDANCE
            );
            Paragraph::new(Span::styled(params, styles::text_muted())).render(r, buf);
        }
    }
}
