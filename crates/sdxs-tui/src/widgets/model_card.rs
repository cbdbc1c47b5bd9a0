//! Model setup card: model card URL and the load button

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use sdxs_app::{AppState, Focus};

use super::{row, Button, TextInput};
use crate::theme::styles;

pub struct ModelCard<'a> {
    state: &'a AppState,
}

impl<'a> ModelCard<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for ModelCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let session = &state.session;
        let focused = matches!(state.focus, Focus::ModelUrl | Focus::LoadModel);

        let block = styles::glass_block(focused).title(" Model Setup ");
        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(r) = row(inner, 0) {
            Paragraph::new(Span::styled(" Model card URL", styles::text_secondary())).render(r, buf);
        }
        if let Some(r) = row(inner, 1) {
            TextInput::new(session.model_url.value())
                .placeholder("https://huggingface.co/...")
                .focused(state.focus == Focus::ModelUrl)
                .enabled(state.is_enabled(Focus::ModelUrl))
                .render(r, buf);
        }
        if let Some(r) = row(inner, 2) {
            Button::new("Fetch & Load Model")
                .focused(state.focus == Focus::LoadModel)
                .enabled(state.is_enabled(Focus::LoadModel))
                .busy(session.is_loading, "Loading model...", state.spinner_frame)
                .render(r, buf);
        }
        if let Some(r) = row(inner, 3) {
            let line = if session.model_loaded {
                Line::from(Span::styled(" ● Model ready", styles::status_green()))
            } else {
                Line::from(Span::styled(" ○ No model loaded", styles::text_muted()))
            };
            Paragraph::new(line).render(r, buf);
        }
    }
}
