//! Refiner card: refiner selector, refiner load, refinement prompt, refine

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use sdxs_app::{AppState, Focus};

use super::{row, Button, TextInput};
use crate::theme::styles;

pub struct RefinerCard<'a> {
    state: &'a AppState,
}

impl<'a> RefinerCard<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn selector_line(&self) -> Line<'static> {
        let state = self.state;
        let session = &state.session;
        let kind = session.selected_refiner;

        let label_style = if !state.is_enabled(Focus::RefinerSelect) {
            styles::text_muted()
        } else if state.focus == Focus::RefinerSelect {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };

        let (marker, marker_style) = if session.is_refiner_loaded(kind) {
            ("● ready", styles::status_green())
        } else {
            ("○ not loaded", styles::text_muted())
        };

        Line::from(vec![
            Span::styled(" Refiner ", styles::text_secondary()),
            Span::styled("◀ ", styles::accent()),
            Span::styled(kind.label(), label_style),
            Span::styled(" ▶  ", styles::accent()),
            Span::styled(marker, marker_style),
        ])
    }
}

impl Widget for RefinerCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let session = &state.session;
        let focused = matches!(
            state.focus,
            Focus::RefinerSelect | Focus::LoadRefiner | Focus::RefinementPrompt | Focus::Refine
        );

        let block = styles::glass_block(focused).title(" Refine ");
        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(r) = row(inner, 0) {
            Paragraph::new(self.selector_line()).render(r, buf);
        }
        if let Some(r) = row(inner, 1) {
            Button::new("Load Refiner")
                .focused(state.focus == Focus::LoadRefiner)
                .enabled(state.is_enabled(Focus::LoadRefiner))
                .busy(
                    session.is_loading_refiner,
                    "Loading refiner...",
                    state.spinner_frame,
                )
                .render(r, buf);
        }
        if let Some(r) = row(inner, 2) {
            Paragraph::new(Span::styled(" Refinement prompt", styles::text_secondary()))
                .render(r, buf);
        }
        if let Some(r) = row(inner, 3) {
            TextInput::new(session.refinement_prompt.value())
                .placeholder("What should change?")
                .focused(state.focus == Focus::RefinementPrompt)
                .enabled(state.is_enabled(Focus::RefinementPrompt))
                .render(r, buf);
        }
        if let Some(r) = row(inner, 4) {
            Button::new("Refine Image")
                .focused(state.focus == Focus::Refine)
                .enabled(state.is_enabled(Focus::Refine))
                .busy(session.is_refining, "Refining...", state.spinner_frame)
                .render(r, buf);
        }
        if let Some(r) = row(inner, 5) {
            if session.generated_image_filename.is_none() {
                Paragraph::new(Span::styled(" Generate an image first", styles::text_muted()))
                    .render(r, buf);
            }
        }
    }
}
