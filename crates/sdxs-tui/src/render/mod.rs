//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use sdxs_app::{AppPhase, AppState};

use crate::layout;
use crate::theme::palette;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`. Once a render fault has been recorded only
/// the fallback screen is drawn.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    if let AppPhase::Faulted { message } = &state.phase {
        frame.render_widget(widgets::FallbackScreen::new(message), area);
        return;
    }

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(state), areas.header);
    frame.render_widget(widgets::ModelCard::new(state), areas.model);
    frame.render_widget(widgets::GenerateCard::new(state), areas.generate);
    frame.render_widget(widgets::RefinerCard::new(state), areas.refiner);
    frame.render_widget(widgets::ResultsCard::new(state), areas.results);
    frame.render_widget(widgets::StatusPanel::new(state), areas.status);
    frame.render_widget(widgets::KeyHints, areas.footer);

    if !state.toasts.is_empty() {
        frame.render_widget(widgets::ToastOverlay::new(&state.toasts), area);
    }
}
