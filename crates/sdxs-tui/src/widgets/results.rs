//! Generated and refined image URLs

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use sdxs_app::AppState;

use super::row;
use crate::theme::styles;

pub struct ResultsCard<'a> {
    state: &'a AppState,
}

impl<'a> ResultsCard<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

fn heading(label: &str, at: Option<&DateTime<Local>>) -> Line<'static> {
    let mut spans = vec![Span::styled(format!(" {}", label), styles::text_secondary())];
    if let Some(at) = at {
        spans.push(Span::styled(
            format!("  {}", at.format("%H:%M:%S")),
            styles::text_muted(),
        ));
    }
    Line::from(spans)
}

fn url_line(url: Option<&str>) -> Line<'static> {
    match url {
        Some(url) => Line::from(Span::styled(format!(" {}", url), styles::accent())),
        None => Line::from(Span::styled(" none yet", styles::text_muted())),
    }
}

impl Widget for ResultsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = &self.state.session;

        let block = styles::glass_block(false).title(" Images ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = [
            heading("Generated", session.generated_at.as_ref()),
            url_line(session.generated_image.as_deref()),
            heading("Refined", session.refined_at.as_ref()),
            url_line(session.refined_image.as_deref()),
        ];
        for (i, line) in lines.into_iter().enumerate() {
            if let Some(r) = row(inner, i as u16) {
                Paragraph::new(line).render(r, buf);
            }
        }

        if let Some(r) = row(inner, inner.height.saturating_sub(1).max(4)) {
            let hints = Line::from(vec![
                Span::styled(" o", styles::keybinding()),
                Span::styled(" open generated  ", styles::text_muted()),
                Span::styled("O", styles::keybinding()),
                Span::styled(" open refined", styles::text_muted()),
            ]);
            Paragraph::new(hints).render(r, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_state, TestTerminal};

    #[test]
    fn test_results_empty() {
        let state = test_state();
        let mut term = TestTerminal::with_size(60, 8);
        term.render_widget(ResultsCard::new(&state), term.area());

        assert!(term.buffer_contains("Generated"));
        assert!(term.buffer_contains("none yet"));
        assert!(term.buffer_contains("open refined"));
    }

    #[test]
    fn test_results_show_urls_and_time() {
        let mut state = test_state();
        let at = Local::now();
        state.session.generated_image = Some("http://host:1234/api/images/a.png".into());
        state.session.generated_at = Some(at);
        state.session.refined_image = Some("http://host:1234/api/images/a_refined.png".into());

        let mut term = TestTerminal::with_size(60, 8);
        term.render_widget(ResultsCard::new(&state), term.area());

        assert!(term.buffer_contains("http://host:1234/api/images/a.png"));
        assert!(term.buffer_contains("http://host:1234/api/images/a_refined.png"));
        assert!(term.buffer_contains(&at.format("%H:%M:%S").to_string()));
    }
}
