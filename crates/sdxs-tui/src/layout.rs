//! Screen layout definitions for the TUI
//!
//! The screen is a header, two rows of cards, the status panel and a one-line
//! key hint footer. Cards split their row in half.

use ratatui::layout::{Constraint, Layout, Rect};

/// Outer height of the model and generate cards
pub const TOP_CARD_HEIGHT: u16 = 6;

/// Outer height of the refiner and results cards
pub const BOTTOM_CARD_HEIGHT: u16 = 8;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, backend status and backend URL
    pub header: Rect,
    pub model: Rect,
    pub generate: Rect,
    pub refiner: Rect,
    /// Generated and refined image URLs
    pub results: Rect,
    /// Last status line of each workflow
    pub status: Rect,
    pub footer: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let [header, top, bottom, status, _, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(TOP_CARD_HEIGHT),
        Constraint::Length(BOTTOM_CARD_HEIGHT),
        Constraint::Length(4),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let [model, generate] = halves(top);
    let [refiner, results] = halves(bottom);

    ScreenAreas {
        header,
        model,
        generate,
        refiner,
        results,
        status,
        footer,
    }
}

fn halves(area: Rect) -> [Rect; 2] {
    Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_standard_terminal() {
        let areas = create(Rect::new(0, 0, 80, 24));

        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.model.y, 3);
        assert_eq!(areas.model.height, TOP_CARD_HEIGHT);
        assert_eq!(areas.refiner.y, 3 + TOP_CARD_HEIGHT);
        assert_eq!(areas.results.height, BOTTOM_CARD_HEIGHT);
        assert_eq!(areas.status.height, 4);
        assert_eq!(areas.footer.y, 23);
    }

    #[test]
    fn test_cards_split_row_in_half() {
        let areas = create(Rect::new(0, 0, 80, 24));

        assert_eq!(areas.model.width, 40);
        assert_eq!(areas.generate.x, 40);
        assert_eq!(areas.generate.width, 40);
        assert_eq!(areas.refiner.x, areas.model.x);
        assert_eq!(areas.results.x, areas.generate.x);
    }

    #[test]
    fn test_tall_terminal_keeps_footer_at_bottom() {
        let areas = create(Rect::new(0, 0, 100, 40));
        assert_eq!(areas.footer.y, 39);
        assert_eq!(areas.status.y, 3 + TOP_CARD_HEIGHT + BOTTOM_CARD_HEIGHT);
    }
}
