//! Widget components for the TUI

mod button;
mod fallback;
mod footer;
mod generate_card;
mod header;
pub mod modal_overlay;
mod model_card;
mod refiner_card;
mod results;
mod status_panel;
mod text_input;
mod toasts;

pub use button::{Button, SPINNER_FRAMES};
pub use fallback::FallbackScreen;
pub use footer::KeyHints;
pub use generate_card::GenerateCard;
pub use header::MainHeader;
pub use model_card::ModelCard;
pub use refiner_card::RefinerCard;
pub use results::ResultsCard;
pub use status_panel::StatusPanel;
pub use text_input::TextInput;
pub use toasts::ToastOverlay;

use ratatui::layout::Rect;

/// The `index`-th single-line row of `inner`, if it fits
pub(crate) fn row(inner: Rect, index: u16) -> Option<Rect> {
    (index < inner.height).then(|| Rect::new(inner.x, inner.y + index, inner.width, 1))
}
