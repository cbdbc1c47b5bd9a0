//! Shared overlay geometry.

use ratatui::layout::Rect;

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Anchor a fixed-size rect to the top-right corner of an area, inset by
/// `margin` cells on both axes.
pub fn top_right_rect(width: u16, height: u16, margin: u16, area: Rect) -> Rect {
    let w = width.min(area.width.saturating_sub(margin));
    let h = height.min(area.height.saturating_sub(margin));
    let x = area.x + area.width.saturating_sub(w + margin);
    Rect::new(x, area.y + margin.min(area.height), w, h)
}
