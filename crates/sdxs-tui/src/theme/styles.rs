//! Semantic style builders for the glass theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use sdxs_app::BackendStatus;
use sdxs_core::ToastKind;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn status_blue() -> Style {
    Style::default().fg(palette::STATUS_BLUE)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for the focused control
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive())
        .style(Style::default().bg(palette::POPUP_BG))
}

/// Style for a status line, picked from its leading marker.
///
/// Success lines start with "✓", errors with "✗"; anything else is progress
/// or a validation hint.
pub fn status_line(text: &str) -> Style {
    if text.starts_with('✓') {
        status_green()
    } else if text.starts_with('✗') || text.starts_with("Failed") {
        status_red()
    } else {
        status_yellow()
    }
}

/// Returns `(icon, Style)` for a toast kind
pub fn toast_indicator(kind: ToastKind) -> (&'static str, Style) {
    match kind {
        ToastKind::Success => ("✓", status_green()),
        ToastKind::Error => ("✗", status_red()),
        ToastKind::Info => ("ℹ", status_blue()),
    }
}

/// Backend reachability indicator for the header.
///
/// Returns `(icon_char, label, Style)`.
pub fn backend_indicator(status: &BackendStatus) -> (&'static str, &'static str, Style) {
    match status {
        BackendStatus::Unknown => ("○", "Checking", Style::default().fg(palette::TEXT_MUTED)),
        BackendStatus::Online { .. } => (
            "●",
            "Online",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        BackendStatus::Offline { .. } => (
            "✗",
            "Offline",
            Style::default()
                .fg(palette::STATUS_RED)
                .add_modifier(Modifier::BOLD),
        ),
    }
}
