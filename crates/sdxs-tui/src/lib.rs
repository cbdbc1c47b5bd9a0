//! sdxs-tui - Terminal UI for SDXS Studio
//!
//! This crate provides the ratatui-based terminal interface. It creates an Engine
//! from sdxs-app and adds terminal rendering, event polling, the error boundary
//! around the view, and widget display.

pub mod boundary;
pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use boundary::{BoundaryOutcome, ErrorBoundary};
pub use runner::run;
