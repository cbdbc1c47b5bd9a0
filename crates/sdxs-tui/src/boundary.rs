//! Error boundary around the view
//!
//! A panic while rendering is caught here instead of tearing down the
//! terminal. Benign notices are dropped without a trace; anything else is
//! logged once and replaced by the fallback screen until the user reloads.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use ratatui::widgets::Clear;
use ratatui::Frame;

use sdxs_app::AppState;
use sdxs_core::prelude::*;
use sdxs_core::{panic_message, NoiseFilter};

use crate::render;
use crate::widgets::FallbackScreen;

thread_local! {
    static RENDERING: Cell<bool> = const { Cell::new(false) };
}

/// True while this thread is inside [`ErrorBoundary::guard`]
pub fn is_rendering() -> bool {
    RENDERING.with(Cell::get)
}

struct RenderingGuard;

impl RenderingGuard {
    fn enter() -> Self {
        RENDERING.with(|r| r.set(true));
        Self
    }
}

impl Drop for RenderingGuard {
    fn drop(&mut self) {
        RENDERING.with(|r| r.set(false));
    }
}

/// Result of one guarded render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryOutcome {
    Rendered,
    /// The view panicked with a benign notice; the partial frame stands
    Suppressed,
    /// The view panicked; the fallback screen was drawn instead
    Faulted { message: String },
}

/// Catches render panics.
///
/// The default boundary treats the layout-loop notice as benign wherever it
/// appears in the panic message, not only at its start.
#[derive(Debug, Clone)]
pub struct ErrorBoundary {
    noise: NoiseFilter,
}

impl Default for ErrorBoundary {
    fn default() -> Self {
        Self::new(NoiseFilter::layout_loop_anywhere())
    }
}

impl ErrorBoundary {
    pub fn new(noise: NoiseFilter) -> Self {
        Self { noise }
    }

    /// Render the application view inside the boundary
    pub fn render(&self, frame: &mut Frame, state: &AppState) -> BoundaryOutcome {
        self.guard(frame, |f| render::view(f, state))
    }

    /// Run `view`, catching any panic it raises
    pub fn guard<F>(&self, frame: &mut Frame, view: F) -> BoundaryOutcome
    where
        F: FnOnce(&mut Frame),
    {
        let result = {
            let _rendering = RenderingGuard::enter();
            panic::catch_unwind(AssertUnwindSafe(|| view(frame)))
        };

        let payload = match result {
            Ok(()) => return BoundaryOutcome::Rendered,
            Err(payload) => payload,
        };

        let message = panic_message(payload.as_ref());
        if self.noise.is_benign(&message) {
            return BoundaryOutcome::Suppressed;
        }

        error!("Render fault caught by error boundary: {}", message);
        let area = frame.area();
        frame.render_widget(Clear, area);
        frame.render_widget(FallbackScreen::new(&message), area);
        BoundaryOutcome::Faulted { message }
    }
}
