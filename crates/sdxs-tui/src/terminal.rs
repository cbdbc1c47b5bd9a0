//! Terminal setup and restoration

use std::panic;
use std::thread;

use sdxs_core::{panic_message, NoiseFilter};

use crate::boundary;

/// What the panic hook does with a given panic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanicDisposition {
    /// Benign notice: no terminal restore, no report
    Silent,
    /// Another layer owns it: the error boundary while rendering, or the
    /// task supervisor for panics off the UI thread
    Deferred,
    /// Hand over to the previous hook, which restores the terminal
    Fatal,
}

/// Decide how the panic hook treats a panic
pub fn panic_disposition(
    noise: &NoiseFilter,
    message: &str,
    rendering: bool,
    on_ui_thread: bool,
) -> PanicDisposition {
    if noise.is_benign(message) {
        PanicDisposition::Silent
    } else if rendering || !on_ui_thread {
        PanicDisposition::Deferred
    } else {
        PanicDisposition::Fatal
    }
}

/// Install the panic hook on top of whatever hook is current.
///
/// Must run after `ratatui::init()`: its hook restores the terminal, and it
/// is only reached for fatal panics. The calling thread is taken to be the
/// UI thread.
pub fn install_panic_hook(noise: NoiseFilter) {
    let previous_hook = panic::take_hook();
    let ui_thread = thread::current().id();

    panic::set_hook(Box::new(move |panic_info| {
        let message = panic_message(panic_info.payload());
        let on_ui_thread = thread::current().id() == ui_thread;

        match panic_disposition(&noise, &message, boundary::is_rendering(), on_ui_thread) {
            PanicDisposition::Silent | PanicDisposition::Deferred => {}
            PanicDisposition::Fatal => previous_hook(panic_info),
        }
    }));
}
