//! Main TUI runner - entry point and event loop

use ratatui::backend::Backend as TerminalBackend;
use ratatui::Terminal;

use sdxs_app::{BackendConfig, Engine, Message};
use sdxs_backend::{Backend, HttpBackend};
use sdxs_core::prelude::*;
use sdxs_core::NoiseFilter;

use crate::boundary::{BoundaryOutcome, ErrorBoundary};
use crate::event::{EventReader, EventSource};
use crate::terminal;

/// Run the client against the configured backend until the user quits
pub async fn run(config: BackendConfig, noise: NoiseFilter) -> Result<()> {
    let backend = HttpBackend::new(config.base_url.clone())
        .with_context(|| format!("Failed to create client for {}", config.base_url))?;

    let mut term = ratatui::init();

    // Layered over ratatui's restoring hook
    terminal::install_panic_hook(noise.clone());

    let mut engine = Engine::new(backend, config.base_url, noise);
    engine.start();

    let mut events = EventSource::terminal();
    let result = run_loop(&mut term, &mut engine, &mut events);

    engine.shutdown();

    // Restore terminal
    ratatui::restore();

    result
}

/// Draw, poll, update until the engine wants to quit
pub fn run_loop<T, B, R>(
    terminal: &mut Terminal<T>,
    engine: &mut Engine<B>,
    events: &mut EventSource<R>,
) -> Result<()>
where
    T: TerminalBackend,
    B: Backend + Clone + Send + Sync + 'static,
    R: EventReader,
{
    let boundary = ErrorBoundary::default();

    while !engine.should_quit() {
        // Completions from background tasks
        engine.drain_pending_messages();

        let mut fault = None;
        terminal
            .draw(|frame| {
                if let BoundaryOutcome::Faulted { message } = boundary.render(frame, &engine.state)
                {
                    fault = Some(message);
                }
            })
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = fault {
            engine.process_message(Message::RenderFault { message });
        }

        match events.poll() {
            Ok(Some(message)) => engine.process_message(message),
            Ok(None) => {}
            Err(e) if engine.noise().is_benign_error(&e) => {}
            Err(e) if e.is_recoverable() => warn!("Event polling error: {}", e),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
