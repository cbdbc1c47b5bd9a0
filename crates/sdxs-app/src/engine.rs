//! Engine - orchestration state shared by the runner
//!
//! Owns the TEA state, the message channel, the backend handle, and the
//! noise filter handed to background-task supervision.

use tokio::sync::mpsc;
use tracing::info;

use sdxs_backend::Backend;
use sdxs_core::NoiseFilter;

use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Orchestration engine for SDXS Studio.
pub struct Engine<B> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, background tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    backend: B,
    noise: NoiseFilter,
}

impl<B> Engine<B>
where
    B: Backend + Clone + Send + Sync + 'static,
{
    /// Create an engine talking to `backend`, whose base URL is `backend_url`.
    ///
    /// Spawns the signal handler; must be called inside a tokio runtime.
    pub fn new(backend: B, backend_url: impl Into<String>, noise: NoiseFilter) -> Self {
        let state = AppState::new(backend_url);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            backend,
            noise,
        }
    }

    /// Kick off startup work (backend reachability probe)
    pub fn start(&mut self) {
        info!("Engine starting against {}", self.state.backend_url);
        self.process_message(Message::ProbeBackend);
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.backend,
            &self.msg_tx,
            &self.noise,
        );
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    pub fn noise(&self) -> &NoiseFilter {
        &self.noise
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Abandon in-flight work. Background tasks are not awaited.
    pub fn shutdown(&mut self) {
        if self.state.session.is_busy() {
            info!("Shutting down with requests still in flight; abandoning them");
        } else {
            info!("Shutting down");
        }
        self.msg_rx.close();
    }
}
