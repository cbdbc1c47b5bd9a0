//! Message processing
//!
//! Runs a message through the TEA update function, follows up on chained
//! messages, and dispatches any resulting actions.

use tokio::sync::mpsc;

use sdxs_backend::Backend;
use sdxs_core::NoiseFilter;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    backend: &B,
    msg_tx: &mpsc::Sender<Message>,
    noise: &NoiseFilter,
) where
    B: Backend + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, state.epoch, backend, msg_tx.clone(), noise);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use sdxs_backend::{BackendCall, MockBackend, PrepareModelRequest};

    #[tokio::test]
    async fn test_key_chain_dispatches_task() {
        let backend = MockBackend::new();
        let (tx, mut rx) = mpsc::channel(8);
        let mut state = AppState::new("http://localhost:8001");

        // Enter on the model URL input loads the model
        process_message(
            &mut state,
            Message::Key(InputKey::Enter),
            &backend,
            &tx,
            &NoiseFilter::layout_loop(),
        );
        assert!(state.session.is_loading);

        let Message::Completed { epoch, message } = rx.recv().await.unwrap() else {
            panic!("expected a completion envelope");
        };
        assert_eq!(epoch, state.epoch);
        assert!(matches!(*message, Message::ModelLoaded { .. }));
        assert_eq!(
            backend.calls(),
            vec![BackendCall::PrepareModel(PrepareModelRequest::new(
                "https://huggingface.co/IDKiro/sdxs-512-0.9"
            ))]
        );
    }

    #[tokio::test]
    async fn test_validation_failure_dispatches_nothing() {
        let backend = MockBackend::new();
        let (tx, mut rx) = mpsc::channel(8);
        let mut state = AppState::new("http://localhost:8001");

        process_message(
            &mut state,
            Message::RefineImage,
            &backend,
            &tx,
            &NoiseFilter::layout_loop(),
        );

        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
        assert_eq!(backend.call_count(), 0);
        assert_eq!(state.toasts.len(), 1);
    }
}
