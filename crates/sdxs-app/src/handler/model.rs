//! Model preparation handlers

use tracing::{debug, warn};

use sdxs_backend::PrepareModelRequest;
use sdxs_core::RefinerKind;

use crate::state::AppState;

use super::{Task, UpdateResult};

pub(crate) fn handle_load_model(state: &mut AppState) -> UpdateResult {
    let session = &mut state.session;
    if session.is_loading {
        return UpdateResult::none();
    }

    if session.model_url.is_blank() {
        state.toasts.error("Please enter a model URL");
        return UpdateResult::none();
    }

    session.is_loading = true;
    session.status_message = "Downloading model from HuggingFace...".to_string();

    let request = PrepareModelRequest::new(session.model_url.value().trim());
    UpdateResult::task(Task::PrepareModel(request))
}

pub(crate) fn handle_model_loaded(state: &mut AppState, message: String) -> UpdateResult {
    let session = &mut state.session;
    if !session.is_loading {
        debug!("Ignoring stale model preparation result");
        return UpdateResult::none();
    }

    session.is_loading = false;
    session.model_loaded = true;
    // The default refiner reuses the loaded pipeline
    session.mark_refiner_loaded(RefinerKind::default());
    session.status_message = format!("✓ {}", message);
    state.toasts.success("Model loaded successfully!");
    UpdateResult::none()
}

pub(crate) fn handle_model_load_failed(state: &mut AppState, error: String) -> UpdateResult {
    let session = &mut state.session;
    if !session.is_loading {
        debug!("Ignoring stale model preparation failure");
        return UpdateResult::none();
    }

    warn!("Error loading model: {}", error);
    session.is_loading = false;
    session.status_message = format!("✗ Error: {}", error);
    state.toasts.error(format!("Failed to load model: {}", error));
    UpdateResult::none()
}
