//! Refiner handlers: variant selection, preparation, and refinement

use chrono::Local;
use tracing::{debug, info, warn};

use sdxs_backend::{resolve_asset_url, PrepareRefinerRequest, RefineRequest};
use sdxs_core::RefinerKind;

use crate::state::AppState;

use super::{Task, UpdateResult};

pub(crate) fn handle_select(state: &mut AppState, kind: RefinerKind) -> UpdateResult {
    if state.session.is_loading_refiner {
        return UpdateResult::none();
    }
    state.session.selected_refiner = kind;
    UpdateResult::none()
}

pub(crate) fn handle_load_refiner(state: &mut AppState) -> UpdateResult {
    let session = &mut state.session;
    if session.is_loading_refiner {
        return UpdateResult::none();
    }

    let kind = session.selected_refiner;
    let Some(request) = PrepareRefinerRequest::for_kind(kind) else {
        // Default variant: already backed by the loaded model
        info!("{} refiner needs no preparation", kind);
        session.mark_refiner_loaded(kind);
        session.refiner_status_message = "✓ SDXS refiner ready (using existing model)".to_string();
        state.toasts.success("SDXS refiner ready!");
        return UpdateResult::none();
    };

    session.is_loading_refiner = true;
    session.refiner_status_message = "Loading Small Stable Diffusion V0...".to_string();
    UpdateResult::task(Task::PrepareRefiner(request))
}

pub(crate) fn handle_refiner_loaded(
    state: &mut AppState,
    kind: RefinerKind,
    message: String,
) -> UpdateResult {
    let session = &mut state.session;
    if !session.is_loading_refiner {
        debug!("Ignoring stale refiner preparation result");
        return UpdateResult::none();
    }

    session.is_loading_refiner = false;
    session.mark_refiner_loaded(kind);
    session.refiner_status_message = format!("✓ {}", message);
    state.toasts.success(format!("{} refiner loaded!", kind.label()));
    UpdateResult::none()
}

pub(crate) fn handle_refiner_load_failed(
    state: &mut AppState,
    kind: RefinerKind,
    error: String,
) -> UpdateResult {
    let session = &mut state.session;
    if !session.is_loading_refiner {
        debug!("Ignoring stale refiner preparation failure");
        return UpdateResult::none();
    }

    warn!("Error loading {} refiner: {}", kind, error);
    session.is_loading_refiner = false;
    session.refiner_status_message = format!("✗ Error: {}", error);
    state
        .toasts
        .error(format!("Failed to load refiner: {}", error));
    UpdateResult::none()
}

pub(crate) fn handle_refine(state: &mut AppState) -> UpdateResult {
    let session = &mut state.session;
    if session.is_refining {
        return UpdateResult::none();
    }

    if session.refinement_prompt.is_blank() {
        state.toasts.error("Please enter a refinement prompt");
        return UpdateResult::none();
    }

    let Some(filename) = session.generated_image_filename.clone() else {
        state.toasts.error("No generated image to refine");
        return UpdateResult::none();
    };

    session.is_refining = true;
    session.refiner_status_message =
        "Refining image... (this may take 30-60 seconds)".to_string();

    let request = RefineRequest::new(
        filename,
        session.refinement_prompt.value(),
        session.selected_refiner,
    );
    UpdateResult::task(Task::Refine(request))
}

pub(crate) fn handle_image_refined(
    state: &mut AppState,
    refined_image_path: String,
    filename: String,
) -> UpdateResult {
    let url = resolve_asset_url(&state.backend_url, &refined_image_path);
    let session = &mut state.session;
    if !session.is_refining {
        debug!("Ignoring stale refinement result {}", filename);
        return UpdateResult::none();
    }

    session.is_refining = false;
    session.refined_image = Some(url);
    session.refined_at = Some(Local::now());
    session.refiner_status_message = format!("✓ Image refined: {}", filename);
    state.toasts.success("Image refined successfully!");
    UpdateResult::none()
}

pub(crate) fn handle_refine_failed(state: &mut AppState, error: String) -> UpdateResult {
    let session = &mut state.session;
    if !session.is_refining {
        debug!("Ignoring stale refinement failure");
        return UpdateResult::none();
    }

    warn!("Error refining image: {}", error);
    session.is_refining = false;
    session.refiner_status_message = format!("✗ Error: {}", error);
    state.toasts.error(format!("Failed to refine image: {}", error));
    UpdateResult::none()
}
