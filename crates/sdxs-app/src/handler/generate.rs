//! Image generation handlers, plus opening results in a browser

use chrono::Local;
use tracing::{debug, warn};

use sdxs_backend::{resolve_asset_url, GenerateRequest};

use crate::state::AppState;

use super::{Task, UpdateAction, UpdateResult};

pub(crate) fn handle_generate(state: &mut AppState) -> UpdateResult {
    let session = &mut state.session;
    if session.is_generating {
        return UpdateResult::none();
    }

    if session.prompt.is_blank() {
        state.toasts.error("Please enter a prompt");
        return UpdateResult::none();
    }

    session.is_generating = true;
    // A new generation invalidates the refined result
    session.refined_image = None;
    session.refined_at = None;
    session.status_message = "Generating image... (this may take 30-60 seconds)".to_string();

    let request = GenerateRequest::new(session.prompt.value());
    UpdateResult::task(Task::Generate(request))
}

pub(crate) fn handle_image_generated(
    state: &mut AppState,
    image_path: String,
    filename: String,
) -> UpdateResult {
    let url = resolve_asset_url(&state.backend_url, &image_path);
    let session = &mut state.session;
    if !session.is_generating {
        debug!("Ignoring stale generation result {}", filename);
        return UpdateResult::none();
    }

    session.is_generating = false;
    session.generated_image = Some(url);
    session.status_message = format!("✓ Image generated: {}", filename);
    session.generated_image_filename = Some(filename);
    session.generated_at = Some(Local::now());
    state.toasts.success("Image generated successfully!");
    UpdateResult::none()
}

pub(crate) fn handle_generate_failed(state: &mut AppState, error: String) -> UpdateResult {
    let session = &mut state.session;
    if !session.is_generating {
        debug!("Ignoring stale generation failure");
        return UpdateResult::none();
    }

    warn!("Error generating image: {}", error);
    session.is_generating = false;
    session.status_message = format!("✗ Error: {}", error);
    state
        .toasts
        .error(format!("Failed to generate image: {}", error));
    UpdateResult::none()
}

pub(crate) fn handle_open_generated(state: &mut AppState) -> UpdateResult {
    match state.session.generated_image.clone() {
        Some(url) => open(state, url),
        None => {
            state.toasts.error("No generated image to open");
            UpdateResult::none()
        }
    }
}

pub(crate) fn handle_open_refined(state: &mut AppState) -> UpdateResult {
    match state.session.refined_image.clone() {
        Some(url) => open(state, url),
        None => {
            state.toasts.error("No refined image to open");
            UpdateResult::none()
        }
    }
}

fn open(state: &mut AppState, url: String) -> UpdateResult {
    state.toasts.info(format!("Opening {}", url));
    UpdateResult::action(UpdateAction::OpenUrl { url })
}
