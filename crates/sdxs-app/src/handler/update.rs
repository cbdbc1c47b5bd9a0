//! Main update function - handles state transitions (TEA pattern)
//!
//! Per-action handlers live in `model`, `generate`, and `refiner`.

use std::time::Instant;

use tracing::{debug, error, info};

use crate::message::Message;
use crate::state::{AppPhase, AppState, BackendStatus, Focus};

use super::{generate, keys::handle_key, model, refiner, Task, TaskKind, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick();
            state.toasts.expire(Instant::now());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus & Editing
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus_next();
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.focus_prev();
            UpdateResult::none()
        }

        Message::InputChar(c) => {
            if state.is_enabled(state.focus) {
                if let Some(field) = state.focused_field_mut() {
                    field.insert(c);
                }
            }
            UpdateResult::none()
        }

        Message::InputBackspace => {
            if state.is_enabled(state.focus) {
                if let Some(field) = state.focused_field_mut() {
                    field.backspace();
                }
            }
            UpdateResult::none()
        }

        Message::InputClear => {
            if state.is_enabled(state.focus) {
                if let Some(field) = state.focused_field_mut() {
                    field.clear();
                }
            }
            UpdateResult::none()
        }

        Message::ActivateFocused => handle_activate(state),

        // ─────────────────────────────────────────────────────────
        // User Actions
        // ─────────────────────────────────────────────────────────
        Message::LoadModel => model::handle_load_model(state),
        Message::GenerateImage => generate::handle_generate(state),
        Message::LoadRefiner => refiner::handle_load_refiner(state),
        Message::RefineImage => refiner::handle_refine(state),

        Message::SelectRefiner(kind) => refiner::handle_select(state, kind),
        Message::NextRefiner => {
            let kind = state.session.selected_refiner.next();
            refiner::handle_select(state, kind)
        }
        Message::PrevRefiner => {
            let kind = state.session.selected_refiner.prev();
            refiner::handle_select(state, kind)
        }

        Message::OpenGeneratedImage => generate::handle_open_generated(state),
        Message::OpenRefinedImage => generate::handle_open_refined(state),

        Message::ProbeBackend => UpdateResult::task(Task::Probe),

        // ─────────────────────────────────────────────────────────
        // Backend Completions
        // ─────────────────────────────────────────────────────────
        Message::Completed { epoch, message } => {
            if epoch == state.epoch {
                UpdateResult::message(*message)
            } else {
                debug!("Dropping result from discarded session {}: {:?}", epoch, message);
                UpdateResult::none()
            }
        }

        Message::ModelLoaded { message } => model::handle_model_loaded(state, message),
        Message::ModelLoadFailed { error } => model::handle_model_load_failed(state, error),

        Message::ImageGenerated {
            image_path,
            filename,
        } => generate::handle_image_generated(state, image_path, filename),
        Message::GenerateFailed { error } => generate::handle_generate_failed(state, error),

        Message::RefinerLoaded { kind, message } => {
            refiner::handle_refiner_loaded(state, kind, message)
        }
        Message::RefinerLoadFailed { kind, error } => {
            refiner::handle_refiner_load_failed(state, kind, error)
        }

        Message::ImageRefined {
            refined_image_path,
            filename,
        } => refiner::handle_image_refined(state, refined_image_path, filename),
        Message::RefineFailed { error } => refiner::handle_refine_failed(state, error),

        Message::BackendOnline { message } => {
            info!("Backend online: {}", message);
            state.backend_status = BackendStatus::Online { message };
            UpdateResult::none()
        }

        Message::BackendOffline { error } => {
            info!("Backend offline: {}", error);
            state.backend_status = BackendStatus::Offline { error };
            UpdateResult::none()
        }

        Message::TaskFailed { task, error } => handle_task_failed(state, task, error),

        Message::OpenUrlFailed { error } => {
            state.toasts.error(format!("Failed to open image: {}", error));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Error Boundary
        // ─────────────────────────────────────────────────────────
        Message::RenderFault { message } => {
            state.phase = AppPhase::Faulted { message };
            UpdateResult::none()
        }

        Message::Reload => {
            info!("Reloading: discarding session state");
            state.reset();
            UpdateResult::task(Task::Probe)
        }
    }
}

/// Enter on the focused control: buttons fire their action, inputs fire
/// their card's action.
fn handle_activate(state: &mut AppState) -> UpdateResult {
    if !state.is_enabled(state.focus) {
        return UpdateResult::none();
    }
    let msg = match state.focus {
        Focus::ModelUrl | Focus::LoadModel => Message::LoadModel,
        Focus::Prompt | Focus::Generate => Message::GenerateImage,
        Focus::RefinerSelect | Focus::LoadRefiner => Message::LoadRefiner,
        Focus::RefinementPrompt | Focus::Refine => Message::RefineImage,
    };
    UpdateResult::message(msg)
}

/// A task died before reporting. Release its busy flag; surface the error
/// unless it was benign.
fn handle_task_failed(state: &mut AppState, task: TaskKind, error: Option<String>) -> UpdateResult {
    match &error {
        Some(e) => error!("{:?} task failed: {}", task, e),
        None => debug!("{:?} task ended with benign failure", task),
    }

    match (task, error) {
        (TaskKind::PrepareModel, Some(e)) => model::handle_model_load_failed(state, e),
        (TaskKind::PrepareModel, None) => {
            state.session.is_loading = false;
            UpdateResult::none()
        }
        (TaskKind::Generate, Some(e)) => generate::handle_generate_failed(state, e),
        (TaskKind::Generate, None) => {
            state.session.is_generating = false;
            UpdateResult::none()
        }
        (TaskKind::PrepareRefiner, Some(e)) => {
            let kind = state.session.selected_refiner;
            refiner::handle_refiner_load_failed(state, kind, e)
        }
        (TaskKind::PrepareRefiner, None) => {
            state.session.is_loading_refiner = false;
            UpdateResult::none()
        }
        (TaskKind::Refine, Some(e)) => refiner::handle_refine_failed(state, e),
        (TaskKind::Refine, None) => {
            state.session.is_refining = false;
            UpdateResult::none()
        }
        (TaskKind::Probe, Some(error)) => {
            state.backend_status = BackendStatus::Offline { error };
            UpdateResult::none()
        }
        (TaskKind::Probe, None) => UpdateResult::none(),
    }
}
