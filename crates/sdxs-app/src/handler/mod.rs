//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event mapping
//! - `model`: Model preparation
//! - `generate`: Image generation and opening results
//! - `refiner`: Refiner preparation and refinement

pub(crate) mod generate;
pub(crate) mod keys;
pub(crate) mod model;
pub(crate) mod refiner;
pub(crate) mod update;


use sdxs_backend::{GenerateRequest, PrepareModelRequest, PrepareRefinerRequest, RefineRequest};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Run a backend call in the background
    SpawnTask(Task),

    /// Open a URL with the platform's default opener
    OpenUrl { url: String },
}

/// Background backend calls
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    PrepareModel(PrepareModelRequest),
    Generate(GenerateRequest),
    PrepareRefiner(PrepareRefinerRequest),
    Refine(RefineRequest),
    Probe,
}

impl Task {
    pub fn kind(&self) -> TaskKind {
        match self {
            Task::PrepareModel(_) => TaskKind::PrepareModel,
            Task::Generate(_) => TaskKind::Generate,
            Task::PrepareRefiner(_) => TaskKind::PrepareRefiner,
            Task::Refine(_) => TaskKind::Refine,
            Task::Probe => TaskKind::Probe,
        }
    }
}

/// Which category a background task belongs to.
///
/// Carried by failure reports so the right busy flag can be released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    PrepareModel,
    Generate,
    PrepareRefiner,
    Refine,
    Probe,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn task(task: Task) -> Self {
        Self::action(UpdateAction::SpawnTask(task))
    }
}
