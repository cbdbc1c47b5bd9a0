//! sdxs-app - Application state and orchestration for SDXS Studio
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! generation client: session state, messages, the update function, action
//! dispatch onto background backend calls, and the Engine that ties them
//! together for the TUI runner.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod text_field;
pub mod toast;

// Re-export primary types
pub use config::BackendConfig;
pub use engine::Engine;
pub use handler::{Task, TaskKind, UpdateAction, UpdateResult};
pub use message::Message;
pub use state::{AppPhase, AppState, BackendStatus, Focus, SessionState};
pub use toast::{Toast, ToastStack};
