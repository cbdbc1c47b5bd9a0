//! Application state (Model in TEA pattern)

use std::collections::BTreeMap;

use chrono::{DateTime, Local};

use sdxs_core::RefinerKind;

use crate::text_field::TextField;
use crate::toast::ToastStack;

/// Model card loaded by default when the user has not typed anything else
pub const DEFAULT_MODEL_URL: &str = "https://huggingface.co/IDKiro/sdxs-512-0.9";

/// Top-level lifecycle of the client
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    /// A rendering fault was caught; only the fallback screen is shown
    /// until the user reloads.
    Faulted { message: String },
    Quitting,
}

/// Reachability of the backend as last observed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online { message: String },
    Offline { error: String },
}

/// Focusable controls, in traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    ModelUrl,
    LoadModel,
    Prompt,
    Generate,
    RefinerSelect,
    LoadRefiner,
    RefinementPrompt,
    Refine,
}

impl Focus {
    pub const ORDER: [Focus; 8] = [
        Focus::ModelUrl,
        Focus::LoadModel,
        Focus::Prompt,
        Focus::Generate,
        Focus::RefinerSelect,
        Focus::LoadRefiner,
        Focus::RefinementPrompt,
        Focus::Refine,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Text inputs accept typed characters
    pub fn is_input(self) -> bool {
        matches!(
            self,
            Focus::ModelUrl | Focus::Prompt | Focus::RefinementPrompt
        )
    }

    /// Buttons trigger an action on Enter
    pub fn is_button(self) -> bool {
        matches!(
            self,
            Focus::LoadModel | Focus::Generate | Focus::LoadRefiner | Focus::Refine
        )
    }
}

/// Everything the user has entered or received during this run.
///
/// Dropped and rebuilt from scratch on reload.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub model_url: TextField,
    pub model_loaded: bool,

    pub prompt: TextField,
    pub refinement_prompt: TextField,

    /// Absolute URL of the last generated image
    pub generated_image: Option<String>,
    /// Backend filename of the last generated image; required to refine
    pub generated_image_filename: Option<String>,
    pub generated_at: Option<DateTime<Local>>,

    /// Absolute URL of the last refined image, cleared by every new generation
    pub refined_image: Option<String>,
    pub refined_at: Option<DateTime<Local>>,

    pub selected_refiner: RefinerKind,
    pub refiner_loaded: BTreeMap<RefinerKind, bool>,

    pub is_loading: bool,
    pub is_generating: bool,
    pub is_loading_refiner: bool,
    pub is_refining: bool,

    pub status_message: String,
    pub refiner_status_message: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            model_url: TextField::new(DEFAULT_MODEL_URL),
            model_loaded: false,
            prompt: TextField::default(),
            refinement_prompt: TextField::default(),
            generated_image: None,
            generated_image_filename: None,
            generated_at: None,
            refined_image: None,
            refined_at: None,
            selected_refiner: RefinerKind::default(),
            refiner_loaded: RefinerKind::ALL.iter().map(|k| (*k, false)).collect(),
            is_loading: false,
            is_generating: false,
            is_loading_refiner: false,
            is_refining: false,
            status_message: String::new(),
            refiner_status_message: String::new(),
        }
    }
}

impl SessionState {
    pub fn is_refiner_loaded(&self, kind: RefinerKind) -> bool {
        self.refiner_loaded.get(&kind).copied().unwrap_or(false)
    }

    pub fn mark_refiner_loaded(&mut self, kind: RefinerKind) {
        self.refiner_loaded.insert(kind, true);
    }

    /// True while any backend call is in flight
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_generating || self.is_loading_refiner || self.is_refining
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub session: SessionState,
    pub focus: Focus,
    pub toasts: ToastStack,

    /// Base URL image paths are resolved against
    pub backend_url: String,
    pub backend_status: BackendStatus,

    /// Advances every tick; drives spinners
    pub spinner_frame: usize,

    /// Bumped on every reload. Task results tagged with an older epoch
    /// belong to a discarded session.
    pub epoch: u64,
}

impl AppState {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            phase: AppPhase::Running,
            session: SessionState::default(),
            focus: Focus::default(),
            toasts: ToastStack::new(),
            backend_url: backend_url.into(),
            backend_status: BackendStatus::Unknown,
            spinner_frame: 0,
            epoch: 0,
        }
    }

    /// Discard the session and start over against the same backend
    pub fn reset(&mut self) {
        let epoch = self.epoch + 1;
        *self = Self::new(std::mem::take(&mut self.backend_url));
        self.epoch = epoch;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn is_faulted(&self) -> bool {
        matches!(self.phase, AppPhase::Faulted { .. })
    }

    /// Whether a control currently accepts input.
    ///
    /// Each action's controls are disabled while its request is in flight;
    /// the generate controls additionally stay disabled until a model is
    /// loaded.
    pub fn is_enabled(&self, focus: Focus) -> bool {
        let s = &self.session;
        match focus {
            Focus::ModelUrl | Focus::LoadModel => !s.is_loading,
            Focus::Prompt | Focus::Generate => s.model_loaded && !s.is_generating,
            Focus::RefinerSelect | Focus::LoadRefiner => !s.is_loading_refiner,
            Focus::RefinementPrompt | Focus::Refine => !s.is_refining,
        }
    }

    /// Move focus to the next enabled control (wraps)
    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    /// Move focus to the previous enabled control (wraps)
    pub fn focus_prev(&mut self) {
        self.step_focus(Focus::ORDER.len() - 1);
    }

    fn step_focus(&mut self, step: usize) {
        let len = Focus::ORDER.len();
        let mut index = self.focus.position();
        for _ in 0..len {
            index = (index + step) % len;
            let candidate = Focus::ORDER[index];
            if self.is_enabled(candidate) {
                self.focus = candidate;
                return;
            }
        }
    }

    /// Text field behind the focused control, if it is an input
    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            Focus::ModelUrl => Some(&mut self.session.model_url),
            Focus::Prompt => Some(&mut self.session.prompt),
            Focus::RefinementPrompt => Some(&mut self.session.refinement_prompt),
            _ => None,
        }
    }

    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}
