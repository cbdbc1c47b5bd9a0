//! Message types for the application (TEA pattern)

use sdxs_core::RefinerKind;

use crate::handler::TaskKind;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (toast expiry, spinners)
    Tick,

    /// Quit immediately (Ctrl+C, Ctrl+Q, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Focus & Editing
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    /// Type a character into the focused input
    InputChar(char),
    InputBackspace,
    InputClear,
    /// Enter on the focused control
    ActivateFocused,

    // ─────────────────────────────────────────────────────────
    // User Actions
    // ─────────────────────────────────────────────────────────
    LoadModel,
    GenerateImage,
    LoadRefiner,
    RefineImage,
    SelectRefiner(RefinerKind),
    NextRefiner,
    PrevRefiner,
    OpenGeneratedImage,
    OpenRefinedImage,
    ProbeBackend,

    // ─────────────────────────────────────────────────────────
    // Backend Completions
    // ─────────────────────────────────────────────────────────
    /// Envelope for everything a background task reports. `message` is
    /// applied only if `epoch` still matches the state's epoch.
    Completed {
        epoch: u64,
        message: Box<Message>,
    },
    ModelLoaded {
        message: String,
    },
    ModelLoadFailed {
        error: String,
    },
    ImageGenerated {
        image_path: String,
        filename: String,
    },
    GenerateFailed {
        error: String,
    },
    RefinerLoaded {
        kind: RefinerKind,
        message: String,
    },
    RefinerLoadFailed {
        kind: RefinerKind,
        error: String,
    },
    ImageRefined {
        refined_image_path: String,
        filename: String,
    },
    RefineFailed {
        error: String,
    },
    BackendOnline {
        message: String,
    },
    BackendOffline {
        error: String,
    },

    /// A background task died without reporting a result.
    ///
    /// `error` is `None` when the failure was benign noise; the busy flag is
    /// still released but nothing is shown.
    TaskFailed {
        task: TaskKind,
        error: Option<String>,
    },

    /// The platform opener could not be launched
    OpenUrlFailed {
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Error Boundary
    // ─────────────────────────────────────────────────────────
    /// Rendering panicked with a non-benign error
    RenderFault {
        message: String,
    },
    /// Rebuild the session from scratch (fallback screen's reload)
    Reload,
}
