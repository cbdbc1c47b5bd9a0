//! Benign-noise filtering
//!
//! One class of error is known to be harmless: the layout-observation loop
//! notice raised when resize notifications outlive a single frame. It is
//! filtered from the log sink, the panic hook, the run loop's error path, and
//! the background task supervisor. Each of those receives a [`NoiseFilter`]
//! explicitly at bootstrap; nothing is patched globally.

use std::any::Any;
use std::sync::{Arc, LazyLock};

use regex::Regex;

/// Pattern matching the benign layout-observation loop notice.
pub const BENIGN_LAYOUT_LOOP_PATTERN: &str =
    r"^ResizeObserver loop (completed with undelivered notifications|limit exceeded)";

/// The same notice, matched anywhere in the message.
pub const LAYOUT_LOOP_NOTICE_PATTERN: &str =
    r"ResizeObserver loop (completed with undelivered notifications|limit exceeded)";

static BENIGN_LAYOUT_LOOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(BENIGN_LAYOUT_LOOP_PATTERN).expect("Invalid layout loop notice regex")
});

static LAYOUT_LOOP_NOTICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(LAYOUT_LOOP_NOTICE_PATTERN).expect("Invalid layout loop notice regex")
});

/// Predicate deciding whether an error message is benign noise.
///
/// Cheap to clone; every surface that needs filtering holds its own copy.
#[derive(Clone)]
pub struct NoiseFilter {
    matcher: Arc<dyn Fn(&str) -> bool + Send + Sync>,
}

impl NoiseFilter {
    /// Filter for the layout-observation loop notice.
    pub fn layout_loop() -> Self {
        Self::from_fn(|message| BENIGN_LAYOUT_LOOP.is_match(message))
    }

    /// Like [`NoiseFilter::layout_loop`], but also matches the notice when it
    /// is wrapped in a prefix such as `Error: `. Used by the render boundary.
    pub fn layout_loop_anywhere() -> Self {
        Self::from_fn(|message| LAYOUT_LOOP_NOTICE.is_match(message))
    }

    /// Filter backed by an arbitrary predicate.
    pub fn from_fn(matcher: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self {
            matcher: Arc::new(matcher),
        }
    }

    /// Filter that never suppresses anything.
    pub fn none() -> Self {
        Self::from_fn(|_| false)
    }

    /// True when `message` should be suppressed.
    pub fn is_benign(&self, message: &str) -> bool {
        (self.matcher)(message)
    }

    /// Convenience for error values: matches against their `Display` text.
    pub fn is_benign_error(&self, err: &dyn std::fmt::Display) -> bool {
        self.is_benign(&err.to_string())
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::layout_loop()
    }
}

impl std::fmt::Debug for NoiseFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseFilter").finish_non_exhaustive()
    }
}

/// Extract a human-readable message from a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
