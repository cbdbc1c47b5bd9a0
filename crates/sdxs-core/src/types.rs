//! Core domain type definitions

use serde::{Deserialize, Serialize};

/// Refiner model variant applied to an already-generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum RefinerKind {
    /// Reuses the SDXS pipeline loaded by model preparation
    #[default]
    #[serde(rename = "sdxs")]
    Sdxs,
    /// OFA-Sys Small Stable Diffusion V0, prepared separately
    #[serde(rename = "small-sd-v0")]
    SmallSdV0,
}

impl RefinerKind {
    /// Every variant, in selector order.
    pub const ALL: [RefinerKind; 2] = [RefinerKind::Sdxs, RefinerKind::SmallSdV0];

    /// Wire identifier sent as `modelType`
    pub fn id(&self) -> &'static str {
        match self {
            RefinerKind::Sdxs => "sdxs",
            RefinerKind::SmallSdV0 => "small-sd-v0",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            RefinerKind::Sdxs => "SDXS",
            RefinerKind::SmallSdV0 => "Small SD V0",
        }
    }

    /// Model card the backend must fetch before this variant can refine.
    ///
    /// `None` for the default variant, which piggybacks on the loaded model.
    pub fn model_card_url(&self) -> Option<&'static str> {
        match self {
            RefinerKind::Sdxs => None,
            RefinerKind::SmallSdV0 => {
                Some("https://huggingface.co/OFA-Sys/small-stable-diffusion-v0")
            }
        }
    }

    /// True for the implicitly-available variant
    pub fn is_default(&self) -> bool {
        *self == RefinerKind::default()
    }

    /// Cycle to the next variant (wraps)
    pub fn next(&self) -> Self {
        match self {
            RefinerKind::Sdxs => RefinerKind::SmallSdV0,
            RefinerKind::SmallSdV0 => RefinerKind::Sdxs,
        }
    }

    /// Cycle to the previous variant (wraps)
    pub fn prev(&self) -> Self {
        // Two variants: previous and next coincide
        self.next()
    }
}

impl std::fmt::Display for RefinerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}
