//! # sdxs-core - Core Domain Types
//!
//! Foundation crate for SDXS Studio. Provides the shared error type, logging
//! setup, the benign-noise filter, and the small set of domain types every
//! other crate speaks.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`RefinerKind`] - Refiner model variant (SDXS or Small SD V0)
//! - [`ToastKind`] - Severity of a toast notification
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait that logs errors with context
//!
//! ### Noise Filtering (`noise`)
//! - [`NoiseFilter`] - Matches the benign layout-observation loop notice,
//!   either at the start of a message or anywhere in it
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use sdxs_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod noise;
pub mod types;

/// Prelude for common imports used throughout all SDXS Studio crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use noise::{
    panic_message, NoiseFilter, BENIGN_LAYOUT_LOOP_PATTERN, LAYOUT_LOOP_NOTICE_PATTERN,
};
pub use types::{RefinerKind, ToastKind};
