//! Theme system for SDXS Studio.
//!
//! Colors live in [`palette`]; [`styles`] builds semantic styles and blocks
//! on top of them. Widgets should not reach for raw `Color` values.

pub mod palette;
pub mod styles;
