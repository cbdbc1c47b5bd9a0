//! # sdxs-backend - Backend HTTP Contract
//!
//! Everything that touches the wire lives here: request payloads, response
//! decoding into a discriminated `Result<T, ApiFailure>`, and the reqwest
//! client. The app layer only sees typed successes and a single failure type
//! carrying the text to show the user.
//!
//! ## Public API
//!
//! - [`Backend`] - Async trait implemented by [`HttpBackend`] (and `MockBackend`
//!   with the `test-helpers` feature)
//! - [`ApiFailure`], [`FailureKind`], [`ApiResult`] - Uniform failure type
//! - Request types: [`PrepareModelRequest`], [`GenerateRequest`],
//!   [`PrepareRefinerRequest`], [`RefineRequest`]
//! - Response types: [`ModelPrepared`], [`ImageGenerated`], [`RefinerPrepared`],
//!   [`ImageRefined`], [`BackendInfo`]

pub mod client;
pub mod failure;
pub mod protocol;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{Backend, HttpBackend, LocalBackend, GENERATION_TIMEOUT};
pub use failure::{ApiFailure, ApiResult, FailureKind};
pub use protocol::{
    decode_probe, decode_response, extract_detail, resolve_asset_url, BackendInfo,
    GenerateRequest, ImageGenerated, ImageRefined, ModelPrepared, PrepareModelRequest,
    PrepareRefinerRequest, RefineRequest, RefinerPrepared,
};

#[cfg(any(test, feature = "test-helpers"))]
pub use test_utils::{BackendCall, MockBackend};
