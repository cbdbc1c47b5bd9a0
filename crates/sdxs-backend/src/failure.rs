//! Uniform failure type for backend calls
//!
//! Every backend call resolves to `Result<T, ApiFailure>`. Local validation
//! never reaches this layer; what remains is transport trouble, server-side
//! rejection, and replies we cannot make sense of.

use std::time::Duration;

use thiserror::Error;

/// Result of a single backend call
pub type ApiResult<T> = std::result::Result<T, ApiFailure>;

/// Where a failure originated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The client-side deadline elapsed before a response arrived
    Timeout,
    /// Connection refused, DNS failure, broken pipe, ...
    Transport,
    /// Non-2xx status or `ok: false` in the body
    Backend { status: Option<u16> },
    /// A 2xx reply whose body did not have the expected shape
    Malformed,
}

/// A failed backend call, carrying the text shown to the user.
///
/// `detail` is the server-provided `detail` when there was one, otherwise a
/// transport-level description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{detail}")]
pub struct ApiFailure {
    pub kind: FailureKind,
    pub detail: String,
}

impl ApiFailure {
    pub fn timeout(after: Duration) -> Self {
        Self {
            kind: FailureKind::Timeout,
            detail: format!("timeout of {}ms exceeded", after.as_millis()),
        }
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport,
            detail: detail.into(),
        }
    }

    pub fn backend(status: Option<u16>, detail: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Backend { status },
            detail: detail.into(),
        }
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Malformed,
            detail: detail.into(),
        }
    }

    /// Map a reqwest error, naming the deadline when one was in force
    pub fn from_reqwest(err: &reqwest::Error, deadline: Option<Duration>) -> Self {
        match deadline {
            Some(after) if err.is_timeout() => Self::timeout(after),
            _ if err.is_timeout() => Self::transport("Request timed out"),
            _ => Self::transport(err.to_string()),
        }
    }

    /// True when the server answered (as opposed to the request never landing)
    pub fn is_from_backend(&self) -> bool {
        matches!(self.kind, FailureKind::Backend { .. })
    }
}
