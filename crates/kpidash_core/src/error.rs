//! Error types for API requests and form collection.

use std::fmt;

/// Where a request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network, DNS or connection failure before any response arrived
    Transport,
    /// The server answered with a non-2xx status
    Http,
    /// A 2xx body reported `success: false`, lacked the flag, or did not match the schema
    Application,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Transport => write!(f, "transport"),
            FailureKind::Http => write!(f, "http"),
            FailureKind::Application => write!(f, "application"),
        }
    }
}

/// Uniform failure outcome for every endpoint.
///
/// `reason` is what the user sees: the server-supplied `error` field when there is
/// one, otherwise the HTTP status line or the transport error message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{reason}")]
pub struct RequestFailed {
    pub kind: FailureKind,
    pub reason: String,
}

impl RequestFailed {
    pub fn transport(reason: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport,
            reason: reason.into(),
        }
    }

    pub fn http(reason: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Http,
            reason: reason.into(),
        }
    }

    pub fn application(reason: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Application,
            reason: reason.into(),
        }
    }
}

/// Errors raised while turning form inputs into a request body.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("{label} must be a number (got \"{value}\")")]
    InvalidNumber { field: String, label: String, value: String },
}
