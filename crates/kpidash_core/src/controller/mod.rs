//! Page controllers.
//!
//! A controller never performs I/O. Each user action returns a [`Ticket`] naming
//! the API call to make; whoever owns the controller runs it and hands the
//! [`Completion`] back through `apply`. Responses for superseded tickets are
//! dropped by the controller's [`RequestSequencer`](crate::sequence::RequestSequencer).

mod analysis;
mod weights;

pub use analysis::{AnalysisController, DisplayedAnalysis, HealthIndicator};
pub use weights::{WEIGHTS_ERROR_PREFIX, WeightsController};

use crate::client::{ApiCall, ApiReply};
use crate::error::RequestFailed;
use crate::sequence::RequestToken;

/// Permission to run one API call on behalf of a controller.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub token: RequestToken,
    pub call: ApiCall,
}

/// Outcome of running a [`Ticket`].
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub token: RequestToken,
    pub result: Result<ApiReply, RequestFailed>,
}

impl Completion {
    pub fn new(ticket: &Ticket, result: Result<ApiReply, RequestFailed>) -> Self {
        Self {
            token: ticket.token,
            result,
        }
    }
}

/// What a controller's area is currently showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        message: String,
    },
    Displaying,
    Error(String),
}

impl Phase {
    pub fn loading(message: impl Into<String>) -> Self {
        Phase::Loading {
            message: message.into(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }
}
