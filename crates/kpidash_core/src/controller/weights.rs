use crate::client::{ApiCall, ApiReply};
use crate::sequence::{RequestSequencer, Slot};
use crate::view::WeightsView;

use super::{Completion, Phase, Ticket};

pub const WEIGHTS_ERROR_PREFIX: &str = "Failed to load algorithm weights";

/// Read-only view of the service's weighting configuration.
#[derive(Debug, Clone, Default)]
pub struct WeightsController {
    sequencer: RequestSequencer,
    phase: Phase,
    view: Option<WeightsView>,
}

impl WeightsController {
    pub fn new(sequencer: RequestSequencer) -> Self {
        Self {
            sequencer,
            phase: Phase::Idle,
            view: None,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn view(&self) -> Option<&WeightsView> {
        self.view.as_ref()
    }

    /// Request the weights. Also used to retry after a failure.
    pub fn load(&mut self) -> Ticket {
        self.phase = Phase::loading("Loading algorithm weights...");
        Ticket {
            token: self.sequencer.issue(Slot::Weights),
            call: ApiCall::Weights,
        }
    }

    /// Fold a worker completion into state. Returns false if it was discarded.
    pub fn apply(&mut self, completion: Completion) -> bool {
        let Completion { token, result } = completion;

        if token.slot != Slot::Weights {
            tracing::warn!(slot = ?token.slot, "Non-weights response routed to weights page");
            return false;
        }
        if !self.sequencer.accept(token) {
            tracing::debug!(seq = token.seq, "Discarding stale weights response");
            return false;
        }

        match result {
            Ok(ApiReply::Weights(config)) => {
                tracing::info!(kpis = config.weights.len(), "Weights loaded");
                self.view = Some(WeightsView::new(&config));
                self.phase = Phase::Displaying;
            }
            Ok(other) => self.fail(format!("unexpected reply: {other:?}")),
            Err(e) => self.fail(e.reason),
        }
        true
    }

    fn fail(&mut self, reason: String) {
        tracing::warn!(%reason, "Weights request failed");
        self.view = None;
        self.phase = Phase::Error(format!("{WEIGHTS_ERROR_PREFIX}: {reason}"));
    }
}
