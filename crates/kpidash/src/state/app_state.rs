use kpidash_core::controller::{AnalysisController, WeightsController};
use kpidash_core::sequence::RequestSequencer;
use kpidash_core::{FormField, Ticket};

use crate::config::DashboardConfig;

use super::TabId;

/// Everything the UI thread owns. Built once by [`App`](crate::App).
pub struct AppState {
    pub active_tab: TabId,
    pub analysis: AnalysisController,
    pub weights: WeightsController,
    /// Index of the selected form field
    pub form_cursor: usize,
    /// True while keystrokes go into the selected field
    pub editing: bool,
    /// Tickets issued by the last key press, waiting for the worker
    pending: Vec<Ticket>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            active_tab: config.start_page.into(),
            analysis: AnalysisController::with_settings(
                config.notification_ttl(),
                config.discard_stale_responses,
            ),
            weights: WeightsController::new(RequestSequencer::new(
                config.discard_stale_responses,
            )),
            form_cursor: 0,
            editing: false,
            pending: Vec::new(),
            exit: false,
        }
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    /// Queue a ticket for dispatch.
    pub fn queue(&mut self, ticket: Ticket) {
        self.pending.push(ticket);
    }

    pub fn take_pending(&mut self) -> Vec<Ticket> {
        std::mem::take(&mut self.pending)
    }

    /// Error line for the status bar. Weights errors have their own panel.
    pub fn error_message(&self) -> Option<&str> {
        match self.active_tab {
            TabId::Analysis => self.analysis.phase().error(),
            TabId::Weights => None,
        }
    }

    pub fn clear_error(&mut self) {
        self.analysis.clear_error();
    }

    pub fn selected_field(&self) -> Option<&FormField> {
        self.analysis.form().fields().get(self.form_cursor)
    }

    pub fn select_next_field(&mut self) {
        let len = self.analysis.form().len();
        if len > 0 {
            self.form_cursor = (self.form_cursor + 1) % len;
        }
    }

    pub fn select_prev_field(&mut self) {
        let len = self.analysis.form().len();
        if len > 0 {
            self.form_cursor = (self.form_cursor + len - 1) % len;
        }
    }
}
