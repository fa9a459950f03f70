use std::time::{Duration, Instant};

use crate::api::{AnalysisResult, ComparisonResult, HealthStatus};
use crate::client::{ApiCall, ApiReply, KpiPayload};
use crate::error::{FormError, RequestFailed};
use crate::form::FormState;
use crate::notification::Notifications;
use crate::sequence::{RequestSequencer, Slot};
use crate::view::{AnalysisView, ComparisonView};

use super::{Completion, Phase, Ticket};

/// Service status shown in the header.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HealthIndicator {
    #[default]
    Unknown,
    Online {
        service: Option<String>,
        version: Option<String>,
    },
    Offline,
}

impl HealthIndicator {
    fn from_status(status: HealthStatus) -> Self {
        if status.is_online() {
            HealthIndicator::Online {
                service: status.service,
                version: status.version,
            }
        } else {
            HealthIndicator::Offline
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthIndicator::Unknown => "Checking...",
            HealthIndicator::Online { .. } => "Online",
            HealthIndicator::Offline => "Offline",
        }
    }
}

/// The analysis result currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedAnalysis {
    pub result: AnalysisResult,
    pub view: AnalysisView,
    pub displayed_at: Instant,
}

impl DisplayedAnalysis {
    /// Recommendation cards revealed by `now`.
    pub fn revealed_cards(&self, now: Instant) -> usize {
        self.view
            .revealed_count(now.saturating_duration_since(self.displayed_at))
    }
}

/// Drives the analysis page: the metrics form, analysis and comparison
/// results, toasts and the service health indicator.
#[derive(Debug, Clone)]
pub struct AnalysisController {
    form: FormState,
    sequencer: RequestSequencer,
    notifications: Notifications,
    phase: Phase,
    health: HealthIndicator,
    analysis: Option<DisplayedAnalysis>,
    comparison: Option<(ComparisonResult, ComparisonView)>,
}

impl Default for AnalysisController {
    fn default() -> Self {
        Self::new(RequestSequencer::default(), Notifications::default())
    }
}

impl AnalysisController {
    pub fn new(sequencer: RequestSequencer, notifications: Notifications) -> Self {
        Self {
            form: FormState::new(),
            sequencer,
            notifications,
            phase: Phase::Idle,
            health: HealthIndicator::Unknown,
            analysis: None,
            comparison: None,
        }
    }

    /// Build a controller from the configured toast lifetime and stale policy.
    pub fn with_settings(notification_ttl: Duration, discard_stale: bool) -> Self {
        Self::new(
            RequestSequencer::new(discard_stale),
            Notifications::new(notification_ttl),
        )
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn health(&self) -> &HealthIndicator {
        &self.health
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn analysis(&self) -> Option<&DisplayedAnalysis> {
        self.analysis.as_ref()
    }

    pub fn comparison(&self) -> Option<&ComparisonView> {
        self.comparison.as_ref().map(|(_, view)| view)
    }

    pub fn comparison_result(&self) -> Option<&ComparisonResult> {
        self.comparison.as_ref().map(|(result, _)| result)
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    pub fn check_health(&mut self) -> Ticket {
        self.ticket(Slot::Health, ApiCall::Health)
    }

    pub fn load_demo_data(&mut self) -> Ticket {
        self.phase = Phase::loading("Loading demo data...");
        self.ticket(Slot::DemoData, ApiCall::DemoData)
    }

    /// Collect the form and request an analysis.
    ///
    /// Invalid numeric input raises an error toast and no request is issued.
    pub fn analyze_creator(&mut self, now: Instant) -> Result<Ticket, FormError> {
        let payload = self.collect_form(now)?;
        self.phase = Phase::loading("Analyzing creator performance...");
        Ok(self.ticket(Slot::Analysis, ApiCall::Analyze(payload)))
    }

    pub fn compare_algorithms(&mut self, now: Instant) -> Result<Ticket, FormError> {
        let payload = self.collect_form(now)?;
        self.phase = Phase::loading("Comparing algorithms...");
        Ok(self.ticket(Slot::Comparison, ApiCall::CompareAlgorithms(payload)))
    }

    /// Clear every input and hide both result sections.
    ///
    /// Analyses and comparisons still in flight are retired so they cannot
    /// bring a result section back.
    pub fn reset_form(&mut self, now: Instant) {
        self.sequencer.invalidate(Slot::Analysis);
        self.sequencer.invalidate(Slot::Comparison);
        self.form.clear();
        self.analysis = None;
        self.comparison = None;
        self.phase = Phase::Idle;
        self.notifications.success("Form reset successfully!", now);
    }

    /// Dismiss the error line, if any.
    pub fn clear_error(&mut self) {
        if self.phase.error().is_some() {
            self.phase = Phase::Idle;
        }
    }

    pub fn expire_notifications(&mut self, now: Instant) {
        self.notifications.expire(now);
    }

    /// Fold a worker completion into state. Returns false if it was discarded.
    pub fn apply(&mut self, completion: Completion, now: Instant) -> bool {
        let Completion { token, result } = completion;

        if !self.sequencer.accept(token) {
            tracing::debug!(slot = ?token.slot, seq = token.seq, "Discarding stale response");
            return false;
        }

        match token.slot {
            Slot::Health => self.apply_health(result),
            Slot::DemoData => self.apply_demo_data(result, now),
            Slot::Analysis => self.apply_analysis(result, now),
            Slot::Comparison => self.apply_comparison(result, now),
            Slot::Weights => {
                tracing::warn!(seq = token.seq, "Weights response routed to analysis page");
                return false;
            }
        }
        true
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn ticket(&mut self, slot: Slot, call: ApiCall) -> Ticket {
        Ticket {
            token: self.sequencer.issue(slot),
            call,
        }
    }

    fn collect_form(&mut self, now: Instant) -> Result<KpiPayload, FormError> {
        self.form.collect().inspect_err(|e| {
            tracing::info!(error = %e, "Rejected form input");
            self.notifications.error(e.to_string(), now);
        })
    }

    fn apply_health(&mut self, result: Result<ApiReply, RequestFailed>) {
        self.health = match result {
            Ok(ApiReply::Health(status)) => HealthIndicator::from_status(status),
            Ok(other) => {
                tracing::warn!(reply = ?other, "Unexpected health reply");
                HealthIndicator::Offline
            }
            Err(e) => {
                tracing::warn!(error = %e, "Health check failed");
                HealthIndicator::Offline
            }
        };
    }

    fn apply_demo_data(&mut self, result: Result<ApiReply, RequestFailed>, now: Instant) {
        match result {
            Ok(ApiReply::DemoData(data)) => {
                let written = self.form.populate(&data);
                tracing::info!(fields = written, "Demo data loaded");
                self.phase = Phase::Idle;
                self.notifications
                    .success("Demo data loaded successfully!", now);
            }
            other => {
                let reason = failure_reason(other);
                tracing::warn!(%reason, "Demo data request failed");
                self.phase = Phase::Error(reason);
                self.notifications.error("Failed to load demo data", now);
            }
        }
    }

    fn apply_analysis(&mut self, result: Result<ApiReply, RequestFailed>, now: Instant) {
        match result {
            Ok(ApiReply::Analysis(result)) => {
                tracing::info!(
                    overall = result.overall_score,
                    recommendations = result.recommendations.len(),
                    "Analysis completed"
                );
                let view = AnalysisView::new(&result);
                self.analysis = Some(DisplayedAnalysis {
                    result: *result,
                    view,
                    displayed_at: now,
                });
                self.phase = Phase::Displaying;
                self.notifications
                    .success("Analysis completed successfully!", now);
            }
            other => {
                let reason = failure_reason(other);
                tracing::warn!(%reason, "Analysis request failed");
                self.notifications
                    .error(format!("Analysis failed: {reason}"), now);
                self.phase = Phase::Error(reason);
            }
        }
    }

    fn apply_comparison(&mut self, result: Result<ApiReply, RequestFailed>, now: Instant) {
        match result {
            Ok(ApiReply::Comparison(comparison)) => {
                tracing::info!(change = comparison.percentage_change, "Comparison completed");
                let view = ComparisonView::new(&comparison);
                self.comparison = Some((comparison, view));
                self.phase = Phase::Displaying;
                self.notifications
                    .success("Algorithm comparison completed!", now);
            }
            other => {
                let reason = failure_reason(other);
                tracing::warn!(%reason, "Comparison request failed");
                self.notifications
                    .error(format!("Comparison failed: {reason}"), now);
                self.phase = Phase::Error(reason);
            }
        }
    }
}

/// Reason text for a failed or mismatched reply.
fn failure_reason(result: Result<ApiReply, RequestFailed>) -> String {
    match result {
        Err(e) => e.reason,
        Ok(reply) => format!("unexpected reply: {reply:?}"),
    }
}
