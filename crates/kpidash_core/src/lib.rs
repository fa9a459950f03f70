//! Client-side contract for the creator KPI analytics service
//!
//! This crate owns everything between the remote analytics API and the screen:
//! - Typed response schemas for each endpoint, validated at the client boundary
//! - A transport-agnostic client that normalizes success and failure responses
//! - Form collection into the flat KPI request body
//! - Request sequencing so stale responses never overwrite newer state
//! - Deterministic projection of payloads into view models
//! - The analysis and weights controllers as explicit, sans-IO state objects
//!
//! The scoring and recommendation algorithms are not here; they live behind the
//! `/analyze`, `/compare-algorithms` and `/weights/api` endpoints.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod client;
pub mod controller;
pub mod error;
pub mod form;
pub mod notification;
pub mod sequence;
pub mod view;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod api;
pub mod kpi;
pub mod tier;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use api::{
    AnalysisResult, ComparisonResult, DemoData, HealthStatus, Recommendation, TierSummary,
    WeightTier, WeightsConfig,
};
pub use client::{AnalyticsClient, ApiCall, ApiReply, HttpRequest, RawResponse, Transport};
pub use controller::{AnalysisController, Completion, Phase, Ticket, WeightsController};
pub use error::{FailureKind, FormError, RequestFailed};
pub use form::{FieldKind, FormField, FormState};
pub use notification::{Notification, NotificationKind, Notifications};
pub use sequence::{RequestSequencer, RequestToken, Slot};
pub use tier::TierId;
