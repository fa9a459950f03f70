//! Typed response schemas for the analytics service.
//!
//! Each struct matches what the client consumes from one endpoint. Optional
//! fields are the ones older servers may omit; everything else is required, so
//! a shape mismatch fails at parse time instead of rendering missing values.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::kpi::PerformanceLevel;

/// `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthStatus {
    pub fn is_online(&self) -> bool {
        self.status == "healthy"
    }
}

/// `GET /demo-data` payload: field id -> number or string.
pub type DemoData = serde_json::Map<String, Value>;

/// One tier inside an analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierSummary {
    pub total_weight: f64,
    pub average_score: f64,
    #[serde(default)]
    pub kpis: Vec<String>,
}

/// `POST /analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub creator_id: Option<String>,
    pub overall_score: f64,
    pub revenue_focus_score: f64,
    pub tier_breakdown: BTreeMap<String, TierSummary>,
    #[serde(default)]
    pub individual_scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub performance_levels: BTreeMap<String, PerformanceLevel>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    /// Naive ISO-8601 timestamp stamped by the server; unparseable values are dropped
    #[serde(default, deserialize_with = "lenient_datetime", skip_serializing)]
    pub timestamp: Option<jiff::civil::DateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub priority_score: f64,
    pub expected_improvement: f64,
    pub confidence: f64,
    pub estimated_effort_hours: f64,
    pub cost_level: String,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub kpi_affected: Option<String>,
}

/// `POST /compare-algorithms`, the `comparison` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub new_weighted_score: f64,
    pub equal_weighted_score: f64,
    pub percentage_change: f64,
    #[serde(default)]
    pub score_difference: Option<f64>,
    #[serde(default)]
    pub algorithm_benefits: BTreeMap<String, String>,
}

/// One tier inside the weights configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTier {
    pub total_weight: f64,
    #[serde(default)]
    pub kpis: Vec<String>,
}

/// `GET /weights/api`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightsConfig {
    pub weights: BTreeMap<String, f64>,
    pub tier_breakdown: BTreeMap<String, WeightTier>,
    #[serde(default)]
    pub algorithm_description: Option<String>,
}

fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<jiff::civil::DateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse::<jiff::civil::DateTime>().ok()))
}
