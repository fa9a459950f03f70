use std::time::Duration;

use crate::api::{AnalysisResult, ComparisonResult, Recommendation};
use crate::kpi::{PerformanceLevel, format_kpi_name};
use crate::tier::{TierId, kpi_tier_lookup};

use super::{bar_percent, format_percent_1dp, format_percent_whole, format_score, format_signed_percent};

/// Only the first few actions of a recommendation are shown.
pub const MAX_ACTIONS: usize = 3;

/// Delay between consecutive recommendation cards appearing.
pub const REVEAL_STEP: Duration = Duration::from_millis(100);

pub const NO_RECOMMENDATIONS: &str = "No specific recommendations at this time.";

/// Shown when the server does not send its own benefit list.
const DEFAULT_BENEFITS: [&str; 3] = [
    "Revenue Alignment: Prioritizes direct revenue drivers (55% weight)",
    "Intervention Guidance: Identifies highest-impact improvement areas",
    "Business Focus: Aligns with e-commerce revenue maximization goal",
];

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    /// Creator id and server timestamp, when the server sent them
    pub header: Option<String>,
    pub overall_score: String,
    pub overall_bar_percent: f64,
    pub revenue_focus_score: String,
    pub tiers: Vec<TierRow>,
    pub scores: Vec<ScoreEntry>,
    pub recommendations: Vec<RecommendationCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TierRow {
    pub tier: TierId,
    pub title: String,
    pub weight: String,
    pub average: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub kpi: String,
    pub name: String,
    pub value: String,
    pub level: Option<PerformanceLevel>,
    pub tier: Option<TierId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationCard {
    pub title: String,
    pub priority: String,
    pub expected_improvement: String,
    pub confidence: String,
    pub effort: String,
    pub cost_level: String,
    pub severity: Option<String>,
    pub kpi_affected: Option<String>,
    pub actions: Vec<String>,
    pub reveal_delay: Duration,
}

impl RecommendationCard {
    fn new(index: usize, rec: &Recommendation) -> Self {
        Self {
            title: rec.title.clone(),
            priority: format!("Priority: {:.1}", rec.priority_score),
            expected_improvement: format_percent_1dp(rec.expected_improvement),
            confidence: format_percent_1dp(rec.confidence),
            effort: format_hours(rec.estimated_effort_hours),
            cost_level: rec.cost_level.clone(),
            severity: rec.severity.clone(),
            kpi_affected: rec.kpi_affected.as_deref().map(format_kpi_name),
            actions: rec.actions.iter().take(MAX_ACTIONS).cloned().collect(),
            reveal_delay: REVEAL_STEP * index as u32,
        }
    }

    /// Whether the card should be visible `elapsed` after the result was displayed.
    pub fn is_revealed(&self, elapsed: Duration) -> bool {
        elapsed >= self.reveal_delay
    }
}

impl AnalysisView {
    pub fn new(result: &AnalysisResult) -> Self {
        let tiers = TierId::ALL
            .iter()
            .filter_map(|tier| {
                result.tier_breakdown.get(tier.key()).map(|summary| TierRow {
                    tier: *tier,
                    title: tier.title(),
                    weight: format_percent_whole(summary.total_weight),
                    average: format_score(summary.average_score),
                })
            })
            .collect();

        let lookup = kpi_tier_lookup(&result.tier_breakdown, |t| t.kpis.as_slice());
        let scores = result
            .individual_scores
            .iter()
            .map(|(kpi, score)| ScoreEntry {
                kpi: kpi.clone(),
                name: format_kpi_name(kpi),
                value: format_score(*score),
                level: result.performance_levels.get(kpi).cloned(),
                tier: lookup
                    .get(kpi.as_str())
                    .and_then(|key| TierId::from_key(key)),
            })
            .collect();

        let recommendations = result
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, rec)| RecommendationCard::new(i, rec))
            .collect();

        Self {
            header: header(result),
            overall_score: format_score(result.overall_score),
            overall_bar_percent: bar_percent(result.overall_score),
            revenue_focus_score: format_score(result.revenue_focus_score),
            tiers,
            scores,
            recommendations,
        }
    }

    /// Number of cards visible `elapsed` after display.
    pub fn revealed_count(&self, elapsed: Duration) -> usize {
        self.recommendations
            .iter()
            .take_while(|card| card.is_revealed(elapsed))
            .count()
    }
}

fn header(result: &AnalysisResult) -> Option<String> {
    let timestamp = result
        .timestamp
        .map(|ts| ts.strftime("%Y-%m-%d %H:%M:%S").to_string());

    match (&result.creator_id, timestamp) {
        (Some(id), Some(ts)) => Some(format!("{id} · {ts}")),
        (Some(id), None) => Some(id.clone()),
        (None, Some(ts)) => Some(ts),
        (None, None) => None,
    }
}

/// Effort hours without a trailing ".0" for whole numbers.
fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{:.0}h", hours)
    } else {
        format!("{}h", hours)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonView {
    pub new_score: String,
    pub equal_score: String,
    pub change: String,
    pub difference: Option<String>,
    pub benefits: Vec<String>,
}

impl ComparisonView {
    pub fn new(comparison: &ComparisonResult) -> Self {
        let benefits = if comparison.algorithm_benefits.is_empty() {
            DEFAULT_BENEFITS.iter().map(|s| s.to_string()).collect()
        } else {
            comparison
                .algorithm_benefits
                .iter()
                .map(|(key, text)| format!("{}: {}", format_kpi_name(key), text))
                .collect()
        };

        Self {
            new_score: format_score(comparison.new_weighted_score),
            equal_score: format_score(comparison.equal_weighted_score),
            change: format_signed_percent(comparison.percentage_change),
            difference: comparison.score_difference.map(|d| format!("{:+.3}", d)),
            benefits,
        }
    }
}
