//! Projection of API payloads into display-ready view models.
//!
//! Every string a screen shows is produced here so the formatting rules can be
//! tested without a terminal. Screens only lay the values out.

pub mod analysis;
pub mod weights;

pub use analysis::{AnalysisView, ComparisonView, RecommendationCard, ScoreEntry, TierRow};
pub use weights::{KpiWeight, TierBadge, TierCard, TierStat, WeightRow, WeightsView};

/// Round to `decimals` places with ties away from zero: 0.125 -> 0.13.
fn round_half_away(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Score with exactly three decimals.
pub fn format_score(value: f64) -> String {
    format!("{:.3}", round_half_away(value, 3))
}

/// Fraction as a whole percentage: 0.55 -> "55%".
pub fn format_percent_whole(fraction: f64) -> String {
    format!("{:.0}%", round_half_away(fraction * 100.0, 0))
}

/// Fraction as a percentage with one decimal: 0.123 -> "12.3%".
pub fn format_percent_1dp(fraction: f64) -> String {
    format!("{:.1}%", round_half_away(fraction * 100.0, 1))
}

/// Already-scaled percentage with an explicit sign: 12.34 -> "+12.3%".
pub fn format_signed_percent(percent: f64) -> String {
    format!("{:+.1}%", round_half_away(percent, 1))
}

/// Bar fill for a 0..1 score, in percent, clamped to 0..=100.
pub fn bar_percent(fraction: f64) -> f64 {
    let percent = fraction * 100.0;
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
