//! Tests for view projection
//!
//! These tests verify:
//! - Analysis formatting: scores, tiers, individual entries and recommendation cards
//! - Comparison formatting with signed change and default benefits
//! - Weights summary, tier cards and the sorted table with unassigned KPIs

use std::time::Duration;

use super::fixtures::{analysis_result, comparison_body, weights_config};
use crate::api::ComparisonResult;
use crate::kpi::PerformanceLevel;
use crate::tier::TierId;
use crate::view::analysis::NO_RECOMMENDATIONS;
use crate::view::{AnalysisView, ComparisonView, TierBadge, WeightsView};

fn comparison(change: f64) -> ComparisonResult {
    serde_json::from_value(comparison_body(change)["comparison"].clone()).unwrap()
}

#[test]
fn test_analysis_scores_and_tiers() {
    let view = AnalysisView::new(&analysis_result(0.7234));

    assert_eq!(view.overall_score, "0.723");
    assert!((view.overall_bar_percent - 72.34).abs() < 1e-9);
    assert_eq!(view.revenue_focus_score, "0.612");

    let titles: Vec<_> = view.tiers.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Tier 1: Revenue Drivers",
            "Tier 2: Revenue Enablers",
            "Tier 3: General Health"
        ]
    );
    assert_eq!(view.tiers[0].weight, "55%");
    assert_eq!(view.tiers[0].average, "0.712");
    assert_eq!(view.tiers[1].weight, "30%");
}

#[test]
fn test_analysis_skips_missing_tiers() {
    let mut result = analysis_result(0.5);
    result.tier_breakdown.remove("tier_2");

    let view = AnalysisView::new(&result);
    let tiers: Vec<_> = view.tiers.iter().map(|t| t.tier).collect();
    assert_eq!(tiers, vec![TierId::Tier1, TierId::Tier3]);
}

#[test]
fn test_individual_scores_carry_level_and_tier() {
    let view = AnalysisView::new(&analysis_result(0.5));

    let names: Vec<_> = view.scores.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Conversion Rate", "Likes Ratio", "Total Reach", "Total Revenue"]
    );

    let revenue = &view.scores[3];
    assert_eq!(revenue.value, "0.625");
    assert_eq!(revenue.level, Some(PerformanceLevel::Medium));
    assert_eq!(revenue.tier, Some(TierId::Tier1));
    assert_eq!(view.scores[2].tier, Some(TierId::Tier3));
}

#[test]
fn test_recommendation_cards() {
    let view = AnalysisView::new(&analysis_result(0.5));
    assert_eq!(view.recommendations.len(), 2);

    let card = &view.recommendations[0];
    assert_eq!(card.priority, "Priority: 2.3");
    assert_eq!(card.expected_improvement, "15.3%");
    assert_eq!(card.confidence, "80.0%");
    assert_eq!(card.effort, "24h");
    assert_eq!(card.cost_level, "medium");
    assert_eq!(card.kpi_affected.as_deref(), Some("Total Reach"));
    assert_eq!(card.actions, vec!["Post daily", "Use trending sounds", "Collaborate"]);

    assert_eq!(view.recommendations[1].effort, "2.5h");
    assert!(view.recommendations[1].actions.is_empty());
}

#[test]
fn test_recommendations_reveal_progressively() {
    let view = AnalysisView::new(&analysis_result(0.5));
    assert_eq!(view.recommendations[1].reveal_delay, Duration::from_millis(100));

    assert_eq!(view.revealed_count(Duration::ZERO), 1);
    assert_eq!(view.revealed_count(Duration::from_millis(99)), 1);
    assert_eq!(view.revealed_count(Duration::from_millis(100)), 2);
}

#[test]
fn test_empty_recommendations() {
    let mut result = analysis_result(0.5);
    result.recommendations.clear();

    let view = AnalysisView::new(&result);
    assert!(view.recommendations.is_empty());
    assert_eq!(NO_RECOMMENDATIONS, "No specific recommendations at this time.");
}

#[test]
fn test_analysis_header() {
    let view = AnalysisView::new(&analysis_result(0.5));
    assert_eq!(view.header.as_deref(), Some("creator_042 · 2025-03-01 09:15:30"));

    let mut result = analysis_result(0.5);
    result.creator_id = None;
    result.timestamp = None;
    assert!(AnalysisView::new(&result).header.is_none());
}

#[test]
fn test_comparison_signed_change() {
    let view = ComparisonView::new(&comparison(12.34));
    assert_eq!(view.new_score, "0.654");
    assert_eq!(view.equal_score, "0.582");
    assert_eq!(view.change, "+12.3%");
    assert_eq!(view.difference.as_deref(), Some("+0.072"));
    assert_eq!(view.benefits.len(), 3);

    let view = ComparisonView::new(&comparison(-4.0));
    assert_eq!(view.change, "-4.0%");
}

#[test]
fn test_comparison_server_benefits_replace_defaults() {
    let mut result = comparison(1.0);
    result
        .algorithm_benefits
        .insert("revenue_alignment".into(), "Weights revenue first".into());

    let view = ComparisonView::new(&result);
    assert_eq!(view.benefits, vec!["Revenue Alignment: Weights revenue first"]);
}

#[test]
fn test_weights_summary_and_cards() {
    let view = WeightsView::new(&weights_config());

    let summary: Vec<_> = view.summary.iter().map(|s| s.percent.as_str()).collect();
    assert_eq!(summary, vec!["55%", "30%", "15%"]);
    assert_eq!(view.description.as_deref(), Some("Revenue-weighted tiers"));

    assert_eq!(view.tier_cards.len(), 3);
    let enablers = &view.tier_cards[1];
    assert_eq!(enablers.title, "Tier 2: Revenue Enablers");
    assert_eq!(enablers.kpis[0].name, "Likes Ratio");
    assert_eq!(enablers.kpis[0].weight, "10%");
    // Listed under the tier but missing from `weights`
    assert_eq!(enablers.kpis[1].weight, "—");
}

#[test]
fn test_weights_summary_missing_tier() {
    let mut config = weights_config();
    config.tier_breakdown.remove("tier_3");

    let view = WeightsView::new(&config);
    assert_eq!(view.summary[2].percent, "—");
    assert_eq!(view.tier_cards.len(), 2);
}

#[test]
fn test_weights_table_sorted_with_unassigned() {
    let view = WeightsView::new(&weights_config());

    let order: Vec<_> = view.table.iter().map(|r| r.kpi.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "mystery_metric",
            "conversion_rate",
            "total_revenue",
            "avg_order_value",
            "likes_ratio",
            "total_reach"
        ]
    );

    let mystery = &view.table[0];
    assert_eq!(mystery.badge, TierBadge::Unassigned);
    assert_eq!(mystery.badge.label(), "Unassigned");
    assert_eq!(mystery.weight_text, "30.0%");

    let reach = &view.table[5];
    assert_eq!(reach.badge, TierBadge::Known(TierId::Tier3));
    assert_eq!(reach.badge.label(), "Tier 3");
    assert!((reach.bar_percent - 5.0).abs() < 1e-9);
}
