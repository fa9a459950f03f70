//! Property-based tests for view formatting and table ordering

use std::collections::BTreeMap;

use proptest::prelude::*;

use crate::api::{TierSummary, WeightTier, WeightsConfig};
use crate::view::{AnalysisView, TierBadge, WeightsView, bar_percent, format_score};
use crate::AnalysisResult;

/// KPI ids shaped like the service's snake_case names
fn kpi_id_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}(_[a-z]{1,8}){0,2}").unwrap()
}

/// Arbitrary weights, with some KPIs listed under tiers and some not
fn weights_strategy() -> impl Strategy<Value = WeightsConfig> {
    prop::collection::btree_map(kpi_id_strategy(), (0.0f64..1.0, 0usize..4), 0..24).prop_map(
        |entries| {
            let mut tier_breakdown: BTreeMap<String, WeightTier> = BTreeMap::new();
            let mut weights = BTreeMap::new();
            for (kpi, (weight, tier)) in entries {
                weights.insert(kpi.clone(), weight);
                // tier 0 leaves the KPI unassigned
                if tier > 0 {
                    tier_breakdown
                        .entry(format!("tier_{tier}"))
                        .or_insert_with(|| WeightTier {
                            total_weight: 0.0,
                            kpis: Vec::new(),
                        })
                        .kpis
                        .push(kpi);
                }
            }
            WeightsConfig {
                weights,
                tier_breakdown,
                algorithm_description: None,
            }
        },
    )
}

fn analysis_with_score(overall: f64) -> AnalysisResult {
    AnalysisResult {
        creator_id: None,
        overall_score: overall,
        revenue_focus_score: 0.0,
        tier_breakdown: BTreeMap::from([(
            "tier_1".to_string(),
            TierSummary {
                total_weight: 0.55,
                average_score: overall,
                kpis: Vec::new(),
            },
        )]),
        individual_scores: BTreeMap::new(),
        performance_levels: BTreeMap::new(),
        recommendations: Vec::new(),
        timestamp: None,
    }
}

proptest! {
    #[test]
    fn test_score_text_has_three_decimals(score in -10.0f64..10.0) {
        let view = AnalysisView::new(&analysis_with_score(score));
        let text = &view.overall_score;
        let (_, decimals) = text.split_once('.').unwrap();
        prop_assert_eq!(decimals.len(), 3);
        prop_assert_eq!(text, &format_score(score));
        prop_assert!((text.parse::<f64>().unwrap() - score).abs() <= 0.0005 + 1e-9);
    }

    #[test]
    fn test_bar_percent_is_clamped(score in prop::num::f64::ANY) {
        let percent = bar_percent(score);
        prop_assert!((0.0..=100.0).contains(&percent));
        if (0.0..=1.0).contains(&score) {
            prop_assert!((percent - score * 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_weights_table_is_sorted_and_complete(config in weights_strategy()) {
        let view = WeightsView::new(&config);

        prop_assert_eq!(view.table.len(), config.weights.len());
        for pair in view.table.windows(2) {
            prop_assert!(pair[0].weight >= pair[1].weight);
            if pair[0].weight == pair[1].weight {
                prop_assert!(pair[0].kpi < pair[1].kpi);
            }
        }

        for row in &view.table {
            let listed = config.tier_breakdown.values().any(|t| t.kpis.contains(&row.kpi));
            prop_assert_eq!(listed, row.badge != TierBadge::Unassigned);
        }
    }
}
