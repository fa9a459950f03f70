use crate::api::WeightsConfig;
use crate::kpi::format_kpi_name;
use crate::tier::{TierId, kpi_tier_lookup};

use super::{bar_percent, format_percent_1dp, format_percent_whole};

/// Placeholder for values the payload does not carry.
const MISSING: &str = "—";

#[derive(Debug, Clone, PartialEq)]
pub struct WeightsView {
    pub summary: Vec<TierStat>,
    pub description: Option<String>,
    pub tier_cards: Vec<TierCard>,
    pub table: Vec<WeightRow>,
}

/// One of the three headline tier percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct TierStat {
    pub tier: TierId,
    pub percent: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TierCard {
    pub tier: TierId,
    pub title: String,
    pub description: &'static str,
    pub weight: String,
    pub kpis: Vec<KpiWeight>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiWeight {
    pub name: String,
    pub weight: String,
}

/// Tier label shown next to a KPI in the weights table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierBadge {
    Known(TierId),
    /// A tier key this client has no labels for
    Other(String),
    /// The KPI is not listed under any tier
    Unassigned,
}

impl TierBadge {
    pub fn label(&self) -> String {
        match self {
            TierBadge::Known(tier) => tier.badge().to_string(),
            TierBadge::Other(key) => format_kpi_name(key),
            TierBadge::Unassigned => "Unassigned".to_string(),
        }
    }

    pub fn tier(&self) -> Option<TierId> {
        match self {
            TierBadge::Known(tier) => Some(*tier),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightRow {
    pub kpi: String,
    pub name: String,
    pub badge: TierBadge,
    pub weight: f64,
    pub weight_text: String,
    pub bar_percent: f64,
}

impl WeightsView {
    pub fn new(config: &WeightsConfig) -> Self {
        let summary = TierId::ALL
            .iter()
            .map(|tier| TierStat {
                tier: *tier,
                percent: config
                    .tier_breakdown
                    .get(tier.key())
                    .map(|t| format_percent_whole(t.total_weight))
                    .unwrap_or_else(|| MISSING.to_string()),
            })
            .collect();

        let tier_cards = TierId::ALL
            .iter()
            .filter_map(|tier| {
                let breakdown = config.tier_breakdown.get(tier.key())?;
                let kpis = breakdown
                    .kpis
                    .iter()
                    .map(|kpi| KpiWeight {
                        name: format_kpi_name(kpi),
                        weight: config
                            .weights
                            .get(kpi)
                            .map(|w| format_percent_whole(*w))
                            .unwrap_or_else(|| MISSING.to_string()),
                    })
                    .collect();

                Some(TierCard {
                    tier: *tier,
                    title: tier.title(),
                    description: tier.description(),
                    weight: format_percent_whole(breakdown.total_weight),
                    kpis,
                })
            })
            .collect();

        Self {
            summary,
            description: config.algorithm_description.clone(),
            tier_cards,
            table: weight_rows(config),
        }
    }
}

/// Every weighted KPI, heaviest first. Equal weights keep id order.
pub fn weight_rows(config: &WeightsConfig) -> Vec<WeightRow> {
    let lookup = kpi_tier_lookup(&config.tier_breakdown, |t| t.kpis.as_slice());

    let mut rows: Vec<WeightRow> = config
        .weights
        .iter()
        .map(|(kpi, weight)| {
            let badge = match lookup.get(kpi.as_str()) {
                Some(key) => match TierId::from_key(key) {
                    Some(tier) => TierBadge::Known(tier),
                    None => TierBadge::Other(key.to_string()),
                },
                None => TierBadge::Unassigned,
            };

            WeightRow {
                kpi: kpi.clone(),
                name: format_kpi_name(kpi),
                badge,
                weight: *weight,
                weight_text: format_percent_1dp(*weight),
                bar_percent: bar_percent(*weight),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    rows
}
