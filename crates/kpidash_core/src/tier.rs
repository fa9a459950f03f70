//! The three fixed KPI tiers and their client-side labels.
//!
//! Titles and descriptions are static; the service only sends tier keys
//! (`tier_1`, `tier_2`, `tier_3`), weights and KPI lists.

use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TierId {
    Tier1,
    Tier2,
    Tier3,
}

impl TierId {
    /// Display order on every screen.
    pub const ALL: [TierId; 3] = [TierId::Tier1, TierId::Tier2, TierId::Tier3];

    pub fn key(&self) -> &'static str {
        match self {
            TierId::Tier1 => "tier_1",
            TierId::Tier2 => "tier_2",
            TierId::Tier3 => "tier_3",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "tier_1" => Some(TierId::Tier1),
            "tier_2" => Some(TierId::Tier2),
            "tier_3" => Some(TierId::Tier3),
            _ => None,
        }
    }

    /// Short badge text, e.g. "Tier 1".
    pub fn badge(&self) -> &'static str {
        match self {
            TierId::Tier1 => "Tier 1",
            TierId::Tier2 => "Tier 2",
            TierId::Tier3 => "Tier 3",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TierId::Tier1 => "Revenue Drivers",
            TierId::Tier2 => "Revenue Enablers",
            TierId::Tier3 => "General Health",
        }
    }

    pub fn title(&self) -> String {
        format!("{}: {}", self.badge(), self.name())
    }

    pub fn description(&self) -> &'static str {
        match self {
            TierId::Tier1 => {
                "Direct revenue and conversion metrics that directly impact e-commerce success"
            }
            TierId::Tier2 => {
                "Metrics that enable and support revenue generation through engagement and content quality"
            }
            TierId::Tier3 => {
                "General content health, reach, and efficiency metrics for long-term sustainability"
            }
        }
    }
}

/// Build a KPI id -> tier key lookup from any tier-keyed breakdown.
///
/// Tier keys are visited in sorted order; if a KPI is listed under more than one
/// tier the last tier wins.
pub fn kpi_tier_lookup<'a, T, F>(breakdown: &'a BTreeMap<String, T>, kpis: F) -> HashMap<&'a str, &'a str>
where
    F: Fn(&'a T) -> &'a [String],
{
    let mut lookup = HashMap::new();
    for (tier_key, tier) in breakdown {
        for kpi in kpis(tier) {
            lookup.insert(kpi.as_str(), tier_key.as_str());
        }
    }
    lookup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_keys_roundtrip() {
        for tier in TierId::ALL {
            assert_eq!(TierId::from_key(tier.key()), Some(tier));
        }
        assert_eq!(TierId::from_key("tier_4"), None);
    }

    #[test]
    fn test_titles_are_static() {
        assert_eq!(TierId::Tier1.title(), "Tier 1: Revenue Drivers");
        assert_eq!(TierId::Tier2.title(), "Tier 2: Revenue Enablers");
        assert_eq!(TierId::Tier3.title(), "Tier 3: General Health");
    }

    #[test]
    fn test_lookup_maps_each_kpi_to_its_tier() {
        let mut breakdown = BTreeMap::new();
        breakdown.insert("tier_1".to_string(), vec!["a".to_string(), "b".to_string()]);
        breakdown.insert("tier_2".to_string(), vec!["c".to_string()]);

        let lookup = kpi_tier_lookup(&breakdown, |kpis| kpis.as_slice());
        assert_eq!(lookup.get("a"), Some(&"tier_1"));
        assert_eq!(lookup.get("b"), Some(&"tier_1"));
        assert_eq!(lookup.get("c"), Some(&"tier_2"));
        assert_eq!(lookup.get("d"), None);
    }
}
