//! KPI identifiers, display names and performance levels.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Discrete bucket the service assigns to each KPI score.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PerformanceLevel {
    Low,
    Medium,
    High,
    /// Any level the service sends that this client does not know about
    Other(String),
}

impl PerformanceLevel {
    pub fn parse(value: &str) -> Self {
        match value {
            "low" => PerformanceLevel::Low,
            "medium" => PerformanceLevel::Medium,
            "high" => PerformanceLevel::High,
            other => PerformanceLevel::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PerformanceLevel::Low => "low",
            PerformanceLevel::Medium => "medium",
            PerformanceLevel::High => "high",
            PerformanceLevel::Other(s) => s,
        }
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for PerformanceLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PerformanceLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(PerformanceLevel::parse(&s))
    }
}

/// Turn a snake_case id into a title: `conversion_rate` -> `Conversion Rate`.
///
/// Every alphanumeric run that starts a word gets its first character uppercased;
/// the rest of the word is left as sent.
pub fn format_kpi_name(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut at_word_start = true;

    for c in id.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}
