//! Creator metrics input form.
//!
//! Holds the raw text of every input and turns it into the flat request body
//! the analysis endpoints expect.

use serde_json::{Number, Value};

use crate::api::DemoData;
use crate::client::KpiPayload;
use crate::error::FormError;
use crate::kpi::format_kpi_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Numeric,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub id: &'static str,
    pub section: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

impl FormField {
    pub fn label(&self) -> String {
        format_kpi_name(self.id)
    }
}

/// Known input fields as (section, id, kind), in display order.
const FIELDS: &[(&str, &str, FieldKind)] = &[
    ("Creator", "creator_id", FieldKind::Text),
    ("Sales Performance", "conversion_rate", FieldKind::Numeric),
    ("Sales Performance", "total_revenue", FieldKind::Numeric),
    ("Sales Performance", "avg_order_value", FieldKind::Numeric),
    ("Shop Conversion", "funnel_completion_rate", FieldKind::Numeric),
    ("Shop Conversion", "cart_abandonment_rate", FieldKind::Numeric),
    ("Shop Conversion", "checkout_success_rate", FieldKind::Numeric),
    ("TikTok Shop", "listing_quality", FieldKind::Numeric),
    ("TikTok Shop", "product_velocity", FieldKind::Numeric),
    ("TikTok Shop", "integration_seamlessness", FieldKind::Numeric),
    ("Engagement", "likes_ratio", FieldKind::Numeric),
    ("Engagement", "comments_ratio", FieldKind::Numeric),
    ("Engagement", "shares_ratio", FieldKind::Numeric),
    ("Engagement", "retention_rate", FieldKind::Numeric),
    ("Content Strategy", "video_quality", FieldKind::Numeric),
    ("Content Strategy", "content_freshness", FieldKind::Numeric),
    ("Content Strategy", "posting_consistency", FieldKind::Numeric),
    ("Audience Fit", "target_demographic_match", FieldKind::Numeric),
    ("Audience Fit", "audience_engagement_quality", FieldKind::Numeric),
    ("Brand Fit", "brand_alignment", FieldKind::Numeric),
    ("Brand Fit", "trust_score", FieldKind::Numeric),
    ("Trend Fit", "trend_alignment", FieldKind::Numeric),
    ("Image Quality", "image_quality", FieldKind::Numeric),
    ("Image Quality", "lighting_score", FieldKind::Numeric),
    ("Reach", "total_reach", FieldKind::Numeric),
    ("Cost Efficiency", "cost_per_acquisition", FieldKind::Numeric),
];

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    fields: Vec<FormField>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        let fields = FIELDS
            .iter()
            .map(|&(section, id, kind)| FormField {
                id,
                section,
                kind,
                value: String::new(),
            })
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.field(id).map(|f| f.value.as_str())
    }

    pub fn field_at_mut(&mut self, index: usize) -> Option<&mut FormField> {
        self.fields.get_mut(index)
    }

    /// Set a field's raw text. Returns false for unknown ids.
    pub fn set(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.id == id) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Copy demo values into matching fields.
    ///
    /// Unknown keys are ignored and fields absent from `data` keep their current
    /// text. Returns the number of fields written.
    pub fn populate(&mut self, data: &DemoData) -> usize {
        let mut written = 0;
        for field in &mut self.fields {
            let text = match data.get(field.id) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => match n.as_f64() {
                    Some(v) => format!("{v}"),
                    None => n.to_string(),
                },
                Some(Value::Bool(b)) => b.to_string(),
                _ => continue,
            };
            field.value = text;
            written += 1;
        }
        written
    }

    /// Build the request body.
    ///
    /// Empty inputs are omitted, text fields are sent verbatim and numeric
    /// fields must parse to a finite number.
    pub fn collect(&self) -> Result<KpiPayload, FormError> {
        let mut payload = KpiPayload::new();

        for field in &self.fields {
            let raw = field.value.trim();
            if raw.is_empty() {
                continue;
            }

            let value = match field.kind {
                FieldKind::Text => Value::String(raw.to_string()),
                FieldKind::Numeric => raw
                    .parse::<f64>()
                    .ok()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .ok_or_else(|| FormError::InvalidNumber {
                        field: field.id.to_string(),
                        label: field.label(),
                        value: raw.to_string(),
                    })?,
            };
            payload.insert(field.id.to_string(), value);
        }

        Ok(payload)
    }

    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| f.value.is_empty())
    }
}
