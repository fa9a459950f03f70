//! Tests for the metrics form
//!
//! These tests verify:
//! - Demo data fills matching fields and ignores unknown keys
//! - Collection omits empty inputs and types numeric fields
//! - Non-numeric input is rejected before any request is built

use serde_json::json;

use crate::api::DemoData;
use crate::error::FormError;
use crate::form::{FieldKind, FormState};

fn demo(value: serde_json::Value) -> DemoData {
    value.as_object().unwrap().clone()
}

#[test]
fn test_populate_matches_known_fields_only() {
    let mut form = FormState::new();
    form.set("video_quality", "0.9");

    let written = form.populate(&demo(json!({
        "creator_id": "demo_creator",
        "conversion_rate": 0.034,
        "total_revenue": 15000,
        "not_a_field": 1.0
    })));

    assert_eq!(written, 3);
    assert_eq!(form.value("creator_id"), Some("demo_creator"));
    assert_eq!(form.value("conversion_rate"), Some("0.034"));
    assert_eq!(form.value("total_revenue"), Some("15000"));
    // Absent from the payload, so untouched
    assert_eq!(form.value("video_quality"), Some("0.9"));
    assert!(form.field("not_a_field").is_none());
}

#[test]
fn test_collect_omits_empty_and_types_values() {
    let mut form = FormState::new();
    form.set("creator_id", " creator_042 ");
    form.set("likes_ratio", "0.08");
    form.set("total_reach", "   ");

    let payload = form.collect().unwrap();
    assert_eq!(payload.len(), 2);
    assert_eq!(payload.get("creator_id"), Some(&json!("creator_042")));
    assert_eq!(payload.get("likes_ratio"), Some(&json!(0.08)));
    assert!(!payload.contains_key("total_reach"));
}

#[test]
fn test_collect_rejects_non_numeric() {
    let mut form = FormState::new();
    form.set("total_revenue", "lots");

    let err = form.collect().unwrap_err();
    let FormError::InvalidNumber { field, value, .. } = &err;
    assert_eq!(field, "total_revenue");
    assert_eq!(value, "lots");
    assert!(err.to_string().starts_with("Total Revenue"));
}

#[test]
fn test_collect_rejects_nan() {
    let mut form = FormState::new();
    form.set("likes_ratio", "NaN");
    assert!(form.collect().is_err());
}

#[test]
fn test_clear_blanks_every_field() {
    let mut form = FormState::new();
    form.populate(&demo(json!({"creator_id": "x", "likes_ratio": 0.1})));
    assert!(!form.is_blank());

    form.clear();
    assert!(form.is_blank());
    assert!(form.collect().unwrap().is_empty());
}

#[test]
fn test_only_creator_id_is_text() {
    let form = FormState::new();
    let text: Vec<_> = form
        .fields()
        .iter()
        .filter(|f| f.kind == FieldKind::Text)
        .map(|f| f.id)
        .collect();
    assert_eq!(text, vec!["creator_id"]);
}
