//! Shared payloads and a scripted transport.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::{Value, json};

use crate::api::{AnalysisResult, WeightsConfig};
use crate::client::{HttpRequest, RawResponse, Transport};
use crate::error::RequestFailed;

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<RawResponse, RequestFailed>>>,
    pub requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, response: Result<RawResponse, RequestFailed>) -> Self {
        self.responses.borrow_mut().push_back(response);
        self
    }

    pub fn respond_json(self, body: Value) -> Self {
        self.respond(Ok(RawResponse::ok(body.to_string())))
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: &HttpRequest) -> Result<RawResponse, RequestFailed> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(RequestFailed::transport("no scripted response")))
    }
}

pub fn analysis_body(overall: f64) -> Value {
    json!({
        "success": true,
        "creator_id": "creator_042",
        "overall_score": overall,
        "revenue_focus_score": 0.6123,
        "tier_breakdown": {
            "tier_1": {
                "total_weight": 0.55,
                "average_score": 0.71234,
                "kpis": ["conversion_rate", "total_revenue"]
            },
            "tier_2": {
                "total_weight": 0.30,
                "average_score": 0.5,
                "kpis": ["likes_ratio"]
            },
            "tier_3": {
                "total_weight": 0.15,
                "average_score": 0.25,
                "kpis": ["total_reach"]
            }
        },
        "individual_scores": {
            "conversion_rate": 0.8,
            "total_revenue": 0.62468,
            "likes_ratio": 0.5,
            "total_reach": 0.25
        },
        "performance_levels": {
            "conversion_rate": "high",
            "total_revenue": "medium",
            "likes_ratio": "medium",
            "total_reach": "low"
        },
        "recommendations": [
            {
                "title": "Improve Reach",
                "priority_score": 2.345,
                "expected_improvement": 0.153,
                "confidence": 0.8,
                "estimated_effort_hours": 24,
                "cost_level": "medium",
                "severity": "high",
                "kpi_affected": "total_reach",
                "actions": ["Post daily", "Use trending sounds", "Collaborate", "Run ads"]
            },
            {
                "title": "Polish Listings",
                "priority_score": 1.0,
                "expected_improvement": 0.05,
                "confidence": 0.6,
                "estimated_effort_hours": 2.5,
                "cost_level": "low",
                "actions": []
            }
        ],
        "timestamp": "2025-03-01T09:15:30.123456"
    })
}

pub fn analysis_result(overall: f64) -> AnalysisResult {
    serde_json::from_value(analysis_body(overall)).unwrap()
}

pub fn comparison_body(change: f64) -> Value {
    json!({
        "success": true,
        "comparison": {
            "new_weighted_score": 0.6543,
            "equal_weighted_score": 0.5821,
            "percentage_change": change,
            "score_difference": 0.0722
        }
    })
}

pub fn weights_body() -> Value {
    json!({
        "weights": {
            "conversion_rate": 0.20,
            "total_revenue": 0.20,
            "avg_order_value": 0.15,
            "likes_ratio": 0.10,
            "total_reach": 0.05,
            "mystery_metric": 0.30
        },
        "tier_breakdown": {
            "tier_1": {
                "total_weight": 0.55,
                "kpis": ["conversion_rate", "total_revenue", "avg_order_value"]
            },
            "tier_2": {
                "total_weight": 0.30,
                "kpis": ["likes_ratio", "retention_rate"]
            },
            "tier_3": {
                "total_weight": 0.15,
                "kpis": ["total_reach"]
            }
        },
        "algorithm_description": "Revenue-weighted tiers"
    })
}

pub fn weights_config() -> WeightsConfig {
    serde_json::from_value(weights_body()).unwrap()
}
