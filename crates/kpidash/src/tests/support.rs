//! Fake transport and worker for driving the app without a server.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kpidash_core::client::{Endpoint, HttpRequest, RawResponse, Transport};
use kpidash_core::{AnalyticsClient, Completion, RequestFailed, Ticket};
use serde_json::{Value, json};

use crate::App;
use crate::config::DashboardConfig;
use crate::platform::RequestWorker;

/// Answers by URL path; unknown paths fail like a refused connection.
#[derive(Default)]
pub struct RoutedTransport {
    routes: HashMap<&'static str, Result<RawResponse, RequestFailed>>,
}

impl RoutedTransport {
    pub fn with(mut self, endpoint: Endpoint, body: Value) -> Self {
        self.routes
            .insert(endpoint.path(), Ok(RawResponse::ok(body.to_string())));
        self
    }

    pub fn failing(mut self, endpoint: Endpoint, error: RequestFailed) -> Self {
        self.routes.insert(endpoint.path(), Err(error));
        self
    }
}

impl Transport for RoutedTransport {
    fn execute(&self, request: &HttpRequest) -> Result<RawResponse, RequestFailed> {
        self.routes
            .iter()
            .find(|(path, _)| request.url.ends_with(*path))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| Err(RequestFailed::transport("connection refused")))
    }
}

/// Runs each ticket immediately; completions wait for the next `try_recv`.
pub struct InlineWorker {
    client: AnalyticsClient<RoutedTransport>,
    done: RefCell<VecDeque<Completion>>,
    pub sent: RefCell<Vec<Ticket>>,
    /// When false every `send` is refused
    pub accepting: bool,
}

impl InlineWorker {
    pub fn new(transport: RoutedTransport) -> Self {
        Self {
            client: AnalyticsClient::new("http://test", transport),
            done: RefCell::new(VecDeque::new()),
            sent: RefCell::new(Vec::new()),
            accepting: true,
        }
    }

    pub fn set_transport(&mut self, transport: RoutedTransport) {
        self.client = AnalyticsClient::new("http://test", transport);
    }

    pub fn refusing() -> Self {
        Self {
            accepting: false,
            ..Self::new(RoutedTransport::default())
        }
    }
}

impl RequestWorker for InlineWorker {
    fn send(&self, ticket: Ticket) -> bool {
        if !self.accepting {
            return false;
        }
        let result = self.client.call(&ticket.call);
        self.done
            .borrow_mut()
            .push_back(Completion::new(&ticket, result));
        self.sent.borrow_mut().push(ticket);
        true
    }

    fn try_recv(&self) -> Option<Completion> {
        self.done.borrow_mut().pop_front()
    }
}

/// A transport that answers every endpoint successfully.
pub fn healthy_service() -> RoutedTransport {
    RoutedTransport::default()
        .with(
            Endpoint::Health,
            json!({"status": "healthy", "service": "kpi-analytics", "version": "1.0.0"}),
        )
        .with(
            Endpoint::DemoData,
            json!({
                "success": true,
                "demo_data": {
                    "creator_id": "demo_creator_001",
                    "conversion_rate": 0.034,
                    "total_revenue": 15000,
                    "likes_ratio": 0.08
                }
            }),
        )
        .with(Endpoint::Analyze, analysis_body())
        .with(
            Endpoint::CompareAlgorithms,
            json!({
                "success": true,
                "comparison": {
                    "new_weighted_score": 0.6543,
                    "equal_weighted_score": 0.5821,
                    "percentage_change": 12.34
                }
            }),
        )
        .with(Endpoint::Weights, weights_body())
}

pub fn analysis_body() -> Value {
    json!({
        "success": true,
        "creator_id": "demo_creator_001",
        "overall_score": 0.7234,
        "revenue_focus_score": 0.6123,
        "tier_breakdown": {
            "tier_1": {"total_weight": 0.55, "average_score": 0.71, "kpis": ["conversion_rate"]},
            "tier_2": {"total_weight": 0.30, "average_score": 0.5, "kpis": ["likes_ratio"]}
        },
        "individual_scores": {"conversion_rate": 0.8, "likes_ratio": 0.5},
        "performance_levels": {"conversion_rate": "high", "likes_ratio": "medium"},
        "recommendations": [{
            "title": "Boost Engagement",
            "priority_score": 1.8,
            "expected_improvement": 0.12,
            "confidence": 0.7,
            "estimated_effort_hours": 8,
            "cost_level": "low",
            "actions": ["Reply to comments"]
        }]
    })
}

pub fn weights_body() -> Value {
    json!({
        "weights": {"conversion_rate": 0.35, "likes_ratio": 0.2, "orphan_metric": 0.05},
        "tier_breakdown": {
            "tier_1": {"total_weight": 0.55, "kpis": ["conversion_rate"]},
            "tier_2": {"total_weight": 0.30, "kpis": ["likes_ratio"]},
            "tier_3": {"total_weight": 0.15, "kpis": []}
        }
    })
}

pub fn app_with(worker: InlineWorker) -> App<InlineWorker> {
    App::new(&DashboardConfig::default(), worker)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn press(app: &mut App<InlineWorker>, code: KeyCode) {
    app.handle_key_event(key(code));
}

pub fn type_text(app: &mut App<InlineWorker>, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}
