//! Remote analytics client.
//!
//! [`AnalyticsClient`] builds requests for each [`Endpoint`], hands them to a
//! [`Transport`], and normalizes whatever comes back into either a typed
//! [`ApiReply`] or a [`RequestFailed`]. The transport is the only part that does
//! I/O, so everything here runs the same against a real HTTP stack or a fake.

use std::fmt;

use serde_json::Value;

use crate::api::{AnalysisResult, ComparisonResult, DemoData, HealthStatus, WeightsConfig};
use crate::error::RequestFailed;

/// Flat KPI request body sent to `/analyze` and `/compare-algorithms`.
pub type KpiPayload = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Health,
    DemoData,
    Analyze,
    CompareAlgorithms,
    Weights,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Health => "/health",
            Endpoint::DemoData => "/demo-data",
            Endpoint::Analyze => "/analyze",
            Endpoint::CompareAlgorithms => "/compare-algorithms",
            Endpoint::Weights => "/weights/api",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::Analyze | Endpoint::CompareAlgorithms => Method::Post,
            Endpoint::Health | Endpoint::DemoData | Endpoint::Weights => Method::Get,
        }
    }

    /// Endpoints whose 2xx body must also carry `success: true`.
    fn requires_success_flag(&self) -> bool {
        matches!(
            self,
            Endpoint::DemoData | Endpoint::Analyze | Endpoint::CompareAlgorithms
        )
    }

    /// Reason used when the server reports failure without saying why.
    fn fallback_reason(&self) -> &'static str {
        match self {
            Endpoint::Health => "Health check failed",
            Endpoint::DemoData => "Failed to load demo data",
            Endpoint::Analyze => "Analysis failed",
            Endpoint::CompareAlgorithms => "Comparison failed",
            Endpoint::Weights => "Failed to load weights",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// A fully resolved request, ready for a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

/// What a transport got back, before any interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            status_text: "OK".to_string(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP exchange.
///
/// Implementations report network-level failures as [`RequestFailed::transport`];
/// any response that arrived, whatever its status, is returned as a [`RawResponse`].
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<RawResponse, RequestFailed>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<RawResponse, RequestFailed> {
        (**self).execute(request)
    }
}

/// One API operation a controller can ask for.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Health,
    DemoData,
    Analyze(KpiPayload),
    CompareAlgorithms(KpiPayload),
    Weights,
}

impl ApiCall {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            ApiCall::Health => Endpoint::Health,
            ApiCall::DemoData => Endpoint::DemoData,
            ApiCall::Analyze(_) => Endpoint::Analyze,
            ApiCall::CompareAlgorithms(_) => Endpoint::CompareAlgorithms,
            ApiCall::Weights => Endpoint::Weights,
        }
    }

    fn body(&self) -> Option<Value> {
        match self {
            ApiCall::Analyze(payload) | ApiCall::CompareAlgorithms(payload) => {
                Some(Value::Object(payload.clone()))
            }
            ApiCall::Health | ApiCall::DemoData | ApiCall::Weights => None,
        }
    }
}

/// Typed success payload, one variant per endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply {
    Health(HealthStatus),
    DemoData(DemoData),
    Analysis(Box<AnalysisResult>),
    Comparison(ComparisonResult),
    Weights(WeightsConfig),
}

#[derive(Debug, Clone)]
pub struct AnalyticsClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> AnalyticsClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_for(&self, call: &ApiCall) -> HttpRequest {
        let endpoint = call.endpoint();
        HttpRequest {
            method: endpoint.method(),
            url: format!("{}{}", self.base_url, endpoint.path()),
            body: call.body(),
        }
    }

    /// Execute a call and normalize the response.
    pub fn call(&self, call: &ApiCall) -> Result<ApiReply, RequestFailed> {
        let request = self.request_for(call);
        tracing::debug!(method = ?request.method, url = %request.url, "Sending request");

        let raw = self.transport.execute(&request).inspect_err(|e| {
            tracing::warn!(url = %request.url, error = %e, "Transport failure");
        })?;

        decode(call.endpoint(), &raw)
    }

    pub fn health(&self) -> Result<HealthStatus, RequestFailed> {
        match self.call(&ApiCall::Health)? {
            ApiReply::Health(health) => Ok(health),
            other => Err(unexpected_reply(Endpoint::Health, &other)),
        }
    }

    pub fn demo_data(&self) -> Result<DemoData, RequestFailed> {
        match self.call(&ApiCall::DemoData)? {
            ApiReply::DemoData(data) => Ok(data),
            other => Err(unexpected_reply(Endpoint::DemoData, &other)),
        }
    }

    pub fn analyze(&self, payload: KpiPayload) -> Result<AnalysisResult, RequestFailed> {
        match self.call(&ApiCall::Analyze(payload))? {
            ApiReply::Analysis(result) => Ok(*result),
            other => Err(unexpected_reply(Endpoint::Analyze, &other)),
        }
    }

    pub fn compare_algorithms(&self, payload: KpiPayload) -> Result<ComparisonResult, RequestFailed> {
        match self.call(&ApiCall::CompareAlgorithms(payload))? {
            ApiReply::Comparison(comparison) => Ok(comparison),
            other => Err(unexpected_reply(Endpoint::CompareAlgorithms, &other)),
        }
    }

    pub fn weights(&self) -> Result<WeightsConfig, RequestFailed> {
        match self.call(&ApiCall::Weights)? {
            ApiReply::Weights(weights) => Ok(weights),
            other => Err(unexpected_reply(Endpoint::Weights, &other)),
        }
    }
}

fn unexpected_reply(endpoint: Endpoint, reply: &ApiReply) -> RequestFailed {
    RequestFailed::application(format!("unexpected reply for {endpoint}: {reply:?}"))
}

/// Interpret a raw response for the given endpoint.
pub fn decode(endpoint: Endpoint, raw: &RawResponse) -> Result<ApiReply, RequestFailed> {
    let parsed: Result<Value, _> = serde_json::from_str(&raw.body);

    if !raw.is_success() {
        let reason = parsed
            .ok()
            .as_ref()
            .and_then(server_error)
            .unwrap_or_else(|| status_line(raw));
        return Err(RequestFailed::http(reason));
    }

    let mut body = parsed.map_err(|e| {
        RequestFailed::application(format!("invalid response from {endpoint}: {e}"))
    })?;

    if endpoint.requires_success_flag() && body.get("success") != Some(&Value::Bool(true)) {
        let reason = server_error(&body).unwrap_or_else(|| endpoint.fallback_reason().to_string());
        return Err(RequestFailed::application(reason));
    }

    let schema_error =
        |e: serde_json::Error| RequestFailed::application(format!("unexpected {endpoint} response: {e}"));

    match endpoint {
        Endpoint::Health => serde_json::from_value(body)
            .map(ApiReply::Health)
            .map_err(schema_error),
        Endpoint::DemoData => match body.get_mut("demo_data").map(Value::take) {
            Some(Value::Object(data)) => Ok(ApiReply::DemoData(data)),
            _ => Err(RequestFailed::application(format!(
                "unexpected {endpoint} response: missing demo_data object"
            ))),
        },
        Endpoint::Analyze => serde_json::from_value::<AnalysisResult>(body)
            .map(|result| ApiReply::Analysis(Box::new(result)))
            .map_err(schema_error),
        Endpoint::CompareAlgorithms => {
            let comparison = body.get_mut("comparison").map(Value::take).unwrap_or(Value::Null);
            serde_json::from_value(comparison)
                .map(ApiReply::Comparison)
                .map_err(schema_error)
        }
        Endpoint::Weights => serde_json::from_value(body)
            .map(ApiReply::Weights)
            .map_err(schema_error),
    }
}

/// Server-supplied failure text: `error`, or FastAPI's `detail`.
fn server_error(body: &Value) -> Option<String> {
    ["error", "detail"]
        .iter()
        .find_map(|key| {
            body.get(*key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        })
        .map(str::to_string)
}

fn status_line(raw: &RawResponse) -> String {
    if raw.status_text.is_empty() {
        format!("HTTP {}", raw.status)
    } else {
        format!("HTTP {} {}", raw.status, raw.status_text)
    }
}
