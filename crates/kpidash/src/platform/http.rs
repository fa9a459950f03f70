//! reqwest-backed transport.

use kpidash_core::client::{HttpRequest, Method, RawResponse, Transport};
use kpidash_core::RequestFailed;

/// Blocking HTTP transport. Cheap to clone; clones share a connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("kpidash/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &HttpRequest) -> Result<RawResponse, RequestFailed> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().map_err(|e| {
            if e.is_connect() {
                RequestFailed::transport(format!("Connection failed: {e}"))
            } else if e.is_timeout() {
                RequestFailed::transport(format!("Request timed out: {e}"))
            } else {
                RequestFailed::transport(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| RequestFailed::transport(format!("Failed to read response body: {e}")))?;

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
