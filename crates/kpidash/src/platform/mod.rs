//! I/O boundary of the dashboard.
//!
//! - [`HttpTransport`]: blocking reqwest implementation of the core `Transport`
//! - [`RequestWorker`]: runs tickets off the UI thread and hands back completions

mod http;
mod worker;

pub use http::HttpTransport;
pub use worker::{RequestWorker, ThreadWorker};
pub(crate) use worker::not_started;
