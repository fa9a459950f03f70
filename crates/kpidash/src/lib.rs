//! Terminal dashboard for the creator KPI analytics service
//!
//! This crate is the application shell around `kpidash_core`:
//! - Command-line arguments and `config.yaml` settings
//! - File logging with size-based rotation
//! - A reqwest transport and a thread-per-request worker
//! - The ratatui pages for creator analysis and algorithm weights

pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod platform;
pub mod screens;
pub mod state;
pub mod util;

#[cfg(test)]
mod tests;

pub use app::App;
pub use config::{ConfigError, DashboardConfig, StartPage};
pub use logging::init_logging;
pub use platform::{HttpTransport, RequestWorker, ThreadWorker};
