//! Dashboard settings loaded from `{data_dir}/config.yaml`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Page shown when the dashboard opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StartPage {
    #[default]
    Analysis,
    Weights,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Root URL of the analytics service
    pub base_url: String,
    /// How long toasts stay on screen
    pub notification_seconds: u64,
    /// Drop responses superseded by a newer request for the same area
    pub discard_stale_responses: bool,
    pub start_page: StartPage,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            notification_seconds: 3,
            discard_stale_responses: true,
            start_page: StartPage::Analysis,
        }
    }
}

impl DashboardConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.yaml")
    }

    /// Read the config file. A missing file yields the defaults.
    pub fn load(data_dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        serde_saphyr::from_str(&content).map_err(|e| ConfigError::Parse {
            path,
            message: e.to_string(),
        })
    }

    /// Like [`load`](Self::load), but falls back to defaults on any error.
    pub fn load_or_default(data_dir: &Path) -> Self {
        Self::load(data_dir).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Using default configuration");
            Self::default()
        })
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, base_url: Option<String>, page: Option<StartPage>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(page) = page {
            self.start_page = page;
        }
        self
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_seconds)
    }
}
