//! Client configuration

use hatecheck_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the classification service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the liveness endpoint
    #[serde(default = "default_health_path")]
    pub health_path: String,

    /// Path of the analysis endpoint
    #[serde(default = "default_analyze_path")]
    pub analyze_path: String,

    /// Minimum trimmed character count before a submission is allowed
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,

    /// Per-request timeout. `None` waits forever.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: Option<u64>,

    /// Diagnostic constant sent as the `test` field of each analysis
    #[serde(default = "default_diagnostic_tag")]
    pub diagnostic_tag: String,

    /// Command shown to the user for starting the service locally
    #[serde(default = "default_server_hint")]
    pub server_hint: String,

    /// Fallback result configuration
    #[serde(default)]
    pub fallback: FallbackConfig,
}

impl ClientConfig {
    /// Load configuration from a YAML file, or use defaults when the file
    /// does not exist
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let path = config_path.as_ref();
        let config: Self = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express
    pub fn validate(&self) -> Result<()> {
        self.base()?;

        if self.min_chars == 0 {
            return Err(Error::config("min_chars must be at least 1"));
        }

        let fb = &self.fallback;
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(fb.confidence_min) || !in_range(fb.confidence_max) {
            return Err(Error::config("fallback confidence must lie within 0..=100"));
        }
        if fb.confidence_min > fb.confidence_max {
            return Err(Error::config(format!(
                "fallback confidence_min ({}) exceeds confidence_max ({})",
                fb.confidence_min, fb.confidence_max
            )));
        }

        Ok(())
    }

    /// Parsed base URL
    pub fn base(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| Error::config(format!("invalid base_url '{}': {}", self.base_url, e)))
    }

    /// Absolute URL of the health endpoint
    pub fn health_url(&self) -> Result<Url> {
        self.endpoint(&self.health_path)
    }

    /// Absolute URL of the analysis endpoint
    pub fn analyze_url(&self) -> Result<Url> {
        self.endpoint(&self.analyze_path)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base()?
            .join(path)
            .map_err(|e| Error::config(format!("invalid endpoint path '{}': {}", path, e)))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            health_path: default_health_path(),
            analyze_path: default_analyze_path(),
            min_chars: default_min_chars(),
            request_timeout_secs: default_timeout_secs(),
            diagnostic_tag: default_diagnostic_tag(),
            server_hint: default_server_hint(),
            fallback: FallbackConfig::default(),
        }
    }
}

/// Locally synthesized result used when the service call fails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Render a synthetic result on failure
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_confidence_min")]
    pub confidence_min: f64,

    #[serde(default = "default_confidence_max")]
    pub confidence_max: f64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            confidence_min: default_confidence_min(),
            confidence_max: default_confidence_max(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_health_path() -> String {
    "/api/health".to_string()
}

fn default_analyze_path() -> String {
    "/api/analyze".to_string()
}

fn default_min_chars() -> usize {
    10
}

fn default_timeout_secs() -> Option<u64> {
    Some(10)
}

fn default_diagnostic_tag() -> String {
    "test from frontend".to_string()
}

fn default_server_hint() -> String {
    "python app.py".to_string()
}

fn default_confidence_min() -> f64 {
    75.0
}

fn default_confidence_max() -> f64 {
    95.0
}

fn default_true() -> bool {
    true
}
