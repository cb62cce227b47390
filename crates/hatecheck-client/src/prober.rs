//! One-shot connectivity check

use crate::api::ClassifierApi;
use crate::render::{Notice, StatusBadge};
use crate::surface::Surface;
use serde::Serialize;
use std::sync::Arc;

/// What the probe found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum Connectivity {
    Healthy,
    /// Service answered with a status other than healthy
    Unrecognized(String),
    /// No usable answer
    Unreachable(String),
}

impl Connectivity {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}

/// Checks the service once and reports the outcome on the surface
pub struct ConnectivityProber {
    api: Arc<dyn ClassifierApi>,
    surface: Arc<dyn Surface>,
    server_hint: String,
}

impl ConnectivityProber {
    pub fn new(
        api: Arc<dyn ClassifierApi>,
        surface: Arc<dyn Surface>,
        server_hint: impl Into<String>,
    ) -> Self {
        Self {
            api,
            surface,
            server_hint: server_hint.into(),
        }
    }

    /// Issue exactly one health request. No retry.
    ///
    /// Healthy: positive badge. Other status: degraded badge. Failure:
    /// error badge plus a blocking notice.
    pub async fn probe(&self) -> Connectivity {
        tracing::info!("Testing server connection...");

        match self.api.health().await {
            Ok(health) if health.is_healthy() => {
                tracing::info!("Server is connected");
                self.surface.insert_badge(&StatusBadge::connected());
                Connectivity::Healthy
            }
            Ok(health) => {
                tracing::warn!(
                    status = %health.status,
                    model_loaded = ?health.model_loaded,
                    "Server answered but is not healthy"
                );
                self.surface.insert_badge(&StatusBadge::degraded(&health.status));
                Connectivity::Unrecognized(health.status)
            }
            Err(e) => {
                tracing::error!("Server connection failed: {}", e);
                let reason = e.to_string();
                self.surface.insert_badge(&StatusBadge::server_error());
                self.surface
                    .alert(&Notice::connection_failed(&reason, &self.server_hint));
                Connectivity::Unreachable(reason)
            }
        }
    }
}
