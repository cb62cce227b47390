//! Classification service API trait and its HTTP implementation

use crate::config::ClientConfig;
use async_trait::async_trait;
use hatecheck_core::types::ErrorBody;
use hatecheck_core::{AnalysisRequest, AnalysisResult, Error, HealthStatus, Result};
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::StatusCode;
use url::Url;

/// The two calls the interaction layer makes against the service
#[async_trait]
pub trait ClassifierApi: Send + Sync {
    /// Liveness check
    async fn health(&self) -> Result<HealthStatus>;

    /// Classify one piece of text
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult>;
}

/// [`ClassifierApi`] backed by reqwest
pub struct HttpClassifierApi {
    client: reqwest::Client,
    health_url: Url,
    analyze_url: Url,
}

impl HttpClassifierApi {
    /// Build a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            health_url: config.health_url()?,
            analyze_url: config.analyze_url()?,
        })
    }

    pub fn health_url(&self) -> &Url {
        &self.health_url
    }

    pub fn analyze_url(&self) -> &Url {
        &self.analyze_url
    }
}

#[async_trait]
impl ClassifierApi for HttpClassifierApi {
    async fn health(&self) -> Result<HealthStatus> {
        tracing::debug!("GET {}", self.health_url);

        let response = self
            .client
            .get(self.health_url.clone())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        tracing::debug!("Health response status: {}", status);

        let body = response.text().await.map_err(transport_error)?;
        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        let health: HealthStatus = serde_json::from_str(&body)
            .map_err(|e| Error::decode(format!("health body: {}", e)))?;
        tracing::debug!(
            status = %health.status,
            model_loaded = ?health.model_loaded,
            endpoints = health.endpoints.len(),
            "Health response decoded"
        );
        Ok(health)
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        tracing::debug!("POST {}", self.analyze_url);

        let response = self
            .client
            .post(self.analyze_url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        tracing::debug!("Analyze response status: {}", status);

        let body = response.text().await.map_err(transport_error)?;

        // The body must be JSON on both paths; a non-JSON error page is a
        // decode failure rather than a status failure.
        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| Error::decode(format!("analyze body is not JSON: {}", e)))?;

        if !status.is_success() {
            let message = serde_json::from_value::<ErrorBody>(value)
                .ok()
                .and_then(|b| b.error);
            return Err(Error::status(status.as_u16(), message));
        }

        serde_json::from_value(value).map_err(|e| Error::decode(format!("analyze body: {}", e)))
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout
    } else {
        Error::transport(err.to_string())
    }
}

fn status_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error);
    Error::status(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_come_from_config() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:5003".to_string(),
            ..Default::default()
        };
        let api = HttpClassifierApi::new(&config).unwrap();
        assert_eq!(api.health_url().as_str(), "http://127.0.0.1:5003/api/health");
        assert_eq!(api.analyze_url().as_str(), "http://127.0.0.1:5003/api/analyze");
    }

    #[test]
    fn test_status_error_reads_error_field() {
        let err = status_error(StatusCode::SERVICE_UNAVAILABLE, r#"{"error":"Model not loaded"}"#);
        assert_eq!(err.to_string(), "Model not loaded");

        let err = status_error(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "HTTP 502");
    }
}
