//! Mock classification service for testing
//!
//! Provides a configurable implementation of the ClassifierApi trait that
//! counts calls and replays scripted responses.

#![allow(dead_code)]

use async_trait::async_trait;
use hatecheck_client::ClassifierApi;
use hatecheck_core::{AnalysisRequest, AnalysisResult, Error, HealthStatus, Result};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

/// Scripted failure modes
#[derive(Debug, Clone)]
pub enum Failure {
    Transport(String),
    Timeout,
    Status(u16, Option<String>),
    Decode(String),
}

impl Failure {
    fn to_error(&self) -> Error {
        match self {
            Self::Transport(msg) => Error::transport(msg.clone()),
            Self::Timeout => Error::Timeout,
            Self::Status(code, msg) => Error::status(*code, msg.clone()),
            Self::Decode(msg) => Error::decode(msg.clone()),
        }
    }
}

pub struct MockApi {
    health: std::result::Result<HealthStatus, Failure>,
    analyze: std::result::Result<AnalysisResult, Failure>,
    latency: Option<Duration>,
    health_calls: AtomicU32,
    analyze_calls: AtomicU32,
    last_request: Mutex<Option<AnalysisRequest>>,
}

impl MockApi {
    /// Healthy service that classifies everything as Neither
    pub fn new() -> Self {
        Self {
            health: Ok(HealthStatus::new("healthy")),
            analyze: Ok(AnalysisResult::new(2, 85.5)),
            latency: None,
            health_calls: AtomicU32::new(0),
            analyze_calls: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn with_health_status(mut self, status: &str) -> Self {
        self.health = Ok(HealthStatus::new(status));
        self
    }

    pub fn with_health_failure(mut self, failure: Failure) -> Self {
        self.health = Err(failure);
        self
    }

    pub fn with_result(mut self, result: AnalysisResult) -> Self {
        self.analyze = Ok(result);
        self
    }

    pub fn with_analyze_failure(mut self, failure: Failure) -> Self {
        self.analyze = Err(failure);
        self
    }

    /// Simulated latency for every call
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn health_calls(&self) -> u32 {
        self.health_calls.load(Ordering::Relaxed)
    }

    pub fn analyze_calls(&self) -> u32 {
        self.analyze_calls.load(Ordering::Relaxed)
    }

    pub fn last_request(&self) -> Option<AnalysisRequest> {
        self.last_request.lock().clone()
    }
}

#[async_trait]
impl ClassifierApi for MockApi {
    async fn health(&self) -> Result<HealthStatus> {
        self.health_calls.fetch_add(1, Ordering::Relaxed);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.health.clone().map_err(|f| f.to_error())
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        self.analyze_calls.fetch_add(1, Ordering::Relaxed);
        *self.last_request.lock() = Some(request.clone());
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.analyze.clone().map_err(|f| f.to_error())
    }
}
