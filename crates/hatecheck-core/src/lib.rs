//! hatecheck Core
//!
//! Core types and errors shared by the hatecheck client and console.
//!
//! This crate provides:
//! - Wire types for the classification service (health, analyze request/response)
//! - The closed set of hate-speech classes and their display labels
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{AnalysisRequest, AnalysisResult, HateClass, HealthStatus};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{AnalysisRequest, AnalysisResult, HateClass, HealthStatus};
}
