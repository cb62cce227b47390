//! Core types for hatecheck

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Status string the health endpoint reports when the model is ready
pub const HEALTHY: &str = "healthy";

/// The closed set of classes the service predicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HateClass {
    HateSpeech,
    OffensiveLanguage,
    Neither,
}

impl HateClass {
    /// All classes, ordered by wire index
    pub const ALL: [HateClass; 3] = [
        HateClass::HateSpeech,
        HateClass::OffensiveLanguage,
        HateClass::Neither,
    ];

    /// Map a wire index onto a class. Anything outside `0..=2` is `None`.
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::HateSpeech),
            1 => Some(Self::OffensiveLanguage),
            2 => Some(Self::Neither),
            _ => None,
        }
    }

    /// Wire index of this class
    pub fn index(&self) -> i64 {
        match self {
            Self::HateSpeech => 0,
            Self::OffensiveLanguage => 1,
            Self::Neither => 2,
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::HateSpeech => "Hate Speech",
            Self::OffensiveLanguage => "Offensive Language",
            Self::Neither => "Neither",
        }
    }

    /// Style tag applied to the class badge
    pub fn style(&self) -> &'static str {
        match self {
            Self::HateSpeech => "class-0",
            Self::OffensiveLanguage => "class-1",
            Self::Neither => "class-2",
        }
    }
}

/// Body of `POST /api/analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Trimmed user text
    pub text: String,

    /// Diagnostic constant echoed in server logs
    pub test: String,
}

impl AnalysisRequest {
    /// Create a new request with the given diagnostic tag
    pub fn new(text: impl Into<String>, test: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            test: test.into(),
        }
    }

    /// First `max_chars` characters of the text, for logging
    pub fn preview(&self, max_chars: usize) -> String {
        let mut preview: String = self.text.chars().take(max_chars).collect();
        if self.text.chars().count() > max_chars {
            preview.push_str("...");
        }
        preview
    }
}

/// Classification returned by the service, or synthesized locally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Predicted class index. Not guaranteed to be a known [`HateClass`].
    pub class: i64,

    /// Confidence as a percentage (0-100)
    pub confidence: f64,

    /// Per-class probabilities, keyed by class name
    #[serde(default)]
    pub probabilities: BTreeMap<String, f64>,

    /// Diagnostic note attached by the producer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
}

impl AnalysisResult {
    /// Create a result with no probabilities
    pub fn new(class: i64, confidence: f64) -> Self {
        Self {
            class,
            confidence,
            probabilities: BTreeMap::new(),
            test: None,
        }
    }

    /// Builder: add a class probability
    pub fn with_probability(mut self, name: impl Into<String>, p: f64) -> Self {
        self.probabilities.insert(name.into(), p);
        self
    }

    /// Builder: attach a diagnostic note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.test = Some(note.into());
        self
    }

    /// The known class, if the index is in range
    pub fn hate_class(&self) -> Option<HateClass> {
        HateClass::from_index(self.class)
    }
}

/// Body of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_loaded: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<String>,
}

impl HealthStatus {
    /// Create a status with no extras
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            model_loaded: None,
            endpoints: Vec::new(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HEALTHY
    }
}

/// Error body the service sends alongside a non-success status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_index_mapping() {
        for class in HateClass::ALL {
            assert_eq!(HateClass::from_index(class.index()), Some(class));
        }
        assert_eq!(HateClass::from_index(3), None);
        assert_eq!(HateClass::from_index(-1), None);
    }

    #[test]
    fn test_labels_and_styles() {
        assert_eq!(HateClass::OffensiveLanguage.label(), "Offensive Language");
        assert_eq!(HateClass::OffensiveLanguage.style(), "class-1");
        assert_eq!(HateClass::Neither.style(), "class-2");
    }

    #[test]
    fn test_result_from_service_body() {
        let body = r#"{
            "class": 1,
            "confidence": 88.4,
            "probabilities": {"class_0": 0.1, "class_1": 0.8, "class_2": 0.1},
            "test": "API is working!"
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.class, 1);
        assert_eq!(result.confidence, 88.4);
        assert_eq!(result.probabilities.len(), 3);
        assert_eq!(result.hate_class(), Some(HateClass::OffensiveLanguage));
        assert_eq!(result.test.as_deref(), Some("API is working!"));
    }

    #[test]
    fn test_result_without_probabilities() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"class": 7, "confidence": 50}"#).unwrap();
        assert!(result.probabilities.is_empty());
        assert_eq!(result.hate_class(), None);
    }

    #[test]
    fn test_result_missing_confidence_is_rejected() {
        assert!(serde_json::from_str::<AnalysisResult>(r#"{"class": 1}"#).is_err());
    }

    #[test]
    fn test_health_extras_are_optional() {
        let health: HealthStatus = serde_json::from_str(r#"{"status": "healthy"}"#).unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.model_loaded, None);

        let health: HealthStatus = serde_json::from_str(
            r#"{"status": "model not loaded", "model_loaded": false, "endpoints": ["/api/health"]}"#,
        )
        .unwrap();
        assert!(!health.is_healthy());
        assert_eq!(health.model_loaded, Some(false));
        assert_eq!(health.endpoints, vec!["/api/health".to_string()]);
    }

    #[test]
    fn test_request_preview() {
        let req = AnalysisRequest::new("a".repeat(60), "t");
        assert_eq!(req.preview(50), format!("{}...", "a".repeat(50)));

        let req = AnalysisRequest::new("short text", "t");
        assert_eq!(req.preview(50), "short text");
    }

    #[test]
    fn test_request_wire_shape() {
        let req = AnalysisRequest::new("some words here", "test from frontend");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"text": "some words here", "test": "test from frontend"})
        );
    }
}
