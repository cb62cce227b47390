//! UI state for one text field and one result panel
//!
//! Everything visible is either stored here or derived from it; the
//! [`Surface`](crate::surface::Surface) only ever receives views computed
//! from this state.

use serde::Serialize;

/// Submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Validating,
    Submitting,
    Success,
    Fallback,
}

/// Why a submission never reached the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Trimmed text shorter than the minimum
    TooShort { length: usize, min_chars: usize },
}

impl Rejection {
    /// Notice shown to the user
    pub fn message(&self) -> String {
        match self {
            Self::TooShort { min_chars, .. } => {
                format!("Please enter at least {} characters.", min_chars)
            }
        }
    }
}

/// Trim `text` and check it against the minimum length.
///
/// Length is counted in characters, not bytes.
pub fn validate_text(text: &str, min_chars: usize) -> Result<String, Rejection> {
    let trimmed = text.trim();
    let length = trimmed.chars().count();
    if length < min_chars {
        return Err(Rejection::TooShort { length, min_chars });
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone)]
pub struct UiState {
    text: String,
    min_chars: usize,
    loading: bool,
    results_visible: bool,
    phase: Phase,
}

impl UiState {
    pub fn new(min_chars: usize) -> Self {
        Self {
            text: String::new(),
            min_chars,
            loading: false,
            results_visible: false,
            phase: Phase::Idle,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// Characters in the raw input, whitespace included
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Submit is enabled under the same trimmed rule that gates submission
    pub fn submit_enabled(&self) -> bool {
        validate_text(&self.text, self.min_chars).is_ok()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Empty the input and hide the result panel, whatever came before.
    ///
    /// An in-flight submission keeps its phase; its result will still be
    /// rendered when it lands.
    pub fn clear(&mut self) {
        self.text.clear();
        self.results_visible = false;
    }

    /// Idle -> Validating
    pub fn begin_validation(&mut self) {
        self.phase = Phase::Validating;
    }

    /// Validating -> Submitting: show loading, hide the previous result
    pub fn begin_submission(&mut self) {
        self.phase = Phase::Submitting;
        self.loading = true;
        self.results_visible = false;
    }

    /// Submitting -> Success | Fallback. Loading is hidden on both paths.
    pub fn finish_submission(&mut self, phase: Phase) {
        debug_assert!(matches!(phase, Phase::Success | Phase::Fallback | Phase::Idle));
        self.phase = phase;
        self.loading = false;
    }

    /// Panel shown after a render
    pub fn show_results(&mut self) {
        self.results_visible = true;
    }

    /// Back to Idle from any phase, without touching loading or the panel
    pub fn settle(&mut self) {
        self.phase = Phase::Idle;
    }
}
