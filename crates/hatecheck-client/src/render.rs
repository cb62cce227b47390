//! Pure view functions
//!
//! Nothing here touches a surface. The controller and prober compute views
//! with these functions and hand them to the
//! [`Surface`](crate::surface::Surface) boundary.

use crate::state::UiState;
use hatecheck_core::AnalysisResult;
use serde::Serialize;

/// Style tag for class indexes outside the known set
pub const UNKNOWN_CLASS_STYLE: &str = "class-unknown";

/// Form controls derived from [`UiState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlsView {
    pub char_count: String,
    pub submit_enabled: bool,
    pub loading_visible: bool,
    pub results_visible: bool,
}

pub fn controls(state: &UiState) -> ControlsView {
    ControlsView {
        char_count: state.char_count().to_string(),
        submit_enabled: state.submit_enabled(),
        loading_visible: state.loading(),
        results_visible: state.results_visible(),
    }
}

/// Contents of the result panel targets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    /// Badge text, e.g. "Offensive Language"
    pub label: String,
    /// Badge style tag, e.g. "class-1"
    pub style: String,
    /// Confidence bar width, e.g. "88.4%"
    pub bar_width: String,
    /// Confidence text with one decimal, e.g. "88.4%"
    pub confidence_text: String,
}

impl ResultView {
    /// Full class attribute of the badge element
    pub fn badge_class(&self) -> String {
        format!("class-badge {}", self.style)
    }
}

pub fn result_view(result: &AnalysisResult) -> ResultView {
    let (label, style) = match result.hate_class() {
        Some(class) => (class.label().to_string(), class.style().to_string()),
        None => (format!("Class {}", result.class), UNKNOWN_CLASS_STYLE.to_string()),
    };

    ResultView {
        label,
        style,
        bar_width: bar_width(result.confidence),
        confidence_text: confidence_text(result.confidence),
    }
}

pub fn bar_width(confidence: f64) -> String {
    format!("{}%", confidence)
}

pub fn confidence_text(confidence: f64) -> String {
    format!("{:.1}%", confidence)
}

/// Markup for the whole result panel, used when the surface has no
/// result targets to fill in
pub fn result_panel_markup(result: &AnalysisResult) -> String {
    let raw = serde_json::to_string_pretty(result).unwrap_or_else(|_| format!("{:?}", result));

    format!(
        r#"
<h2>Analysis Results</h2>
<div class="result-card">
    <div class="classification">
        <h3>Classification</h3>
        <div class="class-badge" id="classBadge">Class {class}</div>
    </div>
    <div class="confidence">
        <h4>Confidence</h4>
        <div class="confidence-bar">
            <div class="confidence-fill" id="confidenceFill" style="width: {width}"></div>
        </div>
        <div class="confidence-value" id="confidenceValue">{text}</div>
    </div>
    <div class="details">
        <h4>Raw Result Data:</h4>
        <pre style="background: white; padding: 10px; border-radius: 5px; overflow: auto;">
{raw}
        </pre>
    </div>
</div>
"#,
        class = result.class,
        width = html_escape(&bar_width(result.confidence)),
        text = html_escape(&confidence_text(result.confidence)),
        raw = html_escape(&raw),
    )
}

/// Connectivity indicator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    Connected,
    Degraded,
    ServerError,
}

/// Persistent connectivity indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub kind: BadgeKind,
    pub text: String,
}

impl StatusBadge {
    pub fn connected() -> Self {
        Self {
            kind: BadgeKind::Connected,
            text: "Connected".to_string(),
        }
    }

    /// Service answered but reported something other than healthy
    pub fn degraded(status: &str) -> Self {
        Self {
            kind: BadgeKind::Degraded,
            text: format!("Server: {}", status),
        }
    }

    pub fn server_error() -> Self {
        Self {
            kind: BadgeKind::ServerError,
            text: "Server Error".to_string(),
        }
    }

    pub fn is_positive(&self) -> bool {
        self.kind == BadgeKind::Connected
    }

    pub fn background(&self) -> &'static str {
        match self.kind {
            BadgeKind::Connected => "green",
            BadgeKind::Degraded => "orange",
            BadgeKind::ServerError => "red",
        }
    }

    /// Fixed top-right badge element
    pub fn to_html(&self) -> String {
        format!(
            r#"<div style="position:fixed; top:10px; right:10px; background:{}; color:white; padding:5px; border-radius:3px;">{}</div>"#,
            self.background(),
            html_escape(&self.text)
        )
    }
}

/// Blocking message the user must acknowledge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Health check failed; tell the user how to bring the service up
    pub fn connection_failed(reason: &str, server_hint: &str) -> Self {
        Self::new(format!(
            "Cannot connect to server!\n\n\
             Make sure the classification server is running:\n\
             1. Open a terminal\n\
             2. Run: {}\n\
             3. Check for errors\n\n\
             Error: {}",
            server_hint, reason
        ))
    }

    pub fn analysis_failed(reason: &str) -> Self {
        Self::new(format!("Analysis failed:\n{}", reason))
    }
}

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offensive_language_view() {
        let result = AnalysisResult::new(1, 88.4)
            .with_probability("class_0", 0.1)
            .with_probability("class_1", 0.8)
            .with_probability("class_2", 0.1);

        let view = result_view(&result);
        assert_eq!(view.label, "Offensive Language");
        assert_eq!(view.style, "class-1");
        assert_eq!(view.badge_class(), "class-badge class-1");
        assert_eq!(view.confidence_text, "88.4%");
        assert_eq!(view.bar_width, "88.4%");
    }

    #[test]
    fn test_confidence_formatting() {
        assert_eq!(confidence_text(80.0), "80.0%");
        assert_eq!(bar_width(80.0), "80%");
        assert_eq!(confidence_text(91.26), "91.3%");
    }

    #[test]
    fn test_out_of_range_class_uses_default_case() {
        let view = result_view(&AnalysisResult::new(5, 60.0));
        assert_eq!(view.label, "Class 5");
        assert_eq!(view.style, UNKNOWN_CLASS_STYLE);

        let view = result_view(&AnalysisResult::new(-1, 60.0));
        assert_eq!(view.label, "Class -1");
    }

    #[test]
    fn test_controls_follow_state() {
        let mut state = UiState::new(10);
        state.set_text("long enough text");
        let view = controls(&state);
        assert_eq!(view.char_count, "16");
        assert!(view.submit_enabled);
        assert!(!view.loading_visible);
        assert!(!view.results_visible);
    }

    #[test]
    fn test_panel_markup_embeds_result() {
        let result = AnalysisResult::new(2, 77.5)
            .with_probability("class_2", 0.4)
            .with_note("Using mock data - server offline");
        let html = result_panel_markup(&result);

        assert!(html.contains("<h2>Analysis Results</h2>"));
        assert!(html.contains(r#"id="classBadge">Class 2</div>"#));
        assert!(html.contains("style=\"width: 77.5%\""));
        assert!(html.contains(r#"id="confidenceValue">77.5%</div>"#));
        assert!(html.contains("&quot;class_2&quot;: 0.4"));
        assert!(html.contains("Using mock data - server offline"));
    }

    #[test]
    fn test_panel_markup_escapes_notes() {
        let result = AnalysisResult::new(0, 90.0).with_note("<script>alert('x')</script>");
        let html = result_panel_markup(&result);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_badges() {
        assert!(StatusBadge::connected().is_positive());
        assert!(!StatusBadge::server_error().is_positive());

        let html = StatusBadge::server_error().to_html();
        assert!(html.contains("background:red"));
        assert!(html.contains(">Server Error</div>"));

        let html = StatusBadge::degraded("model not loaded").to_html();
        assert!(html.contains("background:orange"));
        assert!(html.contains("Server: model not loaded"));
    }

    #[test]
    fn test_notices() {
        let notice = Notice::connection_failed("connection refused", "python app.py");
        assert!(notice.message.starts_with("Cannot connect to server!"));
        assert!(notice.message.contains("2. Run: python app.py"));
        assert!(notice.message.ends_with("Error: connection refused"));

        assert_eq!(
            Notice::analysis_failed("HTTP 500").message,
            "Analysis failed:\nHTTP 500"
        );
    }

    #[test]
    fn test_html_escape_special_chars() {
        assert_eq!(html_escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;");
        assert_eq!(html_escape("plain"), "plain");
    }
}
