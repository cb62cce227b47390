//! Terminal rendering of the form and result panel

use hatecheck_client::render::BadgeKind;
use hatecheck_client::{ControlsView, Notice, ResultView, StatusBadge, Surface};
use parking_lot::Mutex;
use std::io::Write;

const BAR_CELLS: usize = 20;

/// [`Surface`] that prints to a writer (stdout in the binary)
pub struct TerminalSurface<W: Write + Send> {
    inner: Mutex<TerminalInner<W>>,
}

struct TerminalInner<W> {
    out: W,
    /// Last controls printed, so only changes are reported
    last_controls: Option<ControlsView>,
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            inner: Mutex::new(TerminalInner {
                out,
                last_controls: None,
            }),
        }
    }

    fn print(&self, text: &str) {
        let mut inner = self.inner.lock();
        let _ = writeln!(inner.out, "{}", text);
        let _ = inner.out.flush();
    }
}

impl TerminalSurface<Vec<u8>> {
    /// Everything written so far
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock().out).into_owned()
    }
}

impl<W: Write + Send> Surface for TerminalSurface<W> {
    fn alert(&self, notice: &Notice) {
        let rule = "!".repeat(60);
        self.print(&format!("{}\n{}\n{}", rule, notice.message, rule));
    }

    fn insert_badge(&self, badge: &StatusBadge) {
        let marker = match badge.kind {
            BadgeKind::Connected => "+",
            BadgeKind::Degraded => "~",
            BadgeKind::ServerError => "x",
        };
        self.print(&format!("[{}] {}", marker, badge.text));
    }

    fn clear_input(&self) {
        self.print("(input cleared)");
    }

    fn apply_controls(&self, view: &ControlsView) {
        let mut inner = self.inner.lock();
        let previous = inner.last_controls.replace(view.clone());

        let mut lines = Vec::new();
        let changed = |f: fn(&ControlsView) -> bool| previous.as_ref().map(f) != Some(f(view));

        if previous.as_ref().map(|p| &p.char_count) != Some(&view.char_count)
            || changed(|v| v.submit_enabled)
        {
            lines.push(format!(
                "{} characters, analyze {}",
                view.char_count,
                if view.submit_enabled { "enabled" } else { "disabled" }
            ));
        }
        if changed(|v| v.loading_visible) && view.loading_visible {
            lines.push("Analyzing...".to_string());
        }
        if changed(|v| v.results_visible) && !view.results_visible && previous.is_some() {
            lines.push("(results hidden)".to_string());
        }

        for line in lines {
            let _ = writeln!(inner.out, "{}", line);
        }
        let _ = inner.out.flush();
    }

    fn has_result_targets(&self) -> bool {
        true
    }

    fn show_result(&self, view: &ResultView) {
        self.print(&format!(
            "Analysis Results\n  Classification: {} ({})\n  Confidence:     {} {}",
            view.label,
            view.style,
            confidence_bar(&view.bar_width),
            view.confidence_text
        ));
    }

    fn replace_result_markup(&self, markup: &str) {
        self.print(markup);
    }

    fn scroll_to_results(&self) {}
}

/// `[#########...]` from a width like "45.5%"
fn confidence_bar(width: &str) -> String {
    let percent = width
        .trim_end_matches('%')
        .parse::<f64>()
        .unwrap_or(0.0)
        .clamp(0.0, 100.0);
    let filled = ((percent / 100.0) * BAR_CELLS as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_CELLS - filled))
}
