use super::Surface;
use crate::render::{ControlsView, Notice, ResultView, StatusBadge};
use parking_lot::RwLock;

/// In-memory page model that records everything shown on it
pub struct RecordingSurface {
    inner: RwLock<PageModel>,
}

#[derive(Debug, Clone, Default)]
pub struct PageModel {
    pub notices: Vec<Notice>,
    pub badges: Vec<StatusBadge>,
    pub input_clears: usize,
    pub controls: Option<ControlsView>,
    pub has_result_targets: bool,
    pub result: Option<ResultView>,
    pub result_markup: Option<String>,
    pub scrolls: usize,
}

impl RecordingSurface {
    /// Page with a fully built result panel
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(PageModel {
                has_result_targets: true,
                ..Default::default()
            }),
        }
    }

    /// Page whose result panel is an empty container
    pub fn without_result_targets() -> Self {
        Self {
            inner: RwLock::new(PageModel::default()),
        }
    }

    /// Copy of the current page
    pub fn snapshot(&self) -> PageModel {
        self.inner.read().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.inner.read().notices.clone()
    }

    pub fn badges(&self) -> Vec<StatusBadge> {
        self.inner.read().badges.clone()
    }

    pub fn controls(&self) -> Option<ControlsView> {
        self.inner.read().controls.clone()
    }

    pub fn result(&self) -> Option<ResultView> {
        self.inner.read().result.clone()
    }

    pub fn results_visible(&self) -> bool {
        self.inner
            .read()
            .controls
            .as_ref()
            .is_some_and(|c| c.results_visible)
    }

    pub fn loading_visible(&self) -> bool {
        self.inner
            .read()
            .controls
            .as_ref()
            .is_some_and(|c| c.loading_visible)
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RecordingSurface {
    fn alert(&self, notice: &Notice) {
        self.inner.write().notices.push(notice.clone());
    }

    fn insert_badge(&self, badge: &StatusBadge) {
        self.inner.write().badges.push(badge.clone());
    }

    fn clear_input(&self) {
        self.inner.write().input_clears += 1;
    }

    fn apply_controls(&self, view: &ControlsView) {
        self.inner.write().controls = Some(view.clone());
    }

    fn has_result_targets(&self) -> bool {
        self.inner.read().has_result_targets
    }

    fn show_result(&self, view: &ResultView) {
        self.inner.write().result = Some(view.clone());
    }

    fn replace_result_markup(&self, markup: &str) {
        let mut page = self.inner.write();
        page.result_markup = Some(markup.to_string());
        // The generated panel carries its own badge/bar/value elements
        page.has_result_targets = true;
    }

    fn scroll_to_results(&self) {
        self.inner.write().scrolls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_installs_targets() {
        let surface = RecordingSurface::without_result_targets();
        assert!(!surface.has_result_targets());

        surface.replace_result_markup("<h2>Analysis Results</h2>");
        assert!(surface.has_result_targets());
        assert!(surface.snapshot().result_markup.is_some());
    }

    #[test]
    fn test_records_in_order() {
        let surface = RecordingSurface::new();
        surface.alert(&Notice::new("first"));
        surface.alert(&Notice::new("second"));
        surface.insert_badge(&StatusBadge::connected());

        let notices = surface.notices();
        assert_eq!(notices[0].message, "first");
        assert_eq!(notices[1].message, "second");
        assert_eq!(surface.badges().len(), 1);
    }
}
