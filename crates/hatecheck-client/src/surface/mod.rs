//! The presentation boundary
//!
//! A [`Surface`] is the only place where views become visible. The
//! controller and prober never format output themselves; they compute views
//! with [`crate::render`] and pass them here.

pub mod memory;

pub use memory::RecordingSurface;

use crate::render::{ControlsView, Notice, ResultView, StatusBadge};

pub trait Surface: Send + Sync {
    /// Show a blocking notice
    fn alert(&self, notice: &Notice);

    /// Add a connectivity badge
    fn insert_badge(&self, badge: &StatusBadge);

    /// Empty the text field
    fn clear_input(&self);

    /// Sync character count, submit button, loading indicator and panel
    /// visibility
    fn apply_controls(&self, view: &ControlsView);

    /// Whether the result panel has its badge/bar/value targets
    fn has_result_targets(&self) -> bool;

    /// Fill the result targets
    fn show_result(&self, view: &ResultView);

    /// Replace the entire result panel
    fn replace_result_markup(&self, markup: &str);

    /// Bring the result panel into view
    fn scroll_to_results(&self);
}
