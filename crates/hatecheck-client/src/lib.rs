//! hatecheck Client
//!
//! Interaction layer between a form (one text field, one result panel) and
//! the hatecheck classification service.
//!
//! - [`prober`]: one-shot connectivity check with a status badge
//! - [`controller`]: validation, submission and rendering lifecycle
//! - [`render`]: pure view functions
//! - [`surface`]: the presentation boundary the views are applied to
//! - [`api`]: the service calls, over HTTP by default

pub mod api;
pub mod config;
pub mod controller;
pub mod events;
pub mod fallback;
pub mod prober;
pub mod render;
pub mod state;
pub mod surface;

pub use api::{ClassifierApi, HttpClassifierApi};
pub use config::{ClientConfig, FallbackConfig};
pub use controller::{AnalysisController, Provenance, SubmitOutcome};
pub use events::{Key, KeyChord, UiEvent};
pub use fallback::FallbackSynthesizer;
pub use prober::{Connectivity, ConnectivityProber};
pub use render::{ControlsView, Notice, ResultView, StatusBadge};
pub use state::{Phase, Rejection, UiState};
pub use surface::{RecordingSurface, Surface};
