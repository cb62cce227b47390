//! Locally synthesized result used when the service call fails

use crate::config::FallbackConfig;
use hatecheck_core::{AnalysisResult, HateClass};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Note attached to every synthesized result
pub const FALLBACK_NOTE: &str = "Using mock data - server offline";

/// Fixed illustrative distribution
const FALLBACK_PROBABILITIES: [(&str, f64); 3] =
    [("class_0", 0.3), ("class_1", 0.3), ("class_2", 0.4)];

/// Produces placeholder [`AnalysisResult`]s
pub struct FallbackSynthesizer {
    config: FallbackConfig,
    rng: Mutex<StdRng>,
}

impl FallbackSynthesizer {
    pub fn new(config: FallbackConfig) -> Self {
        Self {
            config,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic synthesizer for tests and reproducible demos
    pub fn with_seed(config: FallbackConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn enabled(&self) -> bool {
        self.config.enabled
    }

    /// Class uniform over the known set, confidence uniform over the
    /// configured range
    pub fn synthesize(&self) -> AnalysisResult {
        let mut rng = self.rng.lock();
        let class = HateClass::ALL[rng.gen_range(0..HateClass::ALL.len())];
        let confidence = rng.gen_range(self.config.confidence_min..=self.config.confidence_max);

        let mut result = AnalysisResult::new(class.index(), confidence).with_note(FALLBACK_NOTE);
        for (name, p) in FALLBACK_PROBABILITIES {
            result = result.with_probability(name, p);
        }
        result
    }
}
