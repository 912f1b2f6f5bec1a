//! Stand-in image classifier.
//!
//! Guesses whether an image shows a cat by flipping a coin.  Carries no
//! algorithmic content on purpose: it exists so the rest of the panel can
//! be exercised end to end before a trained model is wired in.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::app::ports::{CatClassifier, ImageFrame};

/// Classifier returning an unconditioned random verdict.
///
/// The confidence threshold is accepted and ignored, as the port contract
/// allows.  Seed it for deterministic sequences in tests.
#[derive(Debug)]
pub struct RandomGuessClassifier {
    rng: SmallRng,
}

impl RandomGuessClassifier {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic variant for tests and demos.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomGuessClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CatClassifier for RandomGuessClassifier {
    fn contains_cat(&mut self, _frame: &ImageFrame, _confidence_threshold: f32) -> bool {
        self.rng.gen_bool(0.5)
    }
}
