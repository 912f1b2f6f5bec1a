//! Panel configuration parameters.
//!
//! Tunables for the decision engine.  The hosting application decides where
//! these come from (file, UI, defaults); the engine only reads them.

use serde::{Deserialize, Serialize};

/// Core panel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Confidence threshold handed to the image classifier (0.0–1.0).
    /// Its interpretation belongs entirely to the classifier.
    pub confidence_threshold: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.5,
        }
    }
}

impl PanelConfig {
    /// Range-check every field.  Invalid configs are rejected, not clamped.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.confidence_threshold.is_nan() {
            return Err("confidence_threshold must not be NaN");
        }
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err("confidence_threshold must be within 0.0-1.0");
        }
        Ok(())
    }
}
