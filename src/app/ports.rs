//! Port traits — the hexagonal boundary between the decision engine and
//! its collaborators.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ PanelService (domain)
//! ```
//!
//! Driven adapters (the persistence layer, the image classifier) implement
//! these traits.  The [`PanelService`](super::service::PanelService)
//! consumes them via generics at each entry point, so the domain core never
//! touches storage or camera code directly.
//!
//! The engine never caches store values across calls: every decision
//! re-reads current state through [`StateStore`], which remains the single
//! source of truth.

use crate::alarm::{AlarmStatus, ArmingStatus};
use crate::sensor::{Sensor, SensorId};

// ---------------------------------------------------------------------------
// State store port (driven adapter: domain ↔ persistence)
// ---------------------------------------------------------------------------

/// Holds the current arming status, alarm status, and sensor registry.
///
/// The engine is the only writer of the alarm status; arming status is only
/// written via the engine's arming entry point.  Implementations decide
/// durability — the contract makes no promises about it.
pub trait StateStore {
    fn arming_status(&self) -> ArmingStatus;
    fn set_arming_status(&mut self, status: ArmingStatus);

    fn alarm_status(&self) -> AlarmStatus;
    fn set_alarm_status(&mut self, status: AlarmStatus);

    /// Snapshot of the registered sensor set.
    fn sensors(&self) -> Vec<Sensor>;

    /// Register a sensor.  Registering an already-known identity is a no-op.
    fn add_sensor(&mut self, sensor: Sensor);

    /// Unregister a sensor.  Removing an unknown identity is a no-op.
    fn remove_sensor(&mut self, id: &SensorId);

    /// Update the recorded activation flag of a registered sensor.
    /// A no-op for unknown identities.
    fn set_sensor_active(&mut self, id: &SensorId, active: bool);
}

// ---------------------------------------------------------------------------
// Classifier port (driven adapter: camera frames → verdicts)
// ---------------------------------------------------------------------------

/// Yields a boolean "contains a cat" verdict for a camera frame.
///
/// The confidence threshold is passed through uninterpreted; its semantics
/// belong to the classifier implementation.
pub trait CatClassifier {
    fn contains_cat(&mut self, frame: &ImageFrame, confidence_threshold: f32) -> bool;
}

/// An opaque camera frame.  The engine never inspects pixel data; it only
/// hands frames to the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFrame {
    pub width: u32,
    pub height: u32,
    /// Raw pixel bytes in whatever layout the capture source produces.
    pub pixels: Vec<u8>,
}

impl ImageFrame {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// An all-zero frame of the given dimensions, handy in tests.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize)],
        }
    }
}
