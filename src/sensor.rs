//! Sensor value types.
//!
//! A sensor is a named, typed boolean trip detector.  Identity is the
//! `(name, kind)` pair; the `active` flag is mutable runtime state and is
//! deliberately excluded from equality so a tripped sensor still matches
//! its registry entry.

use core::fmt;
use serde::{Deserialize, Serialize};

/// The closed set of supported trip-detector types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorKind {
    Door,
    Window,
    Motion,
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Door => write!(f, "door"),
            Self::Window => write!(f, "window"),
            Self::Motion => write!(f, "motion"),
        }
    }
}

/// Stable identity of a sensor: its name and kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SensorId {
    pub name: String,
    pub kind: SensorKind,
}

impl SensorId {
    pub fn new(name: impl Into<String>, kind: SensorKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// A physical trip detector as the engine sees it: identity plus the
/// last recorded activation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    pub id: SensorId,
    /// Last recorded activation state.  New sensors start inactive.
    pub active: bool,
}

impl Sensor {
    pub fn new(name: impl Into<String>, kind: SensorKind) -> Self {
        Self {
            id: SensorId::new(name, kind),
            active: false,
        }
    }
}

// Equality is identity only — `active` is runtime state.
impl PartialEq for Sensor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Sensor {}
