//! In-memory state store.
//!
//! The canonical [`StateStore`] for tests and embedding demos: plain
//! fields, no persistence.  Also defines [`PanelState`], the serializable
//! snapshot shared with the file-backed store.

use serde::{Deserialize, Serialize};

use crate::alarm::{AlarmStatus, ArmingStatus};
use crate::app::ports::StateStore;
use crate::sensor::{Sensor, SensorId};

/// Complete persisted panel state: arming mode, alarm level, sensor set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelState {
    pub arming: ArmingStatus,
    pub alarm: AlarmStatus,
    pub sensors: Vec<Sensor>,
}

/// [`StateStore`] backed by a [`PanelState`] held in memory.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    state: PanelState,
}

impl InMemoryStateStore {
    /// Fresh store: disarmed, no alarm, no sensors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with an existing snapshot.
    pub fn from_state(state: PanelState) -> Self {
        Self { state }
    }

    /// Read access to the full snapshot.
    pub fn state(&self) -> &PanelState {
        &self.state
    }
}

impl StateStore for InMemoryStateStore {
    fn arming_status(&self) -> ArmingStatus {
        self.state.arming
    }

    fn set_arming_status(&mut self, status: ArmingStatus) {
        self.state.arming = status;
    }

    fn alarm_status(&self) -> AlarmStatus {
        self.state.alarm
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) {
        self.state.alarm = status;
    }

    fn sensors(&self) -> Vec<Sensor> {
        self.state.sensors.clone()
    }

    fn add_sensor(&mut self, sensor: Sensor) {
        // Set semantics: identity already present means no-op.
        if !self.state.sensors.iter().any(|s| s.id == sensor.id) {
            self.state.sensors.push(sensor);
        }
    }

    fn remove_sensor(&mut self, id: &SensorId) {
        self.state.sensors.retain(|s| s.id != *id);
    }

    fn set_sensor_active(&mut self, id: &SensorId, active: bool) {
        if let Some(s) = self.state.sensors.iter_mut().find(|s| s.id == *id) {
            s.active = active;
        }
    }
}
