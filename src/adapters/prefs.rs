//! File-backed state store.
//!
//! Write-through [`StateStore`] that mirrors every mutation to a JSON file
//! and reloads the snapshot on open.  A pretend-persistence stand-in:
//! good enough to survive a restart, with no durability guarantees beyond
//! a whole-file rewrite per change.
//!
//! Trait accessors stay infallible to honour the engine's contract; a
//! failed flush is logged and the in-memory snapshot remains authoritative
//! until the next successful write.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;

use crate::alarm::{AlarmStatus, ArmingStatus};
use crate::app::ports::StateStore;
use crate::error::Result;
use crate::sensor::{Sensor, SensorId};

use super::memory::PanelState;

/// [`StateStore`] persisted as pretty-printed JSON at a fixed path.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    state: PanelState,
}

impl JsonFileStore {
    /// Open the store, loading prior state from `path` if the file exists.
    /// A missing file yields the default (disarmed, quiet, empty) state; a
    /// present-but-unreadable file is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => PanelState::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, state })
    }

    /// Write the current snapshot to disk.
    pub fn save(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.state)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    /// Where the snapshot lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read access to the full snapshot.
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    fn flush(&self) {
        if let Err(e) = self.save() {
            warn!(
                "panel state flush to {} failed: {e}",
                self.path.display()
            );
        }
    }
}

impl StateStore for JsonFileStore {
    fn arming_status(&self) -> ArmingStatus {
        self.state.arming
    }

    fn set_arming_status(&mut self, status: ArmingStatus) {
        self.state.arming = status;
        self.flush();
    }

    fn alarm_status(&self) -> AlarmStatus {
        self.state.alarm
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) {
        self.state.alarm = status;
        self.flush();
    }

    fn sensors(&self) -> Vec<Sensor> {
        self.state.sensors.clone()
    }

    fn add_sensor(&mut self, sensor: Sensor) {
        if !self.state.sensors.iter().any(|s| s.id == sensor.id) {
            self.state.sensors.push(sensor);
            self.flush();
        }
    }

    fn remove_sensor(&mut self, id: &SensorId) {
        let before = self.state.sensors.len();
        self.state.sensors.retain(|s| s.id != *id);
        if self.state.sensors.len() != before {
            self.flush();
        }
    }

    fn set_sensor_active(&mut self, id: &SensorId, active: bool) {
        if let Some(s) = self.state.sensors.iter_mut().find(|s| s.id == *id) {
            s.active = active;
            self.flush();
        }
    }
}
