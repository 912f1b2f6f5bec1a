//! Panel service — the hexagonal core.
//!
//! [`PanelService`] is the alarm engine: it consumes sensor trip events,
//! image-classification verdicts, and operator arm/disarm commands, derives
//! the next alarm and arming state, writes it back through the
//! [`StateStore`] port, and notifies registered listeners.  Collaborators
//! are injected at each call site, making the whole engine testable with
//! in-memory adapters.
//!
//! Every entry point is synchronous and runs to completion — read state,
//! decide, write state, notify — before returning.  No locking happens
//! here; callers that share a store across threads must serialize access
//! around each call.

use log::{debug, info, warn};

use crate::alarm::{self, AlarmStatus, ArmingStatus};
use crate::config::PanelConfig;
use crate::sensor::Sensor;

use super::listeners::{ListenerId, ListenerRegistry};
use super::ports::{CatClassifier, ImageFrame, StateStore};

/// The decision engine for the security panel.
pub struct PanelService {
    config: PanelConfig,
    /// Verdict of the most recent [`process_image`](Self::process_image)
    /// call.  Instance state, not process-global, so engines in tests do
    /// not interfere.
    last_cat_verdict: bool,
    alarm_listeners: ListenerRegistry<AlarmStatus>,
    arming_listeners: ListenerRegistry<ArmingStatus>,
}

impl PanelService {
    /// Construct the engine.  An invalid config is replaced by defaults
    /// rather than propagated — the engine itself is infallible.
    pub fn new(config: PanelConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(msg) => {
                warn!("invalid panel config ({msg}), falling back to defaults");
                PanelConfig::default()
            }
        };
        Self {
            config,
            last_cat_verdict: false,
            alarm_listeners: ListenerRegistry::new(),
            arming_listeners: ListenerRegistry::new(),
        }
    }

    // ── Sensor events ─────────────────────────────────────────

    /// Record a sensor activation change and apply the matching rule table.
    ///
    /// Activation always re-runs the escalation rule — a "still tripped"
    /// signal is a meaningful re-trigger, not a no-op.  Deactivation runs
    /// the de-escalation rule only on a true→false edge.  The sensor's
    /// `active` flag is updated afterwards in every case, on the passed-in
    /// object and (when registered) in the store.
    pub fn set_sensor_active(
        &mut self,
        store: &mut impl StateStore,
        sensor: &mut Sensor,
        active: bool,
    ) {
        if active {
            self.handle_sensor_activated(store, sensor);
        } else if sensor.active {
            self.handle_sensor_deactivated(store, sensor);
        } else {
            debug!("SENSOR | {} already inactive, nothing to de-escalate", sensor.id);
        }

        sensor.active = active;
        store.set_sensor_active(&sensor.id, active);
    }

    /// Mark a sensor inactive and apply the de-escalation rule even if it
    /// was already inactive.
    ///
    /// Re-evaluation entry point: the caller's only goal is "apply the
    /// deactivation consequence now", edge check deliberately bypassed.
    pub fn force_deactivate(&mut self, store: &mut impl StateStore, sensor: &mut Sensor) {
        self.handle_sensor_deactivated(store, sensor);
        sensor.active = false;
        store.set_sensor_active(&sensor.id, false);
    }

    fn handle_sensor_activated(&mut self, store: &mut impl StateStore, sensor: &Sensor) {
        if store.arming_status() == ArmingStatus::Disarmed {
            debug!("SENSOR | {} tripped while disarmed, dropped", sensor.id);
            return;
        }
        if let Some(next) = alarm::escalate(store.alarm_status()) {
            info!("SENSOR | {} tripped", sensor.id);
            self.update_alarm_status(store, next);
        }
    }

    fn handle_sensor_deactivated(&mut self, store: &mut impl StateStore, sensor: &Sensor) {
        // De-escalation is not gated on arming status.
        if let Some(next) = alarm::de_escalate(store.alarm_status()) {
            info!("SENSOR | {} restored", sensor.id);
            self.update_alarm_status(store, next);
        }
    }

    // ── Image events ──────────────────────────────────────────

    /// Run a camera frame through the classifier and fold the verdict into
    /// the alarm state.
    ///
    /// A cat while armed-home raises a full alarm; an all-clear verdict
    /// only clears the alarm when no sensor evidence contradicts it.
    pub fn process_image(
        &mut self,
        store: &mut impl StateStore,
        classifier: &mut impl CatClassifier,
        frame: &ImageFrame,
    ) {
        let cat = classifier.contains_cat(frame, self.config.confidence_threshold);
        self.last_cat_verdict = cat;
        info!(
            "IMAGE | {}x{} frame, cat={cat}",
            frame.width, frame.height
        );

        if cat {
            if store.arming_status() == ArmingStatus::ArmedHome {
                self.update_alarm_status(store, AlarmStatus::Alarm);
            }
        } else if !store.sensors().iter().any(|s| s.active) {
            self.update_alarm_status(store, AlarmStatus::NoAlarm);
        }
    }

    /// Verdict of the most recent `process_image` call (`false` before the
    /// first call).
    pub fn last_cat_verdict(&self) -> bool {
        self.last_cat_verdict
    }

    // ── Operator commands ─────────────────────────────────────

    /// Apply an operator arm/disarm command.
    ///
    /// Disarming always clears the alarm.  Arming takes a clean snapshot:
    /// every registered sensor is reset to inactive without re-running the
    /// trip rules.
    pub fn set_arming_status(&mut self, store: &mut impl StateStore, status: ArmingStatus) {
        if status == ArmingStatus::Disarmed {
            self.update_alarm_status(store, AlarmStatus::NoAlarm);
            self.update_arming_status(store, status);
        } else {
            self.update_arming_status(store, status);
            for sensor in store.sensors() {
                store.set_sensor_active(&sensor.id, false);
            }
        }
    }

    // ── Sensor registry ───────────────────────────────────────

    /// Register a sensor with the store.  No alarm-state side effects.
    pub fn add_sensor(&self, store: &mut impl StateStore, sensor: Sensor) {
        info!("SENSOR | registered {}", sensor.id);
        store.add_sensor(sensor);
    }

    /// Unregister a sensor.  Removing an unknown sensor is a no-op.
    pub fn remove_sensor(&self, store: &mut impl StateStore, sensor: &Sensor) {
        info!("SENSOR | unregistered {}", sensor.id);
        store.remove_sensor(&sensor.id);
    }

    // ── Listener registry ─────────────────────────────────────

    /// Register a callback for alarm-status changes.
    pub fn add_alarm_listener(
        &mut self,
        listener: impl FnMut(AlarmStatus) + 'static,
    ) -> ListenerId {
        self.alarm_listeners.add(listener)
    }

    /// Remove an alarm-status callback.  Unknown handles are a no-op.
    pub fn remove_alarm_listener(&mut self, id: ListenerId) {
        self.alarm_listeners.remove(id);
    }

    /// Register a callback for arming-status changes.
    pub fn add_arming_listener(
        &mut self,
        listener: impl FnMut(ArmingStatus) + 'static,
    ) -> ListenerId {
        self.arming_listeners.add(listener)
    }

    /// Remove an arming-status callback.  Unknown handles are a no-op.
    pub fn remove_arming_listener(&mut self, id: ListenerId) {
        self.arming_listeners.remove(id);
    }

    /// The live configuration.
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    // Both writers funnel through these helpers: a write that would not
    // change the stored value is skipped entirely, so listeners fire
    // exactly once per actual change.

    fn update_alarm_status(&mut self, store: &mut impl StateStore, next: AlarmStatus) {
        let current = store.alarm_status();
        if current == next {
            debug!("ALARM | already {current}, write skipped");
            return;
        }
        store.set_alarm_status(next);
        info!("ALARM | {current} -> {next}");
        self.alarm_listeners.notify_all(next);
    }

    fn update_arming_status(&mut self, store: &mut impl StateStore, next: ArmingStatus) {
        let current = store.arming_status();
        if current == next {
            debug!("ARMING | already {current}, write skipped");
            return;
        }
        store.set_arming_status(next);
        info!("ARMING | {current} -> {next}");
        self.arming_listeners.notify_all(next);
    }
}
