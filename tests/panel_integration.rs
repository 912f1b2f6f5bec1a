//! Integration tests: PanelService → StateStore → listeners.
//!
//! Exercises the engine through its public surface with a recording store,
//! the shipped adapters, and listener channels wired up the way a real
//! control panel would.

use std::cell::RefCell;
use std::rc::Rc;

use homeguard::adapters::classifier::RandomGuessClassifier;
use homeguard::adapters::log_listener::{alarm_log_listener, arming_log_listener};
use homeguard::adapters::memory::InMemoryStateStore;
use homeguard::adapters::prefs::JsonFileStore;
use homeguard::alarm::{AlarmStatus, ArmingStatus};
use homeguard::app::ports::{CatClassifier, ImageFrame, StateStore};
use homeguard::app::service::PanelService;
use homeguard::config::PanelConfig;
use homeguard::sensor::{Sensor, SensorId, SensorKind};

// ── Recording store ───────────────────────────────────────────

/// Wraps the in-memory store and records every alarm-status write, so
/// tests can assert that unchanged values are never re-written.
struct RecordingStore {
    inner: InMemoryStateStore,
    alarm_writes: Vec<AlarmStatus>,
    arming_writes: Vec<ArmingStatus>,
}

impl RecordingStore {
    fn new() -> Self {
        Self {
            inner: InMemoryStateStore::new(),
            alarm_writes: Vec::new(),
            arming_writes: Vec::new(),
        }
    }
}

impl StateStore for RecordingStore {
    fn arming_status(&self) -> ArmingStatus {
        self.inner.arming_status()
    }

    fn set_arming_status(&mut self, status: ArmingStatus) {
        self.arming_writes.push(status);
        self.inner.set_arming_status(status);
    }

    fn alarm_status(&self) -> AlarmStatus {
        self.inner.alarm_status()
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) {
        self.alarm_writes.push(status);
        self.inner.set_alarm_status(status);
    }

    fn sensors(&self) -> Vec<Sensor> {
        self.inner.sensors()
    }

    fn add_sensor(&mut self, sensor: Sensor) {
        self.inner.add_sensor(sensor);
    }

    fn remove_sensor(&mut self, id: &SensorId) {
        self.inner.remove_sensor(id);
    }

    fn set_sensor_active(&mut self, id: &SensorId, active: bool) {
        self.inner.set_sensor_active(id, active);
    }
}

/// Classifier with a scripted verdict sequence.
struct ScriptedClassifier {
    verdicts: Vec<bool>,
    next: usize,
}

impl ScriptedClassifier {
    fn new(verdicts: &[bool]) -> Self {
        Self {
            verdicts: verdicts.to_vec(),
            next: 0,
        }
    }
}

impl CatClassifier for ScriptedClassifier {
    fn contains_cat(&mut self, _frame: &ImageFrame, _threshold: f32) -> bool {
        let v = self.verdicts[self.next % self.verdicts.len()];
        self.next += 1;
        v
    }
}

// ── Scenarios ─────────────────────────────────────────────────

#[test]
fn evening_arm_trip_and_disarm() {
    let mut svc = PanelService::new(PanelConfig::default());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    svc.add_alarm_listener(move |s| sink.borrow_mut().push(s));
    svc.add_alarm_listener(alarm_log_listener());
    svc.add_arming_listener(arming_log_listener());

    let mut store = RecordingStore::new();
    let mut door = Sensor::new("front door", SensorKind::Door);
    let mut motion = Sensor::new("hallway", SensorKind::Motion);
    svc.add_sensor(&mut store, door.clone());
    svc.add_sensor(&mut store, motion.clone());

    // Operator arms for the night.
    svc.set_arming_status(&mut store, ArmingStatus::ArmedAway);
    assert_eq!(store.arming_status(), ArmingStatus::ArmedAway);

    // Door trips, then motion confirms.
    svc.set_sensor_active(&mut store, &mut door, true);
    svc.set_sensor_active(&mut store, &mut motion, true);
    assert_eq!(store.alarm_status(), AlarmStatus::Alarm);

    // Operator disarms; the alarm clears in a single write.
    svc.set_arming_status(&mut store, ArmingStatus::Disarmed);
    assert_eq!(store.alarm_status(), AlarmStatus::NoAlarm);

    assert_eq!(
        *seen.borrow(),
        vec![
            AlarmStatus::PendingAlarm,
            AlarmStatus::Alarm,
            AlarmStatus::NoAlarm
        ]
    );
    // Every recorded write changed the stored value: no redundant writes.
    assert_eq!(
        store.alarm_writes,
        vec![
            AlarmStatus::PendingAlarm,
            AlarmStatus::Alarm,
            AlarmStatus::NoAlarm
        ]
    );
    assert_eq!(
        store.arming_writes,
        vec![ArmingStatus::ArmedAway, ArmingStatus::Disarmed]
    );
}

#[test]
fn rearming_takes_a_clean_snapshot() {
    let mut svc = PanelService::new(PanelConfig::default());
    let mut store = RecordingStore::new();
    let mut window = Sensor::new("kitchen", SensorKind::Window);
    svc.add_sensor(&mut store, window.clone());

    svc.set_arming_status(&mut store, ArmingStatus::ArmedHome);
    svc.set_sensor_active(&mut store, &mut window, true);
    assert_eq!(store.alarm_status(), AlarmStatus::PendingAlarm);

    // Disarm, then re-arm: the tripped sensor is reset without running
    // the escalation rules again.
    svc.set_arming_status(&mut store, ArmingStatus::Disarmed);
    svc.set_arming_status(&mut store, ArmingStatus::ArmedAway);

    assert!(store.sensors().iter().all(|s| !s.active));
    assert_eq!(store.alarm_status(), AlarmStatus::NoAlarm);
}

#[test]
fn scripted_camera_sweep_drives_the_alarm() {
    let mut svc = PanelService::new(PanelConfig::default());
    let mut store = RecordingStore::new();
    let mut classifier = ScriptedClassifier::new(&[true, false]);
    let frame = ImageFrame::blank(640, 480);

    svc.set_arming_status(&mut store, ArmingStatus::ArmedHome);

    // Cat sighted while armed-home: straight to full alarm.
    svc.process_image(&mut store, &mut classifier, &frame);
    assert!(svc.last_cat_verdict());
    assert_eq!(store.alarm_status(), AlarmStatus::Alarm);

    // Next frame is clear and no sensors are tripped: all quiet again.
    svc.process_image(&mut store, &mut classifier, &frame);
    assert!(!svc.last_cat_verdict());
    assert_eq!(store.alarm_status(), AlarmStatus::NoAlarm);
}

#[test]
fn random_classifier_satisfies_the_port_contract() {
    let mut svc = PanelService::new(PanelConfig::default());
    let mut store = InMemoryStateStore::new();
    let mut classifier = RandomGuessClassifier::with_seed(1234);
    let frame = ImageFrame::blank(64, 64);

    // Disarmed panel: whatever the coin says, a cat can never raise the
    // alarm, and an all-clear with no sensors keeps it at NoAlarm.
    for _ in 0..32 {
        svc.process_image(&mut store, &mut classifier, &frame);
        assert_eq!(store.alarm_status(), AlarmStatus::NoAlarm);
    }
}

#[test]
fn panel_state_survives_a_restart() {
    let mut path = std::env::temp_dir();
    path.push(format!("homeguard-restart-{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);

    {
        let mut svc = PanelService::new(PanelConfig::default());
        let mut store = JsonFileStore::open(&path).unwrap();
        let mut door = Sensor::new("back door", SensorKind::Door);
        svc.add_sensor(&mut store, door.clone());
        svc.set_arming_status(&mut store, ArmingStatus::ArmedHome);
        svc.set_sensor_active(&mut store, &mut door, true);
        assert_eq!(store.alarm_status(), AlarmStatus::PendingAlarm);
    }

    // "Reboot": a fresh engine picks up where the store left off.
    let mut svc = PanelService::new(PanelConfig::default());
    let mut store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.arming_status(), ArmingStatus::ArmedHome);
    assert_eq!(store.alarm_status(), AlarmStatus::PendingAlarm);

    let mut door = store.sensors().remove(0);
    assert!(door.active);
    svc.set_sensor_active(&mut store, &mut door, false);
    assert_eq!(store.alarm_status(), AlarmStatus::NoAlarm);

    let _ = std::fs::remove_file(&path);
}
