//! Alarm and arming state machine.
//!
//! The panel's escalation logic is two fixed lookup tables, expressed as
//! pure functions over [`AlarmStatus`]:
//!
//! ```text
//!  trip (armed):      NO_ALARM ──▶ PENDING ──▶ ALARM ──▶ (saturates)
//!  clear / restore:   ALARM ──▶ PENDING ──▶ NO_ALARM ──▶ (saturates)
//! ```
//!
//! Each function returns `Some(next)` to request a status write, or `None`
//! when the table says "unchanged" — the caller then performs no write and
//! no listener notification.  Gating (a disarmed panel drops trip events)
//! is the caller's job; the tables themselves are unconditional.

use core::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Status enums
// ---------------------------------------------------------------------------

/// Operator-selected mode governing whether sensor trips may raise alarms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmingStatus {
    /// Sensor trips are ignored; the alarm cannot escalate.
    #[default]
    Disarmed,
    /// Armed with occupants present.
    ArmedHome,
    /// Armed with the home empty.
    ArmedAway,
}

/// Current escalation level of the alarm, ordered by severity.
///
/// The derived `Ord` follows declaration order: `NoAlarm < PendingAlarm < Alarm`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AlarmStatus {
    /// Quiescent — nothing tripped.
    #[default]
    NoAlarm,
    /// One trip recorded; a second confirms the alarm.
    PendingAlarm,
    /// Alarm sounding.
    Alarm,
}

impl fmt::Display for ArmingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disarmed => write!(f, "disarmed"),
            Self::ArmedHome => write!(f, "armed-home"),
            Self::ArmedAway => write!(f, "armed-away"),
        }
    }
}

impl fmt::Display for AlarmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAlarm => write!(f, "no-alarm"),
            Self::PendingAlarm => write!(f, "pending-alarm"),
            Self::Alarm => write!(f, "alarm"),
        }
    }
}

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// Activation-escalation rule: the next alarm status after a sensor trip.
///
/// Saturates at [`AlarmStatus::Alarm`] — a trip while already alarming is
/// meaningful input but produces no further change.
pub fn escalate(current: AlarmStatus) -> Option<AlarmStatus> {
    match current {
        AlarmStatus::NoAlarm => Some(AlarmStatus::PendingAlarm),
        AlarmStatus::PendingAlarm => Some(AlarmStatus::Alarm),
        AlarmStatus::Alarm => None,
    }
}

/// Deactivation-de-escalation rule: the next alarm status after an active
/// sensor is restored.
///
/// Saturates at [`AlarmStatus::NoAlarm`].
pub fn de_escalate(current: AlarmStatus) -> Option<AlarmStatus> {
    match current {
        AlarmStatus::Alarm => Some(AlarmStatus::PendingAlarm),
        AlarmStatus::PendingAlarm => Some(AlarmStatus::NoAlarm),
        AlarmStatus::NoAlarm => None,
    }
}
