//! Log-based status listeners.
//!
//! Ready-made listeners that write every status change to the log facade.
//! Register them on the matching [`PanelService`] channel; a display or
//! siren adapter would register its own callbacks the same way.
//!
//! [`PanelService`]: crate::app::service::PanelService

use log::info;

use crate::alarm::{AlarmStatus, ArmingStatus};

/// Listener that logs alarm-status changes.
pub fn alarm_log_listener() -> impl FnMut(AlarmStatus) {
    |status| info!("STATUS | alarm -> {status}")
}

/// Listener that logs arming-status changes.
pub fn arming_log_listener() -> impl FnMut(ArmingStatus) {
    |status| info!("STATUS | arming -> {status}")
}
