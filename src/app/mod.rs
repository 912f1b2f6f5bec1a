//! Application core — pure decision logic, zero I/O.
//!
//! This module contains the business rules for the security panel: the
//! arming/alarm state machine entry points and the status-listener
//! registries.  All interaction with the outside world happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without a real display, camera, or database.
//!
//! ```text
//!  StateStore  ──▶ ┌──────────────────────────┐ ──▶ alarm listeners
//!                  │       PanelService        │
//!  CatClassifier ─▶│  escalation · arming      │ ──▶ arming listeners
//!                  └──────────────────────────┘
//! ```

pub mod listeners;
pub mod ports;
pub mod service;
