//! HomeGuard — decision engine for a home security panel.
//!
//! Tracks whether the system is armed, whether sensors are tripped, and
//! whether the alarm should sound, folding in a secondary "cat in the
//! camera frame" signal that can raise or suppress the alarm.  The visual
//! control panel, the real persistence layer, and the real image
//! classifier are external collaborators behind the port traits in
//! [`app::ports`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod alarm;
pub mod app;
pub mod config;
pub mod error;
pub mod sensor;
