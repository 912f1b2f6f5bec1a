//! Driven adapters — concrete implementations of the port traits.
//!
//! Everything here sits outside the domain core: the in-memory and
//! file-backed state stores, the stand-in image classifier, and the
//! log-based status listeners.  A real deployment swaps these for a
//! database-backed store and a trained classifier without touching
//! [`crate::app`].

pub mod classifier;
pub mod log_listener;
pub mod memory;
pub mod prefs;
