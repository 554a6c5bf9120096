//! Shared utilities for the playback engine.
//!
//! Helpers for trajectory extraction, chart preparation for the detail
//! window, and progress-bar bookkeeping.

pub mod chart;
pub mod progress;
pub mod trajectory;
