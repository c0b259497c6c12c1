//! Timer state module
//!
//! This module contains the countdown state machine and its supporting types.

pub mod controller;
pub mod mode;
pub mod remaining;

// Re-export main types
pub use controller::{Completion, TimerController};
pub use mode::{Durations, Mode};
pub use remaining::Remaining;
