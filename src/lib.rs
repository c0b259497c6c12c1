//! Take Five - A keyboard-driven terminal Pomodoro timer
//!
//! This library provides a drift-free Pomodoro countdown with work, short
//! break, and long break phases, rendered in the terminal with desktop
//! notifications at each phase change.

pub mod config;
pub mod notify;
pub mod state;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use notify::Notifier;
pub use state::{Mode, TimerController};
pub use utils::signals::shutdown_signal;
