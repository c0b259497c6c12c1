//! Utility functions module
//!
//! Process-level helpers shared across the application, currently the
//! signal stream that drives clean terminal restoration.

pub mod signals;

// Re-export main functions
pub use signals::shutdown_signal;
