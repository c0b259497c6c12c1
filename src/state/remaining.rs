//! Remaining-time triple derived from the countdown target

use chrono::{DateTime, Utc};

/// Time left in the current phase, decomposed for display.
///
/// `total == minutes * 60 + seconds` holds for every value produced here;
/// both views are derived from the same seconds count and are never stored
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub total: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Decompose a seconds count.
    pub fn from_seconds(total: i64) -> Self {
        Self {
            total,
            minutes: total / 60,
            seconds: total % 60,
        }
    }

    /// Time left until `end`, truncated to whole seconds.
    ///
    /// Truncation means a phase with less than one full second left already
    /// reads as zero, which is exactly when the tick handler completes it.
    pub fn until(end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_seconds((end - now).num_seconds())
    }

    /// `MM:SS` clock text; negative transients clamp to zero.
    pub fn clock(&self) -> String {
        let total = self.total.max(0);
        format!("{:02}:{:02}", total / 60, total % 60)
    }
}
