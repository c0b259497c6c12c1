//! Pomodoro modes and the fixed text surfaces attached to them

/// The three phases the timer cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Work,
    ShortBreak,
    LongBreak,
}

impl Mode {
    /// All modes, in display order.
    pub const ALL: [Mode; 3] = [Mode::Work, Mode::ShortBreak, Mode::LongBreak];

    /// Human-readable label for the mode selector and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Work => "Work",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }

    /// Context phrase appended to the window title.
    pub fn title_phrase(&self) -> &'static str {
        match self {
            Mode::Work => "Get back to work",
            Mode::ShortBreak | Mode::LongBreak => "Take a break !",
        }
    }

    /// Notification text announcing that this mode has begun.
    pub fn notification_text(&self) -> &'static str {
        match self {
            Mode::Work => "Get back to work!",
            Mode::ShortBreak | Mode::LongBreak => "Take a break!",
        }
    }
}

/// Interval lengths in minutes, keyed by mode.
///
/// Set once at startup from the command line and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub work: u64,
    pub short_break: u64,
    pub long_break: u64,
}

impl Durations {
    /// Length of the given mode in minutes.
    pub fn minutes_for(&self, mode: Mode) -> u64 {
        match mode {
            Mode::Work => self.work,
            Mode::ShortBreak => self.short_break,
            Mode::LongBreak => self.long_break,
        }
    }

    /// Length of the given mode in seconds.
    pub fn seconds_for(&self, mode: Mode) -> i64 {
        (self.minutes_for(mode) * 60) as i64
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work: 25,
            short_break: 5,
            long_break: 15,
        }
    }
}
