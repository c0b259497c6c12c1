//! Countdown state and the operations that drive it

use chrono::{DateTime, Duration, Utc};

use super::{Durations, Mode, Remaining};

/// Reported by a tick that saw the current phase run out: which phase ended
/// and which one the controller switched (and chained) into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub finished: Mode,
    pub next: Mode,
}

/// The whole timer: current phase, configured interval lengths, session
/// counter, and the countdown target.
///
/// One instance is owned by the event loop and handed to rendering, key
/// handling, and the tick by reference; nothing here is shared or locked.
/// Every time-dependent operation takes `now` explicitly so behavior is
/// reproducible in tests without sleeping.
#[derive(Debug, Clone)]
pub struct TimerController {
    mode: Mode,
    durations: Durations,
    long_break_interval: u32,
    sessions_completed: u32,
    remaining: Remaining,
    /// Absolute target the countdown runs toward; `Some` is the running
    /// state. Remaining time is always recomputed from this fixed target,
    /// never decremented, so late or missed ticks cannot accumulate drift.
    end_time: Option<DateTime<Utc>>,
}

impl TimerController {
    /// A stopped timer in the Work phase with a full clock.
    pub fn new(durations: Durations, long_break_interval: u32) -> Self {
        Self {
            mode: Mode::Work,
            durations,
            long_break_interval,
            sessions_completed: 0,
            remaining: Remaining::from_seconds(durations.seconds_for(Mode::Work)),
            end_time: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn running(&self) -> bool {
        self.end_time.is_some()
    }

    pub fn sessions_completed(&self) -> u32 {
        self.sessions_completed
    }

    pub fn remaining(&self) -> Remaining {
        self.remaining
    }

    /// Progress through the current phase as an `(elapsed, total)` pair in
    /// seconds, for the progress indicator's value and max bound.
    pub fn progress(&self) -> (i64, i64) {
        let total = self.durations.seconds_for(self.mode);
        let elapsed = (total - self.remaining.total).clamp(0, total);
        (elapsed, total)
    }

    /// User-initiated mode selection: stops any active countdown, then
    /// switches the phase and resets its clock to the full duration.
    ///
    /// The session counter is left alone; abandoning a Work phase does not
    /// un-count it.
    pub fn select_mode(&mut self, mode: Mode) {
        self.stop();
        self.switch_mode(mode);
    }

    /// Arm the countdown toward `now` plus whatever is left on the clock.
    ///
    /// A no-op while already running, so a stray second start can neither
    /// double-count the session nor move the target. Starting a Work phase
    /// counts the session immediately, before the first tick.
    pub fn start(&mut self, now: DateTime<Utc>) {
        if self.end_time.is_some() {
            return;
        }
        if self.mode == Mode::Work {
            self.sessions_completed += 1;
        }
        self.end_time = Some(now + Duration::seconds(self.remaining.total.max(0)));
    }

    /// Disarm the countdown, freezing `remaining` at its last computed
    /// value. Safe to call when nothing is running.
    pub fn stop(&mut self) {
        self.end_time = None;
    }

    /// The primary control: stop when running, start when stopped.
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        if self.running() {
            self.stop();
        } else {
            self.start(now);
        }
    }

    /// One clock tick: recompute the remaining time from the fixed target.
    ///
    /// When the phase has run out, picks the next mode by the completion
    /// rule, switches into it, and immediately re-arms the countdown, so the
    /// cycle continues without user action. Returns what changed so the
    /// caller can log and announce it.
    pub fn on_tick(&mut self, now: DateTime<Utc>) -> Option<Completion> {
        let end = self.end_time?;
        self.remaining = Remaining::until(end, now);
        if self.remaining.total > 0 {
            return None;
        }

        self.stop();
        let finished = self.mode;
        let next = self.next_mode();
        self.switch_mode(next);
        self.start(now);
        Some(Completion { finished, next })
    }

    /// Back to the startup state: Work phase, full clock, zero sessions,
    /// stopped. The configured interval lengths survive.
    pub fn reset(&mut self) {
        *self = Self::new(self.durations, self.long_break_interval);
    }

    fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.remaining = Remaining::from_seconds(self.durations.seconds_for(mode));
    }

    /// Where a naturally expiring phase leads: every `long_break_interval`th
    /// Work session into a long break, any other Work session into a short
    /// one, and either break back to Work.
    fn next_mode(&self) -> Mode {
        match self.mode {
            Mode::Work => {
                if self.sessions_completed % self.long_break_interval == 0 {
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                }
            }
            Mode::ShortBreak | Mode::LongBreak => Mode::Work,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> TimerController {
        TimerController::new(Durations::default(), 4)
    }

    fn at(start: DateTime<Utc>, offset_secs: i64) -> DateTime<Utc> {
        start + Duration::seconds(offset_secs)
    }

    #[test]
    fn fresh_timer_is_a_stopped_work_phase_with_a_full_clock() {
        let timer = controller();
        assert_eq!(timer.mode(), Mode::Work);
        assert!(!timer.running());
        assert_eq!(timer.sessions_completed(), 0);
        assert_eq!(timer.remaining(), Remaining::from_seconds(1500));
        assert_eq!(timer.remaining().minutes, 25);
        assert_eq!(timer.remaining().seconds, 0);
    }

    #[test]
    fn selecting_any_mode_resets_the_clock_to_its_full_duration() {
        let mut timer = controller();
        for mode in Mode::ALL {
            timer.select_mode(mode);
            let minutes = Durations::default().minutes_for(mode) as i64;
            assert_eq!(timer.mode(), mode);
            assert_eq!(timer.remaining().total, minutes * 60);
            assert_eq!(timer.remaining().minutes, minutes);
            assert_eq!(timer.remaining().seconds, 0);
        }
    }

    #[test]
    fn starting_work_counts_the_session_before_any_tick() {
        let mut timer = controller();
        timer.start(Utc::now());
        assert_eq!(timer.sessions_completed(), 1);
        assert!(timer.running());
        assert_eq!(timer.remaining().total, 1500);
    }

    #[test]
    fn start_is_a_no_op_while_running() {
        let t0 = Utc::now();
        let mut timer = controller();
        timer.start(t0);
        timer.start(at(t0, 42));
        assert_eq!(timer.sessions_completed(), 1);

        // The target did not move: a tick at the first start's expiry completes.
        let completion = timer.on_tick(at(t0, 1500));
        assert!(completion.is_some());
    }

    #[test]
    fn starting_a_break_does_not_count_a_session() {
        let mut timer = controller();
        timer.select_mode(Mode::ShortBreak);
        timer.start(Utc::now());
        assert_eq!(timer.sessions_completed(), 0);
        assert!(timer.running());
    }

    #[test]
    fn restarting_a_stopped_work_phase_counts_again() {
        let t0 = Utc::now();
        let mut timer = controller();
        timer.start(t0);
        timer.stop();
        timer.start(at(t0, 10));
        assert_eq!(timer.sessions_completed(), 2);
    }

    #[test]
    fn stop_is_idempotent_and_preserves_remaining() {
        let t0 = Utc::now();
        let mut timer = controller();
        timer.start(t0);
        timer.on_tick(at(t0, 600));
        assert_eq!(timer.remaining().total, 900);

        timer.stop();
        timer.stop();
        assert!(!timer.running());
        assert_eq!(timer.remaining().total, 900);
    }

    #[test]
    fn ticks_while_stopped_change_nothing() {
        let t0 = Utc::now();
        let mut timer = controller();
        assert_eq!(timer.on_tick(t0), None);
        assert_eq!(timer.remaining().total, 1500);

        timer.start(t0);
        timer.on_tick(at(t0, 100));
        timer.stop();
        assert_eq!(timer.on_tick(at(t0, 700)), None);
        assert_eq!(timer.remaining().total, 1400);
    }

    #[test]
    fn toggle_flips_the_run_state() {
        let t0 = Utc::now();
        let mut timer = controller();
        timer.toggle(t0);
        assert!(timer.running());
        timer.toggle(at(t0, 5));
        assert!(!timer.running());
    }

    #[test]
    fn a_running_clock_counts_down_from_the_fixed_target() {
        let t0 = Utc::now();
        let mut timer = controller();
        timer.start(t0);

        timer.on_tick(at(t0, 617));
        let remaining = timer.remaining();
        assert_eq!(remaining.total, 883);
        assert_eq!(remaining.minutes, 14);
        assert_eq!(remaining.seconds, 43);
        assert_eq!(remaining.minutes * 60 + remaining.seconds, remaining.total);

        // A delayed tick lands on the same target rather than drifting.
        timer.on_tick(at(t0, 620));
        assert_eq!(timer.remaining().total, 880);
    }

    #[test]
    fn progress_tracks_elapsed_seconds_against_the_mode_total() {
        let t0 = Utc::now();
        let mut timer = controller();
        assert_eq!(timer.progress(), (0, 1500));

        timer.start(t0);
        timer.on_tick(at(t0, 600));
        assert_eq!(timer.progress(), (600, 1500));

        timer.select_mode(Mode::ShortBreak);
        assert_eq!(timer.progress(), (0, 300));
    }

    #[test]
    fn an_ordinary_work_session_is_followed_by_a_short_break() {
        let t0 = Utc::now();
        let mut timer = controller();
        timer.start(t0);

        let completion = timer.on_tick(at(t0, 1500)).expect("phase should expire");
        assert_eq!(completion.finished, Mode::Work);
        assert_eq!(completion.next, Mode::ShortBreak);
        assert_eq!(timer.mode(), Mode::ShortBreak);
        assert_eq!(timer.remaining().total, 300);
        assert!(timer.running(), "the break should start by itself");
        assert_eq!(timer.sessions_completed(), 1);
    }

    #[test]
    fn every_fourth_work_session_earns_the_long_break() {
        let t0 = Utc::now();
        let mut timer = controller();
        let mut now = t0;
        timer.start(now);

        for expected in [
            (1, Mode::ShortBreak),
            (2, Mode::ShortBreak),
            (3, Mode::ShortBreak),
            (4, Mode::LongBreak),
        ] {
            let (sessions, break_mode) = expected;

            now = now + Duration::seconds(timer.remaining().total);
            let completion = timer.on_tick(now).expect("work phase should expire");
            assert_eq!(timer.sessions_completed(), sessions);
            assert_eq!(completion.next, break_mode);

            now = now + Duration::seconds(timer.remaining().total);
            let completion = timer.on_tick(now).expect("break should expire");
            assert_eq!(completion.next, Mode::Work);
        }
    }

    #[test]
    fn the_fourth_session_scenario() {
        let t0 = Utc::now();
        let mut timer = controller();
        timer.sessions_completed = 3;

        timer.start(t0);
        assert_eq!(timer.sessions_completed(), 4);
        let completion = timer.on_tick(at(t0, 1500)).expect("phase should expire");
        assert_eq!(completion.next, Mode::LongBreak);
    }

    #[test]
    fn the_second_session_scenario() {
        let t0 = Utc::now();
        let mut timer = controller();
        timer.sessions_completed = 1;

        timer.start(t0);
        assert_eq!(timer.sessions_completed(), 2);
        let completion = timer.on_tick(at(t0, 1500)).expect("phase should expire");
        assert_eq!(completion.next, Mode::ShortBreak);
    }

    #[test]
    fn breaks_always_hand_back_to_work() {
        for break_mode in [Mode::ShortBreak, Mode::LongBreak] {
            let t0 = Utc::now();
            let mut timer = controller();
            timer.select_mode(break_mode);
            timer.start(t0);

            let total = timer.remaining().total;
            let completion = timer.on_tick(at(t0, total)).expect("break should expire");
            assert_eq!(completion.finished, break_mode);
            assert_eq!(completion.next, Mode::Work);
            assert_eq!(timer.mode(), Mode::Work);
            // Chaining into Work counts the new session.
            assert_eq!(timer.sessions_completed(), 1);
        }
    }

    #[test]
    fn a_phase_with_one_second_left_chains_on_the_next_tick() {
        let t0 = Utc::now();
        let mut timer = controller();
        timer.start(t0);
        timer.on_tick(at(t0, 1499));
        assert_eq!(timer.remaining().total, 1);

        let completion = timer.on_tick(at(t0, 1500)).expect("phase should expire");
        assert_eq!(completion.next, Mode::ShortBreak);
        assert_eq!(timer.remaining().total, 300);
        assert!(timer.running());
    }

    #[test]
    fn a_resumed_tail_end_of_work_still_completes() {
        let t0 = Utc::now();
        let mut timer = controller();
        timer.start(t0);
        timer.on_tick(at(t0, 1499));
        timer.stop();

        // Resume with one second on the clock; the next tick rolls over.
        let t1 = at(t0, 2000);
        timer.start(t1);
        let completion = timer.on_tick(at(t1, 1)).expect("phase should expire");
        assert_eq!(completion.finished, Mode::Work);
        assert_eq!(timer.remaining().total, 300);
        assert!(timer.running());
    }

    #[test]
    fn manually_abandoning_work_keeps_the_session_count() {
        let t0 = Utc::now();
        let mut timer = controller();
        timer.start(t0);
        timer.on_tick(at(t0, 60));

        timer.select_mode(Mode::ShortBreak);
        assert!(!timer.running(), "selection must stop the countdown");
        assert_eq!(timer.sessions_completed(), 1);
        assert_eq!(timer.remaining().total, 300);
    }

    #[test]
    fn reset_returns_to_initial_defaults_from_any_state() {
        let t0 = Utc::now();
        let mut timer = controller();
        timer.start(t0);
        timer.on_tick(at(t0, 1500));
        timer.on_tick(at(t0, 1800));
        assert!(timer.sessions_completed() > 0);

        timer.reset();
        assert_eq!(timer.mode(), Mode::Work);
        assert_eq!(timer.sessions_completed(), 0);
        assert!(!timer.running());
        assert_eq!(timer.remaining().total, 1500);
    }

    #[test]
    fn configured_durations_and_cadence_are_honored() {
        let durations = Durations {
            work: 50,
            short_break: 10,
            long_break: 30,
        };
        let t0 = Utc::now();
        let mut timer = TimerController::new(durations, 2);
        assert_eq!(timer.remaining().total, 3000);

        timer.start(t0);
        let completion = timer.on_tick(at(t0, 3000)).expect("phase should expire");
        assert_eq!(completion.next, Mode::ShortBreak);
        assert_eq!(timer.remaining().total, 600);

        // Second work session hits the two-session cadence.
        let completion = timer.on_tick(at(t0, 3600)).expect("break should expire");
        assert_eq!(completion.next, Mode::Work);
        let completion = timer.on_tick(at(t0, 6600)).expect("phase should expire");
        assert_eq!(completion.next, Mode::LongBreak);
        assert_eq!(timer.remaining().total, 1800);
    }
}
