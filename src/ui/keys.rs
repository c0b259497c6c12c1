//! Keyboard input handling

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use crate::state::{Mode, TimerController};

/// What the event loop should do after a keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Apply one keypress to the timer.
///
/// Space and Enter share the start/stop toggle, the number row selects
/// modes directly, and repeat/release events are ignored so holding a key
/// does not double-toggle on terminals that report them.
pub fn handle_key(timer: &mut TimerController, key: KeyEvent, now: DateTime<Utc>) -> KeyOutcome {
    if key.kind != KeyEventKind::Press {
        return KeyOutcome::Continue;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyOutcome::Quit;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            timer.toggle(now);
            debug!(
                "Timer {}",
                if timer.running() { "started" } else { "stopped" }
            );
        }
        KeyCode::Char('1') => select(timer, Mode::Work),
        KeyCode::Char('2') => select(timer, Mode::ShortBreak),
        KeyCode::Char('3') => select(timer, Mode::LongBreak),
        KeyCode::Char('r') => {
            timer.reset();
            info!("Timer reset");
        }
        KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
        _ => {}
    }
    KeyOutcome::Continue
}

fn select(timer: &mut TimerController, mode: Mode) {
    timer.select_mode(mode);
    info!("Mode selected: {}", mode.label());
}
