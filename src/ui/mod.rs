//! Terminal lifecycle and the main event loop
//!
//! This module owns the terminal session: raw mode, the alternate screen,
//! and the loop that multiplexes clock ticks, keyboard input, and shutdown
//! signals over the single timer instance.

pub mod keys;
pub mod view;

use std::io::{self, Stdout};
use std::time::Duration;

use chrono::Utc;
use crossterm::event::{Event, EventStream};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::notify::Notifier;
use crate::state::TimerController;
use crate::utils::shutdown_signal;
use keys::KeyOutcome;

/// How often the countdown target is re-evaluated.
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Put the terminal into raw mode on the alternate screen, run the event
/// loop, and restore the terminal whichever way the loop ends.
pub async fn run(timer: TimerController, notifier: Notifier) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, timer, notifier).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut timer: TimerController,
    notifier: Notifier,
) -> anyhow::Result<()> {
    let mut ticker = tokio::time::interval(TICK_PERIOD);
    // A stalled terminal must not cause a burst of catch-up ticks; remaining
    // time is recomputed from the target, so skipped ticks lose nothing.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut events = EventStream::new();

    // Registered once for the whole loop; building the future inside
    // select! would install fresh signal handlers every second.
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    let mut title = String::new();

    loop {
        terminal.draw(|f| view::render(f, &timer))?;

        let next_title = view::title_text(&timer);
        if next_title != title {
            title = next_title;
            execute!(terminal.backend_mut(), SetTitle(&title))?;
        }

        tokio::select! {
            _ = ticker.tick() => {
                if let Some(completion) = timer.on_tick(Utc::now()) {
                    info!(
                        "{} finished, switching to {}",
                        completion.finished.label(),
                        completion.next.label()
                    );
                    notifier.announce(completion.next);
                }
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => {
                    if keys::handle_key(&mut timer, key, Utc::now()) == KeyOutcome::Quit {
                        info!("Quit requested");
                        return Ok(());
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!("Input stream error: {}", e);
                    return Err(e.into());
                }
                None => return Ok(()),
            },
            _ = &mut shutdown => {
                info!("Shutting down");
                return Ok(());
            }
        }
    }
}
