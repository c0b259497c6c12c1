//! Terminal rendering for the timer screen

use ratatui::{prelude::*, widgets::*};

use crate::state::{Mode, TimerController};

/// Draw the whole screen: mode tabs, phase label, clock, primary control,
/// progress gauge, session counter, and key hints.
pub fn render(f: &mut Frame, timer: &TimerController) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_mode_tabs(f, timer, chunks[0]);
    render_timer_body(f, timer, chunks[1]);
    render_hints(f, chunks[2]);
}

/// Terminal window title: the live clock plus the current phase's
/// catchphrase, so the countdown stays visible while the window is hidden.
pub fn title_text(timer: &TimerController) -> String {
    format!(
        "{} - {}",
        timer.remaining().clock(),
        timer.mode().title_phrase()
    )
}

fn render_mode_tabs(f: &mut Frame, timer: &TimerController, area: Rect) {
    let selected = Mode::ALL
        .iter()
        .position(|m| *m == timer.mode())
        .unwrap_or(0);
    let tabs = Tabs::new(Mode::ALL.map(|m| m.label()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 🍅 take-five "),
        )
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(mode_color(timer.mode()))
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_timer_body(f: &mut Frame, timer: &TimerController, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);
    let color = mode_color(timer.mode());

    let label = Paragraph::new(timer.mode().label())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    f.render_widget(label, rows[1]);

    let clock = Paragraph::new(timer.remaining().clock())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(clock, rows[2]);

    let control = Paragraph::new(format!("[ {} ]", affordance(timer)))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(control, rows[3]);

    let (elapsed, total) = timer.progress();
    let ratio = if total > 0 {
        (elapsed as f64 / total as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(ratio);
    f.render_widget(gauge, centered(rows[5], 60));

    let sessions = Paragraph::new(format!(
        "sessions completed: {}",
        timer.sessions_completed()
    ))
    .style(Style::default().add_modifier(Modifier::DIM))
    .alignment(Alignment::Center);
    f.render_widget(sessions, rows[6]);
}

fn render_hints(f: &mut Frame, area: Rect) {
    let hints = Paragraph::new("space/enter: start/stop | 1/2/3: mode | r: reset | q: quit")
        .style(Style::default().add_modifier(Modifier::DIM))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(hints, area);
}

/// Label for the primary control, always the opposite of the run state.
fn affordance(timer: &TimerController) -> &'static str {
    if timer.running() {
        "stop"
    } else {
        "start"
    }
}

/// Shrink `area` to the middle `percent` of its width.
fn centered(area: Rect, percent: u16) -> Rect {
    let side = (100 - percent) / 2;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(side),
            Constraint::Percentage(percent),
            Constraint::Percentage(side),
        ])
        .split(area)[1]
}

fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Work => Color::LightRed,
        Mode::ShortBreak => Color::LightGreen,
        Mode::LongBreak => Color::LightBlue,
    }
}
