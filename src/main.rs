//! Take Five - A keyboard-driven terminal Pomodoro timer
//!
//! This is the main entry point for the take-five application.

use tracing::info;

use take_five::{
    config::Config,
    notify::Notifier,
    state::TimerController,
    ui,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level; stdout belongs to the
    // timer screen, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(format!("take_five={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting take-five v0.1.0");
    info!("Intervals: work={}min, short break={}min, long break={}min, long break every {} sessions",
          config.work, config.short_break, config.long_break, config.long_break_interval);
    info!("Keys: space/enter start/stop, 1/2/3 select mode, r reset, q quit");

    let timer = TimerController::new(config.durations(), config.long_break_interval);
    let notifier = Notifier::start_probe();

    ui::run(timer, notifier).await?;

    info!("Shutdown complete");
    Ok(())
}
