//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::Durations;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "take-five")]
#[command(about = "A keyboard-driven terminal Pomodoro timer")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Work phase duration in minutes
    #[arg(short, long, default_value = "25", value_parser = clap::value_parser!(u64).range(1..=600))]
    pub work: u64,

    /// Short break duration in minutes
    #[arg(short, long, default_value = "5", value_parser = clap::value_parser!(u64).range(1..=600))]
    pub short_break: u64,

    /// Long break duration in minutes
    #[arg(short, long, default_value = "15", value_parser = clap::value_parser!(u64).range(1..=600))]
    pub long_break: u64,

    /// Number of work sessions between long breaks
    #[arg(short = 'i', long, default_value = "4", value_parser = clap::value_parser!(u32).range(1..=100))]
    pub long_break_interval: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the configured phase lengths as a durations table
    pub fn durations(&self) -> Durations {
        Durations {
            work: self.work,
            short_break: self.short_break,
            long_break: self.long_break,
        }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
