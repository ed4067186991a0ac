//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

/// Driver cadence and the amount of budget one tick consumes
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "print-job")]
#[command(about = "A single countdown job with start/pause/resume/stop control over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "5000")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Job duration in seconds
    #[arg(short, long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..))]
    pub duration: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Full job budget
    pub fn job_duration(&self) -> Duration {
        Duration::from_secs(self.duration)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
