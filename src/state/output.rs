//! Output channel receiving the job's tick and completion markers

use chrono::{DateTime, SecondsFormat, Utc};

/// Sink for the lines a running job produces
pub trait JobOutput: Send + Sync {
    /// One tick of work; `step` is the number of seconds already consumed
    fn tick(&self, step: u64, at: DateTime<Utc>);

    /// The budget ran out
    fn completed(&self);
}

/// Prints markers to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    fn format_tick(step: u64, at: DateTime<Utc>) -> String {
        format!("{:02} {}", step, at.to_rfc3339_opts(SecondsFormat::Micros, true))
    }
}

impl JobOutput for ConsoleOutput {
    fn tick(&self, step: u64, at: DateTime<Utc>) {
        println!("{}", Self::format_tick(step, at));
    }

    fn completed(&self) {
        println!("=== DONE ===");
    }
}
