//! Main application state shared with the HTTP handlers

use std::{sync::Arc, time::Instant};

use super::Job;

/// Main application state holding the job and server metadata
pub struct AppState {
    /// The single countdown job
    pub job: Arc<dyn Job>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
}

impl AppState {
    /// Create a new AppState around an existing job
    pub fn new(job: Arc<dyn Job>, port: u16, host: String) -> Self {
        Self {
            job,
            start_time: Instant::now(),
            port,
            host,
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed().as_secs())
    }
}

fn format_uptime(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
