//! Job state and snapshot structures

use std::{fmt, time::Duration};

use serde::Serialize;

/// Lifecycle state of the countdown job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum JobState {
    /// Not counting; initial state and the state after stop or completion
    #[default]
    Idle,
    /// Counting down on every driver tick
    Running,
    /// Budget frozen until resumed
    Paused,
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobState::Idle => "Idle",
            JobState::Running => "Running",
            JobState::Paused => "Paused",
        };
        f.write_str(name)
    }
}

/// Consistent copy of the job's state and remaining budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSnapshot {
    pub state: JobState,
    pub remaining: Duration,
}

impl JobSnapshot {
    /// Remaining budget rounded up to whole seconds
    pub fn remaining_seconds(&self) -> u64 {
        let secs = self.remaining.as_secs();
        if self.remaining.subsec_nanos() > 0 {
            secs.saturating_add(1)
        } else {
            secs
        }
    }
}
