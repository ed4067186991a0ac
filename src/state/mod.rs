//! State management module
//! 
//! This module contains the countdown job, its state machine and the
//! capability surface other components depend on.

pub mod app_state;
pub mod job;
pub mod job_state;
pub mod job_timer;
pub mod output;

// Re-export main types
pub use app_state::AppState;
pub use job::Job;
pub use job_state::{JobSnapshot, JobState};
pub use job_timer::JobTimer;
pub use output::{ConsoleOutput, JobOutput};
