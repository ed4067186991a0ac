//! Print Job - A single countdown job controlled over HTTP
//! 
//! This library provides the job state machine, the periodic driver that
//! advances it, and the HTTP surface used to start, pause, resume and stop it.

pub mod config;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, TICK_INTERVAL};
pub use state::{AppState, Job, JobSnapshot, JobState, JobTimer};
pub use api::create_router;
pub use tasks::tick_driver_task;
pub use utils::signals::shutdown_signal;
