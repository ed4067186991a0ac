//! The job capability shared by the tick driver and the HTTP layer

use std::time::Duration;

use super::JobSnapshot;

/// Operations on a single countdown job.
///
/// Every call is atomic with respect to every other call on the same job.
/// Calls made in a state where they do not apply are silently ignored.
pub trait Job: Send + Sync {
    /// Configured full budget
    fn total(&self) -> Duration;

    /// Current state and remaining budget
    fn snapshot(&self) -> JobSnapshot;

    /// Idle -> Running with a full budget
    fn start(&self);

    /// Running -> Paused
    fn pause(&self);

    /// Paused -> Running
    fn resume(&self);

    /// Any state -> Idle with a full budget
    fn stop(&self);

    /// Consume one tick of budget while running. Called by the tick driver only.
    fn advance(&self);
}
