//! Countdown job state machine

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};
use tracing::{debug, info, warn};

use crate::{
    config::TICK_INTERVAL,
    utils::{Clock, SystemClock},
};
use super::{ConsoleOutput, Job, JobOutput, JobSnapshot, JobState};

/// Fields guarded together so every transition is all-or-nothing
#[derive(Debug, Clone, Copy)]
struct TimerInner {
    state: JobState,
    remaining: Duration,
}

/// Countdown job with a fixed budget consumed one tick at a time while running
pub struct JobTimer {
    total: Duration,
    inner: Mutex<TimerInner>,
    clock: Arc<dyn Clock>,
    output: Arc<dyn JobOutput>,
}

impl JobTimer {
    /// Create an idle job with a full budget, printing to stdout
    pub fn new(total: Duration) -> Self {
        Self::with_parts(total, Arc::new(SystemClock), Arc::new(ConsoleOutput))
    }

    /// Create an idle job with an explicit clock and output channel
    pub fn with_parts(total: Duration, clock: Arc<dyn Clock>, output: Arc<dyn JobOutput>) -> Self {
        Self {
            total,
            inner: Mutex::new(TimerInner {
                state: JobState::Idle,
                remaining: total,
            }),
            clock,
            output,
        }
    }

    fn lock(&self) -> MutexGuard<'_, TimerInner> {
        // Every critical section writes both fields together, so a poisoned
        // guard still holds a consistent pair.
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("Job timer lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Apply `apply` only when the job is in `from`; otherwise log and ignore
    fn transition<F>(&self, op: &str, from: JobState, apply: F)
    where
        F: FnOnce(&mut TimerInner),
    {
        let mut inner = self.lock();
        if inner.state != from {
            debug!(op, state = %inner.state, "Ignoring transition");
            return;
        }
        apply(&mut *inner);
        info!(op, state = %inner.state, remaining_secs = inner.remaining.as_secs(), "Job transition");
    }
}

impl Job for JobTimer {
    fn total(&self) -> Duration {
        self.total
    }

    fn snapshot(&self) -> JobSnapshot {
        let inner = self.lock();
        JobSnapshot {
            state: inner.state,
            remaining: inner.remaining,
        }
    }

    fn start(&self) {
        let total = self.total;
        self.transition("start", JobState::Idle, |inner| {
            inner.remaining = total;
            inner.state = JobState::Running;
        });
    }

    fn pause(&self) {
        self.transition("pause", JobState::Running, |inner| {
            inner.state = JobState::Paused;
        });
    }

    fn resume(&self) {
        self.transition("resume", JobState::Paused, |inner| {
            inner.state = JobState::Running;
        });
    }

    fn stop(&self) {
        let mut inner = self.lock();
        inner.state = JobState::Idle;
        inner.remaining = self.total;
        info!(op = "stop", remaining_secs = self.total.as_secs(), "Job reset to full budget");
    }

    fn advance(&self) {
        let mut inner = self.lock();
        if inner.state != JobState::Running {
            return;
        }

        let step = self.total.saturating_sub(inner.remaining).as_secs();
        self.output.tick(step, self.clock.now());

        if inner.remaining.is_zero() {
            return;
        }

        inner.remaining = inner.remaining.saturating_sub(TICK_INTERVAL);
        if inner.remaining.is_zero() {
            inner.state = JobState::Idle;
            self.output.completed();
            info!(steps = step + 1, "Job completed");
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    /// Clock that always reports the same instant
    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[derive(Default)]
    struct RecordingOutput {
        lines: Mutex<Vec<String>>,
    }

    impl RecordingOutput {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl JobOutput for RecordingOutput {
        fn tick(&self, step: u64, _at: DateTime<Utc>) {
            self.lines.lock().unwrap().push(format!("tick {}", step));
        }

        fn completed(&self) {
            self.lines.lock().unwrap().push("done".to_string());
        }
    }

    fn recording_timer(total_secs: u64) -> (JobTimer, Arc<RecordingOutput>) {
        let output = Arc::new(RecordingOutput::default());
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let timer = JobTimer::with_parts(Duration::from_secs(total_secs), Arc::new(clock), output.clone());
        (timer, output)
    }

    fn assert_snapshot(timer: &JobTimer, state: JobState, remaining_secs: u64) {
        let snapshot = timer.snapshot();
        assert_eq!(snapshot.state, state);
        assert_eq!(snapshot.remaining, Duration::from_secs(remaining_secs));
    }

    #[test]
    fn new_timer_is_idle_with_full_budget() {
        let (timer, _) = recording_timer(30);
        assert_snapshot(&timer, JobState::Idle, 30);
        assert_eq!(timer.total(), Duration::from_secs(30));
    }

    #[test]
    fn pause_resume_and_completion_follow_the_budget() {
        let (timer, _) = recording_timer(30);

        timer.start();
        assert_snapshot(&timer, JobState::Running, 30);
        timer.advance();
        assert_snapshot(&timer, JobState::Running, 29);
        timer.pause();
        assert_snapshot(&timer, JobState::Paused, 29);
        timer.advance();
        assert_snapshot(&timer, JobState::Paused, 29);
        timer.resume();
        assert_snapshot(&timer, JobState::Running, 29);

        for _ in 0..29 {
            timer.advance();
        }
        assert_snapshot(&timer, JobState::Idle, 0);

        timer.start();
        assert_snapshot(&timer, JobState::Running, 30);
    }

    #[test]
    fn stop_discards_remaining_budget() {
        let (timer, _) = recording_timer(30);
        timer.start();
        for _ in 0..18 {
            timer.advance();
        }
        assert_snapshot(&timer, JobState::Running, 12);

        timer.stop();
        assert_snapshot(&timer, JobState::Idle, 30);
    }

    #[test]
    fn stop_resets_from_every_state() {
        let (timer, _) = recording_timer(5);
        timer.stop();
        assert_snapshot(&timer, JobState::Idle, 5);

        timer.start();
        timer.advance();
        timer.pause();
        timer.stop();
        assert_snapshot(&timer, JobState::Idle, 5);
    }

    #[test]
    fn start_does_not_reset_an_in_flight_budget() {
        let (timer, _) = recording_timer(10);
        timer.start();
        timer.advance();
        timer.advance();
        timer.start();
        assert_snapshot(&timer, JobState::Running, 8);

        timer.pause();
        timer.start();
        assert_snapshot(&timer, JobState::Paused, 8);
    }

    #[test]
    fn guarded_transitions_are_noops_in_other_states() {
        let (timer, _) = recording_timer(10);
        timer.pause();
        timer.resume();
        assert_snapshot(&timer, JobState::Idle, 10);

        timer.start();
        timer.resume();
        assert_snapshot(&timer, JobState::Running, 10);

        timer.pause();
        timer.pause();
        assert_snapshot(&timer, JobState::Paused, 10);
    }

    #[test]
    fn advance_outside_running_changes_nothing() {
        let (timer, output) = recording_timer(3);
        timer.advance();
        assert_snapshot(&timer, JobState::Idle, 3);

        timer.start();
        timer.pause();
        timer.advance();
        assert_snapshot(&timer, JobState::Paused, 3);
        assert!(output.lines().is_empty());
    }

    #[test]
    fn completion_emits_ticks_then_a_single_done_marker() {
        let (timer, output) = recording_timer(3);
        timer.start();
        for _ in 0..6 {
            timer.advance();
        }

        assert_snapshot(&timer, JobState::Idle, 0);
        assert_eq!(output.lines(), vec!["tick 0", "tick 1", "tick 2", "done"]);
    }

    #[test]
    fn running_with_empty_budget_never_underflows() {
        let (timer, output) = recording_timer(0);
        timer.start();
        timer.advance();
        timer.advance();

        assert_snapshot(&timer, JobState::Running, 0);
        assert_eq!(output.lines(), vec!["tick 0", "tick 0"]);
    }

    #[test]
    fn budget_stays_within_bounds_for_mixed_sequences() {
        let (timer, _) = recording_timer(4);
        let total = timer.total();

        // Deterministic walk over all operations
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..2_000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;

            let before = timer.snapshot();
            match seed % 5 {
                0 => {
                    timer.start();
                    if before.state == JobState::Idle {
                        assert_snapshot(&timer, JobState::Running, 4);
                    } else {
                        assert_eq!(timer.snapshot(), before);
                    }
                }
                1 => {
                    timer.pause();
                    let after = timer.snapshot();
                    assert_eq!(after.remaining, before.remaining);
                    if before.state == JobState::Running {
                        assert_eq!(after.state, JobState::Paused);
                    } else {
                        assert_eq!(after, before);
                    }
                }
                2 => {
                    timer.resume();
                    let after = timer.snapshot();
                    assert_eq!(after.remaining, before.remaining);
                    if before.state == JobState::Paused {
                        assert_eq!(after.state, JobState::Running);
                    } else {
                        assert_eq!(after, before);
                    }
                }
                3 if seed % 7 == 0 => {
                    timer.stop();
                    assert_snapshot(&timer, JobState::Idle, 4);
                }
                _ => {
                    timer.advance();
                    if before.state != JobState::Running {
                        assert_eq!(timer.snapshot(), before);
                    }
                }
            }

            let after = timer.snapshot();
            assert!(after.remaining <= total);
        }
    }
}
