//! Periodic driver that advances the job once per tick

use std::{sync::Arc, time::Duration};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::state::Job;

/// Background task that calls `advance` on the job every `period` until cancelled.
///
/// The first tick fires one full period after the task starts. A late tick
/// pushes later ticks back rather than firing a burst to catch up.
/// A zero `period` is rejected: the task logs a warning and returns without ticking.
pub async fn tick_driver_task(job: Arc<dyn Job>, period: Duration, cancel: CancellationToken) {
    if period.is_zero() {
        warn!("Tick driver not started: period must be non-zero");
        return;
    }

    info!(?period, "Tick driver started");

    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                debug!("Tick driver received cancellation");
                break;
            }
            _ = ticker.tick() => {
                job.advance();
            }
        }
    }

    info!("Tick driver stopped");
}
