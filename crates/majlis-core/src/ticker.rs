//! Minute ticker for the live clock.
//!
//! A [`ClockTicker`] owns a background task that reads the time source once
//! per period. The task is aborted when the ticker is dropped, so a view that
//! keeps the ticker inside its own scoped future gets no updates after it
//! unmounts.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::clock::TimeSource;

pub struct ClockTicker {
    period: Duration,
    readings: mpsc::Receiver<DateTime<Local>>,
    task: JoinHandle<()>,
}

impl ClockTicker {
    /// Spawn the ticker. The first reading arrives one `period` after start.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(clock: Arc<dyn TimeSource>, period: Duration) -> Self {
        let (tx, readings) = mpsc::channel(1);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            // Late ticks shift the schedule instead of bursting to catch up
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                let now = clock.now();
                tracing::debug!("Clock tick at {}", now);
                if tx.send(now).await.is_err() {
                    break;
                }
            }
        });

        tracing::debug!(period_secs = period.as_secs(), "Clock ticker started");
        Self {
            period,
            readings,
            task,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Wait for the next reading. `None` once the task has ended.
    pub async fn next(&mut self) -> Option<DateTime<Local>> {
        self.readings.recv().await
    }

    /// Stop ticking. Equivalent to dropping the ticker.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.readings.close();
        self.task.abort();
        tracing::debug!("Clock ticker stopped");
    }
}
