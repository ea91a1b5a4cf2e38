use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::time::{self, MissedTickBehavior};
use tokio_stream::{StreamExt, wrappers::IntervalStream};

/// A unit of work the `Poller` schedules.
#[async_trait]
pub trait Task {
    async fn run_once(&mut self) -> Result<()>;
}

/// Repeats a task at a fixed interval until the task fails, then returns
/// that error. The first run fires immediately; a run that overruns the
/// interval pushes the next tick out instead of bursting to catch up.
/// Waits go through the tokio clock, so tests can pause and advance time.
pub struct Poller {
    interval: Duration,
}

impl Poller {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub async fn run<T: Task>(&self, task: &mut T) -> Result<()> {
        let mut interval = time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut ticks = IntervalStream::new(interval);

        while ticks.next().await.is_some() {
            task.run_once().await?;
        }

        Ok(())
    }
}
