//! Fixed-interval, non-overlapping job scheduling.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// A unit of work run by the [`Scheduler`].
#[async_trait]
pub trait Job: Send {
    async fn run(&mut self);
}

/// Runs a job once immediately, then once per interval.
///
/// The job is awaited inside the loop, so two runs never overlap; ticks
/// missed while a run is in progress are skipped rather than queued.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    interval: Duration,
}

impl Scheduler {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Run forever.
    pub async fn run<J: Job>(&self, job: &mut J) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            job.run().await;
        }
    }

    /// Run exactly `runs` times, then return.
    pub async fn run_times<J: Job>(&self, job: &mut J, runs: u64) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        for run in 1..=runs {
            ticker.tick().await;
            debug!(run, "Scheduled run");
            job.run().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    struct Recorder {
        starts: Vec<Instant>,
        work: Duration,
    }

    #[async_trait]
    impl Job for Recorder {
        async fn run(&mut self) {
            self.starts.push(Instant::now());
            tokio::time::sleep(self.work).await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_run_immediate_then_interval() {
        let begin = Instant::now();
        let mut job = Recorder {
            starts: Vec::new(),
            work: Duration::from_secs(1),
        };
        Scheduler::new(Duration::from_secs(10))
            .run_times(&mut job, 3)
            .await;

        let offsets: Vec<u64> = job.starts.iter().map(|s| (*s - begin).as_secs()).collect();
        assert_eq!(offsets, vec![0, 10, 20]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_runs_never_overlap() {
        let mut job = Recorder {
            starts: Vec::new(),
            work: Duration::from_secs(25),
        };
        Scheduler::new(Duration::from_secs(10))
            .run_times(&mut job, 3)
            .await;

        for pair in job.starts.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_secs(25));
        }
    }
}
