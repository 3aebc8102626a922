//! One paced pass over the configured nudge tags.
//!
//! The sequence is strictly sequential with a uniform random pause between
//! consecutive tags -- the pacing is the point, so there is no concurrent
//! fan-out. Failures are counted and logged but never abort the pass, and
//! nothing is retried; the next interval is the natural retry point.

use rand::Rng;
use std::ops::RangeInclusive;
use std::time::Duration;
use tracing::{info, warn};

use crate::discord::NudgeSink;
use crate::wakelock::{WakeGuard, WakeLock};

/// Outcome of one sequence pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceReport {
    pub attempted: usize,
    pub succeeded: usize,
}

impl SequenceReport {
    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.attempted
    }
}

/// Runs the full tag sequence, holding the wake lock for the duration.
pub struct NudgeExecutor<S, W> {
    sink: S,
    wake: W,
    tags: Vec<String>,
    pacing_secs: RangeInclusive<u64>,
}

impl<S: NudgeSink, W: WakeLock> NudgeExecutor<S, W> {
    pub fn new(sink: S, wake: W, tags: Vec<String>, pacing_secs: RangeInclusive<u64>) -> Self {
        Self {
            sink,
            wake,
            tags,
            pacing_secs,
        }
    }

    /// Attempt every tag once, in order, with jittered pacing in between.
    pub async fn run_sequence(&self) -> SequenceReport {
        info!("starting nudge sequence ({} tags)", self.tags.len());
        let _guard = WakeGuard::acquire(&self.wake);

        let mut succeeded = 0;
        for (index, tag) in self.tags.iter().enumerate() {
            if index > 0 {
                let pause = rand::thread_rng().gen_range(self.pacing_secs.clone());
                tokio::time::sleep(Duration::from_secs(pause)).await;
            }
            match self.sink.send_nudge(tag).await {
                Ok(()) => {
                    info!("nudge sent: {tag}");
                    succeeded += 1;
                }
                Err(err) => warn!("nudge failed: {tag}: {err}"),
            }
        }

        let report = SequenceReport {
            attempted: self.tags.len(),
            succeeded,
        };
        info!(
            "sequence complete: {}/{} successful",
            report.succeeded, report.attempted
        );
        report
    }
}
