//! The top-level suspend loop.
//!
//! Repeatedly asks the decision engine what to do, then either runs the
//! nudge sequence or sleeps the requested duration. Sleep happens in
//! bounded chunks so shutdown is observed promptly and long waits still
//! emit a periodic status line.

use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::watch;
use tracing::info;

use crate::cycle::{decide, ExecutionTracker};
use crate::discord::NudgeSink;
use crate::nudge::NudgeExecutor;
use crate::wakelock::WakeLock;

/// Upper bound on a single uninterrupted sleep.
pub const SLEEP_CHUNK_SECS: u64 = 3600;

/// Drives the decide/execute/sleep cycle until shutdown is requested.
pub struct Runner<S, W, C = fn() -> DateTime<Utc>> {
    executor: NudgeExecutor<S, W>,
    tracker: ExecutionTracker,
    clock: C,
}

impl<S: NudgeSink, W: WakeLock> Runner<S, W> {
    pub fn new(executor: NudgeExecutor<S, W>) -> Self {
        Self {
            executor,
            tracker: ExecutionTracker::new(),
            clock: Utc::now,
        }
    }
}

impl<S: NudgeSink, W: WakeLock, C: Fn() -> DateTime<Utc>> Runner<S, W, C> {
    /// Like [`Runner::new`] but with an injected clock, so tests can pin
    /// the loop to a known cycle position.
    pub fn with_clock(executor: NudgeExecutor<S, W>, clock: C) -> Self {
        Self {
            executor,
            tracker: ExecutionTracker::new(),
            clock,
        }
    }

    pub fn tracker(&self) -> &ExecutionTracker {
        &self.tracker
    }

    /// Run until the shutdown channel flips to `true`.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        info!("scheduler started");
        loop {
            if *shutdown.borrow() {
                break;
            }

            let decision = decide((self.clock)(), &mut self.tracker);
            info!("{}", decision.reason);

            if decision.execute_now {
                // Biased so a sequence able to make progress finishes
                // before shutdown aborts it; the wake guard releases on
                // either branch.
                tokio::select! {
                    biased;
                    _report = self.executor.run_sequence() => {}
                    _ = shutdown.changed() => break,
                };
                // An attempted interval counts as done even on partial
                // failure; retrying inside the same bucket would just
                // burn battery.
                if let Some(id) = decision.interval {
                    self.tracker.mark(id);
                }

                let next = decide((self.clock)(), &mut self.tracker);
                info!("{}", next.reason);
                if sleep_chunked(next.sleep_secs, &mut shutdown).await {
                    break;
                }
            } else if sleep_chunked(decision.sleep_secs, &mut shutdown).await {
                break;
            }
        }
        info!("scheduler stopped");
    }
}

/// Sleep `total_secs` in chunks of at most [`SLEEP_CHUNK_SECS`], bailing
/// out between chunks if shutdown is requested. Returns `true` when the
/// sleep was interrupted by shutdown.
async fn sleep_chunked(total_secs: u64, shutdown: &mut watch::Receiver<bool>) -> bool {
    if total_secs == 0 {
        return *shutdown.borrow();
    }
    info!(
        "sleeping for {:.1} minutes ({:.2} hours)",
        total_secs as f64 / 60.0,
        total_secs as f64 / 3600.0
    );

    let mut remaining = total_secs;
    while remaining > 0 {
        let chunk = remaining.min(SLEEP_CHUNK_SECS);
        tokio::select! {
            () = tokio::time::sleep(Duration::from_secs(chunk)) => {}
            _ = shutdown.changed() => return true,
        }
        remaining -= chunk;
        if remaining > 0 {
            info!("{:.1}h of sleep remaining", remaining as f64 / 3600.0);
        }
    }
    false
}
