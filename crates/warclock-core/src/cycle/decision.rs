//! The schedule decision engine.
//!
//! Combines classification, interval identity and the execution tracker into
//! a single answer: execute now, or sleep this many seconds and ask again.
//! Safe to call arbitrarily often; the only mutation is clearing the tracker
//! when the cycle is on a training day.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::classifier;
use super::interval::{self, IntervalId};
use super::tracker::ExecutionTracker;

/// Floor applied to every computed sleep so clock skew can never produce a
/// zero or negative duration (which would busy-spin the loop).
pub const MIN_SLEEP_SECS: u64 = 60;

/// What the suspend loop should do next.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleDecision {
    pub sleep_secs: u64,
    pub reason: String,
    pub execute_now: bool,
    /// The bucket this decision was made for; `None` on training days.
    /// The loop marks exactly this id after executing, so a sequence that
    /// drifts past a bucket boundary still marks the bucket it fired for.
    pub interval: Option<IntervalId>,
}

fn floored(secs: i64) -> u64 {
    secs.max(MIN_SLEEP_SECS as i64) as u64
}

/// Decide whether to fire the nudge sequence at `now`.
pub fn decide(now: DateTime<Utc>, tracker: &mut ExecutionTracker) -> ScheduleDecision {
    let position = classifier::classify(now);

    if !position.active {
        // Entering the training period always clears execution memory.
        tracker.reset();
        let sleep = floored((classifier::next_war_period_start(now) - now).num_seconds());
        return ScheduleDecision {
            sleep_secs: sleep,
            reason: format!("{} - sleeping until next battle day", position.label),
            execute_now: false,
            interval: None,
        };
    }

    let (id, phase) = interval::current(now);
    if !tracker.already_executed(&id) {
        // A new, unexecuted bucket always wins; no delay math needed.
        return ScheduleDecision {
            sleep_secs: 0,
            reason: format!("{} - execute now (interval {id})", phase.describe()),
            execute_now: true,
            interval: Some(id),
        };
    }

    // Already fired in this bucket: sleep until the next bucket, unless a
    // phase boundary arrives first and shortens it.
    let anchor = classifier::day_cycle_start(now);
    let interval_secs = phase.interval_hours() * 3600;
    let into_bucket = (now - anchor).num_seconds() % interval_secs;
    let until_next_bucket = interval_secs - into_bucket;
    let until_phase_change = (classifier::next_phase_boundary(now) - now).num_seconds();

    if until_phase_change < until_next_bucket {
        ScheduleDecision {
            sleep_secs: floored(until_phase_change),
            reason: format!("phase change in {:.1}h", until_phase_change as f64 / 3600.0),
            execute_now: false,
            interval: Some(id),
        }
    } else {
        ScheduleDecision {
            sleep_secs: floored(until_next_bucket),
            reason: format!(
                "{} - next nudge in {}min",
                phase.describe(),
                until_next_bucket / 60
            ),
            execute_now: false,
            interval: Some(id),
        }
    }
}
