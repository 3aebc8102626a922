//! Last-executed-interval memory.
//!
//! Holds at most one value and lives only as long as the process: a restart
//! mid-window may repeat the current bucket once, which is the accepted
//! trade-off for not persisting anything.

use tracing::info;

use super::interval::IntervalId;

/// Records the single most recent interval confirmed executed.
#[derive(Debug, Default)]
pub struct ExecutionTracker {
    last_executed: Option<IntervalId>,
}

impl ExecutionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` as executed, replacing any previous value.
    pub fn mark(&mut self, id: IntervalId) {
        info!("marked interval {id} as executed");
        self.last_executed = Some(id);
    }

    pub fn already_executed(&self, id: &IntervalId) -> bool {
        self.last_executed.as_ref() == Some(id)
    }

    /// Clear the mark. Called whenever the cycle leaves the battle window
    /// so a new occurrence always starts fresh.
    pub fn reset(&mut self) {
        self.last_executed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn id(seq: u32) -> IntervalId {
        IntervalId {
            day_token: NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            sequence: seq,
        }
    }

    #[test]
    fn mark_then_query() {
        let mut tracker = ExecutionTracker::new();
        assert!(!tracker.already_executed(&id(0)));
        tracker.mark(id(0));
        assert!(tracker.already_executed(&id(0)));
        assert!(!tracker.already_executed(&id(1)));
    }

    #[test]
    fn mark_overwrites() {
        let mut tracker = ExecutionTracker::new();
        tracker.mark(id(0));
        tracker.mark(id(1));
        assert!(!tracker.already_executed(&id(0)));
        assert!(tracker.already_executed(&id(1)));
    }

    #[test]
    fn reset_clears() {
        let mut tracker = ExecutionTracker::new();
        tracker.mark(id(3));
        tracker.reset();
        assert!(!tracker.already_executed(&id(3)));
    }

    #[test]
    fn same_sequence_different_day_is_distinct() {
        let mut tracker = ExecutionTracker::new();
        tracker.mark(id(2));
        let other_day = IntervalId {
            day_token: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
            sequence: 2,
        };
        assert!(!tracker.already_executed(&other_day));
    }
}
