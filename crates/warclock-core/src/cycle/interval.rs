//! Interval identity within a battle-day cycle.
//!
//! Each day-cycle is split into 13 firing buckets with a single contiguous
//! sequence number regardless of phase: early 0-3, mid 4-6, final 7-12.
//! The day token (date of the cycle's 10:00 UTC anchor) keeps identities
//! distinct across different occurrences of the battle window.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::classifier::{self, Phase};

/// Stable identity of one firing bucket.
///
/// Two instants map to the same `IntervalId` iff they fall in the same
/// bucket of the same day-cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntervalId {
    /// Calendar date of the day-cycle anchor (not of the instant itself:
    /// an instant at 02:00 UTC belongs to the previous day's cycle).
    pub day_token: NaiveDate,
    /// Bucket index, 0..=12, strictly increasing through the day-cycle.
    pub sequence: u32,
}

impl fmt::Display for IntervalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.day_token.format("%Y%m%d"), self.sequence)
    }
}

/// Identify the bucket containing `now`, along with its phase.
///
/// Only meaningful inside the battle window; the caller checks activity
/// first via [`classifier::classify`].
pub fn current(now: DateTime<Utc>) -> (IntervalId, Phase) {
    let anchor = classifier::day_cycle_start(now);
    let hours_in = (now - anchor).num_seconds() / 3600;
    let phase = Phase::of_cycle_hour(hours_in);
    let sequence = match phase {
        Phase::Early => hours_in / 3,
        Phase::Mid => 4 + (hours_in - 12) / 2,
        Phase::Final => 7 + (hours_in - 18),
    };

    (
        IntervalId {
            day_token: anchor.date_naive(),
            sequence: sequence as u32,
        },
        phase,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, d, h, min, s).unwrap()
    }

    #[test]
    fn sequence_is_contiguous_across_phases() {
        // Bucket starts relative to the 10:00 UTC anchor on June 5.
        let cases = [
            (at(5, 10, 0, 0), 0),
            (at(5, 13, 0, 0), 1),
            (at(5, 16, 0, 0), 2),
            (at(5, 19, 0, 0), 3),
            (at(5, 22, 0, 0), 4),
            (at(6, 0, 0, 0), 5),
            (at(6, 2, 0, 0), 6),
            (at(6, 4, 0, 0), 7),
            (at(6, 9, 0, 0), 12),
        ];
        for (instant, expected) in cases {
            let (id, _) = current(instant);
            assert_eq!(id.sequence, expected, "at {instant}");
        }
    }

    #[test]
    fn same_bucket_minutes_apart_is_identical() {
        let (a, _) = current(at(5, 11, 2, 0));
        let (b, _) = current(at(5, 12, 57, 30));
        assert_eq!(a, b);
    }

    #[test]
    fn one_second_past_boundary_differs() {
        let (before, _) = current(at(5, 12, 59, 59));
        let (after, _) = current(at(5, 13, 0, 0));
        assert_ne!(before, after);
        assert_eq!(after.sequence, before.sequence + 1);
    }

    #[test]
    fn day_token_is_the_anchor_date() {
        // 02:00 UTC on June 6 is still June 5's cycle.
        let (id, _) = current(at(6, 2, 0, 0));
        assert_eq!(id.day_token, NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());
        // After the boundary a fresh cycle begins.
        let (id, _) = current(at(6, 10, 0, 0));
        assert_eq!(id.day_token, NaiveDate::from_ymd_opt(2025, 6, 6).unwrap());
        assert_eq!(id.sequence, 0);
    }

    #[test]
    fn display_format() {
        let (id, _) = current(at(5, 14, 0, 0));
        assert_eq!(id.to_string(), "20250605_1");
    }
}
