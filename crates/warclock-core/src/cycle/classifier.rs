//! War-day cycle classification.
//!
//! The weekly cycle is anchored to 10:00 UTC (15:30 IST). Battle days run
//! Thursday 10:00 UTC through Monday 10:00 UTC as a half-open window; the
//! remaining three days are training days. Within each battle day the nudge
//! cadence tightens over a 24h day-cycle that also starts at 10:00 UTC:
//!
//! ```text
//! cycle hour  [0, 12)  early phase   every 3h
//! cycle hour  [12, 18) mid phase     every 2h
//! cycle hour  [18, 24) final phase   every 1h
//! ```
//!
//! All decision math is done in UTC. The IST offset exists only for
//! human-readable labels.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Daily cycle boundary, in hours UTC (15:30 IST).
pub const DAY_BOUNDARY_HOUR: u32 = 10;

/// Weekday the battle window opens on (Thursday), as days from Monday.
const WAR_START_WEEKDAY: u32 = 3;

/// Length of the battle window in days.
const WAR_DAYS: i64 = 4;

/// Display-only offset for log labels (IST, +05:30).
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Cadence phase within one battle-day cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Early,
    Mid,
    Final,
}

impl Phase {
    /// Nudge interval length for this phase, in hours.
    pub fn interval_hours(self) -> i64 {
        match self {
            Phase::Early => 3,
            Phase::Mid => 2,
            Phase::Final => 1,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Phase::Early => "early phase (every 3h)",
            Phase::Mid => "mid phase (every 2h)",
            Phase::Final => "final phase (every 1h)",
        }
    }

    /// Phase for a whole hour within the day-cycle (0..24).
    pub fn of_cycle_hour(hour: i64) -> Self {
        if hour < 12 {
            Phase::Early
        } else if hour < 18 {
            Phase::Mid
        } else {
            Phase::Final
        }
    }
}

/// Where the current instant sits in the weekly cycle.
///
/// Derived, never stored: compute fresh for every decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CyclePosition {
    /// Inside the four-day battle window.
    pub active: bool,
    /// Human-readable status, e.g. `Battle Day 2: Friday`.
    pub label: String,
    /// Cadence phase; `None` on training days.
    pub phase: Option<Phase>,
}

/// 10:00 UTC on the given date.
fn at_boundary(date: NaiveDate) -> DateTime<Utc> {
    let time = date
        .and_hms_opt(DAY_BOUNDARY_HOUR, 0, 0)
        .expect("boundary hour is a valid time of day");
    Utc.from_utc_datetime(&time)
}

/// Most recent daily boundary (10:00 UTC) at or before `now`.
pub fn day_cycle_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let today = at_boundary(now.date_naive());
    if now >= today {
        today
    } else {
        today - Duration::days(1)
    }
}

/// Start of the battle window containing `now`, or of the most recent one
/// if `now` falls on a training day.
pub fn war_period_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let days_since_thursday =
        (now.weekday().num_days_from_monday() + 7 - WAR_START_WEEKDAY) % 7;
    let candidate = at_boundary(now.date_naive() - Duration::days(days_since_thursday as i64));
    if candidate <= now {
        candidate
    } else {
        candidate - Duration::days(7)
    }
}

/// Start of the next battle window strictly after `now`.
pub fn next_war_period_start(now: DateTime<Utc>) -> DateTime<Utc> {
    war_period_start(now) + Duration::days(7)
}

/// Next phase boundary (12h, 18h or 24h into the day-cycle) after `now`.
pub fn next_phase_boundary(now: DateTime<Utc>) -> DateTime<Utc> {
    let anchor = day_cycle_start(now);
    let hours_in = (now - anchor).num_seconds() / 3600;
    let next = if hours_in < 12 {
        12
    } else if hours_in < 18 {
        18
    } else {
        24
    };
    anchor + Duration::hours(next)
}

/// Classify `now` into the weekly cycle.
pub fn classify(now: DateTime<Utc>) -> CyclePosition {
    let war_start = war_period_start(now);
    let war_end = war_start + Duration::days(WAR_DAYS);

    if now < war_end {
        let day_index = (now - war_start).num_hours() / 24 + 1;
        let day_start = war_start + Duration::days(day_index - 1);
        let anchor = day_cycle_start(now);
        let phase = Phase::of_cycle_hour((now - anchor).num_seconds() / 3600);
        CyclePosition {
            active: true,
            label: format!("Battle Day {day_index}: {}", day_start.weekday()),
            phase: Some(phase),
        }
    } else {
        let ist = display_time(now);
        CyclePosition {
            active: false,
            label: format!("Training day ({} IST)", ist.format("%A %H:%M")),
            phase: None,
        }
    }
}

/// `now` shifted into IST. Labels only; never used for decisions.
pub fn display_time(now: DateTime<Utc>) -> DateTime<FixedOffset> {
    let ist = FixedOffset::east_opt(IST_OFFSET_SECS).expect("IST offset is in range");
    now.with_timezone(&ist)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    // 2025-06-05 is a Thursday.

    #[test]
    fn window_opens_thursday_at_boundary() {
        assert!(!classify(at(2025, 6, 5, 9, 59)).active);
        assert!(classify(at(2025, 6, 5, 10, 0)).active);
    }

    #[test]
    fn window_closes_monday_at_boundary() {
        assert!(classify(at(2025, 6, 9, 9, 59)).active);
        assert!(!classify(at(2025, 6, 9, 10, 0)).active);
    }

    #[test]
    fn battle_day_labels_count_up() {
        assert_eq!(classify(at(2025, 6, 5, 12, 0)).label, "Battle Day 1: Thu");
        assert_eq!(classify(at(2025, 6, 6, 12, 0)).label, "Battle Day 2: Fri");
        // Sunday's battle day runs into Monday morning.
        assert_eq!(classify(at(2025, 6, 9, 3, 0)).label, "Battle Day 4: Sun");
    }

    #[test]
    fn training_day_label_uses_ist() {
        let label = classify(at(2025, 6, 10, 10, 0)).label;
        assert!(label.starts_with("Training day ("), "{label}");
        assert!(label.ends_with("IST)"), "{label}");
    }

    #[test]
    fn phase_follows_cycle_hours() {
        // Cycle hour 0 at 10:00, 12 at 22:00, 18 at 04:00 next day.
        assert_eq!(classify(at(2025, 6, 5, 10, 0)).phase, Some(Phase::Early));
        assert_eq!(classify(at(2025, 6, 5, 21, 59)).phase, Some(Phase::Early));
        assert_eq!(classify(at(2025, 6, 5, 22, 0)).phase, Some(Phase::Mid));
        assert_eq!(classify(at(2025, 6, 6, 3, 59)).phase, Some(Phase::Mid));
        assert_eq!(classify(at(2025, 6, 6, 4, 0)).phase, Some(Phase::Final));
        assert_eq!(classify(at(2025, 6, 6, 9, 59)).phase, Some(Phase::Final));
    }

    #[test]
    fn day_cycle_start_wraps_before_boundary() {
        assert_eq!(day_cycle_start(at(2025, 6, 6, 9, 0)), at(2025, 6, 5, 10, 0));
        assert_eq!(day_cycle_start(at(2025, 6, 6, 10, 0)), at(2025, 6, 6, 10, 0));
        assert_eq!(day_cycle_start(at(2025, 6, 6, 23, 0)), at(2025, 6, 6, 10, 0));
    }

    #[test]
    fn war_period_start_from_training_day() {
        // Wednesday belongs to the window that opened the previous Thursday.
        assert_eq!(
            war_period_start(at(2025, 6, 11, 12, 0)),
            at(2025, 6, 5, 10, 0)
        );
    }

    #[test]
    fn next_war_period_from_training_day() {
        assert_eq!(
            next_war_period_start(at(2025, 6, 11, 12, 0)),
            at(2025, 6, 12, 10, 0)
        );
    }

    #[test]
    fn next_war_period_from_inside_window() {
        assert_eq!(
            next_war_period_start(at(2025, 6, 7, 12, 0)),
            at(2025, 6, 12, 10, 0)
        );
    }

    #[test]
    fn next_phase_boundary_progression() {
        assert_eq!(next_phase_boundary(at(2025, 6, 5, 10, 0)), at(2025, 6, 5, 22, 0));
        assert_eq!(next_phase_boundary(at(2025, 6, 5, 23, 30)), at(2025, 6, 6, 4, 0));
        assert_eq!(next_phase_boundary(at(2025, 6, 6, 5, 0)), at(2025, 6, 6, 10, 0));
    }

    #[test]
    fn interval_hours_per_phase() {
        assert_eq!(Phase::Early.interval_hours(), 3);
        assert_eq!(Phase::Mid.interval_hours(), 2);
        assert_eq!(Phase::Final.interval_hours(), 1);
    }
}
