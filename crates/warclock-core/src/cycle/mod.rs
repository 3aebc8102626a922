//! The weekly war-day cycle engine.
//!
//! Everything in this module is a pure function of a `DateTime<Utc>` plus,
//! for the decision engine, the in-memory [`ExecutionTracker`]. Nothing here
//! performs I/O; callers re-evaluate on every decision rather than caching.

pub mod classifier;
pub mod decision;
pub mod interval;
pub mod tracker;

pub use classifier::{classify, CyclePosition, Phase};
pub use decision::{decide, ScheduleDecision, MIN_SLEEP_SECS};
pub use interval::IntervalId;
pub use tracker::ExecutionTracker;
