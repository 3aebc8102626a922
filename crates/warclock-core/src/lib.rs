//! # Warclock Core Library
//!
//! Core logic for Warclock, a battery-efficient scheduler that fires a
//! recurring Discord "nudge" sequence on the weekly war-day cadence and
//! sleeps precisely between firing windows so the host device (typically a
//! phone running Termux) can suspend.
//!
//! ## Architecture
//!
//! - **Cycle engine**: pure wall-clock classification of the weekly
//!   battle-day/training-day cycle, interval identity, and the
//!   sleep-or-execute decision
//! - **Nudge dispatch**: sequential, jitter-paced Discord interaction
//!   requests behind the [`NudgeSink`] seam
//! - **Power control**: Termux wake-lock acquisition scoped to network
//!   activity via an RAII guard
//! - **Storage**: TOML configuration and OS-keyring credential storage
//!
//! ## Key Components
//!
//! - [`decide`]: the schedule decision engine
//! - [`Runner`]: the top-level suspend loop
//! - [`NudgeExecutor`]: one paced pass over the configured tags
//! - [`DiscordClient`]: interaction and message dispatch

pub mod cycle;
pub mod discord;
pub mod error;
pub mod nudge;
pub mod runner;
pub mod storage;
pub mod wakelock;

pub use cycle::{
    classify, decide, CyclePosition, ExecutionTracker, IntervalId, Phase, ScheduleDecision,
};
pub use discord::{DiscordClient, NudgeSink};
pub use error::{ConfigError, CoreError, CredentialError, NotifyError};
pub use nudge::{NudgeExecutor, SequenceReport};
pub use runner::Runner;
pub use storage::Config;
pub use wakelock::{SystemWakeLock, WakeGuard, WakeLock};
