//! The `status` command: read-only view of the current cycle position.

use chrono::Utc;
use clap::Args;

use warclock_core::classify;
use warclock_core::cycle::{decide, ExecutionTracker};

#[derive(Args)]
pub struct StatusArgs {
    /// Emit machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now();
    let position = classify(now);

    // A fresh tracker: shows what a newly started daemon would do now.
    let mut tracker = ExecutionTracker::new();
    let decision = decide(now, &mut tracker);

    if args.json {
        let out = serde_json::json!({
            "now": now.to_rfc3339(),
            "active": position.active,
            "label": position.label,
            "phase": position.phase,
            "decision": decision,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Status:   {}", position.label);
        if let Some(phase) = position.phase {
            println!("Phase:    {}", phase.describe());
        }
        if let Some(id) = &decision.interval {
            println!("Interval: {id}");
        }
        println!("Next:     {}", decision.reason);
        if !decision.execute_now {
            println!(
                "Sleep:    {:.1} minutes",
                decision.sleep_secs as f64 / 60.0
            );
        }
    }
    Ok(())
}
