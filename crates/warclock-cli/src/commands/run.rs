//! The `run` command: the long-running scheduler daemon.

use clap::Args;
use tokio::sync::watch;
use tracing::{info, warn};

use warclock_core::error::Result;
use warclock_core::storage::{credentials, Config};
use warclock_core::{DiscordClient, NudgeExecutor, Runner, SystemWakeLock};

#[derive(Args)]
pub struct RunArgs {
    /// Skip the startup "online" message
    #[arg(long)]
    pub no_startup_message: bool,
}

pub fn run(args: RunArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Config::load()?;
    let token = credentials::require_token()?;

    tokio::runtime::Runtime::new()?.block_on(daemon(args, config, token))
}

async fn daemon(args: RunArgs, config: Config, token: String) -> Result<()> {
    info!("warclock starting");
    let wake = SystemWakeLock::detect();
    info!(
        "termux mode: {}",
        if matches!(wake, SystemWakeLock::Termux) {
            "active"
        } else {
            "desktop"
        }
    );

    let client = DiscordClient::new(token, config.command.clone(), config.target.clone());

    if !args.no_startup_message {
        match client
            .send_message(&config.startup.channel_id, &config.startup.message)
            .await
        {
            Ok(()) => info!("startup message sent"),
            Err(e) => warn!("startup message failed: {e}"),
        }
    }

    let executor = NudgeExecutor::new(client, wake, config.tags.clone(), config.pacing.range());

    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown requested");
            let _ = tx.send(true);
        }
    });

    let mut runner = Runner::new(executor);
    runner.run(rx).await;
    Ok(())
}
