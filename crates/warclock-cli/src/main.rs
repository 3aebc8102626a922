use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "warclock", version, about = "Battery-efficient war-day nudge scheduler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scheduler daemon
    Run(commands::run::RunArgs),
    /// Show the current cycle position and pending decision
    Status(commands::status::StatusArgs),
    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args).map_err(Into::into),
        Commands::Status(args) => commands::status::run(args),
        Commands::Auth { action } => commands::auth::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
