//! The `config` command: inspect and initialize the TOML configuration.

use clap::Subcommand;

use warclock_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration file (no overwrite)
    Init,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::Init => {
            let path = Config::path()?;
            if path.exists() {
                return Err(format!("config already exists at {}", path.display()).into());
            }
            Config::default().save()?;
            println!("Wrote default config to {}", path.display());
        }
    }
    Ok(())
}
