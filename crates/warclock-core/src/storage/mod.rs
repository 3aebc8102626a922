pub mod config;
pub mod credentials;

pub use config::{CommandConfig, Config, PacingConfig, StartupConfig, TargetConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/warclock[-dev]/` based on WARCLOCK_ENV.
///
/// Set WARCLOCK_ENV=dev to use a separate development data directory.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("WARCLOCK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("warclock-dev")
    } else {
        base_dir.join("warclock")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
