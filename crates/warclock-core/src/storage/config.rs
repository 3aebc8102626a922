//! TOML-based application configuration.
//!
//! Stores the dispatch targets, the slash-command identity, the tag list
//! and the pacing window. Every field has a default carrying the stock
//! deployment values, so a missing or partial file still yields a working
//! config.
//!
//! Configuration is stored at `~/.config/warclock/config.toml`.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.toml";

/// Guild and channel the nudge interactions are dispatched into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    #[serde(default = "default_target_guild")]
    pub guild_id: String,
    #[serde(default = "default_target_channel")]
    pub channel_id: String,
}

/// Channel and content for the one-shot startup notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupConfig {
    #[serde(default = "default_startup_channel")]
    pub channel_id: String,
    #[serde(default = "default_startup_message")]
    pub message: String,
}

/// Identity of the bot slash command being invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandConfig {
    #[serde(default = "default_application_id")]
    pub application_id: String,
    #[serde(default = "default_command_id")]
    pub id: String,
    #[serde(default = "default_command_version")]
    pub version: String,
    #[serde(default = "default_command_name")]
    pub name: String,
}

/// Random pause between consecutive nudges, in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    #[serde(default = "default_pacing_min")]
    pub min_secs: u64,
    #[serde(default = "default_pacing_max")]
    pub max_secs: u64,
}

impl PacingConfig {
    /// Inclusive pacing range; an inverted pair collapses to `min..=min`.
    pub fn range(&self) -> RangeInclusive<u64> {
        self.min_secs..=self.max_secs.max(self.min_secs)
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/warclock/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tags dispatched each interval, in order. Top-level so it serializes
    /// ahead of the table sections.
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub startup: StartupConfig,
    #[serde(default)]
    pub command: CommandConfig,
    #[serde(default)]
    pub pacing: PacingConfig,
}

// Default functions

fn default_target_guild() -> String {
    "952737615793254461".into()
}
fn default_target_channel() -> String {
    "1001637753840222269".into()
}
fn default_startup_channel() -> String {
    "1297294853935206512".into()
}
fn default_startup_message() -> String {
    "hi".into()
}
fn default_application_id() -> String {
    "869761158763143218".into()
}
fn default_command_id() -> String {
    "1406484207269843017".into()
}
fn default_command_version() -> String {
    "1406484207269843018".into()
}
fn default_command_name() -> String {
    "nudge".into()
}
fn default_pacing_min() -> u64 {
    5
}
fn default_pacing_max() -> u64 {
    15
}
fn default_tags() -> Vec<String> {
    ["feed", "tame", "edge", "hev", "city"]
        .iter()
        .map(|t| t.to_string())
        .collect()
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            guild_id: default_target_guild(),
            channel_id: default_target_channel(),
        }
    }
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            channel_id: default_startup_channel(),
            message: default_startup_message(),
        }
    }
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            application_id: default_application_id(),
            id: default_command_id(),
            version: default_command_version(),
            name: default_command_name(),
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            min_secs: default_pacing_min(),
            max_secs: default_pacing_max(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tags: default_tags(),
            target: TargetConfig::default(),
            startup: StartupConfig::default(),
            command: CommandConfig::default(),
            pacing: PacingConfig::default(),
        }
    }
}

impl Config {
    /// Path of the config file inside the data directory.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join(CONFIG_FILE))
    }

    /// Load from the default location; a missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
