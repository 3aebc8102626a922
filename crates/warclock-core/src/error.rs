//! Core error types for warclock-core.
//!
//! This module defines the error hierarchy using thiserror. [`CoreError`]
//! umbrellas the fatal setup failures (config, credentials, IO) that abort
//! the daemon; [`NotifyError`] stays separate because dispatch failures are
//! non-fatal by contract and are only ever logged and counted.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for warclock-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Credential storage errors
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Credential storage errors.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// OS keyring access failed
    #[error("Keyring error: {0}")]
    Keyring(String),

    /// No auth token stored
    #[error("Not authenticated: run `warclock auth login` first")]
    NotAuthenticated,
}

/// Nudge dispatch errors.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Transport-level failure
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the API
    #[error("API rejected request (HTTP {status}): {body}")]
    Status { status: u16, body: String },
}

impl From<keyring::Error> for CredentialError {
    fn from(err: keyring::Error) -> Self {
        CredentialError::Keyring(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
