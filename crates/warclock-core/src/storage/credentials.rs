//! Thin wrapper around the OS keyring for the Discord auth token.
//!
//! The token is written once via `warclock auth login` and never touches
//! the config file.

use crate::error::CredentialError;

const SERVICE: &str = "warclock";
const TOKEN_KEY: &str = "discord_auth_token";

pub fn get_token() -> Result<Option<String>, CredentialError> {
    let entry = keyring::Entry::new(SERVICE, TOKEN_KEY)?;
    match entry.get_password() {
        Ok(token) => Ok(Some(token)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn set_token(token: &str) -> Result<(), CredentialError> {
    let entry = keyring::Entry::new(SERVICE, TOKEN_KEY)?;
    entry.set_password(token)?;
    Ok(())
}

pub fn delete_token() -> Result<(), CredentialError> {
    let entry = keyring::Entry::new(SERVICE, TOKEN_KEY)?;
    match entry.delete_credential() {
        Ok(()) => Ok(()),
        Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Token or a hard "not authenticated" error for paths that need one.
pub fn require_token() -> Result<String, CredentialError> {
    get_token()?.ok_or(CredentialError::NotAuthenticated)
}
