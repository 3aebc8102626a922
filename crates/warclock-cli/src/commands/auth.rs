//! The `auth` command: manage the stored Discord auth token.

use std::io::{BufRead, Write};

use clap::Subcommand;

use warclock_core::storage::credentials;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Store the Discord auth token in the OS keyring
    Login {
        /// The auth token value; prompted for on stdin when omitted, which
        /// keeps the secret out of shell history
        #[arg(long)]
        token: Option<String>,
    },
    /// Remove the stored token
    Logout,
    /// Check authentication status
    Status,
}

fn prompt_token() -> Result<String, Box<dyn std::error::Error>> {
    eprint!("Auth token: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AuthAction::Login { token } => {
            let token = match token {
                Some(token) => token,
                None => prompt_token()?,
            };
            let token = token.trim();
            if token.is_empty() {
                return Err("token must not be empty".into());
            }
            credentials::set_token(token)?;
            println!("Auth token saved");
        }
        AuthAction::Logout => {
            credentials::delete_token()?;
            println!("Auth token removed");
        }
        AuthAction::Status => {
            // Keyring trouble reads as "not authenticated" rather than a
            // hard failure; status is a query, not a gate.
            let state = match credentials::get_token() {
                Ok(Some(_)) => "authenticated",
                _ => "not authenticated",
            };
            println!("{state}");
        }
    }
    Ok(())
}
