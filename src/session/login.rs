//! Login flow
//!
//! Prompts for an existing username, then for its password, each within the
//! configured attempt budget. Passwords are compared exactly against the
//! stored value for that username.

use std::io::{self, BufRead, Write};

use log::{info, warn};

use super::prompt::{self, PromptInput};
use crate::config::AppConfig;
use crate::store::CredentialStore;

/// Run the interactive login flow to completion.
pub fn run<R: BufRead, W: Write>(
    store: &CredentialStore,
    config: &AppConfig,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let snapshot = store.load();

    writeln!(output, "\n*** User Login ***")?;
    writeln!(output, "(Type 'exit' to cancel)")?;

    let mut username = None;
    for _ in 0..config.max_attempts {
        match prompt::read_token(input, output, "Enter username: ")? {
            PromptInput::Cancelled => {
                info!("Login cancelled");
                writeln!(output, "Login cancelled.")?;
                return Ok(());
            }
            PromptInput::Token(name) if snapshot.username_exists(&name) => {
                username = Some(name);
                break;
            }
            PromptInput::Token(_) => {
                writeln!(output, "Username not found.")?;
            }
        }
    }

    let Some(username) = username else {
        warn!("Login aborted: username attempts exhausted");
        writeln!(output, "Too many failed attempts.")?;
        return Ok(());
    };

    for _ in 0..config.max_attempts {
        match prompt::read_token(input, output, "Enter password: ")? {
            PromptInput::Cancelled => {
                info!("Login cancelled for {}", username);
                writeln!(output, "Login cancelled.")?;
                return Ok(());
            }
            PromptInput::Token(password) => {
                if snapshot.password_for(&username) == Some(password.as_str()) {
                    info!("User {} logged in", username);
                    writeln!(output, "Login successful. Welcome, {}!", username)?;
                    return Ok(());
                }
                writeln!(output, "Incorrect password.")?;
            }
        }
    }

    warn!("Login aborted for {}: password attempts exhausted", username);
    writeln!(output, "Too many incorrect password attempts. Login aborted.")?;
    Ok(())
}
