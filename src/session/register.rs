//! Registration flow
//!
//! Prompts for a new username and password, then appends one record with
//! serial max+1. Cancelling or exhausting the attempt budget at either
//! prompt leaves the store untouched.

use std::io::{self, BufRead, Write};

use log::{info, warn};

use super::prompt::{self, PromptInput};
use crate::auth;
use crate::config::AppConfig;
use crate::store::{CredentialStore, Snapshot};

/// Run the interactive registration flow to completion.
pub fn run<R: BufRead, W: Write>(
    store: &CredentialStore,
    config: &AppConfig,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    if let Err(e) = store.ensure_initialized() {
        // the append below will fail and report; nothing else to do here
        warn!("{}", e);
    }
    let snapshot = store.load();

    writeln!(output, "\n*** User Registration ***")?;
    writeln!(output, "(Type 'exit' to cancel)")?;

    let Some(username) = prompt_new_username(&snapshot, config, input, output)? else {
        info!("Registration cancelled");
        writeln!(output, "Registration cancelled.")?;
        return Ok(());
    };

    let Some(password) = prompt_new_password(config, input, output)? else {
        info!("Registration cancelled for {}", username);
        writeln!(output, "Registration cancelled.")?;
        return Ok(());
    };

    let serial = snapshot.next_serial();
    match store.append(serial, &username, &password) {
        Ok(()) => {
            info!("Registered user {} with serial {}", username, serial);
            writeln!(output, "Registration successful!")?;
        }
        Err(e) => {
            warn!("Failed to persist registration for {}: {}", username, e);
            writeln!(output, "Error saving user.")?;
        }
    }

    Ok(())
}

/// Prompt until a well-formed, unclaimed username arrives. Returns `None`
/// on cancel or when the attempt budget runs out; format failures are
/// reported before availability is even checked.
fn prompt_new_username<R: BufRead, W: Write>(
    snapshot: &Snapshot,
    config: &AppConfig,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    for _ in 0..config.max_attempts {
        let PromptInput::Token(username) = prompt::read_token(input, output, "Enter username: ")?
        else {
            return Ok(None);
        };

        if !auth::validate_username(&username) {
            writeln!(output, "Invalid format! Only lowercase letters + optional digits.")?;
        } else if !snapshot.username_available(&username) {
            writeln!(output, "Username already exists.")?;
        } else {
            return Ok(Some(username));
        }
    }

    Ok(None)
}

fn prompt_new_password<R: BufRead, W: Write>(
    config: &AppConfig,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    for _ in 0..config.max_attempts {
        let PromptInput::Token(password) = prompt::read_token(input, output, "Enter password: ")?
        else {
            return Ok(None);
        };

        if !auth::validate_password(&password) {
            writeln!(output, "Invalid password! Must be 6+ chars with letters, digits & symbols.")?;
        } else {
            return Ok(Some(password));
        }
    }

    Ok(None)
}
