//! Top-level menu
//!
//! Reads a numeric choice and dispatches to a session flow, returning to
//! the menu after each flow until the user exits.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::config::AppConfig;
use crate::session::prompt;
use crate::session::{login, register};
use crate::store::CredentialStore;

/// Menu states. `Menu` is the initial state and is re-entered after each
/// completed flow; `Exit` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    Menu,
    Register,
    Login,
    Exit,
}

/// Interactive menu over one credential store.
pub struct Menu {
    config: AppConfig,
    store: CredentialStore,
}

impl Menu {
    pub fn new(config: AppConfig) -> Self {
        let store = CredentialStore::new(config.store_path());
        Self { config, store }
    }

    /// Run the menu loop until the user chooses Exit.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> io::Result<()> {
        let mut state = MenuState::Menu;
        loop {
            state = match state {
                MenuState::Menu => self.read_choice(input, output)?,
                MenuState::Register => {
                    register::run(&self.store, &self.config, input, output)?;
                    MenuState::Menu
                }
                MenuState::Login => {
                    login::run(&self.store, &self.config, input, output)?;
                    MenuState::Menu
                }
                MenuState::Exit => {
                    info!("Exiting on user request");
                    writeln!(output, "Exiting program. Goodbye!")?;
                    return Ok(());
                }
            };
        }
    }

    /// Print the menu and read choices until one parses to a known state.
    /// Non-numeric and out-of-range input reprompts without any budget.
    fn read_choice<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<MenuState> {
        loop {
            writeln!(output, "\n=== Login & Registration Menu ===")?;
            writeln!(output, "1. Register")?;
            writeln!(output, "2. Login")?;
            writeln!(output, "3. Exit")?;
            write!(output, "Enter your choice: ")?;
            output.flush()?;

            let Some(token) = prompt::next_token(input)? else {
                // closed input stream: leave instead of spinning on reads
                debug!("Input ended at menu prompt");
                return Ok(MenuState::Exit);
            };

            match token.parse::<i64>() {
                Ok(1) => return Ok(MenuState::Register),
                Ok(2) => return Ok(MenuState::Login),
                Ok(3) => return Ok(MenuState::Exit),
                Ok(_) => writeln!(output, "Invalid choice. Try 1-3.")?,
                Err(_) => writeln!(output, "Please enter a valid number.")?,
            }
        }
    }
}
