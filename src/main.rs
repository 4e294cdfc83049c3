//! User Registry - Entry Point
//!
//! Interactive registration and login against a flat-file credential store.

use std::io;

use log::info;

use user_registry::Menu;
use user_registry::config::AppConfig;
use user_registry::error::handlers;

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            handlers::handle_error(&e.into());
            AppConfig::default()
        }
    };
    info!(
        "Starting user registry (store file: {}, attempt budget: {})",
        config.store_path, config.max_attempts
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let menu = Menu::new(config);
    if let Err(e) = menu.run(&mut stdin.lock(), &mut stdout.lock()) {
        handlers::handle_error(&e.into());
    }
}
