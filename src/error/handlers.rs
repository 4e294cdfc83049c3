//! Error handlers
//!
//! Provides centralized error logging for the registry.

use crate::error::types::RegistryError;
use log::error;

/// Log a registry error. Nothing here is fatal to the process; the menu
/// loop owns recovery.
pub fn handle_error(err: &RegistryError) {
    error!("Registry error: {}", err);
}
