//! Error types
//!
//! Defines domain-specific error types for each module of the registry.

use std::fmt;
use std::io;
use std::path::Path;

/// Credential store errors
#[derive(Debug)]
pub enum StoreError {
    OpenFailed { path: String, source: io::Error },
    WriteFailed { path: String, source: io::Error },
}

impl StoreError {
    pub(crate) fn open(path: &Path, source: io::Error) -> Self {
        StoreError::OpenFailed {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        StoreError::WriteFailed {
            path: path.display().to_string(),
            source,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::OpenFailed { path, source } => {
                write!(f, "Cannot open store file {}: {}", path, source)
            }
            StoreError::WriteFailed { path, source } => {
                write!(f, "Cannot write to store file {}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// General registry error that encompasses all error types
#[derive(Debug)]
pub enum RegistryError {
    Store(StoreError),
    Config(::config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Store(e) => write!(f, "Store error: {}", e),
            RegistryError::Config(e) => write!(f, "Configuration error: {}", e),
            RegistryError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for RegistryError {}

// Implement conversions from specific errors to RegistryError
impl From<StoreError> for RegistryError {
    fn from(error: StoreError) -> Self {
        RegistryError::Store(error)
    }
}

impl From<::config::ConfigError> for RegistryError {
    fn from(error: ::config::ConfigError) -> Self {
        RegistryError::Config(error)
    }
}

impl From<io::Error> for RegistryError {
    fn from(error: io::Error) -> Self {
        RegistryError::IoError(error)
    }
}
