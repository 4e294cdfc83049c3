//! Store file operations
//!
//! The store file is opened fresh for every operation and closed when the
//! operation returns; no handle outlives a call, and nothing is locked.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::records::{self, SerialField};
use super::snapshot::Snapshot;
use crate::error::StoreError;

/// Flat-file credential store. Holds only the path; callers pass it in from
/// configuration so tests can point it at a temporary file.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the store file with its single header line if it does not
    /// exist yet. Never touches an existing file.
    pub fn ensure_initialized(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }

        let mut file = File::create(&self.path).map_err(|e| StoreError::open(&self.path, e))?;
        writeln!(file, "{}", records::header_line())
            .map_err(|e| StoreError::write(&self.path, e))?;

        info!("Created store file {}", self.path.display());
        Ok(())
    }

    /// Read the whole file into a fresh snapshot, skipping the header line.
    /// An unopenable file is not an error here: it reads as an empty store.
    pub fn load(&self) -> Snapshot {
        let mut snapshot = Snapshot::default();

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                warn!("Could not open store file {}: {}", self.path.display(), e);
                return snapshot;
            }
        };

        for (index, line) in BufReader::new(file).lines().skip(1).enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Stopped reading {} at line {}: {}", self.path.display(), index + 2, e);
                    break;
                }
            };

            let record = records::parse_line(&line);
            if record.serial == SerialField::Skipped {
                debug!("Unparsable serial on line {} of {}", index + 2, self.path.display());
            }
            snapshot.insert(record);
        }

        debug!(
            "Loaded {} users from {} (max serial {})",
            snapshot.len(),
            self.path.display(),
            snapshot.max_serial()
        );
        snapshot
    }

    /// Append one record line in the fixed-width format. Inputs are not
    /// re-validated here; that is the caller's responsibility.
    pub fn append(&self, serial: u32, username: &str, password: &str) -> Result<(), StoreError> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::open(&self.path, e))?;

        writeln!(file, "{}", records::record_line(serial, username, password))
            .map_err(|e| StoreError::write(&self.path, e))?;

        debug!("Appended record {} for user {}", serial, username);
        Ok(())
    }
}
