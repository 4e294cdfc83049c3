//! In-memory store view
//!
//! A point-in-time view of the credential store: the username-to-password
//! mapping plus the highest serial seen. Every flow rebuilds this by calling
//! `CredentialStore::load`; it is never cached across flows, so a record
//! appended by one flow is visible to the next.

use std::collections::HashMap;

use super::records::{CredentialRecord, SerialField};

/// Loaded credentials and the maximum serial found in the file.
#[derive(Debug, Default)]
pub struct Snapshot {
    users: HashMap<String, String>,
    max_serial: u32,
}

impl Snapshot {
    /// Fold one parsed record into the snapshot. Later rows overwrite
    /// earlier ones, so a file holding duplicate usernames resolves to the
    /// most recent line.
    pub(crate) fn insert(&mut self, record: CredentialRecord) {
        if let SerialField::Parsed(serial) = record.serial {
            if serial > self.max_serial {
                self.max_serial = serial;
            }
        }
        self.users.insert(record.username, record.password);
    }

    /// Returns whether the username is free for registration.
    pub fn username_available(&self, username: &str) -> bool {
        !self.users.contains_key(username)
    }

    /// Returns whether the username names an existing record.
    pub fn username_exists(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Stored password for the username, if any.
    pub fn password_for(&self, username: &str) -> Option<&str> {
        self.users.get(username).map(String::as_str)
    }

    /// Highest serial parsed from the file; 0 for an empty or missing store.
    pub fn max_serial(&self) -> u32 {
        self.max_serial
    }

    /// Serial for the next record to append.
    pub fn next_serial(&self) -> u32 {
        self.max_serial + 1
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
