//! Flat-file credential store
//!
//! Persistence and lookup for credential records: store file initialization,
//! full-file loads into an in-memory snapshot, and append-only writes.

pub mod operations;
pub mod records;
pub mod snapshot;

pub use operations::CredentialStore;
pub use records::{CredentialRecord, SerialField};
pub use snapshot::Snapshot;
