//! Credential validation
//!
//! Format rules for usernames and passwords. Membership checks and password
//! matching live in the session flows, not here.

pub mod validator;

pub use validator::{validate_password, validate_username};
