//! Interactive session flows
//!
//! Registration and login combine the validator and the store behind
//! bounded-retry prompts. Flows are generic over their input and output
//! streams so tests can drive them without a terminal.

pub mod login;
pub mod prompt;
pub mod register;

pub use prompt::CANCEL_TOKEN;
