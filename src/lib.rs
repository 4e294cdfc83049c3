pub mod auth;
pub mod config;
pub mod error;
pub mod menu;
pub mod session;
pub mod store;

pub use menu::Menu;
