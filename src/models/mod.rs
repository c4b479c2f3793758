//! Data models module
//!
//! Defines the dispatchable Command and the bounded Username.

pub mod command;
pub mod username;

pub use command::{parse_lenient_int, Command};
pub use username::Username;
