//! Suite settings
//!
//! [`SuiteSettings`] is loaded by [`ConfigLoader`] from defaults, an
//! optional `suitewire.toml` and `SUITEWIRE__*` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_settings};
pub use types::*;
