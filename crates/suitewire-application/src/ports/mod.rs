//! Application ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`ContextLoader`] | Creates the suite's container from configuration locations |
//! | [`registry`] | Compile-time component registry used by context definitions |

pub mod context_loader;
pub mod registry;

pub use context_loader::ContextLoader;
