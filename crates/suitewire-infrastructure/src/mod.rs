//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! ## Module Categories
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Suite settings loaded with figment |
//! | [`di`] | TOML context definitions and built-in components |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`reporting`] | Run listener and report rendering |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod reporting;

// Re-export commonly used types
pub use config::{ConfigLoader, SuiteSettings};
pub use di::{Properties, TomlContextLoader};
pub use error_ext::ErrorContext;
pub use reporting::{TracingListener, render_report};
