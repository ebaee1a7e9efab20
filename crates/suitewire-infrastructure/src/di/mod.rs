//! Context loading
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`definition`] | TOML context definition resources |
//! | [`loader`] | [`TomlContextLoader`], the production `ContextLoader` |
//! | [`components`] | Built-in bean components |

pub mod components;
pub mod definition;
pub mod loader;

pub use components::Properties;
pub use definition::ContextDefinition;
pub use loader::TomlContextLoader;
