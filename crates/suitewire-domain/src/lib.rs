//! # Domain Layer
//!
//! Error taxonomy and value objects for Suitewire, a suite runner that
//! shares one dependency injection context across every member test class.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error type and `Result` alias |
//! | [`value_objects`] | Declarations, locations and descriptions |
//! | [`constants`] | Domain constants |

pub mod constants;
pub mod error;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::*;
