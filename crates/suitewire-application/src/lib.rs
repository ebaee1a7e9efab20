//! # Application Layer
//!
//! The shared-context suite runner and everything it composes:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`context`] | Dependency injection container over a dill catalog |
//! | [`ports`] | Context loading port and component registry |
//! | [`framework`] | Class-based host test framework |
//! | [`use_cases`] | Suite builder and injecting class runner |

pub mod context;
pub mod framework;
pub mod ports;
pub mod use_cases;

pub use context::{ApplicationContext, ApplicationContextBuilder, Autowire};
pub use ports::ContextLoader;
pub use use_cases::{ContextSuite, InjectingClassRunner, SuiteBuilder, SuiteDeclaration};
