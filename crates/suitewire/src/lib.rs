//! # Suitewire
//!
//! Test suites whose member classes share one dependency injection context.
//!
//! A suite declares its member test classes and the locations of its
//! context definitions. The context is created once per suite; every test
//! instance of every member class is autowired from it right before its
//! setup procedures run.
//!
//! ## Example
//!
//! ```ignore
//! use suitewire::prelude::*;
//!
//! let declaration = SuiteDeclaration::builder("AllTests")
//!     .suite_classes([test_class_a(), test_class_b()])
//!     .context_configuration("context.toml")
//!     .build();
//!
//! let summary = suitewire::run_suite(declaration)?;
//! assert!(summary.was_successful());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Errors and value objects
//! - `application` - Container, test framework, suite builder and injecting runner
//! - `infrastructure` - Settings, logging, TOML context loading and reporting

/// Domain layer - errors and value objects
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use suitewire_domain::*;
}

/// Application layer - container, framework and use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use suitewire_application::*;
}

/// Infrastructure layer - settings, logging and context loading
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use suitewire_infrastructure::*;
}

pub mod prelude;
mod run;

// Re-export main entry points at the crate root
pub use run::{run_suite, run_suite_with};

// Re-export commonly used types
pub use suitewire_application::{
    ApplicationContext, Autowire, ContextSuite, InjectingClassRunner, SuiteBuilder,
    SuiteDeclaration,
};
pub use suitewire_application::framework::{RunSummary, TestClass};
pub use suitewire_domain::{Error, Result};
