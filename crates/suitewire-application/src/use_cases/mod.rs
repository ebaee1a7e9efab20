//! Use cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`SuiteBuilder`] | Validates a declaration, creates the context once, builds runners |
//! | [`InjectingClassRunner`] | Autowires each test instance before its setup phase |
//! | [`ContextSuite`] | Suite execution unit over the built runners |

pub mod context_suite;
pub mod injecting_runner;
pub mod suite_builder;
pub mod suite_declaration;

pub use context_suite::ContextSuite;
pub use injecting_runner::{InjectingClassRunner, InjectingSetup};
pub use suite_builder::{BuiltSuite, SuiteBuilder};
pub use suite_declaration::{SuiteDeclaration, SuiteDeclarationBuilder};
