//! Host test framework
//!
//! A small class-based test framework: each [`TestClass`] describes how to
//! construct instances and which setup, test and teardown procedures to run
//! on them. [`BlockClassRunner`] runs one class, [`Suite`] runs many, and
//! [`Launcher`] drives any [`Runner`] and returns a [`RunSummary`].
//!
//! ```text
//! Launcher ─→ Suite ─→ BlockClassRunner ─→ per test method:
//!                                           new instance
//!                                           SetupWrapper::with_befores
//!                                           with_afters
//!                                           Statement::evaluate
//! ```

pub mod instance;
pub mod launcher;
pub mod method;
pub mod notifier;
pub mod outcome;
pub mod runner;
pub mod setup;
pub mod statement;
pub mod suite;
pub mod summary;
pub mod test_class;

pub use instance::TestInstance;
pub use launcher::Launcher;
pub use method::{ClassHook, FrameworkMethod, MethodKind};
pub use notifier::{Failure, FailureKind, RunListener, RunNotifier};
pub use outcome::{IntoOutcome, Outcome, TestError, catch_failure};
pub use runner::{BlockClassRunner, Runner};
pub use setup::{RunBefores, SetupWrapper, with_afters};
pub use statement::Statement;
pub use suite::{ExecutionMode, Suite};
pub use summary::{ResultCollector, RunSummary};
pub use test_class::{TestClass, TestClassBuilder};
