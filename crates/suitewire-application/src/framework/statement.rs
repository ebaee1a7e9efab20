//! Executable units of a test method's lifecycle

use std::fmt;

use super::instance::TestInstance;
use super::method::FrameworkMethod;
use super::outcome::{Outcome, TestError};

type Body = Box<dyn FnOnce(&mut dyn TestInstance) -> Outcome>;

/// One-shot step evaluated against the test instance
///
/// Statements nest: setup and teardown wrappers take the inner statement
/// and return a new one that runs their procedures around it.
pub struct Statement(Body);

impl Statement {
    /// Create from a closure
    pub fn new<F>(body: F) -> Self
    where
        F: FnOnce(&mut dyn TestInstance) -> Outcome + 'static,
    {
        Self(Box::new(body))
    }

    /// Invoke a test method
    pub fn invoke(method: &FrameworkMethod) -> Self {
        let method = method.clone();
        Self::new(move |target| method.invoke(target))
    }

    /// A statement that fails with `error` without touching the instance
    pub fn fail(error: impl Into<TestError>) -> Self {
        let error = error.into();
        Self::new(move |_| Err(error))
    }

    /// Run the statement
    pub fn evaluate(self, target: &mut dyn TestInstance) -> Outcome {
        (self.0)(target)
    }
}

impl fmt::Debug for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Statement")
    }
}
