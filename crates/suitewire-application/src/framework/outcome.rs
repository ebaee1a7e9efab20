//! Test outcomes and failure capture

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use suitewire_domain::error::Error;
use thiserror::Error as ThisError;

/// Why a test, setup or teardown step did not succeed
#[derive(Debug, ThisError)]
pub enum TestError {
    /// The step panicked, usually through a failed assertion
    #[error("{0}")]
    Panicked(String),

    /// The step returned an error value
    #[error("{0}")]
    Failed(String),

    /// The framework or the container failed on behalf of the step
    #[error(transparent)]
    Framework(#[from] Error),

    /// Several steps failed (test body and teardown, for instance)
    #[error("{} failures: {}", .0.len(), join_errors(.0))]
    Multiple(Vec<TestError>),
}

impl TestError {
    /// Whether this is an assertion failure rather than an error
    pub fn is_assertion(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }

    /// Fold collected errors into one, if any
    pub fn from_errors(mut errors: Vec<TestError>) -> Option<TestError> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Multiple(errors)),
        }
    }
}

fn join_errors(errors: &[TestError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result of running one step
pub type Outcome = Result<(), TestError>;

/// Return types accepted from test, setup and teardown procedures
pub trait IntoOutcome {
    /// Convert into an outcome
    fn into_outcome(self) -> Outcome;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Outcome {
        Ok(())
    }
}

impl<E: fmt::Display> IntoOutcome for Result<(), E> {
    fn into_outcome(self) -> Outcome {
        self.map_err(|e| TestError::Failed(e.to_string()))
    }
}

/// Run `body`, turning a panic into [`TestError::Panicked`]
pub fn catch_failure<F>(body: F) -> Outcome
where
    F: FnOnce() -> Outcome,
{
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(outcome) => outcome,
        Err(payload) => Err(TestError::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "test panicked".to_string()
    }
}
