//! Run notification
//!
//! Runners report through a [`RunNotifier`], which fans every event out to
//! the registered [`RunListener`]s. Listeners are shared across threads
//! when a suite runs its children in parallel.

use std::fmt;
use std::sync::Arc;

use suitewire_domain::value_objects::Description;

use super::outcome::TestError;

/// Whether a failure came from an assertion or from an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A panicking assertion
    Assertion,
    /// Any other error
    Error,
}

/// A reported failure of a test, or of a class-level hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    description: Description,
    message: String,
    kind: FailureKind,
}

impl Failure {
    /// Record `error` against `description`
    pub fn new(description: Description, error: &TestError) -> Self {
        let kind = if error.is_assertion() {
            FailureKind::Assertion
        } else {
            FailureKind::Error
        };
        Self {
            description,
            message: error.to_string(),
            kind,
        }
    }

    /// What failed
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// Failure message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Assertion or error
    pub fn kind(&self) -> FailureKind {
        self.kind
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.description, self.message)
    }
}

/// Receives run events
///
/// Every method has an empty default body.
#[allow(unused_variables)]
pub trait RunListener: Send + Sync {
    /// The whole run is about to start
    fn test_run_started(&self, description: &Description) {}

    /// The whole run finished
    fn test_run_finished(&self, description: &Description) {}

    /// A test is about to run
    fn test_started(&self, description: &Description) {}

    /// A test finished, whether or not it failed
    fn test_finished(&self, description: &Description) {}

    /// A test or class-level hook failed
    fn test_failure(&self, failure: &Failure) {}

    /// A test was skipped
    fn test_ignored(&self, description: &Description, reason: &str) {}
}

/// Fans run events out to listeners
#[derive(Clone, Default)]
pub struct RunNotifier {
    listeners: Vec<Arc<dyn RunListener>>,
}

impl RunNotifier {
    /// Create a notifier with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn add_listener(&mut self, listener: Arc<dyn RunListener>) {
        self.listeners.push(listener);
    }

    /// Register a listener (builder form)
    pub fn with_listener(mut self, listener: Arc<dyn RunListener>) -> Self {
        self.add_listener(listener);
        self
    }

    /// Notify that the run started
    pub fn fire_test_run_started(&self, description: &Description) {
        self.listeners
            .iter()
            .for_each(|l| l.test_run_started(description));
    }

    /// Notify that the run finished
    pub fn fire_test_run_finished(&self, description: &Description) {
        self.listeners
            .iter()
            .for_each(|l| l.test_run_finished(description));
    }

    /// Notify that a test started
    pub fn fire_test_started(&self, description: &Description) {
        self.listeners.iter().for_each(|l| l.test_started(description));
    }

    /// Notify that a test finished
    pub fn fire_test_finished(&self, description: &Description) {
        self.listeners
            .iter()
            .for_each(|l| l.test_finished(description));
    }

    /// Notify a failure
    pub fn fire_test_failure(&self, failure: &Failure) {
        self.listeners.iter().for_each(|l| l.test_failure(failure));
    }

    /// Notify that a test was skipped
    pub fn fire_test_ignored(&self, description: &Description, reason: &str) {
        self.listeners
            .iter()
            .for_each(|l| l.test_ignored(description, reason));
    }
}

impl fmt::Debug for RunNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
