//! Run results

use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use suitewire_domain::value_objects::Description;

use super::notifier::{Failure, RunListener};

/// Outcome of a complete run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Tests that ran (passed or failed)
    pub run_count: usize,
    /// Tests that were skipped
    pub ignore_count: usize,
    /// Every reported failure, in report order
    pub failures: Vec<Failure>,
    /// Tests that ran without failing, in completion order
    pub passed: Vec<Description>,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl RunSummary {
    /// Number of failures
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Whether nothing failed
    pub fn was_successful(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failure reported for a test with the given display name, if any
    pub fn failure_for(&self, display_name: &str) -> Option<&Failure> {
        self.failures
            .iter()
            .find(|f| f.description().display_name() == display_name)
    }

    /// Whether a test with the given display name passed
    pub fn passed(&self, display_name: &str) -> bool {
        self.passed.iter().any(|d| d.display_name() == display_name)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tests run: {}, Failures: {}, Ignored: {}, Time: {:.2?}",
            self.run_count,
            self.failure_count(),
            self.ignore_count,
            self.elapsed
        )
    }
}

#[derive(Default)]
struct CollectorState {
    summary: RunSummary,
    started: Option<Instant>,
    failed_current: Vec<Description>,
}

/// Listener accumulating a [`RunSummary`]
#[derive(Default)]
pub struct ResultCollector {
    state: Mutex<CollectorState>,
}

impl ResultCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the results so far
    pub fn summary(&self) -> RunSummary {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let mut summary = state.summary.clone();
        if let Some(started) = state.started {
            if summary.elapsed.is_zero() {
                summary.elapsed = started.elapsed();
            }
        }
        summary
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut CollectorState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

impl RunListener for ResultCollector {
    fn test_run_started(&self, _description: &Description) {
        self.with_state(|state| state.started = Some(Instant::now()));
    }

    fn test_run_finished(&self, _description: &Description) {
        self.with_state(|state| {
            if let Some(started) = state.started {
                state.summary.elapsed = started.elapsed();
            }
        });
    }

    fn test_finished(&self, description: &Description) {
        self.with_state(|state| {
            state.summary.run_count += 1;
            if let Some(pos) = state.failed_current.iter().position(|d| d == description) {
                state.failed_current.swap_remove(pos);
            } else {
                state.summary.passed.push(description.clone());
            }
        });
    }

    fn test_failure(&self, failure: &Failure) {
        self.with_state(|state| {
            if failure.description().is_test() {
                state.failed_current.push(failure.description().clone());
            }
            state.summary.failures.push(failure.clone());
        });
    }

    fn test_ignored(&self, _description: &Description, _reason: &str) {
        self.with_state(|state| state.summary.ignore_count += 1);
    }
}
