//! Run reporting
//!
//! [`TracingListener`] turns run events into structured log records;
//! [`render_report`] formats a finished run for terminal output.

use std::fmt::Write as _;

use suitewire_application::framework::{Failure, FailureKind, RunListener, RunSummary};
use suitewire_domain::value_objects::Description;
use tracing::{debug, info, warn};

/// Logs every run event through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingListener;

impl RunListener for TracingListener {
    fn test_run_started(&self, description: &Description) {
        info!(run = %description, "Run started");
    }

    fn test_run_finished(&self, description: &Description) {
        info!(run = %description, "Run complete");
    }

    fn test_started(&self, description: &Description) {
        debug!(test = %description, "Started");
    }

    fn test_finished(&self, description: &Description) {
        debug!(test = %description, "Finished");
    }

    fn test_failure(&self, failure: &Failure) {
        warn!(
            test = %failure.description(),
            kind = ?failure.kind(),
            message = failure.message(),
            "Failure"
        );
    }

    fn test_ignored(&self, description: &Description, reason: &str) {
        info!(test = %description, reason, "Ignored");
    }
}

/// Render a summary with one line per failure
pub fn render_report(summary: &RunSummary) -> String {
    let mut out = String::new();
    for (index, failure) in summary.failures.iter().enumerate() {
        let label = match failure.kind() {
            FailureKind::Assertion => "FAILED",
            FailureKind::Error => "ERROR",
        };
        let _ = writeln!(
            out,
            "{}) {label} {}: {}",
            index + 1,
            failure.description(),
            failure.message()
        );
    }
    let status = if summary.was_successful() { "OK" } else { "FAILURES" };
    let _ = write!(out, "{status} ({summary})");
    out
}
