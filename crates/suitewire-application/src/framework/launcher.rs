//! Entry point that runs a runner and collects results

use std::sync::Arc;

use tracing::info;

use super::notifier::{RunListener, RunNotifier};
use super::runner::Runner;
use super::summary::{ResultCollector, RunSummary};

/// Runs execution units with a set of listeners
#[derive(Default)]
pub struct Launcher {
    listeners: Vec<Arc<dyn RunListener>>,
}

impl Launcher {
    /// Create a launcher with no extra listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener that receives every run event
    pub fn with_listener(mut self, listener: Arc<dyn RunListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Run `runner` to completion and summarize
    pub fn run(&self, runner: &dyn Runner) -> RunSummary {
        let collector = Arc::new(ResultCollector::new());
        let mut notifier = RunNotifier::new().with_listener(collector.clone());
        for listener in &self.listeners {
            notifier.add_listener(Arc::clone(listener));
        }

        let description = runner.description();
        notifier.fire_test_run_started(&description);
        runner.run(&notifier);
        notifier.fire_test_run_finished(&description);

        let summary = collector.summary();
        info!(run = %description, %summary, "Run finished");
        summary
    }
}
