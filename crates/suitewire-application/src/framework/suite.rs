//! Suites of runners

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use suitewire_domain::value_objects::Description;
use tracing::info;

use super::notifier::RunNotifier;
use super::runner::Runner;

/// How a suite schedules its children
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One child after another, in declaration order
    #[default]
    Sequential,
    /// Children run concurrently on the rayon pool
    Parallel,
}

/// Runs an ordered list of child runners under one description
pub struct Suite {
    description: Description,
    children: Vec<Box<dyn Runner>>,
    mode: ExecutionMode,
}

impl Suite {
    /// Create a sequential suite
    pub fn new(name: impl Into<String>, children: Vec<Box<dyn Runner>>) -> Self {
        Self {
            description: Description::suite(name),
            children,
            mode: ExecutionMode::Sequential,
        }
    }

    /// Set the execution mode
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Child runners in declaration order
    pub fn children(&self) -> &[Box<dyn Runner>] {
        &self.children
    }

    /// Execution mode
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }
}

impl Runner for Suite {
    fn description(&self) -> Description {
        self.description.clone()
    }

    fn test_count(&self) -> usize {
        self.children.iter().map(|child| child.test_count()).sum()
    }

    fn run(&self, notifier: &RunNotifier) {
        info!(
            suite = %self.description,
            children = self.children.len(),
            mode = ?self.mode,
            "Running suite"
        );
        match self.mode {
            ExecutionMode::Sequential => {
                self.children.iter().for_each(|child| child.run(notifier));
            }
            ExecutionMode::Parallel => {
                self.children.par_iter().for_each(|child| child.run(notifier));
            }
        }
    }
}
