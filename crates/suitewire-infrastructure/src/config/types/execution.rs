//! Execution configuration types

use serde::{Deserialize, Serialize};
use suitewire_application::framework::ExecutionMode;

/// How a suite runs its member classes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Run member classes concurrently
    pub parallel: bool,
}

impl ExecutionConfig {
    /// Execution mode selected by this configuration
    pub fn mode(&self) -> ExecutionMode {
        if self.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }
}
