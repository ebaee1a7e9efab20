//! Main suite settings

use serde::{Deserialize, Serialize};

use super::{ExecutionConfig, LoggingConfig, ResourcesConfig};

/// Settings shared by every suite run from one process
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [execution]
/// parallel = true
///
/// [resources]
/// root = "tests/resources"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteSettings {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Execution configuration
    pub execution: ExecutionConfig,
    /// Resource location configuration
    pub resources: ResourcesConfig,
}
