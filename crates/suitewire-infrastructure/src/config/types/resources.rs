//! Resource location configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where relative context definition locations are resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    /// Base directory for relative locations
    pub root: PathBuf,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}
