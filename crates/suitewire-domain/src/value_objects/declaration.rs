//! Suite declaration metadata kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two pieces of metadata a suite declaration must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclarationKind {
    /// Ordered list of member test classes
    SuiteClasses,
    /// Locations of the container configuration resources
    ContextConfiguration,
}

impl DeclarationKind {
    /// Name used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuiteClasses => "SuiteClasses",
            Self::ContextConfiguration => "ContextConfiguration",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
