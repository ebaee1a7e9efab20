//! Descriptions of suites, classes and test methods

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies something that runs and gets reported
///
/// A suite or class description carries only a class name; a test
/// description also carries a method name and displays as `method(Class)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Description {
    class_name: String,
    method_name: Option<String>,
}

impl Description {
    /// Describe a suite or a test class
    pub fn suite<S: Into<String>>(name: S) -> Self {
        Self {
            class_name: name.into(),
            method_name: None,
        }
    }

    /// Describe a single test method of a class
    pub fn test<C: Into<String>, M: Into<String>>(class_name: C, method_name: M) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: Some(method_name.into()),
        }
    }

    /// Class (or suite) name
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Method name for test descriptions
    pub fn method_name(&self) -> Option<&str> {
        self.method_name.as_deref()
    }

    /// Whether this describes a single test rather than a container of tests
    pub fn is_test(&self) -> bool {
        self.method_name.is_some()
    }

    /// Human-readable name used in reports
    pub fn display_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.method_name {
            Some(method) => write!(f, "{method}({})", self.class_name),
            None => f.write_str(&self.class_name),
        }
    }
}
