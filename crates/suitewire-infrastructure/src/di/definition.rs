//! Context definition resources
//!
//! A definition is a TOML file listing the beans of a context and the
//! other definitions it imports:
//!
//! ```toml
//! imports = ["common.toml"]
//!
//! [[beans]]
//! id = "settings"
//! component = "properties"
//! properties = { greeting = "hello" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use suitewire_application::ports::registry::BeanDefinition;
use suitewire_domain::error::{Error, Result};

use crate::error_ext::ErrorContext;

/// Parsed content of one context definition resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextDefinition {
    /// Other resources, relative to this one, loaded before its beans
    #[serde(default)]
    pub imports: Vec<String>,
    /// Beans declared by this resource, in creation order
    #[serde(default)]
    pub beans: Vec<BeanDefinition>,
}

impl ContextDefinition {
    /// Parse a definition from TOML text
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read and parse a definition file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .io_context(format!("Failed to read context definition {}", path.display()))?;
        let definition = Self::parse(&content).config_context(format!(
            "Invalid context definition {}",
            path.display()
        ))?;
        definition.validate(path)?;
        Ok(definition)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        for bean in &self.beans {
            if bean.id.trim().is_empty() {
                return Err(Error::configuration(format!(
                    "Bean of component '{}' in {} has no id",
                    bean.component,
                    path.display()
                )));
            }
            if bean.component.trim().is_empty() {
                return Err(Error::configuration(format!(
                    "Bean '{}' in {} has no component",
                    bean.id,
                    path.display()
                )));
            }
        }
        Ok(())
    }
}
