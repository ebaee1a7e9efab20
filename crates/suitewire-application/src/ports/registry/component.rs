//! Component Registry
//!
//! Auto-registration system for bean components.
//! Components register themselves via `#[linkme::distributed_slice(COMPONENTS)]`
//! and are discovered by name when a context definition refers to them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::context::ApplicationContextBuilder;

/// One `[[beans]]` entry of a context definition
///
/// Contains the bean id, the component that creates it and free-form
/// properties. Components use what they need and ignore the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeanDefinition {
    /// Unique bean id within the context
    pub id: String,
    /// Registered component name (e.g., "properties")
    pub component: String,
    /// Component-specific configuration
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl BeanDefinition {
    /// Create a definition with no properties
    pub fn new(id: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component: component.into(),
            properties: Map::new(),
        }
    }

    /// Add a property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Read a required property
    pub fn property<T: DeserializeOwned>(&self, key: &str) -> Result<T, String> {
        self.optional_property(key)?
            .ok_or_else(|| format!("missing required property '{key}'"))
    }

    /// Read an optional property
    pub fn optional_property<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, String> {
        self.properties
            .get(key)
            .map(|value| {
                serde_json::from_value(value.clone())
                    .map_err(|e| format!("invalid property '{key}': {e}"))
            })
            .transpose()
    }

    /// Read a property, falling back to `default` when absent
    pub fn property_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, String> {
        Ok(self.optional_property(key)?.unwrap_or(default))
    }
}

/// Registry entry for bean components
///
/// The factory creates the bean described by a definition and registers it
/// (and nothing else) into the builder.
pub struct ComponentEntry {
    /// Unique component name (e.g., "properties")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function creating and registering the bean
    pub factory: fn(&BeanDefinition, &mut ApplicationContextBuilder) -> Result<(), String>,
}

// Auto-collection via linkme distributed slices - components submit entries at compile time
#[linkme::distributed_slice]
pub static COMPONENTS: [ComponentEntry] = [..];

/// Resolve a component by name from the registry
///
/// # Returns
/// * `Ok(&ComponentEntry)` - Registered entry
/// * `Err(String)` - Error message listing the available components
pub fn resolve_component(name: &str) -> Result<&'static ComponentEntry, String> {
    if let Some(entry) = COMPONENTS.iter().find(|entry| entry.name == name) {
        return Ok(entry);
    }

    let available: Vec<&str> = COMPONENTS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown component '{name}'. Available components: {available:?}"
    ))
}

/// List all registered components
///
/// Returns (name, description) tuples sorted by name.
pub fn list_components() -> Vec<(&'static str, &'static str)> {
    let mut components: Vec<(&'static str, &'static str)> = COMPONENTS
        .iter()
        .map(|e| (e.name, e.description))
        .collect();
    components.sort_unstable_by_key(|(name, _)| *name);
    components
}
