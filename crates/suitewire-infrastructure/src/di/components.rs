//! Built-in bean components

use std::collections::BTreeMap;

use serde_json::Value;
use suitewire_application::context::ApplicationContextBuilder;
use suitewire_application::ports::registry::{BeanDefinition, COMPONENTS, ComponentEntry};
use suitewire_domain::constants::PROPERTIES_COMPONENT;

/// String key/value bean created by the `properties` component
///
/// Scalar property values are kept in their textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    values: BTreeMap<String, String>,
}

impl Properties {
    /// Create from key/value pairs
    pub fn new<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value of `key`, or `default` when absent
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Whether `key` is present
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over entries sorted by key
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn properties_factory(
    definition: &BeanDefinition,
    builder: &mut ApplicationContextBuilder,
) -> Result<(), String> {
    let values = definition
        .properties
        .iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Bool(_) | Value::Number(_) => value.to_string(),
                _ => return Err(format!("property '{key}' must be a scalar value")),
            };
            Ok((key.clone(), text))
        })
        .collect::<Result<BTreeMap<_, _>, String>>()?;

    builder
        .register_bean(
            &definition.id,
            &definition.component,
            Properties { values },
        )
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[linkme::distributed_slice(COMPONENTS)]
static PROPERTIES_ENTRY: ComponentEntry = ComponentEntry {
    name: PROPERTIES_COMPONENT,
    description: "String key/value properties",
    factory: properties_factory,
};
