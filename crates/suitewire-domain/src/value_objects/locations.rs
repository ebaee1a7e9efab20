//! Container configuration locations

use crate::constants::FILE_LOCATION_PREFIX;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered, immutable list of context definition resource locators
///
/// Accepts either a single locator or a list, mirroring how a suite
/// declares one or more configuration resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LocationsRepr", into = "Vec<String>")]
pub struct ConfigLocations(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum LocationsRepr {
    One(String),
    Many(Vec<String>),
}

impl From<LocationsRepr> for ConfigLocations {
    fn from(repr: LocationsRepr) -> Self {
        match repr {
            LocationsRepr::One(location) => Self(vec![location]),
            LocationsRepr::Many(locations) => Self(locations),
        }
    }
}

impl From<ConfigLocations> for Vec<String> {
    fn from(locations: ConfigLocations) -> Self {
        locations.0
    }
}

impl ConfigLocations {
    /// Create from any iterable of locators, keeping their order
    pub fn new<I, S>(locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(locations.into_iter().map(Into::into).collect())
    }

    /// Locators in declaration order
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate over locators in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of locators
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no locator was declared
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Strip the optional `file:` scheme from a locator
    pub fn strip_scheme(location: &str) -> &str {
        location
            .strip_prefix(FILE_LOCATION_PREFIX)
            .unwrap_or(location)
    }
}

impl From<&str> for ConfigLocations {
    fn from(location: &str) -> Self {
        Self::new([location])
    }
}

impl From<String> for ConfigLocations {
    fn from(location: String) -> Self {
        Self(vec![location])
    }
}

impl From<Vec<String>> for ConfigLocations {
    fn from(locations: Vec<String>) -> Self {
        Self(locations)
    }
}

impl<const N: usize> From<[&str; N]> for ConfigLocations {
    fn from(locations: [&str; N]) -> Self {
        Self::new(locations)
    }
}

impl<'a> IntoIterator for &'a ConfigLocations {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ConfigLocations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}
