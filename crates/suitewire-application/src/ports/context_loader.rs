//! Context loading port

use suitewire_domain::error::Result;
use suitewire_domain::value_objects::ConfigLocations;

use crate::context::ApplicationContext;

/// Builds an [`ApplicationContext`] from context definition locations
///
/// Implementations perform all eager bean creation. Their errors are
/// surfaced to callers unchanged.
pub trait ContextLoader: Send + Sync {
    /// Load and freeze a context from the given locations
    fn load_context(&self, locations: &ConfigLocations) -> Result<ApplicationContext>;
}

impl<F> ContextLoader for F
where
    F: Fn(&ConfigLocations) -> Result<ApplicationContext> + Send + Sync,
{
    fn load_context(&self, locations: &ConfigLocations) -> Result<ApplicationContext> {
        self(locations)
    }
}
