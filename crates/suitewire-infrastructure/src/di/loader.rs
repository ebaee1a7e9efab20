//! TOML context loader
//!
//! Resolves each configuration location to a definition file, expands its
//! imports depth-first and creates every declared bean eagerly.
//!
//! ```text
//! locations ─→ resolve (file: prefix, resource root)
//!           ─→ expand imports (depth-first, cycle check)
//!           ─→ resolve_component(name).factory(definition, builder)
//!           ─→ ApplicationContextBuilder::build()
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use suitewire_application::context::{ApplicationContext, ApplicationContextBuilder};
use suitewire_application::ports::ContextLoader;
use suitewire_application::ports::registry::{BeanDefinition, resolve_component};
use suitewire_domain::error::{Error, Result};
use suitewire_domain::value_objects::ConfigLocations;
use tracing::{debug, info};

use super::definition::ContextDefinition;
use crate::config::ResourcesConfig;
use crate::constants::MAX_IMPORT_DEPTH;
use crate::error_ext::ErrorContext;

/// Loads contexts from TOML definition files
#[derive(Debug, Clone)]
pub struct TomlContextLoader {
    resource_root: PathBuf,
}

impl TomlContextLoader {
    /// Create a loader resolving relative locations against `resource_root`
    pub fn new<P: Into<PathBuf>>(resource_root: P) -> Self {
        Self {
            resource_root: resource_root.into(),
        }
    }

    /// Create a loader from the resources settings
    pub fn from_config(config: &ResourcesConfig) -> Self {
        Self::new(config.root.clone())
    }

    /// Base directory for relative locations
    pub fn resource_root(&self) -> &Path {
        &self.resource_root
    }

    /// Map a location to a file path
    pub fn resolve_location(&self, location: &str) -> PathBuf {
        let path = Path::new(ConfigLocations::strip_scheme(location.trim()));
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.resource_root.join(path)
        }
    }

    /// Collect the bean definitions of every location, imports first
    pub fn collect_definitions(&self, locations: &ConfigLocations) -> Result<Vec<BeanDefinition>> {
        let mut expansion = Expansion::default();
        for location in locations {
            let path = self.resolve_location(location);
            expansion.visit(&path, location)?;
        }
        Ok(expansion.beans)
    }
}

impl ContextLoader for TomlContextLoader {
    fn load_context(&self, locations: &ConfigLocations) -> Result<ApplicationContext> {
        info!(locations = %locations, "Loading application context");
        let definitions = self.collect_definitions(locations)?;

        let mut builder = ApplicationContextBuilder::new();
        for definition in &definitions {
            create_bean(definition, &mut builder)?;
        }
        Ok(builder.build())
    }
}

fn create_bean(definition: &BeanDefinition, builder: &mut ApplicationContextBuilder) -> Result<()> {
    debug!(bean = %definition.id, component = %definition.component, "Creating bean");
    let entry = resolve_component(&definition.component)
        .map_err(|message| Error::bean_creation(&definition.id, &definition.component, message))?;
    (entry.factory)(definition, builder)
        .map_err(|message| Error::bean_creation(&definition.id, &definition.component, message))
}

/// Depth-first import expansion state
#[derive(Default)]
struct Expansion {
    /// Files currently being expanded, outermost first
    stack: Vec<PathBuf>,
    /// Files already fully expanded
    loaded: HashSet<PathBuf>,
    beans: Vec<BeanDefinition>,
}

impl Expansion {
    fn visit(&mut self, path: &Path, location: &str) -> Result<()> {
        if !path.is_file() {
            return Err(Error::configuration(format!(
                "Context definition '{location}' not found at {}",
                path.display()
            )));
        }
        let canonical = path
            .canonicalize()
            .io_context(format!("Failed to resolve {}", path.display()))?;

        if self.stack.contains(&canonical) {
            let chain: Vec<String> = self
                .stack
                .iter()
                .chain(std::iter::once(&canonical))
                .map(|p| p.display().to_string())
                .collect();
            return Err(Error::configuration(format!(
                "Import cycle detected: {}",
                chain.join(" -> ")
            )));
        }
        if self.loaded.contains(&canonical) {
            debug!(path = %canonical.display(), "Context definition already loaded");
            return Ok(());
        }
        if self.stack.len() >= MAX_IMPORT_DEPTH {
            return Err(Error::configuration(format!(
                "Imports nested deeper than {MAX_IMPORT_DEPTH} levels at {}",
                canonical.display()
            )));
        }

        debug!(path = %canonical.display(), "Reading context definition");
        let definition = ContextDefinition::from_file(&canonical)?;
        let base = canonical
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.stack.push(canonical.clone());
        for import in &definition.imports {
            let stripped = Path::new(ConfigLocations::strip_scheme(import.trim()));
            let import_path = if stripped.is_absolute() {
                stripped.to_path_buf()
            } else {
                base.join(stripped)
            };
            self.visit(&import_path, import)?;
        }
        self.stack.pop();

        self.beans.extend(definition.beans);
        self.loaded.insert(canonical);
        Ok(())
    }
}
