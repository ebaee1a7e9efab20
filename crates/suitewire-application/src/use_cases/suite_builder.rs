//! Suite builder
//!
//! Turns a [`SuiteDeclaration`] into one [`InjectingClassRunner`] per
//! member class, all sharing a single [`ApplicationContext`].
//!
//! ```text
//! SuiteDeclaration
//!     │  SuiteClasses present?          ── no ─→ Initialization error
//!     │  ContextConfiguration present?  ── no ─→ Initialization error
//!     ↓
//! ContextLoader::load_context (once)    ── err ─→ propagated unchanged
//!     ↓
//! InjectingClassRunner::new per class   ── err ─→ propagated, nothing returned
//! ```

use std::sync::Arc;

use suitewire_domain::error::{Error, Result};
use suitewire_domain::value_objects::DeclarationKind;
use tracing::{debug, info};

use crate::context::ApplicationContext;
use crate::ports::ContextLoader;

use super::injecting_runner::InjectingClassRunner;
use super::suite_declaration::SuiteDeclaration;

/// Runners of a built suite together with their shared context
pub struct BuiltSuite {
    /// Suite name
    pub name: String,
    /// The single context every runner references
    pub context: Arc<ApplicationContext>,
    /// One runner per member class, in declaration order
    pub runners: Vec<InjectingClassRunner>,
}

/// Builds the runners of a suite
#[derive(Clone)]
pub struct SuiteBuilder {
    loader: Arc<dyn ContextLoader>,
}

impl SuiteBuilder {
    /// Create a builder that creates contexts with `loader`
    pub fn new(loader: Arc<dyn ContextLoader>) -> Self {
        Self { loader }
    }

    /// Build one runner per member class
    pub fn build(&self, declaration: SuiteDeclaration) -> Result<Vec<InjectingClassRunner>> {
        self.build_suite(declaration).map(|suite| suite.runners)
    }

    /// Build the runners and keep a handle on the shared context
    pub fn build_suite(&self, declaration: SuiteDeclaration) -> Result<BuiltSuite> {
        let (name, classes, locations) = declaration.into_parts();

        let classes = classes
            .filter(|classes| !classes.is_empty())
            .ok_or_else(|| Error::missing_declaration(DeclarationKind::SuiteClasses, &name))?;
        let locations = locations
            .filter(|locations| !locations.is_empty())
            .ok_or_else(|| {
                Error::missing_declaration(DeclarationKind::ContextConfiguration, &name)
            })?;

        info!(suite = %name, %locations, "Initializing suite context");
        let context = Arc::new(self.loader.load_context(&locations)?);

        let runners = classes
            .into_iter()
            .map(|class| {
                debug!(suite = %name, class = class.name(), "Creating injecting runner");
                InjectingClassRunner::new(class, Arc::clone(&context))
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            suite = %name,
            runners = runners.len(),
            context = %context.id(),
            "Suite built"
        );
        Ok(BuiltSuite {
            name,
            context,
            runners,
        })
    }
}
