//! Suite declarations

use suitewire_domain::value_objects::ConfigLocations;

use crate::framework::TestClass;

/// Record describing a suite: its member classes and its context configuration
///
/// Both items are required. They are optional here so that an incomplete
/// declaration can be represented and rejected when the suite is built.
#[derive(Debug, Clone)]
pub struct SuiteDeclaration {
    name: String,
    suite_classes: Option<Vec<TestClass>>,
    context_configuration: Option<ConfigLocations>,
}

impl SuiteDeclaration {
    /// Start declaring a suite
    pub fn builder(name: impl Into<String>) -> SuiteDeclarationBuilder {
        SuiteDeclarationBuilder {
            declaration: Self {
                name: name.into(),
                suite_classes: None,
                context_configuration: None,
            },
        }
    }

    /// Suite name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared member classes, if any
    pub fn suite_classes(&self) -> Option<&[TestClass]> {
        self.suite_classes.as_deref()
    }

    /// Declared context locations, if any
    pub fn context_configuration(&self) -> Option<&ConfigLocations> {
        self.context_configuration.as_ref()
    }

    pub(crate) fn into_parts(self) -> (String, Option<Vec<TestClass>>, Option<ConfigLocations>) {
        (self.name, self.suite_classes, self.context_configuration)
    }
}

/// Builder for [`SuiteDeclaration`]
#[derive(Debug, Clone)]
pub struct SuiteDeclarationBuilder {
    declaration: SuiteDeclaration,
}

impl SuiteDeclarationBuilder {
    /// Declare the member classes, in run order
    pub fn suite_classes<I>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = TestClass>,
    {
        self.declaration.suite_classes = Some(classes.into_iter().collect());
        self
    }

    /// Declare the context definition locations
    pub fn context_configuration(mut self, locations: impl Into<ConfigLocations>) -> Self {
        self.declaration.context_configuration = Some(locations.into());
        self
    }

    /// Finish the declaration
    pub fn build(self) -> SuiteDeclaration {
        self.declaration
    }
}
