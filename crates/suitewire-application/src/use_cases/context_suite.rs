//! Suite execution unit sharing one context

use std::sync::Arc;

use suitewire_domain::error::Result;
use suitewire_domain::value_objects::Description;

use crate::context::ApplicationContext;
use crate::framework::{ExecutionMode, RunNotifier, Runner, Suite};

use super::suite_builder::SuiteBuilder;
use super::suite_declaration::SuiteDeclaration;

/// A suite whose member classes are autowired from one shared context
pub struct ContextSuite {
    suite: Suite,
    context: Arc<ApplicationContext>,
}

impl ContextSuite {
    /// Build the suite described by `declaration`
    pub fn new(declaration: SuiteDeclaration, builder: &SuiteBuilder) -> Result<Self> {
        let built = builder.build_suite(declaration)?;
        let children = built
            .runners
            .into_iter()
            .map(|runner| Box::new(runner) as Box<dyn Runner>)
            .collect();
        Ok(Self {
            suite: Suite::new(built.name, children),
            context: built.context,
        })
    }

    /// Set how member classes are scheduled
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.suite = self.suite.with_mode(mode);
        self
    }

    /// The context shared by every member class
    pub fn context(&self) -> &Arc<ApplicationContext> {
        &self.context
    }

    /// Member class runners in declaration order
    pub fn children(&self) -> &[Box<dyn Runner>] {
        self.suite.children()
    }
}

impl Runner for ContextSuite {
    fn description(&self) -> Description {
        self.suite.description()
    }

    fn test_count(&self) -> usize {
        self.suite.test_count()
    }

    fn run(&self, notifier: &RunNotifier) {
        self.suite.run(notifier);
    }
}
