//! Execution units
//!
//! A [`Runner`] runs a set of tests and reports them. [`BlockClassRunner`]
//! is the standard runner for one [`TestClass`]: for each test method it
//! builds a fresh instance, wraps the method with the setup and teardown
//! phases and evaluates the result.

use std::collections::HashSet;

use suitewire_domain::constants::DEFAULT_IGNORE_REASON;
use suitewire_domain::error::{Error, Result};
use suitewire_domain::value_objects::Description;
use tracing::{debug, warn};

use super::method::FrameworkMethod;
use super::notifier::{Failure, RunNotifier};
use super::outcome::{Outcome, TestError};
use super::setup::{RunBefores, SetupWrapper, with_afters};
use super::statement::Statement;
use super::test_class::TestClass;

/// Something the framework can run and report
pub trait Runner: Send + Sync {
    /// Description of the unit as a whole
    fn description(&self) -> Description;

    /// Number of tests the unit will report
    fn test_count(&self) -> usize;

    /// Run every test, reporting to `notifier`
    fn run(&self, notifier: &RunNotifier);
}

/// Standard runner for one test class
pub struct BlockClassRunner {
    class: TestClass,
    setup: Box<dyn SetupWrapper>,
}

impl BlockClassRunner {
    /// Validate `class` and create its runner
    ///
    /// Every problem found is collected into a single initialization error.
    pub fn new(class: TestClass) -> Result<Self> {
        validate(&class)?;
        let setup = Box::new(RunBefores::new(class.befores().to_vec()));
        Ok(Self { class, setup })
    }

    /// Replace the setup wrapper with a decorator of the current one
    pub fn decorate_setup<F>(mut self, decorate: F) -> Self
    where
        F: FnOnce(Box<dyn SetupWrapper>) -> Box<dyn SetupWrapper>,
    {
        self.setup = decorate(self.setup);
        self
    }

    /// The class this runner runs
    pub fn test_class(&self) -> &TestClass {
        &self.class
    }

    /// Descriptions of the class's test methods, in declaration order
    pub fn child_descriptions(&self) -> Vec<Description> {
        self.class
            .tests()
            .iter()
            .map(|method| self.class.describe_method(method))
            .collect()
    }

    fn run_children(&self, notifier: &RunNotifier) {
        for method in self.class.tests() {
            self.run_child(method, notifier);
        }
    }

    fn run_child(&self, method: &FrameworkMethod, notifier: &RunNotifier) {
        let description = self.class.describe_method(method);
        if let Some(reason) = method.ignore_reason().map(ignore_reason_or_default) {
            debug!(test = %description, reason, "Test ignored");
            notifier.fire_test_ignored(&description, reason);
            return;
        }

        notifier.fire_test_started(&description);
        debug!(test = %description, "Test started");
        if let Err(error) = self.method_block(method) {
            warn!(test = %description, error = %error, "Test failed");
            notifier.fire_test_failure(&Failure::new(description.clone(), &error));
        }
        notifier.fire_test_finished(&description);
    }

    fn method_block(&self, method: &FrameworkMethod) -> Outcome {
        let mut instance = self.class.create_instance()?;
        let statement = Statement::invoke(method);
        let statement = self.setup.with_befores(method, &mut *instance, statement);
        let statement = with_afters(self.class.afters(), statement);
        statement.evaluate(&mut *instance)
    }

    fn fire_ignored_children(&self, reason: &str, notifier: &RunNotifier) {
        for description in self.child_descriptions() {
            notifier.fire_test_ignored(&description, reason);
        }
    }

    fn fire_class_failure(&self, error: &TestError, notifier: &RunNotifier) {
        let description = self.description();
        warn!(class = %description, error = %error, "Class hook failed");
        notifier.fire_test_failure(&Failure::new(description, error));
    }
}

impl Runner for BlockClassRunner {
    fn description(&self) -> Description {
        self.class.description()
    }

    fn test_count(&self) -> usize {
        self.class.tests().len()
    }

    fn run(&self, notifier: &RunNotifier) {
        if let Some(reason) = self.class.ignore_reason().map(ignore_reason_or_default) {
            self.fire_ignored_children(reason, notifier);
            return;
        }

        let before_class = self
            .class
            .before_class()
            .iter()
            .try_for_each(|hook| hook.invoke());
        match before_class {
            Ok(()) => self.run_children(notifier),
            Err(error) => self.fire_class_failure(&error, notifier),
        }

        let after_errors: Vec<TestError> = self
            .class
            .after_class()
            .iter()
            .filter_map(|hook| hook.invoke().err())
            .collect();
        if let Some(error) = TestError::from_errors(after_errors) {
            self.fire_class_failure(&error, notifier);
        }
    }
}

fn validate(class: &TestClass) -> Result<()> {
    let mut causes = Vec::new();

    if class.name().trim().is_empty() {
        causes.push("Test class must have a name".to_string());
    }
    if class.tests().is_empty() {
        causes.push(format!("No runnable methods in '{}'", class.name()));
    }

    let mut seen = HashSet::new();
    let methods = class
        .befores()
        .iter()
        .chain(class.tests())
        .chain(class.afters());
    for method in methods {
        if method.name().trim().is_empty() {
            causes.push(format!("Method without a name in '{}'", class.name()));
        } else if !seen.insert(method.name()) {
            causes.push(format!(
                "Duplicate method '{}' in '{}'",
                method.name(),
                class.name()
            ));
        }
    }

    if causes.is_empty() {
        Ok(())
    } else {
        Err(Error::initialization_causes(causes))
    }
}

fn ignore_reason_or_default(reason: &str) -> &str {
    if reason.is_empty() {
        DEFAULT_IGNORE_REASON
    } else {
        reason
    }
}
