//! Injecting test runner
//!
//! Decorates the standard setup phase of a class runner so that the
//! suite's context autowires every fresh test instance before any of its
//! setup procedures run.

use std::sync::Arc;

use suitewire_domain::error::Result;
use suitewire_domain::value_objects::Description;
use tracing::debug;

use crate::context::ApplicationContext;
use crate::framework::{
    BlockClassRunner, FrameworkMethod, RunNotifier, Runner, SetupWrapper, Statement, TestClass,
    TestError, TestInstance, catch_failure,
};

/// Setup wrapper that autowires the instance, then delegates
pub struct InjectingSetup {
    context: Arc<ApplicationContext>,
    inner: Box<dyn SetupWrapper>,
}

impl InjectingSetup {
    /// Decorate `inner` with injection from `context`
    pub fn new(context: Arc<ApplicationContext>, inner: Box<dyn SetupWrapper>) -> Self {
        Self { context, inner }
    }
}

impl SetupWrapper for InjectingSetup {
    fn with_befores(
        &self,
        method: &FrameworkMethod,
        target: &mut dyn TestInstance,
        next: Statement,
    ) -> Statement {
        debug!(method = method.name(), context = %self.context.id(), "Injecting dependencies");
        let injected = catch_failure(|| {
            self.context
                .autowire_bean(&mut *target)
                .map_err(TestError::from)
        });
        if let Err(error) = injected {
            return Statement::fail(error);
        }
        self.inner.with_befores(method, target, next)
    }
}

/// Class runner whose instances are autowired from a shared context
pub struct InjectingClassRunner {
    inner: BlockClassRunner,
    context: Arc<ApplicationContext>,
}

impl InjectingClassRunner {
    /// Create the runner for `class`, sharing `context`
    ///
    /// Fails when the class is not a valid class runner.
    pub fn new(class: TestClass, context: Arc<ApplicationContext>) -> Result<Self> {
        let shared = Arc::clone(&context);
        let inner = BlockClassRunner::new(class)?.decorate_setup(move |standard| {
            Box::new(InjectingSetup::new(shared, standard)) as Box<dyn SetupWrapper>
        });
        Ok(Self { inner, context })
    }

    /// The context instances are autowired from
    pub fn context(&self) -> &Arc<ApplicationContext> {
        &self.context
    }

    /// The class this runner runs
    pub fn test_class(&self) -> &TestClass {
        self.inner.test_class()
    }
}

impl Runner for InjectingClassRunner {
    fn description(&self) -> Description {
        self.inner.description()
    }

    fn test_count(&self) -> usize {
        self.inner.test_count()
    }

    fn run(&self, notifier: &RunNotifier) {
        self.inner.run(notifier);
    }
}
