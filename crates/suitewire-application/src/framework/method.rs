//! Framework methods: type-erased test, setup and teardown procedures

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use suitewire_domain::error::Error;

use super::instance::TestInstance;
use super::outcome::{IntoOutcome, Outcome, catch_failure};

type Invoker = Arc<dyn Fn(&mut dyn TestInstance) -> Outcome + Send + Sync>;
type HookBody = Arc<dyn Fn() -> Outcome + Send + Sync>;

/// Role a method plays in its class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// Runs before each test method
    Before,
    /// A test method
    Test,
    /// Runs after each test method
    After,
}

/// A named procedure invoked on a test instance
#[derive(Clone)]
pub struct FrameworkMethod {
    name: String,
    kind: MethodKind,
    ignore_reason: Option<String>,
    invoker: Invoker,
}

impl FrameworkMethod {
    /// Wrap a typed procedure of `T`
    ///
    /// The procedure is called on the instance downcast to `T`; panics
    /// become assertion failures.
    pub fn new<T, F, R>(name: impl Into<String>, kind: MethodKind, body: F) -> Self
    where
        T: TestInstance,
        F: Fn(&mut T) -> R + Send + Sync + 'static,
        R: IntoOutcome,
    {
        let invoker: Invoker = Arc::new(move |instance: &mut dyn TestInstance| {
            let target = instance.as_any_mut().downcast_mut::<T>().ok_or_else(|| {
                Error::internal(format!("test instance is not a {}", type_name::<T>()))
            })?;
            catch_failure(|| body(target).into_outcome())
        });
        Self {
            name: name.into(),
            kind,
            ignore_reason: None,
            invoker,
        }
    }

    /// Mark the method as ignored
    pub fn ignored(mut self, reason: impl Into<String>) -> Self {
        self.ignore_reason = Some(reason.into());
        self
    }

    /// Method name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Role of the method
    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    /// Reason the method is skipped, if it is
    pub fn ignore_reason(&self) -> Option<&str> {
        self.ignore_reason.as_deref()
    }

    /// Whether the method is skipped
    pub fn is_ignored(&self) -> bool {
        self.ignore_reason.is_some()
    }

    /// Invoke on a test instance
    pub fn invoke(&self, target: &mut dyn TestInstance) -> Outcome {
        (self.invoker)(target)
    }
}

impl fmt::Debug for FrameworkMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameworkMethod")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("ignore_reason", &self.ignore_reason)
            .finish_non_exhaustive()
    }
}

/// A class-level procedure that runs once around all test methods
#[derive(Clone)]
pub struct ClassHook {
    name: String,
    body: HookBody,
}

impl ClassHook {
    /// Wrap a procedure
    pub fn new<F, R>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: IntoOutcome,
    {
        Self {
            name: name.into(),
            body: Arc::new(move || catch_failure(|| body().into_outcome())),
        }
    }

    /// Hook name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the hook
    pub fn invoke(&self) -> Outcome {
        (self.body)()
    }
}

impl fmt::Debug for ClassHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassHook")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
