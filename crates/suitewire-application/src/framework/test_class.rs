//! Test class descriptors

use std::fmt;
use std::sync::Arc;

use suitewire_domain::value_objects::Description;

use super::instance::TestInstance;
use super::method::{ClassHook, FrameworkMethod, MethodKind};
use super::outcome::{IntoOutcome, TestError, catch_failure};

type Constructor = Arc<dyn Fn() -> Box<dyn TestInstance> + Send + Sync>;

/// Describes a test class: how to construct instances and which
/// procedures to run on them
///
/// ```ignore
/// let class = TestClass::builder("TestClass1", TestClass1::default)
///     .before("set_up", TestClass1::set_up)
///     .test("test_method1", TestClass1::test_method1)
///     .test("test_method2", TestClass1::test_method2)
///     .build();
/// ```
#[derive(Clone)]
pub struct TestClass {
    name: String,
    constructor: Constructor,
    befores: Vec<FrameworkMethod>,
    tests: Vec<FrameworkMethod>,
    afters: Vec<FrameworkMethod>,
    before_class: Vec<ClassHook>,
    after_class: Vec<ClassHook>,
    ignore_reason: Option<String>,
}

impl TestClass {
    /// Start describing a class whose instances are made by `constructor`
    pub fn builder<T, F>(name: impl Into<String>, constructor: F) -> TestClassBuilder<T>
    where
        T: TestInstance,
        F: Fn() -> T + Send + Sync + 'static,
    {
        TestClassBuilder::new(name, constructor)
    }

    /// Class name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description of the class as a whole
    pub fn description(&self) -> Description {
        Description::suite(&self.name)
    }

    /// Description of one of the class's test methods
    pub fn describe_method(&self, method: &FrameworkMethod) -> Description {
        Description::test(&self.name, method.name())
    }

    /// Per-test setup procedures, in declaration order
    pub fn befores(&self) -> &[FrameworkMethod] {
        &self.befores
    }

    /// Test methods, in declaration order
    pub fn tests(&self) -> &[FrameworkMethod] {
        &self.tests
    }

    /// Per-test teardown procedures, in declaration order
    pub fn afters(&self) -> &[FrameworkMethod] {
        &self.afters
    }

    /// Hooks run once before any test method
    pub fn before_class(&self) -> &[ClassHook] {
        &self.before_class
    }

    /// Hooks run once after all test methods
    pub fn after_class(&self) -> &[ClassHook] {
        &self.after_class
    }

    /// Reason the whole class is skipped, if it is
    pub fn ignore_reason(&self) -> Option<&str> {
        self.ignore_reason.as_deref()
    }

    /// Construct a fresh instance
    pub fn create_instance(&self) -> Result<Box<dyn TestInstance>, TestError> {
        let mut instance = None;
        catch_failure(|| {
            instance = Some((self.constructor)());
            Ok(())
        })?;
        instance.ok_or_else(|| TestError::Failed(format!("cannot construct '{}'", self.name)))
    }
}

impl fmt::Debug for TestClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestClass")
            .field("name", &self.name)
            .field("befores", &self.befores)
            .field("tests", &self.tests)
            .field("afters", &self.afters)
            .field("ignore_reason", &self.ignore_reason)
            .finish_non_exhaustive()
    }
}

/// Builder for [`TestClass`]
pub struct TestClassBuilder<T> {
    class: TestClass,
    _instance: std::marker::PhantomData<fn() -> T>,
}

impl<T: TestInstance> TestClassBuilder<T> {
    fn new<F>(name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        let constructor: Constructor =
            Arc::new(move || Box::new(constructor()) as Box<dyn TestInstance>);
        Self {
            class: TestClass {
                name: name.into(),
                constructor,
                befores: Vec::new(),
                tests: Vec::new(),
                afters: Vec::new(),
                before_class: Vec::new(),
                after_class: Vec::new(),
                ignore_reason: None,
            },
            _instance: std::marker::PhantomData,
        }
    }

    /// Add a per-test setup procedure
    pub fn before<F, R>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut T) -> R + Send + Sync + 'static,
        R: IntoOutcome,
    {
        self.class
            .befores
            .push(FrameworkMethod::new(name, MethodKind::Before, body));
        self
    }

    /// Add a test method
    pub fn test<F, R>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut T) -> R + Send + Sync + 'static,
        R: IntoOutcome,
    {
        self.class
            .tests
            .push(FrameworkMethod::new(name, MethodKind::Test, body));
        self
    }

    /// Add a test method that is reported as ignored instead of running
    pub fn ignore<F, R>(mut self, name: impl Into<String>, reason: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut T) -> R + Send + Sync + 'static,
        R: IntoOutcome,
    {
        self.class
            .tests
            .push(FrameworkMethod::new(name, MethodKind::Test, body).ignored(reason));
        self
    }

    /// Add a per-test teardown procedure
    pub fn after<F, R>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut T) -> R + Send + Sync + 'static,
        R: IntoOutcome,
    {
        self.class
            .afters
            .push(FrameworkMethod::new(name, MethodKind::After, body));
        self
    }

    /// Add a hook that runs once before the class's tests
    pub fn before_class<F, R>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: IntoOutcome,
    {
        self.class.before_class.push(ClassHook::new(name, body));
        self
    }

    /// Add a hook that runs once after the class's tests
    pub fn after_class<F, R>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: IntoOutcome,
    {
        self.class.after_class.push(ClassHook::new(name, body));
        self
    }

    /// Skip every test of the class
    pub fn ignored(mut self, reason: impl Into<String>) -> Self {
        self.class.ignore_reason = Some(reason.into());
        self
    }

    /// Finish the descriptor
    pub fn build(self) -> TestClass {
        self.class
    }
}
