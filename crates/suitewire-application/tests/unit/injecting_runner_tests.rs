//! Unit tests for the injecting class runner

use std::sync::{Arc, Mutex};

use suitewire_application::context::{ApplicationContext, Autowire};
use suitewire_application::framework::{
    ExecutionMode, FailureKind, Launcher, Runner, Suite, TestClass,
};
use suitewire_application::use_cases::InjectingClassRunner;
use suitewire_domain::error::Result;

use crate::fixtures::{
    CallerTracker, UnregisteredBean, order_probe_class, tracker_context, tracker_user_class,
};

fn events() -> Arc<Mutex<Vec<String>>> {
    Arc::new(Mutex::new(Vec::new()))
}

#[test]
fn test_injection_precedes_setup_for_every_instance() {
    let log = events();
    let context = Arc::new(tracker_context());
    let runner =
        InjectingClassRunner::new(order_probe_class("Probe", Arc::clone(&log), None), context)
            .unwrap();

    let summary = Launcher::new().run(&runner);

    assert!(summary.was_successful(), "{:?}", summary.failures);
    assert_eq!(summary.run_count, 3);
    let log = log.lock().unwrap();
    let expected = [
        "inject",
        "before(injected=true)",
        "test_one",
        "after",
        "inject",
        "before(injected=true)",
        "test_two",
        "after",
        "inject",
        "before(injected=true)",
        "test_three",
        "after",
    ];
    assert_eq!(*log, expected);
}

#[test]
fn test_injection_happens_once_per_instance() {
    let log = events();
    let runner = InjectingClassRunner::new(
        order_probe_class("Probe", Arc::clone(&log), None),
        Arc::new(tracker_context()),
    )
    .unwrap();

    Launcher::new().run(&runner);

    let injections = log.lock().unwrap().iter().filter(|e| *e == "inject").count();
    assert_eq!(injections, runner.test_count());
}

#[test]
fn test_failed_injection_fails_only_that_test() {
    let log = events();
    let runner = InjectingClassRunner::new(
        order_probe_class("Probe", Arc::clone(&log), Some(2)),
        Arc::new(tracker_context()),
    )
    .unwrap();

    let summary = Launcher::new().run(&runner);

    assert_eq!(summary.run_count, 3);
    assert_eq!(summary.failure_count(), 1);
    let failure = summary.failure_for("test_two(Probe)").unwrap();
    assert_eq!(failure.kind(), FailureKind::Error);
    assert!(failure.message().contains("UnregisteredBean"));
    assert!(summary.passed("test_one(Probe)"));
    assert!(summary.passed("test_three(Probe)"));

    let log = log.lock().unwrap();
    assert!(!log.contains(&"test_two".to_string()));
    assert_eq!(
        log.iter().filter(|e| e.starts_with("before")).count(),
        2,
        "setup must not run after a failed injection"
    );
}

#[test]
fn test_runner_uses_the_given_context() {
    let context = Arc::new(tracker_context());
    let runner = InjectingClassRunner::new(
        order_probe_class("Probe", events(), None),
        Arc::clone(&context),
    )
    .unwrap();

    assert!(Arc::ptr_eq(runner.context(), &context));
    assert_eq!(runner.description().to_string(), "Probe");

    Launcher::new().run(&runner);
    let tracker = context.get_bean::<CallerTracker>().unwrap();
    assert_eq!(tracker.callers(), vec!["probe-one", "probe-two", "probe-three"]);
}

/// Class whose autowiring panics instead of returning an error
#[derive(Default)]
struct PanickingWiring {
    dependency: Option<Arc<UnregisteredBean>>,
}

impl Autowire for PanickingWiring {
    fn autowire(&mut self, context: &ApplicationContext) -> Result<()> {
        self.dependency = Some(
            context
                .get_bean::<UnregisteredBean>()
                .expect("dependency must be registered"),
        );
        Ok(())
    }
}

fn panicking_wiring_class() -> TestClass {
    TestClass::builder("PanickingWiring", PanickingWiring::default)
        .test("test_dependency", |t: &mut PanickingWiring| {
            assert!(t.dependency.is_some());
        })
        .build()
}

fn mixed_suite(context: &Arc<ApplicationContext>, mode: ExecutionMode) -> Suite {
    let children: Vec<Box<dyn Runner>> = vec![
        Box::new(InjectingClassRunner::new(panicking_wiring_class(), Arc::clone(context)).unwrap()),
        Box::new(
            InjectingClassRunner::new(tracker_user_class("TestClassB"), Arc::clone(context))
                .unwrap(),
        ),
    ];
    Suite::new("Mixed", children).with_mode(mode)
}

#[test]
fn test_panicking_autowire_fails_only_its_own_test() {
    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        let context = Arc::new(tracker_context());
        let summary = Launcher::new().run(&mixed_suite(&context, mode));

        assert_eq!(summary.run_count, 3, "{mode:?}");
        assert_eq!(summary.failure_count(), 1, "{mode:?}");
        let failure = summary
            .failure_for("test_dependency(PanickingWiring)")
            .unwrap();
        assert_eq!(failure.kind(), FailureKind::Assertion);
        assert!(failure.message().contains("dependency must be registered"));
        assert!(summary.passed("test_method1(TestClassB)"));
        assert!(summary.passed("test_method2(TestClassB)"));

        let tracker = context.get_bean::<CallerTracker>().unwrap();
        assert_eq!(tracker.callers().len(), 2);
    }
}
