//! Suites built from TOML resources and run through the launcher

use std::sync::Arc;

use suitewire::domain::Error;
use suitewire::prelude::*;
use suitewire::run_suite_with;

use crate::fixtures::{
    CallerTracker, greeting_class, needs_undeclared_class, resources, settings,
    tracker_user_class,
};

fn all_tests(location: &str) -> SuiteDeclaration {
    SuiteDeclaration::builder("AllTests")
        .suite_classes([
            tracker_user_class("TestClassA"),
            tracker_user_class("TestClassB"),
        ])
        .context_configuration(location)
        .build()
}

fn build(declaration: SuiteDeclaration) -> suitewire::Result<ContextSuite> {
    let loader = Arc::new(TomlContextLoader::new(resources()));
    ContextSuite::new(declaration, &SuiteBuilder::new(loader))
}

#[test]
fn test_member_classes_share_one_tracker() {
    let suite = build(all_tests("context.toml")).unwrap();

    assert_eq!(suite.children().len(), 2);
    assert_eq!(suite.test_count(), 4);

    let summary = Launcher::new().run(&suite);
    assert!(summary.was_successful(), "{summary}");
    assert_eq!(summary.run_count, 4);
    assert!(summary.passed("test_method1(TestClassA)"));
    assert!(summary.passed("test_method2(TestClassB)"));

    let tracker = suite.context().get_bean::<CallerTracker>().unwrap();
    assert_eq!(
        tracker.callers(),
        vec![
            "TestClassA-method1",
            "TestClassA-method2",
            "TestClassB-method1",
            "TestClassB-method2",
        ]
    );
}

#[test]
fn test_imported_properties_are_injected() {
    let declaration = SuiteDeclaration::builder("GreetingSuite")
        .suite_classes([greeting_class()])
        .context_configuration("file:context.toml")
        .build();
    let suite = build(declaration).unwrap();

    assert_eq!(
        suite.context().bean_names(),
        vec!["suite-properties", "tracker"]
    );
    let summary = Launcher::new().run(&suite);
    assert!(summary.was_successful(), "{summary}");
}

#[test]
fn test_run_suite_with_settings_in_parallel() {
    let summary = run_suite_with(all_tests("context.toml"), &settings(true)).unwrap();
    assert_eq!(summary.run_count, 4);
    assert!(summary.was_successful(), "{summary}");
}

#[test]
fn test_run_suite_with_settings_sequentially() {
    let summary = run_suite_with(all_tests("context.toml"), &settings(false)).unwrap();
    assert_eq!(summary.run_count, 4);
    assert_eq!(summary.failure_count(), 0);
}

#[test]
fn test_unresolvable_location_fails_before_running() {
    let err = run_suite_with(all_tests("missing-context.toml"), &settings(false)).unwrap_err();
    let root = err.downcast_ref::<Error>().unwrap();
    assert!(matches!(root, Error::Configuration { .. }));
    assert!(err.to_string().contains("Failed to build suite 'AllTests'"));
}

#[test]
fn test_missing_context_configuration_fails() {
    let declaration = SuiteDeclaration::builder("AllTests")
        .suite_classes([tracker_user_class("TestClassA")])
        .build();

    let err = run_suite_with(declaration, &settings(false)).unwrap_err();
    let root = err.downcast_ref::<Error>().unwrap();
    assert!(root.is_initialization());
    assert!(root.to_string().contains("ContextConfiguration"));
}

#[test]
fn test_factory_failure_prevents_the_suite() {
    let declaration = SuiteDeclaration::builder("Broken")
        .suite_classes([tracker_user_class("TestClassA")])
        .context_configuration("broken.toml")
        .build();

    let err = build(declaration).err().unwrap();
    match err {
        Error::BeanCreation {
            bean, component, ..
        } => {
            assert_eq!(bean, "tracker");
            assert_eq!(component, "caller-tracker");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unresolved_dependency_fails_each_test() {
    let declaration = SuiteDeclaration::builder("Mixed")
        .suite_classes([needs_undeclared_class(), tracker_user_class("TestClassA")])
        .context_configuration("context.toml")
        .build();
    let suite = build(declaration).unwrap();

    let summary = Launcher::new().run(&suite);
    assert_eq!(summary.run_count, 3);
    assert_eq!(summary.failure_count(), 1);

    let failure = summary
        .failure_for("test_dependency(NeedsUndeclared)")
        .unwrap();
    assert!(failure.message().contains("No such bean"));
    assert!(summary.passed("test_method1(TestClassA)"));
}
