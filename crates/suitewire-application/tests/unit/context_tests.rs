//! Unit tests for the application context

use std::sync::Arc;

use suitewire_application::context::{ApplicationContext, Autowire};
use suitewire_domain::error::{Error, Result};

use crate::fixtures::{CallerTracker, UnregisteredBean, tracker_context};

#[derive(Debug, PartialEq)]
struct Endpoint(String);

#[test]
fn test_bean_identity_is_stable() {
    let context = tracker_context();
    let first = context.get_bean::<CallerTracker>().unwrap();
    let second = context.get_bean::<CallerTracker>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_register_bean_records_metadata() {
    let mut builder = ApplicationContext::builder();
    builder
        .register_bean("tracker", "caller-tracker", CallerTracker::default())
        .unwrap()
        .register_bean("endpoint", "endpoint", Endpoint("http://localhost".into()))
        .unwrap();
    let context = builder.build();

    assert_eq!(context.bean_count(), 2);
    assert_eq!(context.bean_names(), vec!["tracker", "endpoint"]);
    assert!(context.contains_bean("endpoint"));
    assert!(!context.contains_bean("missing"));
    assert_eq!(context.beans()[0].component, "caller-tracker");
}

#[test]
fn test_duplicate_id_rejected() {
    let mut builder = ApplicationContext::builder();
    builder
        .register_bean("shared", "a", CallerTracker::default())
        .unwrap();
    let err = builder
        .register_bean("shared", "b", Endpoint("x".into()))
        .err()
        .unwrap();
    assert!(matches!(err, Error::DuplicateBean { .. }));
}

#[test]
fn test_duplicate_type_rejected() {
    let mut builder = ApplicationContext::builder();
    builder
        .register_bean("first", "tracker", CallerTracker::default())
        .unwrap();
    let err = builder
        .register_bean("second", "tracker", CallerTracker::default())
        .err()
        .unwrap();
    assert!(err.to_string().contains("CallerTracker"));
}

#[test]
fn test_get_bean_named() {
    let mut builder = ApplicationContext::builder();
    builder
        .register_bean("endpoint", "endpoint", Endpoint("http://localhost".into()))
        .unwrap();
    let context = builder.build();

    let endpoint = context.get_bean_named::<Endpoint>("endpoint").unwrap();
    assert_eq!(endpoint.0, "http://localhost");

    let wrong_type = context.get_bean_named::<CallerTracker>("endpoint");
    assert!(matches!(wrong_type, Err(Error::BeanNotOfRequiredType { .. })));

    let unknown = context.get_bean_named::<Endpoint>("nope");
    assert!(matches!(unknown, Err(Error::NoSuchBean { .. })));
}

#[test]
fn test_contexts_are_distinct() {
    let a = tracker_context();
    let b = tracker_context();
    assert_ne!(a.id(), b.id());
    let ta = a.get_bean::<CallerTracker>().unwrap();
    let tb = b.get_bean::<CallerTracker>().unwrap();
    assert!(!Arc::ptr_eq(&ta, &tb));
}

struct Holder {
    required: Option<Arc<CallerTracker>>,
    optional: Option<Arc<UnregisteredBean>>,
}

impl Autowire for Holder {
    fn autowire(&mut self, context: &ApplicationContext) -> Result<()> {
        context.inject(&mut self.required)?;
        context.inject_optional(&mut self.optional)
    }
}

#[test]
fn test_autowire_bean_populates_fields() {
    let context = tracker_context();
    let mut holder = Holder {
        required: None,
        optional: None,
    };
    context.autowire_bean(&mut holder).unwrap();

    let expected = context.get_bean::<CallerTracker>().unwrap();
    assert!(Arc::ptr_eq(holder.required.as_ref().unwrap(), &expected));
    assert!(holder.optional.is_none());
}

#[test]
fn test_autowire_bean_missing_dependency_fails() {
    let context = ApplicationContext::empty();
    let mut holder = Holder {
        required: None,
        optional: None,
    };
    let err = context.autowire_bean(&mut holder).unwrap_err();
    assert!(matches!(err, Error::NoSuchBean { .. }));
    assert!(holder.required.is_none());
}

struct NothingToInject;

impl Autowire for NothingToInject {}

#[test]
fn test_default_autowire_is_noop() {
    let context = ApplicationContext::empty();
    assert!(context.autowire_bean(&mut NothingToInject).is_ok());
}
