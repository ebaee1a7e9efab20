//! Test instances

use downcast_rs::Downcast;

use crate::context::Autowire;

/// A freshly constructed test object
///
/// One instance is created per test method. Every instance can be
/// autowired; objects without dependencies use the no-op default.
/// Typed procedures recover the concrete type through
/// [`Downcast::as_any_mut`].
pub trait TestInstance: Autowire + Downcast + Send {}

impl<T> TestInstance for T where T: Autowire + Send + 'static {}
