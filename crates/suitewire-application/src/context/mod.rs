//! Dependency injection container
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ApplicationContext`] | Frozen set of singleton beans backed by a dill catalog |
//! | [`ApplicationContextBuilder`] | Registers beans before the context is frozen |
//! | [`Autowire`] | Objects whose fields the context can populate |

pub mod application_context;
pub mod autowire;

pub use application_context::{ApplicationContext, ApplicationContextBuilder, BeanInfo};
pub use autowire::Autowire;
