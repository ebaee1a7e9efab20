//! Field injection contract

use suitewire_domain::error::Result;

use super::ApplicationContext;

/// An object whose dependency slots can be populated from a context
///
/// Implementors fill their own fields, typically with
/// [`ApplicationContext::inject`]. Objects without dependencies keep the
/// default no-op body.
///
/// ```ignore
/// struct TestClass1 {
///     component: Option<Arc<CallerTracker>>,
/// }
///
/// impl Autowire for TestClass1 {
///     fn autowire(&mut self, context: &ApplicationContext) -> Result<()> {
///         context.inject(&mut self.component)
///     }
/// }
/// ```
pub trait Autowire {
    /// Populate injectable fields, failing if a required bean is missing
    fn autowire(&mut self, context: &ApplicationContext) -> Result<()> {
        let _ = context;
        Ok(())
    }
}
