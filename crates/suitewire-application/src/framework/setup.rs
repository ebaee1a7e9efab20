//! Setup and teardown wrapping
//!
//! [`SetupWrapper`] is the extension point around a test method's setup
//! phase. [`RunBefores`] is the standard behavior; decorators compose a
//! pre-step with a delegated call to it.

use super::instance::TestInstance;
use super::method::FrameworkMethod;
use super::outcome::TestError;
use super::statement::Statement;

/// Wraps the statement of a test method with its setup phase
pub trait SetupWrapper: Send + Sync {
    /// Return a statement that runs setup for `method` on `target`, then `next`
    ///
    /// Called once per constructed test instance, before the statement is
    /// evaluated.
    fn with_befores(
        &self,
        method: &FrameworkMethod,
        target: &mut dyn TestInstance,
        next: Statement,
    ) -> Statement;
}

/// Runs the class's setup procedures in order; the first failure stops
/// the remaining ones and the test body
#[derive(Debug, Clone, Default)]
pub struct RunBefores {
    befores: Vec<FrameworkMethod>,
}

impl RunBefores {
    /// Create from the class's setup procedures
    pub fn new(befores: Vec<FrameworkMethod>) -> Self {
        Self { befores }
    }
}

impl SetupWrapper for RunBefores {
    fn with_befores(
        &self,
        _method: &FrameworkMethod,
        _target: &mut dyn TestInstance,
        next: Statement,
    ) -> Statement {
        if self.befores.is_empty() {
            return next;
        }
        let befores = self.befores.clone();
        Statement::new(move |target| {
            for before in &befores {
                before.invoke(target)?;
            }
            next.evaluate(target)
        })
    }
}

/// Wrap `next` so every teardown procedure runs afterwards, even when
/// `next` or an earlier teardown failed
///
/// All failures are reported together.
pub fn with_afters(afters: &[FrameworkMethod], next: Statement) -> Statement {
    if afters.is_empty() {
        return next;
    }
    let afters = afters.to_vec();
    Statement::new(move |target| {
        let mut errors: Vec<TestError> = Vec::new();
        if let Err(e) = next.evaluate(target) {
            errors.push(e);
        }
        for after in &afters {
            if let Err(e) = after.invoke(target) {
                errors.push(e);
            }
        }
        TestError::from_errors(errors).map_or(Ok(()), Err)
    })
}
