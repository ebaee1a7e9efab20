//! Application context over a dill catalog
//!
//! The context owns exactly one singleton per bean type. Beans are
//! registered through [`ApplicationContextBuilder`] (directly, or by
//! component factories during context loading) and the catalog is frozen
//! by [`ApplicationContextBuilder::build`].
//!
//! ```text
//! ContextLoader (TOML)      ApplicationContextBuilder      ApplicationContext
//! ────────────────────      ─────────────────────────      ──────────────────
//! [[beans]] definitions  →  register_bean(id, value)   →   get_bean::<T>()
//!                           CatalogBuilder::add_value       Catalog::get_one::<T>()
//! ```

use std::any::{TypeId, type_name};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use dill::{Catalog, CatalogBuilder};
use suitewire_domain::error::{Error, Result};
use tracing::{debug, info};
use uuid::Uuid;

use super::autowire::Autowire;

/// Metadata kept for every registered bean
#[derive(Debug, Clone)]
pub struct BeanInfo {
    /// Unique bean id
    pub id: String,
    /// Component that produced the bean
    pub component: String,
    /// Rust type name of the bean value
    pub type_name: &'static str,
    type_id: TypeId,
}

/// The dependency injection container shared by a suite
///
/// Immutable once built; every lookup takes `&self`, so a single context
/// can be shared behind an `Arc` by runners executing on several threads.
pub struct ApplicationContext {
    id: Uuid,
    catalog: Catalog,
    beans: Vec<BeanInfo>,
}

impl ApplicationContext {
    /// Start building a context
    pub fn builder() -> ApplicationContextBuilder {
        ApplicationContextBuilder::new()
    }

    /// An empty context with no beans
    pub fn empty() -> Self {
        Self::builder().build()
    }

    /// Unique id of this context instance
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get the singleton bean of type `T`
    ///
    /// Every call returns a clone of the same `Arc`.
    pub fn get_bean<T>(&self) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        if !self.contains_bean_of_type::<T>() {
            return Err(Error::no_such_bean(type_name::<T>()));
        }
        self.catalog
            .get_one::<T>()
            .map_err(|e| Error::no_such_bean(format!("{}: {e}", type_name::<T>())))
    }

    /// Get a bean by id, checking that it holds a `T`
    pub fn get_bean_named<T>(&self, id: &str) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let info = self
            .beans
            .iter()
            .find(|bean| bean.id == id)
            .ok_or_else(|| Error::no_such_bean(format!("bean named '{id}'")))?;

        if info.type_id != TypeId::of::<T>() {
            return Err(Error::BeanNotOfRequiredType {
                id: id.to_string(),
                expected: type_name::<T>().to_string(),
                actual: info.type_name.to_string(),
            });
        }
        self.get_bean::<T>()
    }

    /// Whether a bean with the given id exists
    pub fn contains_bean(&self, id: &str) -> bool {
        self.beans.iter().any(|bean| bean.id == id)
    }

    /// Whether a bean of type `T` exists
    pub fn contains_bean_of_type<T: 'static>(&self) -> bool {
        let wanted = TypeId::of::<T>();
        self.beans.iter().any(|bean| bean.type_id == wanted)
    }

    /// Bean ids in registration order
    pub fn bean_names(&self) -> Vec<&str> {
        self.beans.iter().map(|bean| bean.id.as_str()).collect()
    }

    /// Metadata of every registered bean, in registration order
    pub fn beans(&self) -> &[BeanInfo] {
        &self.beans
    }

    /// Number of registered beans
    pub fn bean_count(&self) -> usize {
        self.beans.len()
    }

    /// Populate the injectable fields of `target` from this context
    ///
    /// Errors from unresolved dependencies are returned unchanged.
    pub fn autowire_bean<A>(&self, target: &mut A) -> Result<()>
    where
        A: Autowire + ?Sized,
    {
        debug!(context = %self.id, "Autowiring bean");
        target.autowire(self)
    }

    /// Fill a required dependency slot
    pub fn inject<T>(&self, slot: &mut Option<Arc<T>>) -> Result<()>
    where
        T: Send + Sync + 'static,
    {
        *slot = Some(self.get_bean::<T>()?);
        Ok(())
    }

    /// Fill an optional dependency slot, leaving it empty when no bean exists
    pub fn inject_optional<T>(&self, slot: &mut Option<Arc<T>>) -> Result<()>
    where
        T: Send + Sync + 'static,
    {
        if self.contains_bean_of_type::<T>() {
            self.inject(slot)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ApplicationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationContext")
            .field("id", &self.id)
            .field("beans", &self.bean_names())
            .finish_non_exhaustive()
    }
}

/// Collects beans and freezes them into an [`ApplicationContext`]
pub struct ApplicationContextBuilder {
    catalog: CatalogBuilder,
    beans: Vec<BeanInfo>,
    types: HashSet<TypeId>,
}

impl ApplicationContextBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            catalog: CatalogBuilder::new(),
            beans: Vec::new(),
            types: HashSet::new(),
        }
    }

    /// Register a singleton bean
    ///
    /// Bean ids and bean types are both unique within a context.
    pub fn register_bean<T, I, C>(&mut self, id: I, component: C, value: T) -> Result<&mut Self>
    where
        T: Send + Sync + 'static,
        I: Into<String>,
        C: Into<String>,
    {
        let id = id.into();
        if self.beans.iter().any(|bean| bean.id == id) {
            return Err(Error::duplicate_bean(format!("bean id '{id}' already registered")));
        }
        let type_id = TypeId::of::<T>();
        if !self.types.insert(type_id) {
            return Err(Error::duplicate_bean(format!(
                "a bean of type '{}' is already registered (while registering '{id}')",
                type_name::<T>()
            )));
        }

        debug!(bean = %id, bean_type = type_name::<T>(), "Registering bean");
        self.catalog.add_value(value);
        self.beans.push(BeanInfo {
            id,
            component: component.into(),
            type_name: type_name::<T>(),
            type_id,
        });
        Ok(self)
    }

    /// Register a bean whose id is its type name without module paths
    ///
    /// Generic arguments are kept, so `Vec<my::Foo>` gets the id `Vec<Foo>`.
    pub fn with_bean<T>(mut self, value: T) -> Result<Self>
    where
        T: Send + Sync + 'static,
    {
        let name = type_name::<T>();
        self.register_bean(short_type_name(name), name, value)?;
        Ok(self)
    }

    /// Number of beans registered so far
    pub fn bean_count(&self) -> usize {
        self.beans.len()
    }

    /// Freeze the registered beans into a context
    pub fn build(mut self) -> ApplicationContext {
        let context = ApplicationContext {
            id: Uuid::new_v4(),
            catalog: self.catalog.build(),
            beans: self.beans,
        };
        info!(
            context = %context.id,
            beans = context.bean_count(),
            "Application context built"
        );
        context
    }
}

impl Default for ApplicationContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip module paths from every path segment of a type name
fn short_type_name(name: &str) -> String {
    let mut short = String::with_capacity(name.len());
    let mut start = 0;
    for (index, c) in name.char_indices() {
        if matches!(c, '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';') {
            short.push_str(last_segment(&name[start..index]));
            short.push(c);
            start = index + c.len_utf8();
        }
    }
    short.push_str(last_segment(&name[start..]));
    short
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
