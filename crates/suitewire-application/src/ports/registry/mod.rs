//! Component Registry System
//!
//! Defines the auto-registration infrastructure for bean components.
//! Uses the `linkme` crate for compile-time registration of components
//! that context definitions refer to by name.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Component Registration Flow                     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Component defines: #[linkme::distributed_slice(COMPONENTS)] │
//! │                        static ENTRY: ComponentEntry = ...       │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static COMPONENTS: [Entry] = [..]    │
//! │                              ↓                                  │
//! │  3. Loader queries:    resolve_component(name)                  │
//! │                              ↓                                  │
//! │  4. Definition selects: component = "properties" → Properties   │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use suitewire_application::ports::registry::{ComponentEntry, COMPONENTS};
//!
//! #[linkme::distributed_slice(COMPONENTS)]
//! static CALLER_TRACKER: ComponentEntry = ComponentEntry {
//!     name: "caller-tracker",
//!     description: "Records which tests called it",
//!     factory: |definition, builder| {
//!         builder
//!             .register_bean(&definition.id, &definition.component, CallerTracker::default())
//!             .map(|_| ())
//!             .map_err(|e| e.to_string())
//!     },
//! };
//! ```

pub mod component;

pub use component::{
    BeanDefinition, COMPONENTS, ComponentEntry, list_components, resolve_component,
};
