//! Domain Value Objects
//!
//! Immutable value objects shared by the container and the runners.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`DeclarationKind`] | Metadata a suite declaration must carry |
//! | [`ConfigLocations`] | Ordered context definition locators |
//! | [`Description`] | Reported identity of a suite, class or test |

/// Suite declaration metadata kinds
pub mod declaration;
/// Runner and test descriptions
pub mod description;
/// Context configuration locators
pub mod locations;

pub use declaration::DeclarationKind;
pub use description::Description;
pub use locations::ConfigLocations;
