//! Domain layer constants
//!
//! Infrastructure-specific constants remain in
//! `suitewire_infrastructure::constants`.

// ============================================================================
// CONTEXT CONFIGURATION CONSTANTS
// ============================================================================

/// Optional scheme accepted in front of context definition locators
pub const FILE_LOCATION_PREFIX: &str = "file:";

/// Component name of the built-in properties bean
pub const PROPERTIES_COMPONENT: &str = "properties";

// ============================================================================
// REPORTING CONSTANTS
// ============================================================================

/// Message recorded for ignored tests without an explicit reason
pub const DEFAULT_IGNORE_REASON: &str = "ignored";
