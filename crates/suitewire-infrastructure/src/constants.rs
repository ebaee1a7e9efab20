//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `suitewire_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "suitewire.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "suitewire";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SUITEWIRE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "SUITEWIRE_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file stem when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "suitewire";

/// Maximum number of daily log files kept
pub const LOG_MAX_FILES: usize = 5;

// ============================================================================
// CONTEXT DEFINITION CONSTANTS
// ============================================================================

/// Maximum depth of nested `imports`
pub const MAX_IMPORT_DEPTH: usize = 32;
