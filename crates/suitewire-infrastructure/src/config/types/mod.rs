//! Configuration types module

pub mod app;
pub mod execution;
pub mod logging;
pub mod resources;

// Re-export main types
pub use app::SuiteSettings;
pub use execution::ExecutionConfig;
pub use logging::LoggingConfig;
pub use resources::ResourcesConfig;
