//! Everything a suite author usually needs

pub use suitewire_application::context::{ApplicationContext, Autowire};
pub use suitewire_application::framework::{
    ExecutionMode, Launcher, RunSummary, Runner, TestClass,
};
pub use suitewire_application::use_cases::{ContextSuite, SuiteBuilder, SuiteDeclaration};
pub use suitewire_domain::value_objects::ConfigLocations;
pub use suitewire_infrastructure::config::SuiteSettings;
pub use suitewire_infrastructure::di::{Properties, TomlContextLoader};
