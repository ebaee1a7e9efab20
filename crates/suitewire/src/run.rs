//! Suite entry points

use std::sync::Arc;

use anyhow::Context;
use suitewire_application::framework::{Launcher, RunSummary};
use suitewire_application::use_cases::{ContextSuite, SuiteBuilder, SuiteDeclaration};
use suitewire_infrastructure::config::{ConfigLoader, SuiteSettings};
use suitewire_infrastructure::di::TomlContextLoader;
use suitewire_infrastructure::logging::init_logging;
use suitewire_infrastructure::reporting::{TracingListener, render_report};
use tracing::{debug, info};

/// Run a suite with settings loaded from the default sources
pub fn run_suite(declaration: SuiteDeclaration) -> anyhow::Result<RunSummary> {
    let settings = ConfigLoader::new()
        .load()
        .context("Failed to load suite settings")?;
    run_suite_with(declaration, &settings)
}

/// Run a suite with explicit settings
///
/// Fails only when the suite cannot be built; test failures are reported
/// in the returned summary.
pub fn run_suite_with(
    declaration: SuiteDeclaration,
    settings: &SuiteSettings,
) -> anyhow::Result<RunSummary> {
    if let Err(error) = init_logging(settings.logging.clone()) {
        debug!(%error, "Logging already initialized");
    }

    let name = declaration.name().to_string();
    let loader = Arc::new(TomlContextLoader::from_config(&settings.resources));
    let builder = SuiteBuilder::new(loader);
    let suite = ContextSuite::new(declaration, &builder)
        .with_context(|| format!("Failed to build suite '{name}'"))?
        .with_mode(settings.execution.mode());

    let summary = Launcher::new()
        .with_listener(Arc::new(TracingListener))
        .run(&suite);
    info!(suite = %name, "\n{}", render_report(&summary));
    Ok(summary)
}
