//! Configuration loader
//!
//! Handles loading suite settings from TOML files, environment variables
//! and default values.

use crate::config::SuiteSettings;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};
use suitewire_domain::error::{Error, Result};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load settings from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `SuiteSettings::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `SUITEWIRE__EXECUTION__PARALLEL`)
    pub fn load(&self) -> Result<SuiteSettings> {
        let mut figment = Figment::new().merge(Serialized::defaults(SuiteSettings::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nested keys (e.g., SUITEWIRE__LOGGING__LEVEL)
        figment = figment.merge(
            Env::prefixed(&format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let settings: SuiteSettings = figment
            .extract()
            .config_context("Failed to extract suite settings")?;

        validate_settings(&settings)?;

        Ok(settings)
    }

    /// Save settings to file
    pub fn save_to_file<P: AsRef<Path>>(&self, settings: &SuiteSettings, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(settings).context("Failed to serialize settings to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write settings file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.is_file())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate suite settings
pub fn validate_settings(settings: &SuiteSettings) -> Result<()> {
    validate_logging_config(settings)?;
    validate_resources_config(settings)?;
    Ok(())
}

fn validate_logging_config(settings: &SuiteSettings) -> Result<()> {
    parse_log_level(&settings.logging.level)?;
    if settings.logging.file_output.is_some() && settings.logging.max_files == 0 {
        return Err(Error::Configuration {
            message: "Maximum log files cannot be 0 when file output is enabled".to_string(),
            source: None,
        });
    }
    Ok(())
}

fn validate_resources_config(settings: &SuiteSettings) -> Result<()> {
    let root = &settings.resources.root;
    if root.as_os_str().is_empty() {
        return Err(Error::Configuration {
            message: "Resource root cannot be empty".to_string(),
            source: None,
        });
    }
    if root.exists() && !root.is_dir() {
        return Err(Error::Configuration {
            message: format!("Resource root {} is not a directory", root.display()),
            source: None,
        });
    }
    Ok(())
}
