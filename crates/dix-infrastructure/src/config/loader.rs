//! Configuration loader
//!
//! Sources are merged in this order, later sources override earlier ones:
//! 1. Default values from `DixConfig::default()`
//! 2. TOML configuration file (explicit path, or the first one discovered)
//! 3. Environment variables prefixed `DIX_`, nested keys split on `__`
//!    (e.g. `DIX_LOGGING__LEVEL=debug`)

use std::env;
use std::path::{Path, PathBuf};

use dix_domain::constants::{HINT_ASSIGNMENT_SEPARATOR, HINT_KEY_SEPARATOR};
use dix_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use crate::config::DixConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    LOCAL_CONFIG_DIR,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
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

    /// Load configuration from all sources
    pub fn load(&self) -> Result<DixConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(DixConfig::default()));

        match &self.config_path {
            Some(config_path) if config_path.exists() => {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            }
            Some(config_path) => log_config_loaded(config_path, false),
            None => {
                if let Some(default_path) = Self::find_default_config_path() {
                    figment = figment.merge(Toml::file(&default_path));
                    log_config_loaded(&default_path, true);
                }
            }
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let config: DixConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &DixConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).config_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(LOCAL_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

/// Validate container configuration
pub fn validate_config(config: &DixConfig) -> Result<()> {
    validate_namespace(&config.default_namespace)?;
    if config.hint_pool_capacity == 0 {
        return Err(Error::configuration("Hint pool capacity cannot be 0"));
    }
    parse_log_level(&config.logging.level)?;
    config.hint_keys.validate()?;
    Ok(())
}

fn validate_namespace(namespace: &str) -> Result<()> {
    if namespace.is_empty() {
        return Err(Error::configuration("Default namespace cannot be empty"));
    }
    if namespace.contains([HINT_ASSIGNMENT_SEPARATOR, HINT_KEY_SEPARATOR]) {
        return Err(Error::configuration(format!(
            "Default namespace `{namespace}` cannot contain `{HINT_ASSIGNMENT_SEPARATOR}` or `{HINT_KEY_SEPARATOR}`"
        )));
    }
    Ok(())
}
