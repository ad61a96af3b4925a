//! Configuration types

use dix_domain::HintKeys;
use dix_domain::constants::DEFAULT_NAMESPACE;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_LEVEL, HINT_POOL_CAPACITY};

/// Container configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DixConfig {
    /// Namespace used when a binding, provider or hint names none
    pub default_namespace: String,

    /// Emit a diagnostic trace line per binding, provider and injection
    pub trace: bool,

    /// Idle hints kept by the hint pool
    pub hint_pool_capacity: usize,

    /// Logger settings
    pub logging: LoggingConfig,

    /// Names of the hint keys, `from`/`namespace`/... when unset
    pub hint_keys: HintKeys,
}

impl Default for DixConfig {
    fn default() -> Self {
        Self {
            default_namespace: DEFAULT_NAMESPACE.to_string(),
            trace: false,
            hint_pool_capacity: HINT_POOL_CAPACITY,
            logging: LoggingConfig::default(),
            hint_keys: HintKeys::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}
