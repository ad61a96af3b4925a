//! Infrastructure layer constants
//!
//! Config file locations, environment prefixes and pool sizing. Hint keys
//! live in `dix_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "dix.toml";

/// Directory name under the user config dir (`~/.config/dix/dix.toml`)
pub const DEFAULT_CONFIG_DIR: &str = "dix";

/// Project-local configuration directory (`./config/dix.toml`)
pub const LOCAL_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "DIX";

/// Separator between nested keys in environment overrides (`DIX_LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable holding a full tracing filter directive
pub const LOG_ENV_VAR: &str = "DIX_LOG";

/// Level used when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Tracing target of the diagnostic trace lines
pub const LOG_TARGET: &str = "dix";

// ============================================================================
// ENGINE CONSTANTS
// ============================================================================

/// Number of idle hints the pool keeps for reuse
pub const HINT_POOL_CAPACITY: usize = 64;
