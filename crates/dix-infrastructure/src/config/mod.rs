//! Configuration management
//!
//! Container settings loaded from defaults, an optional TOML file and
//! `DIX_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{DixConfig, LoggingConfig};
