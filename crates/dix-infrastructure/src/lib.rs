//! # dix Infrastructure Layer
//!
//! Registries and the resolution engine, plus the ambient services around
//! them.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | `Container`, binding and provider registries, field cache, cycle guard, hint pool |
//! | [`config`] | `DixConfig` and its figment-based loader |
//! | [`logging`] | tracing subscriber bootstrap |
//! | [`diagnostics`] | process-wide trace toggle |
//! | [`error_ext`] | context helpers for foreign errors |
//! | [`constants`] | config file names, env prefixes, pool sizing |

pub mod config;
pub mod constants;
pub mod di;
pub mod diagnostics;
pub mod error_ext;
pub mod logging;

pub use config::{ConfigLoader, DixConfig, LoggingConfig};
pub use di::Container;
pub use error_ext::ErrorContext;
