//! # dix
//!
//! Runtime dependency resolution. Ask for a type and get back a fully
//! populated value: named providers are consulted first, bound values and
//! structural defaults second, and the hinted fields of records are filled
//! in recursively.
//!
//! ## Example
//!
//! ```
//! use dix::{Context, record};
//!
//! record! {
//!     #[derive(Debug)]
//!     pub struct Limits {
//!         pub soft: i64 => "from:?",
//!         pub hard: i64 => "from:?;namespace:int100",
//!         pub queue: Vec<i64> => "from:?;slice_len:3",
//!     }
//! }
//!
//! dix::bind(10_i64, &[]);
//! dix::bind(100_i64, &["int100"]);
//!
//! let limits: Limits = dix::resolve(&Context::background()).unwrap();
//! assert_eq!(limits.soft, 10);
//! assert_eq!(limits.hard, 100);
//! assert_eq!(limits.queue, vec![0, 0, 0]);
//! ```
//!
//! The free functions operate on a process-wide container created on first
//! use. Call [`init`] before anything else to configure it, or build a
//! private [`Container`] instead.

use std::sync::OnceLock;

/// Domain layer - hints, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use dix_domain::*;
}

/// Infrastructure layer - container, registries, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use dix_infrastructure::*;
}

pub use dix_domain::{
    Channel, Context, Error, Field, Fields, Hint, HintKeys, Instance, Kind, Provider, Record,
    RecordRef, ResolutionPath, Resolvable, Result, SharedProvider, TypeInfo, record,
};
pub use dix_infrastructure::{ConfigLoader, Container, DixConfig, ErrorContext, LoggingConfig};

use dix_infrastructure::config::loader::validate_config;
use dix_infrastructure::diagnostics;

static CONTAINER: OnceLock<Container> = OnceLock::new();

/// The process-wide container
pub fn container() -> &'static Container {
    CONTAINER.get_or_init(Container::new)
}

/// Configure the process-wide container
///
/// Fails when the configuration is invalid or when the container already
/// exists, either from an earlier `init` or from first use.
pub fn init(config: &DixConfig) -> Result<()> {
    validate_config(config)?;
    let mut installed = false;
    CONTAINER.get_or_init(|| {
        installed = true;
        Container::with_config(config)
    });
    if installed {
        Ok(())
    } else {
        Err(Error::configuration("dix container is already initialized"))
    }
}

/// Load configuration from `dix.toml` and `DIX_*` variables, then [`init`]
pub fn init_from_env() -> Result<DixConfig> {
    let config = ConfigLoader::new().load()?;
    init(&config)?;
    Ok(config)
}

/// Turn diagnostic trace lines on or off
pub fn set_logging(enabled: bool) {
    diagnostics::set_enabled(enabled);
}

/// Bind `value` in the process-wide container
///
/// See [`Container::bind`].
pub fn bind<T: Clone + Send + Sync + 'static>(value: T, namespaces: &[&str]) {
    container().bind(value, namespaces);
}

/// Register a provider in the process-wide container
pub fn bind_provider<P: Provider + 'static>(provider: P, namespaces: &[&str]) {
    container().bind_provider(provider, namespaces);
}

/// Resolve `T` from the process-wide container
pub fn resolve<T: Resolvable>(ctx: &Context) -> Result<T> {
    container().resolve(ctx)
}

/// Resolve `T` from the process-wide container with a root hint descriptor
pub fn resolve_with<T: Resolvable>(ctx: &Context, descriptor: &str) -> Result<T> {
    container().resolve_with(ctx, descriptor)
}

/// Resolve `T` from the process-wide container, panicking on failure
pub fn must_resolve<T: Resolvable>(ctx: &Context) -> T {
    container().must_resolve(ctx)
}
