//! Provider port
//!
//! A provider is a named factory. Fields select one with `from:<symbol>` in
//! their hint; the engine then asks the provider registered under that
//! symbol (and the hint's namespace) for the value.

use std::fmt;
use std::sync::Arc;

use super::resolvable::Instance;
use crate::error::Result;
use crate::value_objects::{Context, Hint};

/// Named factory producing values on demand
///
/// # Example
///
/// ```
/// use dix_domain::{Context, Hint, Instance, Provider, Result};
///
/// struct PortProvider;
///
/// impl Provider for PortProvider {
///     fn symbol(&self) -> &str {
///         "port"
///     }
///
///     fn provide(&self, _ctx: &Context, hint: &Hint) -> Result<Instance> {
///         let port: u16 = hint.custom("port").and_then(|p| p.parse().ok()).unwrap_or(8080);
///         Ok(Box::new(port))
///     }
/// }
/// ```
pub trait Provider: Send + Sync {
    /// Identity the provider is registered and selected under
    fn symbol(&self) -> &str;

    /// Produce a value for the requesting field
    ///
    /// The returned instance must hold exactly the field's declared type.
    /// Errors are propagated unchanged to the caller of the top-level
    /// resolution.
    fn provide(&self, ctx: &Context, hint: &Hint) -> Result<Instance>;
}

impl fmt::Debug for dyn Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("symbol", &self.symbol())
            .finish()
    }
}

/// Shared handle to a registered provider
pub type SharedProvider = Arc<dyn Provider>;
