//! Error extension utilities
//!
//! Converts foreign errors into domain errors with a short description of
//! what was being attempted. Providers wrapping fallible constructors use
//! [`ErrorContext::factory_context`]; the config loader uses
//! [`ErrorContext::config_context`].

use std::fmt;

use dix_domain::error::{Error, Result};

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```
/// use dix_infrastructure::error_ext::ErrorContext;
///
/// let port: dix_domain::Result<u16> = "80x".parse::<u16>().factory_context("invalid port");
/// assert!(port.is_err());
/// ```
pub trait ErrorContext<T> {
    /// Add context for provider (factory) operations
    fn factory_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add factory context with lazy evaluation
    fn with_factory_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn factory_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::factory_with_source(format!("{context}: {err}"), err))
    }

    fn with_factory_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Error::factory_with_source(format!("{}: {err}", f()), err))
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }
}
