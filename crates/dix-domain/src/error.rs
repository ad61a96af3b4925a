//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for dependency resolution
///
/// Every variant is terminal for the top-level resolution request that
/// produced it. Nothing is retried and no partially injected value is
/// handed back to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// A provider failed while producing a value
    #[error("Factory error: {message}")]
    Factory {
        /// Description of the factory failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A record type re-entered its own resolution ancestry
    #[error("Cyclic dependency: {type_name}")]
    CyclicDependency {
        /// Qualified name of the record type that closed the cycle
        type_name: String,
    },

    /// Resolving one field of a record failed
    #[error("`{owner}` field `{field}: {field_type}` injection failed: {source}")]
    FieldInjection {
        /// Qualified name of the record owning the field
        owner: String,
        /// Field name
        field: String,
        /// Declared type of the field
        field_type: String,
        /// The nested resolution error
        #[source]
        source: Box<Error>,
    },

    /// A provider produced a value of a different type than requested
    #[error("Provider `{symbol}` produced a value that is not a `{expected}`")]
    TypeMismatch {
        /// Symbol of the offending provider
        symbol: String,
        /// Type the engine asked for
        expected: String,
    },

    /// No phase produced a value for a top-level request
    #[error("Unresolved: no value produced for `{type_name}`")]
    Unresolved {
        /// Qualified name of the requested type
        type_name: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic error from external sources
    #[error("Generic error: {0}")]
    Generic(#[from] Box<dyn std::error::Error + Send + Sync>),
}

// Basic error creation methods
impl Error {
    /// Create a generic error
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into().into())
    }

    /// Create a factory error
    pub fn factory<S: Into<String>>(message: S) -> Self {
        Self::Factory {
            message: message.into(),
            source: None,
        }
    }

    /// Create a factory error with source
    pub fn factory_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Factory {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a cyclic dependency error
    pub fn cyclic<S: Into<String>>(type_name: S) -> Self {
        Self::CyclicDependency {
            type_name: type_name.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<S: Into<String>, T: Into<String>>(symbol: S, expected: T) -> Self {
        Self::TypeMismatch {
            symbol: symbol.into(),
            expected: expected.into(),
        }
    }

    /// Create an unresolved error
    pub fn unresolved<S: Into<String>>(type_name: S) -> Self {
        Self::Unresolved {
            type_name: type_name.into(),
        }
    }
}

// Injection error creation methods
impl Error {
    /// Wrap a nested error with the owning record and field identity
    pub fn field_injection<O, F, T>(owner: O, field: F, field_type: T, source: Error) -> Self
    where
        O: Into<String>,
        F: Into<String>,
        T: Into<String>,
    {
        Self::FieldInjection {
            owner: owner.into(),
            field: field.into(),
            field_type: field_type.into(),
            source: Box::new(source),
        }
    }

    /// Walk through `FieldInjection` wrappers down to the error that started it
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let Self::FieldInjection { source, .. } = current {
            current = source;
        }
        current
    }

    /// Check whether this error, or the error it wraps, is a cycle
    pub fn is_cyclic(&self) -> bool {
        matches!(self.root_cause(), Self::CyclicDependency { .. })
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
