//! Error handling types

use crate::value_objects::DeclarationKind;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Suitewire
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A suite or test class cannot be turned into an execution unit
    ///
    /// Every collected cause is kept so a single report lists all of them.
    #[error("Initialization error: {}", causes.join("; "))]
    Initialization {
        /// Individual problems found while initializing
        causes: Vec<String>,
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

    /// No bean satisfies the requested type or id
    #[error("No such bean: {requested}")]
    NoSuchBean {
        /// Type name or bean id that was requested
        requested: String,
    },

    /// A bean exists under the requested id but holds another type
    #[error("Bean '{id}' is of type '{actual}', expected '{expected}'")]
    BeanNotOfRequiredType {
        /// Bean id
        id: String,
        /// Requested type name
        expected: String,
        /// Registered type name
        actual: String,
    },

    /// Two beans collide on id or type
    #[error("Duplicate bean: {message}")]
    DuplicateBean {
        /// Which id or type collided
        message: String,
    },

    /// A component factory failed while creating a bean
    #[error("Error creating bean '{bean}' from component '{component}': {message}")]
    BeanCreation {
        /// Bean id being created
        bean: String,
        /// Component that was asked to create it
        component: String,
        /// Factory diagnostic
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Initialization error creation methods
impl Error {
    /// Create an initialization error with a single cause
    pub fn initialization<S: Into<String>>(message: S) -> Self {
        Self::Initialization {
            causes: vec![message.into()],
        }
    }

    /// Create an initialization error from several collected causes
    pub fn initialization_causes(causes: Vec<String>) -> Self {
        Self::Initialization { causes }
    }

    /// Create the error raised when a suite declaration lacks required metadata
    pub fn missing_declaration(kind: DeclarationKind, suite: &str) -> Self {
        Self::initialization(format!("Class '{suite}' must have a '{kind}' declaration"))
    }

    /// Whether this error was raised while initializing a suite or runner
    pub fn is_initialization(&self) -> bool {
        matches!(self, Self::Initialization { .. })
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
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

// Container error creation methods
impl Error {
    /// Create a no-such-bean error
    pub fn no_such_bean<S: Into<String>>(requested: S) -> Self {
        Self::NoSuchBean {
            requested: requested.into(),
        }
    }

    /// Create a duplicate bean error
    pub fn duplicate_bean<S: Into<String>>(message: S) -> Self {
        Self::DuplicateBean {
            message: message.into(),
        }
    }

    /// Create a bean creation error
    pub fn bean_creation<B, C, M>(bean: B, component: C, message: M) -> Self
    where
        B: Into<String>,
        C: Into<String>,
        M: Into<String>,
    {
        Self::BeanCreation {
            bean: bean.into(),
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
