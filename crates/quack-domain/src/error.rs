//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used as the cause of wrapped failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for Quack Integrations
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
        source: Option<BoxError>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// An integration with the same name is already registered
    #[error("Integration '{name}' is already registered")]
    DuplicateName {
        /// The conflicting integration name
        name: String,
    },

    /// An integration module could not be resolved
    #[error("Failed to load integration module {module_path}: {message}")]
    ModuleLoad {
        /// Identifier of the module that failed to resolve
        module_path: String,
        /// Description of the failure
        message: String,
        /// Original resolution error
        #[source]
        source: Option<BoxError>,
    },

    /// No provider is registered under the requested name
    #[error("Unsupported LLM provider: {provider}. Registered providers: {}", .registered.join(", "))]
    UnsupportedProvider {
        /// The requested provider name (as given by the caller)
        provider: String,
        /// Provider names known at lookup time
        registered: Vec<String>,
    },

    /// A provider constructor failed
    #[error("Failed to initialize LLM provider '{provider}': {source}")]
    ProviderConstruction {
        /// The provider whose constructor failed
        provider: String,
        /// Original construction error
        #[source]
        source: BoxError,
    },

    /// A component was used before a successful `initialize()`
    #[error("{component} not initialized")]
    NotInitialized {
        /// Name of the uninitialized component
        component: String,
    },

    /// Provider runtime error (request failed, bad response, exhausted script)
    #[error("Provider error: {provider}: {message}")]
    Provider {
        /// Provider that reported the error
        provider: String,
        /// Description of the failure
        message: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Authentication-related error (missing or rejected credentials)
    #[error("Authentication error: {message}")]
    Authentication {
        /// Description of the authentication error
        message: String,
    },

    /// Network-related error
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Registry error creation methods
impl Error {
    /// Create a duplicate registration error
    pub fn duplicate_name<S: Into<String>>(name: S) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create a module load error without an underlying cause
    pub fn module_load<P: Into<String>, S: Into<String>>(module_path: P, message: S) -> Self {
        Self::ModuleLoad {
            module_path: module_path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a module load error carrying the resolution failure
    pub fn module_load_with_source<P, E>(module_path: P, source: E) -> Self
    where
        P: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ModuleLoad {
            module_path: module_path.into(),
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an unsupported provider error listing the known providers
    pub fn unsupported_provider<S: Into<String>>(provider: S, registered: Vec<String>) -> Self {
        Self::UnsupportedProvider {
            provider: provider.into(),
            registered,
        }
    }

    /// Wrap a constructor failure for the given provider
    pub fn provider_construction<S, E>(provider: S, source: E) -> Self
    where
        S: Into<String>,
        E: Into<BoxError>,
    {
        Self::ProviderConstruction {
            provider: provider.into(),
            source: source.into(),
        }
    }

    /// Create a not-initialized error for the named component
    pub fn not_initialized<S: Into<String>>(component: S) -> Self {
        Self::NotInitialized {
            component: component.into(),
        }
    }

    /// Returns true for the duplicate registration kind
    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, Self::DuplicateName { .. })
    }

    /// Returns true for the unsupported provider kind
    pub fn is_unsupported_provider(&self) -> bool {
        matches!(self, Self::UnsupportedProvider { .. })
    }
}

// Provider and argument error creation methods
impl Error {
    /// Create a provider runtime error
    pub fn provider<P: Into<String>, S: Into<String>>(provider: P, message: S) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an authentication error
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        Self::Authentication {
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

// I/O, network and configuration error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Internal {
            message: s.to_string(),
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Internal { message: s }
    }
}
