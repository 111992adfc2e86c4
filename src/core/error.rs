//! Error types for the dispatch core

pub type Result<T> = std::result::Result<T, LogError>;

/// Errors surfaced at the edges of the crate: sink construction and I/O,
/// and configuration parsing. Log and configuration *operations* are
/// total and never return errors; a sink failure during dispatch is
/// reported on stderr by the owning worker instead of propagating.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error (configuration profiles)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A level name that is not one of the five predefined levels
    #[error("invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Sink error with sink name
    #[error("sink '{name}' failed: {message}")]
    Sink { name: String, message: String },

    /// Invalid configuration with details
    #[error("invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LogError {
    /// Create a sink error
    pub fn sink(name: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::Sink {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
