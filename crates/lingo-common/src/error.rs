//! Error types and result alias for lingo operations.

use thiserror::Error;

/// Result type alias for lingo operations.
pub type Result<T> = std::result::Result<T, LingoError>;

/// Main error type for lingo operations.
///
/// A failed key lookup is not an error: resolution degrades to a missing
/// token so rendering never breaks. Only programming mistakes (a template
/// that names a non-function parameter in call position, resolving without
/// an established scoped context) and configuration problems surface here.
#[derive(Error, Debug)]
pub enum LingoError {
    /// A call-shaped placeholder named a parameter that is not a function.
    #[error("expected a function for parameter '{param}' in key '{key}'")]
    ExpectedFunction {
        /// Message key whose template contains the placeholder.
        key: String,
        /// Parameter name the placeholder refers to.
        param: String,
    },

    /// No language in the chain supplied the requested key.
    ///
    /// Never returned from resolution; delivered to `on_missing` observers
    /// as the synthetic error value.
    #[error("no localization for key '{key}' (tried: {chain})")]
    MissingKey {
        /// The unresolved message key.
        key: String,
        /// Comma-joined effective chain that was walked.
        chain: String,
    },

    /// Scoped resolution was attempted before any context was established.
    #[error("no locale context set")]
    NoContext,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
