//! Error types for the trigger domain

use thiserror::Error;

/// Errors that can occur while resolving configuration or sending the
/// trigger request.
#[derive(Error, Debug)]
pub enum TriggerError {
    /// A required environment variable is absent or empty
    #[error("required environment variable {var} is not set")]
    MissingConfig {
        /// Name of the missing variable.
        var: &'static str,
    },

    /// The endpoint URL failed to parse
    #[error("invalid endpoint URL '{url}': {source}")]
    InvalidEndpoint {
        /// The rejected URL value.
        url: String,
        /// Parse failure reported by the `url` crate.
        #[source]
        source: url::ParseError,
    },

    /// A value that must be a positive integer failed to parse
    #[error("invalid value for {var}: '{value}' (expected a positive integer)")]
    InvalidNumber {
        /// Name of the offending variable.
        var: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An unrecognized trigger mode was requested
    #[error("invalid value for {var}: '{value}' (expected 'sync' or 'async')")]
    InvalidMode {
        /// Name of the offending variable.
        var: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The HTTP request could not be constructed or sent at all
    #[error("transport failure: {0}")]
    Transport(String),

    /// Any other failure raised while sending or reading the response
    #[error("unexpected error: {0}")]
    Unexpected(String),
}
