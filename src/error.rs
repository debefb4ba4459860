//! Error types for snowconn-rs.
//!
//! Configuration parsing surfaces every failure synchronously to the caller;
//! nothing is retried or swallowed. Lenient scalar keys (integer seconds,
//! the compression flag, the legacy integer pool-size keys) treat a parse
//! failure as "value absent" and keep the default instead of raising one of
//! these errors.

use thiserror::Error;

/// Errors produced while parsing and validating connection configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required connection parameter is absent or blank
    #[error("Missing required connection parameter '{parameter}'")]
    MissingRequiredParameter { parameter: String },

    /// The `authenticator` value does not match any recognized alias
    #[error("Unsupported authenticator '{0}'")]
    UnsupportedAuthenticator(String),

    /// A duration-bearing key holds a value that is neither a bare integer
    /// nor an integer with an s/m/h suffix
    #[error("Invalid duration '{value}': expected an integer with optional s/m/h suffix")]
    InvalidDurationFormat { value: String },

    /// One or more validation rules failed after the configuration was built
    #[error("Invalid connection configuration: {message}")]
    ConfigurationInvalid { message: String },

    /// Connection string parsing error
    #[error("Failed to parse connection string: {0}")]
    ParseError(String),
}
