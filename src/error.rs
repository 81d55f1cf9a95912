//! Error types for linmath configuration.
//!
//! The numeric kernel itself is total: vector, matrix and quaternion
//! operations never fail. Errors only arise while turning text (command-line
//! values, environment variables) into dispatch settings.

use thiserror::Error;

/// Errors that can occur while configuring linmath.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinmathError {
    /// Text did not name any known capability level.
    #[error("Unknown capability level: {name:?} (expected one of none, sse2, avx, avx2, neon)")]
    UnknownLevel {
        /// The text that failed to parse.
        name: String,
    },
    /// An environment setting is present but cannot be used.
    #[error("Invalid configuration: {message} ({key}={value:?})")]
    Configuration {
        /// The environment variable that was read.
        key: String,
        /// The raw value it held.
        value: String,
        /// Human-readable error message.
        message: String,
    },
}

/// Result type alias for linmath operations.
pub type Result<T> = std::result::Result<T, LinmathError>;

/// Creates an unknown-level error.
pub fn unknown_level(name: impl Into<String>) -> LinmathError {
    LinmathError::UnknownLevel { name: name.into() }
}

/// Creates a configuration error.
pub fn configuration_error(
    key: impl Into<String>,
    value: impl Into<String>,
    message: impl Into<String>,
) -> LinmathError {
    LinmathError::Configuration {
        key: key.into(),
        value: value.into(),
        message: message.into(),
    }
}
