//! Error types for stylesheet compilation and token resolution.

use thiserror::Error;

/// Error returned when a [`Config`](crate::Config) cannot be compiled.
///
/// These are caller bugs: the configuration is malformed and nothing is
/// published when one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A unit size is zero, negative, or not finite.
    #[error("invalid {field} '{value}': expected a positive finite number")]
    InvalidUnit { field: &'static str, value: f64 },

    /// A scale table entry holds a value that cannot be scaled.
    #[error("scale entry '{token}' has non-numeric value for '{property}': {value}")]
    NonNumericScale {
        token: String,
        property: String,
        value: String,
    },

    /// A configuration document could not be deserialized.
    #[error("failed to parse {format} configuration: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
}

/// A token that matched neither a stylesheet entry nor a transform function.
///
/// Never fatal. The resolver reports it through `tracing` and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("style '{token}' not found")]
pub struct UnresolvedToken {
    /// The underscore-normalized token.
    pub token: String,
}
