//! Error types for snmpsim modifier configuration.
//!
//! Split by concern: [`PropertyError`] for reading a single raw property,
//! [`ConfigError`] for building a modifier from a full property set.
//! Modification itself is infallible and has no error type.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors from typed lookups on a [`ModifierProperties`](crate::ModifierProperties).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The property is present but its value is not a 64-bit integer literal.
    #[error("property '{key}' is not a valid integer: '{value}'")]
    NotAnInteger {
        /// Key of the offending property.
        key: String,
        /// Raw value as configured.
        value: String,
        /// The underlying parse failure.
        #[source]
        source: ParseIntError,
    },
}

/// Errors detected while constructing a modifier from its configuration.
///
/// Both variants mean the configuration is invalid; a modifier whose
/// construction failed is never handed out.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A bound violates the unsigned 32-bit range.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Which invariant was violated.
        reason: String,
    },
    /// A configured value could not be parsed as an integer.
    #[error("invalid configuration: one of the parameters exceeds the legal long value range")]
    InvalidProperty(#[from] PropertyError),
}

impl ConfigError {
    /// Build an [`InvalidConfiguration`](Self::InvalidConfiguration) error.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// True for every variant: all configuration errors are fatal to
    /// modifier construction.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfiguration { .. } | Self::InvalidProperty(_)
        )
    }
}
