//! Result and error types for DOM assertions.

use thiserror::Error;

/// Result type for DOM assertion operations
pub type DomResult<T> = Result<T, DomAssertError>;

/// Errors produced while resolving, querying, or asserting on a document
#[derive(Debug, Error)]
pub enum DomAssertError {
    /// Top-level selector matched nothing (`assert_one`)
    #[error("Element '{selector}' not found")]
    ElementNotFound {
        /// Selector that was queried
        selector: String,
    },

    /// Top-level selector matched nothing (`assert_all`)
    #[error("No elements matching '{selector}' found")]
    NoMatches {
        /// Selector that was queried
        selector: String,
    },

    /// Assertion condition violated
    #[error("Assertion failed: {message}")]
    AssertionFailed {
        /// Message naming the context, the expectation and the observed value
        message: String,
    },

    /// Selector could not be parsed
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector {
        /// Selector as written by the caller
        selector: String,
        /// Parser message
        message: String,
    },

    /// Regular expression could not be compiled
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Pattern as written by the caller
        pattern: String,
        /// Compilation error
        #[source]
        source: regex::Error,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DomAssertError {
    /// Create an assertion failure
    #[must_use]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            message: message.into(),
        }
    }

    /// Create an invalid selector error
    #[must_use]
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Whether this error is a failed expectation rather than a collaborator error.
    ///
    /// Only these are absorbed by the trial boundary of negated `to_have`.
    #[must_use]
    pub const fn is_assertion_failure(&self) -> bool {
        matches!(
            self,
            Self::ElementNotFound { .. } | Self::NoMatches { .. } | Self::AssertionFailed { .. }
        )
    }
}
