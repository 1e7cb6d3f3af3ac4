//! Assertion primitives shared by the element and string assertion builders.
//!
//! Every check in the chain is phrased as an [`AssertionResult`] and then
//! lifted into a [`DomResult`], so the failure message travels in the `Err`
//! value. [`attempt`] is the one place where failures are turned back into
//! plain information instead of being propagated.

pub mod element;
pub mod negated_element;
pub mod negated_string;
pub mod string;

use crate::result::{DomAssertError, DomResult};

/// Result of an assertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionResult {
    /// Whether the assertion passed
    pub passed: bool,
    /// Human-readable message (empty when passed)
    pub message: String,
}

impl AssertionResult {
    /// Create a passing assertion result
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            passed: true,
            message: String::new(),
        }
    }

    /// Create a failing assertion result
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }

    /// Pass when `condition` holds, otherwise fail with the lazily built message
    #[must_use]
    pub fn check(condition: bool, message: impl FnOnce() -> String) -> Self {
        if condition {
            Self::pass()
        } else {
            Self::fail(message())
        }
    }

    /// Convert into the error channel
    ///
    /// # Errors
    ///
    /// Returns [`DomAssertError::AssertionFailed`] carrying the message if the
    /// assertion did not pass.
    pub fn into_result(self) -> DomResult<()> {
        if self.passed {
            Ok(())
        } else {
            tracing::trace!(message = %self.message, "assertion failed");
            Err(DomAssertError::AssertionFailed {
                message: self.message,
            })
        }
    }
}

/// Shorthand for `AssertionResult::check(..).into_result()`
pub(crate) fn ensure(condition: bool, message: impl FnOnce() -> String) -> DomResult<()> {
    AssertionResult::check(condition, message).into_result()
}

/// Outcome of running an assertion block against one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trial {
    /// Every assertion in the block passed
    Satisfied,
    /// An assertion failed; holds the failure text
    Rejected(String),
}

impl Trial {
    /// Whether the candidate satisfied the block
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }
}

/// Run `block` and capture its assertion outcome.
///
/// # Errors
///
/// Assertion failures become [`Trial::Rejected`]; any other error (invalid
/// selector or pattern) is returned unchanged.
pub fn attempt<F>(block: F) -> DomResult<Trial>
where
    F: FnOnce() -> DomResult<()>,
{
    match block() {
        Ok(()) => Ok(Trial::Satisfied),
        Err(err) if err.is_assertion_failure() => Ok(Trial::Rejected(err.to_string())),
        Err(err) => Err(err),
    }
}
