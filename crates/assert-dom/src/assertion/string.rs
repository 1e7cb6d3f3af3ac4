//! Assertions over one string snapshot read from an element.
//!
//! A [`StringAssert`] holds the value of a text, inner-markup, or attribute
//! read, taken once when the accessor is called. An absent attribute is
//! `None`, which is distinct from the empty string, so existence and
//! emptiness can be checked independently. Every operation hands back the
//! owning [`ElementAssert`] so the chain can continue at element level.

use super::element::ElementAssert;
use super::ensure;
use super::negated_string::NegatedStringAssert;
use crate::result::{DomAssertError, DomResult};
use regex::Regex;

/// Fluent assertions over an optional string value
#[derive(Debug, Clone)]
pub struct StringAssert<'e, 'a> {
    value: Option<String>,
    owner: &'e ElementAssert<'a>,
    context: String,
}

impl<'e, 'a> StringAssert<'e, 'a> {
    /// Wrap a value read from `owner`; `context` describes where it came from
    #[must_use]
    pub fn new(value: Option<String>, owner: &'e ElementAssert<'a>, context: impl Into<String>) -> Self {
        Self {
            value,
            owner,
            context: context.into(),
        }
    }

    /// The stored value, `None` if the attribute was absent
    #[must_use]
    pub fn actual(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Description used in failure messages, e.g. `text content of '.card'`
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The element assertion this value was read from
    #[must_use]
    pub const fn owner(&self) -> &'e ElementAssert<'a> {
        self.owner
    }

    /// Negated view over the same value and owner
    #[must_use]
    pub const fn not(&self) -> NegatedStringAssert<'_, 'e, 'a> {
        NegatedStringAssert::new(self)
    }

    /// Assert the value is exactly `expected`
    ///
    /// An absent value never equals any string.
    pub fn to_equal(&self, expected: &str) -> DomResult<&'e ElementAssert<'a>> {
        tracing::trace!(context = %self.context, expected, "to_equal");
        ensure(self.actual() == Some(expected), || {
            format!(
                "Expected {} to equal '{expected}', but got {}",
                self.context,
                self.describe_actual()
            )
        })?;
        Ok(self.owner)
    }

    /// Assert the value contains `needle`
    pub fn to_contain(&self, needle: &str) -> DomResult<&'e ElementAssert<'a>> {
        tracing::trace!(context = %self.context, needle, "to_contain");
        let value = self.require_value(|| format!("contain '{needle}'"))?;
        ensure(value.contains(needle), || {
            format!(
                "Expected {} to contain '{needle}', but got '{value}'",
                self.context
            )
        })?;
        Ok(self.owner)
    }

    /// Assert `pattern` matches somewhere in the value (search, not full match)
    ///
    /// # Errors
    ///
    /// Besides assertion failures, returns [`DomAssertError::InvalidPattern`]
    /// when `pattern` does not compile.
    pub fn to_match(&self, pattern: &str) -> DomResult<&'e ElementAssert<'a>> {
        tracing::trace!(context = %self.context, pattern, "to_match");
        let value = self.require_value(|| format!("match pattern '{pattern}'"))?;
        let regex = compile_pattern(pattern)?;
        ensure(regex.is_match(value), || {
            format!(
                "Expected {} to match pattern '{pattern}', but got '{value}'",
                self.context
            )
        })?;
        Ok(self.owner)
    }

    /// Assert the value is absent or the empty string
    pub fn to_be_empty(&self) -> DomResult<&'e ElementAssert<'a>> {
        tracing::trace!(context = %self.context, "to_be_empty");
        ensure(self.is_empty(), || {
            format!(
                "Expected {} to be empty, but got {}",
                self.context,
                self.describe_actual()
            )
        })?;
        Ok(self.owner)
    }

    /// Assert the value is present (it may still be empty)
    pub fn to_exist(&self) -> DomResult<&'e ElementAssert<'a>> {
        tracing::trace!(context = %self.context, "to_exist");
        ensure(self.value.is_some(), || {
            format!("Expected {} to exist, but it does not", self.context)
        })?;
        Ok(self.owner)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.value.as_deref().map_or(true, str::is_empty)
    }

    /// `'value'` or `null`, for messages
    pub(crate) fn describe_actual(&self) -> String {
        match &self.value {
            Some(value) => format!("'{value}'"),
            None => "null".to_string(),
        }
    }

    /// The value, or an assertion failure saying the value is null.
    ///
    /// `expectation` completes "Expected <context> to ..." in the message.
    pub(crate) fn require_value(&self, expectation: impl FnOnce() -> String) -> DomResult<&str> {
        self.require_value_phrased("to", expectation)
    }

    pub(crate) fn require_value_phrased(
        &self,
        verb: &str,
        expectation: impl FnOnce() -> String,
    ) -> DomResult<&str> {
        self.value.as_deref().ok_or_else(|| {
            DomAssertError::assertion(format!(
                "Expected {} {verb} {}, but the value is null",
                self.context,
                expectation()
            ))
        })
    }
}

pub(crate) fn compile_pattern(pattern: &str) -> DomResult<Regex> {
    Regex::new(pattern).map_err(|source| DomAssertError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
