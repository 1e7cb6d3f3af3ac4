//! Negated string assertions, reached through [`StringAssert::not`].

use super::element::ElementAssert;
use super::ensure;
use super::string::{compile_pattern, StringAssert};
use crate::result::DomResult;

/// Inverted view over a [`StringAssert`]; shares its value, context and owner
#[derive(Debug, Clone, Copy)]
pub struct NegatedStringAssert<'s, 'e, 'a> {
    assert: &'s StringAssert<'e, 'a>,
}

impl<'s, 'e, 'a> NegatedStringAssert<'s, 'e, 'a> {
    pub(crate) const fn new(assert: &'s StringAssert<'e, 'a>) -> Self {
        Self { assert }
    }

    /// Assert the value is not exactly `expected` (an absent value passes)
    pub fn to_equal(&self, expected: &str) -> DomResult<&'e ElementAssert<'a>> {
        tracing::trace!(context = %self.assert.context(), expected, "not.to_equal");
        ensure(self.assert.actual() != Some(expected), || {
            format!(
                "Expected {} not to equal '{expected}', but it does",
                self.assert.context()
            )
        })?;
        Ok(self.assert.owner())
    }

    /// Assert the value does not contain `needle`.
    ///
    /// An absent value fails with "the value is null" rather than passing.
    pub fn to_contain(&self, needle: &str) -> DomResult<&'e ElementAssert<'a>> {
        tracing::trace!(context = %self.assert.context(), needle, "not.to_contain");
        let value = self
            .assert
            .require_value_phrased("not to", || format!("contain '{needle}'"))?;
        ensure(!value.contains(needle), || {
            format!(
                "Expected {} not to contain '{needle}', but got '{value}'",
                self.assert.context()
            )
        })?;
        Ok(self.assert.owner())
    }

    /// Assert `pattern` matches nowhere in the value.
    ///
    /// An absent value fails, as for [`Self::to_contain`].
    ///
    /// # Errors
    ///
    /// Besides assertion failures, returns
    /// [`DomAssertError::InvalidPattern`](crate::DomAssertError::InvalidPattern)
    /// when `pattern` does not compile.
    pub fn to_match(&self, pattern: &str) -> DomResult<&'e ElementAssert<'a>> {
        tracing::trace!(context = %self.assert.context(), pattern, "not.to_match");
        let value = self
            .assert
            .require_value_phrased("not to", || format!("match pattern '{pattern}'"))?;
        let regex = compile_pattern(pattern)?;
        ensure(!regex.is_match(value), || {
            format!(
                "Expected {} not to match pattern '{pattern}', but got '{value}'",
                self.assert.context()
            )
        })?;
        Ok(self.assert.owner())
    }

    /// Assert the value is present and non-empty
    pub fn to_be_empty(&self) -> DomResult<&'e ElementAssert<'a>> {
        tracing::trace!(context = %self.assert.context(), "not.to_be_empty");
        ensure(!self.assert.is_empty(), || {
            format!(
                "Expected {} not to be empty, but got {}",
                self.assert.context(),
                self.assert.describe_actual()
            )
        })?;
        Ok(self.assert.owner())
    }

    /// Assert the value is absent
    pub fn to_exist(&self) -> DomResult<&'e ElementAssert<'a>> {
        tracing::trace!(context = %self.assert.context(), "not.to_exist");
        ensure(self.assert.actual().is_none(), || {
            format!(
                "Expected {} not to exist, but it does with value {}",
                self.assert.context(),
                self.assert.describe_actual()
            )
        })?;
        Ok(self.assert.owner())
    }
}
