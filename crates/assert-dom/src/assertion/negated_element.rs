//! Negated element assertions, reached through [`ElementAssert::not`].

use super::element::{Descendants, ElementAssert};
use super::{attempt, ensure, Trial};
use crate::document;
use crate::result::DomResult;

/// Inverted view over an [`ElementAssert`]; every operation returns the owner
#[derive(Debug, Clone, Copy)]
pub struct NegatedElementAssert<'e, 'a> {
    owner: &'e ElementAssert<'a>,
}

impl<'e, 'a> NegatedElementAssert<'e, 'a> {
    pub(crate) const fn new(owner: &'e ElementAssert<'a>) -> Self {
        Self { owner }
    }

    /// Assert the element is not a `<tag>` (ASCII case-insensitive)
    pub fn to_be_tag(&self, tag: &str) -> DomResult<&'e ElementAssert<'a>> {
        let actual = self.owner.tag_name();
        tracing::trace!(selector = %self.owner.selector(), tag, actual, "not.to_be_tag");
        ensure(!actual.eq_ignore_ascii_case(tag), || {
            format!(
                "Expected '{}' not to be a <{tag}> element, but found <{actual}>",
                self.owner.selector()
            )
        })?;
        Ok(self.owner)
    }

    /// Assert no descendant matches `selector`
    pub fn to_have(&self, selector: &str) -> DomResult<&'e ElementAssert<'a>> {
        self.to_have_matching(selector, Descendants::Any)
    }

    /// Assert the number of descendants matching `selector` is not `count`.
    ///
    /// Zero matches passes unless `count` is zero.
    pub fn to_have_exactly(&self, selector: &str, count: usize) -> DomResult<&'e ElementAssert<'a>> {
        self.to_have_matching(selector, Descendants::Exactly(count))
    }

    /// Assert no descendant matching `selector` passes every assertion in `check`
    pub fn to_have_satisfying<F>(&self, selector: &str, mut check: F) -> DomResult<&'e ElementAssert<'a>>
    where
        F: FnMut(&ElementAssert<'_>) -> DomResult<()>,
    {
        self.to_have_matching(selector, Descendants::Satisfying(&mut check))
    }

    /// Inverted form of [`ElementAssert::to_have_matching`].
    ///
    /// * [`Descendants::Any`]: fails if anything matches.
    /// * [`Descendants::Exactly`]: fails only if the count is exactly equal.
    /// * [`Descendants::Satisfying`]: runs the check against each match inside
    ///   a trial; fails as soon as one match passes it. Assertion failures
    ///   raised by the check are absorbed, other errors propagate.
    pub fn to_have_matching(
        &self,
        selector: &str,
        expect: Descendants<'_>,
    ) -> DomResult<&'e ElementAssert<'a>> {
        let parent = self.owner.selector();
        let matches = document::select_descendants(self.owner.element(), selector)?;
        let actual = matches.len();
        tracing::trace!(selector = %parent, child = selector, actual, ?expect, "not.to_have");

        match expect {
            Descendants::Any => {
                ensure(actual == 0, || {
                    format!(
                        "Expected '{parent}' not to have child element(s) matching '{selector}', but found {actual}"
                    )
                })?;
            }
            Descendants::Exactly(count) => {
                ensure(actual != count, || {
                    format!(
                        "Expected '{parent}' not to have {count} child element(s) matching '{selector}', but found {actual}"
                    )
                })?;
            }
            Descendants::Satisfying(check) => {
                for (index, element) in matches.into_iter().enumerate() {
                    let candidate = self.owner.descendant(element, selector);
                    let trial = attempt(|| check(&candidate))?;
                    tracing::trace!(selector = %candidate.selector(), index, ?trial, "trial");
                    ensure(trial != Trial::Satisfied, || {
                        format!(
                            "Expected '{parent}' not to have child element matching '{selector}' that satisfies the given assertions, but match #{} does",
                            index + 1
                        )
                    })?;
                }
            }
        }

        Ok(self.owner)
    }

    /// Assert the number of direct child elements is not `expected`
    pub fn to_have_count(&self, expected: usize) -> DomResult<&'e ElementAssert<'a>> {
        let count = self.owner.child_count();
        tracing::trace!(selector = %self.owner.selector(), expected, count, "not.to_have_count");
        ensure(count != expected, || {
            format!(
                "Expected '{}' not to have {expected} child element(s), but found {count}",
                self.owner.selector()
            )
        })?;
        Ok(self.owner)
    }
}
