//! Element-level assertions (Playwright-style API over a matched node).
//!
//! An [`ElementAssert`] wraps one matched element together with the selector
//! that found it. The selector is only kept for failure messages; nested
//! assertions created by `to_have` record `"<parent> <child>"`.

use super::ensure;
use super::negated_element::NegatedElementAssert;
use super::string::StringAssert;
use crate::document;
use crate::result::DomResult;
use scraper::ElementRef;
use std::fmt;

/// Callback run against each matched descendant
pub type DescendantCheck<'f> = dyn FnMut(&ElementAssert<'_>) -> DomResult<()> + 'f;

/// What `to_have` expects of the descendants matching a selector
pub enum Descendants<'f> {
    /// At least one match (no further constraint)
    Any,
    /// Exactly this many matches
    Exactly(usize),
    /// Run the check against every match
    Satisfying(&'f mut DescendantCheck<'f>),
}

impl Default for Descendants<'_> {
    fn default() -> Self {
        Self::Any
    }
}

impl From<usize> for Descendants<'_> {
    fn from(count: usize) -> Self {
        Self::Exactly(count)
    }
}

impl fmt::Debug for Descendants<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "Any"),
            Self::Exactly(count) => f.debug_tuple("Exactly").field(count).finish(),
            Self::Satisfying(_) => write!(f, "Satisfying(..)"),
        }
    }
}

/// Fluent assertions over one matched element
#[derive(Debug, Clone)]
pub struct ElementAssert<'a> {
    element: ElementRef<'a>,
    selector: String,
}

impl<'a> ElementAssert<'a> {
    /// Wrap a matched element and the selector that found it
    #[must_use]
    pub fn new(element: ElementRef<'a>, selector: impl Into<String>) -> Self {
        Self {
            element,
            selector: selector.into(),
        }
    }

    /// The wrapped element
    #[must_use]
    pub const fn element(&self) -> ElementRef<'a> {
        self.element
    }

    /// Selector used in failure messages
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Lower-case tag name of the element
    #[must_use]
    pub fn tag_name(&self) -> &'a str {
        document::tag_name(self.element)
    }

    /// Negated view over this element
    #[must_use]
    pub const fn not(&self) -> NegatedElementAssert<'_, 'a> {
        NegatedElementAssert::new(self)
    }

    /// Text content of the element and its descendants
    #[must_use]
    pub fn text(&self) -> StringAssert<'_, 'a> {
        StringAssert::new(
            Some(document::text_content(self.element)),
            self,
            format!("text content of '{}'", self.selector),
        )
    }

    /// Serialized inner markup
    #[must_use]
    pub fn html(&self) -> StringAssert<'_, 'a> {
        StringAssert::new(
            Some(document::inner_html(self.element)),
            self,
            format!("inner HTML of '{}'", self.selector),
        )
    }

    /// Attribute value; absent attributes yield a `None` value
    #[must_use]
    pub fn attribute(&self, name: &str) -> StringAssert<'_, 'a> {
        StringAssert::new(
            document::attribute(self.element, name).map(str::to_string),
            self,
            format!("attribute '{name}' of '{}'", self.selector),
        )
    }

    /// The `class` attribute
    #[must_use]
    pub fn class(&self) -> StringAssert<'_, 'a> {
        self.attribute("class")
    }

    /// A `data-<key>` attribute
    #[must_use]
    pub fn data(&self, key: &str) -> StringAssert<'_, 'a> {
        self.attribute(&format!("data-{key}"))
    }

    /// The `value` attribute
    #[must_use]
    pub fn value(&self) -> StringAssert<'_, 'a> {
        self.attribute("value")
    }

    /// Assert the element is a `<tag>` (ASCII case-insensitive)
    pub fn to_be_tag(&self, tag: &str) -> DomResult<&Self> {
        let actual = self.tag_name();
        tracing::trace!(selector = %self.selector, expected = tag, actual, "to_be_tag");
        ensure(actual.eq_ignore_ascii_case(tag), || {
            format!(
                "Expected '{}' to be a <{tag}> element, but found <{actual}>",
                self.selector
            )
        })?;
        Ok(self)
    }

    /// Assert at least one descendant matches `selector`
    pub fn to_have(&self, selector: &str) -> DomResult<&Self> {
        self.to_have_matching(selector, Descendants::Any)
    }

    /// Assert exactly `count` descendants match `selector`
    pub fn to_have_exactly(&self, selector: &str, count: usize) -> DomResult<&Self> {
        self.to_have_matching(selector, Descendants::Exactly(count))
    }

    /// Assert descendants match `selector` and each one passes `check`
    pub fn to_have_satisfying<F>(&self, selector: &str, mut check: F) -> DomResult<&Self>
    where
        F: FnMut(&ElementAssert<'_>) -> DomResult<()>,
    {
        self.to_have_matching(selector, Descendants::Satisfying(&mut check))
    }

    /// Assert on the descendants (any depth) matching `selector`.
    ///
    /// Zero matches always fails. [`Descendants::Exactly`] adds an exact
    /// count; [`Descendants::Satisfying`] runs the check once per match in
    /// document order and stops at the first failure.
    pub fn to_have_matching(&self, selector: &str, expect: Descendants<'_>) -> DomResult<&Self> {
        let matches = document::select_descendants(self.element, selector)?;
        let count = matches.len();
        tracing::trace!(selector = %self.selector, child = selector, count, ?expect, "to_have");

        ensure(count > 0, || {
            format!(
                "Expected '{}' to have child element(s) matching '{selector}', but none found",
                self.selector
            )
        })?;

        match expect {
            Descendants::Any => {}
            Descendants::Exactly(expected) => {
                ensure(count == expected, || {
                    format!(
                        "Expected '{}' to have {expected} child element(s) matching '{selector}', but found {count}",
                        self.selector
                    )
                })?;
            }
            Descendants::Satisfying(check) => {
                for element in matches {
                    check(&self.descendant(element, selector))?;
                }
            }
        }

        Ok(self)
    }

    /// Assert the number of direct child elements is exactly `expected`
    pub fn to_have_count(&self, expected: usize) -> DomResult<&Self> {
        let count = self.child_count();
        tracing::trace!(selector = %self.selector, expected, count, "to_have_count");
        ensure(count == expected, || {
            format!(
                "Expected '{}' to have {expected} child element(s), but found {count}",
                self.selector
            )
        })?;
        Ok(self)
    }

    pub(crate) fn child_count(&self) -> usize {
        document::child_element_count(self.element)
    }

    /// Wrap a descendant found with `selector` for a nested callback
    pub(crate) fn descendant(&self, element: ElementRef<'a>, selector: &str) -> ElementAssert<'a> {
        ElementAssert::new(element, format!("{} {selector}", self.selector))
    }
}
