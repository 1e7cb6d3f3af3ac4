//! Entry points: resolve a response body, select elements, run the callback.
//!
//! ```
//! use assert_dom::prelude::*;
//!
//! # fn main() -> DomResult<()> {
//! let response = HttpResponse::html(r#"<div class="card"><h1>Title</h1></div>"#);
//!
//! response.assert_dom(".card", |card| {
//!     card.to_be_tag("div")?.to_have("h1")?;
//!     Ok(())
//! })?;
//! # Ok(())
//! # }
//! ```

use crate::assertion::element::ElementAssert;
use crate::config::DomConfig;
use crate::document;
use crate::response::{resolve_html, ResponseBody};
use crate::result::{DomAssertError, DomResult};
use scraper::Html;

/// Runs DOM assertions against responses with a given configuration
#[derive(Debug, Clone, Default)]
pub struct DomAsserter {
    config: DomConfig,
}

impl DomAsserter {
    /// Create an asserter with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an asserter with a custom configuration
    #[must_use]
    pub const fn with_config(config: DomConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &DomConfig {
        &self.config
    }

    /// Resolve and parse the HTML carried by `response`
    #[must_use]
    pub fn document<R>(&self, response: &R) -> Html
    where
        R: ResponseBody + ?Sized,
    {
        let (html, source) = resolve_html(response.body(), &self.config);
        tracing::debug!(?source, bytes = html.len(), "resolved response body");
        document::parse(&html, self.config.report_parse_errors)
    }

    /// Run `callback` against the first element matching `selector`.
    ///
    /// # Errors
    ///
    /// [`DomAssertError::ElementNotFound`] when nothing matches, otherwise the
    /// first error raised by `callback`.
    pub fn assert_one<'r, R, F>(&self, response: &'r R, selector: &str, callback: F) -> DomResult<&'r R>
    where
        R: ResponseBody + ?Sized,
        F: FnOnce(&ElementAssert<'_>) -> DomResult<()>,
    {
        let html = self.document(response);
        let element = document::select_first(&html, selector)?.ok_or_else(|| {
            DomAssertError::ElementNotFound {
                selector: selector.to_string(),
            }
        })?;
        tracing::debug!(selector, "assert_one matched");

        callback(&ElementAssert::new(element, selector))?;
        Ok(response)
    }

    /// Run `callback` against every element matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// [`DomAssertError::NoMatches`] when nothing matches, otherwise the first
    /// error raised by `callback` (later elements are not visited).
    pub fn assert_all<'r, R, F>(&self, response: &'r R, selector: &str, mut callback: F) -> DomResult<&'r R>
    where
        R: ResponseBody + ?Sized,
        F: FnMut(&ElementAssert<'_>) -> DomResult<()>,
    {
        let html = self.document(response);
        let elements = document::select_all(&html, selector)?;
        if elements.is_empty() {
            return Err(DomAssertError::NoMatches {
                selector: selector.to_string(),
            });
        }
        tracing::debug!(selector, matches = elements.len(), "assert_all matched");

        for element in elements {
            callback(&ElementAssert::new(element, selector))?;
        }
        Ok(response)
    }
}

/// [`DomAsserter::assert_one`] with the default configuration
///
/// # Errors
///
/// See [`DomAsserter::assert_one`].
pub fn assert_one<'r, R, F>(response: &'r R, selector: &str, callback: F) -> DomResult<&'r R>
where
    R: ResponseBody + ?Sized,
    F: FnOnce(&ElementAssert<'_>) -> DomResult<()>,
{
    DomAsserter::new().assert_one(response, selector, callback)
}

/// [`DomAsserter::assert_all`] with the default configuration
///
/// # Errors
///
/// See [`DomAsserter::assert_all`].
pub fn assert_all<'r, R, F>(response: &'r R, selector: &str, callback: F) -> DomResult<&'r R>
where
    R: ResponseBody + ?Sized,
    F: FnMut(&ElementAssert<'_>) -> DomResult<()>,
{
    DomAsserter::new().assert_all(response, selector, callback)
}

/// DOM assertions as methods on any response; bring into scope to use
pub trait AssertDom: ResponseBody {
    /// See [`assert_one`]
    ///
    /// # Errors
    ///
    /// See [`DomAsserter::assert_one`].
    fn assert_dom<F>(&self, selector: &str, callback: F) -> DomResult<&Self>
    where
        F: FnOnce(&ElementAssert<'_>) -> DomResult<()>,
    {
        assert_one(self, selector, callback)
    }

    /// See [`assert_all`]
    ///
    /// # Errors
    ///
    /// See [`DomAsserter::assert_all`].
    fn assert_dom_all<F>(&self, selector: &str, callback: F) -> DomResult<&Self>
    where
        F: FnMut(&ElementAssert<'_>) -> DomResult<()>,
    {
        assert_all(self, selector, callback)
    }
}

impl<T: ResponseBody + ?Sized> AssertDom for T {}
