//! Thin layer over the HTML parser and CSS selector engine.
//!
//! Parsing is lenient: malformed markup is recovered into a tree the same way
//! a browser would, and recovered errors are only reported through tracing.

use crate::result::{DomAssertError, DomResult};
use scraper::{ElementRef, Html, Selector};

/// Parse a full HTML document
#[must_use]
pub fn parse(html: &str, report_errors: bool) -> Html {
    let document = Html::parse_document(html);
    if report_errors && !document.errors.is_empty() {
        tracing::warn!(
            count = document.errors.len(),
            first = %document.errors[0],
            "recovered from HTML parse errors"
        );
    }
    document
}

/// Compile a CSS selector
///
/// # Errors
///
/// Returns [`DomAssertError::InvalidSelector`] if the selector engine rejects it.
pub fn compile(selector: &str) -> DomResult<Selector> {
    Selector::parse(selector)
        .map_err(|e| DomAssertError::invalid_selector(selector, e.to_string()))
}

/// First element in document order matching `selector`
///
/// # Errors
///
/// Returns [`DomAssertError::InvalidSelector`] for unparseable selectors.
pub fn select_first<'a>(document: &'a Html, selector: &str) -> DomResult<Option<ElementRef<'a>>> {
    let compiled = compile(selector)?;
    Ok(document.select(&compiled).next())
}

/// Every element matching `selector`, in document order
///
/// # Errors
///
/// Returns [`DomAssertError::InvalidSelector`] for unparseable selectors.
pub fn select_all<'a>(document: &'a Html, selector: &str) -> DomResult<Vec<ElementRef<'a>>> {
    let compiled = compile(selector)?;
    Ok(document.select(&compiled).collect())
}

/// Descendants of `element` (at any depth, excluding itself) matching `selector`
///
/// # Errors
///
/// Returns [`DomAssertError::InvalidSelector`] for unparseable selectors.
pub fn select_descendants<'a>(
    element: ElementRef<'a>,
    selector: &str,
) -> DomResult<Vec<ElementRef<'a>>> {
    let compiled = compile(selector)?;
    Ok(element.select(&compiled).collect())
}

/// Lower-case local tag name
#[must_use]
pub fn tag_name(element: ElementRef<'_>) -> &str {
    element.value().name()
}

/// Concatenated text of every descendant text node
#[must_use]
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Serialized markup of the element's children
#[must_use]
pub fn inner_html(element: ElementRef<'_>) -> String {
    element.inner_html()
}

/// Attribute value, `None` when the attribute is absent
#[must_use]
pub fn attribute<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

/// Number of immediate child elements (text and comment nodes excluded)
#[must_use]
pub fn child_element_count(element: ElementRef<'_>) -> usize {
    element.children().filter_map(ElementRef::wrap).count()
}
