//! assert-dom: fluent DOM assertions for HTTP test responses
//!
//! Parse the HTML carried by a response (either the raw body or the markup
//! embedded in a component-framework JSON update), select elements with CSS
//! selectors, and chain Playwright-style expectations over them. Failures are
//! returned as [`DomAssertError`] values and propagate with `?`.
//!
//! # Example
//!
//! ```
//! use assert_dom::prelude::*;
//!
//! # fn main() -> DomResult<()> {
//! let response = HttpResponse::html(
//!     r#"<ul class="nav">
//!          <li class="item active">Home</li>
//!          <li class="item">About</li>
//!        </ul>"#,
//! );
//!
//! assert_one(&response, ".nav", |nav| {
//!     nav.to_be_tag("ul")?
//!         .to_have_exactly("li", 2)?
//!         .to_have_satisfying(".active", |item| {
//!             item.text().to_equal("Home")?;
//!             Ok(())
//!         })?
//!         .not()
//!         .to_have(".error")?;
//!     Ok(())
//! })?;
//!
//! response.assert_dom_all(".item", |item| {
//!     item.class().to_contain("item")?.text().not().to_be_empty()?;
//!     Ok(())
//! })?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod assertion;
mod config;
pub mod document;
mod entry;
mod response;
mod result;
mod tracing_support;

pub use assertion::element::{DescendantCheck, Descendants, ElementAssert};
pub use assertion::negated_element::NegatedElementAssert;
pub use assertion::negated_string::NegatedStringAssert;
pub use assertion::string::StringAssert;
pub use assertion::{attempt, AssertionResult, Trial};
pub use config::{DomConfig, DEFAULT_EMBEDDED_HTML_POINTER};
pub use entry::{assert_all, assert_one, AssertDom, DomAsserter};
pub use response::{resolve_html, BodySource, HttpResponse, ResponseBody};
pub use result::{DomAssertError, DomResult};
pub use tracing_support::init_test_tracing;

/// Prelude for convenient imports
pub mod prelude {
    pub use super::{
        assert_all, assert_one, AssertDom, Descendants, DomAssertError, DomAsserter, DomConfig,
        DomResult, ElementAssert, HttpResponse, ResponseBody, StringAssert,
    };
}
