//! Configuration for body resolution and parse diagnostics

use crate::result::{DomAssertError, DomResult};
use serde::{Deserialize, Serialize};

/// JSON pointer to the HTML embedded in a component-framework update payload
pub const DEFAULT_EMBEDDED_HTML_POINTER: &str = "/components/0/effects/html";

/// DOM assertion configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomConfig {
    /// JSON pointer to the embedded HTML string
    pub embedded_html_pointer: String,
    /// Look for embedded HTML before falling back to the raw body
    pub prefer_embedded_html: bool,
    /// Log recovered HTML parse errors at `warn`
    pub report_parse_errors: bool,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            embedded_html_pointer: DEFAULT_EMBEDDED_HTML_POINTER.to_string(),
            prefer_embedded_html: true,
            report_parse_errors: false,
        }
    }
}

impl DomConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from JSON; missing fields keep their defaults
    ///
    /// # Errors
    ///
    /// Returns [`DomAssertError::Config`] if the JSON does not describe a config.
    pub fn from_json(json: &str) -> DomResult<Self> {
        serde_json::from_str(json).map_err(|e| DomAssertError::Config {
            message: e.to_string(),
        })
    }

    /// Set the JSON pointer used to find embedded HTML
    #[must_use]
    pub fn with_embedded_html_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.embedded_html_pointer = pointer.into();
        self
    }

    /// Enable or disable embedded HTML lookup
    #[must_use]
    pub const fn with_prefer_embedded_html(mut self, prefer: bool) -> Self {
        self.prefer_embedded_html = prefer;
        self
    }

    /// Enable or disable parse error reporting
    #[must_use]
    pub const fn with_report_parse_errors(mut self, report: bool) -> Self {
        self.report_parse_errors = report;
        self
    }
}
