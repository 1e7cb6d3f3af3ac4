//! Response bodies and HTML body resolution.
//!
//! Anything exposing raw body bytes can be asserted on. Component-framework
//! update payloads carry the rendered HTML inside JSON; when such a payload is
//! recognised the embedded HTML is used, otherwise the whole body is HTML.

use crate::config::DomConfig;
use crate::result::DomResult;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;

/// Source of a response body
pub trait ResponseBody {
    /// Raw body bytes
    fn body(&self) -> &[u8];
}

impl ResponseBody for str {
    fn body(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ResponseBody for String {
    fn body(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ResponseBody for [u8] {
    fn body(&self) -> &[u8] {
        self
    }
}

impl ResponseBody for Vec<u8> {
    fn body(&self) -> &[u8] {
        self
    }
}

/// An in-memory HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Content type
    pub content_type: String,
    /// Response body
    pub body: Vec<u8>,
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self {
            status: 200,
            headers: HashMap::new(),
            content_type: "text/html; charset=utf-8".to_string(),
            body: Vec::new(),
        }
    }
}

impl HttpResponse {
    /// Create an empty `200` response
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an HTML response
    #[must_use]
    pub fn html(content: &str) -> Self {
        Self {
            body: content.as_bytes().to_vec(),
            ..Self::default()
        }
    }

    /// Create a JSON response
    ///
    /// # Errors
    ///
    /// Returns [`DomAssertError::Json`](crate::DomAssertError::Json) if `data` cannot be serialized.
    pub fn json<T: Serialize>(data: &T) -> DomResult<Self> {
        Ok(Self {
            body: serde_json::to_vec(data)?,
            content_type: "application/json".to_string(),
            ..Self::default()
        })
    }

    /// Create a component update response embedding `html` at
    /// `components[0].effects.html`
    #[must_use]
    pub fn component(html: &str) -> Self {
        let payload = serde_json::json!({
            "components": [{ "effects": { "html": html } }]
        });
        Self {
            body: payload.to_string().into_bytes(),
            content_type: "application/json".to_string(),
            ..Self::default()
        }
    }

    /// Set status code
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Add a header
    #[must_use]
    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    /// Set body
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Get body as string
    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

impl ResponseBody for HttpResponse {
    fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Where the inspected HTML came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySource {
    /// Extracted from a JSON payload
    Embedded,
    /// The raw body
    Raw,
}

/// Pick the HTML to inspect: embedded HTML if the body is JSON holding a
/// string at the configured pointer, otherwise the raw body (lossy UTF-8).
#[must_use]
pub fn resolve_html<'b>(body: &'b [u8], config: &DomConfig) -> (Cow<'b, str>, BodySource) {
    if config.prefer_embedded_html {
        if let Some(html) = embedded_html(body, &config.embedded_html_pointer) {
            return (Cow::Owned(html), BodySource::Embedded);
        }
    }
    (String::from_utf8_lossy(body), BodySource::Raw)
}

fn embedded_html(body: &[u8], pointer: &str) -> Option<String> {
    let payload: serde_json::Value = serde_json::from_slice(body).ok()?;
    payload.pointer(pointer)?.as_str().map(str::to_string)
}
