//! Request specification type

use super::HttpMethod;

/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A single outgoing HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute target URL
    pub url: String,
    /// JSON body, only ever set for methods that carry one
    pub body: Option<serde_json::Value>,
}

impl RequestSpec {
    /// Creates a request without a body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
        }
    }

    /// Attaches a JSON payload.
    ///
    /// The payload is dropped for methods without a body, so a GET never
    /// sends one.
    #[must_use]
    pub fn with_payload(mut self, payload: Option<serde_json::Value>) -> Self {
        self.body = payload.filter(|_| self.method.has_body());
        self
    }

    /// Content type header value for this request.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }
}
