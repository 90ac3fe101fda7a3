//! Response body as captured in a test result.

use std::fmt;

use serde::Serialize;

/// Body of a passing response.
///
/// Structured when the text parses as JSON, the raw text otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// Parsed JSON document.
    Structured(serde_json::Value),
    /// Text that is not valid JSON.
    Raw(String),
}

impl ResponseBody {
    /// Parses `text` as JSON, falling back to the raw text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        serde_json::from_str(text).map_or_else(|_| Self::Raw(text.to_string()), Self::Structured)
    }

    /// Returns the JSON value if the body was structured.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Structured(value) => Some(value),
            Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for ResponseBody {
    /// Pretty JSON for structured bodies, verbatim text otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured(value) => match serde_json::to_string_pretty(value) {
                Ok(pretty) => f.write_str(&pretty),
                Err(_) => write!(f, "{value}"),
            },
            Self::Raw(text) => f.write_str(text),
        }
    }
}
