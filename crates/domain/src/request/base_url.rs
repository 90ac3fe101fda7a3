//! Base URL of the service under test.

use std::fmt;

use serde::{Serialize, Serializer};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Root address of the service under test, to which endpoint paths are appended.
///
/// Only absolute `http` and `https` URLs are accepted. A trailing slash is
/// dropped so that joining never produces `//`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    url: Url,
}

impl BaseUrl {
    /// Parses and validates a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the input is not an absolute
    /// `http`/`https` URL.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        let url = Url::parse(trimmed).map_err(|e| DomainError::InvalidUrl(format!("{e}: {trimmed}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "unsupported scheme '{}': {trimmed}",
                url.scheme()
            )));
        }
        if url.host_str().is_none() {
            return Err(DomainError::InvalidUrl(format!("missing host: {trimmed}")));
        }

        Ok(Self { url })
    }

    /// Returns the URL without a trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.url.as_str().trim_end_matches('/')
    }

    /// Builds `{base_url}/{endpoint}`.
    #[must_use]
    pub fn join(&self, endpoint: &str) -> String {
        format!("{}/{}", self.as_str(), endpoint.trim_start_matches('/'))
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_join_endpoint() {
        let base = BaseUrl::parse("https://example.com").unwrap();
        assert_eq!(base.join("api/contact"), "https://example.com/api/contact");
    }

    #[test]
    fn test_trailing_slash_not_doubled() {
        let base = BaseUrl::parse("http://localhost:8001/").unwrap();
        assert_eq!(base.as_str(), "http://localhost:8001");
        assert_eq!(base.join("api"), "http://localhost:8001/api");
    }

    #[test]
    fn test_path_prefix_preserved() {
        let base = BaseUrl::parse("http://localhost/backend/").unwrap();
        assert_eq!(base.join("api"), "http://localhost/backend/api");
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(matches!(
            BaseUrl::parse("/api"),
            Err(DomainError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        assert!(matches!(
            BaseUrl::parse("ftp://example.com"),
            Err(DomainError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_serializes_as_string() {
        let base = BaseUrl::parse("https://example.com/").unwrap();
        assert_eq!(
            serde_json::to_string(&base).unwrap(),
            r#""https://example.com""#
        );
    }
}
