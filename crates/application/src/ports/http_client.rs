//! HTTP Client port

use std::future::Future;
use std::pin::Pin;

use apiprobe_domain::{RequestSpec, ResponseSpec};
use thiserror::Error;

/// Transport-level failures: no response was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpClientError {
    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete in time.
    #[error("request timed out")]
    Timeout,

    /// Host name resolution failed.
    #[error("could not resolve host '{host}': {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Underlying error message.
        message: String,
    },

    /// Nothing is listening on the target address.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The redirect limit was exceeded.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Redirect limit.
        max: usize,
    },

    /// Any other transport error.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, so the runner can be
/// driven by reqwest in production and by an in-memory fake in tests.
pub trait HttpClient: Send + Sync {
    /// Executes a request and returns the response.
    ///
    /// Any status code, including 4xx and 5xx, is a successful round trip.
    ///
    /// # Errors
    ///
    /// Returns an error only when no response was obtained.
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + '_>>;
}
