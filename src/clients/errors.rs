//! HTTP-specific error types for the BigCommerce API client.
//!
//! This module contains error types for HTTP operations, covering the two
//! failure families the API surfaces — transport failures and decode
//! failures — plus task failures from the hydration fan-out.
//!
//! # Error Handling
//!
//! - [`ResponseError`]: Non-2xx HTTP responses from the API
//! - [`HttpError::Network`]: Connection-level failures from `reqwest`
//! - [`HttpError::Decode`]: Malformed or schema-mismatched JSON bodies
//! - [`HttpError::Task`]: A hydration task that panicked or was aborted
//!
//! There is no retry or backoff anywhere in the client: every error is a
//! value returned to the caller, who decides whether to abort or continue.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::HttpError;
//!
//! match client.get_order_count().await {
//!     Ok(count) => println!("{} orders", count.count),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.status, e.body),
//!     Err(HttpError::Decode(e)) => println!("bad payload: {e}"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The response body is carried verbatim; BigCommerce returns a JSON error
/// document for most failures, but the client does not attempt to parse it.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::ResponseError;
///
/// let error = ResponseError {
///     status: 404,
///     body: r#"[{"status":404,"message":"Not Found"}]"#.to_string(),
///     url: "https://api.bigcommerce.com/stores/abc/v2/orders/99".to_string(),
/// };
///
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error)]
#[error("request to {url} returned status {status}: {body}")]
pub struct ResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The raw response body, where available.
    pub body: String,
    /// The URL the request was issued against.
    pub url: String,
}

/// Unified error type for all HTTP operations.
///
/// Transport failures ([`HttpError::Response`], [`HttpError::Network`])
/// are kept distinct from decode failures ([`HttpError::Decode`]) so
/// callers can tell a broken connection from a schema mismatch.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx HTTP response.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Malformed JSON or shape mismatch while decoding a response body.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A hydration task could not be joined (panicked or was aborted).
    #[error("hydration task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl HttpError {
    /// Returns the HTTP status code if this is a response error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.status),
            _ => None,
        }
    }
}
