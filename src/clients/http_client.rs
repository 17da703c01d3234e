//! HTTP transport for BigCommerce API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! GET requests against the BigCommerce stores API and decoding the JSON
//! bodies that come back.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::{HttpError, ResponseError};
use crate::config::BigCommerceConfig;

/// HTTP transport for the BigCommerce API.
///
/// The client handles:
/// - Endpoint URL construction from the configured base URL and store hash
/// - The four fixed headers every request carries (`Accept`,
///   `Content-Type`, `X-Auth-Token`, `X-Auth-Client`)
/// - Status-code interpretation: any non-2xx response becomes a
///   [`ResponseError`] carrying the status and body
/// - JSON decoding, with the BigCommerce convention that an empty body is
///   a valid "nothing here" response rather than an error
///
/// # Thread Safety
///
/// `HttpClient` is `Clone`, `Send + Sync`, and cheap to clone — the
/// hydration fan-out clones one handle per spawned task.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::clients::HttpClient;
///
/// let client = HttpClient::new(&config);
/// let orders: Option<Vec<Order>> = client.get_json("v2/orders/").await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL including trailing slash (e.g., `https://api.bigcommerce.com/stores/`).
    base_url: String,
    /// The store hash appended between base URL and versioned path.
    store_hash: String,
    /// The fixed headers included in every request.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &BigCommerceConfig) -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("accept".to_string(), "application/json".to_string());
        default_headers.insert("content-type".to_string(), "application/json".to_string());
        default_headers.insert(
            "x-auth-token".to_string(),
            config.auth_token().as_ref().to_string(),
        );
        default_headers.insert(
            "x-auth-client".to_string(),
            config.auth_client().as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().to_string(),
            store_hash: config.store_hash().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the store hash for this client.
    #[must_use]
    pub fn store_hash(&self) -> &str {
        &self.store_hash
    }

    /// Returns the fixed headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the fully qualified URL for a store endpoint.
    ///
    /// The endpoint is a versioned path without a leading slash, e.g.
    /// `v2/orders/` or `v2/orders/count`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let url = client.endpoint_url("v2/orders/count");
    /// // https://api.bigcommerce.com/stores/abc123/v2/orders/count
    /// ```
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}/{}", self.base_url, self.store_hash, endpoint)
    }

    /// Issues a GET against a fully qualified URL and returns the raw body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] on connection failure and
    /// [`HttpError::Response`] when the response status is not in the
    /// success range.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        tracing::debug!(url, "issuing GET request");

        let mut request = self.client.get(url);
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            tracing::warn!(url, status = status.as_u16(), "request failed");
            return Err(HttpError::Response(ResponseError {
                status: status.as_u16(),
                body,
                url: url.to_string(),
            }));
        }

        Ok(body.to_vec())
    }

    /// Issues a GET against a fully qualified URL and decodes the JSON body.
    ///
    /// Resource-pointer URLs embedded in decoded entities are already
    /// fully qualified, so they are passed here verbatim rather than
    /// re-derived from the endpoint pattern.
    ///
    /// Returns `Ok(None)` when the body is empty: BigCommerce answers
    /// some list endpoints with `204 No Content`, and an empty body must
    /// leave the caller's target untouched rather than error.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] or [`HttpError::Response`] for
    /// transport failures, and [`HttpError::Decode`] when a non-empty
    /// body is malformed or does not match `T`.
    pub async fn get_json_raw<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Option<T>, HttpError> {
        let body = self.get_bytes(url).await?;
        if body.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&body)?))
    }

    /// Issues a GET against a store endpoint and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::get_json_raw`].
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<Option<T>, HttpError> {
        self.get_json_raw(&self.endpoint_url(endpoint)).await
    }

    /// Issues a GET against a store endpoint with a raw query string
    /// appended and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::get_json_raw`].
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        raw_query: &str,
    ) -> Result<Option<T>, HttpError> {
        let mut url = self.endpoint_url(endpoint);
        if !raw_query.is_empty() {
            url.push('?');
            url.push_str(raw_query);
        }
        self.get_json_raw(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthClientId, AuthToken, StoreHash};

    fn create_test_config() -> BigCommerceConfig {
        BigCommerceConfig::builder()
            .auth_token(AuthToken::new("test-token").unwrap())
            .auth_client(AuthClientId::new("test-client").unwrap())
            .store_hash(StoreHash::new("abc123").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_fixed_headers_are_attached() {
        let client = HttpClient::new(&create_test_config());
        let headers = client.default_headers();

        assert_eq!(headers.get("accept"), Some(&"application/json".to_string()));
        assert_eq!(
            headers.get("content-type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(headers.get("x-auth-token"), Some(&"test-token".to_string()));
        assert_eq!(headers.get("x-auth-client"), Some(&"test-client".to_string()));
        assert_eq!(headers.len(), 4);
    }

    #[test]
    fn test_endpoint_url_construction() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.endpoint_url("v2/orders/"),
            "https://api.bigcommerce.com/stores/abc123/v2/orders/"
        );
        assert_eq!(
            client.endpoint_url("v2/orders/count"),
            "https://api.bigcommerce.com/stores/abc123/v2/orders/count"
        );
    }

    #[test]
    fn test_base_url_override_is_respected() {
        let config = BigCommerceConfig::builder()
            .auth_token(AuthToken::new("test-token").unwrap())
            .auth_client(AuthClientId::new("test-client").unwrap())
            .store_hash(StoreHash::new("abc123").unwrap())
            .base_url("https://mock.example.com/stores/")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        assert_eq!(
            client.endpoint_url("v2/order_statuses"),
            "https://mock.example.com/stores/abc123/v2/order_statuses"
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
