//! Configuration types for the BigCommerce API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication with a BigCommerce store.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`BigCommerceConfig`]: The main configuration struct holding all client settings
//! - [`BigCommerceConfigBuilder`]: A builder for constructing [`BigCommerceConfig`] instances
//! - [`AuthToken`]: A validated auth token newtype with masked debug output
//! - [`AuthClientId`]: A validated auth client ID newtype
//! - [`StoreHash`]: A validated store hash
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{AuthClientId, AuthToken, BigCommerceConfig, StoreHash};
//!
//! let config = BigCommerceConfig::builder()
//!     .auth_token(AuthToken::new("my-token").unwrap())
//!     .auth_client(AuthClientId::new("my-client-id").unwrap())
//!     .store_hash(StoreHash::new("abc123xyz").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AuthClientId, AuthToken, StoreHash};

use crate::error::ConfigError;

/// Default base URL for the BigCommerce stores API.
pub const DEFAULT_BASE_URL: &str = "https://api.bigcommerce.com/stores/";

/// Default cap on simultaneously in-flight sub-resource fetches per
/// hydration call.
pub const DEFAULT_MAX_CONCURRENCY: usize = 20;

/// Configuration for the BigCommerce API client.
///
/// This struct holds everything the client needs for the lifetime of a
/// connection: credentials, the store hash, the API base URL, and the
/// hydration concurrency cap.
///
/// # Thread Safety
///
/// `BigCommerceConfig` is `Clone`, `Send`, and `Sync`, making it safe to
/// share across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{AuthClientId, AuthToken, BigCommerceConfig, StoreHash};
///
/// let config = BigCommerceConfig::builder()
///     .auth_token(AuthToken::new("my-token").unwrap())
///     .auth_client(AuthClientId::new("my-client-id").unwrap())
///     .store_hash(StoreHash::new("abc123xyz").unwrap())
///     .max_concurrency(8)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_concurrency(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct BigCommerceConfig {
    auth_token: AuthToken,
    auth_client: AuthClientId,
    store_hash: StoreHash,
    base_url: String,
    max_concurrency: usize,
}

impl BigCommerceConfig {
    /// Creates a new builder for constructing a `BigCommerceConfig`.
    #[must_use]
    pub fn builder() -> BigCommerceConfigBuilder {
        BigCommerceConfigBuilder::new()
    }

    /// Returns the auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the auth client ID.
    #[must_use]
    pub const fn auth_client(&self) -> &AuthClientId {
        &self.auth_client
    }

    /// Returns the store hash.
    #[must_use]
    pub const fn store_hash(&self) -> &StoreHash {
        &self.store_hash
    }

    /// Returns the API base URL, including the trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the hydration concurrency cap.
    #[must_use]
    pub const fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }
}

// Verify BigCommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigCommerceConfig>();
};

/// Builder for constructing [`BigCommerceConfig`] instances.
///
/// Required fields are `auth_token`, `auth_client`, and `store_hash`.
/// All other fields have defaults.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `max_concurrency`: [`DEFAULT_MAX_CONCURRENCY`]
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{AuthClientId, AuthToken, BigCommerceConfig, StoreHash};
///
/// let config = BigCommerceConfig::builder()
///     .auth_token(AuthToken::new("token").unwrap())
///     .auth_client(AuthClientId::new("client").unwrap())
///     .store_hash(StoreHash::new("abc123").unwrap())
///     .base_url("https://sandbox.example.com/stores/")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url(), "https://sandbox.example.com/stores/");
/// ```
#[derive(Debug, Default)]
pub struct BigCommerceConfigBuilder {
    auth_token: Option<AuthToken>,
    auth_client: Option<AuthClientId>,
    store_hash: Option<StoreHash>,
    base_url: Option<String>,
    max_concurrency: Option<usize>,
}

impl BigCommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the auth token (required).
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Sets the auth client ID (required).
    #[must_use]
    pub fn auth_client(mut self, client_id: AuthClientId) -> Self {
        self.auth_client = Some(client_id);
        self
    }

    /// Sets the store hash (required).
    #[must_use]
    pub fn store_hash(mut self, hash: StoreHash) -> Self {
        self.store_hash = Some(hash);
        self
    }

    /// Overrides the default base URL.
    ///
    /// Mostly useful for pointing the client at a sandbox or a mock
    /// server in tests. A trailing slash is appended if missing.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Overrides the hydration concurrency cap.
    #[must_use]
    pub const fn max_concurrency(mut self, cap: usize) -> Self {
        self.max_concurrency = Some(cap);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `auth_token`,
    /// `auth_client`, or `store_hash` was not set,
    /// [`ConfigError::InvalidBaseUrl`] if the base URL override is not an
    /// http(s) URL, and [`ConfigError::InvalidConcurrencyCap`] if the
    /// concurrency cap is zero.
    pub fn build(self) -> Result<BigCommerceConfig, ConfigError> {
        let auth_token = self
            .auth_token
            .ok_or(ConfigError::MissingRequiredField { field: "auth_token" })?;
        let auth_client = self.auth_client.ok_or(ConfigError::MissingRequiredField {
            field: "auth_client",
        })?;
        let store_hash = self
            .store_hash
            .ok_or(ConfigError::MissingRequiredField { field: "store_hash" })?;

        let mut base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl { url: base_url });
        }
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let max_concurrency = self.max_concurrency.unwrap_or(DEFAULT_MAX_CONCURRENCY);
        if max_concurrency == 0 {
            return Err(ConfigError::InvalidConcurrencyCap { cap: 0 });
        }

        Ok(BigCommerceConfig {
            auth_token,
            auth_client,
            store_hash,
            base_url,
            max_concurrency,
        })
    }
}
