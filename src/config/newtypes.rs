//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated BigCommerce API auth token.
///
/// This newtype ensures the token is non-empty and masks its value in
/// debug output to prevent accidental exposure in logs. The token is sent
/// as the `X-Auth-Token` header on every request.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AuthToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::AuthToken;
///
/// let token = AuthToken::new("my-auth-token").unwrap();
/// assert_eq!(token.as_ref(), "my-auth-token");
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// A validated BigCommerce API client ID.
///
/// This newtype ensures the client ID is non-empty and provides type
/// safety to prevent accidental misuse of raw strings. The value is sent
/// as the `X-Auth-Client` header on every request.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::AuthClientId;
///
/// let client_id = AuthClientId::new("my-client-id").unwrap();
/// assert_eq!(client_id.as_ref(), "my-client-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthClientId(String);

impl AuthClientId {
    /// Creates a new validated auth client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthClient`] if the value is empty.
    pub fn new(client_id: impl Into<String>) -> Result<Self, ConfigError> {
        let client_id = client_id.into();
        if client_id.is_empty() {
            return Err(ConfigError::EmptyAuthClient);
        }
        Ok(Self(client_id))
    }
}

impl AsRef<str> for AuthClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated BigCommerce store hash.
///
/// The store hash is the short store identifier that appears in API paths,
/// e.g. the `abc123xyz` in `https://api.bigcommerce.com/stores/abc123xyz/v2/orders/`.
/// It must be non-empty and contain only alphanumeric characters.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::StoreHash;
///
/// let hash = StoreHash::new("abc123xyz").unwrap();
/// assert_eq!(hash.as_ref(), "abc123xyz");
///
/// assert!(StoreHash::new("not a hash!").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreHash(String);

impl StoreHash {
    /// Creates a new validated store hash.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreHash`] if the hash is empty or
    /// contains characters outside `[a-z0-9]` (case-insensitive).
    pub fn new(hash: impl Into<String>) -> Result<Self, ConfigError> {
        let hash = hash.into();
        if hash.is_empty() || !hash.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidStoreHash { hash });
        }
        Ok(Self(hash))
    }
}

impl AsRef<str> for StoreHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_token_accepts_non_empty_value() {
        let token = AuthToken::new("valid-token").unwrap();
        assert_eq!(token.as_ref(), "valid-token");
    }

    #[test]
    fn test_auth_token_rejects_empty_value() {
        assert_eq!(AuthToken::new(""), Err(ConfigError::EmptyAuthToken));
    }

    #[test]
    fn test_auth_token_debug_is_masked() {
        let token = AuthToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert_eq!(debug, "AuthToken(*****)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_auth_client_id_accepts_non_empty_value() {
        let client_id = AuthClientId::new("client-abc").unwrap();
        assert_eq!(client_id.as_ref(), "client-abc");
    }

    #[test]
    fn test_auth_client_id_rejects_empty_value() {
        assert_eq!(AuthClientId::new(""), Err(ConfigError::EmptyAuthClient));
    }

    #[test]
    fn test_store_hash_accepts_alphanumeric() {
        let hash = StoreHash::new("abc123xyz").unwrap();
        assert_eq!(hash.as_ref(), "abc123xyz");
        assert_eq!(hash.to_string(), "abc123xyz");
    }

    #[test]
    fn test_store_hash_rejects_empty() {
        assert!(matches!(
            StoreHash::new(""),
            Err(ConfigError::InvalidStoreHash { .. })
        ));
    }

    #[test]
    fn test_store_hash_rejects_path_characters() {
        for bad in ["abc/123", "abc 123", "abc.123", "store-hash"] {
            assert!(
                matches!(StoreHash::new(bad), Err(ConfigError::InvalidStoreHash { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }
}
