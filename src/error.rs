//! Error types for client configuration.
//!
//! This module contains the error type used when constructing and
//! validating [`crate::BigCommerceConfig`] and its newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{AuthToken, ConfigError};
//!
//! let result = AuthToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAuthToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message describing
/// what was invalid and how to correct it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Please provide a valid BigCommerce X-Auth-Token value.")]
    EmptyAuthToken,

    /// Auth client ID cannot be empty.
    #[error(
        "Auth client ID cannot be empty. Please provide a valid BigCommerce X-Auth-Client value."
    )]
    EmptyAuthClient,

    /// Store hash is invalid.
    #[error("Invalid store hash '{hash}'. Expected the short store identifier from your API path (e.g., 'abc123xyz').")]
    InvalidStoreHash {
        /// The invalid store hash that was provided.
        hash: String,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an http(s) URL ending in '/' (e.g., 'https://api.bigcommerce.com/stores/').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The hydration concurrency cap must be at least 1.
    #[error("Invalid concurrency cap {cap}. The hydration fan-out needs at least one permit.")]
    InvalidConcurrencyCap {
        /// The invalid cap that was provided.
        cap: usize,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
