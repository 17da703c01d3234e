//! # BigCommerce API Rust Client
//!
//! A Rust client for the BigCommerce V2 Orders API, providing type-safe
//! configuration, authenticated HTTP transport, and concurrent hydration
//! of orders with their sub-resources.
//!
//! ## Overview
//!
//! This client provides:
//! - Type-safe configuration via [`BigCommerceConfig`] and [`BigCommerceConfigBuilder`]
//! - Validated newtypes for API credentials and the store hash
//! - Typed order, product, address, coupon, shipment, and status records
//! - Structured list queries via [`OrderQuery`] with deterministic serialization
//! - Transparent pagination over V2 list endpoints
//! - Bounded-concurrency hydration of order sub-resources via [`rest::hydration`]
//! - Async HTTP transport with authentication headers applied per request
//!
//! ## Quick Start
//!
//! ```rust
//! use bigcommerce_api::{AuthClientId, AuthToken, BigCommerceConfig, StoreHash};
//!
//! // Create configuration using the builder pattern
//! let config = BigCommerceConfig::builder()
//!     .auth_token(AuthToken::new("your-auth-token").unwrap())
//!     .auth_client(AuthClientId::new("your-client-id").unwrap())
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Fetching Orders
//!
//! ```rust,ignore
//! use bigcommerce_api::{OrderClient, OrderQuery};
//!
//! let client = OrderClient::new(&config);
//!
//! // All orders in a status, sorted by ID, every page fetched
//! let orders = client.get_orders(11).await?;
//!
//! // The same orders with products, shipping addresses, coupons, and
//! // shipments filled in, fetched concurrently under the configured cap
//! let hydrated = client
//!     .get_hydrated_orders(&OrderQuery {
//!         status_id: Some(11),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```
//!
//! ## Counts and Statuses
//!
//! ```rust,ignore
//! // Per-status order counts, sorted by display order
//! let counts = client.get_order_count().await?;
//! for status in &counts.statuses {
//!     println!("{}: {}", status.name, status.count);
//! }
//!
//! // The store's status catalog
//! let statuses = client.get_order_statuses().await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Bounded concurrency**: Hydration never exceeds the configured cap,
//!   regardless of how many orders are in flight

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    AuthClientId, AuthToken, BigCommerceConfig, BigCommerceConfigBuilder, StoreHash,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{HttpClient, HttpError, OrderClient, ResponseError};

// Re-export the query and record types callers touch directly
pub use rest::resources::{
    Address, BcDate, Coupon, FormField, Maybe, Order, OrderCount, OrderProduct, OrderStatus,
    Shipment, ShipmentItem, ShippingAddress, StatusCount,
};
pub use rest::{OrderQuery, ResourceRef};
