//! REST building blocks for the V2 API.
//!
//! This module holds the pieces the [`OrderClient`](crate::clients::OrderClient)
//! is composed from:
//!
//! - [`resources`]: the typed records responses decode into
//! - [`ResourceRef`]: embedded sub-resource pointers
//! - [`OrderQuery`]: structured list-query parameters
//! - [`hydration`]: the bounded-concurrency pointer resolution core
//! - [`pagination`]: the page-walking list helper

pub mod hydration;
pub mod pagination;
pub mod resources;

mod query;
mod resource;

pub use query::OrderQuery;
pub use resource::ResourceRef;
