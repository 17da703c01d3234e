//! API clients.
//!
//! [`HttpClient`] is the low-level transport: authentication headers,
//! URL construction, response decoding. [`OrderClient`] builds the
//! typed order operations on top of it.

mod errors;
mod http_client;
mod orders;

pub use errors::{HttpError, ResponseError};
pub use http_client::HttpClient;
pub use orders::OrderClient;
