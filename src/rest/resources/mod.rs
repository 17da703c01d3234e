//! Typed records for the V2 API.
//!
//! These are the declarative data shapes the client decodes responses
//! into: orders and their sub-resources (products, shipping addresses,
//! coupons, shipments), the status catalog, and the count aggregates,
//! plus the wire-format primitives they share.

mod address;
mod coupon;
mod order;
mod primitives;
mod product;
mod shipment;
mod status;

pub use address::{Address, FormField, ShippingAddress};
pub use coupon::Coupon;
pub use order::Order;
pub use primitives::{BcDate, Maybe};
pub use product::{AppliedDiscount, OrderProduct, ProductOption};
pub use shipment::{Shipment, ShipmentItem};
pub use status::{OrderCount, OrderStatus, StatusCount};
