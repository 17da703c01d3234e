//! Shipment records from the `/orders/{id}/shipments` sub-resource.

use serde::{Deserialize, Serialize};

use super::address::Address;
use super::primitives::{money, optional_date, BcDate};

/// A line item included in a shipment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShipmentItem {
    /// The order product line being shipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_product_id: Option<i64>,

    /// The catalog product being shipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,

    /// Quantity of the line included in this shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

/// A shipment created against an order.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::resources::Shipment;
///
/// let json = r#"{
///     "id": 12,
///     "order_id": 118,
///     "tracking_number": "1Z1234",
///     "merchant_shipping_cost": "7.9500",
///     "items": [{"order_product_id": 16, "product_id": 81, "quantity": 1}]
/// }"#;
///
/// let shipment: Shipment = serde_json::from_str(json).unwrap();
/// assert_eq!(shipment.order_id, Some(118));
/// assert_eq!(shipment.items.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Shipment {
    /// The unique identifier of the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The ID of the order this shipment belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    /// The ID of the customer the order belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,

    /// The shipping address the shipment targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_address_id: Option<i64>,

    /// When the shipment was created.
    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<BcDate>,

    /// Carrier tracking number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    /// What the merchant paid to ship.
    #[serde(default, with = "money")]
    pub merchant_shipping_cost: f64,

    /// The shipping method used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method: Option<String>,

    /// Free-form comments on the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    /// The shipping provider used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_provider: Option<String>,

    /// The carrier used for tracking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_carrier: Option<String>,

    /// A link to the carrier's tracking page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_link: Option<String>,

    /// The order's billing address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,

    /// The address the shipment was sent to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    /// The order lines included in the shipment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ShipmentItem>,
}
