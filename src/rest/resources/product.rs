//! Order product records from the `/orders/{id}/products` sub-resource.

use serde::{Deserialize, Serialize};

use super::primitives::{money, Maybe};

/// A discount applied to an order product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppliedDiscount {
    /// Identifier of the discount rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Amount discounted from the product.
    #[serde(default, with = "money")]
    pub amount: f64,

    /// Display name of the discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Coupon code tied to the discount, if any. The API leaves this
    /// field untyped and frequently null.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub code: Maybe<String>,

    /// What the discount targets (e.g. `order` or `product`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// A configured option on an order product (size, color, and so on).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductOption {
    /// The unique identifier of this option row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The ID of the option definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_id: Option<i64>,

    /// The ID of the order product this option belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_product_id: Option<i64>,

    /// The ID of the product option relationship.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_option_id: Option<i64>,

    /// Merchant-facing option name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Merchant-facing option value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,

    /// The raw option value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// The option type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub option_type: Option<String>,

    /// The internal option name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// How the option is rendered at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_style: Option<String>,
}

/// A product line on an order.
///
/// This is the superset shape of the `/orders/{id}/products` record:
/// money fields decode to `f64` from the API's decimal strings, and the
/// untyped external identifiers are modeled with
/// [`Maybe`](super::primitives::Maybe).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderProduct {
    /// The unique identifier of the order product line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The ID of the order this line belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    /// The ID of the catalog product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,

    /// The ID of the shipping address this line ships to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_address_id: Option<i64>,

    /// The product name at time of purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The product SKU at time of purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The product UPC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,

    /// The product type (`physical` or `digital`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// The list price of the product.
    #[serde(default, with = "money")]
    pub base_price: f64,

    /// Unit price excluding tax.
    #[serde(default, with = "money")]
    pub price_ex_tax: f64,

    /// Unit price including tax.
    #[serde(default, with = "money")]
    pub price_inc_tax: f64,

    /// Tax on the unit price.
    #[serde(default, with = "money")]
    pub price_tax: f64,

    /// Extended list price for the line.
    #[serde(default, with = "money")]
    pub base_total: f64,

    /// Line total excluding tax.
    #[serde(default, with = "money")]
    pub total_ex_tax: f64,

    /// Line total including tax.
    #[serde(default, with = "money")]
    pub total_inc_tax: f64,

    /// Tax on the line total.
    #[serde(default, with = "money")]
    pub total_tax: f64,

    /// Product weight.
    #[serde(default, with = "money")]
    pub weight: f64,

    /// Quantity ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// Cost price of the product.
    #[serde(default, with = "money")]
    pub base_cost_price: f64,

    /// Cost price including tax.
    #[serde(default, with = "money")]
    pub cost_price_inc_tax: f64,

    /// Cost price excluding tax.
    #[serde(default, with = "money")]
    pub cost_price_ex_tax: f64,

    /// Tax on the cost price.
    #[serde(default, with = "money")]
    pub cost_price_tax: f64,

    /// Whether the line has been refunded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_refunded: Option<bool>,

    /// Quantity refunded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_refunded: Option<i64>,

    /// Amount refunded on the line.
    #[serde(default, with = "money")]
    pub refund_amount: f64,

    /// The ID of the return this line is part of, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_id: Option<i64>,

    /// Gift-wrapping option name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapping_name: Option<String>,

    /// Base wrapping cost.
    #[serde(default, with = "money")]
    pub base_wrapping_cost: f64,

    /// Wrapping cost excluding tax.
    #[serde(default, with = "money")]
    pub wrapping_cost_ex_tax: f64,

    /// Wrapping cost including tax.
    #[serde(default, with = "money")]
    pub wrapping_cost_inc_tax: f64,

    /// Tax on the wrapping cost.
    #[serde(default, with = "money")]
    pub wrapping_cost_tax: f64,

    /// Gift-wrapping message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapping_message: Option<String>,

    /// Quantity already shipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_shipped: Option<i64>,

    /// Fixed shipping cost configured on the product.
    #[serde(default, with = "money")]
    pub fixed_shipping_cost: f64,

    /// The eBay item ID if sold via eBay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebay_item_id: Option<String>,

    /// The eBay transaction ID if sold via eBay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebay_transaction_id: Option<String>,

    /// The option set applied to the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_set_id: Option<i64>,

    /// Parent line for bundled products; untyped in the API.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub parent_order_product_id: Maybe<i64>,

    /// Whether the line is part of a bundle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bundled_product: Option<bool>,

    /// Warehouse bin picking number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_picking_number: Option<String>,

    /// External (channel) line identifier; untyped in the API.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub external_id: Maybe<String>,

    /// Fulfillment source for the line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_source: Option<String>,

    /// Discounts applied to the line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applied_discounts: Vec<AppliedDiscount>,

    /// Options configured on the line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_options: Vec<ProductOption>,
}
