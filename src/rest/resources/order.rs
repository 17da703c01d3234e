//! The order record returned by `v2/orders/`.

use serde::{Deserialize, Serialize};

use super::address::{Address, ShippingAddress};
use super::coupon::Coupon;
use super::primitives::{money, optional_date, BcDate, Maybe};
use super::product::OrderProduct;
use super::shipment::Shipment;
use crate::rest::resource::ResourceRef;

/// An order, as returned by `v2/orders/` and `v2/orders/{id}`.
///
/// The decoded order carries three embedded [`ResourceRef`] pointers —
/// `products`, `shipping_addresses`, and `coupons` — referencing
/// sub-resources fetchable by follow-up requests. The matching slot
/// fields (`products`, `shipping_addresses`, `coupons`, plus `shipments`,
/// which is keyed by order ID rather than a pointer) start empty and are
/// filled in place by the hydration operations on
/// [`OrderClient`](crate::clients::OrderClient). Slots are in-memory
/// only and do not round-trip through serde.
///
/// Money fields are numeric (`f64`) and decode from the API's decimal
/// strings.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::resources::Order;
///
/// let json = r#"{
///     "id": 118,
///     "status_id": 11,
///     "status": "Awaiting Fulfillment",
///     "total_inc_tax": "225.0000",
///     "products": {"url": "https://example.com/v2/orders/118/products",
///                  "resource": "/orders/118/products"}
/// }"#;
///
/// let order: Order = serde_json::from_str(json).unwrap();
/// assert_eq!(order.id, 118);
/// assert!(order.products.is_empty()); // not hydrated yet
/// assert!(order.products_resource.target_url().is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    /// The unique identifier of the order (primary key).
    #[serde(default)]
    pub id: i64,

    /// The ID of the customer who placed the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,

    /// When the order was placed.
    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<BcDate>,

    /// When the order was last modified.
    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_modified: Option<BcDate>,

    /// When the order was shipped, if it has been.
    #[serde(
        default,
        with = "optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_shipped: Option<BcDate>,

    /// The ID of the order's current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,

    /// The name of the order's current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Subtotal excluding tax.
    #[serde(default, with = "money")]
    pub subtotal_ex_tax: f64,

    /// Subtotal including tax.
    #[serde(default, with = "money")]
    pub subtotal_inc_tax: f64,

    /// Tax on the subtotal.
    #[serde(default, with = "money")]
    pub subtotal_tax: f64,

    /// Base shipping cost.
    #[serde(default, with = "money")]
    pub base_shipping_cost: f64,

    /// Shipping cost excluding tax.
    #[serde(default, with = "money")]
    pub shipping_cost_ex_tax: f64,

    /// Shipping cost including tax.
    #[serde(default, with = "money")]
    pub shipping_cost_inc_tax: f64,

    /// Tax on the shipping cost.
    #[serde(default, with = "money")]
    pub shipping_cost_tax: f64,

    /// Tax class applied to the shipping cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost_tax_class_id: Option<i64>,

    /// Base handling cost.
    #[serde(default, with = "money")]
    pub base_handling_cost: f64,

    /// Handling cost excluding tax.
    #[serde(default, with = "money")]
    pub handling_cost_ex_tax: f64,

    /// Handling cost including tax.
    #[serde(default, with = "money")]
    pub handling_cost_inc_tax: f64,

    /// Tax on the handling cost.
    #[serde(default, with = "money")]
    pub handling_cost_tax: f64,

    /// Tax class applied to the handling cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handling_cost_tax_class_id: Option<i64>,

    /// Base gift-wrapping cost.
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

    /// Tax class applied to the wrapping cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapping_cost_tax_class_id: Option<i64>,

    /// Order total excluding tax.
    #[serde(default, with = "money")]
    pub total_ex_tax: f64,

    /// Order total including tax.
    #[serde(default, with = "money")]
    pub total_inc_tax: f64,

    /// Tax on the order total.
    #[serde(default, with = "money")]
    pub total_tax: f64,

    /// Number of items on the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_total: Option<i64>,

    /// Number of items already shipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_shipped: Option<i64>,

    /// The payment method used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    /// The payment provider's identifier for the payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_provider_id: Option<String>,

    /// The status of the payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,

    /// Amount refunded against the order.
    #[serde(default, with = "money")]
    pub refunded_amount: f64,

    /// Whether the order contains only digital products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_is_digital: Option<bool>,

    /// Store credit applied to the order.
    #[serde(default, with = "money")]
    pub store_credit_amount: f64,

    /// Gift certificate amount applied to the order.
    #[serde(default, with = "money")]
    pub gift_certificate_amount: f64,

    /// The shopper's IP address at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    /// Country resolved from the shopper's IP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geoip_country: Option<String>,

    /// Two-letter country code resolved from the shopper's IP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geoip_country_iso2: Option<String>,

    /// The transactional currency ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<i64>,

    /// The transactional currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// The exchange rate applied at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_exchange_rate: Option<String>,

    /// The store's default currency ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency_id: Option<i64>,

    /// The store's default currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency_code: Option<String>,

    /// Staff notes on the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_notes: Option<String>,

    /// The shopper's message on the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_message: Option<String>,

    /// Discount amount applied to the order.
    #[serde(default, with = "money")]
    pub discount_amount: f64,

    /// Coupon discount applied to the order.
    #[serde(default, with = "money")]
    pub coupon_discount: f64,

    /// Number of shipping addresses on the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_count: Option<i64>,

    /// Whether the order has been archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    /// The eBay order ID if placed via eBay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebay_order_id: Option<String>,

    /// The cart the order was created from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_id: Option<String>,

    /// The order's billing address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,

    /// Whether the shopper opted in to emails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_email_opt_in: Option<bool>,

    /// Credit card type; untyped in the API and frequently null.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub credit_card_type: Maybe<String>,

    /// Where the order originated (e.g. `www`, `external`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_source: Option<String>,

    /// The sales channel the order came through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<i64>,

    /// External source tag for orders created via the API; untyped.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub external_source: Maybe<String>,

    /// External (channel) order identifier; untyped.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub external_id: Maybe<String>,

    /// External merchant identifier; untyped.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub external_merchant_id: Maybe<String>,

    /// The tax provider used for the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_provider_id: Option<String>,

    /// The merchant's custom status label at time of fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_status: Option<String>,

    /// Pointer to the order's products sub-resource.
    #[serde(default, rename = "products")]
    pub products_resource: ResourceRef,

    /// Pointer to the order's shipping addresses sub-resource.
    #[serde(default, rename = "shipping_addresses")]
    pub shipping_addresses_resource: ResourceRef,

    /// Pointer to the order's coupons sub-resource.
    #[serde(default, rename = "coupons")]
    pub coupons_resource: ResourceRef,

    /// Hydrated products; filled by
    /// [`hydrate_products`](crate::clients::OrderClient::hydrate_products).
    #[serde(skip)]
    pub products: Vec<OrderProduct>,

    /// Hydrated shipping addresses; filled by
    /// [`hydrate_shipping_addresses`](crate::clients::OrderClient::hydrate_shipping_addresses).
    #[serde(skip)]
    pub shipping_addresses: Vec<ShippingAddress>,

    /// Hydrated coupons; filled by
    /// [`hydrate_coupons`](crate::clients::OrderClient::hydrate_coupons).
    #[serde(skip)]
    pub coupons: Vec<Coupon>,

    /// Hydrated shipments; filled by
    /// [`hydrate_shipments`](crate::clients::OrderClient::hydrate_shipments).
    #[serde(skip)]
    pub shipments: Vec<Shipment>,
}
