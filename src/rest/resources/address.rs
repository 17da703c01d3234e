//! Address types for orders and shipments.
//!
//! This module provides the address structs used for billing and shipping
//! addresses on orders, and the shipping-address records returned by the
//! `/orders/{id}/shipping_addresses` sub-resource.

use serde::{Deserialize, Serialize};

/// A physical address attached to an order or shipment.
///
/// All fields are optional to support partial address data.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::resources::Address;
///
/// let address = Address {
///     first_name: Some("Jane".to_string()),
///     last_name: Some("Doe".to_string()),
///     street_1: Some("123 Main St".to_string()),
///     city: Some("Austin".to_string()),
///     state: Some("Texas".to_string()),
///     zip: Some("78701".to_string()),
///     country: Some("United States".to_string()),
///     country_iso2: Some("US".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Address {
    /// The first name of the person at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// The last name of the person at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// The company name at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// The first line of the street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_1: Option<String>,

    /// The second line of the street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_2: Option<String>,

    /// The city, town, or village.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// The state or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// The postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// The country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// The two-letter country code (ISO 3166-1 alpha-2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_iso2: Option<String>,

    /// The phone number at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The email address of the person at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Custom checkout form fields attached to the address.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub form_fields: Vec<FormField>,
}

/// A custom form name/value pair attached to an address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormField {
    /// The form field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The submitted value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A shipping address record from `/orders/{id}/shipping_addresses`.
///
/// Holds a base [`Address`] value plus the shipping-specific fields,
/// flattened so the wire format stays a single flat JSON object.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::resources::{Address, ShippingAddress};
///
/// let json = r#"{
///     "first_name": "Jane",
///     "city": "Austin",
///     "shipping_method": "Flat Rate"
/// }"#;
///
/// let shipping: ShippingAddress = serde_json::from_str(json).unwrap();
/// assert_eq!(shipping.address.city.as_deref(), Some("Austin"));
/// assert_eq!(shipping.shipping_method.as_deref(), Some("Flat Rate"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingAddress {
    /// The base address fields.
    #[serde(flatten)]
    pub address: Address,

    /// The shipping method selected for this address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method: Option<String>,
}
