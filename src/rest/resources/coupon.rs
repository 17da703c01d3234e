//! Coupon records from the `/orders/{id}/coupons` sub-resource.

use serde::{Deserialize, Serialize};

use super::primitives::money;

/// A coupon applied to an order.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::resources::Coupon;
///
/// let json = r#"{
///     "id": 1,
///     "coupon_id": 4,
///     "order_id": 118,
///     "code": "SAVE10",
///     "amount": "10",
///     "type": 1,
///     "discount": "12.9500"
/// }"#;
///
/// let coupon: Coupon = serde_json::from_str(json).unwrap();
/// assert_eq!(coupon.coupon_type(), Some("percentage_discount"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Coupon {
    /// The unique identifier of this applied coupon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The ID of the coupon definition that was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<i64>,

    /// The ID of the order the coupon was applied to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    /// The coupon code the shopper entered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The configured amount of the coupon, as entered by the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// The numeric coupon type; see [`Self::coupon_type`].
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub coupon_kind: Option<i64>,

    /// The discount the coupon produced on this order.
    #[serde(default, with = "money")]
    pub discount: f64,
}

impl Coupon {
    /// Returns the text representation of the coupon type, if known.
    #[must_use]
    pub const fn coupon_type(&self) -> Option<&'static str> {
        match self.coupon_kind {
            Some(0) => Some("per_item_discount"),
            Some(1) => Some("percentage_discount"),
            Some(2) => Some("per_total_discount"),
            Some(3) => Some("shipping_discount"),
            Some(4) => Some("free_shipping"),
            Some(5) => Some("promotion"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coupon_deserialization() {
        let json = r#"{
            "id": 7,
            "coupon_id": 3,
            "order_id": 118,
            "code": "FREESHIP",
            "amount": "0",
            "type": 4,
            "discount": "5.0000"
        }"#;

        let coupon: Coupon = serde_json::from_str(json).unwrap();

        assert_eq!(coupon.id, Some(7));
        assert_eq!(coupon.code, Some("FREESHIP".to_string()));
        assert_eq!(coupon.coupon_kind, Some(4));
        assert!((coupon.discount - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_coupon_type_labels() {
        let labels: Vec<Option<&str>> = (0..=6)
            .map(|kind| Coupon {
                coupon_kind: Some(kind),
                ..Default::default()
            })
            .map(|c| c.coupon_type())
            .collect();

        assert_eq!(
            labels,
            vec![
                Some("per_item_discount"),
                Some("percentage_discount"),
                Some("per_total_discount"),
                Some("shipping_discount"),
                Some("free_shipping"),
                Some("promotion"),
                None,
            ]
        );
    }

    #[test]
    fn test_unknown_coupon_type_is_none() {
        let coupon = Coupon::default();
        assert_eq!(coupon.coupon_type(), None);
    }
}
