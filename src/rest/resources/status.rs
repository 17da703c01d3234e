//! Order status catalog and count aggregates.
//!
//! Two read-only endpoints live here: `v2/order_statuses`, the flat
//! status catalog, and `v2/orders/count`, the aggregate count with a
//! per-status breakdown. Both carry a `sort_order` display-order field
//! distinct from the primary key; listing operations sort by it.

use serde::{Deserialize, Serialize};

/// An order status definition from the `v2/order_statuses` catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderStatus {
    /// The unique identifier of the status.
    pub id: i64,

    /// The status name.
    #[serde(default)]
    pub name: String,

    /// The built-in label for the status.
    #[serde(default)]
    pub system_label: String,

    /// The merchant's custom label, if renamed.
    #[serde(default)]
    pub custom_label: String,

    /// The built-in description of the status.
    #[serde(default)]
    pub system_description: String,

    /// Display order in the control panel, distinct from `id`.
    #[serde(default)]
    pub sort_order: i64,
}

/// A per-status order count from `v2/orders/count`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StatusCount {
    /// The unique identifier of the status.
    pub id: i64,

    /// The status name.
    #[serde(default)]
    pub name: String,

    /// The built-in label for the status.
    #[serde(default)]
    pub system_label: String,

    /// The merchant's custom label, if renamed.
    #[serde(default)]
    pub custom_label: String,

    /// The built-in description of the status.
    #[serde(default, rename = "system_description")]
    pub system_description: String,

    /// Number of orders currently in this status.
    #[serde(default)]
    pub count: i64,

    /// Display order of the status, distinct from `id`.
    #[serde(default)]
    pub sort_order: i64,
}

/// The aggregate return body of `v2/orders/count`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::resources::OrderCount;
///
/// let json = r#"{
///     "count": 42,
///     "statuses": [
///         {"id": 11, "name": "Awaiting Fulfillment", "count": 40, "sort_order": 4},
///         {"id": 2, "name": "Shipped", "count": 2, "sort_order": 8}
///     ]
/// }"#;
///
/// let counts: OrderCount = serde_json::from_str(json).unwrap();
/// assert_eq!(counts.count, 42);
/// assert_eq!(counts.statuses.len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderCount {
    /// Total number of orders in the store.
    #[serde(default)]
    pub count: i64,

    /// Per-status breakdown.
    #[serde(default)]
    pub statuses: Vec<StatusCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_deserialization() {
        let json = r#"{
            "id": 11,
            "name": "Awaiting Fulfillment",
            "system_label": "Awaiting Fulfillment",
            "custom_label": "Needs Packing",
            "system_description": "Order has been verified",
            "sort_order": 4
        }"#;

        let status: OrderStatus = serde_json::from_str(json).unwrap();

        assert_eq!(status.id, 11);
        assert_eq!(status.custom_label, "Needs Packing");
        assert_eq!(status.sort_order, 4);
    }

    #[test]
    fn test_order_count_deserialization() {
        let json = r#"{
            "count": 12,
            "statuses": [
                {"id": 0, "name": "Incomplete", "count": 1, "sort_order": 0},
                {"id": 2, "name": "Shipped", "count": 11, "sort_order": 8}
            ]
        }"#;

        let counts: OrderCount = serde_json::from_str(json).unwrap();

        assert_eq!(counts.count, 12);
        assert_eq!(counts.statuses[1].count, 11);
        assert_eq!(counts.statuses[1].sort_order, 8);
    }

    #[test]
    fn test_sparse_status_uses_defaults() {
        let status: OrderStatus = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(status.id, 1);
        assert!(status.name.is_empty());
        assert_eq!(status.sort_order, 0);
    }
}
