//! Structured query parameters for the orders list endpoint.
//!
//! [`OrderQuery`] models the filter/sort/pagination parameters accepted
//! by `v2/orders/` and serializes them to a deterministic query string.

use chrono::{DateTime, Utc};

/// Filter, sort, and pagination parameters for `v2/orders/`.
///
/// All fields are optional; unset fields are omitted from the query
/// string entirely. Date bounds serialize in the API's RFC 1123
/// numeric-zone format.
///
/// The one exception to "unset is omitted" is [`status_is_zero`]: status
/// ID `0` is a real status (Incomplete), so filtering on it needs an
/// explicit flag that forces `status_id=0` onto the query string.
///
/// [`status_is_zero`]: Self::status_is_zero
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::OrderQuery;
///
/// let query = OrderQuery {
///     status_id: Some(11),
///     limit: Some(100),
///     ..Default::default()
/// };
///
/// assert_eq!(query.to_query_string(), "limit=100&status_id=11");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderQuery {
    /// Minimum order ID, inclusive.
    pub min_id: Option<i64>,
    /// Maximum order ID, inclusive.
    pub max_id: Option<i64>,
    /// Minimum order total, inclusive.
    pub min_total: Option<f64>,
    /// Maximum order total, inclusive.
    pub max_total: Option<f64>,
    /// Filter by customer ID.
    pub customer_id: Option<i64>,
    /// Filter by customer email.
    pub email: Option<String>,
    /// Filter by status ID. See [`Self::status_is_zero`] for status `0`.
    pub status_id: Option<i64>,
    /// Filter by originating cart ID.
    pub cart_id: Option<String>,
    /// Filter by payment method.
    pub payment_method: Option<String>,
    /// Orders created at or after this time.
    pub min_date_created: Option<DateTime<Utc>>,
    /// Orders created at or before this time.
    pub max_date_created: Option<DateTime<Utc>>,
    /// Orders modified at or after this time.
    pub min_date_modified: Option<DateTime<Utc>>,
    /// Orders modified at or before this time.
    pub max_date_modified: Option<DateTime<Utc>>,
    /// Fetch exactly this page and stop paginating.
    pub page: Option<u32>,
    /// Page size; the lister applies its default when unset.
    pub limit: Option<u32>,
    /// Sort expression, e.g. `date_created:desc`.
    pub sort: Option<String>,
    /// Include archived orders.
    pub is_deleted: Option<bool>,
    /// Force `status_id=0` onto the query string even when
    /// [`Self::status_id`] is unset. Status `0` is the Incomplete status.
    pub status_is_zero: bool,
}

impl OrderQuery {
    /// Serializes the query to a deterministic URL-encoded query string.
    ///
    /// Pairs are emitted sorted by key, so equal queries always produce
    /// equal strings. Unset fields are omitted.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&'static str, String)> = Vec::new();

        if let Some(min_id) = self.min_id {
            pairs.push(("min_id", min_id.to_string()));
        }
        if let Some(max_id) = self.max_id {
            pairs.push(("max_id", max_id.to_string()));
        }
        if let Some(min_total) = self.min_total {
            pairs.push(("min_total", min_total.to_string()));
        }
        if let Some(max_total) = self.max_total {
            pairs.push(("max_total", max_total.to_string()));
        }
        if let Some(customer_id) = self.customer_id {
            pairs.push(("customer_id", customer_id.to_string()));
        }
        if let Some(email) = &self.email {
            pairs.push(("email", email.clone()));
        }
        if self.status_is_zero {
            pairs.push(("status_id", "0".to_string()));
        } else if let Some(status_id) = self.status_id {
            pairs.push(("status_id", status_id.to_string()));
        }
        if let Some(cart_id) = &self.cart_id {
            pairs.push(("cart_id", cart_id.clone()));
        }
        if let Some(payment_method) = &self.payment_method {
            pairs.push(("payment_method", payment_method.clone()));
        }
        if let Some(date) = self.min_date_created {
            pairs.push(("min_date_created", date.to_rfc2822()));
        }
        if let Some(date) = self.max_date_created {
            pairs.push(("max_date_created", date.to_rfc2822()));
        }
        if let Some(date) = self.min_date_modified {
            pairs.push(("min_date_modified", date.to_rfc2822()));
        }
        if let Some(date) = self.max_date_modified {
            pairs.push(("max_date_modified", date.to_rfc2822()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(is_deleted) = self.is_deleted {
            pairs.push(("is_deleted", is_deleted.to_string()));
        }

        pairs.sort_by_key(|(key, _)| *key);
        pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
