//! High-level order operations.
//!
//! [`OrderClient`] composes the transport, the paged lister, and the
//! hydration core into the read operations the V2 orders API offers:
//! listing, hydrated listing, single-order fetch, shipments, counts,
//! and the status catalog.

use crate::clients::errors::HttpError;
use crate::clients::http_client::HttpClient;
use crate::config::BigCommerceConfig;
use crate::rest::hydration::{collect_from, hydrate};
use crate::rest::pagination::list_all_pages;
use crate::rest::resources::{
    Coupon, Order, OrderCount, OrderProduct, OrderStatus, Shipment, ShippingAddress,
};
use crate::rest::OrderQuery;

/// Client for the V2 orders API.
///
/// Wraps an [`HttpClient`] and exposes typed operations over
/// `v2/orders/` and its sub-resources. The hydration operations fetch
/// sub-resources concurrently under the configured concurrency cap
/// (default 20; see
/// [`BigCommerceConfigBuilder::max_concurrency`](crate::config::BigCommerceConfigBuilder::max_concurrency)).
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::{BigCommerceConfig, OrderClient, OrderQuery};
///
/// let client = OrderClient::new(&config);
/// let orders = client
///     .get_hydrated_orders(&OrderQuery {
///         status_id: Some(11),
///         ..Default::default()
///     })
///     .await?;
///
/// for order in &orders {
///     println!("#{}: {} products", order.id, order.products.len());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct OrderClient {
    http: HttpClient,
    max_concurrency: usize,
}

impl OrderClient {
    /// Creates a new order client from the given configuration.
    #[must_use]
    pub fn new(config: &BigCommerceConfig) -> Self {
        Self {
            http: HttpClient::new(config),
            max_concurrency: config.max_concurrency(),
        }
    }

    /// Returns the underlying HTTP client, for requests this client
    /// does not model.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }

    fn order_shipments_url(&self, order_id: i64) -> String {
        self.http.endpoint_url(&format!("v2/orders/{order_id}/shipments"))
    }

    /// Returns all orders matching the query, sorted ascending by ID.
    ///
    /// Walks every page of `v2/orders/` unless the query pins a
    /// specific page, in which case exactly that page is fetched.
    ///
    /// # Errors
    ///
    /// Returns the first transport or decode error; no further pages
    /// are requested after a failure.
    pub async fn get_orders_by_query(&self, query: &OrderQuery) -> Result<Vec<Order>, HttpError> {
        list_all_pages(&self.http, "v2/orders/", query, |order: &Order| order.id).await
    }

    /// Returns all orders in the given status, sorted ascending by ID.
    ///
    /// # Errors
    ///
    /// See [`Self::get_orders_by_query`].
    pub async fn get_orders(&self, status_id: i64) -> Result<Vec<Order>, HttpError> {
        self.get_orders_by_query(&OrderQuery {
            status_id: Some(status_id),
            ..Default::default()
        })
        .await
    }

    /// Returns all orders in the given status with their products
    /// hydrated.
    ///
    /// # Errors
    ///
    /// See [`Self::get_orders_by_query`] and [`Self::hydrate_products`].
    pub async fn get_orders_and_products(&self, status_id: i64) -> Result<Vec<Order>, HttpError> {
        let mut orders = self.get_orders(status_id).await?;
        self.hydrate_products(&mut orders).await?;
        Ok(orders)
    }

    /// Concurrently fills each order's `products` slot from its
    /// embedded products pointer.
    ///
    /// # Errors
    ///
    /// Returns the first error from any fetch; orders whose fetches
    /// succeeded keep their hydrated slots.
    pub async fn hydrate_products(&self, orders: &mut [Order]) -> Result<(), HttpError> {
        hydrate(
            &self.http,
            orders,
            self.max_concurrency,
            |order| order.products_resource.target_url().map(String::from),
            |order, products: Vec<OrderProduct>| order.products = products,
        )
        .await
    }

    /// Concurrently fills each order's `shipping_addresses` slot from
    /// its embedded shipping-addresses pointer.
    ///
    /// # Errors
    ///
    /// See [`Self::hydrate_products`].
    pub async fn hydrate_shipping_addresses(&self, orders: &mut [Order]) -> Result<(), HttpError> {
        hydrate(
            &self.http,
            orders,
            self.max_concurrency,
            |order| {
                order
                    .shipping_addresses_resource
                    .target_url()
                    .map(String::from)
            },
            |order, addresses: Vec<ShippingAddress>| order.shipping_addresses = addresses,
        )
        .await
    }

    /// Concurrently fills each order's `coupons` slot from its embedded
    /// coupons pointer.
    ///
    /// # Errors
    ///
    /// See [`Self::hydrate_products`].
    pub async fn hydrate_coupons(&self, orders: &mut [Order]) -> Result<(), HttpError> {
        hydrate(
            &self.http,
            orders,
            self.max_concurrency,
            |order| order.coupons_resource.target_url().map(String::from),
            |order, coupons: Vec<Coupon>| order.coupons = coupons,
        )
        .await
    }

    /// Concurrently fills each order's `shipments` slot from the
    /// `v2/orders/{id}/shipments` endpoint.
    ///
    /// Unlike the other hydrators this one has no embedded pointer to
    /// follow; the endpoint is constructed from the order ID.
    ///
    /// # Errors
    ///
    /// See [`Self::hydrate_products`].
    pub async fn hydrate_shipments(&self, orders: &mut [Order]) -> Result<(), HttpError> {
        hydrate(
            &self.http,
            orders,
            self.max_concurrency,
            |order| Some(self.order_shipments_url(order.id)),
            |order, shipments: Vec<Shipment>| order.shipments = shipments,
        )
        .await
    }

    /// Returns all orders matching the query with products, shipping
    /// addresses, coupons, and shipments hydrated.
    ///
    /// Each hydration phase is a full fan-out/fan-in over the entire
    /// result set before the next phase starts; within a phase, orders
    /// are fetched concurrently under the concurrency cap.
    ///
    /// # Errors
    ///
    /// A failing phase aborts the whole operation: the caller receives
    /// the error, not the partially hydrated orders.
    pub async fn get_hydrated_orders(&self, query: &OrderQuery) -> Result<Vec<Order>, HttpError> {
        let mut orders = self.get_orders_by_query(query).await?;
        self.hydrate_products(&mut orders).await?;
        self.hydrate_shipping_addresses(&mut orders).await?;
        self.hydrate_coupons(&mut orders).await?;
        self.hydrate_shipments(&mut orders).await?;
        Ok(orders)
    }

    /// Returns a single order by ID, without hydration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with status 404 for an unknown
    /// ID, or any other transport/decode error.
    pub async fn get_order_by_id(&self, order_id: i64) -> Result<Order, HttpError> {
        Ok(self
            .http
            .get_json(&format!("v2/orders/{order_id}"))
            .await?
            .unwrap_or_default())
    }

    /// Returns a single order by ID with products, shipping addresses,
    /// coupons, and shipments hydrated.
    ///
    /// With only one entity there is nothing to fan out over, so the
    /// phases run sequentially.
    ///
    /// # Errors
    ///
    /// Returns the first failing phase's error.
    pub async fn get_hydrated_order_by_id(&self, order_id: i64) -> Result<Order, HttpError> {
        let mut order = self.get_order_by_id(order_id).await?;

        if let Some(url) = order.products_resource.target_url() {
            if let Some(products) = self.http.get_json_raw::<Vec<OrderProduct>>(url).await? {
                order.products = products;
            }
        }
        if let Some(url) = order.shipping_addresses_resource.target_url() {
            if let Some(addresses) = self.http.get_json_raw::<Vec<ShippingAddress>>(url).await? {
                order.shipping_addresses = addresses;
            }
        }
        if let Some(url) = order.coupons_resource.target_url() {
            if let Some(coupons) = self.http.get_json_raw::<Vec<Coupon>>(url).await? {
                order.coupons = coupons;
            }
        }
        let shipments_url = self.order_shipments_url(order.id);
        if let Some(shipments) = self.http.get_json_raw::<Vec<Shipment>>(&shipments_url).await? {
            order.shipments = shipments;
        }

        Ok(order)
    }

    /// Returns every shipment belonging to the orders matching the
    /// query, as one flat sequence.
    ///
    /// Shipments are fetched concurrently per order; the relative order
    /// of shipments from different orders is unspecified.
    ///
    /// # Errors
    ///
    /// Returns the first error from the order listing or any shipment
    /// fetch.
    pub async fn get_shipments(&self, query: &OrderQuery) -> Result<Vec<Shipment>, HttpError> {
        let orders = self.get_orders_by_query(query).await?;
        collect_from(&self.http, &orders, self.max_concurrency, |order| {
            Some(self.order_shipments_url(order.id))
        })
        .await
    }

    /// Returns the order count aggregate with its per-status breakdown
    /// sorted ascending by display order.
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error from `v2/orders/count`.
    pub async fn get_order_count(&self) -> Result<OrderCount, HttpError> {
        let mut counts: OrderCount = self
            .http
            .get_json("v2/orders/count")
            .await?
            .unwrap_or_default();
        counts.statuses.sort_by_key(|status| status.sort_order);
        Ok(counts)
    }

    /// Returns the status catalog sorted ascending by display order
    /// (`sort_order`, distinct from the status ID).
    ///
    /// # Errors
    ///
    /// Returns any transport or decode error from `v2/order_statuses`.
    pub async fn get_order_statuses(&self) -> Result<Vec<OrderStatus>, HttpError> {
        let mut statuses: Vec<OrderStatus> = self
            .http
            .get_json("v2/order_statuses")
            .await?
            .unwrap_or_default();
        statuses.sort_by_key(|status| status.sort_order);
        Ok(statuses)
    }
}
