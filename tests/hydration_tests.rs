//! Integration tests for the hydration core.
//!
//! These tests exercise [`hydrate`] and [`collect_from`] directly against
//! a mock server: the concurrency cap, slot isolation across a large batch of
//! entities, skip behavior for missing pointers, empty-body handling,
//! and partial-failure semantics.

use std::time::{Duration, Instant};

use bigcommerce_api::rest::hydration::{collect_from, hydrate};
use bigcommerce_api::rest::resources::{Order, OrderProduct, Shipment};
use bigcommerce_api::rest::ResourceRef;
use bigcommerce_api::{
    AuthClientId, AuthToken, BigCommerceConfig, HttpClient, HttpError, StoreHash,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_http_client(server: &MockServer) -> HttpClient {
    let config = BigCommerceConfig::builder()
        .auth_token(AuthToken::new("test-token").unwrap())
        .auth_client(AuthClientId::new("test-client").unwrap())
        .store_hash(StoreHash::new("abc123").unwrap())
        .base_url(format!("{}/stores/", server.uri()))
        .build()
        .unwrap();
    HttpClient::new(&config)
}

/// An order whose products pointer targets the mock server.
fn order_with_products_pointer(server: &MockServer, id: i64) -> Order {
    Order {
        id,
        products_resource: ResourceRef {
            url: format!("{}/stores/abc123/v2/orders/{id}/products", server.uri()),
            resource: format!("/orders/{id}/products"),
        },
        ..Default::default()
    }
}

async fn mount_products(server: &MockServer, order_id: i64, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/stores/abc123/v2/orders/{order_id}/products")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_each_entity_receives_its_own_sub_resources() {
    let server = MockServer::start().await;
    let order_count = 100;

    // Tag each order's products with the parent ID so a crossed slot
    // write is detectable.
    let mut orders = Vec::new();
    for id in 1..=order_count {
        mount_products(&server, id, json!([{"id": id * 100, "order_id": id}])).await;
        orders.push(order_with_products_pointer(&server, id));
    }

    let client = create_test_http_client(&server);
    hydrate(
        &client,
        &mut orders,
        8,
        |order: &Order| order.products_resource.target_url().map(String::from),
        |order, products: Vec<OrderProduct>| order.products = products,
    )
    .await
    .unwrap();

    for order in &orders {
        assert_eq!(order.products.len(), 1);
        assert_eq!(order.products[0].order_id, Some(order.id));
        assert_eq!(order.products[0].id, Some(order.id * 100));
    }
}

#[tokio::test]
async fn test_concurrency_cap_bounds_in_flight_requests() {
    let server = MockServer::start().await;
    let delay = Duration::from_millis(200);

    let mut orders = Vec::new();
    for id in 1..=6 {
        Mock::given(method("GET"))
            .and(path(format!("/stores/abc123/v2/orders/{id}/products")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"id": id}]))
                    .set_delay(delay),
            )
            .mount(&server)
            .await;
        orders.push(order_with_products_pointer(&server, id));
    }

    let client = create_test_http_client(&server);
    let started = Instant::now();
    hydrate(
        &client,
        &mut orders,
        2,
        |order: &Order| order.products_resource.target_url().map(String::from),
        |order, products: Vec<OrderProduct>| order.products = products,
    )
    .await
    .unwrap();
    let elapsed = started.elapsed();

    // Six 200ms responses under a cap of 2 need at least three waves.
    assert!(
        elapsed >= delay * 3,
        "6 requests at cap 2 finished in {elapsed:?}, cap not enforced"
    );
    for order in &orders {
        assert_eq!(order.products.len(), 1);
    }
}

#[tokio::test]
async fn test_entities_without_pointer_are_skipped() {
    let server = MockServer::start().await;
    mount_products(&server, 1, json!([{"id": 100}])).await;

    // Order 2 has an empty pointer; a request for it would hit no mock
    // and fail the hydration.
    let mut orders = vec![
        order_with_products_pointer(&server, 1),
        Order {
            id: 2,
            ..Default::default()
        },
    ];

    let client = create_test_http_client(&server);
    hydrate(
        &client,
        &mut orders,
        4,
        |order: &Order| order.products_resource.target_url().map(String::from),
        |order, products: Vec<OrderProduct>| order.products = products,
    )
    .await
    .unwrap();

    assert_eq!(orders[0].products.len(), 1);
    assert!(orders[1].products.is_empty());
}

#[tokio::test]
async fn test_empty_body_leaves_slot_untouched() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/abc123/v2/orders/1/products"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut orders = vec![order_with_products_pointer(&server, 1)];
    orders[0].products.push(OrderProduct {
        id: Some(999),
        ..Default::default()
    });

    let client = create_test_http_client(&server);
    hydrate(
        &client,
        &mut orders,
        4,
        |order: &Order| order.products_resource.target_url().map(String::from),
        |order, products: Vec<OrderProduct>| order.products = products,
    )
    .await
    .unwrap();

    assert_eq!(orders[0].products.len(), 1);
    assert_eq!(orders[0].products[0].id, Some(999));
}

#[tokio::test]
async fn test_partial_failure_keeps_hydrated_slots_and_returns_error() {
    let server = MockServer::start().await;

    mount_products(&server, 1, json!([{"id": 100, "order_id": 1}])).await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v2/orders/2/products"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    mount_products(&server, 3, json!([{"id": 300, "order_id": 3}])).await;

    let mut orders = vec![
        order_with_products_pointer(&server, 1),
        order_with_products_pointer(&server, 2),
        order_with_products_pointer(&server, 3),
    ];

    let client = create_test_http_client(&server);
    let error = hydrate(
        &client,
        &mut orders,
        4,
        |order: &Order| order.products_resource.target_url().map(String::from),
        |order, products: Vec<OrderProduct>| order.products = products,
    )
    .await
    .unwrap_err();

    assert_eq!(error.status(), Some(500));
    // The failing order's slot stays empty; the others keep their data.
    assert_eq!(orders[0].products.len(), 1);
    assert!(orders[1].products.is_empty());
    assert_eq!(orders[2].products.len(), 1);
}

#[tokio::test]
async fn test_collect_from_gathers_every_item() {
    let server = MockServer::start().await;

    for (id, shipments) in [(1, vec![10, 11]), (2, vec![]), (3, vec![12])] {
        let body: Vec<serde_json::Value> = shipments
            .iter()
            .map(|shipment_id| json!({"id": shipment_id, "order_id": id}))
            .collect();
        Mock::given(method("GET"))
            .and(path(format!("/stores/abc123/v2/orders/{id}/shipments")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
    }

    let orders: Vec<Order> = (1..=3)
        .map(|id| Order {
            id,
            ..Default::default()
        })
        .collect();

    let client = create_test_http_client(&server);
    let base = format!("{}/stores/abc123", server.uri());
    let shipments: Vec<Shipment> = collect_from(&client, &orders, 4, |order: &Order| {
        Some(format!("{base}/v2/orders/{}/shipments", order.id))
    })
    .await
    .unwrap();

    let mut ids: Vec<i64> = shipments.iter().filter_map(|shipment| shipment.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![10, 11, 12]);
}

#[tokio::test]
async fn test_collect_from_discards_items_on_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stores/abc123/v2/orders/1/shipments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 10}])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v2/orders/2/shipments"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let orders: Vec<Order> = (1..=2)
        .map(|id| Order {
            id,
            ..Default::default()
        })
        .collect();

    let client = create_test_http_client(&server);
    let base = format!("{}/stores/abc123", server.uri());
    let result: Result<Vec<Shipment>, HttpError> =
        collect_from(&client, &orders, 4, |order: &Order| {
            Some(format!("{base}/v2/orders/{}/shipments", order.id))
        })
        .await;

    assert_eq!(result.unwrap_err().status(), Some(502));
}
