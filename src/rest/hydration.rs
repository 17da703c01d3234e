//! Bounded-concurrency resource hydration.
//!
//! Objects decoded from the V2 API reference their sub-resources by URL
//! (see [`ResourceRef`](crate::rest::ResourceRef)). Hydration resolves
//! those references for a whole page of parent entities at once: one
//! task per entity, all tasks sharing a fixed pool of concurrency
//! permits, results merged back onto the owning entity.
//!
//! # Design
//!
//! [`hydrate`] is a fan-out/fan-in:
//!
//! - one tokio task is spawned per entity that has a URL to resolve;
//! - before fetching, each task acquires a permit from a
//!   [`Semaphore`] sized to the concurrency cap, so no more than `cap`
//!   fetches are in flight across the whole call; the permit is released
//!   when the fetch resolves, success or failure;
//! - each completed fetch is written into the owning entity's slot in
//!   place, by index. Slots are partitioned 1:1 with entities and writes
//!   happen on the joining side, so exactly one writer ever touches a
//!   slot and no locking is needed beyond the permit counter;
//! - the call waits for every task. If any task fails, the first error
//!   observed is returned and the rest are discarded; tasks are never
//!   cancelled, and slots already written stay written (partial
//!   mutation on partial failure is accepted, not rolled back).
//!
//! [`collect_from`] is the collection-fetch variant: instead of filling
//! a slot per entity it gathers every fetched item into one flat,
//! unordered sequence. Producer tasks funnel items through a channel
//! whose collecting side is closed only after all producers have joined,
//! then drained synchronously — so the result can never be truncated by
//! a late producer. The channel is unbounded, which is what lets the
//! drain safely wait until after the join.
//!
//! Neither function retries, times out, or cancels; a caller that wants
//! a deadline wraps the whole call externally.
//!
//! [`Semaphore`]: tokio::sync::Semaphore

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;

use crate::clients::{HttpClient, HttpError};

/// Resolves one URL per entity concurrently and writes each decoded
/// value onto its owning entity.
///
/// `url_of` extracts the URL to fetch for an entity, or `None` to skip
/// it (e.g. an empty resource pointer). `apply` writes a decoded value
/// into the entity's slot; it is called at most once per entity, on the
/// joining side, with exclusive access. An empty response body skips
/// `apply` and leaves the slot untouched.
///
/// At most `max_concurrency` fetches are in flight at any moment.
///
/// # Errors
///
/// Returns the first [`HttpError`] any task produced. Entities whose
/// tasks succeeded keep their hydrated slots even when the call fails.
///
/// # Example
///
/// ```rust,ignore
/// hydrate(&client, &mut orders, 20,
///     |order| order.products_resource.target_url().map(String::from),
///     |order, products: Vec<OrderProduct>| order.products = products,
/// )
/// .await?;
/// ```
pub async fn hydrate<T, V, U, A>(
    client: &HttpClient,
    entities: &mut [T],
    max_concurrency: usize,
    url_of: U,
    mut apply: A,
) -> Result<(), HttpError>
where
    V: DeserializeOwned + Send + 'static,
    U: Fn(&T) -> Option<String>,
    A: FnMut(&mut T, V),
{
    let semaphore = Arc::new(Semaphore::new(max_concurrency));
    let mut tasks: JoinSet<Result<(usize, Option<V>), HttpError>> = JoinSet::new();

    for (index, entity) in entities.iter().enumerate() {
        let Some(url) = url_of(entity) else {
            continue;
        };
        let client = client.clone();
        let semaphore = Arc::clone(&semaphore);
        tasks.spawn(async move {
            // The semaphore is never closed, so acquisition can only
            // fail if the runtime is shutting down.
            let _permit = semaphore
                .acquire_owned()
                .await
                .expect("hydration semaphore closed");
            let value = client.get_json_raw::<V>(&url).await?;
            Ok((index, value))
        });
    }

    let mut first_error: Option<HttpError> = None;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok((index, Some(value)))) => apply(&mut entities[index], value),
            // Empty body: leave the slot untouched.
            Ok(Ok((_, None))) => {}
            Ok(Err(error)) => {
                first_error.get_or_insert(error);
            }
            Err(join_error) => {
                first_error.get_or_insert(HttpError::Task(join_error));
            }
        }
    }

    first_error.map_or(Ok(()), Err)
}

/// Fetches one collection per entity concurrently and flattens every
/// item into a single unordered sequence.
///
/// Used for sub-resources addressed by a constructed endpoint path
/// rather than an embedded pointer (e.g. `v2/orders/{id}/shipments`).
/// The relative order of items from different parents is unspecified
/// and must not be relied upon.
///
/// # Errors
///
/// Returns the first [`HttpError`] any task produced; the accumulated
/// items are discarded in that case.
pub async fn collect_from<T, V, U>(
    client: &HttpClient,
    entities: &[T],
    max_concurrency: usize,
    url_of: U,
) -> Result<Vec<V>, HttpError>
where
    V: DeserializeOwned + Send + 'static,
    U: Fn(&T) -> Option<String>,
{
    let semaphore = Arc::new(Semaphore::new(max_concurrency));
    let (sender, mut receiver) = mpsc::unbounded_channel::<V>();
    let mut tasks: JoinSet<Result<(), HttpError>> = JoinSet::new();

    for entity in entities {
        let Some(url) = url_of(entity) else {
            continue;
        };
        let client = client.clone();
        let semaphore = Arc::clone(&semaphore);
        let sender = sender.clone();
        tasks.spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .expect("hydration semaphore closed");
            let items = client.get_json_raw::<Vec<V>>(&url).await?;
            for item in items.unwrap_or_default() {
                // The receiving side outlives every producer.
                let _ = sender.send(item);
            }
            Ok(())
        });
    }
    // Only the producers hold senders now; the channel closes once the
    // last producer finishes.
    drop(sender);

    let mut first_error: Option<HttpError> = None;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(error)) => {
                first_error.get_or_insert(error);
            }
            Err(join_error) => {
                first_error.get_or_insert(HttpError::Task(join_error));
            }
        }
    }
    if let Some(error) = first_error {
        return Err(error);
    }

    // All producers have joined; drain whatever they queued.
    let mut items = Vec::new();
    while let Some(item) = receiver.recv().await {
        items.push(item);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthClientId, AuthToken, BigCommerceConfig, StoreHash};
    use crate::rest::resources::{Order, OrderProduct};

    fn create_test_client() -> HttpClient {
        let config = BigCommerceConfig::builder()
            .auth_token(AuthToken::new("test-token").unwrap())
            .auth_client(AuthClientId::new("test-client").unwrap())
            .store_hash(StoreHash::new("abc123").unwrap())
            .build()
            .unwrap();
        HttpClient::new(&config)
    }

    #[test]
    fn test_hydrate_with_no_entities_is_a_no_op() {
        let client = create_test_client();
        let mut orders: Vec<Order> = Vec::new();

        let result = tokio_test::block_on(hydrate(
            &client,
            &mut orders,
            4,
            |order: &Order| order.products_resource.target_url().map(String::from),
            |order, products: Vec<OrderProduct>| order.products = products,
        ));

        assert!(result.is_ok());
    }

    #[test]
    fn test_hydrate_skips_entities_without_urls_entirely() {
        // No URLs means no tasks and no requests; succeeds without a
        // server to talk to.
        let client = create_test_client();
        let mut orders = vec![Order::default(), Order::default()];

        let result = tokio_test::block_on(hydrate(
            &client,
            &mut orders,
            4,
            |order: &Order| order.products_resource.target_url().map(String::from),
            |order, products: Vec<OrderProduct>| order.products = products,
        ));

        assert!(result.is_ok());
        assert!(orders.iter().all(|order| order.products.is_empty()));
    }

    #[test]
    fn test_collect_from_without_urls_returns_empty() {
        let client = create_test_client();
        let orders = vec![Order::default()];

        let items: Vec<serde_json::Value> =
            tokio_test::block_on(collect_from(&client, &orders, 4, |_| None)).unwrap();

        assert!(items.is_empty());
    }
}
