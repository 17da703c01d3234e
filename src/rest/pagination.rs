//! Page-walking for V2 list endpoints.
//!
//! V2 list endpoints return at most one page per request and signal the
//! last page only implicitly, by returning fewer entities than the
//! requested page size. [`list_all_pages`] walks the pages and returns
//! the concatenated, key-sorted result.

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpError};
use crate::rest::query::OrderQuery;

/// Page size applied when the caller's query does not set one.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Fetches every page of a list endpoint and returns the entities
/// sorted ascending by `key`.
///
/// Paging starts at page 1 and keeps requesting the next page while the
/// most recent page returned at least as many entities as the page
/// size. A page with fewer entities (or an empty body) is the last one.
///
/// If the caller's query pins a specific page, exactly that one page is
/// fetched — the single-page escape hatch for callers doing their own
/// paging.
///
/// The sort is a final deterministic pass over the concatenated result,
/// independent of the order the server returned entities in.
///
/// # Errors
///
/// The first transport or decode error aborts the loop and is returned;
/// no further pages are requested.
pub async fn list_all_pages<T, K>(
    client: &HttpClient,
    endpoint: &str,
    query: &OrderQuery,
    key: K,
) -> Result<Vec<T>, HttpError>
where
    T: DeserializeOwned,
    K: Fn(&T) -> i64,
{
    let single_page = query.page.is_some();
    let mut query = query.clone();
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    query.limit = Some(limit);
    let mut page = query.page.unwrap_or(1);

    let mut entities: Vec<T> = Vec::new();
    loop {
        query.page = Some(page);
        let batch: Vec<T> = client
            .get_json_with_query(endpoint, &query.to_query_string())
            .await?
            .unwrap_or_default();
        let fetched = batch.len();
        tracing::debug!(endpoint, page, fetched, "fetched page");
        entities.extend(batch);

        if single_page || fetched < limit as usize {
            break;
        }
        page += 1;
    }

    entities.sort_by_key(|entity| key(entity));
    Ok(entities)
}
