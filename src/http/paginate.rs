//! Offset pagination over vendor list endpoints.
//!
//! DocuSign list endpoints page by `count`/`start_position` and name their
//! result array per resource (`envelopes`, `envelopeTemplates`,
//! `bulkSendLists`, …). [`collect_all_pages`] walks the pages sequentially —
//! each offset depends on the prior page, so there is nothing to parallelize —
//! and hands callers one flattened sequence. Nothing is cached between calls.

use crate::error::HttpError;
use crate::http::client::DocuSignHttp;
use serde_json::Value;
use std::future::Future;

/// Page size requested from list endpoints.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Fetch every page of a paginated collection and concatenate the named
/// array from each page body.
///
/// `fetch_page` is called with the item offset of the next page. Fetching
/// stops when a page returns fewer items than `page_size`, or when the body's
/// own position indicators (`endPosition`/`totalSetSize`) report the set
/// exhausted. A failed page aborts the whole fetch with the underlying error —
/// partial results are never returned, so an incomplete collection can not
/// masquerade as a complete one.
pub async fn collect_all_pages<F, Fut>(
    mut fetch_page: F,
    collection_key: &str,
    page_size: u32,
) -> Result<Vec<Value>, HttpError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Value, HttpError>>,
{
    let mut items: Vec<Value> = Vec::new();
    let mut offset = 0u32;

    loop {
        let page = match fetch_page(offset).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(
                    collection = collection_key,
                    offset,
                    "aborting paginated fetch: {e}"
                );
                return Err(e);
            }
        };

        let page_items = page
            .get(collection_key)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let fetched = page_items.len() as u32;
        items.extend(page_items);

        tracing::debug!(
            collection = collection_key,
            offset,
            fetched,
            total = items.len(),
            "fetched page"
        );

        if fetched < page_size {
            break;
        }
        if let (Some(end), Some(total)) = (u64_field(&page, "endPosition"), u64_field(&page, "totalSetSize")) {
            if end + 1 >= total {
                break;
            }
        }
        offset += fetched;
    }

    Ok(items)
}

/// DocuSign serializes numeric page metadata as strings; accept both.
fn u64_field(page: &Value, key: &str) -> Option<u64> {
    match page.get(key)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

impl DocuSignHttp {
    /// GET every item of a paginated collection, re-fetching from the first
    /// page on every invocation.
    pub(crate) async fn get_all_items(
        &self,
        path: &str,
        collection_key: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<Value>, HttpError> {
        collect_all_pages(
            |offset| {
                let mut q: Vec<(&str, String)> = query.to_vec();
                q.push(("count", DEFAULT_PAGE_SIZE.to_string()));
                q.push(("start_position", offset.to_string()));
                async move { self.get_json::<Value>(path, &q).await }
            },
            collection_key,
            DEFAULT_PAGE_SIZE,
        )
        .await
    }
}
