//! Pagination types and traits
//!
//! Defines the page abstraction shared by the offset and cursor styles.

use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestDescriptor};
use crate::types::JsonValue;
use async_trait::async_trait;
use futures::stream::{self, Stream, TryStreamExt};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// One page of a list endpoint.
///
/// A page owns its decoded items and a copy of the request that produced
/// it. Advancing never mutates the current page: the next request is
/// derived from the stored one and a new page is returned.
#[async_trait]
pub trait Page: Sized + Send + Sync {
    /// Decoded item type
    type Item: DeserializeOwned + Send + Sync;

    /// Issue `request` and wrap the response as a page
    async fn fetch(client: Arc<HttpClient>, request: RequestDescriptor) -> Result<Self>;

    /// Client used to fetch further pages
    fn client(&self) -> &Arc<HttpClient>;

    /// Request that produced this page
    fn request(&self) -> &RequestDescriptor;

    /// Items in server order
    fn items(&self) -> &[Self::Item];

    /// Take ownership of the items
    fn into_items(self) -> Vec<Self::Item>;

    /// Whether another page can be fetched
    fn has_next_page(&self) -> bool;

    /// Request for the following page, `None` when there is none
    fn next_page_request(&self) -> Option<RequestDescriptor>;

    /// Fetch the following page.
    ///
    /// Fails with [`Error::NoNextPage`] when [`Page::has_next_page`] is false.
    async fn get_next_page(&self) -> Result<Self> {
        let request = self.next_page_request().ok_or(Error::NoNextPage)?;
        debug!("Fetching next page: {} {}", request.method, request.path);
        Self::fetch(Arc::clone(self.client()), request).await
    }
}

/// Decode the `items` array of a list body.
///
/// A missing or null `items` field is an empty page, not an error.
pub(crate) fn decode_items<T: DeserializeOwned>(
    request: &RequestDescriptor,
    body: &JsonValue,
) -> Result<Vec<T>> {
    match body.get("items") {
        None | Some(JsonValue::Null) => Ok(Vec::new()),
        Some(items) => serde_json::from_value(items.clone()).map_err(|e| {
            Error::decode(format!("{} {} items: {e}", request.method, request.path))
        }),
    }
}

enum Cursor<P> {
    Current(P),
    Pending(Arc<HttpClient>, RequestDescriptor),
}

/// Stream every item from `first` onwards, fetching pages lazily.
///
/// The next page is requested only once the items of the current one have
/// been consumed. The first error ends the stream.
pub fn into_item_stream<P>(first: P) -> impl Stream<Item = Result<P::Item>>
where
    P: Page + 'static,
{
    stream::try_unfold(Some(Cursor::Current(first)), |state| async move {
        let page = match state {
            None => return Ok::<_, Error>(None),
            Some(Cursor::Current(page)) => page,
            Some(Cursor::Pending(client, request)) => P::fetch(client, request).await?,
        };

        let next = page
            .next_page_request()
            .map(|request| Cursor::Pending(Arc::clone(page.client()), request));
        let items = page.into_items().into_iter().map(Ok::<_, Error>);
        Ok::<_, Error>(Some((stream::iter(items), next)))
    })
    .try_flatten()
}
