//! Offset (page number) pagination
//!
//! Used by most list endpoints: `?page_number=N&page_size=M`, body
//! `{"items": [...]}`.

use super::types::{decode_items, Page};
use crate::error::Result;
use crate::http::{HttpClient, RequestDescriptor};
use crate::types::JsonValue;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Query key of the zero-based page index
pub const PAGE_NUMBER: &str = "page_number";
/// Query key of the page size
pub const PAGE_SIZE: &str = "page_size";

/// One page of an offset-paginated list
pub struct OffsetPage<T> {
    client: Arc<HttpClient>,
    request: RequestDescriptor,
    items: Vec<T>,
}

impl<T: DeserializeOwned> OffsetPage<T> {
    /// Wrap an already decoded list body
    pub fn from_body(
        client: Arc<HttpClient>,
        request: RequestDescriptor,
        body: &JsonValue,
    ) -> Result<Self> {
        let items = decode_items(&request, body)?;
        Ok(Self {
            client,
            request,
            items,
        })
    }

    /// Page index the request asked for; a missing index is page 0
    pub fn page_number(&self) -> u64 {
        self.request.query_u64(PAGE_NUMBER).unwrap_or(0)
    }

    /// Page size the request asked for, if any
    pub fn page_size(&self) -> Option<u64> {
        self.request.query_u64(PAGE_SIZE)
    }
}

#[async_trait]
impl<T> Page for OffsetPage<T>
where
    T: DeserializeOwned + Send + Sync,
{
    type Item = T;

    async fn fetch(client: Arc<HttpClient>, request: RequestDescriptor) -> Result<Self> {
        let body: JsonValue = client.send_json(&request).await?;
        Self::from_body(client, request, &body)
    }

    fn client(&self) -> &Arc<HttpClient> {
        &self.client
    }

    fn request(&self) -> &RequestDescriptor {
        &self.request
    }

    fn items(&self) -> &[T] {
        &self.items
    }

    fn into_items(self) -> Vec<T> {
        self.items
    }

    fn has_next_page(&self) -> bool {
        // only an empty page ends the walk; the server may cap page_size
        !self.items.is_empty()
    }

    fn next_page_request(&self) -> Option<RequestDescriptor> {
        self.has_next_page()
            .then(|| self.request.with_query(PAGE_NUMBER, self.page_number() + 1))
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for OffsetPage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OffsetPage")
            .field("request", &self.request)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
