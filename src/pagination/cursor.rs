//! Cursor (iterator token) pagination
//!
//! Used by ledger and webhook listings. The body carries
//! `{"items": [...], "iterator": "tok" | null, "done": bool | null}` and the
//! next request repeats the original query plus `iterator=<token>`.

use super::types::{decode_items, Page};
use crate::error::Result;
use crate::http::{HttpClient, RequestDescriptor};
use crate::types::{JsonObject, JsonValue};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Query key carrying the continuation token
pub const ITERATOR: &str = "iterator";

/// One page of a cursor-paginated list
pub struct CursorPage<T> {
    client: Arc<HttpClient>,
    request: RequestDescriptor,
    items: Vec<T>,
    iterator: Option<String>,
    done: Option<bool>,
}

impl<T: DeserializeOwned> CursorPage<T> {
    /// Wrap an already decoded list body
    pub fn from_body(
        client: Arc<HttpClient>,
        request: RequestDescriptor,
        body: &JsonValue,
    ) -> Result<Self> {
        let items = decode_items(&request, body)?;
        let iterator = body
            .get(ITERATOR)
            .and_then(JsonValue::as_str)
            .map(str::to_string);
        let done = body.get("done").and_then(JsonValue::as_bool);
        Ok(Self {
            client,
            request,
            items,
            iterator,
            done,
        })
    }

    /// Continuation token returned by the server
    pub fn iterator(&self) -> Option<&str> {
        self.iterator.as_deref()
    }

    /// Completion flag returned by the server
    pub fn done(&self) -> Option<bool> {
        self.done
    }
}

#[async_trait]
impl<T> Page for CursorPage<T>
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

    /// Requires `done == true`, a non-empty page and a token; a missing
    /// token always ends iteration.
    fn has_next_page(&self) -> bool {
        self.done == Some(true) && !self.items.is_empty() && self.iterator.is_some()
    }

    fn next_page_request(&self) -> Option<RequestDescriptor> {
        if !self.has_next_page() {
            return None;
        }
        let token = self.iterator.clone()?;
        let mut patch = JsonObject::new();
        patch.insert(ITERATOR.to_string(), JsonValue::String(token));
        Some(self.request.merge_query(&patch))
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for CursorPage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorPage")
            .field("request", &self.request)
            .field("items", &self.items)
            .field("iterator", &self.iterator)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
