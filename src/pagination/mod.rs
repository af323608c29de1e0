//! Pagination module
//!
//! Supports: Offset (page number + page size), Cursor (iterator token)
//!
//! # Overview
//!
//! A list call returns the first page. Each page knows whether another one
//! exists and how to request it; [`into_item_stream`] walks all of them.
//!
//! ```ignore
//! use dodopayments::pagination::{into_item_stream, Page};
//! use futures::TryStreamExt;
//!
//! let first = client.payments().list(&Default::default()).await?;
//! let all: Vec<_> = into_item_stream(first).try_collect().await?;
//! ```

mod cursor;
mod offset;
mod types;

pub use cursor::{CursorPage, ITERATOR};
pub use offset::{OffsetPage, PAGE_NUMBER, PAGE_SIZE};
pub use types::{into_item_stream, Page};
