//! HTTP module
//!
//! Request descriptors, path templating and the client that executes them.
//!
//! # Features
//!
//! - **Request descriptors**: immutable description of one call, reused to derive next pages
//! - **Path templates**: positional `%N$s` placeholders with segment escaping
//! - **Status mapping**: non-2xx responses become typed `ApiError`s
//! - **Rate limiting**: optional client-side token bucket using governor

mod client;
mod path;
mod rate_limit;
mod request;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use path::{encode_segment, expand_path};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use request::{merge_objects, HeaderValues, RequestDescriptor};

#[cfg(test)]
mod tests;
