//! Authentication module
//!
//! The API authenticates with a single bearer token. The `Authenticator`
//! injects it as the `Authorization` header on every request; `ApiKey`
//! keeps the secret out of `Debug` output and logs.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{ApiKey, AuthConfig};
