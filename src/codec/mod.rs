//! Wire codec
//!
//! Everything that sits between typed Rust values and the JSON the API
//! speaks:
//!
//! - [`Omittable`]: distinguishes "leave unset" from "set to null"
//! - [`FieldMap`]: explicit host-name → wire-name tables for loosely typed input
//! - `api_enum!`: string enums that tolerate values added server-side
//! - [`encode_params`] / [`Params`]: turning parameter objects into query or body maps

mod enums;
mod field_map;
mod omittable;
mod params;

pub(crate) use enums::api_enum;
pub use field_map::FieldMap;
pub use omittable::Omittable;
pub use params::{encode_params, Params};

#[cfg(test)]
mod tests;
