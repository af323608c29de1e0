//! Parameter encoding

use super::field_map::FieldMap;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize a parameter object into a JSON map.
///
/// Unit-like params (`()` or a struct serializing to `null`) yield an empty
/// map; anything that is not an object is a usage error.
pub fn encode_params<P: Serialize + ?Sized>(params: &P) -> Result<JsonObject> {
    match serde_json::to_value(params)? {
        JsonValue::Object(map) => Ok(map),
        JsonValue::Null => Ok(JsonObject::new()),
        other => Err(Error::invalid_params(format!(
            "parameters must serialize to an object, got {}",
            json_kind(&other)
        ))),
    }
}

/// A request parameter object.
///
/// `FIELDS` lists the host-name spellings accepted by [`Params::from_raw`];
/// serialization itself always uses the wire names.
pub trait Params: Serialize + DeserializeOwned {
    /// Host-name → wire-name table for loosely typed input
    const FIELDS: FieldMap = FieldMap::EMPTY;

    /// Build typed params from a loosely typed, host-keyed object
    fn from_raw(raw: &JsonObject) -> Result<Self> {
        let wire = Self::FIELDS.encode(raw);
        serde_json::from_value(JsonValue::Object(wire))
            .map_err(|e| Error::invalid_params(e.to_string()))
    }

    /// Encode into a wire-keyed map
    fn to_wire(&self) -> Result<JsonObject> {
        encode_params(self)
    }

    /// Encode into a host-keyed map
    fn to_raw(&self) -> Result<JsonObject> {
        Ok(Self::FIELDS.decode(&self.to_wire()?))
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
