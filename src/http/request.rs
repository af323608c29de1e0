//! Request descriptors
//!
//! A `RequestDescriptor` is everything needed to (re)issue one API call:
//! method, path, query, headers and body. Descriptors are values; deriving
//! the next page's request produces a new descriptor and leaves the original
//! untouched.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, Method};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// One or more values for a single header name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValues {
    /// A single value
    One(String),
    /// Repeated header, sent once per value
    Many(Vec<String>),
}

impl HeaderValues {
    /// Iterate over the values in send order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            HeaderValues::One(v) => std::slice::from_ref(v),
            HeaderValues::Many(vs) => vs,
        };
        values.iter().map(String::as_str)
    }
}

impl From<&str> for HeaderValues {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for HeaderValues {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for HeaderValues {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// Description of a single API request
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestDescriptor {
    /// HTTP method
    pub method: Method,
    /// Path relative to the base URL, already expanded and escaped
    pub path: String,
    /// Query parameters (unique keys)
    pub query: JsonObject,
    /// Per-request headers; these override client defaults
    pub headers: BTreeMap<String, HeaderValues>,
    /// JSON body
    pub body: Option<JsonValue>,
}

impl RequestDescriptor {
    /// Create a descriptor for `method` on `path`
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Default::default()
        }
    }

    /// Shorthand for a GET descriptor
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Shorthand for a POST descriptor
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add every field of a serializable parameter object as a query parameter.
    ///
    /// Fields that serialize to nothing (omitted) are absent; explicit nulls
    /// are kept and later skipped by [`RequestDescriptor::query_pairs`].
    pub fn query_params<P: Serialize + ?Sized>(mut self, params: &P) -> Result<Self> {
        for (key, value) in crate::codec::encode_params(params)? {
            self.query.insert(key, value);
        }
        Ok(self)
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<HeaderValues>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the body from a serializable parameter object
    pub fn json_params<P: Serialize + ?Sized>(mut self, params: &P) -> Result<Self> {
        self.body = Some(Value::Object(crate::codec::encode_params(params)?));
        Ok(self)
    }

    /// A copy of this descriptor with one query parameter replaced
    pub fn with_query(&self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.clone().query(key, value)
    }

    /// A copy of this descriptor with `patch` recursively merged into the query.
    ///
    /// Nested objects are merged key by key; any other value replaces the
    /// existing one. Keys not named in `patch` are preserved.
    pub fn merge_query(&self, patch: &JsonObject) -> Self {
        let mut next = self.clone();
        merge_objects(&mut next.query, patch);
        next
    }

    /// Read an unsigned integer query parameter (number or numeric string)
    pub fn query_u64(&self, key: &str) -> Option<u64> {
        match self.query.get(key)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Flatten the query into wire pairs.
    ///
    /// Nulls are skipped, arrays repeat the key, objects use `key[field]`.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.query {
            flatten_query_value(key, value, &mut pairs);
        }
        pairs
    }

    /// Validate that the descriptor can be sent
    pub fn validate(&self) -> Result<()> {
        if self.path.is_empty() {
            return Err(Error::invalid_params("request path is empty"));
        }
        if self.body.is_some() && self.method == Method::GET {
            return Err(Error::invalid_params("GET requests cannot carry a body"));
        }
        Ok(())
    }
}

/// Recursively merge `patch` into `target`
pub fn merge_objects(target: &mut JsonObject, patch: &JsonObject) {
    for (key, value) in patch {
        match (target.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_objects(existing, incoming);
            }
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

fn flatten_query_value(key: &str, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::String(s) => pairs.push((key.to_string(), s.clone())),
        Value::Bool(b) => pairs.push((key.to_string(), b.to_string())),
        Value::Number(n) => pairs.push((key.to_string(), n.to_string())),
        Value::Array(items) => {
            for item in items {
                flatten_query_value(key, item, pairs);
            }
        }
        Value::Object(map) => {
            for (field, nested) in map {
                flatten_query_value(&format!("{key}[{field}]"), nested, pairs);
            }
        }
    }
}
