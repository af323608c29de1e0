//! Host-name ↔ wire-name translation tables

use crate::types::JsonObject;

/// An explicit table of `(host name, wire name)` pairs.
///
/// Typed parameter structs already use wire names for their fields. The
/// table is for loosely typed input keyed the way a caller would spell it in
/// another casing (`pageNumber`). Names without an entry pass through
/// unchanged in both directions.
#[derive(Debug, Clone, Copy)]
pub struct FieldMap {
    pairs: &'static [(&'static str, &'static str)],
}

impl FieldMap {
    /// A table with no entries
    pub const EMPTY: FieldMap = FieldMap { pairs: &[] };

    /// Build a table from `(host, wire)` pairs
    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { pairs }
    }

    /// Wire name for a host name
    pub fn to_wire<'a>(&self, host: &'a str) -> &'a str {
        self.pairs
            .iter()
            .find(|(h, _)| *h == host)
            .map_or(host, |(_, w)| w)
    }

    /// Host name for a wire name
    pub fn to_host<'a>(&self, wire: &'a str) -> &'a str {
        self.pairs
            .iter()
            .find(|(_, w)| *w == wire)
            .map_or(wire, |(h, _)| h)
    }

    /// Rename the keys of a host-keyed object to wire keys
    pub fn encode(&self, host: &JsonObject) -> JsonObject {
        host.iter()
            .map(|(k, v)| (self.to_wire(k).to_string(), v.clone()))
            .collect()
    }

    /// Rename the keys of a wire-keyed object to host keys
    pub fn decode(&self, wire: &JsonObject) -> JsonObject {
        wire.iter()
            .map(|(k, v)| (self.to_host(k).to_string(), v.clone()))
            .collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
