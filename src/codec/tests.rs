//! Tests for the wire codec

use super::*;
use crate::error::Error;
use crate::types::JsonObject;
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::json;
use test_case::test_case;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Patch {
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    name: Omittable<String>,
    #[serde(default, skip_serializing_if = "Omittable::is_omitted")]
    phone_number: Omittable<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Listing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
}

impl Params for Listing {
    const FIELDS: FieldMap =
        FieldMap::new(&[("pageNumber", "page_number"), ("pageSize", "page_size")]);
}

crate::codec::api_enum! {
    /// Test enum
    pub enum Colour {
        Red => "red",
        DarkBlue => "dark_blue",
    }
}

// ============================================================================
// Omittable Tests
// ============================================================================

#[test]
fn test_omitted_field_is_absent_and_null_is_sent() {
    let patch = Patch {
        name: Omittable::Omitted,
        phone_number: Omittable::Null,
    };
    let value = serde_json::to_value(&patch).unwrap();

    assert_eq!(value, json!({"phone_number": null}));
    assert!(value.get("name").is_none());
}

#[test]
fn test_omittable_value_serializes_plainly() {
    let patch = Patch {
        name: "Ada".to_string().into(),
        ..Default::default()
    };
    assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"name": "Ada"}));
}

#[test]
fn test_omittable_decode_distinguishes_missing_and_null() {
    let patch: Patch = serde_json::from_value(json!({"phone_number": null})).unwrap();
    assert!(patch.name.is_omitted());
    assert!(patch.phone_number.is_null());

    let patch: Patch = serde_json::from_value(json!({"name": "Ada"})).unwrap();
    assert_eq!(patch.name.as_value().map(String::as_str), Some("Ada"));
}

#[test]
fn test_omittable_helpers() {
    assert_eq!(Omittable::from_option(None::<u32>), Omittable::Null);
    assert_eq!(Omittable::from_option(Some(3)), Omittable::Value(3));
    assert_eq!(Omittable::Value(2).map(|v| v * 10), Omittable::Value(20));
    assert_eq!(Omittable::<u32>::Omitted.into_option(), None);
}

// ============================================================================
// FieldMap / Params Tests
// ============================================================================

#[test]
fn test_field_map_is_reversible() {
    let map = Listing::FIELDS;
    assert_eq!(map.to_wire("pageNumber"), "page_number");
    assert_eq!(map.to_host("page_number"), "pageNumber");
    assert_eq!(map.to_wire("status"), "status");
    assert_eq!(map.len(), 2);
    assert!(FieldMap::EMPTY.is_empty());
}

#[test]
fn test_raw_params_translate_to_typed() {
    let mut raw = JsonObject::new();
    raw.insert("pageNumber".into(), json!(2));
    raw.insert("status".into(), json!("succeeded"));

    let params = Listing::from_raw(&raw).unwrap();
    assert_eq!(params.page_number, Some(2));
    assert_eq!(params.status.as_deref(), Some("succeeded"));

    let wire = params.to_wire().unwrap();
    assert_eq!(wire.get("page_number"), Some(&json!(2)));

    let back = params.to_raw().unwrap();
    assert_eq!(back.get("pageNumber"), Some(&json!(2)));
    assert!(back.get("page_number").is_none());
}

#[test]
fn test_raw_params_type_mismatch() {
    let mut raw = JsonObject::new();
    raw.insert("pageSize".into(), json!("lots"));

    let err = Listing::from_raw(&raw).unwrap_err();
    assert!(matches!(err, Error::InvalidParams { .. }));
}

#[test]
fn test_encode_params_rejects_non_objects() {
    assert!(encode_params(&()).unwrap().is_empty());
    let err = encode_params(&[1, 2, 3]).unwrap_err();
    assert!(err.to_string().contains("an array"));
}

// ============================================================================
// api_enum! Tests
// ============================================================================

#[test_case("red", Colour::Red ; "known value")]
#[test_case("dark_blue", Colour::DarkBlue ; "snake case value")]
#[test_case("ultraviolet", Colour::Unknown("ultraviolet".into()) ; "unknown value")]
fn test_enum_from_raw(raw: &str, expected: Colour) {
    assert_eq!(Colour::from(raw), expected);
    assert_eq!(expected.as_str(), raw);
}

#[test]
fn test_unknown_enum_value_round_trips() {
    let decoded: Colour = serde_json::from_value(json!("ultraviolet")).unwrap();
    assert!(!decoded.is_known());
    assert_eq!(decoded, "ultraviolet");
    assert_eq!(serde_json::to_value(&decoded).unwrap(), json!("ultraviolet"));
}

#[test]
fn test_enum_known_list_and_display() {
    assert_eq!(Colour::KNOWN, &["red", "dark_blue"]);
    assert_eq!(Colour::DarkBlue.to_string(), "dark_blue");
    assert_eq!("red".parse::<Colour>().unwrap(), Colour::Red);
}
