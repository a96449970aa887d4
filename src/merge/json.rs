//! JSON object helpers
//!
//! `.prettierrc` and `.vscode/settings.json` are flat-ish JSON objects whose
//! keys are updated in place. With `serde_json`'s `preserve_order` feature the
//! key order of the loaded file survives a round trip, so only the keys the
//! processors touch move.
//!
//! Container helpers replace a value of the wrong type with an empty container
//! and log a warning, mirroring how the YAML merge treats type mismatches.

use log::warn;
use serde_json::{Map, Value as JsonValue};

use crate::error::{Error, Result};

/// Turn a null document into an empty object and borrow the object.
///
/// # Errors
///
/// Returns `Error::Document` when the document root is not an object.
pub fn as_object_mut(document: &mut JsonValue) -> Result<&mut Map<String, JsonValue>> {
    if document.is_null() {
        *document = JsonValue::Object(Map::new());
    }
    match document {
        JsonValue::Object(map) => Ok(map),
        other => Err(Error::Document {
            message: format!("expected a JSON object, found {}", get_json_type_name(other)),
        }),
    }
}

/// Borrow the object stored under `key`, creating it when absent.
pub fn ensure_object<'a>(map: &'a mut Map<String, JsonValue>, key: &str) -> &'a mut Map<String, JsonValue> {
    let slot = map
        .entry(key.to_string())
        .or_insert_with(|| JsonValue::Object(Map::new()));
    if !slot.is_object() {
        warn!(
            "Type mismatch at '{}': replacing {} with Object",
            key,
            get_json_type_name(slot)
        );
        *slot = JsonValue::Object(Map::new());
    }
    match slot {
        JsonValue::Object(object) => object,
        _ => unreachable!("slot was just set to an object"),
    }
}

/// Borrow the array stored under `key`, creating it when absent.
pub fn ensure_array<'a>(map: &'a mut Map<String, JsonValue>, key: &str) -> &'a mut Vec<JsonValue> {
    let slot = map
        .entry(key.to_string())
        .or_insert_with(|| JsonValue::Array(Vec::new()));
    if !slot.is_array() {
        warn!(
            "Type mismatch at '{}': replacing {} with Array",
            key,
            get_json_type_name(slot)
        );
        *slot = JsonValue::Array(Vec::new());
    }
    match slot {
        JsonValue::Array(array) => array,
        _ => unreachable!("slot was just set to an array"),
    }
}

/// Push `item` unless an equal value is already present.
pub fn append_unique(array: &mut Vec<JsonValue>, item: JsonValue) {
    if !array.contains(&item) {
        array.push(item);
    }
}

/// Insert `value` only when `key` is absent.
pub fn set_default(map: &mut Map<String, JsonValue>, key: &str, value: JsonValue) {
    if !map.contains_key(key) {
        map.insert(key.to_string(), value);
    }
}

/// Get a human-readable type name for a JSON value
pub fn get_json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "Null",
        JsonValue::Bool(_) => "Bool",
        JsonValue::Number(_) => "Number",
        JsonValue::String(_) => "String",
        JsonValue::Array(_) => "Array",
        JsonValue::Object(_) => "Object",
    }
}
