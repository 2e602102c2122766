//! Projections over decoded payloads.
//!
//! Payloads arrive already decoded by the host's JSON parser. Converters only
//! need to view them as a mapping or read fields from them, or hand them to serde.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ConvertError, Result};

/// Decoded structured payload of a block or editor.
pub type RawNode = Value;

/// Short name of the JSON kind of a node, for error messages.
#[must_use]
pub fn kind_of(node: &RawNode) -> &'static str {
    match node {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Project a node as a key/value mapping.
///
/// # Errors
/// Returns `UnexpectedShape` if the node is not an object.
pub fn as_object(node: &RawNode) -> Result<&Map<String, RawNode>> {
    node.as_object().ok_or(ConvertError::UnexpectedShape {
        expected: "object",
        found: kind_of(node),
    })
}

/// Read a required string field from an object node.
///
/// # Errors
/// Fails if the node is not an object, the field is absent, or the field is
/// not a string.
pub fn string_field(node: &RawNode, field: &str) -> Result<String> {
    optional_string_field(node, field)?.ok_or_else(|| ConvertError::MissingField(field.to_string()))
}

/// Read an optional string field from an object node.
///
/// An explicit `null` counts as absent.
///
/// # Errors
/// Fails if the node is not an object or the field is not a string.
pub fn optional_string_field(node: &RawNode, field: &str) -> Result<Option<String>> {
    match as_object(node)?.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ConvertError::InvalidField {
            field: field.to_string(),
            expected: "string",
            found: kind_of(other),
        }),
    }
}

/// Read an array of strings from an object node. A missing field is empty.
///
/// # Errors
/// Fails if the field is not an array or contains non-string items.
pub fn string_list_field(node: &RawNode, field: &str) -> Result<Vec<String>> {
    let items = match as_object(node)?.get(field) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ConvertError::InvalidField {
                field: field.to_string(),
                expected: "array",
                found: kind_of(other),
            })
        }
    };

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| ConvertError::InvalidField {
                    field: field.to_string(),
                    expected: "array of strings",
                    found: kind_of(item),
                })
        })
        .collect()
}

/// Deserialize a node into a typed struct.
///
/// # Errors
/// Returns `Deserialize` if serde rejects the payload.
pub fn deserialize<T: DeserializeOwned>(node: &RawNode) -> Result<T> {
    Ok(T::deserialize(node)?)
}
