//! JSON codec for JSON Patch operations.
//!
//! Converts operations to/from `serde_json::Value` in the RFC 6902 wire
//! format. Members an operation does not use are ignored on decode.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::json_patch::types::Op;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("patch must be an array")]
    NotAnArray,
    #[error("operation must be an object")]
    NotAnObject,
    #[error("missing 'op' field")]
    MissingOp,
    #[error("unknown operation {0:?}")]
    UnknownOp(String),
    #[error("{op} requires '{field}'")]
    MissingField { op: &'static str, field: &'static str },
    #[error("'{field}' must be a string")]
    NotAString { field: &'static str },
    #[error("Error in operation [index = {index}] ({source}).")]
    AtIndex {
        index: usize,
        #[source]
        source: Box<CodecError>,
    },
}

// ── Field helpers ─────────────────────────────────────────────────────────

fn pointer_field(
    obj: &Map<String, Value>,
    op: &'static str,
    field: &'static str,
) -> Result<String, CodecError> {
    obj.get(field)
        .ok_or(CodecError::MissingField { op, field })?
        .as_str()
        .map(str::to_string)
        .ok_or(CodecError::NotAString { field })
}

fn value_field(obj: &Map<String, Value>, op: &'static str) -> Result<Value, CodecError> {
    obj.get("value")
        .cloned()
        .ok_or(CodecError::MissingField { op, field: "value" })
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to a `serde_json::Value` in the JSON Patch format.
pub fn to_json(op: &Op) -> Value {
    match op {
        Op::Add { path, value } => json!({ "op": "add", "path": path, "value": value }),
        Op::Remove { path } => json!({ "op": "remove", "path": path }),
        Op::Replace { path, value } => json!({ "op": "replace", "path": path, "value": value }),
        Op::Copy { path, from } => json!({ "op": "copy", "from": from, "path": path }),
        Op::Move { path, from } => json!({ "op": "move", "from": from, "path": path }),
        Op::Test { path, value } => json!({ "op": "test", "path": path, "value": value }),
    }
}

/// Serialize a list of operations to a JSON array.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize a `serde_json::Value` into an `Op`.
///
/// Pointer syntax is not checked here; it is checked when the operation
/// is applied.
pub fn from_json(v: &Value) -> Result<Op, CodecError> {
    let obj = v.as_object().ok_or(CodecError::NotAnObject)?;
    let op_str = match obj.get("op") {
        None => return Err(CodecError::MissingOp),
        Some(op) => op.as_str().ok_or(CodecError::NotAString { field: "op" })?,
    };

    match op_str {
        "add" => Ok(Op::Add {
            path: pointer_field(obj, "add", "path")?,
            value: value_field(obj, "add")?,
        }),
        "remove" => Ok(Op::Remove {
            path: pointer_field(obj, "remove", "path")?,
        }),
        "replace" => Ok(Op::Replace {
            path: pointer_field(obj, "replace", "path")?,
            value: value_field(obj, "replace")?,
        }),
        "copy" => Ok(Op::Copy {
            path: pointer_field(obj, "copy", "path")?,
            from: pointer_field(obj, "copy", "from")?,
        }),
        "move" => Ok(Op::Move {
            path: pointer_field(obj, "move", "path")?,
            from: pointer_field(obj, "move", "from")?,
        }),
        "test" => Ok(Op::Test {
            path: pointer_field(obj, "test", "path")?,
            value: value_field(obj, "test")?,
        }),
        other => Err(CodecError::UnknownOp(other.to_string())),
    }
}

/// Deserialize a JSON array into a list of operations.
///
/// Errors carry the index of the offending element.
pub fn from_json_patch(v: &Value) -> Result<Vec<Op>, CodecError> {
    let arr = v.as_array().ok_or(CodecError::NotAnArray)?;
    arr.iter()
        .enumerate()
        .map(|(index, op)| {
            from_json(op).map_err(|e| CodecError::AtIndex {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

// ── serde integration ─────────────────────────────────────────────────────

impl Serialize for Op {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        to_json(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Op {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = Value::deserialize(deserializer)?;
        from_json(&v).map_err(de::Error::custom)
    }
}
