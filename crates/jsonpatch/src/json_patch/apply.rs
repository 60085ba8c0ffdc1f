//! JSON Patch apply logic.
//!
//! Each operation handler works on a mutable document. Patch-level entry
//! points run the handlers against a private copy of the caller's document,
//! so a failing patch never exposes a partially applied state.

use jsonpatch_pointer::{
    array_index, find, find_mut, is_child, is_path_equal, parse_json_pointer, JsonPointerError,
};
use jsonpatch_util::deep_equal;
use serde_json::Value;

use super::types::{ErrorKind, Op, OpResult, PatchError, PatchFailure, PatchResult};

// ── Path navigation ───────────────────────────────────────────────────────

fn parse(pointer: &str) -> Result<Vec<String>, PatchError> {
    parse_json_pointer(pointer).map_err(|e| PatchError::new(e.into(), pointer))
}

fn at(pointer: &str) -> impl Fn(ErrorKind) -> PatchError + '_ {
    move |kind| PatchError::new(kind, pointer)
}

// ── Individual operation applicators ─────────────────────────────────────

/// Insert `value` at `path`, returning the member it overwrote, if any.
/// On failure the document is untouched and `value` is handed back.
fn insert(
    doc: &mut Value,
    path: &[String],
    value: Value,
) -> Result<Option<Value>, (ErrorKind, Value)> {
    let Some((key, parent_path)) = path.split_last() else {
        return Ok(Some(std::mem::replace(doc, value)));
    };
    let parent = match find_mut(doc, parent_path) {
        Ok(parent) => parent,
        Err(e) => return Err((e.into(), value)),
    };
    match parent {
        Value::Object(map) => Ok(map.insert(key.clone(), value)),
        Value::Array(arr) => match array_index(key, arr.len(), true) {
            Ok(idx) => {
                arr.insert(idx, value);
                Ok(None)
            }
            Err(e) => Err((e.into(), value)),
        },
        _ => Err((ErrorKind::PointerNotFound, value)),
    }
}

fn apply_add(doc: &mut Value, path: &[String], value: Value) -> Result<Option<Value>, ErrorKind> {
    insert(doc, path, value).map_err(|(kind, _)| kind)
}

/// Position a removed value occupied in its parent.
enum Slot {
    Member(usize, String),
    Element(usize),
}

/// Detach the value at `path`, remembering where it was.
fn take(doc: &mut Value, path: &[String]) -> Result<(Value, Slot), ErrorKind> {
    let Some((key, parent_path)) = path.split_last() else {
        return Err(JsonPointerError::NoParent.into());
    };
    match find_mut(doc, parent_path)? {
        Value::Object(map) => {
            let pos = map
                .keys()
                .position(|k| k == key)
                .ok_or(ErrorKind::PointerNotFound)?;
            // shift_remove keeps the order of the remaining members
            let value = map.shift_remove(key).ok_or(ErrorKind::PointerNotFound)?;
            Ok((value, Slot::Member(pos, key.clone())))
        }
        Value::Array(arr) => {
            let idx = array_index(key, arr.len(), false)?;
            Ok((arr.remove(idx), Slot::Element(idx)))
        }
        _ => Err(ErrorKind::PointerNotFound),
    }
}

/// Undo a [`take`] on a document that has not changed since.
fn put_back(doc: &mut Value, path: &[String], slot: Slot, value: Value) {
    let Some((_, parent_path)) = path.split_last() else {
        return;
    };
    match (find_mut(doc, parent_path), slot) {
        (Ok(Value::Object(map)), Slot::Member(pos, key)) => {
            map.shift_insert(pos, key, value);
        }
        (Ok(Value::Array(arr)), Slot::Element(idx)) => arr.insert(idx, value),
        _ => {}
    }
}

fn apply_remove(doc: &mut Value, path: &[String]) -> Result<Value, ErrorKind> {
    take(doc, path).map(|(value, _)| value)
}

fn apply_replace(doc: &mut Value, path: &[String], value: Value) -> Result<Value, ErrorKind> {
    let target = find_mut(doc, path)?;
    Ok(std::mem::replace(target, value))
}

fn apply_copy(doc: &mut Value, path: &str, from: &str) -> Result<Option<Value>, PatchError> {
    let from_path = parse(from)?;
    let to_path = parse(path)?;
    let src = find(doc, &from_path)
        .map_err(|e| PatchError::new(e.into(), from))?
        .val
        .clone();
    apply_add(doc, &to_path, src).map_err(at(path))
}

fn apply_move(doc: &mut Value, path: &str, from: &str) -> Result<Option<Value>, PatchError> {
    let from_path = parse(from)?;
    let to_path = parse(path)?;
    find(doc, &from_path).map_err(|e| PatchError::new(e.into(), from))?;
    if is_path_equal(&from_path, &to_path) {
        return Ok(None);
    }
    if is_child(&from_path, &to_path) {
        return Err(PatchError::new(ErrorKind::InvalidPatchOperation, from));
    }
    let (value, slot) = take(doc, &from_path).map_err(at(from))?;
    match insert(doc, &to_path, value) {
        Ok(old) => Ok(old),
        Err((kind, value)) => {
            put_back(doc, &from_path, slot, value);
            Err(PatchError::new(kind, path))
        }
    }
}

fn apply_test(doc: &Value, path: &str, value: &Value) -> Result<(), PatchError> {
    let test_path = parse(path)?;
    let actual = match find(doc, &test_path) {
        Ok(r) => r.val,
        Err(JsonPointerError::NotFound) => {
            return Err(PatchError::new(ErrorKind::TestFailed, path));
        }
        Err(e) => return Err(PatchError::new(e.into(), path)),
    };
    if deep_equal(actual, value) {
        Ok(())
    } else {
        Err(PatchError::new(ErrorKind::TestFailed, path))
    }
}

// ── Main apply function ───────────────────────────────────────────────────

/// Apply a single operation to the document (in-place mutation).
///
/// Returns the value the operation displaced: the overwritten member for
/// `add`, the removed value for `remove`, the previous value for `replace`.
///
/// A failing operation leaves `doc` as it was.
pub fn apply_op(doc: &mut Value, op: &Op) -> Result<Option<Value>, PatchError> {
    match op {
        Op::Add { path, value } => {
            let to_path = parse(path)?;
            apply_add(doc, &to_path, value.clone()).map_err(at(path))
        }
        Op::Remove { path } => {
            let from_path = parse(path)?;
            apply_remove(doc, &from_path).map(Some).map_err(at(path))
        }
        Op::Replace { path, value } => {
            let to_path = parse(path)?;
            apply_replace(doc, &to_path, value.clone())
                .map(Some)
                .map_err(at(path))
        }
        Op::Copy { path, from } => apply_copy(doc, path, from),
        Op::Move { path, from } => apply_move(doc, path, from),
        Op::Test { path, value } => {
            apply_test(doc, path, value)?;
            Ok(None)
        }
    }
}

/// Apply a patch as one transaction, returning the patched document and
/// the value each operation displaced.
///
/// The caller's document is never modified. On failure no intermediate
/// state escapes; the error names the first failing operation.
pub fn apply_patch_with_results(doc: &Value, ops: &[Op]) -> Result<PatchResult, PatchFailure> {
    let mut working = doc.clone();
    let mut res = Vec::with_capacity(ops.len());
    for (index, op) in ops.iter().enumerate() {
        tracing::debug!(index, op = op.op_name(), path = op.path(), "applying operation");
        match apply_op(&mut working, op) {
            Ok(old) => res.push(OpResult { old }),
            Err(err) => {
                let failure = PatchFailure::new(index, err);
                tracing::debug!(%failure, "patch aborted");
                return Err(failure);
            }
        }
    }
    Ok(PatchResult { doc: working, res })
}

/// Apply a patch as one transaction.
///
/// # Example
///
/// ```
/// use jsonpatch::json_patch::{apply_patch, ErrorKind, Op};
/// use serde_json::json;
///
/// let doc = json!({"a": 1});
/// let patched = apply_patch(&doc, &[Op::add("/b", json!(2))]).unwrap();
/// assert_eq!(patched, json!({"a": 1, "b": 2}));
///
/// let failure = apply_patch(&doc, &[Op::replace("/b", json!(2))]).unwrap_err();
/// assert_eq!(failure.kind, ErrorKind::PointerNotFound);
/// assert_eq!(failure.operation_index, 0);
/// ```
pub fn apply_patch(doc: &Value, ops: &[Op]) -> Result<Value, PatchFailure> {
    apply_patch_with_results(doc, ops).map(|r| r.doc)
}

/// Apply a patch to `doc` in place, committing only if every operation
/// succeeds. On failure `doc` is left exactly as it was.
pub fn apply_patch_in_place(doc: &mut Value, ops: &[Op]) -> Result<(), PatchFailure> {
    if ops.is_empty() {
        return Ok(());
    }
    *doc = apply_patch(doc, ops)?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
