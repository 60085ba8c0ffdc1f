use serde_json::Value;

use crate::types::{Reference, ReferenceKey};
use crate::util::{array_index, parse_json_pointer};
use crate::JsonPointerError;

/// Take one read step from `current`.
fn step<'a>(current: &'a Value, path_step: &str) -> Result<(&'a Value, ReferenceKey), JsonPointerError> {
    match current {
        Value::Object(map) => map
            .get(path_step)
            .map(|v| (v, ReferenceKey::String(path_step.to_string())))
            .ok_or(JsonPointerError::NotFound),
        Value::Array(arr) => {
            let idx = array_index(path_step, arr.len(), false)?;
            Ok((&arr[idx], ReferenceKey::Index(idx)))
        }
        _ => Err(JsonPointerError::NotFound),
    }
}

/// Find an existing value in a JSON document by path.
///
/// Every step must resolve: object keys must be present and array indices
/// must be strictly less than the array length. `-` never resolves here.
///
/// # Errors
///
/// - `JsonPointerError::NotFound` - a key is missing, an index is out of
///   bounds, or a step addresses into a scalar
/// - `JsonPointerError::InvalidIndex` - an array step is not a valid index
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::{find, ReferenceKey};
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": [10, 20]}});
/// let path = vec!["foo".to_string(), "bar".to_string(), "1".to_string()];
/// let r = find(&doc, &path).unwrap();
/// assert_eq!(r.val, &json!(20));
/// assert_eq!(r.key, Some(ReferenceKey::Index(1)));
/// ```
pub fn find<'a>(val: &'a Value, path: &[String]) -> Result<Reference<'a>, JsonPointerError> {
    let mut current = val;
    let mut obj = None;
    let mut key = None;
    for path_step in path {
        let (next, next_key) = step(current, path_step)?;
        obj = Some(current);
        key = Some(next_key);
        current = next;
    }
    Ok(Reference {
        val: current,
        obj,
        key,
    })
}

/// Mutable counterpart of [`find`], with the same resolution rules.
pub fn find_mut<'a>(val: &'a mut Value, path: &[String]) -> Result<&'a mut Value, JsonPointerError> {
    let mut current = val;
    for path_step in path {
        current = match current {
            Value::Object(map) => map.get_mut(path_step).ok_or(JsonPointerError::NotFound)?,
            Value::Array(arr) => {
                let idx = array_index(path_step, arr.len(), false)?;
                &mut arr[idx]
            }
            _ => return Err(JsonPointerError::NotFound),
        };
    }
    Ok(current)
}

/// Parse `pointer` and [`find`] it in `val`.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::find_by_pointer;
/// use serde_json::json;
///
/// let doc = json!({"a/b": {"~": true}});
/// let r = find_by_pointer("/a~1b/~0", &doc).unwrap();
/// assert_eq!(r.val, &json!(true));
/// ```
pub fn find_by_pointer<'a>(pointer: &str, val: &'a Value) -> Result<Reference<'a>, JsonPointerError> {
    let path = parse_json_pointer(pointer)?;
    find(val, &path)
}
