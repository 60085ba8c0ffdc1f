use serde_json::Value;

/// Computes the container nesting depth of a JSON value.
///
/// Scalars have depth `0`; every array or object adds one level. The walk
/// uses an explicit stack so hostile inputs cannot overflow the call stack.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use jsonpatch_util::json_depth;
///
/// assert_eq!(json_depth(&json!(1)), 0);
/// assert_eq!(json_depth(&json!([])), 1);
/// assert_eq!(json_depth(&json!({"a": [1, {"b": null}]})), 3);
/// ```
pub fn json_depth(value: &Value) -> usize {
    let mut max = 0;
    let mut stack = vec![(value, 0usize)];
    while let Some((node, depth)) = stack.pop() {
        match node {
            Value::Array(arr) => {
                max = max.max(depth + 1);
                stack.extend(arr.iter().map(|v| (v, depth + 1)));
            }
            Value::Object(map) => {
                max = max.max(depth + 1);
                stack.extend(map.values().map(|v| (v, depth + 1)));
            }
            _ => max = max.max(depth),
        }
    }
    max
}
