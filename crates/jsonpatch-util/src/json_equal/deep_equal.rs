use serde_json::{Number, Value};

/// Compares two JSON numbers by value rather than by representation.
///
/// Integers compare exactly. An integer equals a float only if the float
/// holds exactly that integer, so `1` equals `1.0` but `2^53 + 1` does not
/// equal the float `2^53`.
///
/// # Examples
///
/// ```
/// use serde_json::Number;
/// use jsonpatch_util::number_equal;
///
/// let one = Number::from(1);
/// let one_f = Number::from_f64(1.0).unwrap();
/// assert!(number_equal(&one, &one_f));
/// assert!(!number_equal(&one, &Number::from(-1)));
/// ```
pub fn number_equal(a: &Number, b: &Number) -> bool {
    match (as_integer(a), as_integer(b)) {
        (Some(x), Some(y)) => x == y,
        (Some(i), None) => b.as_f64().is_some_and(|f| float_is_integer(f, i)),
        (None, Some(i)) => a.as_f64().is_some_and(|f| float_is_integer(f, i)),
        (None, None) => matches!((a.as_f64(), b.as_f64()), (Some(x), Some(y)) if x == y),
    }
}

fn as_integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

/// Every JSON integer lies in `[-2^63, 2^64)`; within that range the cast
/// of an integral `f64` to `i128` is exact.
fn float_is_integer(f: f64, i: i128) -> bool {
    const LIMIT: f64 = 18_446_744_073_709_551_616.0; // 2^64
    f.is_finite() && f.fract() == 0.0 && f.abs() < LIMIT && f as i128 == i
}

/// Structural equality of two JSON values.
///
/// Numbers compare by value (see [`number_equal`]), strings exactly.
/// Arrays must match element for element in order; objects must have the
/// same key set, with key order ignored.
///
/// ```
/// use serde_json::json;
/// use jsonpatch_util::json_equal::deep_equal;
///
/// assert!(deep_equal(&json!({"x": [1, 2]}), &json!({"x": [1.0, 2]})));
/// assert!(!deep_equal(&json!({"x": [1, 2]}), &json!({"x": [2, 1]})));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => number_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| deep_equal(x, y)))
        }
        _ => false,
    }
}
