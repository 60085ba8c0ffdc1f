use serde_json::Value;

use crate::find::{find, find_mut};

/// Get a value from a JSON document by path.
///
/// Returns `None` if the path does not resolve for any reason.
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    find(val, path).ok().map(|r| r.val)
}

/// Get a mutable reference to a value in a JSON document by path.
///
/// Returns `None` if the path does not resolve for any reason.
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Option<&'a mut Value> {
    find_mut(val, path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(steps: &[&str]) -> Vec<String> {
        steps.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn get_resolves_or_returns_none() {
        let doc = json!({"a": {"b": [1, 2, 3]}});
        assert_eq!(get(&doc, &path(&["a", "b", "1"])), Some(&json!(2)));
        assert_eq!(get(&doc, &[]), Some(&doc));
        assert_eq!(get(&doc, &path(&["a", "b", "-"])), None);
        assert_eq!(get(&doc, &path(&["a", "b", "01"])), None);
        assert_eq!(get(&doc, &path(&["a", "c"])), None);
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut doc = json!({"a": {"b": [1, 2, 3]}});
        *get_mut(&mut doc, &path(&["a", "b", "2"])).unwrap() = json!("x");
        assert_eq!(doc, json!({"a": {"b": [1, 2, "x"]}}));

        if let Some(Value::Object(map)) = get_mut(&mut doc, &path(&["a"])) {
            map.insert("c".to_string(), json!(null));
        }
        assert_eq!(doc, json!({"a": {"b": [1, 2, "x"], "c": null}}));

        assert!(get_mut(&mut doc, &path(&["a", "b", "3"])).is_none());
        assert!(get_mut(&mut doc, &path(&["a", "b", "0", "deeper"])).is_none());
    }
}
