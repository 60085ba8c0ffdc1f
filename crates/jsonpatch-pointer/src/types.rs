//! Type definitions for JSON Pointer.

use serde_json::Value;

/// A decoded step in a JSON Pointer path.
///
/// Steps are kept as strings; whether a step is a mapping key or a sequence
/// index is only known once it meets a container.
pub type PathStep = String;

/// A decoded JSON Pointer path.
pub type Path = Vec<PathStep>;

/// The key used to reach a value from its container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceKey {
    String(String),
    Index(usize),
}

/// A resolved location in a JSON document.
///
/// Contains the target value, the container holding it, and the key used
/// to reach it. The root has neither container nor key.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference<'a> {
    /// The target value.
    pub val: &'a Value,
    /// The object or array containing the target value.
    pub obj: Option<&'a Value>,
    /// The key (string for objects, index for arrays) used to access the value.
    pub key: Option<ReferenceKey>,
}

impl<'a> Reference<'a> {
    pub fn is_root(&self) -> bool {
        self.obj.is_none()
    }

    pub fn is_array_reference(&self) -> bool {
        matches!(self.obj, Some(Value::Array(_)))
    }

    pub fn is_object_reference(&self) -> bool {
        matches!(self.obj, Some(Value::Object(_)))
    }

    /// Get the numeric index if this is an array reference.
    pub fn index(&self) -> Option<usize> {
        match self.key {
            Some(ReferenceKey::Index(idx)) => Some(idx),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_is_array() {
        let doc = json!([1, 2, 3]);
        let ref_val = Reference {
            val: &doc[1],
            obj: Some(&doc),
            key: Some(ReferenceKey::Index(1)),
        };
        assert!(ref_val.is_array_reference());
        assert!(!ref_val.is_object_reference());
        assert_eq!(ref_val.index(), Some(1));
    }

    #[test]
    fn test_reference_is_object() {
        let doc = json!({"foo": "bar"});
        let ref_val = Reference {
            val: &doc["foo"],
            obj: Some(&doc),
            key: Some(ReferenceKey::String("foo".to_string())),
        };
        assert!(ref_val.is_object_reference());
        assert!(!ref_val.is_root());
        assert_eq!(ref_val.index(), None);
    }
}
