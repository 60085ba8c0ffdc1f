//! JSON Pointer (RFC 6901) for `serde_json` documents.
//!
//! Pointers are decoded into a [`Path`] of unescaped steps and resolved
//! against a [`serde_json::Value`] without mutating it. Resolution failures
//! are reported as [`JsonPointerError`].
//!
//! ```
//! use jsonpatch_pointer::{format_json_pointer, get, parse_json_pointer};
//!
//! let path = parse_json_pointer("/users/0/a~1b").unwrap();
//! assert_eq!(path, ["users", "0", "a/b"]);
//! assert_eq!(format_json_pointer(&path), "/users/0/a~1b");
//!
//! let doc = serde_json::json!({"users": [{"a/b": true}]});
//! assert_eq!(get(&doc, &path), Some(&serde_json::Value::Bool(true)));
//! ```

use thiserror::Error;

pub mod find;
pub mod get;
pub mod types;
pub mod util;

pub use find::{find, find_by_pointer, find_mut};
pub use get::{get, get_mut};
pub use types::{Path, PathStep, Reference, ReferenceKey};
pub use util::{
    array_index, escape_component, format_json_pointer, is_child, is_path_equal, is_root,
    is_valid_index, parent, parse_json_pointer, unescape_component,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    /// The pointer string is malformed: no leading `/`, or a bad `~` escape.
    #[error("POINTER_INVALID")]
    PointerInvalid,
    /// An array step is neither `-` nor a valid index literal.
    #[error("INVALID_INDEX")]
    InvalidIndex,
    #[error("NOT_FOUND")]
    NotFound,
    #[error("NO_PARENT")]
    NoParent,
}

impl JsonPointerError {
    /// True for errors caused by the pointer text itself rather than the
    /// document it was resolved against.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            JsonPointerError::PointerInvalid | JsonPointerError::InvalidIndex
        )
    }
}

/// Validate a JSON Pointer string without resolving it.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();  // Root is valid
/// validate_json_pointer("/foo/bar").unwrap();
/// validate_json_pointer("foo").unwrap_err();  // Missing leading /
/// validate_json_pointer("/a~2").unwrap_err();  // Unknown escape
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), JsonPointerError> {
    parse_json_pointer(pointer).map(|_| ())
}
