use crate::types::Path;
use crate::JsonPointerError;

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
/// Any other character after `~` (or a trailing `~`) is a syntax error.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b").unwrap(), "a~b");
/// assert_eq!(unescape_component("c~1d").unwrap(), "c/d");
/// assert!(unescape_component("e~2f").is_err());
/// ```
pub fn unescape_component(component: &str) -> Result<String, JsonPointerError> {
    if !component.contains('~') {
        return Ok(component.to_string());
    }
    let mut out = String::with_capacity(component.len());
    let mut chars = component.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            _ => return Err(JsonPointerError::PointerInvalid),
        }
    }
    Ok(out)
}

/// Escapes a JSON Pointer path component.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // `~` first, otherwise the `~` produced by `~1` would be escaped again
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into decoded path components.
///
/// - The empty string is the root and yields no components
/// - A non-empty pointer must start with `/`
/// - Each component is unescaped
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer("").unwrap(), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/").unwrap(), vec![""]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d").unwrap(), vec!["a~b", "c/d"]);
/// assert!(parse_json_pointer("foo").is_err());
/// ```
pub fn parse_json_pointer(pointer: &str) -> Result<Path, JsonPointerError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let rest = pointer
        .strip_prefix('/')
        .ok_or(JsonPointerError::PointerInvalid)?;
    rest.split('/').map(unescape_component).collect()
}

/// Format path components into a JSON Pointer string.
///
/// Returns an empty string for the root path.
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Check if a path points to the root value.
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Check if `parent` is a strict ancestor of `child`.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::is_child;
///
/// let parent = vec!["foo".to_string()];
/// let child = vec!["foo".to_string(), "bar".to_string()];
/// assert!(is_child(&parent, &child));
/// assert!(!is_child(&child, &parent));
/// assert!(!is_child(&parent, &parent));
/// ```
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    parent.len() < child.len() && child[..parent.len()] == *parent
}

/// Check if two paths are equal.
pub fn is_path_equal(p1: &[String], p2: &[String]) -> bool {
    p1 == p2
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns [`JsonPointerError::NoParent`] for the root path.
pub fn parent(path: &[String]) -> Result<&[String], JsonPointerError> {
    match path.split_last() {
        Some((_, rest)) => Ok(rest),
        None => Err(JsonPointerError::NoParent),
    }
}

/// Check if a string is a valid array index literal.
///
/// Only ASCII digits, and no leading zero unless the index is exactly `"0"`.
///
/// # Example
///
/// ```
/// use jsonpatch_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("+1"));
/// assert!(!is_valid_index("1.5"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    let bytes = index.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_digit())
}

/// Resolve an array step against an array of length `len`.
///
/// With `insert` set the step may address one past the end, either by
/// index `len` or by `-`. Otherwise the index must be strictly less than
/// `len` and `-` never resolves.
///
/// # Errors
///
/// - [`JsonPointerError::InvalidIndex`] if the step is neither `-` nor a
///   valid index literal
/// - [`JsonPointerError::NotFound`] if the index is out of bounds
pub fn array_index(step: &str, len: usize, insert: bool) -> Result<usize, JsonPointerError> {
    if step == "-" {
        return if insert {
            Ok(len)
        } else {
            Err(JsonPointerError::NotFound)
        };
    }
    if !is_valid_index(step) {
        return Err(JsonPointerError::InvalidIndex);
    }
    // A well-formed literal that overflows usize is simply out of bounds.
    let idx: usize = step.parse().map_err(|_| JsonPointerError::NotFound)?;
    if idx < len || (insert && idx == len) {
        Ok(idx)
    } else {
        Err(JsonPointerError::NotFound)
    }
}
