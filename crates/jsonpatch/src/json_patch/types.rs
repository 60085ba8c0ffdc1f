//! Core types for the JSON Patch module.

use jsonpatch_pointer::JsonPointerError;
use serde_json::Value;
use thiserror::Error;

pub use jsonpatch_pointer::Path;

// ── Error ─────────────────────────────────────────────────────────────────

/// Why an operation could not be applied.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad `~` escape, missing leading `/`, or a malformed array index.
    #[error("INVALID_POINTER_SYNTAX")]
    InvalidPointerSyntax,
    /// A required location does not resolve against the current document.
    #[error("POINTER_NOT_FOUND")]
    PointerNotFound,
    /// Well-formed but illegal for the current state, e.g. moving a value
    /// into its own descendant or removing the root.
    #[error("INVALID_PATCH_OPERATION")]
    InvalidPatchOperation,
    /// A `test` assertion did not hold.
    #[error("TEST_FAILED")]
    TestFailed,
}

impl From<JsonPointerError> for ErrorKind {
    fn from(err: JsonPointerError) -> Self {
        match err {
            JsonPointerError::PointerInvalid | JsonPointerError::InvalidIndex => {
                ErrorKind::InvalidPointerSyntax
            }
            JsonPointerError::NotFound => ErrorKind::PointerNotFound,
            JsonPointerError::NoParent => ErrorKind::InvalidPatchOperation,
        }
    }
}

/// Failure of a single operation, naming the pointer that caused it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind} at {pointer:?}")]
pub struct PatchError {
    pub kind: ErrorKind,
    pub pointer: String,
}

impl PatchError {
    pub fn new(kind: ErrorKind, pointer: impl Into<String>) -> Self {
        Self {
            kind,
            pointer: pointer.into(),
        }
    }
}

/// Failure of a whole patch: the first operation that could not be applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("operation [index = {operation_index}] failed: {kind} at {pointer:?}")]
pub struct PatchFailure {
    /// Zero-based index of the failing operation.
    pub operation_index: usize,
    pub kind: ErrorKind,
    /// The pointer (`path` or `from`) that failed.
    pub pointer: String,
}

impl PatchFailure {
    pub fn new(operation_index: usize, err: PatchError) -> Self {
        Self {
            operation_index,
            kind: err.kind,
            pointer: err.pointer,
        }
    }

    /// True when the patch was rejected by a `test` operation rather than
    /// by a structural problem.
    pub fn is_test_failure(&self) -> bool {
        self.kind == ErrorKind::TestFailed
    }
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A JSON Patch operation.
///
/// Pointers are kept as their RFC 6901 strings and parsed when the
/// operation is applied, so syntax errors are reported against the index
/// of the operation that carries them.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Copy { path: String, from: String },
    Move { path: String, from: String },
    Test { path: String, value: Value },
}

impl Op {
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Op::Add {
            path: path.into(),
            value,
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Op::Remove { path: path.into() }
    }

    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Op::Replace {
            path: path.into(),
            value,
        }
    }

    pub fn copy(from: impl Into<String>, path: impl Into<String>) -> Self {
        Op::Copy {
            path: path.into(),
            from: from.into(),
        }
    }

    pub fn move_(from: impl Into<String>, path: impl Into<String>) -> Self {
        Op::Move {
            path: path.into(),
            from: from.into(),
        }
    }

    pub fn test(path: impl Into<String>, value: Value) -> Self {
        Op::Test {
            path: path.into(),
            value,
        }
    }

    /// The wire name of the operation (`"add"`, `"move"`, ...).
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Copy { .. } => "copy",
            Op::Move { .. } => "move",
            Op::Test { .. } => "test",
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path }
            | Op::Replace { path, .. }
            | Op::Copy { path, .. }
            | Op::Move { path, .. }
            | Op::Test { path, .. } => path,
        }
    }

    /// The source pointer of `copy` and `move`.
    pub fn from_pointer(&self) -> Option<&str> {
        match self {
            Op::Copy { from, .. } | Op::Move { from, .. } => Some(from),
            _ => None,
        }
    }

    /// Predicate operations never change the document.
    pub fn is_predicate(&self) -> bool {
        matches!(self, Op::Test { .. })
    }
}

// ── Result types ──────────────────────────────────────────────────────────

/// Result of applying a single operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OpResult {
    /// The value at the path before the operation, if it displaced one.
    pub old: Option<Value>,
}

/// Result of applying a full patch.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchResult {
    pub doc: Value,
    pub res: Vec<OpResult>,
}
