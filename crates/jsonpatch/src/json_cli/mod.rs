//! `json-cli`: command-line tools for JSON patching and pointer lookup.
//!
//! Provides the core logic used by the binary entry points:
//! - `json-patch`: apply a JSON Patch to a document
//! - `json-pointer`: look up a JSON Pointer in a document
//!
//! The engine enforces no resource limits of its own; [`PatchLimits`] is
//! the caller-side guard the tools apply before invoking it.

use jsonpatch_pointer::{find_by_pointer, JsonPointerError};
use jsonpatch_util::json_depth;
use serde_json::Value;
use thiserror::Error;

use crate::json_patch::codec::json::from_json_patch;
use crate::json_patch::{apply_patch, CodecError, Op, PatchFailure};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid patch: {0}")]
    Codec(#[from] CodecError),
    #[error("{0}")]
    Patch(#[from] PatchFailure),
    #[error("{pointer:?}: {source}")]
    Pointer {
        pointer: String,
        source: JsonPointerError,
    },
    #[error("patch has {actual} operations, limit is {limit}")]
    TooManyOps { actual: usize, limit: usize },
    #[error("document depth {actual} exceeds limit {limit}")]
    TooDeep { actual: usize, limit: usize },
}

// ── Configuration ─────────────────────────────────────────────────────────

/// How results are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

impl OutputFormat {
    pub fn render(self, value: &Value) -> Result<String, serde_json::Error> {
        match self {
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
            OutputFormat::Compact => serde_json::to_string(value),
        }
    }
}

/// Upper bounds checked before a patch reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatchLimits {
    pub max_ops: Option<usize>,
    pub max_depth: Option<usize>,
}

impl PatchLimits {
    pub fn check(&self, doc: &Value, ops: &[Op]) -> Result<(), CliError> {
        if let Some(limit) = self.max_ops {
            if ops.len() > limit {
                return Err(CliError::TooManyOps {
                    actual: ops.len(),
                    limit,
                });
            }
        }
        if let Some(limit) = self.max_depth {
            let actual = json_depth(doc);
            if actual > limit {
                return Err(CliError::TooDeep { actual, limit });
            }
        }
        Ok(())
    }
}

// ── json-patch ────────────────────────────────────────────────────────────

/// Apply a JSON Patch (RFC 6902) to a document.
///
/// `doc_json`: the document as a JSON string.
/// `patch_json`: the patch operations as a JSON array string.
///
/// Returns the patched document rendered in `format`.
pub fn apply_json_patch(
    doc_json: &str,
    patch_json: &str,
    limits: &PatchLimits,
    format: OutputFormat,
) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let ops_raw: Value = serde_json::from_str(patch_json)?;
    let ops = from_json_patch(&ops_raw)?;
    limits.check(&doc, &ops)?;
    tracing::debug!(ops = ops.len(), "applying patch");
    let patched = apply_patch(&doc, &ops)?;
    Ok(format.render(&patched)?)
}

// ── json-pointer ──────────────────────────────────────────────────────────

/// Look up a JSON Pointer (RFC 6901) in a document.
///
/// Returns the found value rendered in `format`.
pub fn lookup_pointer(doc_json: &str, pointer: &str, format: OutputFormat) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let found = find_by_pointer(pointer, &doc).map_err(|source| CliError::Pointer {
        pointer: pointer.to_string(),
        source,
    })?;
    Ok(format.render(found.val)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json_patch::ErrorKind;
    use serde_json::json;

    #[test]
    fn apply_json_patch_compact() {
        let out = apply_json_patch(
            r#"{"a":1}"#,
            r#"[{"op":"add","path":"/b","value":[true]}]"#,
            &PatchLimits::default(),
            OutputFormat::Compact,
        )
        .unwrap();
        assert_eq!(out, r#"{"a":1,"b":[true]}"#);
    }

    #[test]
    fn apply_json_patch_reports_failure() {
        let err = apply_json_patch(
            r#"{"a":1}"#,
            r#"[{"op":"test","path":"/a","value":2}]"#,
            &PatchLimits::default(),
            OutputFormat::Pretty,
        )
        .unwrap_err();
        match err {
            CliError::Patch(failure) => {
                assert_eq!(failure.kind, ErrorKind::TestFailed);
                assert_eq!(failure.operation_index, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn apply_json_patch_rejects_bad_json() {
        let err = apply_json_patch("{", "[]", &PatchLimits::default(), OutputFormat::Pretty)
            .unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }

    #[test]
    fn limits_are_checked_before_apply() {
        let limits = PatchLimits {
            max_ops: Some(1),
            max_depth: None,
        };
        let err = apply_json_patch(
            "{}",
            r#"[{"op":"add","path":"/a","value":1},{"op":"remove","path":"/a"}]"#,
            &limits,
            OutputFormat::Compact,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::TooManyOps { actual: 2, limit: 1 }));

        let limits = PatchLimits {
            max_ops: None,
            max_depth: Some(2),
        };
        let doc = json!({"a": {"b": {"c": 1}}});
        assert!(matches!(
            limits.check(&doc, &[]),
            Err(CliError::TooDeep { actual: 3, limit: 2 })
        ));
    }

    #[test]
    fn lookup_pointer_found() {
        let out = lookup_pointer(r#"{"a":[10,{"b":"x"}]}"#, "/a/1/b", OutputFormat::Compact).unwrap();
        assert_eq!(out, r#""x""#);
        let root = lookup_pointer("[1]", "", OutputFormat::Compact).unwrap();
        assert_eq!(root, "[1]");
    }

    #[test]
    fn lookup_pointer_errors() {
        let err = lookup_pointer(r#"{"a":[1]}"#, "/a/5", OutputFormat::Compact).unwrap_err();
        assert_eq!(err.to_string(), "\"/a/5\": NOT_FOUND");
        let err = lookup_pointer(r#"{"a":[1]}"#, "/a/x", OutputFormat::Compact).unwrap_err();
        assert_eq!(err.to_string(), "\"/a/x\": INVALID_INDEX");
    }
}
