//! jsonpatch: apply RFC 6902 JSON Patches to `serde_json` documents.
//!
//! Provides the patch engine, its JSON wire codec, and the logic behind the
//! `json-patch` and `json-pointer` command-line tools.

pub mod json_cli;
pub mod json_patch;

pub use json_patch::{apply_patch, ErrorKind, Op, PatchFailure};
