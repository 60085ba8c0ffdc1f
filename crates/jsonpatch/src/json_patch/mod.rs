//! JSON Patch implementation (RFC 6902).
//!
//! # Operations
//!
//! All standard RFC 6902 operations are supported:
//! `add`, `remove`, `replace`, `copy`, `move`, `test`.
//!
//! A patch is applied as a single transaction: either every operation
//! succeeds and the new document is returned, or the first failure is
//! reported with its operation index and the input is left untouched.

pub mod types;
pub mod apply;
pub mod codec;

pub use types::{ErrorKind, Op, OpResult, PatchError, PatchFailure, PatchResult};
pub use apply::{apply_op, apply_patch, apply_patch_in_place, apply_patch_with_results};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch, CodecError};
