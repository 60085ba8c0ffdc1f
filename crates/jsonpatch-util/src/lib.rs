//! jsonpatch-util - Utility functions for jsonpatch
//!
//! Value-level helpers shared by the patch engine and its tooling.

pub mod json_depth;
pub mod json_equal;

// Re-exports for convenience
pub use json_depth::json_depth;
pub use json_equal::{deep_equal, number_equal};
