//! JSON equality utilities.
//!
//! Provides deep equality comparison functions for JSON values.

mod deep_equal;

pub use deep_equal::{deep_equal, number_equal};
