//! Wire codecs for JSON Patch operations.

pub mod json;
