//! File adapters.
//!
//! Thin wrappers over `std::fs`: the whole file is read into memory and
//! handed to the in-memory entry points, or the serialized text is written
//! in one call. The core library itself never performs I/O.

use std::fs;
use std::path::Path;

use crate::error::JsonResult;
use crate::parser::{parse, parse_with_comments};
use crate::ser::serialize_to_string;
use crate::value::Value;

/// Reads `path` and parses its contents as strict JSON.
pub fn parse_file<P: AsRef<Path>>(path: P) -> JsonResult<Value> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Reads `path` and parses its contents, allowing comments.
pub fn parse_file_with_comments<P: AsRef<Path>>(path: P) -> JsonResult<Value> {
    let text = fs::read_to_string(path)?;
    parse_with_comments(&text)
}

/// Serializes `value` and writes the compact text to `path`.
pub fn serialize_to_file<P: AsRef<Path>>(value: &Value, path: P) -> JsonResult<()> {
    let text = serialize_to_string(value)?;
    fs::write(path, text)?;
    Ok(())
}
