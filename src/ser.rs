//! Two-pass serializer.
//!
//! The size pass walks the tree and computes the exact byte length of the
//! compact output; the emit pass writes it using the same decision rules.
//! Output carries no whitespace between tokens.
//!
//! Numbers whose value equals their truncation and fits the safe-integer
//! range serialize in integer form; every other finite number uses the
//! fixed six-decimal format. Both passes fail on NaN or infinity, which
//! have no JSON spelling. Callers depend on this exact format.

use crate::error::{JsonError, JsonResult};
use crate::escape;
use crate::limits::{MAX_SAFE_INT, MIN_SAFE_INT};
use crate::value::Value;

/// Exact serialized size of `value` in bytes, including one terminator byte.
pub fn serialization_size(value: &Value) -> JsonResult<usize> {
    Ok(size_of_value(value)? + 1)
}

/// Serializes `value` to a newly allocated compact JSON string.
pub fn serialize_to_string(value: &Value) -> JsonResult<String> {
    let size = serialization_size(value)?;
    let mut out = String::with_capacity(size - 1);
    write_value(value, &mut out)?;
    debug_assert_eq!(out.len(), size - 1);
    Ok(out)
}

/// Serializes `value` into a caller-provided buffer.
///
/// The buffer must hold at least [`serialization_size`] bytes: the compact
/// text plus one NUL terminator. Returns the number of text bytes written,
/// terminator excluded. A too-small buffer fails before anything is
/// written.
pub fn serialize_into(value: &Value, buf: &mut [u8]) -> JsonResult<usize> {
    let size = serialization_size(value)?;
    if buf.len() < size {
        return Err(JsonError::BufferTooSmall);
    }
    let text = serialize_to_string(value)?;
    buf[..text.len()].copy_from_slice(text.as_bytes());
    buf[text.len()] = 0;
    Ok(text.len())
}

fn size_of_value(value: &Value) -> JsonResult<usize> {
    match value {
        Value::Null => Ok(4),
        Value::Bool(true) => Ok(4),
        Value::Bool(false) => Ok(5),
        Value::Number(n) => Ok(format_number(*n)?.len()),
        Value::String(s) => Ok(escape::encoded_len(s) + 2),
        Value::Array(array) => {
            let mut size = 2;
            if !array.is_empty() {
                size += array.len() - 1;
            }
            for item in array.iter() {
                size += size_of_value(item)?;
            }
            Ok(size)
        }
        Value::Object(object) => {
            let mut size = 2;
            if !object.is_empty() {
                size += object.len() * 2 - 1;
            }
            for (name, child) in object.iter() {
                size += escape::encoded_len(name) + 2;
                size += size_of_value(child)?;
            }
            Ok(size)
        }
    }
}

fn write_value(value: &Value, out: &mut String) -> JsonResult<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => out.push_str(&format_number(*n)?),
        Value::String(s) => escape::encode_into(s, out),
        Value::Array(array) => {
            out.push('[');
            for (i, item) in array.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out)?;
            }
            out.push(']');
        }
        Value::Object(object) => {
            out.push('{');
            for (i, (name, child)) in object.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                escape::encode_into(name, out);
                out.push(':');
                write_value(child, out)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

/// Formats one number under the fixed policy.
fn format_number(number: f64) -> JsonResult<String> {
    if !number.is_finite() {
        return Err(JsonError::NonFiniteNumber);
    }
    let truncated = number.trunc();
    if truncated == number
        && ((MIN_SAFE_INT as f64)..=(MAX_SAFE_INT as f64)).contains(&truncated)
    {
        return Ok(format!("{}", truncated as i64));
    }
    Ok(format!("{number:.6}"))
}
