//! Recursive-descent JSON parser.
//!
//! The parser walks raw bytes through a small cursor and builds the value
//! tree directly; there is no token stream. Dispatch is on the first
//! non-whitespace byte of each value. Containers check the nesting depth on
//! entry, which bounds recursion at [`MAX_NESTING`] levels.
//!
//! Any failure at any depth unwinds the whole parse; partially built
//! containers are dropped on the way out.

use crate::array::Array;
use crate::comments;
use crate::error::{JsonError, JsonResult};
use crate::escape;
use crate::limits::MAX_NESTING;
use crate::object::Object;
use crate::value::Value;

/// Parses JSON text into a value tree.
///
/// The first non-whitespace byte must open an object or array; bare scalars
/// are not accepted at the top level. Bytes after the root value are not
/// inspected.
pub fn parse(text: &str) -> JsonResult<Value> {
    parse_bytes(text.as_bytes())
}

/// Parses JSON text that may contain `/* */` and `//` comments.
///
/// Comments are blanked out of a scratch copy of the input before parsing;
/// the strict [`parse`] entry point never accepts them.
pub fn parse_with_comments(text: &str) -> JsonResult<Value> {
    let mut scratch = text.as_bytes().to_vec();
    comments::strip(&mut scratch, b"/*", b"*/");
    comments::strip(&mut scratch, b"//", b"\n");
    parse_bytes(&scratch)
}

fn parse_bytes(input: &[u8]) -> JsonResult<Value> {
    let mut cursor = Cursor::new(input);
    cursor.skip_whitespace();
    match cursor.peek() {
        Some(b'{') | Some(b'[') => parse_value(&mut cursor, 0),
        _ => Err(JsonError::UnexpectedCharacter),
    }
}

/// Byte cursor over the input buffer.
struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C) = self.peek() {
            self.bump();
        }
    }

    /// Consumes `token` if the input continues with it.
    fn eat(&mut self, token: &[u8]) -> bool {
        if self.input[self.pos..].starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }
}

fn parse_value(cur: &mut Cursor, nesting: usize) -> JsonResult<Value> {
    cur.skip_whitespace();
    match cur.peek() {
        Some(b'{') => parse_object(cur, nesting + 1),
        Some(b'[') => parse_array(cur, nesting + 1),
        Some(b'"') => Ok(Value::String(parse_quoted(cur)?)),
        Some(b't') | Some(b'f') => parse_boolean(cur),
        Some(b'n') => parse_null(cur),
        Some(b'-') | Some(b'0'..=b'9') => parse_number(cur),
        _ => Err(JsonError::UnexpectedCharacter),
    }
}

fn parse_object(cur: &mut Cursor, nesting: usize) -> JsonResult<Value> {
    if nesting > MAX_NESTING {
        return Err(JsonError::NestingTooDeep);
    }
    cur.bump();
    cur.skip_whitespace();
    let mut object = Object::new();
    if cur.peek() == Some(b'}') {
        cur.bump();
        return Ok(Value::Object(object));
    }
    loop {
        let key = parse_quoted(cur)?;
        cur.skip_whitespace();
        if cur.peek() != Some(b':') {
            return Err(JsonError::UnexpectedCharacter);
        }
        cur.bump();
        let value = parse_value(cur, nesting)?;
        object.add(key, value)?;
        cur.skip_whitespace();
        if cur.peek() != Some(b',') {
            break;
        }
        cur.bump();
        cur.skip_whitespace();
    }
    if cur.peek() != Some(b'}') {
        return Err(JsonError::UnexpectedCharacter);
    }
    cur.bump();
    object.shrink_to_fit();
    Ok(Value::Object(object))
}

fn parse_array(cur: &mut Cursor, nesting: usize) -> JsonResult<Value> {
    if nesting > MAX_NESTING {
        return Err(JsonError::NestingTooDeep);
    }
    cur.bump();
    cur.skip_whitespace();
    let mut array = Array::new();
    if cur.peek() == Some(b']') {
        cur.bump();
        return Ok(Value::Array(array));
    }
    loop {
        let value = parse_value(cur, nesting)?;
        array.append(value)?;
        cur.skip_whitespace();
        if cur.peek() != Some(b',') {
            break;
        }
        cur.bump();
        cur.skip_whitespace();
    }
    if cur.peek() != Some(b']') {
        return Err(JsonError::UnexpectedCharacter);
    }
    cur.bump();
    array.shrink_to_fit();
    Ok(Value::Array(array))
}

/// Parses a quoted string and decodes its escapes.
fn parse_quoted(cur: &mut Cursor) -> JsonResult<String> {
    if cur.peek() != Some(b'"') {
        return Err(JsonError::UnexpectedCharacter);
    }
    cur.bump();
    let start = cur.pos;
    loop {
        match cur.peek() {
            None => return Err(JsonError::UnterminatedString),
            Some(b'"') => break,
            Some(b'\\') => {
                cur.bump();
                if cur.peek().is_none() {
                    return Err(JsonError::UnterminatedString);
                }
                cur.bump();
            }
            Some(_) => cur.bump(),
        }
    }
    let raw = &cur.input[start..cur.pos];
    cur.bump();
    escape::decode(raw)
}

fn parse_boolean(cur: &mut Cursor) -> JsonResult<Value> {
    if cur.eat(b"true") {
        Ok(Value::Bool(true))
    } else if cur.eat(b"false") {
        Ok(Value::Bool(false))
    } else {
        Err(JsonError::UnexpectedCharacter)
    }
}

fn parse_null(cur: &mut Cursor) -> JsonResult<Value> {
    if cur.eat(b"null") {
        Ok(Value::Null)
    } else {
        Err(JsonError::UnexpectedCharacter)
    }
}

fn parse_number(cur: &mut Cursor) -> JsonResult<Value> {
    let start = cur.pos;
    while let Some(b) = cur.peek() {
        if is_number_byte(b) {
            cur.bump();
        } else {
            break;
        }
    }
    let span = &cur.input[start..cur.pos];
    if !is_decimal(span) {
        return Err(JsonError::InvalidNumber);
    }
    let text = std::str::from_utf8(span).map_err(|_| JsonError::InvalidNumber)?;
    let number: f64 = text.parse().map_err(|_| JsonError::InvalidNumber)?;
    // Overflowed spans parse to infinity; only finite numbers round-trip.
    if !number.is_finite() {
        return Err(JsonError::InvalidNumber);
    }
    Ok(Value::Number(number))
}

/// Superset of the bytes a float reader could consume, hex forms included;
/// the decimal guard rejects the hex ones afterwards.
fn is_number_byte(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F' | b'x' | b'X' | b'+' | b'-' | b'.')
}

/// Decimal-only guard: no leading zeros except `0` / `0.`, no hex markers.
fn is_decimal(span: &[u8]) -> bool {
    if span.len() > 1 && span[0] == b'0' && span[1] != b'.' {
        return false;
    }
    if span.len() > 2 && span.starts_with(b"-0") && span[2] != b'.' {
        return false;
    }
    !span.iter().any(|&b| b == b'x' || b == b'X')
}
