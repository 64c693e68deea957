//! Error handling for the JSON library.
//!
//! Every fallible operation in the crate returns [`JsonResult`]. Read
//! accessors never fail: absence and type mismatches are reported through
//! `Option` or a neutral default instead, so lookup chains stay ergonomic.

use thiserror::Error;

/// All failure classes surfaced by the library.
///
/// Parse failures unwind the whole parse; no partially built tree is ever
/// returned. Mutation failures leave the tree untouched, except for the
/// documented reordering of swap-with-last removal.
#[derive(Debug, Error)]
pub enum JsonError {
    /// A byte that no JSON token can start with, or a malformed literal.
    #[error("unexpected character in input")]
    UnexpectedCharacter,

    /// A string literal reached end of input before its closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// An unescaped byte below 0x20 inside a string literal.
    #[error("unescaped control character in string")]
    ControlCharacter,

    /// A backslash followed by anything other than a recognized escape,
    /// malformed `\uXXXX` hex digits, or an escape producing a NUL.
    #[error("invalid escape sequence")]
    InvalidEscape,

    /// A lone surrogate, or a high surrogate not followed by a low one.
    #[error("unpaired UTF-16 surrogate in string escape")]
    UnpairedSurrogate,

    /// Decoded string bytes did not form valid UTF-8.
    #[error("string is not valid UTF-8")]
    InvalidUtf8,

    /// A number span with a disallowed leading zero, a hex marker, or a
    /// value that does not fit a finite binary64.
    #[error("malformed number")]
    InvalidNumber,

    /// An object already contains the name being added.
    #[error("duplicate object key: {0}")]
    DuplicateKey(String),

    /// Container nesting exceeded the hard depth cap.
    #[error("nesting depth limit exceeded")]
    NestingTooDeep,

    /// An object or array reached its hard element cap.
    #[error("container capacity limit exceeded")]
    CapacityExceeded,

    /// A removal or dotted-path operation named a key that is not present.
    #[error("key not found")]
    KeyNotFound,

    /// An array operation addressed an index past the end.
    #[error("index out of bounds")]
    IndexOutOfBounds,

    /// A dotted path descended into a value that is not an object.
    #[error("dotted path traverses a non-object value")]
    PathNotObject,

    /// Serialization of a NaN or infinite number was requested.
    #[error("number is not finite")]
    NonFiniteNumber,

    /// The caller buffer cannot hold the serialized output.
    #[error("output buffer too small")]
    BufferTooSmall,

    /// A file adapter failed to read or write.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for all fallible library operations.
pub type JsonResult<T> = Result<T, JsonError>;
