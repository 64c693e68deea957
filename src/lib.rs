//! dotjson - a self-contained JSON tree library.
//!
//! Parses JSON text into an owned value tree, exposes a document
//! manipulation API (typed access, dotted paths, deep copy, structural
//! equality, schema validation), and serializes trees back to compact JSON
//! with an exact-size two-pass serializer.
//!
//! # Architecture
//!
//! The implementation is organized into focused modules:
//!
//! - [`value`] - the tagged value model
//! - [`object`] / [`array`] - the two container types and their APIs
//! - [`parser`] - recursive descent over a byte cursor
//! - [`ser`] - two-pass serializer (exact size, then emit)
//! - [`validate`] - structural schema subset
//! - [`limits`] - hard caps on nesting and container sizes
//! - [`io`] - whole-file adapters
//!
//! # Example
//!
//! ```
//! use dotjson::{parse, serialize_to_string};
//!
//! # fn main() -> dotjson::JsonResult<()> {
//! let mut doc = parse(r#"{"config":{"port":8080}}"#)?;
//! if let Some(root) = doc.as_object_mut() {
//!     root.dotset_string("config.host", "localhost")?;
//! }
//! assert_eq!(
//!     serialize_to_string(&doc)?,
//!     r#"{"config":{"port":8080,"host":"localhost"}}"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Dropping a value frees its whole subtree; cloning deep-copies it. The
//! tree is not internally synchronized: share immutable trees freely across
//! threads, guard mutation externally.

// Library code must avoid unwrap/expect/panic; failures surface as
// JsonError. Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod array;
mod comments;
pub mod error;
mod escape;
pub mod io;
pub mod limits;
pub mod object;
pub mod parser;
pub mod ser;
pub mod validate;
pub mod value;

// Re-export the everyday surface
pub use array::Array;
pub use error::{JsonError, JsonResult};
pub use object::Object;
pub use parser::{parse, parse_with_comments};
pub use ser::{serialization_size, serialize_into, serialize_to_string};
pub use validate::validate;
pub use value::Value;
