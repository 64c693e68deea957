//! Hard limits and numeric constants.
//!
//! The caps bound attacker-controlled input: recursion depth and container
//! sizes are rejected at parse and mutation time rather than exhausting the
//! stack or the allocator. The values are part of the library's contract and
//! are not configurable at runtime.

/// Maximum combined object/array nesting depth accepted by the parser.
pub const MAX_NESTING: usize = 19;

/// Capacity reserved for a container on its first insertion.
pub const STARTING_CAPACITY: usize = 15;

/// Maximum number of elements in a single array (15 * 2^13).
pub const ARRAY_MAX_CAPACITY: usize = 122_880;

/// Maximum number of name/value pairs in a single object (15 * 2^6).
pub const OBJECT_MAX_CAPACITY: usize = 960;

/// Largest integer exactly representable in a binary64 (2^53 - 1).
///
/// Numbers whose value equals their truncation and falls inside
/// [`MIN_SAFE_INT`], [`MAX_SAFE_INT`] serialize in integer form.
pub const MAX_SAFE_INT: i64 = (1i64 << 53) - 1;

/// Smallest safe integer (-(2^53 - 1)).
pub const MIN_SAFE_INT: i64 = -MAX_SAFE_INT;

/// Tolerance under which two numbers compare equal.
pub const NUMBER_EPSILON: f64 = 1e-6;
