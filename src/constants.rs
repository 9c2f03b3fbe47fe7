//! Storage limits and capacity constants for argument lists.
//!
//! This module centralizes the numbers the packed argument encoding depends
//! on, so the store, the view and the tag decoder agree on one layout.

// ============================================================================
// Packed Encoding Layout
// ============================================================================

/// Maximum number of arguments whose types are packed into one tag word.
///
/// Argument lists shorter than this use the packed encoding; lists of this
/// length or longer fall back to an array of full argument handles.
///
/// `argfmt-proc-macro` keeps its own copy of this value because it cannot
/// depend on this crate. `tests/integration_tests.rs` pins the two together.
pub const MAX_PACKED_ARGS: usize = 15;

/// Number of bits used by one packed type tag.
pub const TYPE_BITS: u32 = 4;

/// Mask selecting one packed type tag.
pub const TYPE_MASK: u64 = (1 << TYPE_BITS) - 1;

// ============================================================================
// Memory Pre-Allocation Hints
// ============================================================================

/// Extra capacity reserved on top of the format string length when
/// formatting into a fresh buffer.
///
/// Substituted values are usually short numbers or words.
pub const OUTPUT_CAPACITY_HINT: usize = 32;

const _: () = assert!(MAX_PACKED_ARGS as u32 * TYPE_BITS <= u64::BITS);
