//! Limits and layout constants for the formatting macros.

// ============================================================================
// Argument Store Layout
// ============================================================================

/// Argument count from which the generated code switches from
/// `PackedArgStore` to `UnpackedArgStore`.
///
/// Must equal `argfmt::MAX_PACKED_ARGS`. This crate cannot depend on the
/// runtime crate, so the integration tests pin the two together.
pub const MAX_PACKED_ARGS: usize = 15;

// ============================================================================
// Security Limits (Compile-Time DoS Protection)
// ============================================================================

/// Maximum length of a format string literal in bytes.
pub const MAX_FORMAT_STRING_LEN: usize = 10_000;

/// Maximum number of arguments to one macro invocation.
pub const MAX_ARGS: usize = 256;
