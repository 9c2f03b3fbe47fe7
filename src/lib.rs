//! Type-safe `{}`-style formatting over packed, type-erased argument lists.
//!
//! Arguments are captured once into a compact store and handed to one
//! formatting engine that only sees type tags, so call sites stay small no
//! matter how many argument types they mix.
//!
//! # Architecture
//!
//! - **Classification**: every argument type implements [`Format`], which
//!   maps it to one [`Type`] tag and one value field of [`Arg`] at compile
//!   time.
//! - **Storage**: fewer than [`MAX_PACKED_ARGS`] arguments go into a
//!   [`PackedArgStore`] (all tags in one `u64`); longer lists use an
//!   [`UnpackedArgStore`]; [`DynamicArgStore`] is built at run time.
//! - **Lookup**: [`FormatArgs`] is a copyable view over any store. Named
//!   arguments are indexed lazily, on the first `{name}` field.
//! - **Rendering**: [`vformat`] and friends walk the format string with a
//!   [`Context`], which also hosts custom [`Format`] implementations.
//!
//! The `format!`, `format_to!`, `print!` and `println!` macros pick the store
//! and capture the arguments for you.
//!
//! # Safety
//!
//! Argument values live in an untagged union next to their tag. Unsafe code
//! is confined to the `value` module, and values are only read back through
//! [`Arg::value`], which returns the safe [`ArgValue`] enum.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`debug` for format errors raised by
//! [`DefaultErrorHandler`], `trace` when a named-argument index is built) and
//! never installs a subscriber.

#![deny(unsafe_code)]
#![allow(clippy::needless_return)]
#![doc = include_str!("../README.md")]

// ============================================================================
// Module Organization
// ============================================================================

mod args;
mod classify;
mod constants;
mod context;
mod error;
mod format;
mod named;
mod store;
mod string_view;
mod types;
mod value;

// ============================================================================
// Re-exports for Public API
// ============================================================================

pub use args::FormatArgs;
pub use classify::Format;
#[doc(hidden)]
pub use classify::CaptureArg;
pub use constants::{MAX_PACKED_ARGS, OUTPUT_CAPACITY_HINT, TYPE_BITS, TYPE_MASK};
pub use context::{Context, ParseContext};
pub use error::{DefaultErrorHandler, ErrorHandler, FormatError};
pub use format::{vformat, vformat_to, vprint};
pub use named::{NamedArg, arg};
pub use store::{DynamicArgStore, PackedArgStore, UnpackedArgStore};
pub use string_view::{BasicStringView, Char, StringView, WStringView};
pub use types::Type;
pub use value::{Arg, ArgValue, Handle};

pub use argfmt_proc_macro::{format, format_to, print, println};
