//! Argument storage for one formatting call.
//!
//! The formatting macros pick the store from the number of arguments at
//! expansion time: [`PackedArgStore`] below [`MAX_PACKED_ARGS`],
//! [`UnpackedArgStore`] from there on. [`DynamicArgStore`] covers argument
//! lists assembled at run time.

use crate::args::FormatArgs;
use crate::classify::Format;
use crate::constants::{MAX_PACKED_ARGS, TYPE_BITS};
use crate::named::NamedArg;
use crate::string_view::Char;
use crate::value::{Arg, Value};

/// Packed storage: argument types in one `u64`, values without tags.
///
/// Holds fewer than [`MAX_PACKED_ARGS`] arguments; larger counts are
/// rejected at compile time.
#[derive(Debug, Clone, Copy)]
pub struct PackedArgStore<'a, C: Char, const N: usize> {
    types: u64,
    values: [Value<'a, C>; N],
}

impl<'a, C: Char, const N: usize> PackedArgStore<'a, C, N> {
    /// Packs `args`: argument `i`'s tag goes to bits `4*i..4*i+4`, the
    /// remaining high bits stay zero and read as "no argument".
    #[inline]
    pub fn new(args: [Arg<'a, C>; N]) -> Self {
        const { assert!(N < MAX_PACKED_ARGS, "too many arguments for packed storage") };
        let types = args
            .iter()
            .enumerate()
            .fold(0u64, |types, (index, arg)| {
                types | arg.ty().bits() << (index as u32 * TYPE_BITS)
            });
        Self {
            types,
            values: args.map(|arg| arg.raw_value()),
        }
    }

    /// The packed type word.
    #[inline]
    pub fn types(&self) -> u64 {
        self.types
    }

    #[inline]
    pub fn as_args(&self) -> FormatArgs<'_, C> {
        FormatArgs::packed(self.types, &self.values)
    }
}

/// Unpacked storage: every argument keeps its own tag.
#[derive(Debug, Clone, Copy)]
pub struct UnpackedArgStore<'a, C: Char, const N: usize> {
    args: [Arg<'a, C>; N],
}

impl<'a, C: Char, const N: usize> UnpackedArgStore<'a, C, N> {
    #[inline]
    pub fn new(args: [Arg<'a, C>; N]) -> Self {
        Self { args }
    }

    #[inline]
    pub fn as_args(&self) -> FormatArgs<'_, C> {
        FormatArgs::unpacked(&self.args)
    }
}

/// Argument list built at run time.
///
/// Values are borrowed, so they must outlive the store. Always uses the
/// unpacked encoding.
///
/// ```
/// use argfmt::{DynamicArgStore, arg};
///
/// let answer = 42;
/// let named = arg("unit", &"km");
///
/// let mut store = DynamicArgStore::new();
/// store.push(&answer);
/// store.push_named(&named);
///
/// assert_eq!(argfmt::vformat("{} {unit}", store.as_args()).unwrap(), "42 km");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DynamicArgStore<'a, C: Char = u8> {
    args: Vec<Arg<'a, C>>,
}

impl<'a, C: Char> DynamicArgStore<'a, C> {
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Adds a positional argument.
    pub fn push<T: Format<C>>(&mut self, value: &'a T) {
        self.args.push(value.make_arg());
    }

    /// Adds a named argument. It is also reachable by position.
    pub fn push_named(&mut self, named: &'a NamedArg<'a, C>) {
        self.args.push(named.make_arg());
    }

    /// Reserves space for `additional` more arguments.
    pub fn reserve(&mut self, additional: usize) {
        self.args.reserve(additional);
    }

    pub fn clear(&mut self) {
        self.args.clear();
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn as_args(&self) -> FormatArgs<'_, C> {
        FormatArgs::unpacked(&self.args)
    }
}
