//! The argument list view handed to the formatting engine.

use crate::constants::{MAX_PACKED_ARGS, TYPE_BITS};
use crate::named::ArgSource;
use crate::string_view::Char;
use crate::types::Type;
use crate::value::{Arg, Value};

#[derive(Debug, Clone, Copy)]
enum Repr<'a, C: Char> {
    /// Tags of up to [`MAX_PACKED_ARGS`] - 1 arguments, four bits each,
    /// with tagless values alongside.
    Packed {
        types: u64,
        values: &'a [Value<'a, C>],
    },
    /// Full arguments; the slice length is the argument count.
    Unpacked(&'a [Arg<'a, C>]),
}

/// A copyable view over the arguments of one formatting call.
///
/// Built from a [`PackedArgStore`](crate::PackedArgStore),
/// an [`UnpackedArgStore`](crate::UnpackedArgStore) or a
/// [`DynamicArgStore`](crate::DynamicArgStore); it borrows the store and
/// never owns argument data.
#[derive(Debug, Clone, Copy)]
pub struct FormatArgs<'a, C: Char = u8> {
    repr: Repr<'a, C>,
}

impl<C: Char> Default for FormatArgs<'_, C> {
    /// An empty argument list.
    fn default() -> Self {
        Self::packed(0, &[])
    }
}

impl<'a, C: Char> FormatArgs<'a, C> {
    #[inline]
    pub(crate) fn packed(types: u64, values: &'a [Value<'a, C>]) -> Self {
        Self {
            repr: Repr::Packed { types, values },
        }
    }

    #[inline]
    pub(crate) fn unpacked(args: &'a [Arg<'a, C>]) -> Self {
        Self {
            repr: Repr::Unpacked(args),
        }
    }

    /// `true` when argument types are packed into a single tag word.
    #[inline]
    pub fn is_packed(&self) -> bool {
        matches!(self.repr, Repr::Packed { .. })
    }

    /// Type of the argument at `index` in the packed tag word.
    #[inline]
    fn packed_type(types: u64, index: usize) -> Type {
        Type::from_bits(types >> (index as u32 * TYPE_BITS))
    }

    /// Argument at `index`, named-argument markers included.
    fn get_raw(&self, index: usize) -> Arg<'a, C> {
        match self.repr {
            Repr::Unpacked(args) => args.get(index).copied().unwrap_or_default(),
            Repr::Packed { types, values } => {
                if index >= MAX_PACKED_ARGS {
                    return Arg::none();
                }
                let ty = Self::packed_type(types, index);
                if ty == Type::None {
                    return Arg::none();
                }
                match values.get(index) {
                    Some(&value) => Arg::from_parts(value, ty),
                    None => Arg::none(),
                }
            }
        }
    }

    /// Returns the argument at `index`, or the `None` sentinel when there is
    /// no such argument.
    ///
    /// Named arguments are returned as the value they wrap.
    #[inline]
    pub fn get(&self, index: usize) -> Arg<'a, C> {
        self.get_raw(index).resolve_named()
    }

    /// Number of positions that may hold an argument: the argument count
    /// for unpacked lists, the packing capacity otherwise.
    #[inline]
    pub fn max_size(&self) -> usize {
        match self.repr {
            Repr::Unpacked(args) => args.len(),
            Repr::Packed { .. } => MAX_PACKED_ARGS,
        }
    }
}

impl<'a, C: Char> ArgSource<'a, C> for FormatArgs<'a, C> {
    #[inline]
    fn max_size(&self) -> usize {
        FormatArgs::max_size(self)
    }

    #[inline]
    fn raw_arg(&self, index: usize) -> Arg<'a, C> {
        self.get_raw(index)
    }
}
