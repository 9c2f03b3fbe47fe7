//! Argument type tags.
//!
//! Every formatting argument is classified into one [`Type`] when it is
//! captured. The tag decides which field of the value union is valid and how
//! the argument is rendered.

use crate::constants::TYPE_MASK;

/// Semantic type of a formatting argument.
///
/// # Layout
///
/// The order of the variants is part of the contract:
///
/// - `None` is `0`, so an all-zero packed tag word reads as "no arguments"
///   and unused slots double as an end marker.
/// - Integral tags (`Int` ..= `Char`) form one contiguous range right after
///   `NamedArg`, and the numeric tags (`Double`, `LongDouble`) extend it.
///   [`Type::is_integral`] and [`Type::is_arithmetic`] are single bound
///   comparisons because of this.
/// - Every tag fits in four bits so fourteen of them pack into a `u64`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Type {
    /// No argument. Used as the out-of-range sentinel.
    #[default]
    None = 0,
    /// Marker for a named argument; resolved before callers see it.
    NamedArg = 1,

    // Integer types go first,
    Int = 2,
    UInt = 3,
    LongLong = 4,
    ULongLong = 5,
    Bool = 6,
    Char = 7,

    // followed by floating-point types.
    Double = 8,
    /// Extended precision float. Rust has no such primitive; the tag keeps
    /// its slot so the numeric range and the packed numbering stay stable.
    LongDouble = 9,

    CString = 10,
    String = 11,
    Pointer = 12,
    Custom = 13,
}

const _: () = assert!((Type::Custom as u64) <= TYPE_MASK);

impl Type {
    /// Last tag of the integral range.
    pub const LAST_INTEGER: Type = Type::Char;

    /// Last tag of the numeric range.
    pub const LAST_NUMERIC: Type = Type::LongDouble;

    /// Decodes a packed four-bit tag. Unknown values decode as `None`.
    #[inline]
    pub const fn from_bits(bits: u64) -> Type {
        match bits & TYPE_MASK {
            1 => Type::NamedArg,
            2 => Type::Int,
            3 => Type::UInt,
            4 => Type::LongLong,
            5 => Type::ULongLong,
            6 => Type::Bool,
            7 => Type::Char,
            8 => Type::Double,
            9 => Type::LongDouble,
            10 => Type::CString,
            11 => Type::String,
            12 => Type::Pointer,
            13 => Type::Custom,
            _ => Type::None,
        }
    }

    /// Returns the tag as its packed four-bit value.
    #[inline]
    pub const fn bits(self) -> u64 {
        self as u64
    }

    #[inline]
    pub fn is_integral(self) -> bool {
        debug_assert!(self != Type::NamedArg, "invalid argument type");
        self > Type::None && self <= Self::LAST_INTEGER
    }

    #[inline]
    pub fn is_arithmetic(self) -> bool {
        debug_assert!(self != Type::NamedArg, "invalid argument type");
        self > Type::None && self <= Self::LAST_NUMERIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Type; 14] = [
        Type::None,
        Type::NamedArg,
        Type::Int,
        Type::UInt,
        Type::LongLong,
        Type::ULongLong,
        Type::Bool,
        Type::Char,
        Type::Double,
        Type::LongDouble,
        Type::CString,
        Type::String,
        Type::Pointer,
        Type::Custom,
    ];

    #[test]
    fn test_bits_decode_back() {
        for ty in ALL {
            assert_eq!(Type::from_bits(ty.bits()), ty);
        }
        assert_eq!(Type::from_bits(14), Type::None);
        assert_eq!(Type::from_bits(15), Type::None);
    }

    #[test]
    fn test_integral_range() {
        let integral: Vec<_> = ALL
            .into_iter()
            .filter(|&t| t != Type::NamedArg && t.is_integral())
            .collect();
        assert_eq!(
            integral,
            [
                Type::Int,
                Type::UInt,
                Type::LongLong,
                Type::ULongLong,
                Type::Bool,
                Type::Char
            ]
        );
    }

    #[test]
    fn test_arithmetic_extends_integral() {
        for ty in ALL.into_iter().filter(|&t| t != Type::NamedArg) {
            if ty.is_integral() {
                assert!(ty.is_arithmetic());
            }
        }
        assert!(Type::Double.is_arithmetic());
        assert!(Type::LongDouble.is_arithmetic());
        assert!(!Type::Double.is_integral());
        assert!(!Type::String.is_arithmetic());
        assert!(!Type::None.is_arithmetic());
        assert!(!Type::Custom.is_arithmetic());
    }
}
