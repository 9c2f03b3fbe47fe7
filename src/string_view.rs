//! Character types and the non-owning string view used everywhere else.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for char {}
}

/// Code unit of a format string and of the output it is rendered into.
///
/// Implemented for `u8` (narrow, UTF-8 output) and `char` (wide output).
/// The set is closed: every context, named argument and string view in this
/// crate is specialized for exactly one of these two.
pub trait Char:
    Copy + Eq + Ord + Hash + Default + fmt::Debug + Send + Sync + 'static + sealed::Sealed
{
    const OPEN_BRACE: Self;
    const CLOSE_BRACE: Self;
    const COLON: Self;

    /// Appends `s` to `out`, converting to this code unit.
    fn push_str(out: &mut Vec<Self>, s: &str);

    /// Appends a single character to `out`.
    fn push_char(out: &mut Vec<Self>, c: char);

    /// Decodes `units` as text, for inspecting short pieces such as
    /// placeholder ids. Returns `None` when the units are not valid text.
    fn decode(units: &[Self]) -> Option<Cow<'_, str>>;

    /// Picks the spelling of a format string literal that matches this code
    /// unit. Used by `format_to!`, which emits both.
    #[doc(hidden)]
    fn select_literal(narrow: &'static [u8], wide: &'static [char]) -> &'static [Self];
}

impl Char for u8 {
    const OPEN_BRACE: Self = b'{';
    const CLOSE_BRACE: Self = b'}';
    const COLON: Self = b':';

    #[inline]
    fn push_str(out: &mut Vec<Self>, s: &str) {
        out.extend_from_slice(s.as_bytes());
    }

    #[inline]
    fn push_char(out: &mut Vec<Self>, c: char) {
        let mut buf = [0; 4];
        out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }

    fn decode(units: &[Self]) -> Option<Cow<'_, str>> {
        std::str::from_utf8(units).ok().map(Cow::Borrowed)
    }

    #[inline]
    fn select_literal(narrow: &'static [u8], _: &'static [char]) -> &'static [Self] {
        narrow
    }
}

impl Char for char {
    const OPEN_BRACE: Self = '{';
    const CLOSE_BRACE: Self = '}';
    const COLON: Self = ':';

    #[inline]
    fn push_str(out: &mut Vec<Self>, s: &str) {
        out.extend(s.chars());
    }

    #[inline]
    fn push_char(out: &mut Vec<Self>, c: char) {
        out.push(c);
    }

    fn decode(units: &[Self]) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(units.iter().collect()))
    }

    #[inline]
    fn select_literal(_: &'static [u8], wide: &'static [char]) -> &'static [Self] {
        wide
    }
}

/// A non-owning view over character data: a pointer and a length.
///
/// Unlike `&str`, the view is generic over the code unit so the same
/// argument machinery serves narrow and wide contexts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BasicStringView<'a, C: Char> {
    data: &'a [C],
}

/// Narrow string view.
pub type StringView<'a> = BasicStringView<'a, u8>;

/// Wide string view.
pub type WStringView<'a> = BasicStringView<'a, char>;

impl<'a, C: Char> BasicStringView<'a, C> {
    /// Constructs a view from a slice of code units.
    #[inline]
    pub const fn new(data: &'a [C]) -> Self {
        Self { data }
    }

    /// Returns the viewed code units.
    #[inline]
    pub const fn data(&self) -> &'a [C] {
        self.data
    }

    /// Returns the number of code units in the view.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the first code unit, if any.
    #[inline]
    pub fn first(&self) -> Option<C> {
        self.data.first().copied()
    }

    /// Drops the first `n` code units; dropping more than the length leaves
    /// an empty view.
    #[inline]
    pub fn remove_prefix(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = &self.data[n..];
    }

    /// Splits the view at `mid`, clamped to the length.
    #[inline]
    pub fn split_at(&self, mid: usize) -> (Self, Self) {
        let (head, tail) = self.data.split_at(mid.min(self.data.len()));
        (Self::new(head), Self::new(tail))
    }

    /// Position of the first code unit matching `pred`.
    #[inline]
    pub fn position(&self, pred: impl FnMut(&C) -> bool) -> Option<usize> {
        self.data.iter().position(pred)
    }
}

impl<'a> BasicStringView<'a, u8> {
    /// Returns the view as `&str` when it holds valid UTF-8.
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.data).ok()
    }
}

impl<C: Char> PartialOrd for BasicStringView<'_, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Lexicographic by code unit, shorter prefix first.
impl<C: Char> Ord for BasicStringView<'_, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.data.cmp(other.data)
    }
}

impl<C: Char> fmt::Debug for BasicStringView<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match C::decode(self.data) {
            Some(text) => write!(f, "{:?}", text),
            None => write!(f, "{:?}", self.data),
        }
    }
}

impl<'a> From<&'a str> for BasicStringView<'a, u8> {
    #[inline]
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a> From<&'a String> for BasicStringView<'a, u8> {
    #[inline]
    fn from(s: &'a String) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a, C: Char> From<&'a [C]> for BasicStringView<'a, C> {
    #[inline]
    fn from(data: &'a [C]) -> Self {
        Self::new(data)
    }
}

impl<'a, C: Char> From<&'a Vec<C>> for BasicStringView<'a, C> {
    #[inline]
    fn from(data: &'a Vec<C>) -> Self {
        Self::new(data)
    }
}

impl<'a, C: Char, const N: usize> From<&'a [C; N]> for BasicStringView<'a, C> {
    #[inline]
    fn from(data: &'a [C; N]) -> Self {
        Self::new(data)
    }
}
