//! Static classification of argument types.
//!
//! Every type that can be formatted implements [`Format`]. Built-in types
//! override [`Format::make_arg`] to pick their tag and value field; every
//! other implementor is captured as a custom argument and rendered through
//! [`Format::format`].
//!
//! Classification is resolved at compile time by trait selection. Types
//! without an implementation are rejected with a diagnostic, which covers
//! non-void raw pointers, function pointers, and strings of the wrong
//! character width:
//!
//! ```compile_fail
//! let wide = ['a', 'b'];
//! argfmt::format!("{}", &wide[..]).unwrap();
//! ```

use std::ffi::{CStr, CString, c_void};

use crate::context::Context;
use crate::error::FormatError;
use crate::string_view::{BasicStringView, Char};
use crate::value::Arg;

/// A value that can be captured as a formatting argument for output of
/// code unit `C`.
///
/// Implement [`Format::format`] for your own types; the default
/// [`Format::make_arg`] captures them by reference as custom arguments.
///
/// ```
/// use argfmt::{Context, Format, FormatError};
/// use std::fmt::Write;
///
/// struct Point(i32, i32);
///
/// impl Format for Point {
///     fn format(&self, ctx: &mut Context<'_, '_>) -> Result<(), FormatError> {
///         write!(ctx, "({}, {})", self.0, self.1)?;
///         Ok(())
///     }
/// }
///
/// assert_eq!(argfmt::format!("at {}", Point(1, 2)).unwrap(), "at (1, 2)");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a formatting argument for `{C}` output",
    label = "no `Format<{C}>` implementation",
    note = "implement `argfmt::Format` for custom types; cast raw pointers to `*const ()`"
)]
pub trait Format<C: Char = u8> {
    /// Renders `self` into `ctx`.
    ///
    /// Text following the `:` of the placeholder is available through
    /// [`Context::parse_spec`]; leave the closing `}` unconsumed.
    fn format(&self, ctx: &mut Context<'_, '_, C>) -> Result<(), FormatError>;

    /// Captures `self` as an argument.
    fn make_arg(&self) -> Arg<'_, C>
    where
        Self: Sized,
    {
        Arg::custom(self)
    }
}

// ============================================================================
// Built-in Types
// ============================================================================

macro_rules! impl_builtin {
    ($($ty:ty => |$value:ident| $make:expr;)*) => {
        $(
            impl<C: Char> Format<C> for $ty {
                #[inline]
                fn format(&self, ctx: &mut Context<'_, '_, C>) -> Result<(), FormatError> {
                    ctx.write_arg(self.make_arg())
                }

                #[inline]
                fn make_arg(&self) -> Arg<'_, C> {
                    let $value = *self;
                    $make
                }
            }
        )*
    };
}

impl_builtin! {
    bool => |v| Arg::bool(v);
    char => |v| Arg::char(v);
    i8 => |v| Arg::int(v.into());
    i16 => |v| Arg::int(v.into());
    i32 => |v| Arg::int(v);
    i64 => |v| Arg::long_long(v);
    u8 => |v| Arg::uint(v.into());
    u16 => |v| Arg::uint(v.into());
    u32 => |v| Arg::uint(v);
    u64 => |v| Arg::ulong_long(v);
    f32 => |v| Arg::double(v.into());
    f64 => |v| Arg::double(v);
    *const () => |v| Arg::pointer(v);
    *mut () => |v| Arg::pointer(v.cast_const());
    *const c_void => |v| Arg::pointer(v.cast());
    *mut c_void => |v| Arg::pointer(v.cast_const().cast());
}

// Pointer-sized integers take the tag of the fixed-width type they match.
#[cfg(target_pointer_width = "32")]
impl_builtin! {
    isize => |v| Arg::int(v as i32);
    usize => |v| Arg::uint(v as u32);
}

#[cfg(target_pointer_width = "64")]
impl_builtin! {
    isize => |v| Arg::long_long(v as i64);
    usize => |v| Arg::ulong_long(v as u64);
}

// ============================================================================
// Strings
// ============================================================================

macro_rules! impl_string {
    ($(impl<$($lt:lifetime),*> $ch:ty, $ty:ty => |$value:ident| $view:expr;)*) => {
        $(
            impl<$($lt),*> Format<$ch> for $ty {
                #[inline]
                fn format(&self, ctx: &mut Context<'_, '_, $ch>) -> Result<(), FormatError> {
                    ctx.write_arg(self.make_arg())
                }

                #[inline]
                fn make_arg(&self) -> Arg<'_, $ch> {
                    let $value = self;
                    $view
                }
            }
        )*
    };
}

impl_string! {
    impl<'s> u8, &'s str => |s| Arg::string(BasicStringView::from(*s));
    impl<> u8, String => |s| Arg::string(BasicStringView::from(s));
    impl<'s> u8, &'s CStr => |s| Arg::cstring(*s);
    impl<> u8, CString => |s| Arg::cstring(s.as_c_str());
    impl<'s> char, &'s [char] => |s| Arg::string(BasicStringView::new(*s));
    impl<> char, Vec<char> => |s| Arg::string(BasicStringView::new(s));
}

impl<C: Char> Format<C> for BasicStringView<'_, C> {
    #[inline]
    fn format(&self, ctx: &mut Context<'_, '_, C>) -> Result<(), FormatError> {
        ctx.write_arg(self.make_arg())
    }

    #[inline]
    fn make_arg(&self) -> Arg<'_, C> {
        Arg::string(*self)
    }
}

// ============================================================================
// Macro Support
// ============================================================================

/// Captures one macro argument, positional or named.
///
/// The formatting macros bind every argument expression by reference and
/// call [`CaptureArg::capture`] on it. A path call avoids method autoref,
/// which cannot pick a type for unsuffixed numeric literals.
#[doc(hidden)]
pub trait CaptureArg<'a, C: Char> {
    fn capture(self) -> Arg<'a, C>;
}

impl<'a, C: Char, T: Format<C>> CaptureArg<'a, C> for &'a T {
    #[inline]
    fn capture(self) -> Arg<'a, C> {
        self.make_arg()
    }
}
