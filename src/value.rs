//! Tagged argument values.
//!
//! [`Value`] is an untagged union so that packed argument lists can store
//! values without a per-element tag. The tag lives next to it in [`Arg`], or
//! in the packed tag word of a `PackedArgStore`.

#![allow(unsafe_code)] // Union field access requires unsafe

use std::ffi::CStr;
use std::fmt;

use crate::classify::Format;
use crate::context::Context;
use crate::error::FormatError;
use crate::named::NamedArg;
use crate::string_view::{BasicStringView, Char};
use crate::types::Type;

// =============================================================================
// Value - untagged storage
// =============================================================================

/// Raw value storage for one argument.
///
/// # Safety invariant
///
/// Only the field matching the argument's [`Type`] (tracked externally) may
/// be read. Values are only built through the [`Arg`] constructors, which set
/// tag and field in one step, and only read back through [`Arg::value`].
#[repr(C)]
#[derive(Clone, Copy)]
pub(crate) union Value<'a, C: Char> {
    int: i32,
    uint: u32,
    long_long: i64,
    ulong_long: u64,
    boolean: bool,
    character: char,
    double: f64,
    pointer: *const (),
    cstring: &'a CStr,
    string: &'a [C],
    custom: &'a dyn Format<C>,
    named: &'a NamedArg<'a, C>,
}

// Two words on 64-bit: fat references are the widest fields.
#[cfg(target_pointer_width = "64")]
static_assertions::assert_eq_size!(Value<'static, u8>, [usize; 2]);

// Narrow and wide arguments share one layout.
static_assertions::assert_eq_size!(Arg<'static, u8>, Arg<'static, char>);

impl<C: Char> Default for Value<'_, C> {
    #[inline]
    fn default() -> Self {
        Value { int: 0 }
    }
}

impl<C: Char> fmt::Debug for Value<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Value(..)")
    }
}

// =============================================================================
// Arg - value plus tag
// =============================================================================

/// A formatting argument: a value and its type tag.
///
/// `Arg` is `Copy` and fixed-size so argument lists can live in plain arrays
/// on the stack. It never owns what it refers to; strings and custom values
/// are borrowed for `'a`.
///
/// The default argument has type [`Type::None`] and stands for "no such
/// argument".
#[derive(Clone, Copy, Default)]
pub struct Arg<'a, C: Char = u8> {
    value: Value<'a, C>,
    ty: Type,
}

impl<'a, C: Char> Arg<'a, C> {
    #[inline]
    pub(crate) fn from_parts(value: Value<'a, C>, ty: Type) -> Self {
        Self { value, ty }
    }

    #[inline]
    pub(crate) fn raw_value(&self) -> Value<'a, C> {
        self.value
    }

    /// The "no such argument" sentinel.
    #[inline]
    pub fn none() -> Self {
        Self::default()
    }

    #[inline]
    pub fn int(value: i32) -> Self {
        Self::from_parts(Value { int: value }, Type::Int)
    }

    #[inline]
    pub fn uint(value: u32) -> Self {
        Self::from_parts(Value { uint: value }, Type::UInt)
    }

    #[inline]
    pub fn long_long(value: i64) -> Self {
        Self::from_parts(Value { long_long: value }, Type::LongLong)
    }

    #[inline]
    pub fn ulong_long(value: u64) -> Self {
        Self::from_parts(Value { ulong_long: value }, Type::ULongLong)
    }

    #[inline]
    pub fn bool(value: bool) -> Self {
        Self::from_parts(Value { boolean: value }, Type::Bool)
    }

    #[inline]
    pub fn char(value: char) -> Self {
        Self::from_parts(Value { character: value }, Type::Char)
    }

    #[inline]
    pub fn double(value: f64) -> Self {
        Self::from_parts(Value { double: value }, Type::Double)
    }

    #[inline]
    pub fn pointer(value: *const ()) -> Self {
        Self::from_parts(Value { pointer: value }, Type::Pointer)
    }

    #[inline]
    pub fn cstring(value: &'a CStr) -> Self {
        Self::from_parts(Value { cstring: value }, Type::CString)
    }

    #[inline]
    pub fn string(value: BasicStringView<'a, C>) -> Self {
        Self::from_parts(
            Value {
                string: value.data(),
            },
            Type::String,
        )
    }

    /// Captures a value rendered by its own [`Format`] implementation.
    #[inline]
    pub fn custom<T: Format<C>>(value: &'a T) -> Self {
        Self::from_parts(Value { custom: value }, Type::Custom)
    }

    #[inline]
    pub(crate) fn named(value: &'a NamedArg<'a, C>) -> Self {
        Self::from_parts(Value { named: value }, Type::NamedArg)
    }

    #[inline]
    pub fn ty(&self) -> Type {
        self.ty
    }

    /// `true` unless this is the "no such argument" sentinel.
    #[inline]
    pub fn is_some(&self) -> bool {
        self.ty != Type::None
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.ty == Type::None
    }

    #[inline]
    pub fn is_integral(&self) -> bool {
        self.ty.is_integral()
    }

    #[inline]
    pub fn is_arithmetic(&self) -> bool {
        self.ty.is_arithmetic()
    }

    #[inline]
    pub fn is_pointer(&self) -> bool {
        self.ty == Type::Pointer
    }

    /// Returns the named argument behind a [`Type::NamedArg`] marker.
    #[inline]
    pub(crate) fn named_arg(&self) -> Option<&'a NamedArg<'a, C>> {
        match self.ty {
            // SAFETY: the tag says `named` is the initialized field.
            Type::NamedArg => Some(unsafe { self.value.named }),
            _ => None,
        }
    }

    /// Replaces a named-argument marker by the argument it wraps.
    #[inline]
    pub(crate) fn resolve_named(self) -> Self {
        match self.named_arg() {
            Some(named) => named.arg(),
            None => self,
        }
    }

    /// Decodes the argument into a safe, tagged view of its value.
    ///
    /// Named arguments are resolved to the value they wrap.
    pub fn value(&self) -> ArgValue<'a, C> {
        // SAFETY: each arm reads the field that the constructor for that tag
        // initialized; `ty` and `value` are never set independently.
        unsafe {
            match self.ty {
                Type::None | Type::LongDouble => ArgValue::None,
                Type::NamedArg => self.value.named.arg().value(),
                Type::Int => ArgValue::Int(self.value.int),
                Type::UInt => ArgValue::UInt(self.value.uint),
                Type::LongLong => ArgValue::LongLong(self.value.long_long),
                Type::ULongLong => ArgValue::ULongLong(self.value.ulong_long),
                Type::Bool => ArgValue::Bool(self.value.boolean),
                Type::Char => ArgValue::Char(self.value.character),
                Type::Double => ArgValue::Double(self.value.double),
                Type::CString => ArgValue::CString(self.value.cstring),
                Type::String => ArgValue::String(BasicStringView::new(self.value.string)),
                Type::Pointer => ArgValue::Pointer(self.value.pointer),
                Type::Custom => ArgValue::Custom(Handle {
                    custom: self.value.custom,
                }),
            }
        }
    }
}

impl<C: Char> fmt::Debug for Arg<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arg")
            .field("ty", &self.ty)
            .field("value", &self.value())
            .finish()
    }
}

// =============================================================================
// ArgValue - decoded view
// =============================================================================

/// The value of an [`Arg`], decoded according to its tag.
#[derive(Debug, Clone, Copy)]
pub enum ArgValue<'a, C: Char = u8> {
    None,
    Int(i32),
    UInt(u32),
    LongLong(i64),
    ULongLong(u64),
    Bool(bool),
    Char(char),
    Double(f64),
    CString(&'a CStr),
    String(BasicStringView<'a, C>),
    Pointer(*const ()),
    Custom(Handle<'a, C>),
}

/// Type-erased custom value; formats itself through its [`Format`] impl.
#[derive(Clone, Copy)]
pub struct Handle<'a, C: Char> {
    custom: &'a dyn Format<C>,
}

impl<C: Char> Handle<'_, C> {
    /// Renders the value into `ctx`.
    ///
    /// The formatter may consume its format spec from `ctx`'s parse context;
    /// it must leave the closing `}` in place.
    #[inline]
    pub fn format(&self, ctx: &mut Context<'_, '_, C>) -> Result<(), FormatError> {
        self.custom.format(ctx)
    }

    /// Address of the captured value.
    #[inline]
    pub fn as_ptr(&self) -> *const () {
        self.custom as *const dyn Format<C> as *const ()
    }
}

impl<C: Char> fmt::Debug for Handle<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handle(..)")
    }
}
