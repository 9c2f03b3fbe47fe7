//! Procedural macros for the `argfmt` crate.
//!
//! This crate provides four macros, re-exported by `argfmt`:
//! - `format!`: formats into a new `String`
//! - `format_to!`: appends to a `Vec<u8>` or `Vec<char>`
//! - `print!` / `println!`: write to standard output
//!
//! # Architecture
//!
//! The format string is not interpreted at compile time. The macros only
//! capture the arguments:
//! 1. **Parsing**: the input is split into the format literal and a list of
//!    `expr` or `name = expr` arguments
//! 2. **Validation**: size limits and duplicate names are checked
//! 3. **Code Generation**: the arguments are bound by reference and captured
//!    into a packed store (fewer than 15 arguments) or an unpacked store,
//!    then handed to the runtime entry point
//!
//! # Name Hygiene
//!
//! Bindings introduced by the expansion use mixed-site spans, so they can
//! neither shadow nor be shadowed by names in the argument expressions.
//!
//! # Security
//!
//! - **Format strings**: Maximum 10,000 bytes
//! - **Arguments**: Maximum 256 per invocation
//! - `#![forbid(unsafe_code)]`, and the generated code is safe as well

#![forbid(unsafe_code)]
#![allow(clippy::needless_return)]

// ============================================================================
// Module Organization
// ============================================================================

mod codegen;
mod constants;
mod parsing;
mod validation;

use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

use codegen::{generate_call, generic_string, narrow_format_string, with_newline};
use parsing::{FormatArgs, FormatToArgs};
use validation::{validate_arguments, validate_format_literal};

// ============================================================================
// Public Macros
// ============================================================================

/// Formats arguments into a new `String`.
///
/// # Syntax
///
/// ```ignore
/// format!("format string", args...)
/// ```
///
/// - `format string`: string literal with `{}`, `{N}` or `{name}` fields
/// - `args...`: expressions, or `name = expr` for named arguments
///
/// # Returns
///
/// `Result<String, argfmt::FormatError>`.
///
/// # Examples
///
/// ```ignore
/// let out = argfmt::format!("{} and {} and {}", 42, "abc1", 1.5).unwrap();
/// assert_eq!(out, "42 and abc1 and 1.5");
///
/// let out = argfmt::format!("{a1}", a1 = 42).unwrap();
/// assert_eq!(out, "42");
/// ```
#[proc_macro]
pub fn format(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as FormatArgs);
    let Some(format_lit) = &args.format else {
        return missing_format_string("format");
    };
    let checked = validate_format_literal(format_lit).and_then(|_| validate_arguments(&args.args));
    if let Err(error) = checked {
        return error.to_compile_error().into();
    }

    let format_str = narrow_format_string(format_lit);
    let expanded = generate_call(&args.args, |format_args| {
        quote! { ::argfmt::vformat(#format_str, #format_args) }
    });
    TokenStream::from(expanded)
}

/// Formats arguments, appending to an output buffer.
///
/// The buffer is a `&mut Vec<u8>` (narrow, UTF-8) or a `&mut Vec<char>`
/// (wide); the format string literal is converted to match.
///
/// # Returns
///
/// `Result<(), argfmt::FormatError>`.
///
/// # Examples
///
/// ```ignore
/// let mut out: Vec<char> = Vec::new();
/// let name: Vec<char> = "wide".chars().collect();
/// argfmt::format_to!(&mut out, "{}: {}", name, 7).unwrap();
/// assert_eq!(out.iter().collect::<String>(), "wide: 7");
/// ```
#[proc_macro]
pub fn format_to(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as FormatToArgs);
    let checked =
        validate_format_literal(&args.format).and_then(|_| validate_arguments(&args.args));
    if let Err(error) = checked {
        return error.to_compile_error().into();
    }

    let out = &args.out;
    let format_str = generic_string(&args.format);
    let expanded = generate_call(&args.args, |format_args| {
        quote! { ::argfmt::vformat_to(#out, #format_str, #format_args) }
    });
    TokenStream::from(expanded)
}

/// Formats arguments and writes them to standard output.
///
/// # Returns
///
/// `std::io::Result<()>`; format errors are converted to
/// `ErrorKind::InvalidInput`.
///
/// # Examples
///
/// ```ignore
/// argfmt::print!("{} + {} = ", 1, 2).unwrap();
/// ```
#[proc_macro]
pub fn print(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as FormatArgs);
    let Some(format_lit) = &args.format else {
        return missing_format_string("print");
    };
    let checked = validate_format_literal(format_lit).and_then(|_| validate_arguments(&args.args));
    if let Err(error) = checked {
        return error.to_compile_error().into();
    }

    let format_str = narrow_format_string(format_lit);
    let expanded = generate_call(&args.args, |format_args| {
        quote! { ::argfmt::vprint(#format_str, #format_args) }
    });
    TokenStream::from(expanded)
}

/// Like `print!`, followed by a newline. `println!()` prints just the
/// newline.
///
/// # Examples
///
/// ```ignore
/// argfmt::println!("{name} scored {}", 42, name = "Alice").unwrap();
/// ```
#[proc_macro]
pub fn println(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as FormatArgs);
    if let Some(format_lit) = &args.format {
        if let Err(error) = validate_format_literal(format_lit) {
            return error.to_compile_error().into();
        }
    }
    if let Err(error) = validate_arguments(&args.args) {
        return error.to_compile_error().into();
    }

    let format_lit = with_newline(args.format.as_ref());
    let format_str = narrow_format_string(&format_lit);
    let expanded = generate_call(&args.args, |format_args| {
        quote! { ::argfmt::vprint(#format_str, #format_args) }
    });
    TokenStream::from(expanded)
}

// `format!` resolves to this crate's own macro at the root, hence `std::format!`.
fn missing_format_string(macro_name: &str) -> TokenStream {
    syn::Error::new(
        proc_macro2::Span::call_site(),
        std::format!("{}! requires a format string literal", macro_name),
    )
    .to_compile_error()
    .into()
}
