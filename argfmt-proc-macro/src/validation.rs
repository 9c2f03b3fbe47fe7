//! Compile-time checks on macro input.

use std::collections::HashSet;

use proc_macro2::Span;
use syn::{LitStr, ext::IdentExt, punctuated::Punctuated, token::Comma};

use crate::constants::{MAX_ARGS, MAX_FORMAT_STRING_LEN};
use crate::parsing::FormatArgument;

/// Rejects oversized format strings.
pub fn validate_format_literal(format_lit: &LitStr) -> syn::Result<()> {
    let len = format_lit.value().len();
    if len > MAX_FORMAT_STRING_LEN {
        return Err(syn::Error::new(
            format_lit.span(),
            format!(
                "Format string too long ({} bytes). Maximum allowed: {} bytes.",
                len, MAX_FORMAT_STRING_LEN
            ),
        ));
    }
    return Ok(());
}

/// Rejects too many arguments and `name = expr` pairs that reuse a name.
///
/// Explicit `arg("name", &value)` calls are runtime values and are not seen
/// here; among those the first match wins.
pub fn validate_arguments(args: &Punctuated<FormatArgument, Comma>) -> syn::Result<()> {
    if args.len() > MAX_ARGS {
        // Point at the first argument past the limit.
        let span = args.iter().nth(MAX_ARGS).map_or_else(Span::call_site, FormatArgument::span);
        return Err(syn::Error::new(
            span,
            format!(
                "Too many arguments ({}). Maximum allowed: {}.",
                args.len(),
                MAX_ARGS
            ),
        ));
    }

    let mut seen = HashSet::new();
    for arg in args {
        if let FormatArgument::Named { name, .. } = arg {
            let text = name.unraw().to_string();
            if !seen.insert(text) {
                return Err(syn::Error::new(
                    name.span(),
                    format!("duplicate argument named `{}`", name.unraw()),
                ));
            }
        }
    }
    return Ok(());
}
