//! Code generation for the formatting macros.
//!
//! Every macro expands to the same skeleton: the argument expressions are
//! bound by reference in a `match` scrutinee, so temporaries live until the
//! call returns, then captured into a store whose kind depends on the
//! argument count.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{LitByteStr, LitChar, LitStr, ext::IdentExt, punctuated::Punctuated, token::Comma};

use crate::constants::MAX_PACKED_ARGS;
use crate::parsing::FormatArgument;

/// Narrow format string expression.
pub fn narrow_format_string(format_lit: &LitStr) -> TokenStream {
    quote! { #format_lit }
}

/// String view expression whose code unit is inferred from its use.
///
/// Both spellings are emitted; `Char::select_literal` keeps the one that
/// matches. Used for the format string of `format_to!` and for argument
/// names, which must match the output buffer.
pub fn generic_string(lit: &LitStr) -> TokenStream {
    let value = lit.value();
    let narrow = LitByteStr::new(value.as_bytes(), lit.span());
    let wide = value.chars().map(|c| LitChar::new(c, lit.span()));
    quote! {
        ::argfmt::BasicStringView::new(
            ::argfmt::Char::select_literal(#narrow, &[#(#wide),*])
        )
    }
}

/// Appends a newline to the format string of `println!`.
pub fn with_newline(format_lit: Option<&LitStr>) -> LitStr {
    match format_lit {
        Some(lit) => LitStr::new(&format!("{}\n", lit.value()), lit.span()),
        None => LitStr::new("\n", Span::call_site()),
    }
}

/// The expression bound by reference for one argument.
fn argument_expr(arg: &FormatArgument) -> TokenStream {
    match arg {
        FormatArgument::Positional(expr) => quote! { &(#expr) },
        FormatArgument::Named { name, value } => {
            let name = generic_string(&LitStr::new(&name.unraw().to_string(), name.span()));
            quote! { &(::argfmt::arg(#name, &(#value))) }
        }
    }
}

/// Wraps `call` so that it receives the captured arguments as `args`.
///
/// `call` builds the final expression from the `FormatArgs` expression it is
/// given.
pub fn generate_call(
    args: &Punctuated<FormatArgument, Comma>,
    call: impl FnOnce(TokenStream) -> TokenStream,
) -> TokenStream {
    if args.is_empty() {
        return call(quote! { ::argfmt::FormatArgs::default() });
    }

    let bindings: Vec<_> = (0..args.len())
        .map(|index| format_ident!("arg{}", index, span = Span::mixed_site()))
        .collect();
    let exprs = args.iter().map(argument_expr);
    let store = format_ident!("store", span = Span::mixed_site());
    let store_type = if args.len() < MAX_PACKED_ARGS {
        quote! { ::argfmt::PackedArgStore }
    } else {
        quote! { ::argfmt::UnpackedArgStore }
    };
    let body = call(quote! { #store.as_args() });

    quote! {
        match (#(#exprs,)*) {
            (#(#bindings,)*) => {
                let #store = #store_type::new([
                    #(::argfmt::CaptureArg::capture(#bindings),)*
                ]);
                #body
            }
        }
    }
}
