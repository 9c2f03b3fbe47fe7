//! Macro argument parsing structures.

use proc_macro2::Span;
use syn::{
    Expr, Ident, LitStr, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    token::Comma,
};

/// One argument after the format string.
pub enum FormatArgument {
    /// `expr`
    Positional(Expr),
    /// `name = expr`
    Named { name: Ident, value: Expr },
}

impl FormatArgument {
    /// Span of the argument: the name for `name = expr`, else the expression.
    pub fn span(&self) -> Span {
        match self {
            Self::Positional(expr) => expr.span(),
            Self::Named { name, .. } => name.span(),
        }
    }
}

impl Parse for FormatArgument {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Ident) && input.peek2(Token![=]) && !input.peek2(Token![==]) {
            let name = input.parse()?;
            input.parse::<Token![=]>()?;
            let value = input.parse()?;
            return Ok(Self::Named { name, value });
        }
        return Ok(Self::Positional(input.parse()?));
    }
}

fn parse_trailing_args(input: ParseStream) -> syn::Result<Punctuated<FormatArgument, Comma>> {
    if input.is_empty() {
        return Ok(Punctuated::new());
    }
    input.parse::<Token![,]>()?;
    return Punctuated::parse_terminated(input);
}

/// format! / print! / println! arguments: format, args
pub struct FormatArgs {
    pub format: Option<LitStr>,
    pub args: Punctuated<FormatArgument, Comma>,
}

impl Parse for FormatArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        // Only `println!()` may omit the format string; the macros check.
        if input.is_empty() {
            return Ok(Self {
                format: None,
                args: Punctuated::new(),
            });
        }
        let format = input.parse()?;
        let args = parse_trailing_args(input)?;
        Ok(Self {
            format: Some(format),
            args,
        })
    }
}

/// format_to! arguments: output, format, args
pub struct FormatToArgs {
    pub out: Expr,
    pub format: LitStr,
    pub args: Punctuated<FormatArgument, Comma>,
}

impl Parse for FormatToArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let out = input.parse()?;
        input.parse::<Token![,]>()?;
        let format = input.parse()?;
        let args = parse_trailing_args(input)?;
        Ok(Self { out, format, args })
    }
}
