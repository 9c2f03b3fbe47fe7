//! Rendering of a format string against an argument list.

use std::io::{self, Write};

use crate::args::FormatArgs;
use crate::constants::OUTPUT_CAPACITY_HINT;
use crate::context::Context;
use crate::error::FormatError;
use crate::string_view::{BasicStringView, Char, StringView};
use crate::types::Type;

mod format_parser;

use format_parser::ArgId;

/// Formats `args` according to `format_str` into a new `String`.
///
/// ```
/// use argfmt::{PackedArgStore, Format};
///
/// let store = PackedArgStore::new([42i32.make_arg(), "abc1".make_arg()]);
/// assert_eq!(argfmt::vformat("{} and {}", store.as_args()).unwrap(), "42 and abc1");
/// ```
pub fn vformat<'a>(
    format_str: impl Into<StringView<'a>>,
    args: FormatArgs<'a>,
) -> Result<String, FormatError> {
    let format_str = format_str.into();
    let mut out = Vec::with_capacity(format_str.len() + OUTPUT_CAPACITY_HINT);
    render(&mut out, format_str, args)?;
    return Ok(String::from_utf8(out)?);
}

/// Formats `args` according to `format_str`, appending to `out`.
///
/// Works for narrow (`u8`) and wide (`char`) output. On error the contents
/// appended so far are unspecified.
pub fn vformat_to<'a, C: Char>(
    out: &mut Vec<C>,
    format_str: impl Into<BasicStringView<'a, C>>,
    args: FormatArgs<'a, C>,
) -> Result<(), FormatError> {
    return render(out, format_str.into(), args);
}

/// Formats `args` according to `format_str` and writes the result to
/// standard output.
pub fn vprint<'a>(format_str: impl Into<StringView<'a>>, args: FormatArgs<'a>) -> io::Result<()> {
    let format_str = format_str.into();
    let mut out = Vec::with_capacity(format_str.len() + OUTPUT_CAPACITY_HINT);
    render(&mut out, format_str, args)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&out)?;
    return stdout.flush();
}

fn render<'a, C: Char>(
    out: &mut Vec<C>,
    format_str: BasicStringView<'a, C>,
    args: FormatArgs<'a, C>,
) -> Result<(), FormatError> {
    let mut ctx = Context::new(out, format_str, args);
    loop {
        let rest = ctx.parse_context().remaining();
        let Some(pos) = rest.position(|&c| c == C::OPEN_BRACE || c == C::CLOSE_BRACE) else {
            ctx.out().extend_from_slice(rest.data());
            ctx.parse_context_mut().advance(rest.len());
            return Ok(());
        };
        let (text, tail) = rest.split_at(pos);
        ctx.out().extend_from_slice(text.data());

        let brace = tail.data()[0];
        let escaped = tail.data().get(1) == Some(&brace);
        if brace == C::CLOSE_BRACE && !escaped {
            return Err(ctx.parse_context().on_error("unmatched '}' in format string"));
        }
        if escaped {
            ctx.out().push(brace);
            ctx.parse_context_mut().advance(pos + 2);
            continue;
        }
        ctx.parse_context_mut().advance(pos + 1);
        replacement_field(&mut ctx)?;
    }
}

/// Renders one `{...}` field; the cursor sits right after the `{`.
fn replacement_field<C: Char>(ctx: &mut Context<'_, '_, C>) -> Result<(), FormatError> {
    let rest = ctx.parse_context().remaining();
    let Some(end) = rest.position(|&c| c == C::COLON || c == C::CLOSE_BRACE) else {
        return Err(ctx.parse_context().on_error("missing '}' in format string"));
    };
    let (id, tail) = rest.split_at(end);
    let arg = match format_parser::parse_arg_id(id) {
        Some(ArgId::Auto) => ctx.next_arg()?,
        Some(ArgId::Index(index)) => ctx.get_arg(index)?,
        Some(ArgId::Name(name)) => ctx.get_arg_by_name(name)?,
        None => return Err(ctx.parse_context().on_error("invalid format string")),
    };

    let has_spec = tail.first() == Some(C::COLON);
    ctx.parse_context_mut().advance(end + usize::from(has_spec));
    // Only custom formatters understand a spec.
    if has_spec
        && arg.ty() != Type::Custom
        && ctx.parse_context().remaining().first() != Some(C::CLOSE_BRACE)
    {
        return Err(ctx.parse_context().on_error("unknown format specifier"));
    }

    ctx.write_arg(arg)?;

    match ctx.parse_context().remaining().first() {
        Some(c) if c == C::CLOSE_BRACE => {}
        // A custom formatter left part of its spec unread.
        Some(_) => return Err(ctx.parse_context().on_error("unknown format specifier")),
        None => return Err(ctx.parse_context().on_error("missing '}' in format string")),
    }
    ctx.parse_context_mut().advance(1);
    return Ok(());
}
