//! Parse and format contexts.
//!
//! [`ParseContext`] walks the format string and owns the argument indexing
//! mode. [`Context`] adds the output buffer and the argument list, and is
//! what custom [`Format`](crate::Format) implementations render into.

use std::fmt;
use std::fmt::Write as _;

use crate::args::FormatArgs;
use crate::error::{DefaultErrorHandler, ErrorHandler, FormatError};
use crate::error::{argument_index_out_of_range, argument_not_found};
use crate::named::ArgMap;
use crate::string_view::{BasicStringView, Char};
use crate::value::{Arg, ArgValue};

// ============================================================================
// Parse Context
// ============================================================================

/// Format string cursor plus argument indexing state.
///
/// The indexing mode starts undetermined. The first `{}` switches it to
/// automatic, the first `{N}` to manual, and the two can't be mixed within
/// one format string. The counter encodes the mode: `0` undetermined,
/// positive automatic (next id to hand out), `-1` manual.
#[derive(Debug, Clone)]
pub struct ParseContext<'a, C: Char = u8, E: ErrorHandler = DefaultErrorHandler> {
    format_str: BasicStringView<'a, C>,
    next_arg_id: isize,
    handler: E,
}

impl<'a, C: Char> ParseContext<'a, C> {
    pub fn new(format_str: BasicStringView<'a, C>) -> Self {
        Self::with_handler(format_str, DefaultErrorHandler)
    }
}

impl<'a, C: Char, E: ErrorHandler> ParseContext<'a, C, E> {
    pub fn with_handler(format_str: BasicStringView<'a, C>, handler: E) -> Self {
        Self {
            format_str,
            next_arg_id: 0,
            handler,
        }
    }

    /// The unparsed part of the format string.
    #[inline]
    pub fn remaining(&self) -> BasicStringView<'a, C> {
        self.format_str
    }

    /// Skips `n` code units of the format string.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.format_str.remove_prefix(n);
    }

    /// Returns the next automatic argument id.
    pub fn next_arg_id(&mut self) -> Result<usize, FormatError> {
        if self.next_arg_id < 0 {
            return Err(self
                .handler
                .on_error("cannot switch from manual to automatic argument indexing"));
        }
        let id = self.next_arg_id;
        self.next_arg_id += 1;
        return Ok(id as usize);
    }

    /// Records a manual argument id, which locks the context into manual
    /// indexing.
    pub fn check_arg_id(&mut self, _id: usize) -> Result<(), FormatError> {
        if self.next_arg_id > 0 {
            return Err(self
                .handler
                .on_error("cannot switch from automatic to manual argument indexing"));
        }
        self.next_arg_id = -1;
        return Ok(());
    }

    /// Reports a fatal error through the handler. Return the result to the
    /// caller; formatting does not resume.
    #[inline]
    pub fn on_error(&self, message: &str) -> FormatError {
        self.handler.on_error(message)
    }

    #[inline]
    pub fn error_handler(&self) -> &E {
        &self.handler
    }
}

// ============================================================================
// Format Context
// ============================================================================

/// Everything a placeholder needs while it renders: output buffer, format
/// string cursor, and the arguments of the call.
///
/// Implements [`fmt::Write`], so custom formatters can use `write!`.
pub struct Context<'b, 'a, C: Char = u8> {
    out: &'b mut Vec<C>,
    parse: ParseContext<'a, C>,
    args: FormatArgs<'a, C>,
    map: ArgMap<'a, C>,
}

impl<'b, 'a, C: Char> Context<'b, 'a, C> {
    pub fn new(
        out: &'b mut Vec<C>,
        format_str: BasicStringView<'a, C>,
        args: FormatArgs<'a, C>,
    ) -> Self {
        Self {
            out,
            parse: ParseContext::new(format_str),
            args,
            map: ArgMap::default(),
        }
    }

    #[inline]
    pub fn parse_context(&self) -> &ParseContext<'a, C> {
        &self.parse
    }

    #[inline]
    pub fn parse_context_mut(&mut self) -> &mut ParseContext<'a, C> {
        &mut self.parse
    }

    /// The output buffer.
    #[inline]
    pub fn out(&mut self) -> &mut Vec<C> {
        self.out
    }

    #[inline]
    pub fn args(&self) -> FormatArgs<'a, C> {
        self.args
    }

    /// Argument for the next `{}`.
    pub fn next_arg(&mut self) -> Result<Arg<'a, C>, FormatError> {
        let id = self.parse.next_arg_id()?;
        let arg = self.args.get(id);
        if arg.is_none() {
            return Err(argument_index_out_of_range(self.parse.error_handler()));
        }
        return Ok(arg);
    }

    /// Argument for an explicit `{id}`.
    pub fn get_arg(&mut self, id: usize) -> Result<Arg<'a, C>, FormatError> {
        self.parse.check_arg_id(id)?;
        let arg = self.args.get(id);
        if arg.is_none() {
            return Err(argument_index_out_of_range(self.parse.error_handler()));
        }
        return Ok(arg);
    }

    /// Argument for `{name}`. Leaves the indexing mode untouched.
    pub fn get_arg_by_name(&self, name: BasicStringView<'_, C>) -> Result<Arg<'a, C>, FormatError> {
        let arg = self.map.find(&self.args, name);
        if arg.is_none() {
            return Err(argument_not_found(self.parse.error_handler()));
        }
        return Ok(arg);
    }

    /// Consumes the format spec of the current placeholder, everything up
    /// to but excluding the closing `}`.
    pub fn parse_spec(&mut self) -> BasicStringView<'a, C> {
        let rest = self.parse.remaining();
        let end = rest.position(|&c| c == C::CLOSE_BRACE).unwrap_or(rest.len());
        let (spec, _) = rest.split_at(end);
        self.parse.advance(end);
        return spec;
    }

    /// Renders `arg` into the output.
    pub fn write_arg(&mut self, arg: Arg<'_, C>) -> Result<(), FormatError> {
        match arg.value() {
            ArgValue::None => return Err(argument_index_out_of_range(self.parse.error_handler())),
            ArgValue::Int(v) => write!(self, "{}", v)?,
            ArgValue::UInt(v) => write!(self, "{}", v)?,
            ArgValue::LongLong(v) => write!(self, "{}", v)?,
            ArgValue::ULongLong(v) => write!(self, "{}", v)?,
            ArgValue::Double(v) => write!(self, "{}", v)?,
            ArgValue::Bool(v) => C::push_str(self.out, if v { "true" } else { "false" }),
            ArgValue::Char(v) => C::push_char(self.out, v),
            ArgValue::CString(v) => C::push_str(self.out, &v.to_string_lossy()),
            ArgValue::String(v) => self.out.extend_from_slice(v.data()),
            ArgValue::Pointer(v) => write!(self, "{:p}", v)?,
            ArgValue::Custom(handle) => handle.format(self)?,
        }
        return Ok(());
    }
}

impl<C: Char> fmt::Write for Context<'_, '_, C> {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        C::push_str(self.out, s);
        Ok(())
    }

    #[inline]
    fn write_char(&mut self, c: char) -> fmt::Result {
        C::push_char(self.out, c);
        Ok(())
    }
}

impl<C: Char> fmt::Debug for Context<'_, '_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("remaining", &self.parse.remaining())
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Format;
    use crate::named::arg;
    use crate::store::PackedArgStore;
    use crate::types::Type;
    use std::cell::RefCell;

    /// Handler that remembers every message it was given.
    #[derive(Default)]
    struct RecordingHandler {
        messages: RefCell<Vec<String>>,
    }

    impl ErrorHandler for &RecordingHandler {
        fn on_error(&self, message: &str) -> FormatError {
            self.messages.borrow_mut().push(message.to_owned());
            FormatError::Format(message.to_owned())
        }
    }

    #[test]
    fn test_automatic_then_manual_is_rejected() {
        let handler = RecordingHandler::default();
        let mut ctx = ParseContext::with_handler(StrView::from("{} {0}"), &handler);

        assert_eq!(ctx.next_arg_id().unwrap(), 0);
        assert_eq!(ctx.next_arg_id().unwrap(), 1);
        assert!(ctx.check_arg_id(0).is_err());
        assert_eq!(
            *handler.messages.borrow(),
            ["cannot switch from automatic to manual argument indexing"]
        );
    }

    #[test]
    fn test_manual_then_automatic_is_rejected() {
        let handler = RecordingHandler::default();
        let mut ctx = ParseContext::with_handler(StrView::from("{1} {}"), &handler);

        ctx.check_arg_id(1).unwrap();
        ctx.check_arg_id(0).unwrap();
        let error = ctx.next_arg_id().unwrap_err();
        assert_eq!(
            error.message(),
            Some("cannot switch from manual to automatic argument indexing")
        );
        assert_eq!(handler.messages.borrow().len(), 1);
    }

    #[test]
    fn test_advance_and_remaining() {
        let mut ctx = ParseContext::new(StrView::from("abc}"));
        ctx.advance(3);
        assert_eq!(ctx.remaining().as_str(), Some("}"));
        ctx.advance(5);
        assert!(ctx.remaining().is_empty());
    }

    type StrView<'a> = BasicStringView<'a, u8>;

    #[test]
    fn test_lookup_by_position_and_name() {
        let named = arg("a1", &42);
        let store = PackedArgStore::new([7i32.make_arg(), named.make_arg()]);
        let mut out = Vec::new();
        let mut ctx = Context::new(&mut out, "".into(), store.as_args());

        assert_eq!(ctx.get_arg_by_name("a1".into()).unwrap().ty(), Type::Int);
        // Name lookups leave the mode undetermined.
        assert_eq!(ctx.next_arg().unwrap().ty(), Type::Int);
        assert!(matches!(ctx.next_arg().unwrap().value(), ArgValue::Int(42)));
        assert_eq!(
            ctx.next_arg().unwrap_err().message(),
            Some("argument index out of range")
        );
    }

    #[test]
    fn test_missing_name() {
        let store: PackedArgStore<'_, u8, 1> = PackedArgStore::new([1i32.make_arg()]);
        let mut out = Vec::new();
        let ctx = Context::new(&mut out, "".into(), store.as_args());
        let error = ctx.get_arg_by_name("nope".into()).unwrap_err();
        assert_eq!(error.message(), Some("argument not found"));
    }

    #[test]
    fn test_manual_index_out_of_range() {
        let store: PackedArgStore<'_, u8, 1> = PackedArgStore::new([1i32.make_arg()]);
        let mut out = Vec::new();
        let mut ctx = Context::new(&mut out, "".into(), store.as_args());
        assert!(ctx.get_arg(0).is_ok());
        assert_eq!(
            ctx.get_arg(3).unwrap_err().message(),
            Some("argument index out of range")
        );
    }

    #[test]
    fn test_parse_spec_stops_at_close_brace() {
        let mut out = Vec::new();
        let mut ctx = Context::new(&mut out, ">8}tail".into(), FormatArgs::default());
        assert_eq!(ctx.parse_spec().as_str(), Some(">8"));
        assert_eq!(ctx.parse_context().remaining().as_str(), Some("}tail"));
    }

    #[test]
    fn test_write_builtins() {
        let text = c"c-str";
        let mut out = Vec::new();
        let mut ctx = Context::new(&mut out, "".into(), FormatArgs::default());
        ctx.write_arg(Arg::int(-1)).unwrap();
        ctx.write_arg(Arg::bool(true)).unwrap();
        ctx.write_arg(Arg::char('é')).unwrap();
        ctx.write_arg(Arg::double(0.25)).unwrap();
        ctx.write_arg(Arg::cstring(text)).unwrap();
        ctx.write_arg(Arg::string("!".into())).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "-1trueé0.25c-str!");
    }

    #[test]
    fn test_write_pointer() {
        let mut out = Vec::new();
        let mut ctx = Context::new(&mut out, "".into(), FormatArgs::default());
        ctx.write_arg(Arg::pointer(std::ptr::null())).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0x0");
    }

    #[test]
    fn test_wide_output() {
        let mut out: Vec<char> = Vec::new();
        let mut ctx = Context::new(&mut out, BasicStringView::new(&[]), FormatArgs::default());
        ctx.write_arg(Arg::uint(12)).unwrap();
        ctx.write_arg(Arg::char('ß')).unwrap();
        assert_eq!(out, ['1', '2', 'ß']);
    }
}
