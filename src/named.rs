//! Named arguments and the lazily built name index.

use std::cell::OnceCell;

use crate::classify::Format;
use crate::context::Context;
use crate::error::FormatError;
use crate::string_view::{BasicStringView, Char};
use crate::value::Arg;

/// An argument addressable by name, e.g. `{count}`.
///
/// The wrapped value is captured as an [`Arg`] for the character type `C`
/// when the named argument is created. Argument lists only hold a marker
/// pointing here; lookups (positional or by name) return the embedded
/// argument, never the marker.
///
/// Naming a `NamedArg` again keeps the inner argument and the outer name.
#[derive(Debug, Clone, Copy)]
pub struct NamedArg<'a, C: Char = u8> {
    name: BasicStringView<'a, C>,
    arg: Arg<'a, C>,
}

impl<'a, C: Char> NamedArg<'a, C> {
    #[inline]
    pub fn name(&self) -> BasicStringView<'a, C> {
        self.name
    }

    /// The argument this name refers to.
    #[inline]
    pub fn arg(&self) -> Arg<'a, C> {
        self.arg
    }
}

impl<C: Char> Format<C> for NamedArg<'_, C> {
    #[inline]
    fn format(&self, ctx: &mut Context<'_, '_, C>) -> Result<(), FormatError> {
        ctx.write_arg(self.arg)
    }

    /// Captures the named-argument marker for an argument list.
    #[inline]
    fn make_arg(&self) -> Arg<'_, C> {
        Arg::named(self)
    }
}

/// Returns a named argument for formatting functions.
///
/// ```
/// use argfmt::arg;
///
/// let seconds = 1.25;
/// let out = argfmt::format!("Elapsed time: {s} seconds", arg("s", &seconds)).unwrap();
/// assert_eq!(out, "Elapsed time: 1.25 seconds");
/// ```
#[inline]
pub fn arg<'a, C: Char, T: Format<C>>(
    name: impl Into<BasicStringView<'a, C>>,
    value: &'a T,
) -> NamedArg<'a, C> {
    NamedArg {
        name: name.into(),
        arg: value.make_arg().resolve_named(),
    }
}

// ============================================================================
// Name Index
// ============================================================================

/// Positional access to the raw arguments of a list, markers included.
pub(crate) trait ArgSource<'a, C: Char> {
    /// Upper bound on the positions worth scanning.
    fn max_size(&self) -> usize;

    /// Argument at `index` without resolving named-argument markers.
    fn raw_arg(&self, index: usize) -> Arg<'a, C>;
}

#[derive(Debug, Clone, Copy)]
struct Entry<'a, C: Char> {
    name: BasicStringView<'a, C>,
    arg: Arg<'a, C>,
}

/// Name to argument index, built on the first lookup and then frozen.
#[derive(Debug)]
pub(crate) struct ArgMap<'a, C: Char> {
    entries: OnceCell<Vec<Entry<'a, C>>>,
}

impl<C: Char> Default for ArgMap<'_, C> {
    fn default() -> Self {
        Self {
            entries: OnceCell::new(),
        }
    }
}

impl<'a, C: Char> ArgMap<'a, C> {
    fn build(args: &impl ArgSource<'a, C>) -> Vec<Entry<'a, C>> {
        let mut entries = Vec::new();
        for index in 0..args.max_size() {
            // Empty slots are skipped, not treated as the end of the list.
            if let Some(named) = args.raw_arg(index).named_arg() {
                entries.push(Entry {
                    name: named.name(),
                    arg: named.arg(),
                });
            }
        }
        tracing::trace!(entries = entries.len(), "built named argument index");
        entries
    }

    /// Looks `name` up, building the index from `args` on first use.
    ///
    /// The first argument with a matching name wins. Returns the `None`
    /// sentinel when no argument has that name.
    pub(crate) fn find(
        &self,
        args: &impl ArgSource<'a, C>,
        name: BasicStringView<'_, C>,
    ) -> Arg<'a, C> {
        self.entries
            .get_or_init(|| Self::build(args))
            .iter()
            .find(|entry| entry.name.data() == name.data())
            .map_or_else(Arg::none, |entry| entry.arg)
    }
}
