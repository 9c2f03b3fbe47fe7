use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, digit1},
    combinator::{all_consuming, map_res, recognize},
    multi::many0_count,
    sequence::pair,
};

use crate::string_view::{BasicStringView, Char};

/// The argument reference of one replacement field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ArgId<'a, C: Char> {
    /// `{}`: the next argument in automatic order.
    Auto,
    /// `{N}`
    Index(usize),
    /// `{name}`
    Name(BasicStringView<'a, C>),
}

#[derive(Debug, PartialEq, Eq)]
enum IdToken {
    Index(usize),
    Identifier,
}

/// Classifies the text between `{` and the following `:` or `}`.
///
/// Returns `None` when it is neither empty, a decimal index that fits in
/// `usize`, nor an ASCII identifier.
pub(super) fn parse_arg_id<C: Char>(id: BasicStringView<'_, C>) -> Option<ArgId<'_, C>> {
    if id.is_empty() {
        return Some(ArgId::Auto);
    }
    let text = C::decode(id.data())?;
    let (_, token) = arg_id_token(&text).ok()?;
    return Some(match token {
        IdToken::Index(index) => ArgId::Index(index),
        IdToken::Identifier => ArgId::Name(id),
    });
}

fn arg_id_token(input: &str) -> IResult<&str, IdToken> {
    all_consuming(alt((
        index.map(IdToken::Index),
        identifier.map(|_| IdToken::Identifier),
    )))
    .parse(input)
}

fn index(input: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse::<usize>).parse(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_")))),
    ))
    .parse(input)
}
