//! Parser for the display form of symbols.
//!
//! Accepts `name(part, ...)` for named construct types and
//! `Symbol(ConstructType(<bits>), part, ...)` for unnamed bit combinations.
//! String parts are single-quoted with `\\` and `\'` escapes.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{escaped_transform, is_not, tag, take_while1},
    character::complete::{char, i64 as parse_i64, multispace0, u32 as parse_u32},
    combinator::{all_consuming, map, opt, value},
    multi::separated_list0,
    sequence::{delimited, preceded},
};

use crate::symbols::{
    error::{SymbolError, parse_error},
    symbol::CidPart,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedCtype {
    Name(String),
    Bits(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedSymbol {
    pub ctype: ParsedCtype,
    pub cid: Vec<CidPart>,
}

pub(crate) fn parse_symbol(input: &str) -> Result<ParsedSymbol, SymbolError> {
    let trimmed = input.trim();
    all_consuming(alt((unnamed_symbol, named_symbol)))(trimmed)
        .map(|(_, parsed)| parsed)
        .map_err(|err| parse_error(format!("invalid symbol text '{trimmed}': {err}")))
}

fn named_symbol(input: &str) -> IResult<&str, ParsedSymbol> {
    let (input, name) = take_while1(|c: char| c.is_ascii_lowercase() || c == '_')(input)?;
    let (input, cid) = delimited(char('('), cid_list, char(')'))(input)?;
    Ok((
        input,
        ParsedSymbol {
            ctype: ParsedCtype::Name(name.to_string()),
            cid,
        },
    ))
}

fn unnamed_symbol(input: &str) -> IResult<&str, ParsedSymbol> {
    let (input, _) = tag("Symbol(ConstructType(")(input)?;
    let (input, bits) = parse_u32(input)?;
    let (input, _) = char(')')(input)?;
    let (input, cid) = opt(preceded(separator, cid_list))(input)?;
    let (input, _) = char(')')(input)?;
    Ok((
        input,
        ParsedSymbol {
            ctype: ParsedCtype::Bits(bits),
            cid: cid.unwrap_or_default(),
        },
    ))
}

fn separator(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0)(input)
}

fn cid_list(input: &str) -> IResult<&str, Vec<CidPart>> {
    delimited(
        multispace0,
        separated_list0(separator, cid_part),
        multispace0,
    )(input)
}

fn cid_part(input: &str) -> IResult<&str, CidPart> {
    alt((map(quoted, CidPart::Str), map(parse_i64, CidPart::Int)))(input)
}

fn quoted(input: &str) -> IResult<&str, String> {
    let body = escaped_transform(
        is_not("\\'"),
        '\\',
        alt((value("\\", tag("\\")), value("'", tag("'")))),
    );
    map(
        delimited(char('\''), opt(body), char('\'')),
        Option::unwrap_or_default,
    )(input)
}
