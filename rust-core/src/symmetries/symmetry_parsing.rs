//! Grammars for coordinate triplets and Hall symbols using nom
//!
//! The parsers here only recognize structure. Numeric conversion and
//! semantic checks (fold/axis compatibility, unimodularity) happen in the
//! modules that own the resulting types.

use nalgebra::Vector3;
use nom::{
    branch::alt,
    character::complete::{anychar, char, digit0, digit1, multispace0, multispace1, one_of},
    combinator::{all_consuming, consumed, map, map_opt, map_res, opt, recognize},
    multi::{fold_many0, many0, many1},
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};

use super::hall_symbols::{HallAxis, HallLattice, HallTranslation};

// ======================== COORDINATE TRIPLETS ========================

/// One signed term of a triplet row: `-2x`, `+1/2` or `0.25`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Term<'a> {
    /// Coefficient of x, y or z with an optional integer multiplier
    Variable {
        negative: bool,
        multiplier: Option<&'a str>,
        axis: usize,
    },
    /// Fraction, integer or decimal constant as written
    Constant { negative: bool, value: &'a str },
}

/// Any run of `+`/`-`; true when the run is negative
fn signs(input: &str) -> IResult<&str, bool> {
    fold_many0(
        one_of("+-"),
        || false,
        |negative, sign| if sign == '-' { !negative } else { negative },
    )(input)
}

fn variable(input: &str) -> IResult<&str, usize> {
    map_opt(anychar, |c| ['x', 'y', 'z'].iter().position(|v| *v == c))(input)
}

/// `1/2`, `0.25`, `.5` or `3`
fn constant(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(tuple((digit1, char('/'), digit1))),
        recognize(tuple((digit0, char('.'), digit0))),
        digit1,
    ))(input)
}

fn term(input: &str) -> IResult<&str, Term<'_>> {
    alt((
        map(
            tuple((signs, opt(digit1), variable)),
            |(negative, multiplier, axis)| Term::Variable {
                negative,
                multiplier,
                axis,
            },
        ),
        map(pair(signs, constant), |(negative, value)| Term::Constant {
            negative,
            value,
        }),
    ))(input)
}

fn row(input: &str) -> IResult<&str, Vec<Term<'_>>> {
    many1(term)(input)
}

/// Three comma-separated rows; the input must already be stripped of
/// whitespace and lowercased.
pub(crate) fn triplet(input: &str) -> IResult<&str, [Vec<Term<'_>>; 3]> {
    map(
        all_consuming(tuple((
            row,
            preceded(char(','), row),
            preceded(char(','), row),
        ))),
        |(x, y, z)| [x, y, z],
    )(input)
}

// ======================== HALL SYMBOLS ========================

/// One character after the fold digit of a Hall clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClauseItem {
    Axis(HallAxis),
    Screw(u32),
    Translation(HallTranslation),
}

impl ClauseItem {
    fn from_char(c: char) -> Option<Self> {
        HallAxis::from_symbol(c)
            .map(ClauseItem::Axis)
            .or_else(|| HallTranslation::from_letter(c).map(ClauseItem::Translation))
            .or_else(|| c.to_digit(10).map(ClauseItem::Screw))
    }
}

/// A clause as written, before screw and axis validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawClause<'a> {
    pub text: &'a str,
    pub improper: bool,
    pub fold: u32,
    pub items: Vec<ClauseItem>,
}

/// A Hall symbol as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawHallSymbol<'a> {
    pub centrosymmetric: bool,
    pub lattice: HallLattice,
    pub clauses: Vec<RawClause<'a>>,
    pub origin_shift: Option<Vector3<i32>>,
}

fn lattice(input: &str) -> IResult<&str, (bool, HallLattice)> {
    pair(
        map(opt(char('-')), |minus| minus.is_some()),
        map_opt(anychar, HallLattice::from_letter),
    )(input)
}

fn clause(input: &str) -> IResult<&str, RawClause<'_>> {
    map(
        consumed(tuple((
            opt(char('-')),
            map_opt(one_of("12346"), |c| c.to_digit(10)),
            many0(map_opt(anychar, ClauseItem::from_char)),
        ))),
        |(text, (minus, fold, items))| RawClause {
            text,
            improper: minus.is_some(),
            fold,
            items,
        },
    )(input)
}

fn signed_integer(input: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), |text: &str| {
        text.parse::<i32>()
    })(input)
}

fn shift_separator(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(tuple((multispace0, char(','), multispace0))),
        multispace1,
    ))(input)
}

/// `(0 0 1)` or `(0,0,-1)`, in twelfths
fn origin_shift(input: &str) -> IResult<&str, Vector3<i32>> {
    map(
        delimited(
            pair(char('('), multispace0),
            tuple((
                signed_integer,
                shift_separator,
                signed_integer,
                shift_separator,
                signed_integer,
            )),
            pair(multispace0, char(')')),
        ),
        |(x, _, y, _, z)| Vector3::new(x, y, z),
    )(input)
}

/// Lattice symbol, clauses and optional origin shift; the input must be lowercased.
pub(crate) fn hall_symbol(input: &str) -> IResult<&str, RawHallSymbol<'_>> {
    map(
        all_consuming(tuple((
            preceded(multispace0, lattice),
            many1(preceded(multispace1, clause)),
            opt(preceded(multispace0, origin_shift)),
            multispace0,
        ))),
        |((centrosymmetric, lattice), clauses, origin_shift, _)| RawHallSymbol {
            centrosymmetric,
            lattice,
            clauses,
            origin_shift,
        },
    )(input)
}

/// Remaining input at the point a grammar gave up
pub(crate) fn failure_point<'a>(error: nom::Err<nom::error::Error<&'a str>>) -> Option<&'a str> {
    match error {
        nom::Err::Error(error) | nom::Err::Failure(error) => Some(error.input),
        nom::Err::Incomplete(_) => None,
    }
}
