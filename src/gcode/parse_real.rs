use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::token::{literal, one_of};
use winnow::{Parser, Result};

/// Parses a decimal literal as an `f32`.
///
/// This accepts the same decimal forms as C-locale `strtod`, taking the
/// longest valid prefix of the input. Hexadecimal, `inf` and `nan` forms are
/// NOT accepted.
///
/// Examples of valid input:
///
/// - `"123"`
/// - `"-0.5"`
/// - `"+.25"`
/// - `"5."`
/// - `"1.5e-3"`
pub fn parse_real<'s>(input: &mut &'s str) -> Result<f32> {
    (opt(parse_sign), parse_mantissa, opt(parse_exponent))
        .take()
        .try_map(str::parse::<f32>)
        .parse_next(input)
}

/// Parse a sign indicator ("+" or "-").
fn parse_sign<'s>(input: &mut &'s str) -> Result<char> {
    one_of(['+', '-']).parse_next(input)
}

/// Parse the digits of a number, with an optional fractional part.
///
/// At least one digit must be present, either before or after the period.
fn parse_mantissa<'s>(input: &mut &'s str) -> Result<()> {
    alt((
        (digit1, opt((parse_period, digit0))).void(),
        (parse_period, digit1).void(),
    ))
    .parse_next(input)
}

/// Parse a decimal exponent, like `e-3`.
///
/// An `e` which is not followed by digits is not part of the number.
fn parse_exponent<'s>(input: &mut &'s str) -> Result<()> {
    (one_of(['e', 'E']), opt(parse_sign), digit1)
        .void()
        .parse_next(input)
}

/// Parse and discard a period (`.`)
fn parse_period<'s>(input: &mut &'s str) -> Result<()> {
    literal(".").void().parse_next(input)
}
