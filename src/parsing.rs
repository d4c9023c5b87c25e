//! Reading rationals from text. Two entry points share the same integer parser:
//!
//! - [`parse_complete`], behind [`FromStr`](std::str::FromStr) and
//!   [`Num::from_str_radix`](num_traits::Num::from_str_radix), which accepts exactly one `n/d`.
//! - [`RationalStream`], a cursor over a string that reads values one after another, like
//!   extracting from an input stream: leading whitespace is skipped, *any* single character
//!   separates numerator from denominator, and a failed read leaves the target untouched and
//!   puts the stream into a sticky failed state.

use log::debug;
use nom::branch::alt;
use nom::bytes::complete::take_while1;
use nom::character::complete::{anychar, char, multispace0, one_of};
use nom::combinator::{all_consuming, map_opt, opt, value};
use nom::error::ParseError;
use nom::sequence::{delimited, pair, preceded, separated_pair, tuple};
use nom::IResult;
use thiserror::Error;

use crate::rational::{BaseInt, Rational, RationalError, WideInt};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseRationalError {
    #[error("Could not parse {0:?} as a fraction n/d")]
    Malformed(String),
    #[error("Radix {0} is not in the range 2..=36")]
    InvalidRadix(u32),
    #[error(transparent)]
    InvalidDenominator(#[from] RationalError),
}

/// Parses a whole string as `n/d` in the given radix, with optional whitespace around the parts.
pub fn parse_complete(s: &str, radix: u32) -> Result<Rational, ParseRationalError> {
    if !(2..=36).contains(&radix) {
        return Err(ParseRationalError::InvalidRadix(radix));
    }

    let (_, (n, d)) = all_consuming(ws(slashed_parts(radix)))(s)
        .map_err(|_| ParseRationalError::Malformed(s.to_owned()))?;

    Ok(Rational::new(n, d)?)
}

/// Parses `n/d`, allowing whitespace around the slash.
pub fn slashed_parts<'a>(radix: u32) -> impl FnMut(&'a str) -> IResult<&'a str, (BaseInt, BaseInt)> {
    separated_pair(integer(radix), ws(slash), integer(radix))
}

/// Parses the stream form: a decimal integer after optional whitespace, exactly one separator
/// character of any kind, then another decimal integer after optional whitespace.
pub fn stream_parts(input: &str) -> IResult<&str, (BaseInt, BaseInt)> {
    let (o, (n, _sep, d)) = tuple((
        preceded(multispace0, integer(10)),
        anychar,
        preceded(multispace0, integer(10)),
    ))(input)?;

    Ok((o, (n, d)))
}

/// Parses a signed integer in the given radix that fits in [`BaseInt`]. Fails on overflow.
pub fn integer<'a>(radix: u32) -> impl FnMut(&'a str) -> IResult<&'a str, BaseInt> {
    map_opt(
        pair(opt(sign), take_while1(move |c: char| c.is_digit(radix))),
        move |(negative, digits): (Option<bool>, &str)| {
            let magnitude = WideInt::from_str_radix(digits, radix).ok()?;
            let value = if negative == Some(true) {
                -magnitude
            } else {
                magnitude
            };
            BaseInt::try_from(value).ok()
        },
    )
}

/// Parses a sign, returning whether it is negative.
pub fn sign(input: &str) -> IResult<&str, bool> {
    alt((value(true, minus_sign), value(false, char('+'))))(input)
}

/// Parses a minus sign, in many formats.
pub fn minus_sign(input: &str) -> IResult<&str, char> {
    one_of("-﹣－−")(input)
}

/// Parses a slash, as of a fraction.
pub fn slash(input: &str) -> IResult<&str, char> {
    one_of("/⁄∕")(input)
}

/// A combinator that takes a parser `inner` and produces a parser that also consumes both leading and
/// trailing whitespace, returning the output of `inner`.
fn ws<'a, F: 'a, O, E: ParseError<&'a str>>(
    inner: F,
) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, E>,
{
    delimited(multispace0, inner, multispace0)
}

/// A cursor that reads rationals out of a string one at a time.
///
/// Once a read fails to parse, the stream stays failed and every later read is a no-op.
#[derive(Debug, Clone)]
pub struct RationalStream<'a> {
    rest: &'a str,
    failed: bool,
}

impl<'a> RationalStream<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            failed: false,
        }
    }

    /// Reads the next value into `target`.
    ///
    /// If the input is malformed or exhausted, `target` is not touched, the stream is marked as
    /// failed, and this still returns `Ok`: check [`RationalStream::is_ok`]. If the input parses
    /// but has a zero denominator, the text is consumed, `target` is not touched, and the error is
    /// returned.
    pub fn read_into(&mut self, target: &mut Rational) -> Result<&mut Self, RationalError> {
        if self.failed {
            return Ok(self);
        }

        match stream_parts(self.rest) {
            Ok((rest, (n, d))) => {
                self.rest = rest;
                if let Err(e) = target.set(n, d) {
                    debug!("Rejected {}/{}: {}", n, d, e);
                    return Err(e);
                }
            }
            Err(_) => {
                debug!("No rational at {:?}, stream failed", self.rest);
                self.failed = true;
            }
        }

        Ok(self)
    }

    /// Whether every read so far has parsed.
    pub fn is_ok(&self) -> bool {
        !self.failed
    }

    /// Whether only whitespace is left.
    pub fn is_exhausted(&self) -> bool {
        self.rest.trim_start().is_empty()
    }

    /// The input that has not been consumed yet.
    pub fn remaining(&self) -> &'a str {
        self.rest
    }
}

impl<'a> Iterator for RationalStream<'a> {
    type Item = Result<Rational, RationalError>;

    /// Yields values until a read fails to parse. Zero denominators are yielded as errors and
    /// reading continues after them.
    fn next(&mut self) -> Option<Self::Item> {
        let mut r = Rational::default();
        match self.read_into(&mut r) {
            Err(e) => Some(Err(e)),
            Ok(stream) if stream.is_ok() => Some(Ok(r)),
            Ok(_) => None,
        }
    }
}
