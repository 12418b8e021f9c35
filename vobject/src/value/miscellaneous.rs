// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Shared lexical primitives: labels, digits, tokens, binary, boolean and URI.

use std::borrow::Cow;
use std::ops::Neg;
use std::str::FromStr;

use chumsky::Parser;
use chumsky::error::RichPattern;
use chumsky::extra::ParserExtra;
use chumsky::input::Input;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;

/// Failure reasons when a specific value type was expected but not found.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueExpected {
    /// A date value was expected
    Date,
    /// A 64-bit floating-point value was expected
    F64,
    /// A 32-bit signed integer value was expected
    I32,
    /// A 32-bit unsigned integer value was expected
    U32,
    /// A number inside the range allowed by the production was expected
    Bounded,
    /// One of the keywords of an enumerated value was expected
    Keyword,
    /// A recurrence rule part name was expected
    RulePart,
    /// A registered calendar system or an x-name was expected
    CalendarScale,
}

impl From<ValueExpected> for RichPattern<'_, char> {
    fn from(expected: ValueExpected) -> Self {
        match expected {
            ValueExpected::Date => Self::Label(Cow::Borrowed("invalid date")),
            ValueExpected::F64 => Self::Label(Cow::Borrowed("f64 out of range")),
            ValueExpected::I32 => Self::Label(Cow::Borrowed("i32 out of range")),
            ValueExpected::U32 => Self::Label(Cow::Borrowed("u32 out of range")),
            ValueExpected::Bounded => Self::Label(Cow::Borrowed("number out of range")),
            ValueExpected::Keyword => Self::Label(Cow::Borrowed("known keyword")),
            ValueExpected::RulePart => Self::Label(Cow::Borrowed("recurrence rule part")),
            ValueExpected::CalendarScale => Self::Label(Cow::Borrowed("calendar system")),
        }
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// binary     = *b-char *2"="
///
/// b-char = ALPHA / DIGIT / "+" / "/"
/// ```
///
/// The quartet structure of BASE64 is a semantic constraint and is checked
/// on the collected text rather than by the grammar.
pub fn value_binary<'src, I, E>() -> impl Parser<'src, I, String, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    // b-char = ALPHA / DIGIT / "+" / "/"
    let b_char = select! {
        c @ 'A'..='Z' => c,
        c @ 'a'..='z' => c,
        c @ '0'..='9' => c,
        '+' => '+',
        '/' => '/',
    };

    b_char
        .repeated()
        .collect::<String>()
        .then(just('=').repeated().at_most(2).collect::<String>())
        .map(|(mut body, padding)| {
            body.push_str(&padding);
            body
        })
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// boolean    = "TRUE" / "FALSE"
/// ```
///
/// Description:  These values are case-insensitive text.  No additional
///    content value encoding (i.e., BACKSLASH character encoding, see
///    Section 3.3.11) is defined for this value type.
pub fn value_boolean<'src, I, E>() -> impl Parser<'src, I, bool, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    // case-insensitive
    let t = choice((just('T'), just('t')))
        .ignore_then(choice((just('R'), just('r'))))
        .ignore_then(choice((just('U'), just('u'))))
        .ignore_then(choice((just('E'), just('e'))))
        .ignored()
        .to(true);

    let f = choice((just('F'), just('f')))
        .ignore_then(choice((just('A'), just('a'))))
        .ignore_then(choice((just('L'), just('l'))))
        .ignore_then(choice((just('S'), just('s'))))
        .ignore_then(choice((just('E'), just('e'))))
        .ignored()
        .to(false);

    choice((t, f))
}

/// URI syntax: one or more non-whitespace characters.
///
/// Whether the text is an absolute URI is decided afterwards, see
/// [`crate::value::parse`].
pub fn value_uri<'src, I, E>() -> impl Parser<'src, I, String, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    select! { c if !char::is_whitespace(c) => c }
        .repeated()
        .at_least(1)
        .collect()
}

/// ```txt
/// iana-token = 1*(ALPHA / DIGIT / "-")
/// x-name     = "X-" [vendorid "-"] 1*(ALPHA / DIGIT / "-")
/// ```
///
/// Both productions share the same alphabet, so a single token parser
/// serves for keywords and extension names alike.
pub(crate) fn token<'src, I, E>() -> impl Parser<'src, I, String, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    select! {
        c @ 'A'..='Z' => c,
        c @ 'a'..='z' => c,
        c @ '0'..='9' => c,
        '-' => '-',
    }
    .repeated()
    .at_least(1)
    .collect()
}

/// A keyword from a closed vocabulary, resolved with the vocabulary's
/// case-insensitive `FromStr`.
pub(crate) fn keyword<'src, I, E, T>() -> impl Parser<'src, I, T, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
    T: FromStr,
{
    token().try_map(|s: String, span| {
        s.parse::<T>()
            .map_err(|_| E::Error::expected_found([ValueExpected::Keyword], None, span))
    })
}

/// ```txt
/// sign = "+" / "-"
/// ```
pub(crate) fn sign<'src, I, E>() -> impl Parser<'src, I, char, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    select! { c @ ('+' | '-') => c }
}

/// Optional sign, `true` unless a minus is present.
pub(crate) fn is_positive<'src, I, E>() -> impl Parser<'src, I, bool, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    sign().or_not().map(|c| !matches!(c, Some('-')))
}

/// Unsigned number of `1..=max_digits` digits constrained to `min..=max`.
pub(crate) fn bounded<'src, I, E, T>(
    max_digits: usize,
    min: u16,
    max: u16,
) -> impl Parser<'src, I, T, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
    T: TryFrom<u16>,
{
    select! { c @ '0'..='9' => c }
        .repeated()
        .at_least(1)
        .at_most(max_digits)
        .collect::<String>()
        .try_map_with(move |digits, e| {
            lexical::parse::<u16, _>(&digits)
                .ok()
                .filter(|v| (min..=max).contains(v))
                .and_then(|v| T::try_from(v).ok())
                .ok_or_else(|| {
                    E::Error::expected_found([ValueExpected::Bounded], None, e.span())
                })
        })
}

/// Optionally signed number whose magnitude is constrained to `min..=max`.
pub(crate) fn signed<'src, I, E, T>(
    max_digits: usize,
    min: u16,
    max: u16,
) -> impl Parser<'src, I, T, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
    T: TryFrom<u16> + Neg<Output = T>,
{
    is_positive()
        .then(bounded(max_digits, min, max))
        .map(|(positive, n): (bool, T)| if positive { n } else { -n })
}

macro_rules! define_digit_select {
    ($fname:ident : $ty:ty => { $($ch:literal),+ $(,)? }) => {
        #[allow(trivial_numeric_casts, clippy::cast_lossless, clippy::char_lit_as_u8, clippy::cast_possible_wrap)]
        pub(crate) const fn $fname<'src, I, E>() -> impl Parser<'src, I, $ty, E> + Copy
        where
            I: Input<'src, Token = char, Span = SimpleSpan>,
            E: ParserExtra<'src, I>,
        {
            select! {
                $(
                    $ch => (($ch as u8 - b'0') as $ty),
                )+
            }
        }
    };
}

define_digit_select!(u8_0_1 : u8 => { '0', '1' });
define_digit_select!(u8_0_3 : u8 => { '0', '1', '2', '3' });
define_digit_select!(u8_0_5 : u8 => { '0', '1', '2', '3', '4', '5' });
define_digit_select!(u8_0_9 : u8 => { '0', '1', '2', '3', '4', '5', '6', '7', '8', '9' });
define_digit_select!(i8_0_1 : i8 => { '0', '1' });
define_digit_select!(i8_0_2 : i8 => { '0', '1', '2' });
define_digit_select!(i8_0_9 : i8 => { '0', '1', '2', '3', '4', '5', '6', '7', '8', '9' });
define_digit_select!(i8_1_2 : i8 => { '1', '2' });
define_digit_select!(i8_1_9 : i8 => { '1', '2', '3', '4', '5', '6', '7', '8', '9' });
define_digit_select!(i16_0_9 : i16 => { '0', '1', '2', '3', '4', '5', '6', '7', '8', '9' });

#[cfg(test)]
mod tests {
    use chumsky::input::Stream;

    use super::*;

    #[test]
    fn parses_binary() {
        fn parse(src: &str) -> Result<String, Vec<Rich<'_, char>>> {
            let stream = Stream::from_iter(src.chars());
            value_binary::<'_, _, extra::Err<_>>()
                .parse(stream)
                .into_result()
        }
        let success_cases = [
            // examples from RFC 5545 Section 3.1.3
            "VGhlIHF1aWNrIGJyb3duIGZveCBqdW1wcyBvdmVyIHRoZSBsYXp5IGRvZy4=",
            "TWFu",     // "Man"
            "AAAA",     // all zero bytes
            "+/9a",     // bytes with high bits set
            "TQ==",     // "M"
            "SGVsbG8=", // "Hello"
            // length is not part of the grammar
            "TWFuA",
            "",
        ];
        for src in success_cases {
            assert_eq!(parse(src).unwrap(), src, "Parse {src} should succeed");
        }

        let fail_cases = [
            "TQ===", // too much padding
            "T@Fu",  // invalid character
            "TQ==A", // data after padding
            "TW Fu", // whitespace
        ];
        for src in fail_cases {
            assert!(parse(src).is_err(), "Parse {src} should fail");
        }
    }

    #[test]
    fn parses_boolean() {
        fn parse(src: &str) -> Result<bool, Vec<Rich<'_, char>>> {
            let stream = Stream::from_iter(src.chars());
            value_boolean::<'_, _, extra::Err<_>>()
                .parse(stream)
                .into_result()
        }

        for (src, expected) in [
            ("TRUE", true),
            ("True", true),
            ("true", true),
            ("FALSE", false),
            ("False", false),
            ("false", false),
        ] {
            assert_eq!(parse(src).unwrap(), expected);
        }

        let fail_cases = [
            "True ", " FALSE", "T RUE", "FA LSE", "1", "0", "YES", "NO", "",
        ];
        for src in fail_cases {
            assert!(parse(src).is_err(), "Parse {src} should fail");
        }
    }

    #[test]
    fn parses_uri_syntax() {
        fn parse(src: &str) -> Result<String, Vec<Rich<'_, char>>> {
            let stream = Stream::from_iter(src.chars());
            value_uri::<'_, _, extra::Err<_>>()
                .parse(stream)
                .into_result()
        }

        for src in [
            "http://example.com/pub/calendars/jsmith/mytime.ics",
            "mailto:jane_doe@example.com",
            "urn:uuid:f81d4fae-7dec-11d0-a765-00a0c91e6bf6",
        ] {
            assert_eq!(parse(src).unwrap(), src);
        }

        for src in ["", "http://example.com/a b", " mailto:a@b.c", "urn:a\tb"] {
            assert!(parse(src).is_err(), "Parse {src:?} should fail");
        }
    }

    #[test]
    fn parses_bounded_numbers() {
        fn parse(src: &str) -> Result<u16, Vec<Rich<'_, char>>> {
            bounded::<'_, _, extra::Err<_>, u16>(3, 1, 366)
                .parse(src)
                .into_result()
        }

        for (src, expected) in [("1", 1), ("01", 1), ("001", 1), ("366", 366), ("99", 99)] {
            assert_eq!(parse(src).unwrap(), expected, "Failed to parse: {src}");
        }
        for src in ["0", "000", "367", "1000", "", "-1"] {
            assert!(parse(src).is_err(), "Parse {src} should fail");
        }
    }

    #[test]
    fn parses_signed_numbers() {
        fn parse(src: &str) -> Result<i8, Vec<Rich<'_, char>>> {
            signed::<'_, _, extra::Err<_>, i8>(2, 1, 53)
                .parse(src)
                .into_result()
        }

        for (src, expected) in [("1", 1), ("+53", 53), ("-1", -1), ("-07", -7)] {
            assert_eq!(parse(src).unwrap(), expected, "Failed to parse: {src}");
        }
        for src in ["0", "54", "--1", "+", "-"] {
            assert!(parse(src).is_err(), "Parse {src} should fail");
        }
    }
}
