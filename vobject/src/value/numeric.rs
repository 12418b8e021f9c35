// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integer, float, geographic position and version values.

use std::fmt;

use chumsky::Parser;
use chumsky::extra::ParserExtra;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use serde::Serialize;

use crate::value::miscellaneous::{ValueExpected, sign};

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// float      = (["+"] / "-") 1*DIGIT ["." 1*DIGIT]
/// ```
pub fn value_float<'src, I, E>() -> impl Parser<'src, I, f64, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    let integer_part = select! { c @ '0'..='9' => c }
        .repeated()
        .at_least(1)
        .collect::<String>();

    let fractional_part = just('.').ignore_then(integer_part.clone());

    sign()
        .or_not()
        .then(integer_part)
        .then(fractional_part.or_not())
        .try_map_with(|((sign, int_part), frac_part), e| {
            let capacity = sign.map_or(0, |_| 1)
                + int_part.len()
                + frac_part.as_ref().map_or(0, |f| 1 + f.len());

            let mut s = String::with_capacity(capacity);
            if let Some(sign) = sign {
                s.push(sign);
            }
            s.push_str(&int_part);
            if let Some(frac) = frac_part {
                s.push('.');
                s.push_str(&frac);
            }

            match lexical::parse::<f64, _>(&s) {
                Ok(f) if f.is_finite() => Ok(f),
                _ => Err(E::Error::expected_found(
                    [ValueExpected::F64],
                    None,
                    e.span(),
                )),
            }
        })
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// integer    = (["+"] / "-") 1*DIGIT
/// ```
pub fn value_integer<'src, I, E>() -> impl Parser<'src, I, i32, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    sign()
        .or_not()
        .then(
            select! { c @ '0'..='9' => c }
                .repeated()
                .at_least(1)
                .collect::<String>(),
        )
        .try_map_with(|(sign, digits), e| {
            let capacity = sign.map_or(0, |_| 1) + digits.len();
            let mut int_str = String::with_capacity(capacity);
            if let Some(s) = sign {
                int_str.push(s);
            }
            int_str.push_str(&digits);

            lexical::parse::<i32, _>(&int_str)
                .map_err(|_| E::Error::expected_found([ValueExpected::I32], None, e.span()))
        })
}

/// Geographic position, RFC 5545 Section 3.8.1.6.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geo {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl fmt::Display for Geo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.latitude, self.longitude)
    }
}

/// ```txt
/// geovalue   = float ";" float
/// ;Latitude and Longitude components
/// ```
///
/// Coordinates are range checked after parsing.
pub fn value_geo<'src, I, E>() -> impl Parser<'src, I, Geo, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    value_float()
        .then_ignore(just(';'))
        .then(value_float())
        .map(|(latitude, longitude)| Geo {
            latitude,
            longitude,
        })
}

/// The iCalendar specification version, RFC 5545 Section 3.7.4.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Version {
    /// A single version, such as `2.0`.
    Exact(f64),
    /// The minimum and maximum versions supported.
    Range {
        /// Minimum supported version.
        min: f64,
        /// Maximum supported version.
        max: f64,
    },
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::Exact(v) => write_version_number(f, *v),
            Version::Range { min, max } => {
                write_version_number(f, *min)?;
                write!(f, ";")?;
                write_version_number(f, *max)
            }
        }
    }
}

/// Writes a version identifier, keeping a fractional part so "2.0" stays "2.0".
fn write_version_number(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.fract() == 0.0 {
        write!(f, "{v:.1}")
    } else {
        write!(f, "{v}")
    }
}

/// ```txt
/// vervalue   = "2.0"         ;This memo
///            / maxver
///            / (minver ";" maxver)
///
/// minver     = <A IANA-registered iCalendar version identifier>
/// maxver     = <A IANA-registered iCalendar version identifier>
/// ```
///
/// Version identifiers are read with the float production.
pub fn value_version<'src, I, E>() -> impl Parser<'src, I, Version, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    value_float()
        .then(just(';').ignore_then(value_float()).or_not())
        .map(|(first, second)| match second {
            Some(max) => Version::Range { min: first, max },
            None => Version::Exact(first),
        })
}
