// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Duration value type parser as defined in RFC 5545 Section 3.3.6.

use std::fmt;

use chumsky::extra::ParserExtra;
use chumsky::input::Input;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;

use crate::value::miscellaneous::{ValueExpected, is_positive};

/// Duration Value defined in RFC 5545 Section 3.3.6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueDuration {
    /// Date and Time Duration
    DateTime {
        /// Whether the duration is positive
        positive: bool,
        /// Day Duration
        day: u32,
        /// Hour Duration
        hour: u32,
        /// Minute Duration
        minute: u32,
        /// Second Duration
        second: u32,
    },

    /// Week Duration
    Week {
        /// Whether the duration is positive
        positive: bool,
        /// Week Duration
        week: u32,
    },
}

impl ValueDuration {
    /// Whether the duration runs forward in time.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        match self {
            Self::DateTime { positive, .. } | Self::Week { positive, .. } => *positive,
        }
    }
}

impl fmt::Display for ValueDuration {
    /// Zero components are omitted. A minute component is kept when both hour
    /// and second are present, since `dur-hour` only continues through
    /// `dur-minute`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ValueDuration::DateTime {
                positive,
                day,
                hour,
                minute,
                second,
            } => {
                if !positive {
                    write!(f, "-")?;
                }
                write!(f, "P")?;
                if day > 0 {
                    write!(f, "{day}D")?;
                }
                if hour > 0 || minute > 0 || second > 0 {
                    write!(f, "T")?;
                    if hour > 0 {
                        write!(f, "{hour}H")?;
                    }
                    if minute > 0 || (hour > 0 && second > 0) {
                        write!(f, "{minute}M")?;
                    }
                    if second > 0 {
                        write!(f, "{second}S")?;
                    }
                } else if day == 0 {
                    write!(f, "T0S")?;
                }
                Ok(())
            }
            ValueDuration::Week { positive, week } => {
                if !positive {
                    write!(f, "-")?;
                }
                write!(f, "P{week}W")
            }
        }
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// dur-value  = (["+"] / "-") "P" (dur-date / dur-time / dur-week)
///
/// dur-date   = dur-day [dur-time]
/// dur-time   = "T" (dur-hour / dur-minute / dur-second)
/// dur-week   = 1*DIGIT "W"
/// dur-hour   = 1*DIGIT "H" [dur-minute]
/// dur-minute = 1*DIGIT "M" [dur-second]
/// dur-second = 1*DIGIT "S"
/// dur-day    = 1*DIGIT "D"
/// ```
pub fn value_duration<'src, I, E>() -> impl Parser<'src, I, ValueDuration, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    // case-sensitive
    let int = select! { c @ '0'..='9' => c }
        .repeated()
        .at_least(1)
        .at_most(10) // u32 max is 10 digits: 4_294_967_295
        .collect::<String>()
        .try_map_with(|str, e| match lexical::parse::<u32, _>(&str) {
            Ok(v) => Ok(v),
            Err(_) => Err(E::Error::expected_found(
                [ValueExpected::U32],
                None,
                e.span(),
            )),
        });

    let week = int.clone().then_ignore(just('W'));

    // Base parsers for each time component
    let second_val = int.clone().then_ignore(just('S'));
    let minute_val = int.clone().then_ignore(just('M'));
    let hour_val = int.clone().then_ignore(just('H'));

    // dur-second = 1*DIGIT "S"
    let second_only = second_val.clone().map(|s| (0, 0, s));

    // dur-minute = 1*DIGIT "M" [dur-second]
    let minute_with_second = minute_val
        .clone()
        .then(second_val.clone().or_not())
        .map(|(m, s)| (0, m, s.unwrap_or(0)));

    // dur-hour = 1*DIGIT "H" [dur-minute]
    let hour_with_minute = hour_val
        .then(minute_val.then(second_val.or_not()).or_not())
        .map(|(h, opt_ms)| match opt_ms {
            Some((m, opt_s)) => (h, m, opt_s.unwrap_or(0)),
            None => (h, 0, 0),
        });

    // dur-time = "T" (dur-hour / dur-minute / dur-second)
    let time = just('T').ignore_then(choice((hour_with_minute, minute_with_second, second_only)));

    let day = int.then_ignore(just('D'));
    let date = day.then(time.clone().or_not());

    let prefix = is_positive().then_ignore(just('P'));
    choice((
        prefix.then(date).map(|(positive, (day, time))| {
            let (hour, minute, second) = time.unwrap_or((0, 0, 0));
            ValueDuration::DateTime {
                positive,
                day,
                hour,
                minute,
                second,
            }
        }),
        prefix
            .then(time)
            .map(|(positive, (hour, minute, second))| ValueDuration::DateTime {
                positive,
                day: 0,
                hour,
                minute,
                second,
            }),
        prefix
            .then(week)
            .map(|(positive, week)| ValueDuration::Week { positive, week }),
    ))
}
