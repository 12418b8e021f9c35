// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Period value type parser as defined in RFC 5545 Section 3.3.9.

use std::fmt;

use chumsky::extra::ParserExtra;
use chumsky::input::Input;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;

use crate::value::datetime::{ValueDateTime, value_date_time};
use crate::value::duration::{ValueDuration, value_duration};
use crate::value::miscellaneous::ValueExpected;

/// Period of Time value defined in RFC 5545 Section 3.3.9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuePeriod {
    /// Explicit period with start and end date-time
    ///
    /// Format: `date-time "/" date-time`
    Explicit {
        /// Start date-time
        start: ValueDateTime,

        /// End date-time
        end: ValueDateTime,
    },

    /// Period with start date-time and duration
    ///
    /// Format: `date-time "/" dur-value`
    Duration {
        /// Start date-time
        start: ValueDateTime,

        /// Duration
        duration: ValueDuration,
    },
}

impl ValuePeriod {
    /// Start of the period.
    #[must_use]
    pub const fn start(&self) -> ValueDateTime {
        match self {
            Self::Explicit { start, .. } | Self::Duration { start, .. } => *start,
        }
    }
}

impl fmt::Display for ValuePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit { start, end } => write!(f, "{start}/{end}"),
            Self::Duration { start, duration } => write!(f, "{start}/{duration}"),
        }
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// period     = period-explicit / period-start
///
/// period-explicit = date-time "/" date-time
/// ; [ISO.8601.2004] complete representation basic format for a
/// ; period of time consisting of a start and end.  The start MUST
/// ; be before the end.
///
/// period-start = date-time "/" dur-value
/// ; [ISO.8601.2004] complete representation basic format for a
/// ; period of time consisting of a start and positive duration
/// ; of time.
/// ```
pub fn value_period<'src, I, E>() -> impl Parser<'src, I, ValuePeriod, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    // period-explicit = date-time "/" date-time
    // Either end may be UTC or floating independently of the other
    let explicit = value_date_time()
        .then_ignore(just('/'))
        .then(value_date_time())
        .map(|(start, end)| ValuePeriod::Explicit { start, end });

    // period-start = date-time "/" dur-value
    let start = value_date_time()
        .then_ignore(just('/'))
        .then(value_duration())
        .map(|(start, duration)| ValuePeriod::Duration { start, duration });

    choice((explicit, start))
}

/// Period multiple values parser.
///
/// If the property permits, multiple "period" values are specified by a
/// COMMA-separated list of values.
pub fn values_period<'src, I, E>() -> impl Parser<'src, I, Vec<ValuePeriod>, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    value_period().separated_by(just(',')).at_least(1).collect()
}
