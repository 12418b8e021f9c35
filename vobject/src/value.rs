// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value type grammars for iCalendar and vCard property values.
//!
//! Every value type of RFC 5545 Section 3.3, together with the enumerated
//! property values of RFC 5545 Section 3.8 and the extensions of RFC 7529,
//! RFC 7953 and RFC 7986, has a grammar here. [`parse`] runs one grammar over
//! a complete raw value and then applies the semantic checks that the
//! grammar alone cannot express.

mod datetime;
mod duration;
mod enumeration;
mod miscellaneous;
mod numeric;
mod period;
mod rrule;
mod text;

use std::fmt::{self, Display};

use chumsky::Parser;
use chumsky::prelude::*;
use serde::Serialize;

pub use datetime::{ValueDate, ValueDateOrDateTime, ValueDateTime, ValueTime, ValueUtcOffset};
pub use duration::ValueDuration;
pub use enumeration::{
    Action, BusyType, CalendarScale, Classification, Color, EventStatus, JournalStatus, Method,
    RequestStatus, TodoStatus, Transparency,
};
pub use numeric::{Geo, Version};
pub use period::ValuePeriod;
pub use rrule::{MonthNum, RecurrenceFrequency, Skip, ValueRecurrenceRule, WeekDay, WeekDayNum};

pub(crate) use text::EscapedText;

use crate::value::datetime::{
    value_date, value_date_time, value_date_time_utc, value_time, value_utc_offset, values_date,
    values_date_time, values_date_time_utc,
};
use crate::value::duration::value_duration;
use crate::value::enumeration::{value_color, value_keyword, value_request_status};
use crate::value::miscellaneous::{value_binary, value_boolean, value_uri};
use crate::value::numeric::{value_float, value_geo, value_integer, value_version};
use crate::value::period::{value_period, values_period};
use crate::value::rrule::value_rrule;
use crate::value::text::{value_text, values_text};

/// Types whose serialized form is their canonical text.
macro_rules! serialize_as_text {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }
        )+
    };
}

serialize_as_text!(
    ValueDate,
    ValueTime,
    ValueDateTime,
    ValueDateOrDateTime,
    ValueUtcOffset,
    ValueDuration,
    ValuePeriod,
    RecurrenceFrequency,
    WeekDay,
    WeekDayNum,
    MonthNum,
    Skip,
    Classification,
    Action,
    BusyType,
    EventStatus,
    TodoStatus,
    JournalStatus,
    Transparency,
    Method,
    CalendarScale,
    Color,
);

/// The grammar governing a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Grammar {
    /// BASE64 inline binary, RFC 5545 Section 3.3.1
    Binary,
    /// `TRUE` or `FALSE`, RFC 5545 Section 3.3.2
    Boolean,
    /// Calendar user address, RFC 5545 Section 3.3.3
    CalAddress,
    /// Date, RFC 5545 Section 3.3.4
    Date,
    /// Comma-separated dates
    DateList,
    /// Date-time with an optional `Z`, RFC 5545 Section 3.3.5
    DateTime,
    /// Comma-separated date-times
    DateTimeList,
    /// Date-time with a mandatory `Z`
    DateTimeUtc,
    /// Comma-separated UTC date-times
    DateTimeUtcList,
    /// Duration, RFC 5545 Section 3.3.6
    Duration,
    /// Float, RFC 5545 Section 3.3.7
    Float,
    /// Integer, RFC 5545 Section 3.3.8
    Integer,
    /// Integer in `0..=100`, RFC 5545 Section 3.8.1.8
    PercentComplete,
    /// Integer in `0..=9`, RFC 5545 Section 3.8.1.9
    Priority,
    /// Period of time, RFC 5545 Section 3.3.9
    Period,
    /// Comma-separated periods
    PeriodList,
    /// Recurrence rule, RFC 5545 Section 3.3.10 and RFC 7529
    Recur,
    /// Text, RFC 5545 Section 3.3.11
    Text,
    /// Comma-separated texts
    TextList,
    /// Time, RFC 5545 Section 3.3.12
    Time,
    /// URI, RFC 5545 Section 3.3.13
    Uri,
    /// UTC offset, RFC 5545 Section 3.3.14
    UtcOffset,
    /// Geographic position, RFC 5545 Section 3.8.1.6
    Geo,
    /// Access classification, RFC 5545 Section 3.8.1.3
    Classification,
    /// `VEVENT` status, RFC 5545 Section 3.8.1.11
    EventStatus,
    /// `VTODO` status, RFC 5545 Section 3.8.1.11
    TodoStatus,
    /// `VJOURNAL` status, RFC 5545 Section 3.8.1.11
    JournalStatus,
    /// Time transparency, RFC 5545 Section 3.8.2.7
    Transparency,
    /// Alarm action, RFC 5545 Section 3.8.6.1
    Action,
    /// Busy type, RFC 7953 Section 3.2.1
    BusyType,
    /// Request status, RFC 5545 Section 3.8.8.3
    RequestStatus,
    /// Color name, RFC 7986 Section 5.9
    Color,
    /// Scheduling method, RFC 5546 Section 1.4
    Method,
    /// Calendar scale, RFC 5545 Section 3.7.1
    CalendarScale,
    /// Specification version, RFC 5545 Section 3.7.4
    Version,
}

impl Grammar {
    /// Whether `value` is of the variant this grammar produces.
    #[must_use]
    pub fn produces(self, value: &ParsedValue) -> bool {
        use ParsedValue as V;

        match (self, value) {
            (Self::Binary, V::Binary(_))
            | (Self::Boolean, V::Boolean(_))
            | (Self::CalAddress, V::CalAddress(_))
            | (Self::Date, V::Date(_))
            | (Self::DateList, V::DateList(_))
            | (Self::DateTime | Self::DateTimeUtc, V::DateTime(_))
            | (Self::DateTimeList | Self::DateTimeUtcList, V::DateTimeList(_))
            | (Self::Duration, V::Duration(_))
            | (Self::Float, V::Float(_))
            | (Self::Integer | Self::PercentComplete | Self::Priority, V::Integer(_))
            | (Self::Period, V::Period(_))
            | (Self::PeriodList, V::PeriodList(_))
            | (Self::Recur, V::Recur(_))
            | (Self::Text, V::Text(_))
            | (Self::TextList, V::TextList(_))
            | (Self::Time, V::Time(_))
            | (Self::Uri, V::Uri(_))
            | (Self::UtcOffset, V::UtcOffset(_))
            | (Self::Geo, V::Geo(_))
            | (Self::Classification, V::Classification(_))
            | (Self::EventStatus, V::EventStatus(_))
            | (Self::TodoStatus, V::TodoStatus(_))
            | (Self::JournalStatus, V::JournalStatus(_))
            | (Self::Transparency, V::Transparency(_))
            | (Self::Action, V::Action(_))
            | (Self::BusyType, V::BusyType(_))
            | (Self::RequestStatus, V::RequestStatus(_))
            | (Self::Color, V::Color(_))
            | (Self::Method, V::Method(_))
            | (Self::CalendarScale, V::CalendarScale(_))
            | (Self::Version, V::Version(_)) => true,
            _ => false,
        }
    }
}

/// A property value accepted by a grammar.
///
/// `Display` renders the canonical text, which parses back to an equal value
/// with the grammar that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
#[expect(missing_docs)]
pub enum ParsedValue {
    Binary(String),
    Boolean(bool),
    CalAddress(String),
    Date(ValueDate),
    DateList(Vec<ValueDate>),
    DateTime(ValueDateTime),
    DateTimeList(Vec<ValueDateTime>),
    Duration(ValueDuration),
    Float(f64),
    Integer(i32),
    Period(ValuePeriod),
    PeriodList(Vec<ValuePeriod>),
    Recur(ValueRecurrenceRule),
    Text(String),
    TextList(Vec<String>),
    Time(ValueTime),
    Uri(String),
    UtcOffset(ValueUtcOffset),
    Geo(Geo),
    Classification(Classification),
    EventStatus(EventStatus),
    TodoStatus(TodoStatus),
    JournalStatus(JournalStatus),
    Transparency(Transparency),
    Action(Action),
    BusyType(BusyType),
    RequestStatus(RequestStatus),
    Color(Color),
    Method(Method),
    CalendarScale(CalendarScale),
    Version(Version),
    /// Unvalidated text of a property without a known grammar
    Raw(String),
}

impl ParsedValue {
    /// The text payload of `TEXT` and raw values.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Raw(s) => Some(s),
            _ => None,
        }
    }

    /// The value of `DATE-TIME` values.
    #[must_use]
    pub fn as_date_time(&self) -> Option<ValueDateTime> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// The value of `INTEGER` values.
    #[must_use]
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl Display for ParsedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T: Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                item.fmt(f)?;
            }
            Ok(())
        }

        match self {
            Self::Binary(s) | Self::CalAddress(s) | Self::Uri(s) | Self::Raw(s) => f.write_str(s),
            Self::Boolean(true) => f.write_str("TRUE"),
            Self::Boolean(false) => f.write_str("FALSE"),
            Self::Date(v) => v.fmt(f),
            Self::DateList(v) => join(f, v),
            Self::DateTime(v) => v.fmt(f),
            Self::DateTimeList(v) => join(f, v),
            Self::Duration(v) => v.fmt(f),
            Self::Float(v) => v.fmt(f),
            Self::Integer(v) => v.fmt(f),
            Self::Period(v) => v.fmt(f),
            Self::PeriodList(v) => join(f, v),
            Self::Recur(v) => v.fmt(f),
            Self::Text(s) => EscapedText(s).fmt(f),
            Self::TextList(v) => {
                let escaped: Vec<_> = v.iter().map(|s| EscapedText(s)).collect();
                join(f, &escaped)
            }
            Self::Time(v) => v.fmt(f),
            Self::UtcOffset(v) => v.fmt(f),
            Self::Geo(v) => v.fmt(f),
            Self::Classification(v) => v.fmt(f),
            Self::EventStatus(v) => v.fmt(f),
            Self::TodoStatus(v) => v.fmt(f),
            Self::JournalStatus(v) => v.fmt(f),
            Self::Transparency(v) => v.fmt(f),
            Self::Action(v) => v.fmt(f),
            Self::BusyType(v) => v.fmt(f),
            Self::RequestStatus(v) => v.fmt(f),
            Self::Color(v) => v.fmt(f),
            Self::Method(v) => v.fmt(f),
            Self::CalendarScale(v) => v.fmt(f),
            Self::Version(v) => v.fmt(f),
        }
    }
}

/// The raw text does not match the syntax of the grammar.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid {grammar} value {text:?}: {reason}")]
pub struct GrammarFailure {
    /// Grammar that rejected the text
    pub grammar: Grammar,

    /// The offending text
    pub text: String,

    /// Rendered parser diagnostics
    pub reason: String,
}

/// The raw text is syntactically valid but outside a semantic bound.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{grammar} value {text:?} out of range: {reason}")]
pub struct RangeViolation {
    /// Grammar whose bound was violated
    pub grammar: Grammar,

    /// The offending text
    pub text: String,

    /// Violated bound
    pub reason: String,
}

/// Error type returned by [`parse`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// Syntax error
    #[error(transparent)]
    Grammar(#[from] GrammarFailure),

    /// Semantic bound violation
    #[error(transparent)]
    Range(#[from] RangeViolation),
}

/// Parses the complete `raw` text with `grammar`.
///
/// Trailing text that the grammar does not consume is a [`GrammarFailure`].
/// Values accepted by the grammar but outside a semantic bound (percent,
/// priority, geographic coordinates, BASE64 quartets, absolute URIs,
/// registered request-status codes) are reported as [`RangeViolation`].
///
/// # Errors
///
/// Returns [`ValueError`] if the text is not a valid value of `grammar`.
pub fn parse(grammar: Grammar, raw: &str) -> Result<ParsedValue, ValueError> {
    tracing::trace!(%grammar, raw, "parsing value");
    let out_of_range = |reason: &str| RangeViolation {
        grammar,
        text: raw.to_owned(),
        reason: reason.to_owned(),
    };

    let value = match grammar {
        Grammar::Binary => {
            let binary = run(grammar, raw, value_binary())?;
            if binary.len() % 4 != 0 {
                return Err(out_of_range("BASE64 length must be a multiple of 4").into());
            }
            ParsedValue::Binary(binary)
        }
        Grammar::Boolean => ParsedValue::Boolean(run(grammar, raw, value_boolean())?),
        Grammar::CalAddress | Grammar::Uri => {
            let uri = run(grammar, raw, value_uri())?;
            if let Err(err) = url::Url::parse(&uri) {
                return Err(out_of_range(&format!("not an absolute URI: {err}")).into());
            }
            match grammar {
                Grammar::CalAddress => ParsedValue::CalAddress(uri),
                _ => ParsedValue::Uri(uri),
            }
        }
        Grammar::Date => ParsedValue::Date(run(grammar, raw, value_date())?),
        Grammar::DateList => ParsedValue::DateList(run(grammar, raw, values_date())?),
        Grammar::DateTime => ParsedValue::DateTime(run(grammar, raw, value_date_time())?),
        Grammar::DateTimeList => ParsedValue::DateTimeList(run(grammar, raw, values_date_time())?),
        Grammar::DateTimeUtc => ParsedValue::DateTime(run(grammar, raw, value_date_time_utc())?),
        Grammar::DateTimeUtcList => {
            ParsedValue::DateTimeList(run(grammar, raw, values_date_time_utc())?)
        }
        Grammar::Duration => ParsedValue::Duration(run(grammar, raw, value_duration())?),
        Grammar::Float => ParsedValue::Float(run(grammar, raw, value_float())?),
        Grammar::Integer => ParsedValue::Integer(run(grammar, raw, value_integer())?),
        Grammar::PercentComplete => {
            let percent = run(grammar, raw, value_integer())?;
            if !(0..=100).contains(&percent) {
                return Err(out_of_range("percent must be within 0..=100").into());
            }
            ParsedValue::Integer(percent)
        }
        Grammar::Priority => {
            let priority = run(grammar, raw, value_integer())?;
            if !(0..=9).contains(&priority) {
                return Err(out_of_range("priority must be within 0..=9").into());
            }
            ParsedValue::Integer(priority)
        }
        Grammar::Period => ParsedValue::Period(run(grammar, raw, value_period())?),
        Grammar::PeriodList => ParsedValue::PeriodList(run(grammar, raw, values_period())?),
        Grammar::Recur => ParsedValue::Recur(run(grammar, raw, value_rrule())?),
        Grammar::Text => ParsedValue::Text(run(grammar, raw, value_text())?),
        Grammar::TextList => ParsedValue::TextList(run(grammar, raw, values_text())?),
        Grammar::Time => ParsedValue::Time(run(grammar, raw, value_time())?),
        Grammar::UtcOffset => ParsedValue::UtcOffset(run(grammar, raw, value_utc_offset())?),
        Grammar::Geo => {
            let geo = run(grammar, raw, value_geo())?;
            if !(-180.0..=180.0).contains(&geo.latitude) {
                return Err(out_of_range("latitude must be within -180..=180").into());
            }
            if !(geo.longitude > -180.0 && geo.longitude <= 180.0) {
                return Err(
                    out_of_range("longitude must be within -180 (exclusive) and 180").into(),
                );
            }
            ParsedValue::Geo(geo)
        }
        Grammar::Classification => ParsedValue::Classification(run(grammar, raw, value_keyword())?),
        Grammar::EventStatus => ParsedValue::EventStatus(run(grammar, raw, value_keyword())?),
        Grammar::TodoStatus => ParsedValue::TodoStatus(run(grammar, raw, value_keyword())?),
        Grammar::JournalStatus => ParsedValue::JournalStatus(run(grammar, raw, value_keyword())?),
        Grammar::Transparency => ParsedValue::Transparency(run(grammar, raw, value_keyword())?),
        Grammar::Action => ParsedValue::Action(run(grammar, raw, value_keyword())?),
        Grammar::BusyType => ParsedValue::BusyType(run(grammar, raw, value_keyword())?),
        Grammar::RequestStatus => {
            let status = run(grammar, raw, value_request_status())?;
            if !status.is_registered() {
                return Err(out_of_range("status code is not registered").into());
            }
            ParsedValue::RequestStatus(status)
        }
        Grammar::Color => ParsedValue::Color(run(grammar, raw, value_color())?),
        Grammar::Method => ParsedValue::Method(run(grammar, raw, value_keyword())?),
        Grammar::CalendarScale => ParsedValue::CalendarScale(run(grammar, raw, value_keyword())?),
        Grammar::Version => ParsedValue::Version(run(grammar, raw, value_version())?),
    };

    debug_assert!(grammar.produces(&value));
    Ok(value)
}

fn run<'src, T>(
    grammar: Grammar,
    raw: &'src str,
    parser: impl Parser<'src, &'src str, T, extra::Err<Rich<'src, char>>>,
) -> Result<T, GrammarFailure> {
    parser.parse(raw).into_result().map_err(|errs| GrammarFailure {
        grammar,
        text: raw.to_owned(),
        reason: errs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; "),
    })
}
