// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule values, RFC 5545 Section 3.3.10 with the RFC 7529
//! non-Gregorian extensions (`RSCALE`, `SKIP` and leap months).

use std::fmt::{self, Display};

use chumsky::extra::ParserExtra;
use chumsky::input::Input;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;
use serde::Serialize;

use crate::keyword::{
    KW_RRULE_BYDAY, KW_RRULE_BYHOUR, KW_RRULE_BYMINUTE, KW_RRULE_BYMONTH, KW_RRULE_BYMONTHDAY,
    KW_RRULE_BYSECOND, KW_RRULE_BYSETPOS, KW_RRULE_BYWEEKNO, KW_RRULE_BYYEARDAY, KW_RRULE_COUNT,
    KW_RRULE_FREQ, KW_RRULE_INTERVAL, KW_RRULE_RSCALE, KW_RRULE_SKIP, KW_RRULE_UNTIL,
    KW_RRULE_WKST, KW_X_PREFIX,
};
use crate::value::datetime::{ValueDateOrDateTime, value_date_or_date_time};
use crate::value::miscellaneous::{ValueExpected, bounded, keyword, signed, token};

/// Recurrence rule.
///
/// Every rule part is optional; a part given more than once keeps the last
/// occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValueRecurrenceRule {
    /// Frequency of recurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freq: Option<RecurrenceFrequency>,
    /// Until date for recurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<ValueDateOrDateTime>,
    /// Number of occurrences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Interval between recurrences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    /// Second specifier
    #[serde(rename = "bysecond", skip_serializing_if = "Vec::is_empty")]
    pub by_second: Vec<u8>,
    /// Minute specifier
    #[serde(rename = "byminute", skip_serializing_if = "Vec::is_empty")]
    pub by_minute: Vec<u8>,
    /// Hour specifier
    #[serde(rename = "byhour", skip_serializing_if = "Vec::is_empty")]
    pub by_hour: Vec<u8>,
    /// Day of week specifier
    #[serde(rename = "byday", skip_serializing_if = "Vec::is_empty")]
    pub by_day: Vec<WeekDayNum>,
    /// Day of month specifier
    #[serde(rename = "bymonthday", skip_serializing_if = "Vec::is_empty")]
    pub by_month_day: Vec<i8>,
    /// Day of year specifier
    #[serde(rename = "byyearday", skip_serializing_if = "Vec::is_empty")]
    pub by_year_day: Vec<i16>,
    /// Week number specifier
    #[serde(rename = "byweekno", skip_serializing_if = "Vec::is_empty")]
    pub by_week_no: Vec<i8>,
    /// Month specifier
    #[serde(rename = "bymonth", skip_serializing_if = "Vec::is_empty")]
    pub by_month: Vec<MonthNum>,
    /// Position in the set of occurrences
    #[serde(rename = "bysetpos", skip_serializing_if = "Vec::is_empty")]
    pub by_set_pos: Vec<i16>,
    /// Start day of week
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wkst: Option<WeekDay>,
    /// Calendar system, upper-cased
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rscale: Option<String>,
    /// Handling of invalid dates in non-Gregorian calendars
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<Skip>,
}

impl Display for ValueRecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list<T: Display>(items: &[T]) -> String {
            items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        }

        let mut parts = Vec::new();
        if let Some(rscale) = &self.rscale {
            parts.push(format!("{KW_RRULE_RSCALE}={rscale}"));
        }
        if let Some(freq) = self.freq {
            parts.push(format!("{KW_RRULE_FREQ}={freq}"));
        }
        if let Some(until) = self.until {
            parts.push(format!("{KW_RRULE_UNTIL}={until}"));
        }
        if let Some(count) = self.count {
            parts.push(format!("{KW_RRULE_COUNT}={count}"));
        }
        if let Some(interval) = self.interval {
            parts.push(format!("{KW_RRULE_INTERVAL}={interval}"));
        }
        for (kw, values) in [
            (KW_RRULE_BYSECOND, list(&self.by_second)),
            (KW_RRULE_BYMINUTE, list(&self.by_minute)),
            (KW_RRULE_BYHOUR, list(&self.by_hour)),
            (KW_RRULE_BYDAY, list(&self.by_day)),
            (KW_RRULE_BYMONTHDAY, list(&self.by_month_day)),
            (KW_RRULE_BYYEARDAY, list(&self.by_year_day)),
            (KW_RRULE_BYWEEKNO, list(&self.by_week_no)),
            (KW_RRULE_BYMONTH, list(&self.by_month)),
            (KW_RRULE_BYSETPOS, list(&self.by_set_pos)),
        ] {
            if !values.is_empty() {
                parts.push(format!("{kw}={values}"));
            }
        }
        if let Some(wkst) = self.wkst {
            parts.push(format!("{KW_RRULE_WKST}={wkst}"));
        }
        if let Some(skip) = self.skip {
            parts.push(format!("{KW_RRULE_SKIP}={skip}"));
        }
        write!(f, "{}", parts.join(";"))
    }
}

/// Recurrence frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
#[expect(missing_docs)]
pub enum RecurrenceFrequency {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive)]
#[expect(missing_docs)]
pub enum WeekDay {
    #[strum(serialize = "SU")]
    Sunday,
    #[strum(serialize = "MO")]
    Monday,
    #[strum(serialize = "TU")]
    Tuesday,
    #[strum(serialize = "WE")]
    Wednesday,
    #[strum(serialize = "TH")]
    Thursday,
    #[strum(serialize = "FR")]
    Friday,
    #[strum(serialize = "SA")]
    Saturday,
}

/// Day of week with optional occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekDayNum {
    /// Day of the week
    pub day: WeekDay,
    /// Occurrence within the month or year (optional, may be negative)
    pub occurrence: Option<i8>,
}

impl Display for WeekDayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(occurrence) = self.occurrence {
            write!(f, "{occurrence}")?;
        }
        write!(f, "{}", self.day)
    }
}

/// Month number with the RFC 7529 leap-month marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthNum {
    /// Month, 1-12
    pub month: u8,
    /// Whether the leap variant of the month is meant (`L` suffix)
    pub leap: bool,
}

impl Display for MonthNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.month)?;
        if self.leap {
            write!(f, "L")?;
        }
        Ok(())
    }
}

/// RFC 7529 `SKIP` rule part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
#[expect(missing_docs)]
pub enum Skip {
    Omit,
    Backward,
    Forward,
}

/// Calendar systems accepted by `RSCALE` (CLDR identifiers).
const CALENDAR_SYSTEMS: &[&str] = &[
    "BUDDHIST",
    "CHINESE",
    "COPTIC",
    "DANGI",
    "ETHIOAA",
    "ETHIOPIC",
    "ETHIOPIC-AMETE-ALEM",
    "GREGORIAN",
    "GREGORY",
    "HEBREW",
    "INDIAN",
    "ISLAMIC",
    "ISLAMIC-CIVIL",
    "ISLAMICC",
    "ISLAMIC-RGSA",
    "ISLAMIC-TBLA",
    "ISLAMIC-UMALQURA",
    "ISO8601",
    "JAPANESE",
    "PERSIAN",
    "ROC",
];

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// recur           = recur-rule-part *( ";" recur-rule-part )
///                 ;
///                 ; The rule parts are not ordered in any
///                 ; particular sequence.
/// ```
///
/// Rule-part names and enumerated values are matched case-insensitively.
pub fn value_rrule<'src, I, E>() -> impl Parser<'src, I, ValueRecurrenceRule, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    recur_rule_part()
        .separated_by(just(';'))
        .at_least(1)
        .collect::<Vec<_>>()
        .map(build_from_parts)
}

fn build_from_parts(parts: Vec<Part>) -> ValueRecurrenceRule {
    let mut rule = ValueRecurrenceRule::default();
    for part in parts {
        match part {
            Part::Freq(v) => rule.freq = Some(v),
            Part::Until(v) => rule.until = Some(v),
            Part::Count(v) => rule.count = Some(v),
            Part::Interval(v) => rule.interval = Some(v),
            Part::BySecond(v) => rule.by_second = v,
            Part::ByMinute(v) => rule.by_minute = v,
            Part::ByHour(v) => rule.by_hour = v,
            Part::ByDay(v) => rule.by_day = v,
            Part::ByMonthDay(v) => rule.by_month_day = v,
            Part::ByYearDay(v) => rule.by_year_day = v,
            Part::ByWeekNo(v) => rule.by_week_no = v,
            Part::ByMonth(v) => rule.by_month = v,
            Part::BySetPos(v) => rule.by_set_pos = v,
            Part::Wkst(v) => rule.wkst = Some(v),
            Part::Rscale(v) => rule.rscale = Some(v),
            Part::Skip(v) => rule.skip = Some(v),
        }
    }
    rule
}

#[derive(Debug, Clone)]
enum Part {
    Freq(RecurrenceFrequency),
    Until(ValueDateOrDateTime),
    Count(u32),
    Interval(u32),
    BySecond(Vec<u8>),
    ByMinute(Vec<u8>),
    ByHour(Vec<u8>),
    ByDay(Vec<WeekDayNum>),
    ByMonthDay(Vec<i8>),
    ByYearDay(Vec<i16>),
    ByWeekNo(Vec<i8>),
    ByMonth(Vec<MonthNum>),
    BySetPos(Vec<i16>),
    Wkst(WeekDay),
    Rscale(String),
    Skip(Skip),
}

/// ```txt
/// recur-rule-part = ( "FREQ" "=" freq )
///                 / ( "UNTIL" "=" enddate )
///                 / ( "COUNT" "=" 1*DIGIT )
///                 / ( "INTERVAL" "=" 1*DIGIT )
///                 / ( "BYSECOND" "=" byseclist )
///                 / ( "BYMINUTE" "=" byminlist )
///                 / ( "BYHOUR" "=" byhrlist )
///                 / ( "BYDAY" "=" bywdaylist )
///                 / ( "BYMONTHDAY" "=" bymodaylist )
///                 / ( "BYYEARDAY" "=" byyrdaylist )
///                 / ( "BYWEEKNO" "=" bywknolist )
///                 / ( "BYMONTH" "=" bymolist )
///                 / ( "BYSETPOS" "=" bysplist )
///                 / ( "WKST" "=" weekday )
///                 / ( "RSCALE" "=" rscale )
///                 / ( "SKIP" "=" skip )
/// ```
fn recur_rule_part<'src, I, E>() -> impl Parser<'src, I, Part, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    // The whole name is read before comparing, so BYMONTH never matches a
    // prefix of BYMONTHDAY.
    let kw = |name: &'static str| {
        token::<I, E>()
            .try_map(move |s, span| {
                if s.eq_ignore_ascii_case(name) {
                    Ok(())
                } else {
                    Err(E::Error::expected_found([ValueExpected::RulePart], None, span))
                }
            })
            .then_ignore(just('='))
    };

    let freq = kw(KW_RRULE_FREQ)
        .ignore_then(keyword())
        .map(Part::Freq);

    // UNTIL can be a date or date-time
    let until = kw(KW_RRULE_UNTIL)
        .ignore_then(value_date_or_date_time())
        .map(Part::Until);

    let count = kw(KW_RRULE_COUNT)
        .ignore_then(u32_digits())
        .map(Part::Count);

    let interval = kw(KW_RRULE_INTERVAL)
        .ignore_then(u32_digits())
        .map(Part::Interval);

    // seconds = 1*2DIGIT ;0 to 60
    let by_second = kw(KW_RRULE_BYSECOND)
        .ignore_then(list(bounded(2, 0, 60)))
        .map(Part::BySecond);

    // minutes = 1*2DIGIT ;0 to 59
    let by_minute = kw(KW_RRULE_BYMINUTE)
        .ignore_then(list(bounded(2, 0, 59)))
        .map(Part::ByMinute);

    // hour = 1*2DIGIT ;0 to 23
    let by_hour = kw(KW_RRULE_BYHOUR)
        .ignore_then(list(bounded(2, 0, 23)))
        .map(Part::ByHour);

    let by_day = kw(KW_RRULE_BYDAY)
        .ignore_then(list(weekdaynum()))
        .map(Part::ByDay);

    // monthdaynum = [plus / minus] ordmoday ;1 to 31
    let by_month_day = kw(KW_RRULE_BYMONTHDAY)
        .ignore_then(list(signed(2, 1, 31)))
        .map(Part::ByMonthDay);

    // yeardaynum = [plus / minus] ordyrday ;1 to 366
    let by_year_day = kw(KW_RRULE_BYYEARDAY)
        .ignore_then(list(signed(3, 1, 366)))
        .map(Part::ByYearDay);

    // weeknum = [plus / minus] ordwk ;1 to 53
    let by_week_no = kw(KW_RRULE_BYWEEKNO)
        .ignore_then(list(signed(2, 1, 53)))
        .map(Part::ByWeekNo);

    let by_month = kw(KW_RRULE_BYMONTH)
        .ignore_then(list(monthnum()))
        .map(Part::ByMonth);

    // setposday = yeardaynum
    let by_set_pos = kw(KW_RRULE_BYSETPOS)
        .ignore_then(list(signed(3, 1, 366)))
        .map(Part::BySetPos);

    let wkst = kw(KW_RRULE_WKST).ignore_then(keyword()).map(Part::Wkst);

    let rscale = kw(KW_RRULE_RSCALE)
        .ignore_then(rscale())
        .map(Part::Rscale);

    let skip = kw(KW_RRULE_SKIP).ignore_then(keyword()).map(Part::Skip);

    choice((
        freq,
        until,
        count,
        interval,
        by_second,
        by_minute,
        by_hour,
        by_day,
        by_month_day,
        by_year_day,
        by_week_no,
        by_month,
        by_set_pos,
        wkst,
        rscale,
        skip,
    ))
}

fn list<'src, I, E, T>(item: impl Parser<'src, I, T, E>) -> impl Parser<'src, I, Vec<T>, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    item.separated_by(just(',')).at_least(1).collect()
}

/// ```txt
/// weekdaynum  = [[plus / minus] ordwk] weekday
/// ordwk       = 1*2DIGIT       ;1 to 53
/// ```
fn weekdaynum<'src, I, E>() -> impl Parser<'src, I, WeekDayNum, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    signed(2, 1, 53)
        .or_not()
        .then(keyword())
        .map(|(occurrence, day)| WeekDayNum { day, occurrence })
}

/// ```txt
/// monthnum    = 1*2DIGIT ["L"] ;1 to 12
/// ```
fn monthnum<'src, I, E>() -> impl Parser<'src, I, MonthNum, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    bounded(2, 1, 12)
        .then(choice((just('L'), just('l'))).or_not())
        .map(|(month, leap)| MonthNum {
            month,
            leap: leap.is_some(),
        })
}

/// ```txt
/// rscale      = (iana-token / x-name)
///             ; A CLDR-registered calendar system name
/// ```
fn rscale<'src, I, E>() -> impl Parser<'src, I, String, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    token().try_map(|s: String, span| {
        let upper = s.to_ascii_uppercase();
        if upper.starts_with(KW_X_PREFIX) || CALENDAR_SYSTEMS.contains(&upper.as_str()) {
            Ok(upper)
        } else {
            Err(E::Error::expected_found(
                [ValueExpected::CalendarScale],
                None,
                span,
            ))
        }
    })
}

/// Unsigned u32 (1 or more digits). Zero is accepted for COUNT and INTERVAL.
fn u32_digits<'src, I, E>() -> impl Parser<'src, I, u32, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    select! { c @ '0'..='9' => c }
        .repeated()
        .at_least(1)
        .at_most(10) // u32 max is 10 digits
        .collect::<String>()
        .try_map_with(|str, e| {
            lexical::parse::<u32, _>(&str)
                .map_err(|_| E::Error::expected_found([ValueExpected::U32], None, e.span()))
        })
}

#[cfg(test)]
mod tests {
    use chumsky::extra;

    use super::*;

    fn parse(src: &'_ str) -> Result<ValueRecurrenceRule, Vec<Rich<'_, char>>> {
        value_rrule::<'_, _, extra::Err<_>>()
            .parse(src)
            .into_result()
    }

    #[test]
    fn parses_rrule_freq_only() {
        for (src, expected) in [
            ("FREQ=SECONDLY", RecurrenceFrequency::Secondly),
            ("FREQ=MINUTELY", RecurrenceFrequency::Minutely),
            ("FREQ=HOURLY", RecurrenceFrequency::Hourly),
            ("FREQ=DAILY", RecurrenceFrequency::Daily),
            ("FREQ=WEEKLY", RecurrenceFrequency::Weekly),
            ("FREQ=MONTHLY", RecurrenceFrequency::Monthly),
            ("FREQ=YEARLY", RecurrenceFrequency::Yearly),
            ("freq=yearly", RecurrenceFrequency::Yearly),
        ] {
            let rule = parse(src).unwrap();
            assert_eq!(rule.freq, Some(expected), "Failed to parse: {src}");
        }
    }

    #[test]
    fn parses_rrule_weekly_mapping() {
        let rule = parse("FREQ=WEEKLY;BYDAY=MO,WE,FR;COUNT=10").unwrap();
        assert_eq!(rule.freq, Some(RecurrenceFrequency::Weekly));
        assert_eq!(rule.count, Some(10));
        let days: Vec<_> = rule.by_day.iter().map(|d| d.day).collect();
        assert_eq!(days, [WeekDay::Monday, WeekDay::Wednesday, WeekDay::Friday]);
        assert!(rule.by_day.iter().all(|d| d.occurrence.is_none()));
        assert_eq!(rule.to_string(), "FREQ=WEEKLY;COUNT=10;BYDAY=MO,WE,FR");
    }

    #[test]
    fn parses_rrule_with_until() {
        let rule = parse("FREQ=DAILY;UNTIL=19971224T000000Z").unwrap();
        assert!(matches!(
            rule.until,
            Some(ValueDateOrDateTime::DateTime(dt)) if dt.is_utc()
        ));

        let rule = parse("FREQ=DAILY;UNTIL=19971224").unwrap();
        assert!(matches!(rule.until, Some(ValueDateOrDateTime::Date(_))));
        assert_eq!(rule.to_string(), "FREQ=DAILY;UNTIL=19971224");
    }

    #[test]
    fn parses_rrule_with_byday_occurrence() {
        let rule = parse("FREQ=MONTHLY;BYDAY=1FR,-1SU,+2MO").unwrap();
        assert_eq!(
            rule.by_day,
            vec![
                WeekDayNum { day: WeekDay::Friday, occurrence: Some(1) },
                WeekDayNum { day: WeekDay::Sunday, occurrence: Some(-1) },
                WeekDayNum { day: WeekDay::Monday, occurrence: Some(2) },
            ]
        );
        assert_eq!(rule.to_string(), "FREQ=MONTHLY;BYDAY=1FR,-1SU,2MO");
    }

    #[test]
    fn parses_rrule_numeric_lists() {
        let rule = parse(
            "FREQ=YEARLY;BYSECOND=0,60;BYMINUTE=30;BYHOUR=8,9;BYMONTHDAY=-1,15;\
             BYYEARDAY=1,-366;BYWEEKNO=20,-53;BYMONTH=1,12;BYSETPOS=-1;WKST=SU",
        )
        .unwrap();
        assert_eq!(rule.by_second, vec![0, 60]);
        assert_eq!(rule.by_minute, vec![30]);
        assert_eq!(rule.by_hour, vec![8, 9]);
        assert_eq!(rule.by_month_day, vec![-1, 15]);
        assert_eq!(rule.by_year_day, vec![1, -366]);
        assert_eq!(rule.by_week_no, vec![20, -53]);
        assert_eq!(
            rule.by_month,
            vec![MonthNum { month: 1, leap: false }, MonthNum { month: 12, leap: false }]
        );
        assert_eq!(rule.by_set_pos, vec![-1]);
        assert_eq!(rule.wkst, Some(WeekDay::Sunday));
    }

    #[test]
    fn parses_rrule_rscale_extensions() {
        let rule = parse("RSCALE=chinese;FREQ=YEARLY;BYMONTH=5L;SKIP=FORWARD").unwrap();
        assert_eq!(rule.rscale.as_deref(), Some("CHINESE"));
        assert_eq!(rule.by_month, vec![MonthNum { month: 5, leap: true }]);
        assert_eq!(rule.skip, Some(Skip::Forward));
        assert_eq!(
            rule.to_string(),
            "RSCALE=CHINESE;FREQ=YEARLY;BYMONTH=5L;SKIP=FORWARD"
        );

        for scale in ["GREGORY", "ethiopic-amete-alem", "IslamicC"] {
            let rule = parse(&format!("RSCALE={scale};FREQ=YEARLY")).unwrap();
            let upper = scale.to_ascii_uppercase();
            assert_eq!(rule.rscale.as_deref(), Some(upper.as_str()));
            assert_eq!(rule.to_string(), format!("RSCALE={upper};FREQ=YEARLY"));
            assert_eq!(parse(&rule.to_string()).unwrap(), rule);
        }

        assert!(parse("RSCALE=X-MYCAL;FREQ=DAILY").is_ok());
        assert!(parse("RSCALE=MARTIAN;FREQ=DAILY").is_err());
    }

    #[test]
    fn parses_rrule_last_part_wins() {
        let rule = parse("FREQ=DAILY;COUNT=5;FREQ=WEEKLY;COUNT=2").unwrap();
        assert_eq!(rule.freq, Some(RecurrenceFrequency::Weekly));
        assert_eq!(rule.count, Some(2));
    }

    #[test]
    fn parses_rrule_zero_count_and_interval() {
        let rule = parse("FREQ=DAILY;COUNT=0;INTERVAL=0").unwrap();
        assert_eq!(rule.count, Some(0));
        assert_eq!(rule.interval, Some(0));
        assert_eq!(rule.to_string(), "FREQ=DAILY;COUNT=0;INTERVAL=0");
    }

    #[test]
    fn parses_rrule_handles_reordered_parts() {
        let rule = parse("COUNT=3;BYMONTHDAY=1;FREQ=MONTHLY").unwrap();
        assert_eq!(rule.freq, Some(RecurrenceFrequency::Monthly));
        assert_eq!(rule.by_month_day, vec![1]);
        assert_eq!(rule.count, Some(3));
    }

    #[test]
    fn parses_rrule_rejects_invalid() {
        let fail_cases = [
            "",
            "FREQ=FORTNIGHTLY",
            "FREQ=DAILY;",
            "FREQ=DAILY;COUNT=4294967296",
            "FREQ=DAILY;INTERVAL=",
            "FREQ=DAILY;BYHOUR=24",
            "FREQ=DAILY;BYMINUTE=60",
            "FREQ=DAILY;BYSECOND=61",
            "FREQ=MONTHLY;BYMONTHDAY=0",
            "FREQ=MONTHLY;BYMONTHDAY=32",
            "FREQ=YEARLY;BYMONTH=13",
            "FREQ=YEARLY;BYWEEKNO=54",
            "FREQ=YEARLY;BYYEARDAY=367",
            "FREQ=WEEKLY;BYDAY=XX",
            "FREQ=WEEKLY;BYDAY=54MO",
            "FREQ=WEEKLY;WKST=MONDAY",
            "FREQ=WEEKLY;SKIP=SIDEWAYS",
            "FREQ=WEEKLY;FOO=BAR",
            "FREQ=DAILY,COUNT=2",
        ];
        for src in fail_cases {
            assert!(parse(src).is_err(), "Parse {src} should fail");
        }
    }
}
