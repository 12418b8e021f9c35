// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Selection of the grammar of a property value.
//!
//! The [`Dispatcher`] checks that a property may appear in its component,
//! picks the grammar from the property name and its `VALUE`, `ENCODING`,
//! `TZID` and `RELATED` parameters, and parses the raw value with it.

use std::sync::OnceLock;

use regex::Regex;

use crate::component::ComponentKind;
use crate::keyword::{
    KW_BINARY, KW_DURATION, KW_ENCODING, KW_ENCODING_BASE64, KW_RELATED, KW_TZID, KW_URI,
    KW_VALUE,
};
use crate::legality::{IllegalProperty, LegalityMatrix};
use crate::parameter::{self, Parameter, ValueType};
use crate::property::{Property, PropertyError, PropertyName, PropertyPayload};
use crate::tz::{SystemTimezones, TimezoneConverter, TimezoneResolver};
use crate::value::{
    self, Grammar, GrammarFailure, ParsedValue, RangeViolation, ValueDateTime, ValueError,
};

/// Structural inconsistency between a property, its parameters and its
/// component, detected before the value is parsed.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason} for property {property}, value {value:?}")]
pub struct DispatchFailure {
    /// Name of the offending property
    pub property: String,

    /// The raw value
    pub value: String,

    /// What is inconsistent
    pub reason: DispatchReason,
}

/// Reason of a [`DispatchFailure`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchReason {
    /// A required parameter is absent
    #[error("missing {parameter} parameter")]
    MissingParameter {
        /// Name of the parameter
        parameter: &'static str,
    },

    /// A parameter has a value other than the one required
    #[error("{parameter} parameter must be {expected}, found {found}")]
    MismatchedParameter {
        /// Name of the parameter
        parameter: &'static str,
        /// The required value
        expected: String,
        /// The value found
        found: String,
    },

    /// `TZID` inside a `STANDARD` or `DAYLIGHT` observance
    #[error("TZID parameter inside {component}")]
    TzidInObservance {
        /// The enclosing observance
        component: ComponentKind,
    },

    /// `RELATED` on a `TRIGGER` given as an absolute date-time
    #[error("RELATED parameter with a date-time trigger")]
    RelatedWithDateTime,
}

/// Error type returned by [`Dispatcher::resolve`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    /// The property is not permitted in the component
    #[error(transparent)]
    IllegalProperty(#[from] IllegalProperty),

    /// The parameters are inconsistent with the property or component
    #[error(transparent)]
    Dispatch(#[from] DispatchFailure),

    /// The value does not match the grammar
    #[error(transparent)]
    Grammar(#[from] GrammarFailure),

    /// The value is outside a semantic bound
    #[error(transparent)]
    Range(#[from] RangeViolation),

    /// The resolved value cannot form a property
    #[error(transparent)]
    Property(#[from] PropertyError),
}

impl From<ValueError> for ResolveError {
    fn from(err: ValueError) -> Self {
        match err {
            ValueError::Grammar(err) => Self::Grammar(err),
            ValueError::Range(err) => Self::Range(err),
        }
    }
}

/// How a raw value is to be read.
#[derive(Debug, Clone, Copy)]
enum Plan<'a> {
    /// Parse with a grammar.
    Parse(Grammar),
    /// Parse UTC date-times with a grammar, then convert them to the local
    /// time of a timezone.
    Zoned(Grammar, &'a str),
    /// Pass the text through unvalidated.
    Unvalidated,
}

/// Resolves raw property values into typed values.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher<R = SystemTimezones> {
    resolver: R,
}

impl Dispatcher {
    /// Creates a dispatcher resolving timezones from the IANA database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: TimezoneResolver> Dispatcher<R> {
    /// Creates a dispatcher resolving timezones with `resolver`.
    pub const fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// Resolves the raw value of property `name` inside `component`.
    ///
    /// The legality of the property is checked first, then the grammar is
    /// selected and the value parsed. A `TZID` that cannot be resolved is not
    /// an error: the value is returned as UTC, unconverted.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if the property is illegal in the component,
    /// the parameters are inconsistent, or the value is invalid.
    pub fn resolve(
        &self,
        name: &str,
        params: &[Parameter],
        component: ComponentKind,
        raw: &str,
    ) -> Result<ParsedValue, ResolveError> {
        let property = PropertyName::from(name);
        if let Err(err) = LegalityMatrix::check(&property, component) {
            tracing::debug!(%property, %component, "illegal property");
            return Err(err.into());
        }

        let plan = select(&property, params, component, raw).inspect_err(|err| {
            tracing::debug!(%property, %component, reason = %err.reason, "inconsistent property");
        })?;

        match plan {
            Plan::Parse(grammar) => {
                tracing::trace!(%property, %grammar, "selected grammar");
                Ok(value::parse(grammar, raw)?)
            }
            Plan::Zoned(grammar, tzid) => {
                tracing::trace!(%property, %grammar, tzid, "selected zoned grammar");
                let value = value::parse(grammar, raw)?;
                Ok(self.to_local(value, tzid))
            }
            Plan::Unvalidated => {
                tracing::debug!(%property, "no grammar known, passing value through");
                Ok(ParsedValue::Raw(raw.to_owned()))
            }
        }
    }

    /// Resolves the raw value and wraps it in a single-valued [`Property`].
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if the value cannot be resolved or the name
    /// or group is not a valid property name.
    pub fn property(
        &self,
        name: &str,
        group: Option<&str>,
        params: Vec<Parameter>,
        component: ComponentKind,
        raw: &str,
    ) -> Result<Property, ResolveError> {
        let value = self.resolve(name, &params, component, raw)?;
        let mut payload = PropertyPayload::new().params(params).value(value);
        if let Some(group) = group {
            payload = payload.group(group);
        }
        Ok(Property::new(name, payload)?)
    }

    fn to_local(&self, value: ParsedValue, tzid: &str) -> ParsedValue {
        let converter = match self.resolver.resolve(tzid) {
            Ok(converter) => converter,
            Err(err) => {
                tracing::warn!(tzid, %err, "unknown timezone, keeping UTC value");
                return match value {
                    ParsedValue::DateTime(dt) => ParsedValue::DateTime(dt.with_utc(true)),
                    ParsedValue::DateTimeList(list) => ParsedValue::DateTimeList(
                        list.into_iter().map(|dt| dt.with_utc(true)).collect(),
                    ),
                    value => value,
                };
            }
        };

        // Local years outside 0000-9999 cannot be written back as DATE-TIME
        let convert = |utc: ValueDateTime| {
            let local = converter.utc_to_local(utc);
            if (0..=9999).contains(&local.date.year) {
                local
            } else {
                tracing::warn!(tzid, value = %utc, "local year out of range, keeping UTC value");
                utc.with_utc(true)
            }
        };

        match value {
            ParsedValue::DateTime(dt) => ParsedValue::DateTime(convert(dt)),
            ParsedValue::DateTimeList(list) => {
                ParsedValue::DateTimeList(list.into_iter().map(convert).collect())
            }
            value => value,
        }
    }
}

fn select<'a>(
    property: &PropertyName,
    params: &'a [Parameter],
    component: ComponentKind,
    raw: &str,
) -> Result<Plan<'a>, DispatchFailure> {
    use PropertyName as P;

    let fail = |reason| DispatchFailure {
        property: property.to_string(),
        value: raw.to_owned(),
        reason,
    };
    let value_type = parameter::find(params, KW_VALUE).and_then(Parameter::value_type);
    let tzid = parameter::find(params, KW_TZID).and_then(Parameter::value);

    // Date-time properties honour VALUE=DATE and TZID
    let date_time = |single: bool| -> Result<Plan<'a>, DispatchFailure> {
        let (date, date_time) = if single {
            (Grammar::Date, Grammar::DateTime)
        } else {
            (Grammar::DateList, Grammar::DateTimeList)
        };
        match (&value_type, tzid) {
            (Some(ValueType::Date), _) => Ok(Plan::Parse(date)),
            (_, Some(_)) if component.is_observance() => {
                Err(fail(DispatchReason::TzidInObservance { component }))
            }
            (_, Some(tzid)) => Ok(Plan::Zoned(date_time, tzid)),
            (_, None) => Ok(Plan::Parse(date_time)),
        }
    };

    let plan = match property {
        P::CalScale => Plan::Parse(Grammar::CalendarScale),
        P::Method => Plan::Parse(Grammar::Method),
        P::Version => Plan::Parse(Grammar::Version),
        P::Attach => match value_type {
            Some(ValueType::Binary) => Plan::Parse(Grammar::Binary),
            _ => Plan::Parse(Grammar::Uri),
        },
        P::Image => match &value_type {
            None => {
                return Err(fail(DispatchReason::MissingParameter {
                    parameter: KW_VALUE,
                }));
            }
            Some(ValueType::Binary) => {
                match parameter::find(params, KW_ENCODING).and_then(Parameter::value) {
                    None => {
                        return Err(fail(DispatchReason::MissingParameter {
                            parameter: KW_ENCODING,
                        }));
                    }
                    Some(encoding) if !encoding.eq_ignore_ascii_case(KW_ENCODING_BASE64) => {
                        return Err(fail(DispatchReason::MismatchedParameter {
                            parameter: KW_ENCODING,
                            expected: KW_ENCODING_BASE64.to_owned(),
                            found: encoding.to_owned(),
                        }));
                    }
                    Some(_) => Plan::Parse(Grammar::Binary),
                }
            }
            Some(ValueType::Uri) => Plan::Parse(Grammar::Uri),
            Some(found) => {
                return Err(fail(DispatchReason::MismatchedParameter {
                    parameter: KW_VALUE,
                    expected: format!("{KW_BINARY} or {KW_URI}"),
                    found: found.to_string(),
                }));
            }
        },
        P::Categories | P::Resources => Plan::Parse(Grammar::TextList),
        P::Class => Plan::Parse(Grammar::Classification),
        P::Comment
        | P::Description
        | P::Location
        | P::Summary
        | P::TzId
        | P::TzName
        | P::Contact
        | P::RelatedTo
        | P::Uid
        | P::ProdId
        | P::Name => Plan::Parse(Grammar::Text),
        P::Geo => Plan::Parse(Grammar::Geo),
        P::PercentComplete => Plan::Parse(Grammar::PercentComplete),
        P::Priority => Plan::Parse(Grammar::Priority),
        P::Status => Plan::Parse(match component {
            ComponentKind::Event => Grammar::EventStatus,
            ComponentKind::Todo => Grammar::TodoStatus,
            ComponentKind::Journal => Grammar::JournalStatus,
            _ => Grammar::Text,
        }),
        P::Completed | P::Created | P::DtStamp | P::LastModified => {
            Plan::Parse(Grammar::DateTimeUtc)
        }
        P::DtEnd | P::DtStart | P::Due | P::RecurrenceId => match component {
            ComponentKind::Availability | ComponentKind::Available => {
                Plan::Parse(Grammar::DateTime)
            }
            ComponentKind::FreeBusy => Plan::Parse(Grammar::DateTimeUtc),
            _ => date_time(true)?,
        },
        P::ExDate => date_time(false)?,
        P::RDate => match value_type {
            Some(ValueType::Period) => Plan::Parse(Grammar::PeriodList),
            _ => date_time(false)?,
        },
        P::Trigger => {
            if value_type == Some(ValueType::DateTime) || looks_like_date_time(raw) {
                if parameter::find(params, KW_RELATED).is_some() {
                    return Err(fail(DispatchReason::RelatedWithDateTime));
                }
                Plan::Parse(Grammar::DateTimeUtc)
            } else {
                Plan::Parse(Grammar::Duration)
            }
        }
        P::Duration => Plan::Parse(Grammar::Duration),
        P::FreeBusy => Plan::Parse(Grammar::PeriodList),
        P::Transp => Plan::Parse(Grammar::Transparency),
        P::TzOffsetFrom | P::TzOffsetTo => Plan::Parse(Grammar::UtcOffset),
        P::TzUrl | P::Url | P::Source => Plan::Parse(Grammar::Uri),
        P::Conference => {
            require_value_type(value_type.as_ref(), &ValueType::Uri, KW_URI).map_err(fail)?;
            Plan::Parse(Grammar::Uri)
        }
        P::Attendee | P::Organizer => Plan::Parse(Grammar::CalAddress),
        P::RRule => Plan::Parse(Grammar::Recur),
        P::Action => Plan::Parse(Grammar::Action),
        P::Repeat | P::Sequence => Plan::Parse(Grammar::Integer),
        P::RequestStatus => Plan::Parse(Grammar::RequestStatus),
        P::BusyType => Plan::Parse(Grammar::BusyType),
        P::RefreshInterval => {
            require_value_type(value_type.as_ref(), &ValueType::Duration, KW_DURATION)
                .map_err(fail)?;
            Plan::Parse(Grammar::Duration)
        }
        P::Color => Plan::Parse(Grammar::Color),
        P::Extension(_) | P::Other(_) => match value_type.as_ref().and_then(ValueType::grammar) {
            Some(grammar) => Plan::Parse(grammar),
            None => Plan::Unvalidated,
        },
    };
    Ok(plan)
}

fn require_value_type(
    found: Option<&ValueType>,
    expected: &ValueType,
    keyword: &str,
) -> Result<(), DispatchReason> {
    match found {
        None => Err(DispatchReason::MissingParameter {
            parameter: KW_VALUE,
        }),
        Some(found) if found != expected => Err(DispatchReason::MismatchedParameter {
            parameter: KW_VALUE,
            expected: keyword.to_owned(),
            found: found.to_string(),
        }),
        Some(_) => Ok(()),
    }
}

/// Whether a `TRIGGER` value has the shape of a date-time.
fn looks_like_date_time(raw: &str) -> bool {
    const RE: &str = r"^\d{8}T";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());
    re.is_match(raw)
}
