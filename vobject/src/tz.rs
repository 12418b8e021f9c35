// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Timezone resolution for `TZID`-qualified date-time values.

use jiff::tz::TimeZone;

use crate::value::ValueDateTime;

/// The timezone identifier is unknown to the resolver.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("timezone not found: {tzid}")]
pub struct TimezoneNotFound {
    /// The unresolved identifier
    pub tzid: String,
}

impl TimezoneNotFound {
    /// Creates the error for `tzid`.
    pub fn new(tzid: impl Into<String>) -> Self {
        Self { tzid: tzid.into() }
    }
}

/// Converts UTC date-times into the local time of one timezone.
pub trait TimezoneConverter {
    /// Converts a UTC date-time to local time.
    ///
    /// The result is a local (floating) date-time.
    fn utc_to_local(&self, utc: ValueDateTime) -> ValueDateTime;
}

/// Resolves timezone identifiers into converters.
pub trait TimezoneResolver {
    /// The converter returned for a resolved timezone.
    type Converter: TimezoneConverter;

    /// Resolves the timezone named `tzid`.
    ///
    /// # Errors
    ///
    /// Returns [`TimezoneNotFound`] if `tzid` is not a known timezone.
    fn resolve(&self, tzid: &str) -> Result<Self::Converter, TimezoneNotFound>;
}

impl<R: TimezoneResolver + ?Sized> TimezoneResolver for &R {
    type Converter = R::Converter;

    fn resolve(&self, tzid: &str) -> Result<Self::Converter, TimezoneNotFound> {
        (**self).resolve(tzid)
    }
}

/// Resolver backed by the IANA time zone database bundled with `jiff`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimezones;

impl TimezoneResolver for SystemTimezones {
    type Converter = TimeZone;

    fn resolve(&self, tzid: &str) -> Result<TimeZone, TimezoneNotFound> {
        TimeZone::get(tzid).map_err(|_| TimezoneNotFound::new(tzid))
    }
}

impl TimezoneConverter for TimeZone {
    fn utc_to_local(&self, utc: ValueDateTime) -> ValueDateTime {
        match TimeZone::UTC.to_timestamp(utc.civil_date_time()) {
            Ok(timestamp) => ValueDateTime::from_civil(self.to_datetime(timestamp), false),
            Err(err) => {
                tracing::warn!(value = %utc, %err, "cannot convert date-time, keeping UTC");
                utc.with_utc(true)
            }
        }
    }
}
