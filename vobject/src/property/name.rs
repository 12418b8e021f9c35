// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property names.
//!
//! This module defines the `PropertyName` enum that represents all standard
//! properties of RFC 5545 and the extension RFCs handled by this crate.

use std::fmt;

use crate::keyword::{
    KW_ACTION, KW_ATTACH, KW_ATTENDEE, KW_BUSYTYPE, KW_CALSCALE, KW_CATEGORIES, KW_CLASS,
    KW_COLOR, KW_COMMENT, KW_COMPLETED, KW_CONFERENCE, KW_CONTACT, KW_CREATED, KW_DESCRIPTION,
    KW_DTEND, KW_DTSTAMP, KW_DTSTART, KW_DUE, KW_DURATION, KW_EXDATE, KW_FREEBUSY, KW_GEO,
    KW_IMAGE, KW_LAST_MODIFIED, KW_LOCATION, KW_METHOD, KW_NAME, KW_ORGANIZER,
    KW_PERCENT_COMPLETE, KW_PRIORITY, KW_PRODID, KW_RDATE, KW_RECURRENCE_ID, KW_REFRESH_INTERVAL,
    KW_RELATED_TO, KW_REPEAT, KW_REQUEST_STATUS, KW_RESOURCES, KW_RRULE, KW_SEQUENCE, KW_SOURCE,
    KW_STATUS, KW_SUMMARY, KW_TRANSP, KW_TRIGGER, KW_TZID, KW_TZNAME, KW_TZOFFSETFROM,
    KW_TZOFFSETTO, KW_TZURL, KW_UID, KW_URL, KW_VERSION, KW_X_PREFIX,
};

/// Macro to define `PropertyName` from the property keywords.
///
/// Usage: `property_name!(Variant => KW, ...)`
macro_rules! property_name {
    (
        $(
            $(#[$attr:meta])*
            $variant:ident => $kw:ident $(,)?
        )*
    ) => {
        /// Name of a property.
        ///
        /// Names are case-insensitive and `_` is accepted in place of `-`;
        /// conversion from text normalizes both.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[expect(missing_docs)]
        pub enum PropertyName {
            $(
                $(#[$attr])*
                $variant,
            )*
            /// Experimental x-name property, starting with "X-"
            Extension(String),
            /// Property name not known to this crate
            Other(String),
        }

        impl PropertyName {
            /// The canonical, upper-case name.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(PropertyName::$variant => $kw,)*
                    PropertyName::Extension(s) | PropertyName::Other(s) => s,
                }
            }
        }

        impl From<&str> for PropertyName {
            fn from(name: &str) -> Self {
                // Property names are case-insensitive per RFC 5545
                let normalized = name.to_ascii_uppercase().replace('_', "-");
                let known = match normalized.as_str() {
                    $(
                        $kw => Some(PropertyName::$variant),
                    )*
                    _ => None,
                };
                match known {
                    Some(known) => known,
                    None if normalized.starts_with(KW_X_PREFIX) => {
                        PropertyName::Extension(normalized)
                    }
                    None => PropertyName::Other(normalized),
                }
            }
        }

        #[cfg(test)]
        const NAMES: &[PropertyName] = &[
            $(
                PropertyName::$variant,
            )*
        ];
    };
}

property_name! {
    // RFC 5545 Section 3.7, calendar properties
    CalScale    => KW_CALSCALE,
    Method      => KW_METHOD,
    ProdId      => KW_PRODID,
    Version     => KW_VERSION,
    // RFC 5545 Section 3.8.1, descriptive properties
    Attach      => KW_ATTACH,
    Categories  => KW_CATEGORIES,
    Class       => KW_CLASS,
    Comment     => KW_COMMENT,
    Description => KW_DESCRIPTION,
    Geo         => KW_GEO,
    Location    => KW_LOCATION,
    PercentComplete => KW_PERCENT_COMPLETE,
    Priority    => KW_PRIORITY,
    Resources   => KW_RESOURCES,
    Status      => KW_STATUS,
    Summary     => KW_SUMMARY,
    // RFC 5545 Section 3.8.2, date and time properties
    Completed   => KW_COMPLETED,
    DtEnd       => KW_DTEND,
    Due         => KW_DUE,
    DtStart     => KW_DTSTART,
    Duration    => KW_DURATION,
    FreeBusy    => KW_FREEBUSY,
    Transp      => KW_TRANSP,
    // RFC 5545 Section 3.8.3, time zone properties
    TzId        => KW_TZID,
    TzName      => KW_TZNAME,
    TzOffsetFrom => KW_TZOFFSETFROM,
    TzOffsetTo  => KW_TZOFFSETTO,
    TzUrl       => KW_TZURL,
    // RFC 5545 Section 3.8.4, relationship properties
    Attendee    => KW_ATTENDEE,
    Contact     => KW_CONTACT,
    Organizer   => KW_ORGANIZER,
    RecurrenceId => KW_RECURRENCE_ID,
    RelatedTo   => KW_RELATED_TO,
    Url         => KW_URL,
    Uid         => KW_UID,
    // RFC 5545 Section 3.8.5, recurrence properties
    ExDate      => KW_EXDATE,
    RDate       => KW_RDATE,
    RRule       => KW_RRULE,
    // RFC 5545 Section 3.8.6, alarm properties
    Action      => KW_ACTION,
    Repeat      => KW_REPEAT,
    Trigger     => KW_TRIGGER,
    // RFC 5545 Section 3.8.7, change management properties
    Created     => KW_CREATED,
    DtStamp     => KW_DTSTAMP,
    LastModified => KW_LAST_MODIFIED,
    Sequence    => KW_SEQUENCE,
    // RFC 5545 Section 3.8.8, miscellaneous properties
    RequestStatus => KW_REQUEST_STATUS,
    // RFC 7953
    BusyType    => KW_BUSYTYPE,
    // RFC 7986
    Name        => KW_NAME,
    RefreshInterval => KW_REFRESH_INTERVAL,
    Source      => KW_SOURCE,
    Color       => KW_COLOR,
    Image       => KW_IMAGE,
    Conference  => KW_CONFERENCE,
}

impl PropertyName {
    /// Whether this is an experimental x-name property.
    #[must_use]
    pub const fn is_extension(&self) -> bool {
        matches!(self, Self::Extension(_))
    }
}

impl From<String> for PropertyName {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_names() {
        for name in NAMES {
            assert_eq!(&PropertyName::from(name.as_str()), name);
            assert_eq!(&PropertyName::from(name.as_str().to_lowercase()), name);
        }

        let cases = [
            ("percent_complete", PropertyName::PercentComplete),
            ("Recurrence-Id", PropertyName::RecurrenceId),
            ("REQUEST_STATUS", PropertyName::RequestStatus),
            ("x-wr-calname", PropertyName::Extension("X-WR-CALNAME".to_owned())),
            ("X_ABC_FOO", PropertyName::Extension("X-ABC-FOO".to_owned())),
            ("FN", PropertyName::Other("FN".to_owned())),
        ];
        for (src, expected) in cases {
            assert_eq!(PropertyName::from(src), expected);
        }
    }

    #[test]
    fn renders_canonical_names() {
        assert_eq!(PropertyName::from("last_modified").to_string(), "LAST-MODIFIED");
        assert_eq!(PropertyName::from("x-foo").to_string(), "X-FOO");
        assert!(PropertyName::from("x-foo").is_extension());
        assert!(!PropertyName::from("FOO").is_extension());
    }
}
