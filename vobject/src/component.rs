// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Kinds of the components that enclose properties.

use std::fmt;
use std::str::FromStr;

use crate::keyword::{
    KW_AVAILABLE, KW_DAYLIGHT, KW_STANDARD, KW_VALARM, KW_VAVAILABILITY, KW_VCALENDAR, KW_VCARD,
    KW_VEVENT, KW_VFREEBUSY, KW_VJOURNAL, KW_VTIMEZONE, KW_VTODO,
};

macro_rules! component_kind {
    (
        $(#[$attr:meta])*
        enum $ty:ident {
            $(
                $(#[$vattr:meta])*
                $variant:ident => $kw:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $ty {
            $(
                $(#[$vattr])*
                $variant,
            )+
        }

        impl $ty {
            /// Returns the name keyword of the component
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $kw,
                    )+
                }
            }
        }

        impl FromStr for $ty {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($kw) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(())
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.name().fmt(f)
            }
        }
    };
}

component_kind! {
    /// Component enclosing a property.
    enum ComponentKind {
        /// `VEVENT`, RFC 5545 Section 3.6.1
        Event => KW_VEVENT,
        /// `VTODO`, RFC 5545 Section 3.6.2
        Todo => KW_VTODO,
        /// `VJOURNAL`, RFC 5545 Section 3.6.3
        Journal => KW_VJOURNAL,
        /// `VFREEBUSY`, RFC 5545 Section 3.6.4
        FreeBusy => KW_VFREEBUSY,
        /// `VTIMEZONE`, RFC 5545 Section 3.6.5
        Timezone => KW_VTIMEZONE,
        /// `STANDARD` observance of a `VTIMEZONE`
        Standard => KW_STANDARD,
        /// `DAYLIGHT` observance of a `VTIMEZONE`
        Daylight => KW_DAYLIGHT,
        /// `VALARM`, RFC 5545 Section 3.6.6
        Alarm => KW_VALARM,
        /// `VAVAILABILITY`, RFC 7953 Section 3.1
        Availability => KW_VAVAILABILITY,
        /// `AVAILABLE` sub-component of a `VAVAILABILITY`
        Available => KW_AVAILABLE,
        /// The `VCALENDAR` object itself
        Calendar => KW_VCALENDAR,
        /// A `VCARD` object
        Card => KW_VCARD,
    }
}

impl ComponentKind {
    /// Whether the component has a fixed set of legal properties.
    #[must_use]
    pub const fn is_checked(self) -> bool {
        !matches!(self, Self::Calendar | Self::Card)
    }

    /// Whether this is a timezone observance, `STANDARD` or `DAYLIGHT`.
    #[must_use]
    pub const fn is_observance(self) -> bool {
        matches!(self, Self::Standard | Self::Daylight)
    }

    /// Whether this is a component of RFC 7953 calendar availability.
    #[must_use]
    pub const fn is_availability(self) -> bool {
        matches!(self, Self::Availability | Self::Available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_component_kind() {
        let success_cases = [
            ("VEVENT", ComponentKind::Event),
            ("vtodo", ComponentKind::Todo),
            ("Standard", ComponentKind::Standard),
            ("VAVAILABILITY", ComponentKind::Availability),
            ("VCARD", ComponentKind::Card),
        ];
        for (src, expected) in success_cases {
            assert_eq!(src.parse(), Ok(expected));
            assert!(expected.to_string().eq_ignore_ascii_case(src));
        }

        assert_eq!("EVENT".parse::<ComponentKind>(), Err(()));
        assert_eq!("X-COMPONENT".parse::<ComponentKind>(), Err(()));
    }

    #[test]
    fn classifies_component_kind() {
        assert!(ComponentKind::Event.is_checked());
        assert!(!ComponentKind::Calendar.is_checked());
        assert!(!ComponentKind::Card.is_checked());
        assert!(ComponentKind::Daylight.is_observance());
        assert!(!ComponentKind::Timezone.is_observance());
        assert!(ComponentKind::Available.is_availability());
    }
}
