// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Values of the `VALUE` parameter, RFC 5545 Section 3.2.20.

use std::fmt;
use std::str::FromStr;

use crate::keyword::{
    KW_BINARY, KW_BOOLEAN, KW_CAL_ADDRESS, KW_DATE, KW_DATETIME, KW_DURATION, KW_FLOAT,
    KW_INTEGER, KW_PERIOD, KW_RECUR, KW_TEXT, KW_TIME, KW_URI, KW_UTC_OFFSET,
};
use crate::value::Grammar;

macro_rules! define_value_type {
    (
        $(#[$meta:meta])*
        enum $Name:ident {
            $(
                $Variant:ident => $kw:ident => $grammar:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[expect(missing_docs)]
        pub enum $Name {
            $(
                $Variant,
            )*
            /// Experimental or IANA-registered type unknown to this crate
            Unknown(String),
        }

        impl $Name {
            /// The grammar of values of this type, `None` for unknown types.
            #[must_use]
            pub const fn grammar(&self) -> Option<Grammar> {
                match self {
                    $(
                        Self::$Variant => Some($grammar),
                    )*
                    Self::Unknown(_) => None,
                }
            }
        }

        impl FromStr for $Name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($kw) {
                        return Ok(Self::$Variant);
                    }
                )*
                Ok(Self::Unknown(s.to_owned()))
            }
        }

        impl fmt::Display for $Name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(
                        Self::$Variant => $kw.fmt(f),
                    )*
                    Self::Unknown(s) => s.fmt(f),
                }
            }
        }
    };
}

define_value_type! {
    /// Explicit value type of a property, RFC 5545 Section 3.3.
    enum ValueType {
        Binary              => KW_BINARY      => Grammar::Binary,
        Boolean             => KW_BOOLEAN     => Grammar::Boolean,
        CalendarUserAddress => KW_CAL_ADDRESS => Grammar::CalAddress,
        Date                => KW_DATE        => Grammar::Date,
        DateTime            => KW_DATETIME    => Grammar::DateTime,
        Duration            => KW_DURATION    => Grammar::Duration,
        Float               => KW_FLOAT       => Grammar::Float,
        Integer             => KW_INTEGER     => Grammar::Integer,
        Period              => KW_PERIOD      => Grammar::Period,
        RecurrenceRule      => KW_RECUR       => Grammar::Recur,
        Text                => KW_TEXT        => Grammar::Text,
        Time                => KW_TIME        => Grammar::Time,
        Uri                 => KW_URI         => Grammar::Uri,
        UtcOffset           => KW_UTC_OFFSET  => Grammar::UtcOffset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_value_type() {
        let cases = [
            ("DATE-TIME", ValueType::DateTime, Some(Grammar::DateTime)),
            ("date", ValueType::Date, Some(Grammar::Date)),
            ("Cal-Address", ValueType::CalendarUserAddress, Some(Grammar::CalAddress)),
            ("RECUR", ValueType::RecurrenceRule, Some(Grammar::Recur)),
            ("utc-offset", ValueType::UtcOffset, Some(Grammar::UtcOffset)),
        ];
        for (src, expected, grammar) in cases {
            let value_type: ValueType = src.parse().unwrap();
            assert_eq!(value_type, expected);
            assert_eq!(value_type.grammar(), grammar);
            assert!(value_type.to_string().eq_ignore_ascii_case(src));
        }

        let unknown: ValueType = "X-CUSTOM".parse().unwrap();
        assert_eq!(unknown, ValueType::Unknown("X-CUSTOM".to_owned()));
        assert_eq!(unknown.grammar(), None);
        assert_eq!(unknown.to_string(), "X-CUSTOM");
    }
}
