// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Enumerated property values: classification, status, transparency, action,
//! method, calendar scale, busy type, color and request status.

use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::LazyLock;

use chumsky::Parser;
use chumsky::extra::ParserExtra;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use serde::Serialize;

use crate::value::miscellaneous::{ValueExpected, keyword};
use crate::value::text::{EscapedText, value_text};

/// Defines a vocabulary that also admits `x-name` and `iana-token` values.
///
/// Known keywords match case-insensitively and render upper-case; anything
/// else is kept verbatim in `Other`.
macro_rules! open_vocabulary {
    (
        $(#[$attr:meta])*
        $name:ident {
            $( $(#[$vattr:meta])* $variant:ident => $kw:literal, )+
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vattr])* $variant, )+
            /// Extension or IANA-registered value not known to this crate
            Other(String),
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($kw) {
                        return Ok(Self::$variant);
                    }
                )+
                Ok(Self::Other(s.to_owned()))
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( Self::$variant => f.write_str($kw), )+
                    Self::Other(s) => f.write_str(s),
                }
            }
        }
    };
}

open_vocabulary! {
    /// Access classification, RFC 5545 Section 3.8.1.3.
    ///
    /// ```txt
    /// classvalue = "PUBLIC" / "PRIVATE" / "CONFIDENTIAL" / iana-token
    ///            / x-name
    /// ```
    Classification {
        /// Public access
        Public => "PUBLIC",
        /// Private access
        Private => "PRIVATE",
        /// Confidential access
        Confidential => "CONFIDENTIAL",
    }
}

open_vocabulary! {
    /// Alarm action, RFC 5545 Section 3.8.6.1.
    ///
    /// ```txt
    /// actionvalue = "AUDIO" / "DISPLAY" / "EMAIL" / iana-token / x-name
    /// ```
    Action {
        /// Play a sound
        Audio => "AUDIO",
        /// Display a text
        Display => "DISPLAY",
        /// Send an email
        Email => "EMAIL",
    }
}

open_vocabulary! {
    /// Busy time type, RFC 7953 Section 3.2.1.
    ///
    /// ```txt
    /// busytypevalue = "BUSY" / "BUSY-UNAVAILABLE" / "BUSY-TENTATIVE"
    ///               / iana-token / x-name
    /// ```
    BusyType {
        /// Busy
        Busy => "BUSY",
        /// Unavailable
        BusyUnavailable => "BUSY-UNAVAILABLE",
        /// Tentatively busy
        BusyTentative => "BUSY-TENTATIVE",
    }
}

/// Status of a `VEVENT`, RFC 5545 Section 3.8.1.11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING-KEBAB-CASE")]
#[expect(missing_docs)]
pub enum EventStatus {
    Tentative,
    Confirmed,
    Cancelled,
}

/// Status of a `VTODO`, RFC 5545 Section 3.8.1.11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING-KEBAB-CASE")]
#[expect(missing_docs)]
pub enum TodoStatus {
    NeedsAction,
    Completed,
    InProcess,
    Cancelled,
}

/// Status of a `VJOURNAL`, RFC 5545 Section 3.8.1.11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING-KEBAB-CASE")]
#[expect(missing_docs)]
pub enum JournalStatus {
    Draft,
    Final,
    Cancelled,
}

/// Time transparency, RFC 5545 Section 3.8.2.7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING-KEBAB-CASE")]
pub enum Transparency {
    /// Blocks or opaque on busy time searches
    Opaque,
    /// Transparent on busy time searches
    Transparent,
}

/// iTIP method, RFC 5546 Section 1.4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING-KEBAB-CASE")]
#[expect(missing_docs)]
pub enum Method {
    Publish,
    Request,
    Reply,
    Add,
    Cancel,
    Refresh,
    Counter,
    #[strum(serialize = "DECLINECOUNTER")]
    DeclineCounter,
}

/// Calendar scale, RFC 5545 Section 3.7.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING-KEBAB-CASE")]
pub enum CalendarScale {
    /// The Gregorian calendar
    Gregorian,
}

/// Parses one keyword of the given vocabulary.
pub fn value_keyword<'src, I, E, T>() -> impl Parser<'src, I, T, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
    T: FromStr,
{
    keyword()
}

/// CSS3 color keywords, as referenced by RFC 7986 Section 5.9.
const CSS3_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "red", "rosybrown", "royalblue", "saddlebrown", "salmon",
    "sandybrown", "seagreen", "seashell", "sienna", "silver", "skyblue", "slateblue",
    "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan", "teal", "thistle",
    "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
];

/// A CSS3 color name, stored lower-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// The color keyword.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Color {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if CSS3_COLORS.contains(&lower.as_str()) {
            Ok(Self(lower))
        } else {
            Err(())
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ```txt
/// color = <a CSS3 color keyword, case-insensitive>
/// ```
pub fn value_color<'src, I, E>() -> impl Parser<'src, I, Color, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    keyword()
}

/// Request status, RFC 5545 Section 3.8.8.3.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RequestStatus {
    /// Hierarchical status code, such as `2.0` or `3.1.1`
    pub code: String,
    /// Status description, unescaped
    pub description: String,
    /// Exception data, unescaped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

/// Registered `major.minor` request-status codes, RFC 5545 Section 3.8.8.3
/// and RFC 5546 Section 3.6.
static REGISTERED_STATUS_CODES: LazyLock<HashSet<String>> = LazyLock::new(|| {
    [(2, 0..=11), (3, 0..=14), (4, 0..=0), (5, 0..=3)]
        .into_iter()
        .flat_map(|(major, minors)| minors.map(move |minor| format!("{major}.{minor}")))
        .collect()
});

impl RequestStatus {
    /// Whether the `major.minor` prefix of the code is registered.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        let prefix = match self.code.match_indices('.').nth(1) {
            Some((i, _)) => self.code.get(..i).unwrap_or(&self.code),
            None => &self.code,
        };
        REGISTERED_STATUS_CODES.contains(prefix)
    }
}

impl Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.code, EscapedText(&self.description))?;
        if let Some(extra) = &self.extra {
            write!(f, ";{}", EscapedText(extra))?;
        }
        Ok(())
    }
}

/// ```txt
/// rstatus    = statcode ";" statdesc [";" extdata]
///
/// statcode   = 1DIGIT 1*2("." 1*2DIGIT)
/// statdesc   = text
/// extdata    = text
/// ```
pub fn value_request_status<'src, I, E>() -> impl Parser<'src, I, RequestStatus, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    let digit = select! { c @ '0'..='9' => c };
    let level = just('.').ignore_then(digit.repeated().at_least(1).at_most(2).collect::<String>());
    let code = digit
        .then(level.repeated().at_least(1).at_most(2).collect::<Vec<_>>())
        .map(|(major, levels)| {
            let mut code = major.to_string();
            for level in levels {
                code.push('.');
                code.push_str(&level);
            }
            code
        });

    code.then_ignore(just(';'))
        .then(value_text())
        .then(just(';').ignore_then(value_text()).or_not())
        .map(|((code, description), extra)| RequestStatus {
            code,
            description,
            extra,
        })
}
