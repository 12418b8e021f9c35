// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property parameters as defined in RFC 5545 Section 3.2.

mod value_type;

use std::cmp::Ordering;
use std::fmt::{self, Write};

use chumsky::prelude::*;

pub use value_type::ValueType;

use crate::keyword::KW_VALUE;

/// A property parameter: a name with one or more values.
#[derive(Debug, Clone)]
pub struct Parameter {
    /// Parameter name, as given
    pub name: String,

    /// Parameter values, unquoted
    pub values: Vec<String>,
}

impl Parameter {
    /// Creates a single-valued parameter.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: vec![value.into()],
        }
    }

    /// Creates a multi-valued parameter.
    pub fn with_values<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a `NAME=value[,value...]` parameter.
    ///
    /// ```txt
    /// param         = param-name "=" param-value *("," param-value)
    /// param-name    = iana-token / x-name
    /// param-value   = paramtext / quoted-string
    /// paramtext     = *SAFE-CHAR
    /// quoted-string = DQUOTE *QSAFE-CHAR DQUOTE
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if `src` is not a valid parameter.
    pub fn parse(src: &str) -> Result<Self, ParameterError> {
        parameter::<extra::Err<Rich<'_, char>>>()
            .parse(src)
            .into_result()
            .map_err(|errs| ParameterError {
                text: src.to_owned(),
                reason: errs
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            })
    }

    /// Whether the parameter has the given name, ignoring case.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// The first value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// The value parsed as a `VALUE` parameter, if this is one.
    #[must_use]
    pub fn value_type(&self) -> Option<ValueType> {
        if !self.is(KW_VALUE) {
            return None;
        }
        let value = self.value()?;
        value.parse().ok()
    }

    /// Canonical text: upper-cased name and sorted values.
    #[must_use]
    pub fn canonical(&self) -> String {
        let mut values: Vec<&str> = self.values.iter().map(String::as_str).collect();
        values.sort_unstable();

        let mut s = self.name.to_ascii_uppercase();
        s.push('=');
        let _ = write_values(&mut s, values);
        s
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.name)?;
        write_values(f, self.values.iter().map(String::as_str))
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Parameter {}

impl PartialOrd for Parameter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Parameter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

/// Finds the parameter named `name`, ignoring case.
#[must_use]
pub fn find<'a>(params: &'a [Parameter], name: &str) -> Option<&'a Parameter> {
    params.iter().find(|p| p.is(name))
}

/// The parameter text is malformed.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid parameter {text:?}: {reason}")]
pub struct ParameterError {
    /// The offending text
    pub text: String,

    /// Rendered parser diagnostics
    pub reason: String,
}

fn write_values<'a>(w: &mut impl Write, values: impl IntoIterator<Item = &'a str>) -> fmt::Result {
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            w.write_char(',')?;
        }
        if value.contains([':', ';', ',']) {
            write!(w, "\"{}\"", CaretEncoded(value))?;
        } else {
            write!(w, "{}", CaretEncoded(value))?;
        }
    }
    Ok(())
}

/// RFC 6868 caret encoding of a parameter value.
struct CaretEncoded<'a>(&'a str);

impl fmt::Display for CaretEncoded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '^' => f.write_str("^^")?,
                '"' => f.write_str("^'")?,
                '\n' => f.write_str("^n")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

fn parameter<'src, E>() -> impl Parser<'src, &'src str, Parameter, E>
where
    E: extra::ParserExtra<'src, &'src str>,
{
    let name = any()
        .filter(|c: &char| c.is_ascii_alphanumeric() || *c == '-')
        .repeated()
        .at_least(1)
        .collect::<String>();

    // RFC 6868: ^' is a DQUOTE, ^n a newline and ^^ a caret. Any other
    // caret is literal.
    let caret = just('^')
        .ignore_then(select! {
            '\'' => '"',
            'n' => '\n',
            'N' => '\n',
            '^' => '^',
        })
        .or(just('^'));

    // SAFE-CHAR = WSP / %x21 / %x23-2B / %x2D-39 / %x3C-7E / NON-US-ASCII
    let paramtext = choice((
        caret.clone(),
        any().filter(|c: &char| !matches!(c, '"' | ';' | ':' | ',' | '^') && !is_control(*c)),
    ))
    .repeated()
    .collect::<String>();

    // QSAFE-CHAR = WSP / %x21 / %x23-7E / NON-US-ASCII
    let quoted = choice((
        caret,
        any().filter(|c: &char| !matches!(c, '"' | '^') && !is_control(*c)),
    ))
    .repeated()
    .collect::<String>()
    .delimited_by(just('"'), just('"'));

    let value = choice((quoted, paramtext));

    name.then_ignore(just('='))
        .then(value.separated_by(just(',')).at_least(1).collect())
        .map(|(name, values)| Parameter { name, values })
}

fn is_control(c: char) -> bool {
    c != '\t' && c.is_control()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_parameter() {
        #[rustfmt::skip]
        let success_cases = [
            ("VALUE=DATE", "VALUE", vec!["DATE"]),
            ("TZID=America/New_York", "TZID", vec!["America/New_York"]),
            ("tzid=\"Europe/Berlin\"", "tzid", vec!["Europe/Berlin"]),
            ("MEMBER=\"mailto:a@example.com\",\"mailto:b@example.com\"", "MEMBER", vec!["mailto:a@example.com", "mailto:b@example.com"]),
            ("X-EMPTY=", "X-EMPTY", vec![""]),
            ("CN=John Smith", "CN", vec!["John Smith"]),
        ];
        for (src, name, values) in success_cases {
            let param = Parameter::parse(src).unwrap();
            assert_eq!(param.name, name);
            assert_eq!(param.values, values);
        }

        let fail_cases = ["VALUE", "=DATE", "CN=a:b", "CN=\"unterminated", "X_Y=1"];
        for src in fail_cases {
            assert!(Parameter::parse(src).is_err(), "Parse {src} should fail");
        }
    }

    #[test]
    fn renders_parameter() {
        let param = Parameter::with_values(
            "delegated-to",
            ["mailto:b@example.com", "mailto:a@example.com"],
        );
        assert_eq!(
            param.to_string(),
            "delegated-to=\"mailto:b@example.com\",\"mailto:a@example.com\""
        );
        assert_eq!(
            param.canonical(),
            "DELEGATED-TO=\"mailto:a@example.com\",\"mailto:b@example.com\""
        );
        assert_eq!(Parameter::parse(&param.to_string()).unwrap(), param);
    }

    #[test]
    fn caret_encodes_parameter_values() {
        let param = Parameter::new("CN", "George \"Bud\" Herman");
        assert_eq!(param.to_string(), "CN=George ^'Bud^' Herman");
        assert_eq!(Parameter::parse(&param.to_string()).unwrap(), param);

        let param = Parameter::new("X-ADDRESS", "Main St. 1\nSuite ^2, Springfield");
        assert_eq!(
            param.canonical(),
            "X-ADDRESS=\"Main St. 1^nSuite ^^2, Springfield\""
        );
        assert_eq!(Parameter::parse(&param.canonical()).unwrap(), param);

        let cases = [
            ("CN=^'quoted^'", "\"quoted\""),
            ("CN=\"a^N^^b\"", "a\n^b"),
            ("CN=x^y", "x^y"),
            ("CN=trailing^", "trailing^"),
        ];
        for (src, value) in cases {
            assert_eq!(Parameter::parse(src).unwrap().value(), Some(value), "{src}");
        }
    }

    #[test]
    fn orders_parameters() {
        let mut params = vec![
            Parameter::new("VALUE", "DATE"),
            Parameter::new("tzid", "UTC"),
            Parameter::new("ENCODING", "BASE64"),
        ];
        params.sort();
        let names: Vec<_> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["ENCODING", "tzid", "VALUE"]);

        assert_eq!(Parameter::new("value", "DATE"), Parameter::new("VALUE", "DATE"));
        assert_ne!(Parameter::new("VALUE", "date"), Parameter::new("VALUE", "DATE"));
    }

    #[test]
    fn finds_parameters() {
        let params = [Parameter::new("Value", "binary"), Parameter::new("ENCODING", "BASE64")];
        assert_eq!(find(&params, "VALUE").and_then(Parameter::value), Some("binary"));
        assert_eq!(
            find(&params, "value").and_then(Parameter::value_type),
            Some(ValueType::Binary)
        );
        assert!(find(&params, "TZID").is_none());
        assert_eq!(find(&params, "ENCODING").and_then(Parameter::value_type), None);
    }
}
