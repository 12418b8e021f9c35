// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Text values as defined in RFC 5545 Section 3.3.11.

use std::fmt::{self, Write};

use chumsky::Parser;
use chumsky::extra::ParserExtra;
use chumsky::prelude::*;

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// text       = *(TSAFE-CHAR / ":" / DQUOTE / ESCAPED-CHAR)
///    ; Folded according to description above
///
/// ESCAPED-CHAR = ("\\" / "\;" / "\," / "\N" / "\n")
///    ; \\ encodes \, \N or \n encodes newline
///    ; \; encodes ;, \, encodes ,
///
/// TSAFE-CHAR = WSP / %x21 / %x23-2B / %x2D-39 / %x3C-5B /
///              %x5D-7E / NON-US-ASCII
///    ; Any character except CONTROLs not needed by the current
///    ; character set, DQUOTE, ";", ":", "\", ","
/// ```
///
/// The parsed value is the unescaped text.
pub fn value_text<'src, I, E>() -> impl Parser<'src, I, String, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    let safe = select! { c if is_text_safe(c) => c };

    let escaped = just('\\').ignore_then(select! {
        ';' => ';',
        ',' => ',',
        'N' => '\n',
        'n' => '\n',
        '\\' => '\\',
    });

    choice((safe, escaped)).repeated().collect()
}

/// Text multiple values parser.
///
/// If the property permits, multiple TEXT values are specified by a
/// COMMA-separated list of values.
pub fn values_text<'src, I, E>() -> impl Parser<'src, I, Vec<String>, E> + Clone
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    value_text().separated_by(just(',')).at_least(1).collect()
}

fn is_text_safe(c: char) -> bool {
    match c {
        '\t' => true,
        ';' | ',' | '\\' => false,
        c => !c.is_control(),
    }
}

/// Text escaped for the wire, the inverse of [`value_text`].
#[derive(Debug, Clone, Copy)]
pub struct EscapedText<'a>(pub &'a str);

impl fmt::Display for EscapedText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                ';' => f.write_str("\\;")?,
                ',' => f.write_str("\\,")?,
                '\n' => f.write_str("\\n")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chumsky::input::Stream;

    use super::*;

    fn parse(src: &str) -> Result<String, Vec<Rich<'_, char>>> {
        let stream = Stream::from_iter(src.chars());
        value_text::<'_, _, extra::Err<_>>()
            .parse(stream)
            .into_result()
    }

    #[test]
    fn parses_text() {
        let success_cases = [
            // examples from RFC 5545 Section 3.3.11
            (
                r"Project XYZ Final Review\nConference Room - 3B\nCome Prepared.",
                "Project XYZ Final Review\nConference Room - 3B\nCome Prepared.",
            ),
            // extra tests
            (r"Hello\, World\; \N", "Hello, World; \n"),
            (r#""Quoted" Text"#, r#""Quoted" Text"#),
            (r"Colon: allowed", "Colon: allowed"),
            (r"Backslash \\", r"Backslash \"),
            ("Tab\tseparated", "Tab\tseparated"),
            ("Unicode 日本語", "Unicode 日本語"),
            ("", ""),
        ];
        for (src, expected) in success_cases {
            assert_eq!(parse(src).unwrap(), expected, "Failed to parse: {src}");
        }

        let fail_cases = [
            "a;b",       // bare semicolon
            "a,b",       // bare comma
            r"a\b",      // unknown escape
            r"trailing\", // dangling escape
            "line\nbreak",
        ];
        for src in fail_cases {
            assert!(parse(src).is_err(), "Parse {src:?} should fail");
        }
    }

    #[test]
    fn parses_text_list() {
        fn parse(src: &str) -> Result<Vec<String>, Vec<Rich<'_, char>>> {
            let stream = Stream::from_iter(src.chars());
            values_text::<'_, _, extra::Err<_>>()
                .parse(stream)
                .into_result()
        }

        assert_eq!(
            parse(r"APPOINTMENT,EDUCATION").unwrap(),
            vec!["APPOINTMENT", "EDUCATION"]
        );
        assert_eq!(parse(r"a\,b,c").unwrap(), vec!["a,b", "c"]);
        assert_eq!(parse("").unwrap(), vec![""]);
        assert!(parse("a;b").is_err());
    }

    #[test]
    fn escapes_text() {
        for src in [
            "plain",
            "Hello, World; \n",
            r"C:\path",
            "Unicode 日本語",
        ] {
            let escaped = EscapedText(src).to_string();
            assert_eq!(parse(&escaped).unwrap(), src);
        }
        assert_eq!(EscapedText("a,b;c\\d\ne").to_string(), r"a\,b\;c\\d\ne");
    }
}
