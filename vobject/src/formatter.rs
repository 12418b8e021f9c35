// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Output options and RFC 5545 line folding.
//!
//! Lines of text SHOULD NOT be longer than 75 octets, excluding the line
//! break. Long content lines are split into a multiple line representation
//! by inserting a line break immediately followed by a single linear white
//! space character (RFC 5545 Section 3.1).
//!
//! # Example
//!
//! ```
//! use vobject::formatter::{FormatOptions, fold_line, unfold};
//!
//! let line = format!("DESCRIPTION:{}", "x".repeat(100));
//! let folded = fold_line(&line, &FormatOptions::default());
//! assert!(folded.split("\r\n").all(|l| l.len() <= 75));
//! assert_eq!(unfold(&folded), line);
//! ```

use std::fmt;

/// Smallest folding limit that still fits a continuation character plus one
/// four-octet UTF-8 sequence.
const MIN_FOLDING: usize = 5;

/// Formatting options for property output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,

    /// Line folding style.
    ///
    /// Default: `FoldingStyle::Space` (line break + SPACE).
    pub folding_style: FoldingStyle,

    /// Line break used to terminate and fold lines.
    ///
    /// Default: `LineEnding::CrLf`.
    pub line_ending: LineEnding,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            folding: Some(75),
            folding_style: FoldingStyle::default(),
            line_ending: LineEnding::default(),
        }
    }
}

impl FormatOptions {
    /// Set the line folding option.
    #[must_use]
    pub const fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }

    /// Set the line ending.
    #[must_use]
    pub const fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

/// Line folding style for RFC 5545 formatting.
///
/// RFC 5545 specifies that folded lines should start with CRLF followed by
/// a whitespace character (SPACE or TAB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoldingStyle {
    /// Line break + SPACE (RFC 5545 default)
    #[default]
    Space,
    /// Line break + TAB
    Tab,
}

impl FoldingStyle {
    /// The continuation character following the line break.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Space => ' ',
            Self::Tab => '\t',
        }
    }
}

/// Line break sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// CRLF, as required by RFC 5545
    #[default]
    CrLf,
    /// Bare LF
    Lf,
}

impl LineEnding {
    /// The line break characters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Folds one logical content line into physical lines.
///
/// No trailing line break is appended. Multi-octet UTF-8 sequences and
/// backslash escapes are never split across physical lines.
#[must_use]
pub fn fold_line(line: &str, options: &FormatOptions) -> String {
    let Some(limit) = options.folding else {
        return line.to_owned();
    };
    let limit = limit.max(MIN_FOLDING);
    let continuation = options.folding_style.as_char();

    let mut folded = String::with_capacity(line.len() + line.len() / limit * 3);
    let mut remaining = line;
    let mut available = limit;
    while remaining.len() > available {
        let mut at = find_safe_write_length(remaining, available);
        if at > 1 && ends_inside_escape(remaining.get(..at).unwrap_or_default()) {
            at -= 1;
        }

        let (head, tail) = remaining.split_at(at);
        folded.push_str(head);
        folded.push_str(options.line_ending.as_str());
        folded.push(continuation);

        remaining = tail;
        available = limit - continuation.len_utf8();
    }
    folded.push_str(remaining);
    folded
}

/// Joins folded physical lines back into logical lines.
///
/// Any line break (CRLF or LF) immediately followed by a SPACE or TAB is
/// removed along with that whitespace character.
#[must_use]
pub fn unfold(text: &str) -> String {
    let mut unfolded = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                match chars.peek() {
                    Some(' ' | '\t') => {
                        chars.next();
                    }
                    _ => unfolded.push_str("\r\n"),
                }
            }
            '\n' if matches!(chars.peek(), Some(' ' | '\t')) => {
                chars.next();
            }
            c => unfolded.push(c),
        }
    }
    unfolded
}

/// Find the maximum number of bytes we can write without breaking a UTF-8 sequence.
///
/// UTF-8 encoding:
/// - 0xxxxxxx: 1 byte (ASCII)
/// - 110xxxxx: 2 bytes (starts with 0b110xxxxx)
/// - 1110xxxx: 3 bytes (starts with 0b1110xxxx)
/// - 11110xxx: 4 bytes (starts with 0b11110xxx)
/// - 10xxxxxx: continuation byte (not a start byte)
fn find_safe_write_length(s: &str, max_bytes: usize) -> usize {
    if max_bytes >= s.len() {
        return s.len();
    }

    let mut pos = max_bytes;
    while pos > 0 && !s.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Whether `s` ends with a backslash that starts an escape sequence.
fn ends_inside_escape(s: &str) -> bool {
    let backslashes = s.bytes().rev().take_while(|&b| b == b'\\').count();
    backslashes % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_folded(folded: &str, options: &FormatOptions) {
        let limit = options.folding.unwrap_or(usize::MAX);
        let separator = options.line_ending.as_str();
        for (i, line) in folded.split(separator).enumerate() {
            assert!(line.len() <= limit, "line {i} too long: {line:?}");
            if i > 0 {
                assert!(line.starts_with(options.folding_style.as_char()));
                assert!(line.len() > 1, "empty continuation line");
            }
        }
    }

    #[test]
    fn folds_long_lines() {
        let options = FormatOptions::default();
        let line = format!("DESCRIPTION:{}", "abcdefghij".repeat(20));
        let folded = fold_line(&line, &options);
        assert_folded(&folded, &options);
        assert_eq!(folded.split("\r\n").count(), 3);
        assert_eq!(folded.split("\r\n").next().map(str::len), Some(75));
        assert_eq!(unfold(&folded), line);
    }

    #[test]
    fn keeps_short_lines() {
        let options = FormatOptions::default();
        let line = "SUMMARY:Short";
        assert_eq!(fold_line(line, &options), line);

        let exact = format!("SUMMARY:{}", "x".repeat(75 - 8));
        assert_eq!(fold_line(&exact, &options), exact);
    }

    #[test]
    fn folds_without_splitting_utf8() {
        let options = FormatOptions::default();
        for line in [
            format!("SUMMARY:{}", "日本語".repeat(30)),
            format!("SUMMARY:{}", "😀a".repeat(40)),
            format!("SUMMARY:x{}", "é".repeat(80)),
        ] {
            let folded = fold_line(&line, &options);
            assert_folded(&folded, &options);
            assert_eq!(unfold(&folded), line);
        }
    }

    #[test]
    fn folds_without_splitting_escapes() {
        let options = FormatOptions::default();
        let line = format!("DESCRIPTION:{}\\n{}", "x".repeat(62), "y".repeat(20));
        assert_eq!(line.find('\\'), Some(74));
        let folded = fold_line(&line, &options);
        assert_folded(&folded, &options);
        let first = folded.split("\r\n").next().unwrap_or_default();
        assert!(!first.ends_with('\\'), "escape split in {first:?}");
        assert_eq!(unfold(&folded), line);
    }

    #[test]
    fn honours_options() {
        let options = FormatOptions::default()
            .folding(Some(20))
            .folding_style(FoldingStyle::Tab)
            .line_ending(LineEnding::Lf);
        let line = "SUMMARY:0123456789012345678901234567890123456789";
        let folded = fold_line(line, &options);
        assert_folded(&folded, &options);
        assert!(folded.contains("\n\t"));
        assert!(!folded.contains('\r'));
        assert_eq!(unfold(&folded), line);

        let options = FormatOptions::default().folding(None);
        let line = "x".repeat(200);
        assert_eq!(fold_line(&line, &options), line);
    }

    #[test]
    fn unfolds_lines() {
        #[rustfmt::skip]
        let cases = [
            ("DESCRIPTION:This is a lo\r\n ng description", "DESCRIPTION:This is a long description"),
            ("A\r\n\tB", "AB"),
            ("A\n B", "AB"),
            ("A\r\nB", "A\r\nB"),
            ("A\r\n  B", "A B"),
        ];
        for (src, expected) in cases {
            assert_eq!(unfold(src), expected);
        }
    }
}
