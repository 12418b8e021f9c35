// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the property model: display, canonical form and
//! ordering.

use vobject::formatter::unfold;
use vobject::value::{self, Grammar};
use vobject::{
    ComponentKind, Dispatcher, FoldingStyle, FormatOptions, LineEnding, Parameter, ParsedValue,
    Property, PropertyName, PropertyPayload,
};

fn text(s: &str) -> PropertyPayload {
    PropertyPayload::new().value(ParsedValue::Text(s.to_owned()))
}

#[test]
fn version_sorts_first() {
    let dispatcher = Dispatcher::new();
    let resolve = |name: &str, raw: &str| {
        dispatcher
            .property(name, None, Vec::new(), ComponentKind::Calendar, raw)
            .unwrap()
    };

    let mut props = vec![
        resolve("PRODID", "-//Example Corp.//Cal Client 1.0//EN"),
        resolve("CALSCALE", "GREGORIAN"),
        resolve("METHOD", "PUBLISH"),
        resolve("X-AAA", "first by name"),
        resolve("VERSION", "2.0"),
    ];
    props.sort();

    assert_eq!(props.first().map(Property::name), Some(&PropertyName::Version));
    let rest: Vec<_> = props.iter().skip(1).map(|p| p.name().to_string()).collect();
    assert_eq!(rest, ["CALSCALE", "METHOD", "PRODID", "X-AAA"]);
}

#[test]
fn physical_lines_stay_within_limit() {
    let description = "Agenda: review quarterly numbers, plan the offsite, \
        and discuss the roadmap for the next release. Bring laptops. "
        .repeat(4);
    let prop = Property::new(
        "DESCRIPTION",
        text(&description).param(Parameter::new("ALTREP", "cid:part1.0001@example.org")),
    )
    .unwrap();

    for form in [prop.display(), prop.canonical().to_owned()] {
        let body = form.strip_suffix("\r\n").unwrap();
        for (i, line) in body.split("\r\n").enumerate() {
            assert!(line.len() <= 75, "line {i} has {} octets", line.len());
            if i > 0 {
                assert!(line.starts_with(' '), "line {i} is not a continuation");
            }
        }
        assert!(unfold(body).starts_with("DESCRIPTION;ALTREP=\"cid:part1.0001@example.org\":"));
    }
}

#[test]
fn folds_multibyte_text_on_char_boundaries() {
    let prop = Property::new("SUMMARY", text(&"日本語のテキスト".repeat(12))).unwrap();
    let display = prop.display();
    for line in display.trim_end().split("\r\n") {
        assert!(line.len() <= 75);
    }
    assert_eq!(
        unfold(display.trim_end()),
        format!("SUMMARY:{}", "日本語のテキスト".repeat(12))
    );
}

#[test]
fn display_honours_format_options() {
    let prop = Property::new("COMMENT", text(&"a".repeat(40))).unwrap();
    let options = FormatOptions::default()
        .folding(Some(20))
        .folding_style(FoldingStyle::Tab)
        .line_ending(LineEnding::Lf);
    let display = prop.display_with(&options);
    let expected = format!(
        "COMMENT:{}\n\t{}\n\t{}\n",
        "a".repeat(12),
        "a".repeat(19),
        "a".repeat(9)
    );
    assert_eq!(display, expected);

    let unfolded = prop.display_with(&FormatOptions::default().folding(None));
    assert_eq!(unfolded, format!("COMMENT:{}\r\n", "a".repeat(40)));

    // Canonical form ignores display options
    assert_eq!(prop.canonical(), format!("COMMENT:{}\r\n", "a".repeat(40)));
}

#[test]
fn equal_canonical_forms_compare_equal() {
    let a = Property::new(
        "attendee",
        PropertyPayload::new()
            .param(Parameter::new("ROLE", "CHAIR"))
            .param(Parameter::new("cn", "Jane"))
            .value(value::parse(Grammar::CalAddress, "mailto:jane@example.com").unwrap()),
    )
    .unwrap();
    let b = Property::new(
        "ATTENDEE",
        PropertyPayload::new()
            .param(Parameter::new("CN", "Jane"))
            .param(Parameter::new("ROLE", "CHAIR"))
            .value(value::parse(Grammar::CalAddress, "mailto:jane@example.com").unwrap()),
    )
    .unwrap();
    assert_eq!(a, b);
    assert_eq!(a.canonical(), "ATTENDEE;CN=Jane;ROLE=CHAIR:mailto:jane@example.com\r\n");

    let c = Property::new("ATTENDEE", text("mailto:john@example.com")).unwrap();
    assert_ne!(a, c);
}

#[test]
fn multiplicity_sorts_siblings_in_canonical_form() {
    let at = |raw: &str| {
        PropertyPayload::new().value(value::parse(Grammar::DateTime, raw).unwrap())
    };
    let prop = Property::new_multi("RDATE", [at("19970714T123000Z"), at("19970101T000000Z")])
        .unwrap();
    assert_eq!(
        prop.display(),
        "RDATE:19970714T123000Z\r\nRDATE:19970101T000000Z\r\n"
    );
    assert_eq!(
        prop.canonical(),
        "RDATE:19970101T000000Z\r\nRDATE:19970714T123000Z\r\n"
    );
    assert_eq!(prop.to_string(), prop.display());
}
