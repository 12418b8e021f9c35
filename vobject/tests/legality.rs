// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the property-to-component legality table.

use vobject::{ComponentKind, LegalityMatrix, PropertyName};

const CHECKED: [ComponentKind; 10] = [
    ComponentKind::Event,
    ComponentKind::Todo,
    ComponentKind::Journal,
    ComponentKind::FreeBusy,
    ComponentKind::Timezone,
    ComponentKind::Standard,
    ComponentKind::Daylight,
    ComponentKind::Alarm,
    ComponentKind::Availability,
    ComponentKind::Available,
];

#[test]
fn extensions_are_legal_everywhere() {
    for component in CHECKED {
        for name in ["X-WR-CALNAME", "x-custom", "X_LIC_LOCATION"] {
            assert!(
                LegalityMatrix::check(&PropertyName::from(name), component).is_ok(),
                "{name} should be legal in {component}"
            );
        }
    }
}

#[test]
fn unregistered_names_are_illegal_in_checked_components() {
    for component in CHECKED {
        assert!(!LegalityMatrix::allows(&PropertyName::from("FN"), component));
        assert!(!LegalityMatrix::allows(&PropertyName::from("VERSION"), component));
    }
}

#[test]
fn open_components_accept_anything() {
    for component in [ComponentKind::Calendar, ComponentKind::Card] {
        for name in ["VERSION", "FN", "ATTACH", "TZOFFSETTO"] {
            assert!(LegalityMatrix::allows(&PropertyName::from(name), component));
        }
    }
}

#[test]
fn observances_share_allow_list() {
    let names = ["DTSTART", "TZOFFSETTO", "TZOFFSETFROM", "RRULE", "RDATE", "TZNAME", "COMMENT"];
    for name in names {
        let name = PropertyName::from(name);
        assert!(LegalityMatrix::allows(&name, ComponentKind::Standard));
        assert!(LegalityMatrix::allows(&name, ComponentKind::Daylight));
        assert!(!LegalityMatrix::allows(&name, ComponentKind::Timezone));
    }
}

#[test]
fn reports_offending_pair() {
    let err = LegalityMatrix::check(&PropertyName::Attach, ComponentKind::FreeBusy).unwrap_err();
    assert_eq!(err.to_string(), "property ATTACH is not allowed in VFREEBUSY");
}
