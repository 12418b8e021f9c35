// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Which properties may appear in which components.
//!
//! The allow-lists follow RFC 5545 Section 3.6, RFC 7953 Section 3 and
//! RFC 7986 Section 5. Experimental x-name properties are always legal, and
//! components without a fixed property set (`VCALENDAR`, `VCARD`) accept
//! anything.

use crate::component::ComponentKind;
use crate::property::PropertyName;

/// The property is not permitted inside the component.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("property {property} is not allowed in {component}")]
pub struct IllegalProperty {
    /// Name of the offending property
    pub property: String,

    /// The enclosing component
    pub component: ComponentKind,
}

/// Static property-to-component legality table.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalityMatrix;

impl LegalityMatrix {
    /// Checks that the property `name` may appear in `component`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalProperty`] if the component's allow-list does not
    /// contain the property.
    pub fn check(name: &PropertyName, component: ComponentKind) -> Result<(), IllegalProperty> {
        if Self::allows(name, component) {
            Ok(())
        } else {
            Err(IllegalProperty {
                property: name.to_string(),
                component,
            })
        }
    }

    /// Whether the property `name` may appear in `component`.
    #[must_use]
    pub fn allows(name: &PropertyName, component: ComponentKind) -> bool {
        use PropertyName as P;

        if name.is_extension() || !component.is_checked() {
            return true;
        }

        match component {
            ComponentKind::Event => matches!(
                name,
                P::DtStamp | P::Uid | P::DtStart | P::Class | P::Created | P::Description
                    | P::Geo | P::LastModified | P::Location | P::Organizer | P::Priority
                    | P::Sequence | P::Status | P::Summary | P::Transp | P::Url
                    | P::RecurrenceId | P::RRule | P::DtEnd | P::Duration | P::Attach
                    | P::Attendee | P::Categories | P::Comment | P::Contact | P::ExDate
                    | P::RequestStatus | P::RelatedTo | P::Resources | P::RDate | P::Color
                    | P::Conference | P::Image
            ),
            ComponentKind::Todo => matches!(
                name,
                P::DtStamp | P::Uid | P::DtStart | P::Class | P::Completed | P::Created
                    | P::Description | P::Geo | P::LastModified | P::Location | P::Organizer
                    | P::PercentComplete | P::Priority | P::Sequence | P::Status | P::Summary
                    | P::Url | P::RecurrenceId | P::RRule | P::Due | P::Duration | P::Attach
                    | P::Attendee | P::Categories | P::Comment | P::Contact | P::ExDate
                    | P::RequestStatus | P::RelatedTo | P::Resources | P::RDate | P::Color
                    | P::Conference | P::Image
            ),
            ComponentKind::Journal => matches!(
                name,
                P::DtStamp | P::Uid | P::DtStart | P::Class | P::Created | P::Description
                    | P::LastModified | P::Organizer | P::RecurrenceId | P::Sequence
                    | P::Status | P::Summary | P::Url | P::RRule | P::Attach | P::Attendee
                    | P::Categories | P::Comment | P::Contact | P::ExDate | P::RequestStatus
                    | P::RelatedTo | P::RDate | P::Color | P::Image
            ),
            ComponentKind::FreeBusy => matches!(
                name,
                P::DtStamp | P::Uid | P::Contact | P::DtStart | P::DtEnd | P::Organizer
                    | P::Url | P::Attendee | P::Comment | P::FreeBusy | P::RequestStatus
            ),
            ComponentKind::Timezone => matches!(name, P::TzId | P::LastModified | P::TzUrl),
            ComponentKind::Standard | ComponentKind::Daylight => matches!(
                name,
                P::DtStart | P::TzOffsetTo | P::TzOffsetFrom | P::RRule | P::Comment
                    | P::RDate | P::TzName
            ),
            ComponentKind::Alarm => matches!(
                name,
                P::Action | P::Trigger | P::Duration | P::Repeat | P::Attach | P::Description
                    | P::Summary | P::Attendee
            ),
            ComponentKind::Availability => matches!(
                name,
                P::DtStamp | P::Uid | P::BusyType | P::Class | P::Created | P::Description
                    | P::DtStart | P::LastModified | P::Location | P::Organizer | P::Priority
                    | P::Sequence | P::Summary | P::Url | P::DtEnd | P::Duration
                    | P::Categories | P::Comment | P::Contact
            ),
            ComponentKind::Available => matches!(
                name,
                P::DtStamp | P::DtStart | P::Uid | P::DtEnd | P::Duration | P::Created
                    | P::Description | P::LastModified | P::Location | P::RecurrenceId
                    | P::RRule | P::Summary | P::Categories | P::Comment | P::Contact
                    | P::ExDate | P::RDate
            ),
            ComponentKind::Calendar | ComponentKind::Card => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_allow_lists() {
        let success_cases = [
            ("DTSTART", ComponentKind::FreeBusy),
            ("ATTACH", ComponentKind::Event),
            ("PERCENT-COMPLETE", ComponentKind::Todo),
            ("TZOFFSETFROM", ComponentKind::Daylight),
            ("TRIGGER", ComponentKind::Alarm),
            ("BUSYTYPE", ComponentKind::Availability),
            ("RECURRENCE-ID", ComponentKind::Available),
            ("CONFERENCE", ComponentKind::Event),
            ("X-WR-CALNAME", ComponentKind::FreeBusy),
            ("VERSION", ComponentKind::Calendar),
            ("FN", ComponentKind::Card),
        ];
        for (name, component) in success_cases {
            assert!(
                LegalityMatrix::check(&name.into(), component).is_ok(),
                "{name} should be legal in {component}"
            );
        }

        let fail_cases = [
            ("ATTACH", ComponentKind::FreeBusy),
            ("PERCENT-COMPLETE", ComponentKind::Event),
            ("DUE", ComponentKind::Event),
            ("DTEND", ComponentKind::Todo),
            ("CONFERENCE", ComponentKind::Journal),
            ("DTSTART", ComponentKind::Timezone),
            ("TZID", ComponentKind::Standard),
            ("VERSION", ComponentKind::Event),
            ("BUSYTYPE", ComponentKind::Available),
            ("FN", ComponentKind::Event),
        ];
        for (name, component) in fail_cases {
            let err = LegalityMatrix::check(&name.into(), component).unwrap_err();
            assert_eq!(err.property, name);
            assert_eq!(err.component, component);
        }
    }

    #[test]
    fn exempts_extensions() {
        for component in [
            ComponentKind::Event,
            ComponentKind::Timezone,
            ComponentKind::Standard,
            ComponentKind::Alarm,
        ] {
            assert!(LegalityMatrix::allows(&"x-custom".into(), component));
        }
    }
}
