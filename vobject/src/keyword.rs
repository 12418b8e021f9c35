// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545 and its extensions (RFC 5546, RFC 7529,
//! RFC 7953, RFC 7986).

// Section 3.6 - Calendar Components
/// `VCALENDAR` component.
pub const KW_VCALENDAR: &str = "VCALENDAR";
/// `VEVENT` component.
pub const KW_VEVENT: &str = "VEVENT";
/// `VTODO` component.
pub const KW_VTODO: &str = "VTODO";
/// `VJOURNAL` component.
pub const KW_VJOURNAL: &str = "VJOURNAL";
/// `VFREEBUSY` component.
pub const KW_VFREEBUSY: &str = "VFREEBUSY";
/// `VTIMEZONE` component.
pub const KW_VTIMEZONE: &str = "VTIMEZONE";
/// `STANDARD` component.
pub const KW_STANDARD: &str = "STANDARD";
/// `DAYLIGHT` component.
pub const KW_DAYLIGHT: &str = "DAYLIGHT";
/// `VALARM` component.
pub const KW_VALARM: &str = "VALARM";
/// `VAVAILABILITY` component.
pub const KW_VAVAILABILITY: &str = "VAVAILABILITY";
/// `AVAILABLE` component.
pub const KW_AVAILABLE: &str = "AVAILABLE";
/// `VCARD` component.
pub const KW_VCARD: &str = "VCARD";

// Section 3.2 - Property Parameters
/// `ENCODING` parameter.
pub const KW_ENCODING: &str = "ENCODING";
/// `BASE64` encoding.
pub const KW_ENCODING_BASE64: &str = "BASE64";
/// `RELATED` parameter.
pub const KW_RELATED: &str = "RELATED";
/// `TZID` parameter.
pub const KW_TZID: &str = "TZID";
/// `VALUE` parameter.
pub const KW_VALUE: &str = "VALUE";

// Section 3.3 - Property Value Data Types
/// `BINARY` value type.
pub const KW_BINARY: &str = "BINARY";
/// `BOOLEAN` value type.
pub const KW_BOOLEAN: &str = "BOOLEAN";
/// `CAL-ADDRESS` value type.
pub const KW_CAL_ADDRESS: &str = "CAL-ADDRESS";
/// `DATE` value type.
pub const KW_DATE: &str = "DATE";
/// `DATE-TIME` value type.
pub const KW_DATETIME: &str = "DATE-TIME";
/// `DURATION` value type.
pub const KW_DURATION: &str = "DURATION";
/// `FLOAT` value type.
pub const KW_FLOAT: &str = "FLOAT";
/// `INTEGER` value type.
pub const KW_INTEGER: &str = "INTEGER";
/// `PERIOD` value type.
pub const KW_PERIOD: &str = "PERIOD";
/// `RECUR` value type.
pub const KW_RECUR: &str = "RECUR";
/// `TEXT` value type.
pub const KW_TEXT: &str = "TEXT";
/// `TIME` value type.
pub const KW_TIME: &str = "TIME";
/// `URI` value type.
pub const KW_URI: &str = "URI";
/// `UTC-OFFSET` value type.
pub const KW_UTC_OFFSET: &str = "UTC-OFFSET";

// Section 3.3.10 - Recurrence Rule
/// `FREQ` rule part.
pub const KW_RRULE_FREQ: &str = "FREQ";
/// `UNTIL` rule part.
pub const KW_RRULE_UNTIL: &str = "UNTIL";
/// `COUNT` rule part.
pub const KW_RRULE_COUNT: &str = "COUNT";
/// `INTERVAL` rule part.
pub const KW_RRULE_INTERVAL: &str = "INTERVAL";
/// `BYSECOND` rule part.
pub const KW_RRULE_BYSECOND: &str = "BYSECOND";
/// `BYMINUTE` rule part.
pub const KW_RRULE_BYMINUTE: &str = "BYMINUTE";
/// `BYHOUR` rule part.
pub const KW_RRULE_BYHOUR: &str = "BYHOUR";
/// `BYDAY` rule part.
pub const KW_RRULE_BYDAY: &str = "BYDAY";
/// `BYMONTHDAY` rule part.
pub const KW_RRULE_BYMONTHDAY: &str = "BYMONTHDAY";
/// `BYYEARDAY` rule part.
pub const KW_RRULE_BYYEARDAY: &str = "BYYEARDAY";
/// `BYWEEKNO` rule part.
pub const KW_RRULE_BYWEEKNO: &str = "BYWEEKNO";
/// `BYMONTH` rule part.
pub const KW_RRULE_BYMONTH: &str = "BYMONTH";
/// `BYSETPOS` rule part.
pub const KW_RRULE_BYSETPOS: &str = "BYSETPOS";
/// `WKST` rule part.
pub const KW_RRULE_WKST: &str = "WKST";
/// `RSCALE` rule part.
pub const KW_RRULE_RSCALE: &str = "RSCALE";
/// `SKIP` rule part.
pub const KW_RRULE_SKIP: &str = "SKIP";

// Section 3.7 - Calendar Properties
/// `CALSCALE` property.
pub const KW_CALSCALE: &str = "CALSCALE";
/// `METHOD` property.
pub const KW_METHOD: &str = "METHOD";
/// `PRODID` property.
pub const KW_PRODID: &str = "PRODID";
/// `VERSION` property.
pub const KW_VERSION: &str = "VERSION";

// Section 3.8.1 - Descriptive Component Properties
/// `ATTACH` property.
pub const KW_ATTACH: &str = "ATTACH";
/// `CATEGORIES` property.
pub const KW_CATEGORIES: &str = "CATEGORIES";
/// `CLASS` property.
pub const KW_CLASS: &str = "CLASS";
/// `COMMENT` property.
pub const KW_COMMENT: &str = "COMMENT";
/// `DESCRIPTION` property.
pub const KW_DESCRIPTION: &str = "DESCRIPTION";
/// `GEO` property.
pub const KW_GEO: &str = "GEO";
/// `LOCATION` property.
pub const KW_LOCATION: &str = "LOCATION";
/// `PERCENT-COMPLETE` property.
pub const KW_PERCENT_COMPLETE: &str = "PERCENT-COMPLETE";
/// `PRIORITY` property.
pub const KW_PRIORITY: &str = "PRIORITY";
/// `RESOURCES` property.
pub const KW_RESOURCES: &str = "RESOURCES";
/// `STATUS` property.
pub const KW_STATUS: &str = "STATUS";
/// `SUMMARY` property.
pub const KW_SUMMARY: &str = "SUMMARY";

// Section 3.8.2 - Date and Time Component Properties
/// `COMPLETED` property.
pub const KW_COMPLETED: &str = "COMPLETED";
/// `DTEND` property.
pub const KW_DTEND: &str = "DTEND";
/// `DUE` property.
pub const KW_DUE: &str = "DUE";
/// `DTSTART` property.
pub const KW_DTSTART: &str = "DTSTART";
/// `FREEBUSY` property.
pub const KW_FREEBUSY: &str = "FREEBUSY";
/// `TRANSP` property.
pub const KW_TRANSP: &str = "TRANSP";

// Section 3.8.3 - Time Zone Component Properties
/// `TZNAME` property.
pub const KW_TZNAME: &str = "TZNAME";
/// `TZOFFSETFROM` property.
pub const KW_TZOFFSETFROM: &str = "TZOFFSETFROM";
/// `TZOFFSETTO` property.
pub const KW_TZOFFSETTO: &str = "TZOFFSETTO";
/// `TZURL` property.
pub const KW_TZURL: &str = "TZURL";

// Section 3.8.4 - Relationship Component Properties
/// `ATTENDEE` property.
pub const KW_ATTENDEE: &str = "ATTENDEE";
/// `CONTACT` property.
pub const KW_CONTACT: &str = "CONTACT";
/// `ORGANIZER` property.
pub const KW_ORGANIZER: &str = "ORGANIZER";
/// `RECURRENCE-ID` property.
pub const KW_RECURRENCE_ID: &str = "RECURRENCE-ID";
/// `RELATED-TO` property.
pub const KW_RELATED_TO: &str = "RELATED-TO";
/// `URL` property.
pub const KW_URL: &str = "URL";
/// `UID` property.
pub const KW_UID: &str = "UID";

// Section 3.8.5 - Recurrence Component Properties
/// `EXDATE` property.
pub const KW_EXDATE: &str = "EXDATE";
/// `RDATE` property.
pub const KW_RDATE: &str = "RDATE";
/// `RRULE` property.
pub const KW_RRULE: &str = "RRULE";

// Section 3.8.6 - Alarm Component Properties
/// `ACTION` property.
pub const KW_ACTION: &str = "ACTION";
/// `REPEAT` property.
pub const KW_REPEAT: &str = "REPEAT";
/// `TRIGGER` property.
pub const KW_TRIGGER: &str = "TRIGGER";

// Section 3.8.7 - Change Management Component Properties
/// `CREATED` property.
pub const KW_CREATED: &str = "CREATED";
/// `DTSTAMP` property.
pub const KW_DTSTAMP: &str = "DTSTAMP";
/// `LAST-MODIFIED` property.
pub const KW_LAST_MODIFIED: &str = "LAST-MODIFIED";
/// `SEQUENCE` property.
pub const KW_SEQUENCE: &str = "SEQUENCE";

// Section 3.8.8 - Miscellaneous Component Properties
/// `REQUEST-STATUS` property.
pub const KW_REQUEST_STATUS: &str = "REQUEST-STATUS";

// RFC 7953 - Calendar Availability
/// `BUSYTYPE` property.
pub const KW_BUSYTYPE: &str = "BUSYTYPE";

// RFC 7986 - New Properties for iCalendar
/// `NAME` property.
pub const KW_NAME: &str = "NAME";
/// `REFRESH-INTERVAL` property.
pub const KW_REFRESH_INTERVAL: &str = "REFRESH-INTERVAL";
/// `SOURCE` property.
pub const KW_SOURCE: &str = "SOURCE";
/// `COLOR` property.
pub const KW_COLOR: &str = "COLOR";
/// `IMAGE` property.
pub const KW_IMAGE: &str = "IMAGE";
/// `CONFERENCE` property.
pub const KW_CONFERENCE: &str = "CONFERENCE";

/// Prefix of experimental names.
pub const KW_X_PREFIX: &str = "X-";
