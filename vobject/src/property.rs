// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parsed properties, their display and canonical forms.
//!
//! A [`Property`] is either single-valued, or carries several sibling
//! properties sharing one name when a value was given more than once.

mod name;

use std::cmp::Ordering;
use std::fmt::{self, Write};
use std::sync::OnceLock;

use serde_json::{Map, Value};

pub use name::PropertyName;

use crate::formatter::{FormatOptions, fold_line};
use crate::parameter::Parameter;
use crate::value::ParsedValue;

/// Error type for [`Property`] construction.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    /// The name is not a valid property name
    #[error("invalid property name {name:?}")]
    InvalidName {
        /// The offending name
        name: String,
    },

    /// The group is not a valid group name
    #[error("invalid group {group:?} for property {name}")]
    InvalidGroup {
        /// Name of the property
        name: String,
        /// The offending group
        group: String,
    },

    /// A multi-valued property was built from no payload
    #[error("property {name} has no values")]
    EmptyMultiplicity {
        /// Name of the property
        name: String,
    },
}

/// Group, parameters and value of one property occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyPayload {
    /// Group prefix
    pub group: Option<String>,

    /// Parameters, in source order
    pub params: Vec<Parameter>,

    /// The parsed value
    pub value: Option<ParsedValue>,
}

impl PropertyPayload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the group prefix.
    #[must_use]
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Sets the parameters.
    #[must_use]
    pub fn params(mut self, params: Vec<Parameter>) -> Self {
        self.params = params;
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Sets the value.
    #[must_use]
    pub fn value(mut self, value: ParsedValue) -> Self {
        self.value = Some(value);
        self
    }
}

/// A property with its group, parameters and value.
#[derive(Debug, Clone)]
pub struct Property {
    group: Option<String>,
    name: PropertyName,
    spelling: String,
    params: Vec<Parameter>,
    value: Option<ParsedValue>,
    multiple: Vec<Property>,
    canonical: OnceLock<String>,
}

impl Property {
    /// Creates a single-valued property.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the name or the group contains characters
    /// other than letters, digits, `-` and `_`.
    pub fn new(name: &str, payload: PropertyPayload) -> Result<Self, PropertyError> {
        let spelling = validate_name(name)?;
        if let Some(group) = payload.group.as_deref().filter(|g| !is_name(g)) {
            return Err(PropertyError::InvalidGroup {
                name: spelling,
                group: group.to_owned(),
            });
        }

        Ok(Self {
            group: payload.group,
            name: PropertyName::from(spelling.as_str()),
            spelling,
            params: payload.params,
            value: payload.value,
            multiple: Vec::new(),
            canonical: OnceLock::new(),
        })
    }

    /// Creates a multi-valued property, one sibling per payload.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if `payloads` is empty or any sibling cannot
    /// be created.
    pub fn new_multi<I>(name: &str, payloads: I) -> Result<Self, PropertyError>
    where
        I: IntoIterator<Item = PropertyPayload>,
    {
        let spelling = validate_name(name)?;
        let multiple = payloads
            .into_iter()
            .map(|payload| Self::new(&spelling, payload))
            .collect::<Result<Vec<_>, _>>()?;
        if multiple.is_empty() {
            return Err(PropertyError::EmptyMultiplicity { name: spelling });
        }

        Ok(Self {
            group: None,
            name: PropertyName::from(spelling.as_str()),
            spelling,
            params: Vec::new(),
            value: None,
            multiple,
            canonical: OnceLock::new(),
        })
    }

    /// The resolved name.
    #[must_use]
    pub const fn name(&self) -> &PropertyName {
        &self.name
    }

    /// The group prefix.
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// The parameters, in source order.
    #[must_use]
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// The value of a single-valued property.
    #[must_use]
    pub const fn value(&self) -> Option<&ParsedValue> {
        self.value.as_ref()
    }

    /// The siblings of a multi-valued property, empty otherwise.
    #[must_use]
    pub fn multiple(&self) -> &[Property] {
        &self.multiple
    }

    /// Whether this property carries sibling values.
    #[must_use]
    pub fn is_multiple(&self) -> bool {
        !self.multiple.is_empty()
    }

    /// Renders the property as folded content lines with default options.
    #[must_use]
    pub fn display(&self) -> String {
        self.display_with(&FormatOptions::default())
    }

    /// Renders the property as folded content lines.
    ///
    /// Every line, including the last, ends with the configured line ending.
    #[must_use]
    pub fn display_with(&self, options: &FormatOptions) -> String {
        if self.is_multiple() {
            return self.multiple.iter().map(|p| p.display_with(options)).collect();
        }

        let mut line = String::new();
        if let Some(group) = &self.group {
            line.push_str(group);
            line.push('.');
        }
        line.push_str(&self.spelling);
        for param in &self.params {
            let _ = write!(line, ";{param}");
        }
        line.push(':');
        if let Some(value) = &self.value {
            let _ = write!(line, "{value}");
        }
        terminate(&line, options)
    }

    /// The canonical form, used for semantic comparison.
    ///
    /// The name is upper-cased, parameters and siblings are sorted and the
    /// value is rendered canonically. Computed on first use, then cached.
    pub fn canonical(&self) -> &str {
        self.canonical.get_or_init(|| self.render_canonical())
    }

    fn render_canonical(&self) -> String {
        tracing::trace!(name = %self.name, "computing canonical form");
        if self.is_multiple() {
            let mut siblings: Vec<&str> = self.multiple.iter().map(Self::canonical).collect();
            siblings.sort_unstable();
            return siblings.concat();
        }

        let mut params: Vec<&Parameter> = self.params.iter().collect();
        params.sort_unstable();

        let mut line = String::new();
        if let Some(group) = &self.group {
            line.push_str(group);
            line.push('.');
        }
        line.push_str(&self.spelling.to_ascii_uppercase());
        for param in params {
            line.push(';');
            line.push_str(&param.canonical());
        }
        line.push(':');
        if let Some(value) = &self.value {
            let _ = write!(line, "{value}");
        }
        terminate(&line, &FormatOptions::default())
    }

    /// Exports the property as a nested JSON mapping.
    ///
    /// Single-valued properties become `{"NAME": {"value": .., "group": ..,
    /// "params": {..}}}`, where `group` and `params` are omitted when absent.
    /// Multi-valued properties become `{"NAME": [{..}, ..]}`.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be serialized.
    pub fn to_structured(&self) -> serde_json::Result<Value> {
        let body = if self.is_multiple() {
            let siblings = self
                .multiple
                .iter()
                .map(Self::structured_body)
                .collect::<serde_json::Result<Vec<_>>>()?;
            Value::Array(siblings)
        } else {
            self.structured_body()?
        };

        let mut map = Map::new();
        map.insert(self.spelling.clone(), body);
        Ok(Value::Object(map))
    }

    fn structured_body(&self) -> serde_json::Result<Value> {
        let mut body = Map::new();
        body.insert("value".to_owned(), serde_json::to_value(&self.value)?);
        if let Some(group) = &self.group {
            body.insert("group".to_owned(), Value::String(group.clone()));
        }
        if !self.params.is_empty() {
            let params = self
                .params
                .iter()
                .map(|p| {
                    let value = match p.values.as_slice() {
                        [single] => Value::String(single.clone()),
                        values => values.iter().cloned().map(Value::String).collect(),
                    };
                    (p.name.clone(), value)
                })
                .collect();
            body.insert("params".to_owned(), Value::Object(params));
        }
        Ok(Value::Object(body))
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Property {}

impl PartialOrd for Property {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Property {
    /// `VERSION` sorts before every other property, the rest compare by
    /// canonical form.
    fn cmp(&self, other: &Self) -> Ordering {
        let version = |p: &Self| p.name == PropertyName::Version;
        match (version(self), version(other)) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => self.canonical().cmp(other.canonical()),
        }
    }
}

fn terminate(line: &str, options: &FormatOptions) -> String {
    let mut s = fold_line(line, options);
    s.push_str(options.line_ending.as_str());
    s
}

fn validate_name(name: &str) -> Result<String, PropertyError> {
    if is_name(name) {
        Ok(name.replace('_', "-"))
    } else {
        Err(PropertyError::InvalidName {
            name: name.to_owned(),
        })
    }
}

/// name = 1*(ALPHA / DIGIT / "-"), with `_` accepted in place of `-`
fn is_name(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use crate::value::{self, Grammar};

    use super::*;

    fn text(s: &str) -> PropertyPayload {
        PropertyPayload::new().value(ParsedValue::Text(s.to_owned()))
    }

    #[test]
    fn constructs_properties() {
        let prop = Property::new("percent_complete", PropertyPayload::new()).unwrap();
        assert_eq!(prop.name(), &PropertyName::PercentComplete);
        assert!(!prop.is_multiple());

        let prop = Property::new("x-wr-calname", text("Work").group("item1")).unwrap();
        assert_eq!(prop.name(), &PropertyName::Extension("X-WR-CALNAME".to_owned()));
        assert_eq!(prop.group(), Some("item1"));

        let fail_cases = ["", "DESC RIPTION", "SUMMARY:", "A.B"];
        for name in fail_cases {
            assert!(
                matches!(
                    Property::new(name, PropertyPayload::new()),
                    Err(PropertyError::InvalidName { .. })
                ),
                "{name:?} should be rejected"
            );
        }

        let err = Property::new("SUMMARY", text("x").group("a.b")).unwrap_err();
        assert!(matches!(err, PropertyError::InvalidGroup { .. }));
    }

    #[test]
    fn constructs_multi_valued_properties() {
        let prop = Property::new_multi("categories", [text("b"), text("a")]).unwrap();
        assert!(prop.is_multiple());
        assert_eq!(prop.multiple().len(), 2);
        assert!(prop.multiple().iter().all(|p| !p.is_multiple()));
        assert!(prop.multiple().iter().all(|p| p.name() == &PropertyName::Categories));
        assert_eq!(prop.value(), None);

        let err = Property::new_multi("CATEGORIES", Vec::new()).unwrap_err();
        assert_eq!(
            err,
            PropertyError::EmptyMultiplicity {
                name: "CATEGORIES".to_owned()
            }
        );
    }

    #[test]
    fn renders_display_form() {
        let payload = text("Lunch; with team")
            .group("item1")
            .param(Parameter::new("LANGUAGE", "en"))
            .param(Parameter::new("ALTREP", "cid:part1@example.org"));
        let prop = Property::new("summary", payload).unwrap();
        assert_eq!(
            prop.display(),
            "item1.summary;LANGUAGE=en;ALTREP=\"cid:part1@example.org\":Lunch\\; with team\r\n"
        );

        let prop = Property::new("X_CUSTOM", PropertyPayload::new()).unwrap();
        assert_eq!(prop.display(), "X-CUSTOM:\r\n");

        let prop = Property::new_multi("EXDATE", [text("a"), text("b")]).unwrap();
        let options = FormatOptions::default().line_ending(crate::formatter::LineEnding::Lf);
        assert_eq!(prop.display_with(&options), "EXDATE:a\nEXDATE:b\n");
    }

    #[test]
    fn folds_long_lines() {
        let prop = Property::new("DESCRIPTION", text(&"long words ".repeat(30))).unwrap();
        let display = prop.display();
        let lines: Vec<_> = display.trim_end_matches("\r\n").split("\r\n").collect();
        assert!(lines.len() > 1);
        for (i, line) in lines.iter().enumerate() {
            assert!(line.len() <= 75, "line {i} too long: {line:?}");
            if i > 0 {
                assert!(line.starts_with(' '), "line {i} is not a continuation: {line:?}");
            }
        }

        let unfolded = crate::formatter::unfold(display.trim_end_matches("\r\n"));
        assert_eq!(unfolded, format!("DESCRIPTION:{}", "long words ".repeat(30)));
    }

    #[test]
    fn computes_canonical_form() {
        let a = Property::new(
            "dtstart",
            PropertyPayload::new()
                .param(Parameter::new("VALUE", "DATE"))
                .param(Parameter::new("tzid", "UTC"))
                .value(value::parse(Grammar::Date, "19970714").unwrap()),
        )
        .unwrap();
        let b = Property::new(
            "DTSTART",
            PropertyPayload::new()
                .param(Parameter::new("TZID", "UTC"))
                .param(Parameter::new("value", "DATE"))
                .value(value::parse(Grammar::Date, "19970714").unwrap()),
        )
        .unwrap();
        assert_eq!(a.canonical(), "DTSTART;TZID=UTC;VALUE=DATE:19970714\r\n");
        assert_eq!(a, b);
        assert_ne!(a.display(), b.display());

        let c = Property::new_multi("CATEGORIES", [text("work"), text("home")]).unwrap();
        let d = Property::new_multi("categories", [text("home"), text("work")]).unwrap();
        assert_eq!(c.canonical(), "CATEGORIES:home\r\nCATEGORIES:work\r\n");
        assert_eq!(c, d);
    }

    #[test]
    fn memoizes_canonical_form() {
        let prop = Property::new("SUMMARY", text("Meeting")).unwrap();
        let first = prop.canonical();
        let second = prop.canonical();
        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn sorts_version_first() {
        let version = Property::new(
            "VERSION",
            PropertyPayload::new().value(value::parse(Grammar::Version, "2.0").unwrap()),
        )
        .unwrap();
        let mut props = vec![
            Property::new("PRODID", text("-//ABC Corporation//NONSGML My Product//EN")).unwrap(),
            Property::new("CALSCALE", text("GREGORIAN")).unwrap(),
            version.clone(),
            Property::new("A-FIRST", text("a")).unwrap(),
        ];
        props.sort();
        assert_eq!(props[0], version);
        assert_eq!(props[1].name(), &PropertyName::Other("A-FIRST".to_owned()));
    }

    #[test]
    fn exports_structured_form() {
        let prop = Property::new(
            "ATTENDEE",
            PropertyPayload::new()
                .group("g1")
                .param(Parameter::new("CN", "John"))
                .param(Parameter::with_values("MEMBER", ["mailto:a@x.org", "mailto:b@x.org"]))
                .value(value::parse(Grammar::CalAddress, "mailto:john@example.com").unwrap()),
        )
        .unwrap();
        assert_eq!(
            prop.to_structured().unwrap(),
            serde_json::json!({
                "ATTENDEE": {
                    "value": "mailto:john@example.com",
                    "group": "g1",
                    "params": {
                        "CN": "John",
                        "MEMBER": ["mailto:a@x.org", "mailto:b@x.org"],
                    },
                }
            })
        );

        let prop = Property::new_multi("COMMENT", [text("one"), text("two")]).unwrap();
        assert_eq!(
            prop.to_structured().unwrap(),
            serde_json::json!({
                "COMMENT": [{ "value": "one" }, { "value": "two" }]
            })
        );
    }
}
