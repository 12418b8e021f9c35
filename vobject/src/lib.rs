// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Validate and canonicalize iCalendar and vCard property values.
//!
//! The [`Dispatcher`] checks a property against the [`LegalityMatrix`] of its
//! component, selects the grammar of its value from the property name and
//! parameters, and parses the raw text into a typed [`ParsedValue`].
//! [`Property`] wraps the result and renders its folded display form and its
//! canonical form for semantic comparison.
//!
//! ```
//! use vobject::{ComponentKind, Dispatcher, Parameter, ParsedValue};
//!
//! let dispatcher = Dispatcher::new();
//! let value = dispatcher
//!     .resolve("PERCENT-COMPLETE", &[], ComponentKind::Todo, "39")
//!     .unwrap();
//! assert_eq!(value, ParsedValue::Integer(39));
//!
//! let params = [Parameter::new("VALUE", "DATE")];
//! let prop = dispatcher
//!     .property("DTSTART", None, params.to_vec(), ComponentKind::Event, "19970714")
//!     .unwrap();
//! assert_eq!(prop.display(), "DTSTART;VALUE=DATE:19970714\r\n");
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::similar_names,
    clippy::single_match_else,
    clippy::match_bool
)]

pub mod component;
pub mod dispatch;
pub mod formatter;
pub mod keyword;
pub mod legality;
pub mod parameter;
pub mod property;
pub mod tz;
pub mod value;

pub use crate::component::ComponentKind;
pub use crate::dispatch::{DispatchFailure, DispatchReason, Dispatcher, ResolveError};
pub use crate::formatter::{FoldingStyle, FormatOptions, LineEnding};
pub use crate::legality::{IllegalProperty, LegalityMatrix};
pub use crate::parameter::{Parameter, ParameterError, ValueType};
pub use crate::property::{Property, PropertyError, PropertyName, PropertyPayload};
pub use crate::tz::{SystemTimezones, TimezoneConverter, TimezoneNotFound, TimezoneResolver};
pub use crate::value::{Grammar, GrammarFailure, ParsedValue, RangeViolation, ValueError};
