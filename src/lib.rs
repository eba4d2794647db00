// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Construct strongly-typed iCalendar properties from raw attribute triples.
//!
//! The entry point is [`PropertyBuilder`]: feed it a property name, a raw
//! value string, and an ordered parameter list (as produced by a content-line
//! tokenizer), and it dispatches over a caller-supplied factory sequence to
//! produce a typed [`Property`]. Date and date-time properties bind their
//! value through a [`TimezoneRegistry`] and can be checked for
//! cross-parameter consistency with [`DateProperty::validate`].
//!
//! Line folding, content-line tokenization, and the component container
//! model (events, to-dos) are out of scope; this crate starts where the
//! tokenizer ends.

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
#![allow(clippy::single_match_else, clippy::match_bool)]

pub mod builder;
pub mod factory;
pub mod keyword;
pub mod parameter;
pub mod property;
pub mod timezone;
pub mod value;

pub use crate::builder::{BuildError, PropertyBuilder};
pub use crate::factory::{
    DatePropertyFactory, PropertyFactory, TextPropertyFactory, default_factories,
};
pub use crate::parameter::Parameter;
pub use crate::property::{
    Capability, DateProperty, ExtensionProperty, Property, TemporalError, TextProperty,
    ValidationError,
};
pub use crate::timezone::{IanaTimezoneRegistry, ResolveError, TimezoneRegistry};
pub use crate::value::{TemporalFormatError, TemporalValue, escape, unescape};
