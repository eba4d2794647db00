// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property factories.
//!
//! A factory maps one canonical property name to a typed [`Property`]. The
//! builder scans an ordered factory sequence, so the standard set returned
//! by [`default_factories`] can be overridden per name by appending a custom
//! factory after it; see [`PropertyBuilder`](crate::PropertyBuilder).

use std::fmt;
use std::sync::Arc;

use crate::builder::BuildError;
use crate::keyword::{
    KW_CATEGORIES, KW_COMMENT, KW_COMPLETED, KW_CONTACT, KW_CREATED, KW_DESCRIPTION, KW_DTEND,
    KW_DTSTAMP, KW_DTSTART, KW_DUE, KW_LAST_MODIFIED, KW_LOCATION, KW_METHOD, KW_PRODID,
    KW_RECURRENCE_ID, KW_RESOURCES, KW_SUMMARY, KW_TZID, KW_TZNAME, KW_UID, KW_URL, KW_VERSION,
};
use crate::parameter::Parameter;
use crate::property::{DateProperty, Property, TextProperty};

/// Produces a typed [`Property`] for the names it supports.
///
/// Factories are stateless and shared read-only across build sessions; the
/// set in effect is supplied per session, never global.
pub trait PropertyFactory: fmt::Debug + Send + Sync {
    /// Whether this factory recognizes the canonical property name.
    fn supports(&self, name: &str) -> bool;

    /// Create a property from the raw parameters and value text.
    ///
    /// Returning `Ok(None)` declines the name, leaving an earlier factory's
    /// result in place during dispatch.
    ///
    /// # Errors
    ///
    /// Any [`BuildError`] raised here propagates to the caller unmodified.
    fn create(&self, parameters: Vec<Parameter>, value: &str)
    -> Result<Option<Property>, BuildError>;
}

/// Standard text properties and whether their values carry escapes.
const TEXT_SPECS: &[(&str, bool)] = &[
    (KW_CATEGORIES, true),
    (KW_COMMENT, true),
    (KW_CONTACT, true),
    (KW_DESCRIPTION, true),
    (KW_LOCATION, true),
    (KW_RESOURCES, true),
    (KW_SUMMARY, true),
    (KW_TZNAME, true),
    (KW_METHOD, false),
    (KW_PRODID, false),
    (KW_TZID, false),
    (KW_UID, false),
    (KW_URL, false),
    (KW_VERSION, false),
];

/// Standard date and date-time properties.
const DATE_PROPERTIES: &[&str] = &[
    KW_COMPLETED,
    KW_CREATED,
    KW_DTEND,
    KW_DTSTAMP,
    KW_DTSTART,
    KW_DUE,
    KW_LAST_MODIFIED,
    KW_RECURRENCE_ID,
];

/// Factory for a single text property name.
#[derive(Debug, Clone, Copy)]
pub struct TextPropertyFactory {
    name: &'static str,
    escapes: bool,
}

impl TextPropertyFactory {
    /// Create a factory for `name`, with `escapes` deciding whether the
    /// builder decodes backslash sequences in the raw value.
    #[must_use]
    pub const fn new(name: &'static str, escapes: bool) -> Self {
        Self { name, escapes }
    }
}

impl PropertyFactory for TextPropertyFactory {
    fn supports(&self, name: &str) -> bool {
        name == self.name
    }

    fn create(
        &self,
        parameters: Vec<Parameter>,
        value: &str,
    ) -> Result<Option<Property>, BuildError> {
        Ok(Some(Property::Text(TextProperty::new(
            self.name,
            parameters,
            value,
            self.escapes,
        ))))
    }
}

/// Factory for a single date or date-time property name.
#[derive(Debug, Clone, Copy)]
pub struct DatePropertyFactory {
    name: &'static str,
}

impl DatePropertyFactory {
    /// Create a factory for `name`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl PropertyFactory for DatePropertyFactory {
    fn supports(&self, name: &str) -> bool {
        name == self.name
    }

    /// Creates the property with an empty value slot: binding the value text
    /// happens after the build session's timezone registry is injected, so a
    /// TZID known only to a custom registry never hits the default one.
    fn create(
        &self,
        parameters: Vec<Parameter>,
        _value: &str,
    ) -> Result<Option<Property>, BuildError> {
        Ok(Some(Property::Date(DateProperty::new(
            self.name, parameters,
        ))))
    }
}

/// The standard factory set.
///
/// Append custom factories after these to override any of them.
#[must_use]
pub fn default_factories() -> Vec<Arc<dyn PropertyFactory>> {
    let mut factories: Vec<Arc<dyn PropertyFactory>> =
        Vec::with_capacity(TEXT_SPECS.len() + DATE_PROPERTIES.len());
    for &(name, escapes) in TEXT_SPECS {
        factories.push(Arc::new(TextPropertyFactory::new(name, escapes)));
    }
    for &name in DATE_PROPERTIES {
        factories.push(Arc::new(DatePropertyFactory::new(name)));
    }
    factories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::Capability;

    #[test]
    fn default_set_covers_standard_shapes() {
        let factories = default_factories();

        let summary = factories.iter().find(|f| f.supports(KW_SUMMARY)).unwrap();
        let prop = summary.create(Vec::new(), "Team sync").unwrap().unwrap();
        assert_eq!(prop.capability(), Capability::Escapable);

        let uid = factories.iter().find(|f| f.supports(KW_UID)).unwrap();
        let prop = uid.create(Vec::new(), "abc-123").unwrap().unwrap();
        assert_eq!(prop.capability(), Capability::Verbatim);

        let dtstart = factories.iter().find(|f| f.supports(KW_DTSTART)).unwrap();
        let prop = dtstart.create(Vec::new(), "20230615T090000Z").unwrap().unwrap();
        assert_eq!(prop.capability(), Capability::Temporal);
    }

    #[test]
    fn no_default_factory_claims_extension_names() {
        let factories = default_factories();
        assert!(!factories.iter().any(|f| f.supports("X-CUSTOM")));
    }
}
