// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property construction from raw attribute triples.

use std::sync::Arc;

use crate::factory::PropertyFactory;
use crate::keyword::KW_X_PREFIX;
use crate::parameter::Parameter;
use crate::property::{Capability, ExtensionProperty, Property, TemporalError};
use crate::timezone::TimezoneRegistry;
use crate::value::unescape;

/// Builds one [`Property`] from a raw (name, parameters, value) triple.
///
/// Configuration methods are chainable accumulators that only ever append
/// state, and [`build`](Self::build) is the sole terminal operation. A
/// builder serves a single build session; it is not meant to be shared, but
/// `build` can be called repeatedly and returns the same result while the
/// configuration is unchanged.
///
/// ```
/// use aimcal_prop::{Parameter, PropertyBuilder, default_factories};
///
/// let property = PropertyBuilder::new()
///     .factories(default_factories())
///     .name("dtstart")
///     .value("20230615T090000")
///     .parameter(Parameter::new("TZID", "America/New_York"))
///     .build()?;
/// assert_eq!(property.name(), "DTSTART");
/// # Ok::<(), aimcal_prop::BuildError>(())
/// ```
#[derive(Debug, Default)]
pub struct PropertyBuilder {
    factories: Vec<Arc<dyn PropertyFactory>>,
    name: Option<String>,
    value: Option<String>,
    parameters: Vec<Parameter>,
    registry: Option<Arc<dyn TimezoneRegistry>>,
    permit_unrecognized: bool,
}

impl PropertyBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append factories to the dispatch sequence.
    ///
    /// Order is significant: a factory appended later overrides an earlier
    /// one for every name both support.
    #[must_use]
    pub fn factories(mut self, factories: impl IntoIterator<Item = Arc<dyn PropertyFactory>>) -> Self {
        self.factories.extend(factories);
        self
    }

    /// Set the property name, canonicalized to uppercase.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        // property names are case-insensitive, but convert to upper case to
        // simplify further processing
        self.name = Some(name.to_ascii_uppercase());
        self
    }

    /// Set the raw value text, trimmed of surrounding whitespace.
    #[must_use]
    pub fn value(mut self, value: &str) -> Self {
        self.value = Some(value.trim().to_string());
        self
    }

    /// Append a parameter.
    #[must_use]
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Set the timezone registry injected into date properties.
    #[must_use]
    pub fn timezone_registry(mut self, registry: Arc<dyn TimezoneRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Permit unrecognized, non-experimental names, degrading them to
    /// extension properties instead of failing the build.
    #[must_use]
    pub fn permit_unrecognized_names(mut self, permit: bool) -> Self {
        self.permit_unrecognized = permit;
        self
    }

    /// Construct the property.
    ///
    /// # Errors
    ///
    /// [`BuildError::UnsupportedName`] when no factory matched and the name
    /// is neither `X-` prefixed nor permitted as unrecognized; any error
    /// raised by a factory or by temporal binding propagates unmodified.
    pub fn build(&self) -> Result<Property, BuildError> {
        let name = self.name.as_deref().unwrap_or("");
        let value = self.value.as_deref().unwrap_or("");

        // Every supporting factory runs and the last non-declining result
        // wins: appending a factory after the defaults overrides them for the
        // names it supports. Intentional override dispatch, not a missing
        // short-circuit.
        let mut property = None;
        for factory in &self.factories {
            if !factory.supports(name) {
                continue;
            }
            if let Some(created) = factory.create(self.parameters.clone(), value)? {
                if property.is_some() {
                    tracing::debug!(name, "factory overrides an earlier dispatch result");
                }
                property = Some(created);
            }
        }

        let Some(mut property) = property else {
            return if name.starts_with(KW_X_PREFIX) || self.permit_unrecognized {
                tracing::debug!(name, "no factory matched, building an extension property");
                Ok(Property::Extension(ExtensionProperty::new(
                    name,
                    self.parameters.clone(),
                    value,
                )))
            } else {
                Err(BuildError::UnsupportedName(name.to_string()))
            };
        };

        // Escaping and temporal binding are mutually exclusive: both act on
        // the same value slot, always from the original trimmed text.
        match property.capability() {
            Capability::Escapable => {
                if let Some(text) = property.as_text_mut() {
                    text.set_value(unescape(value).into_owned());
                }
            }
            Capability::Temporal => {
                if let Some(date) = property.as_date_mut() {
                    if let Some(registry) = &self.registry {
                        date.set_timezone_registry(Arc::clone(registry));
                    }
                    date.set_value(value)?;
                }
            }
            Capability::Verbatim => {}
        }

        Ok(property)
    }
}

/// Building a property from raw attributes failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// No factory matched the name, and the name is neither experimental
    /// nor permitted by [`PropertyBuilder::permit_unrecognized_names`].
    #[error("unsupported property name [{0}]")]
    UnsupportedName(String),

    /// Binding the value of a date property failed.
    #[error(transparent)]
    Temporal(#[from] TemporalError),
}
