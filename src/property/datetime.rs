// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date and date-time valued properties (DTSTART, DUE, COMPLETED, ...).

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use jiff::tz::TimeZone;

use crate::keyword::{KW_DATE, KW_DATETIME, KW_TZID, KW_VALUE};
use crate::parameter::{self, Parameter};
use crate::timezone::{IanaTimezoneRegistry, ResolveError, TimezoneRegistry};
use crate::value::{TemporalFormatError, TemporalValue};

/// A property whose value is a date or date-time instant.
///
/// The value slot is empty until [`set_value`](Self::set_value) (or
/// [`set_date`](Self::set_date)) binds a [`TemporalValue`]. The bound value
/// itself is immutable; reads through [`date`](Self::date) consult the TZID
/// parameter fresh on every call, so mutating the parameter list changes
/// subsequent reads without a re-bind.
///
/// # Equality
///
/// Equality and hashing derive **solely** from the resolved value returned
/// by [`date`](Self::date), never from the parameter list. Two properties
/// holding equal resolved instants with different `TZID`/`VALUE` parameter
/// sets compare equal and hash identically, and a value whose zone cannot be
/// resolved compares as absent. Callers needing structural equality must
/// compare names and parameters themselves.
#[derive(Debug, Clone)]
pub struct DateProperty {
    name: String,
    parameters: Vec<Parameter>,
    value: Option<TemporalValue>,
    registry: Arc<dyn TimezoneRegistry>,
}

impl DateProperty {
    /// Create a date property with an empty value slot, canonicalizing the
    /// name to uppercase. The property starts with the IANA registry until
    /// another one is injected.
    #[must_use]
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        let mut name = name.into();
        name.make_ascii_uppercase();
        Self {
            name,
            parameters,
            value: None,
            registry: Arc::new(IanaTimezoneRegistry),
        }
    }

    /// The canonical (uppercase) property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered parameter list.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Mutable access to the ordered parameter list.
    pub fn parameters_mut(&mut self) -> &mut Vec<Parameter> {
        &mut self.parameters
    }

    /// Replace the timezone registry used for all subsequent binds and reads.
    pub fn set_timezone_registry(&mut self, registry: Arc<dyn TimezoneRegistry>) {
        self.registry = registry;
    }

    /// Bind a value from its literal text.
    ///
    /// Empty text empties the value slot. With a `TZID` parameter present the
    /// text must be a local date-time literal, bound to that zone; without
    /// one the literal's lexical form decides the variant, floating
    /// date-times binding to the system zone. On error the previous value
    /// is left untouched.
    ///
    /// # Errors
    ///
    /// [`TemporalError::Format`] when the text is not a valid literal for
    /// its position; [`TemporalError::UnknownTimezone`] when the `TZID`
    /// parameter does not resolve.
    pub fn set_value(&mut self, text: &str) -> Result<(), TemporalError> {
        if text.is_empty() {
            self.value = None;
            return Ok(());
        }

        let bound = match parameter::first(&self.parameters, KW_TZID) {
            Some(tz_param) => {
                self.registry.resolve(tz_param.value())?;
                TemporalValue::parse_at_zone(text, tz_param.value())?
            }
            None => TemporalValue::parse(text, &system_tz_id())?,
        };
        self.value = Some(bound);
        Ok(())
    }

    /// Reassign the bound value directly, or empty the slot with `None`.
    pub fn set_date(&mut self, value: Option<TemporalValue>) {
        self.value = value;
    }

    /// The stored value, without zone re-resolution.
    #[must_use]
    pub fn value(&self) -> Option<&TemporalValue> {
        self.value.as_ref()
    }

    /// The value as read through the current `TZID` parameter.
    ///
    /// The parameter is consulted fresh on every call, never cached,
    /// so changing it changes what this returns. A UTC or zoned value is
    /// converted to the local representation at the parameter's zone;
    /// date-only values pass through unchanged; without the parameter the
    /// stored value is returned as-is. `Ok(None)` means no value is bound.
    ///
    /// # Errors
    ///
    /// [`TemporalError::UnknownTimezone`] when the parameter's zone (or the
    /// stored value's bound zone) does not resolve.
    pub fn date(&self) -> Result<Option<TemporalValue>, TemporalError> {
        let Some(stored) = &self.value else {
            return Ok(None);
        };
        let Some(tz_param) = parameter::first(&self.parameters, KW_TZID) else {
            return Ok(Some(stored.clone()));
        };

        let resolved = match stored {
            TemporalValue::Date(date) => TemporalValue::Date(*date),
            TemporalValue::Utc(timestamp) => {
                let view = self.registry.resolve(tz_param.value())?;
                TemporalValue::Zoned {
                    date_time: timestamp.to_zoned(view).datetime(),
                    tz_id: tz_param.value().to_string(),
                }
            }
            TemporalValue::Zoned { date_time, tz_id } => {
                let view = self.registry.resolve(tz_param.value())?;
                let bound = self.registry.resolve(tz_id)?;
                let timestamp = date_time
                    .to_zoned(bound)
                    .map_err(|e| {
                        TemporalFormatError::new(&date_time.to_string(), &e.to_string())
                    })?
                    .timestamp();
                TemporalValue::Zoned {
                    date_time: timestamp.to_zoned(view).datetime(),
                    tz_id: tz_param.value().to_string(),
                }
            }
        };
        Ok(Some(resolved))
    }

    /// Whether the bound value is an absolute UTC instant.
    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self.value, Some(TemporalValue::Utc(_)))
    }

    /// Check cross-parameter consistency.
    ///
    /// Construction never runs these rules, so a freshly built property may
    /// be inconsistent; this is the sole gate before handing the property
    /// downstream.
    ///
    /// # Errors
    ///
    /// The first rule breached, as a distinct [`ValidationError`] variant:
    /// repeated `VALUE` parameters, `TZID` cardinality (none permitted on a
    /// UTC value, at most one otherwise), a date-only value without
    /// `VALUE=DATE`, a `VALUE` disagreeing with the bound variant, or a
    /// zoned value whose `TZID` parameter is absent or names another zone.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if parameter::count(&self.parameters, KW_VALUE) > 1 {
            return Err(ValidationError::RepeatedValueType);
        }

        let tz_count = parameter::count(&self.parameters, KW_TZID);
        let allowed = if self.is_utc() { 0 } else { 1 };
        if tz_count > allowed {
            return Err(ValidationError::TimezoneCardinality {
                allowed,
                found: tz_count,
            });
        }

        let value_type = parameter::first(&self.parameters, KW_VALUE);
        match &self.value {
            None => Ok(()),
            Some(TemporalValue::Date(_)) => match value_type {
                None => Err(ValidationError::MissingDateValueType),
                Some(p) if p.value() != KW_DATE => Err(ValidationError::MismatchedValueType {
                    found: p.value().to_string(),
                    expected: KW_DATE,
                }),
                Some(_) => Ok(()),
            },
            Some(value) => {
                if let Some(p) = value_type
                    && p.value() != KW_DATETIME
                {
                    return Err(ValidationError::MismatchedValueType {
                        found: p.value().to_string(),
                        expected: KW_DATETIME,
                    });
                }
                if let TemporalValue::Zoned { tz_id, .. } = value {
                    let tz_param = parameter::first(&self.parameters, KW_TZID);
                    match tz_param {
                        Some(p) if p.value() == tz_id => {}
                        _ => {
                            return Err(ValidationError::TimezoneMismatch {
                                expected: tz_id.clone(),
                                found: tz_param.map(|p| p.value().to_string()),
                            });
                        }
                    }
                }
                Ok(())
            }
        }
    }

    fn resolved(&self) -> Option<TemporalValue> {
        self.date().ok().flatten()
    }
}

impl PartialEq for DateProperty {
    fn eq(&self, other: &Self) -> bool {
        self.resolved() == other.resolved()
    }
}

impl Eq for DateProperty {}

impl Hash for DateProperty {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resolved().hash(state);
    }
}

/// The zone a floating date-time literal binds to.
fn system_tz_id() -> String {
    TimeZone::system().iana_name().unwrap_or("UTC").to_string()
}

/// A date or date-time value could not be bound or read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemporalError {
    /// The value text is not a lexically valid literal.
    #[error(transparent)]
    Format(#[from] TemporalFormatError),

    /// A timezone identifier did not resolve through the registry.
    #[error(transparent)]
    UnknownTimezone(#[from] ResolveError),
}

/// A cross-parameter consistency rule was breached.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The `VALUE` parameter occurred more than once.
    #[error("parameter [VALUE] must not occur more than once")]
    RepeatedValueType,

    /// Too many `TZID` parameters for the bound variant.
    #[error("{found} [TZID] parameters present where at most {allowed} permitted")]
    TimezoneCardinality {
        /// How many `TZID` parameters the bound variant permits.
        allowed: usize,
        /// How many were present.
        found: usize,
    },

    /// A date-only value requires `VALUE=DATE`.
    #[error("parameter [VALUE=DATE] must be specified for a date-only value")]
    MissingDateValueType,

    /// The `VALUE` parameter disagrees with the bound variant.
    #[error("parameter [VALUE={found}] is invalid here, expected [{expected}]")]
    MismatchedValueType {
        /// The declared value type.
        found: String,
        /// The value type the bound variant requires.
        expected: &'static str,
    },

    /// A zoned value requires a `TZID` parameter naming its bound zone.
    #[error("parameter [TZID={found:?}] does not match timezone [{expected}]")]
    TimezoneMismatch {
        /// The zone identifier the value is bound to.
        expected: String,
        /// The zone identifier the parameter carried, if any.
        found: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::KW_DTSTART;

    fn bound_utc() -> DateProperty {
        let mut prop = DateProperty::new(KW_DTSTART, Vec::new());
        prop.set_value("20230615T090000Z").unwrap();
        prop
    }

    #[test]
    fn empty_text_empties_the_slot() {
        let mut prop = bound_utc();
        prop.set_value("").unwrap();
        assert!(prop.value().is_none());
        assert!(prop.date().unwrap().is_none());
    }

    #[test]
    fn parse_failure_keeps_prior_state() {
        let mut prop = bound_utc();
        let before = prop.value().cloned();
        assert!(prop.set_value("not-a-date").is_err());
        assert_eq!(prop.value().cloned(), before);
    }

    #[test]
    fn validates_repeated_value_parameter() {
        let mut prop = bound_utc();
        prop.parameters_mut()
            .push(Parameter::new(KW_VALUE, KW_DATETIME));
        prop.parameters_mut()
            .push(Parameter::new(KW_VALUE, KW_DATETIME));
        assert_eq!(
            prop.validate().unwrap_err(),
            ValidationError::RepeatedValueType
        );
    }

    #[test]
    fn validates_tzid_forbidden_on_utc() {
        let mut prop = bound_utc();
        prop.parameters_mut()
            .push(Parameter::new(KW_TZID, "America/New_York"));
        assert_eq!(
            prop.validate().unwrap_err(),
            ValidationError::TimezoneCardinality {
                allowed: 0,
                found: 1
            }
        );
    }

    #[test]
    fn validates_date_only_needs_value_date() {
        let mut prop = DateProperty::new(KW_DTSTART, Vec::new());
        prop.set_value("20230615").unwrap();
        assert_eq!(
            prop.validate().unwrap_err(),
            ValidationError::MissingDateValueType
        );

        prop.parameters_mut().push(Parameter::new(KW_VALUE, KW_DATE));
        prop.validate().unwrap();
    }

    #[test]
    fn validates_value_type_against_variant() {
        let mut prop = bound_utc();
        prop.parameters_mut().push(Parameter::new(KW_VALUE, KW_DATE));
        assert!(matches!(
            prop.validate().unwrap_err(),
            ValidationError::MismatchedValueType { .. }
        ));
    }

    #[test]
    fn validates_zoned_tzid_agreement() {
        let mut prop = DateProperty::new(
            KW_DTSTART,
            vec![Parameter::new(KW_TZID, "America/New_York")],
        );
        prop.set_value("20230615T090000").unwrap();
        prop.validate().unwrap();

        // Rewriting the parameter breaks agreement with the bound zone.
        prop.parameters_mut().clear();
        prop.parameters_mut()
            .push(Parameter::new(KW_TZID, "Europe/Berlin"));
        assert!(matches!(
            prop.validate().unwrap_err(),
            ValidationError::TimezoneMismatch { .. }
        ));
    }

    #[test]
    fn equality_ignores_parameters() {
        let a = bound_utc();
        let mut b = bound_utc();
        b.parameters_mut()
            .push(Parameter::new(KW_VALUE, KW_DATETIME));
        assert_eq!(a, b);

        let mut c = DateProperty::new(KW_DTSTART, Vec::new());
        c.set_value("20230615T100000Z").unwrap();
        assert_ne!(a, c);
    }
}
