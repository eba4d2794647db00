// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typed iCalendar properties.
//!
//! A [`Property`] is a named, parameter-bearing container holding either raw
//! text or a bound temporal value. There is one variant per value shape, and
//! each variant's capability is fixed when a factory creates it: the
//! builder branches on [`Property::capability`], never on runtime type
//! inspection.

mod datetime;
mod extension;
mod text;

pub use datetime::{DateProperty, TemporalError, ValidationError};
pub use extension::ExtensionProperty;
pub use text::TextProperty;

use crate::parameter::Parameter;

/// What the builder is allowed to do with a property's value slot.
///
/// Resolved once at creation time; [`Escapable`](Capability::Escapable) and
/// [`Temporal`](Capability::Temporal) are mutually exclusive since both act
/// on the same value slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The raw value may contain backslash escapes requiring decoding.
    Escapable,
    /// The value is a date or date-time instant.
    Temporal,
    /// The value is carried verbatim.
    Verbatim,
}

/// Unified property type with one variant per value shape.
#[derive(Debug, Clone)]
pub enum Property {
    /// A text-valued property.
    Text(TextProperty),

    /// A date or date-time valued property.
    Date(DateProperty),

    /// An experimental (`X-` prefixed) or otherwise unrecognized property,
    /// preserved verbatim for round-trip compatibility.
    Extension(ExtensionProperty),
}

impl Property {
    /// The canonical (uppercase) property name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Text(p) => p.name(),
            Self::Date(p) => p.name(),
            Self::Extension(p) => p.name(),
        }
    }

    /// The ordered parameter list.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        match self {
            Self::Text(p) => p.parameters(),
            Self::Date(p) => p.parameters(),
            Self::Extension(p) => p.parameters(),
        }
    }

    /// Mutable access to the ordered parameter list.
    pub fn parameters_mut(&mut self) -> &mut Vec<Parameter> {
        match self {
            Self::Text(p) => p.parameters_mut(),
            Self::Date(p) => p.parameters_mut(),
            Self::Extension(p) => p.parameters_mut(),
        }
    }

    /// The capability fixed at creation time.
    #[must_use]
    pub fn capability(&self) -> Capability {
        match self {
            Self::Text(p) if p.escapes() => Capability::Escapable,
            Self::Text(_) | Self::Extension(_) => Capability::Verbatim,
            Self::Date(_) => Capability::Temporal,
        }
    }

    /// The value as literal text: the stored text for text and extension
    /// properties, the serialized literal (or the empty string when no value
    /// is bound) for date properties.
    #[must_use]
    pub fn value_text(&self) -> String {
        match self {
            Self::Text(p) => p.value().to_string(),
            Self::Date(p) => p.value().map(ToString::to_string).unwrap_or_default(),
            Self::Extension(p) => p.value().to_string(),
        }
    }

    /// Check cross-parameter consistency.
    ///
    /// Only date properties carry consistency rules; every other variant
    /// validates trivially.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] breached by a date property.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Date(p) => p.validate(),
            Self::Text(_) | Self::Extension(_) => Ok(()),
        }
    }

    /// Borrow as a text property, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&TextProperty> {
        match self {
            Self::Text(p) => Some(p),
            _ => None,
        }
    }

    /// Mutably borrow as a text property, if this is one.
    pub fn as_text_mut(&mut self) -> Option<&mut TextProperty> {
        match self {
            Self::Text(p) => Some(p),
            _ => None,
        }
    }

    /// Borrow as a date property, if this is one.
    #[must_use]
    pub fn as_date(&self) -> Option<&DateProperty> {
        match self {
            Self::Date(p) => Some(p),
            _ => None,
        }
    }

    /// Mutably borrow as a date property, if this is one.
    pub fn as_date_mut(&mut self) -> Option<&mut DateProperty> {
        match self {
            Self::Date(p) => Some(p),
            _ => None,
        }
    }

    /// Borrow as an extension property, if this is one.
    #[must_use]
    pub fn as_extension(&self) -> Option<&ExtensionProperty> {
        match self {
            Self::Extension(p) => Some(p),
            _ => None,
        }
    }
}
