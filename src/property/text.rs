// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Text-valued properties (SUMMARY, DESCRIPTION, UID, ...).

use crate::parameter::Parameter;

/// A property whose value is text.
///
/// Whether the raw value is subject to backslash unescaping is a per-name
/// decision made by the factory that creates the property: SUMMARY carries
/// escapable human-readable text, UID does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextProperty {
    name: String,
    parameters: Vec<Parameter>,
    value: String,
    escapes: bool,
}

impl TextProperty {
    /// Create a text property, canonicalizing the name to uppercase.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        value: impl Into<String>,
        escapes: bool,
    ) -> Self {
        let mut name = name.into();
        name.make_ascii_uppercase();
        Self {
            name,
            parameters,
            value: value.into(),
            escapes,
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

    /// The current value text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value text.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Whether the raw value is subject to backslash unescaping.
    #[must_use]
    pub fn escapes(&self) -> bool {
        self.escapes
    }
}
