// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Experimental and unrecognized properties.

use crate::parameter::Parameter;

/// A property accepted without a registered factory.
///
/// Per RFC 5545, names starting with `X-` are reserved for experimental use
/// and must be accepted by compliant parsers; other unrecognized names are
/// accepted only when the builder is configured permissively. Either way the
/// name, parameters, and value are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionProperty {
    name: String,
    parameters: Vec<Parameter>,
    value: String,
}

impl ExtensionProperty {
    /// Create an extension property, canonicalizing the name to uppercase.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        value: impl Into<String>,
    ) -> Self {
        let mut name = name.into();
        name.make_ascii_uppercase();
        Self {
            name,
            parameters,
            value: value.into(),
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

    /// The verbatim value text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
