// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property parameters as defined in RFC 5545 Section 3.2.
//!
//! Parameters are kept as an ordered list of name/value pairs: insertion
//! order is significant for round-tripping, and RFC 5545 does not require
//! names to be unique within a property. The `VALUE` and `TZID` names are
//! the ones this crate interprets; everything else is carried verbatim.

use std::fmt;

/// A single property parameter.
///
/// Parameter names are case-insensitive on input and canonicalized to
/// uppercase on construction; values are kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: String,
    value: String,
}

impl Parameter {
    /// Create a parameter, canonicalizing the name to uppercase.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut name = name.into();
        name.make_ascii_uppercase();
        Self {
            name,
            value: value.into(),
        }
    }

    /// The canonical (uppercase) parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameter value, exactly as given.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Find the first parameter with the given canonical name.
#[must_use]
pub fn first<'a>(parameters: &'a [Parameter], name: &str) -> Option<&'a Parameter> {
    parameters.iter().find(|p| p.name() == name)
}

/// Count the parameters with the given canonical name.
#[must_use]
pub fn count(parameters: &[Parameter], name: &str) -> usize {
    parameters.iter().filter(|p| p.name() == name).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_name_to_uppercase() {
        let param = Parameter::new("tzid", "America/New_York");
        assert_eq!(param.name(), "TZID");
        assert_eq!(param.value(), "America/New_York");
    }

    #[test]
    fn keeps_value_verbatim() {
        let param = Parameter::new("X-CASE", "MixedCase");
        assert_eq!(param.value(), "MixedCase");
    }

    #[test]
    fn first_respects_insertion_order() {
        let params = vec![
            Parameter::new("VALUE", "DATE"),
            Parameter::new("VALUE", "DATE-TIME"),
        ];
        assert_eq!(first(&params, "VALUE").unwrap().value(), "DATE");
        assert_eq!(count(&params, "VALUE"), 2);
        assert_eq!(count(&params, "TZID"), 0);
    }

    #[test]
    fn displays_as_name_value_pair() {
        let param = Parameter::new("value", "DATE");
        assert_eq!(param.to_string(), "VALUE=DATE");
    }
}
