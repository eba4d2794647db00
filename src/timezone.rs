// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Timezone identifier resolution.
//!
//! Properties never interpret a `TZID` value themselves: resolution of an
//! identifier to offset rules goes through a [`TimezoneRegistry`], injected
//! per build session. The registry is shared read-only across concurrent
//! build sessions, hence the `Send + Sync` bound.

use std::fmt;

use jiff::tz::TimeZone;

/// Resolves timezone identifiers to offset rules.
///
/// Implementations must be safe for concurrent read-only lookups; the core
/// never mutates a registry.
pub trait TimezoneRegistry: fmt::Debug + Send + Sync {
    /// Resolve `tz_id` to its offset rules.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when the identifier is unknown to this
    /// registry.
    fn resolve(&self, tz_id: &str) -> Result<TimeZone, ResolveError>;
}

/// A timezone identifier was not known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("timezone identifier [{tz_id}] is not known to the registry")]
pub struct ResolveError {
    /// The identifier that failed to resolve.
    pub tz_id: String,
}

/// Registry backed by the IANA timezone database shipped with jiff.
///
/// This is the registry every [`DateProperty`](crate::DateProperty) starts
/// with until a build session injects another one.
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaTimezoneRegistry;

impl TimezoneRegistry for IanaTimezoneRegistry {
    fn resolve(&self, tz_id: &str) -> Result<TimeZone, ResolveError> {
        TimeZone::get(tz_id).map_err(|_| ResolveError {
            tz_id: tz_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_iana_identifier() {
        let registry = IanaTimezoneRegistry;
        let tz = registry.resolve("America/New_York").unwrap();
        assert_eq!(tz.iana_name(), Some("America/New_York"));
    }

    #[test]
    fn rejects_unknown_identifier() {
        let registry = IanaTimezoneRegistry;
        let err = registry.resolve("Nowhere/Nope").unwrap_err();
        assert_eq!(err.tz_id, "Nowhere/Nope");
    }
}
