// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545.

#![allow(missing_docs)]

// Section 3.2 - Property Parameters
pub const KW_TZID: &str = "TZID";
pub const KW_VALUE: &str = "VALUE";

// Section 3.3 - Property Value Data Types
pub const KW_DATE: &str = "DATE";
pub const KW_DATETIME: &str = "DATE-TIME";

// Section 3.8.1 - Descriptive Component Properties
pub const KW_CATEGORIES: &str = "CATEGORIES";
pub const KW_COMMENT: &str = "COMMENT";
pub const KW_DESCRIPTION: &str = "DESCRIPTION";
pub const KW_LOCATION: &str = "LOCATION";
pub const KW_RESOURCES: &str = "RESOURCES";
pub const KW_SUMMARY: &str = "SUMMARY";

// Section 3.8.2 - Date and Time Component Properties
pub const KW_DTSTART: &str = "DTSTART";
pub const KW_DTEND: &str = "DTEND";
pub const KW_DUE: &str = "DUE";
pub const KW_COMPLETED: &str = "COMPLETED";

// Section 3.8.3 - Time Zone Component Properties
pub const KW_TZNAME: &str = "TZNAME";

// Section 3.8.4 - Relationship Component Properties
pub const KW_CONTACT: &str = "CONTACT";
pub const KW_RECURRENCE_ID: &str = "RECURRENCE-ID";
pub const KW_UID: &str = "UID";
pub const KW_URL: &str = "URL";

// Section 3.8.7 - Change Management Component Properties
pub const KW_CREATED: &str = "CREATED";
pub const KW_DTSTAMP: &str = "DTSTAMP";
pub const KW_LAST_MODIFIED: &str = "LAST-MODIFIED";

// Section 3.7 - Calendar Properties
pub const KW_METHOD: &str = "METHOD";
pub const KW_PRODID: &str = "PRODID";
pub const KW_VERSION: &str = "VERSION";

/// Reserved prefix for experimental (vendor extension) names, per RFC 5545
/// Section 3.8.8.2. Names are compared after uppercase canonicalization, so
/// the lowercase form never appears here.
pub const KW_X_PREFIX: &str = "X-";
