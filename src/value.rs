// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property value types as defined in RFC 5545 Section 3.3.
//!
//! This crate interprets two value families: the DATE / DATE-TIME literals
//! (datetime.rs) and TEXT backslash escaping (text.rs). Everything else is
//! carried through as raw text by the property layer.

mod datetime;
mod text;

pub use datetime::{TemporalFormatError, TemporalValue};
pub use text::{escape, unescape};
