// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! TEXT value escaping as defined in RFC 5545 Section 3.3.11.
//!
//! Four two-character sequences are significant: `\\`, `\;`, `\,`, and
//! `\n` / `\N`. Any other backslash sequence passes through unchanged in
//! both directions, so unescaping is safe to apply exactly once to raw
//! content-line text.

use std::borrow::Cow;

/// Decode backslash escape sequences in a raw TEXT value.
///
/// Borrows the input when it contains no backslash at all.
#[must_use]
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some(';') => out.push(';'),
            Some(',') => out.push(','),
            Some('n' | 'N') => out.push('\n'),
            // unknown sequences pass through unchanged
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}

/// Encode the characters that require escaping in a TEXT value.
///
/// Borrows the input when nothing needs escaping.
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', ';', ',', '\n']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescapes_the_four_sequences() {
        assert_eq!(unescape(r"a\\b\;c\,d\ne"), "a\\b;c,d\ne");
        assert_eq!(unescape(r"upper\Ncase"), "upper\ncase");
    }

    #[test]
    fn passes_unknown_sequences_through() {
        assert_eq!(unescape(r"a\xb"), r"a\xb");
        assert_eq!(unescape("trailing\\"), "trailing\\");
    }

    #[test]
    fn borrows_when_nothing_to_do() {
        assert!(matches!(unescape("plain text"), Cow::Borrowed(_)));
        assert!(matches!(escape("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn escape_then_unescape_round_trips() {
        let literal = "back\\slash; semi, comma\nnewline";
        assert_eq!(unescape(&escape(literal)), literal);
    }
}
