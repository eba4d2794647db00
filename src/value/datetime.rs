// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! DATE and DATE-TIME values as defined in RFC 5545 Sections 3.3.4 and 3.3.5.

use std::fmt;

use chumsky::prelude::*;
use jiff::Timestamp;
use jiff::civil;
use jiff::tz::TimeZone;

/// A date or date-time instant.
///
/// The variant is fixed when the literal is parsed, from its lexical form
/// alone: an 8-digit literal is a [`Date`](TemporalValue::Date), a literal
/// with a time component and a trailing `Z` is a [`Utc`](TemporalValue::Utc)
/// instant, and a literal with a time component but no `Z` is a
/// [`Zoned`](TemporalValue::Zoned) local time. A value is never silently
/// reinterpreted as another variant; re-reading it at a different zone
/// produces a new value.
///
/// `Zoned` stores the zone *identifier* only. Offset rules always come from
/// a [`TimezoneRegistry`](crate::TimezoneRegistry) at the point of use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemporalValue {
    /// A date without a time component.
    Date(civil::Date),

    /// An absolute instant in UTC.
    Utc(Timestamp),

    /// A local date-time qualified by a timezone identifier.
    Zoned {
        /// The local (wall clock) date and time.
        date_time: civil::DateTime,
        /// Identifier of the zone the local time is expressed in.
        tz_id: String,
    },
}

impl TemporalValue {
    /// Parse a literal, deciding the variant from its lexical form.
    ///
    /// A date-time literal without a UTC marker has no zone of its own and
    /// binds to `default_tz_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TemporalFormatError`] when the text is not a valid DATE or
    /// DATE-TIME literal.
    pub fn parse(text: &str, default_tz_id: &str) -> Result<Self, TemporalFormatError> {
        if text.contains('T') {
            let (date_time, utc) = parse_date_time(text)?;
            if utc {
                let zoned = date_time
                    .to_zoned(TimeZone::UTC)
                    .map_err(|e| TemporalFormatError::new(text, &e.to_string()))?;
                Ok(Self::Utc(zoned.timestamp()))
            } else {
                Ok(Self::Zoned {
                    date_time,
                    tz_id: default_tz_id.to_string(),
                })
            }
        } else {
            parse_date(text).map(Self::Date)
        }
    }

    /// Parse a local date-time literal bound to the given zone identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TemporalFormatError`] when the text is not a valid DATE-TIME
    /// literal, or when it carries a trailing UTC marker: a UTC instant
    /// cannot be rebound to a zone without reinterpreting it.
    pub fn parse_at_zone(text: &str, tz_id: &str) -> Result<Self, TemporalFormatError> {
        let (date_time, utc) = parse_date_time(text)?;
        if utc {
            Err(TemporalFormatError::new(
                text,
                "a UTC literal cannot be bound to a timezone",
            ))
        } else {
            Ok(Self::Zoned {
                date_time,
                tz_id: tz_id.to_string(),
            })
        }
    }

    /// Whether this is a date-only value.
    #[must_use]
    pub fn is_date_only(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// Whether this is an absolute UTC instant.
    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self, Self::Utc(_))
    }

    /// The zone identifier, for zoned values.
    #[must_use]
    pub fn tz_id(&self) -> Option<&str> {
        match self {
            Self::Zoned { tz_id, .. } => Some(tz_id),
            _ => None,
        }
    }
}

impl fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => {
                write!(f, "{:04}{:02}{:02}", date.year(), date.month(), date.day())
            }
            Self::Utc(timestamp) => {
                let dt = timestamp.to_zoned(TimeZone::UTC).datetime();
                write!(
                    f,
                    "{:04}{:02}{:02}T{:02}{:02}{:02}Z",
                    dt.year(),
                    dt.month(),
                    dt.day(),
                    dt.hour(),
                    dt.minute(),
                    dt.second()
                )
            }
            Self::Zoned { date_time: dt, .. } => {
                write!(
                    f,
                    "{:04}{:02}{:02}T{:02}{:02}{:02}",
                    dt.year(),
                    dt.month(),
                    dt.day(),
                    dt.hour(),
                    dt.minute(),
                    dt.second()
                )
            }
        }
    }
}

/// The text is not a lexically valid DATE or DATE-TIME literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date or date-time literal [{text}]: {reason}")]
pub struct TemporalFormatError {
    /// The offending literal.
    pub text: String,
    /// What was wrong with it.
    pub reason: String,
}

impl TemporalFormatError {
    pub(crate) fn new(text: &str, reason: &str) -> Self {
        Self {
            text: text.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Parse a `date-fullyear date-month date-mday` literal (RFC 5545 3.3.4).
fn parse_date(text: &str) -> Result<civil::Date, TemporalFormatError> {
    value_date()
        .then_ignore(end())
        .parse(text)
        .into_result()
        .map_err(|errs| from_rich(text, &errs))
}

/// Parse a `date "T" time [time-utc]` literal (RFC 5545 3.3.5), returning
/// the civil date-time and whether the UTC marker was present.
fn parse_date_time(text: &str) -> Result<(civil::DateTime, bool), TemporalFormatError> {
    value_date_time()
        .then_ignore(end())
        .parse(text)
        .into_result()
        .map_err(|errs| from_rich(text, &errs))
}

fn from_rich(text: &str, errors: &[Rich<'_, char>]) -> TemporalFormatError {
    let reason = errors
        .first()
        .map_or_else(|| "malformed literal".to_string(), ToString::to_string);
    TemporalFormatError::new(text, &reason)
}

#[expect(clippy::cast_possible_truncation)] // a decimal digit is 0-9
fn digit<'src>() -> impl Parser<'src, &'src str, u8, extra::Err<Rich<'src, char>>> {
    any().try_map(|c: char, span| {
        c.to_digit(10)
            .map(|d| d as u8)
            .ok_or_else(|| Rich::custom(span, "expected a digit"))
    })
}

fn two_digits<'src>() -> impl Parser<'src, &'src str, u8, extra::Err<Rich<'src, char>>> {
    digit().then(digit()).map(|(a, b)| 10 * a + b)
}

/// ```txt
/// date-value    = date-fullyear date-month date-mday
/// date-fullyear = 4DIGIT
/// date-month    = 2DIGIT        ;01-12
/// date-mday     = 2DIGIT        ;01-28, 01-29, 01-30, 01-31
/// ```
///
/// Month/day ranges (including month lengths and leap years) are validated
/// through the `jiff` constructor rather than in the grammar.
#[expect(clippy::cast_possible_wrap)]
fn value_date<'src>() -> impl Parser<'src, &'src str, civil::Date, extra::Err<Rich<'src, char>>> {
    two_digits()
        .then(two_digits())
        .then(two_digits())
        .then(two_digits())
        .try_map(|(((century, year), month), day), span| {
            let year = i16::from(century) * 100 + i16::from(year);
            civil::Date::new(year, month as i8, day as i8)
                .map_err(|_| Rich::custom(span, "invalid calendar date"))
        })
}

/// ```txt
/// time         = time-hour time-minute time-second [time-utc]
/// time-hour    = 2DIGIT        ;00-23
/// time-minute  = 2DIGIT        ;00-59
/// time-second  = 2DIGIT        ;00-60
/// time-utc     = "Z"
/// ```
#[expect(clippy::cast_possible_wrap)]
fn value_time<'src>()
-> impl Parser<'src, &'src str, (civil::Time, bool), extra::Err<Rich<'src, char>>> {
    two_digits()
        .then(two_digits())
        .then(two_digits())
        .then(just('Z').or_not())
        .try_map(|(((hour, minute), second), utc), span| {
            if second > 60 {
                return Err(Rich::custom(span, "invalid time of day"));
            }
            // NOTE: We contract leap second 60 to 59 for simplicity
            let time = civil::Time::new(hour as i8, minute as i8, second.min(59) as i8, 0)
                .map_err(|_| Rich::custom(span, "invalid time of day"))?;
            Ok((time, utc.is_some()))
        })
}

/// ```txt
/// date-time = date "T" time
/// ```
fn value_date_time<'src>()
-> impl Parser<'src, &'src str, (civil::DateTime, bool), extra::Err<Rich<'src, char>>> {
    value_date()
        .then_ignore(just('T'))
        .then(value_time())
        .map(|(date, (time, utc))| (civil::DateTime::from_parts(date, time), utc))
}
