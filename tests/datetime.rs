// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for date property binding, reads, and validation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use aimcal_prop::{
    Parameter, PropertyBuilder, TemporalError, TemporalValue, ValidationError, default_factories,
};
use jiff::civil;

fn build_date(value: &str, parameters: &[Parameter]) -> aimcal_prop::Property {
    let mut builder = PropertyBuilder::new()
        .factories(default_factories())
        .name("DTSTART")
        .value(value);
    for parameter in parameters {
        builder = builder.parameter(parameter.clone());
    }
    builder.build().unwrap()
}

#[test]
fn tzid_parameter_binds_a_zoned_value() {
    let built = build_date(
        "20230615T090000",
        &[Parameter::new("TZID", "America/New_York")],
    );
    let date = built.as_date().unwrap();

    assert!(!date.is_utc());
    date.validate().unwrap();

    let resolved = date.date().unwrap().unwrap();
    assert_eq!(
        resolved,
        TemporalValue::Zoned {
            date_time: civil::datetime(2023, 6, 15, 9, 0, 0, 0),
            tz_id: "America/New_York".to_string(),
        }
    );
}

#[test]
fn utc_literal_binds_a_utc_value() {
    let built = build_date("20230615T090000Z", &[]);
    let date = built.as_date().unwrap();

    assert!(date.is_utc());
    date.validate().unwrap();
}

#[test]
fn tzid_on_a_utc_value_fails_validation() {
    let mut built = build_date("20230615T090000Z", &[]);
    built
        .parameters_mut()
        .push(Parameter::new("TZID", "America/New_York"));

    let date = built.as_date().unwrap();
    assert!(date.is_utc());
    assert_eq!(
        date.validate().unwrap_err(),
        ValidationError::TimezoneCardinality {
            allowed: 0,
            found: 1
        }
    );
}

#[test]
fn date_only_value_requires_the_date_marker() {
    let built = build_date("20230615", &[]);
    let date = built.as_date().unwrap();
    assert_eq!(
        date.validate().unwrap_err(),
        ValidationError::MissingDateValueType
    );

    let built = build_date("20230615", &[Parameter::new("VALUE", "DATE")]);
    built.as_date().unwrap().validate().unwrap();

    let built = build_date("20230615", &[Parameter::new("VALUE", "BINARY")]);
    assert_eq!(
        built.as_date().unwrap().validate().unwrap_err(),
        ValidationError::MismatchedValueType {
            found: "BINARY".to_string(),
            expected: "DATE",
        }
    );
}

#[test]
fn reads_consult_the_tzid_parameter_fresh() {
    // Bound as an absolute instant; the TZID parameter only shapes reads.
    let mut built = build_date("20230615T120000Z", &[]);
    built
        .parameters_mut()
        .push(Parameter::new("TZID", "America/New_York"));

    let date = built.as_date().unwrap();
    let resolved = date.date().unwrap().unwrap();
    assert_eq!(
        resolved,
        TemporalValue::Zoned {
            date_time: civil::datetime(2023, 6, 15, 8, 0, 0, 0),
            tz_id: "America/New_York".to_string(),
        }
    );

    // Rewriting the parameter changes the next read, with no re-bind.
    built.parameters_mut().clear();
    built
        .parameters_mut()
        .push(Parameter::new("TZID", "Europe/Berlin"));
    let date = built.as_date().unwrap();
    let resolved = date.date().unwrap().unwrap();
    assert_eq!(
        resolved,
        TemporalValue::Zoned {
            date_time: civil::datetime(2023, 6, 15, 14, 0, 0, 0),
            tz_id: "Europe/Berlin".to_string(),
        }
    );

    // The stored value never changed variant.
    assert!(date.is_utc());
}

#[test]
fn unknown_tzid_added_after_binding_fails_reads() {
    let mut built = build_date("20230615T120000Z", &[]);
    built
        .parameters_mut()
        .push(Parameter::new("TZID", "Nowhere/Nope"));

    let err = built.as_date().unwrap().date().unwrap_err();
    assert!(matches!(err, TemporalError::UnknownTimezone(_)));
}

#[test]
fn clones_have_independent_parameter_lists() {
    let built = build_date(
        "20230615T090000",
        &[Parameter::new("TZID", "America/New_York")],
    );
    let original = built.as_date().unwrap().clone();
    let mut copy = original.clone();

    copy.parameters_mut().clear();
    copy.parameters_mut()
        .push(Parameter::new("TZID", "Europe/Berlin"));

    // The original still reads at its own zone...
    let resolved = original.date().unwrap().unwrap();
    assert_eq!(resolved.tz_id(), Some("America/New_York"));
    // ...and the copy at its rewritten one, from the shared bound value.
    let resolved = copy.date().unwrap().unwrap();
    assert_eq!(resolved.tz_id(), Some("Europe/Berlin"));
}

#[test]
fn equality_and_hash_ignore_parameters() {
    let a = build_date("20230615T090000Z", &[]);
    let b = build_date(
        "20230615T090000Z",
        &[Parameter::new("VALUE", "DATE-TIME")],
    );
    let a = a.as_date().unwrap();
    let b = b.as_date().unwrap();

    assert_eq!(a, b);
    assert_eq!(hash_of(a), hash_of(b));

    let c = build_date("20230615T100000Z", &[]);
    assert_ne!(a, c.as_date().unwrap());
}

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
