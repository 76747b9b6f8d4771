//! Behavioural guarantees of `Coercer::convert_to`.

use coercion_convert::{CoerceError, TargetType, Value};
use coercion_test::{coerce, utc_coercer, with_offset, ymd, ymd_hms};

#[test_log::test]
fn assignable_inputs_are_returned_unchanged() {
    let coercer = utc_coercer();
    let ulid = ulid::Ulid::from_string("01ARZ3NDEKTSV4RRFFQ69G5FAV").unwrap();

    let cases = [
        (Value::Int32(5), TargetType::Int32),
        (Value::from("  padded  "), TargetType::Text),
        (Value::Ulid(ulid), TargetType::Ulid),
        (Value::Date(ymd(2023, 6, 15)), TargetType::Date),
        (
            Value::LocalDateTime(ymd_hms(2023, 6, 15, 8, 0, 0)),
            TargetType::nullable(TargetType::LocalDateTime),
        ),
        (
            Value::OffsetDateTime(with_offset(ymd_hms(2023, 6, 15, 8, 0, 0), 3600)),
            TargetType::OffsetDateTime,
        ),
        (Value::Bool(false), TargetType::Any),
    ];

    for (value, target) in cases {
        let converted = coercer.convert_to(Some(value.clone()), &target).unwrap();
        assert_eq!(converted, Some(value), "target {target}");
    }
}

#[test_log::test]
fn null_input_yields_none_for_every_target() {
    let coercer = utc_coercer();
    let targets = [
        TargetType::Any,
        TargetType::Bool,
        TargetType::Int64,
        TargetType::Text,
        TargetType::Ulid,
        TargetType::Date,
        TargetType::LocalDateTime,
        TargetType::OffsetDateTime,
        TargetType::nullable(TargetType::OffsetDateTime),
    ];

    for target in &targets {
        assert_eq!(coercer.convert_to(None, target).unwrap(), None);
        assert_eq!(coercer.convert_to(Some(Value::Null), target).unwrap(), None);
    }
}

#[test_log::test]
fn epoch_threshold_separates_seconds_and_millis() {
    use chrono::Datelike;

    let coercer = utc_coercer();

    let Value::LocalDateTime(seconds) =
        coerce(&coercer, Value::Int64(999_999_999_999), &TargetType::LocalDateTime)
    else {
        panic!("Expected local date-time");
    };
    assert!(seconds.year() > 33_000);

    let millis = coerce(&coercer, Value::Int64(1_000_000_000_000), &TargetType::LocalDateTime);
    assert_eq!(millis, Value::LocalDateTime(ymd_hms(2001, 9, 9, 1, 46, 40)));

    let millis_text = coerce(&coercer, "1000000000000", &TargetType::LocalDateTime);
    assert_eq!(millis_text, millis);
}

#[test_log::test]
fn local_to_offset_and_back_is_idempotent_under_utc() {
    let coercer = utc_coercer();
    let local = Value::LocalDateTime(ymd_hms(2023, 6, 15, 10, 30, 0));

    let offset = coerce(&coercer, local.clone(), &TargetType::OffsetDateTime);
    let back = coerce(&coercer, offset, &TargetType::LocalDateTime);

    assert_eq!(back, local);
}

#[test_log::test]
fn iso_date_text_to_each_temporal_target() {
    let coercer = utc_coercer();

    assert_eq!(
        coerce(&coercer, "2023-06-15", &TargetType::Date),
        Value::Date(ymd(2023, 6, 15))
    );
    assert_eq!(
        coerce(&coercer, "2023-06-15", &TargetType::LocalDateTime),
        Value::LocalDateTime(ymd_hms(2023, 6, 15, 0, 0, 0))
    );
    assert_eq!(
        coerce(&coercer, "2023-06-15", &TargetType::OffsetDateTime),
        Value::OffsetDateTime(with_offset(ymd_hms(2023, 6, 15, 0, 0, 0), 0))
    );
}

#[test_log::test]
fn seconds_and_millis_text_agree() {
    let coercer = utc_coercer();

    for target in [TargetType::Date, TargetType::LocalDateTime] {
        let from_seconds = coerce(&coercer, "1686787200", &target);
        let from_millis = coerce(&coercer, "1686787200000", &target);
        assert_eq!(from_seconds, from_millis, "target {target}");
    }

    assert_eq!(
        coerce(&coercer, "1686787200", &TargetType::Date),
        Value::Date(ymd(2023, 6, 15))
    );
}

#[test_log::test]
fn malformed_text_is_an_invalid_cast_naming_the_text() {
    let coercer = utc_coercer();

    for target in [
        TargetType::Date,
        TargetType::LocalDateTime,
        TargetType::OffsetDateTime,
    ] {
        let err = coercer
            .convert_to(Some(Value::from("not-a-date")), &target)
            .unwrap_err();
        assert!(err.is_invalid_cast(), "target {target}");
        assert!(err.to_string().contains("not-a-date"), "target {target}");
    }
}

#[test_log::test]
fn unsupported_kind_is_an_invalid_cast_naming_the_kind() {
    let coercer = utc_coercer();

    let err = coercer
        .convert_to(Some(Value::Bool(true)), &TargetType::OffsetDateTime)
        .unwrap_err();

    let CoerceError::InvalidCast(message) = err else {
        panic!("Expected invalid cast");
    };
    assert!(message.contains("bool"));
}
