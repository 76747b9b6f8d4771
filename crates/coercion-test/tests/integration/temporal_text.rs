//! Temporal coercion from the shapes typically found in form fields and query strings.

use coercion_convert::{TargetType, Value};
use coercion_test::{coerce, fixed_offset_coercer, utc_coercer, with_offset, ymd, ymd_hms};

#[test_log::test]
fn form_field_layouts_to_date() {
    let coercer = utc_coercer();
    let expected = Value::Date(ymd(2024, 2, 29));

    for text in [
        "2024-02-29",
        "2024/02/29",
        "02/29/2024",
        " 2024-02-29 ",
        "2024-02-29T18:45:00",
        "2024-02-29 18:45",
        "2024-02-29T18:45:00Z",
    ] {
        assert_eq!(coerce(&coercer, text, &TargetType::Date), expected, "input {text:?}");
    }
}

#[test_log::test]
fn nullable_temporal_targets_dispatch_on_inner_type() {
    let coercer = utc_coercer();

    let converted = coerce(
        &coercer,
        "2024-02-29T18:45:00+01:00",
        &TargetType::nullable(TargetType::LocalDateTime),
    );

    assert_eq!(converted, Value::LocalDateTime(ymd_hms(2024, 2, 29, 17, 45, 0)));
}

#[test_log::test]
fn offset_text_keeps_its_offset() {
    let coercer = fixed_offset_coercer(-5 * 3600);

    let converted = coerce(&coercer, "2024-02-29T18:45:00+01:00", &TargetType::OffsetDateTime);

    let Value::OffsetDateTime(dto) = converted else {
        panic!("Expected offset date-time");
    };
    assert_eq!(dto.offset().local_minus_utc(), 3600);
    assert_eq!(dto.naive_local(), ymd_hms(2024, 2, 29, 18, 45, 0));
}

#[test_log::test]
fn naive_text_receives_configured_offset() {
    let coercer = fixed_offset_coercer(-5 * 3600);

    let converted = coerce(&coercer, "2024-02-29 18:45:00", &TargetType::OffsetDateTime);
    assert_eq!(
        converted,
        Value::OffsetDateTime(with_offset(ymd_hms(2024, 2, 29, 18, 45, 0), -5 * 3600))
    );

    let Value::OffsetDateTime(dto) = coerce(&coercer, "2024-02-29", &TargetType::OffsetDateTime)
    else {
        panic!("Expected offset date-time");
    };
    assert_eq!(dto.offset().local_minus_utc(), -5 * 3600);
    assert_eq!(dto.naive_local(), ymd_hms(2024, 2, 29, 0, 0, 0));
}

#[test_log::test]
fn epochs_are_utc_regardless_of_naive_policy() {
    let coercer = fixed_offset_coercer(9 * 3600);

    let Value::OffsetDateTime(dto) =
        coerce(&coercer, Value::Int32(1_686_787_200), &TargetType::OffsetDateTime)
    else {
        panic!("Expected offset date-time");
    };
    assert_eq!(dto.offset().local_minus_utc(), 0);
    assert_eq!(dto.naive_utc(), ymd_hms(2023, 6, 15, 0, 0, 0));
}

#[test_log::test]
fn offset_values_normalise_to_utc_for_naive_targets() {
    let coercer = utc_coercer();
    let late_evening = Value::OffsetDateTime(with_offset(ymd_hms(2023, 6, 15, 22, 0, 0), -4 * 3600));

    assert_eq!(
        coerce(&coercer, late_evening.clone(), &TargetType::Date),
        Value::Date(ymd(2023, 6, 16))
    );
    assert_eq!(
        coerce(&coercer, late_evening, &TargetType::LocalDateTime),
        Value::LocalDateTime(ymd_hms(2023, 6, 16, 2, 0, 0))
    );
}

#[test_log::test]
fn impossible_calendar_dates_are_rejected() {
    let coercer = utc_coercer();

    let err = coercer
        .convert_to(Some(Value::from("2023-02-29")), &TargetType::Date)
        .unwrap_err();

    assert!(err.is_invalid_cast());
    assert!(err.to_string().contains("2023-02-29"));
}
