//! Coercing fields of parsed JSON documents into typed values.

use chrono::{DateTime, FixedOffset, NaiveDate};
use coercion_convert::{CoerceError, ConversionError, TargetType, Value};
use coercion_test::{utc_coercer, with_offset, ymd, ymd_hms};
use serde_json::json;

fn field(document: &serde_json::Value, name: &str) -> Value {
    Value::from(document[name].clone())
}

#[test_log::test]
fn typed_fields_from_document() {
    let coercer = utc_coercer();
    let document = json!({
        "id": "01ARZ3NDEKTSV4RRFFQ69G5FAV",
        "quantity": "12",
        "price": 9.5,
        "active": "yes",
        "due": "2023-06-15",
        "created_at": 1_686_787_200_000_i64,
        "archived_at": null
    });

    let id: Option<ulid::Ulid> = coercer.convert_as(field(&document, "id")).unwrap();
    assert_eq!(id, ulid::Ulid::from_string("01ARZ3NDEKTSV4RRFFQ69G5FAV").ok());

    let quantity: Option<i32> = coercer.convert_as(field(&document, "quantity")).unwrap();
    assert_eq!(quantity, Some(12));

    let price: Option<String> = coercer.convert_as(field(&document, "price")).unwrap();
    assert_eq!(price.as_deref(), Some("9.5"));

    let active: Option<bool> = coercer.convert_as(field(&document, "active")).unwrap();
    assert_eq!(active, Some(true));

    let due: Option<NaiveDate> = coercer.convert_as(field(&document, "due")).unwrap();
    assert_eq!(due, Some(ymd(2023, 6, 15)));

    let created_at: Option<DateTime<FixedOffset>> =
        coercer.convert_as(field(&document, "created_at")).unwrap();
    assert_eq!(created_at, Some(with_offset(ymd_hms(2023, 6, 15, 0, 0, 0), 0)));

    let archived_at: Option<DateTime<FixedOffset>> =
        coercer.convert_as(field(&document, "archived_at")).unwrap();
    assert_eq!(archived_at, None);
}

#[test_log::test]
fn nested_documents_pass_through() {
    let coercer = utc_coercer();
    let nested = Value::from(json!({ "street": "Main", "number": 4 }));

    let converted = coercer
        .convert_to(Some(nested.clone()), &TargetType::Text)
        .unwrap();

    assert_eq!(converted, Some(nested));
}

#[test_log::test]
fn json_lists_pass_through() {
    let coercer = utc_coercer();
    let list = Value::from(json!(["2023-06-15", "2023-06-16"]));

    let converted = coercer.convert_to(Some(list.clone()), &TargetType::Date).unwrap();

    assert_eq!(converted, Some(list));
}

#[test_log::test]
fn uuid_text_is_handled_by_generic_provider() {
    let coercer = utc_coercer();
    let text = "550e8400-e29b-41d4-a716-446655440000";

    let id: Option<uuid::Uuid> = coercer.convert_as(Value::from(json!(text))).unwrap();

    assert_eq!(id, Some(uuid::Uuid::parse_str(text).unwrap()));
}

#[test_log::test]
fn uuid_text_is_not_a_ulid() {
    let coercer = utc_coercer();

    let err = coercer
        .convert_to(
            Some(Value::from("550e8400-e29b-41d4-a716-446655440000")),
            &TargetType::Ulid,
        )
        .unwrap_err();

    assert!(matches!(err, CoerceError::InvalidIdentifier(_)));
}

#[test_log::test]
fn generic_failures_surface_unchanged() {
    let coercer = utc_coercer();

    let err = coercer
        .convert_to(Some(Value::from(json!(4_000_000_000_i64))), &TargetType::Int32)
        .unwrap_err();

    assert!(matches!(err, CoerceError::Conversion(ConversionError::Overflow { .. })));
}

#[test_log::test]
fn converted_values_serialize_back_to_json() {
    let coercer = utc_coercer();

    let converted = coercer
        .convert_to(Some(Value::from(json!(1_686_787_200))), &TargetType::OffsetDateTime)
        .unwrap()
        .unwrap();

    assert_eq!(converted.to_json(), json!("2023-06-15T00:00:00+00:00"));
}
