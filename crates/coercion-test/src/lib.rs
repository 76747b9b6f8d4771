//! Shared fixtures for the integration tests.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use coercion_convert::{Coercer, NaiveOffsetPolicy, TargetType, Value};
use coercion_core::config::CoercionConfig;

/// Coercer with the default configuration (UTC for naive date-times).
#[must_use]
pub fn utc_coercer() -> Coercer {
    Coercer::default()
}

/// Coercer attaching a fixed offset, in seconds east of UTC, to naive date-times.
#[must_use]
pub fn fixed_offset_coercer(seconds: i32) -> Coercer {
    Coercer::with_config(CoercionConfig {
        naive_offset: NaiveOffsetPolicy::Fixed(seconds),
        ..CoercionConfig::default()
    })
}

/// ## Summary
/// Converts a non-null value and returns the result, panicking on failure or
/// on an empty result.
///
/// ## Panics
/// Panics when the conversion fails or yields no value.
#[must_use]
pub fn coerce(coercer: &Coercer, value: impl Into<Value>, target: &TargetType) -> Value {
    match coercer.convert_to(Some(value.into()), target) {
        Ok(Some(value)) => value,
        Ok(None) => panic!("conversion to {target} produced no value"),
        Err(e) => panic!("conversion to {target} failed: {e}"),
    }
}

/// ## Panics
/// Panics on an invalid calendar date.
#[must_use]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid date {year}-{month}-{day}"))
}

/// ## Panics
/// Panics on an invalid date or time.
#[must_use]
pub fn ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    ymd(year, month, day)
        .and_hms_opt(hour, min, sec)
        .unwrap_or_else(|| panic!("invalid time {hour}:{min}:{sec}"))
}

/// ## Panics
/// Panics on an invalid offset.
#[must_use]
pub fn with_offset(naive: NaiveDateTime, seconds: i32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(seconds)
        .and_then(|offset| naive.and_local_timezone(offset).single())
        .unwrap_or_else(|| panic!("invalid offset {seconds}"))
}
