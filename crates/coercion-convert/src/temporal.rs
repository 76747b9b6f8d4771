//! Converters for the calendar date, local date-time and offset date-time targets.
//!
//! Each converter accepts the other two temporal shapes, 32- and 64-bit unix
//! epochs, and text. Text goes through an ordered list of parse attempts and
//! the first success wins.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use coercion_core::config::CoercionConfig;
use coercion_core::constants::{
    DATE_FORMATS, EPOCH_MILLIS_THRESHOLD, LOCAL_DATE_TIME_FORMATS, OFFSET_DATE_TIME_FORMATS,
};
use coercion_core::types::TargetType;

use crate::error::{CoerceError, CoerceResult};
use crate::value::Value;

/// ## Summary
/// Interprets a unix epoch as milliseconds when its magnitude is at least
/// 10^12, otherwise as seconds.
///
/// Returns `None` when the instant is outside the representable range.
#[must_use]
pub fn from_unix(epoch: i64) -> Option<DateTime<Utc>> {
    if epoch.unsigned_abs() >= EPOCH_MILLIS_THRESHOLD {
        DateTime::from_timestamp_millis(epoch)
    } else {
        DateTime::from_timestamp(epoch, 0)
    }
}

/// Parses integer text as a unix epoch (see [`from_unix`]).
#[must_use]
pub fn parse_unix(s: &str) -> Option<DateTime<Utc>> {
    s.parse::<i64>().ok().and_then(from_unix)
}

#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}

#[must_use]
pub fn parse_local_date_time(s: &str) -> Option<NaiveDateTime> {
    LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
}

/// Parses RFC 3339, RFC 2822, then ISO-like layouts with a numeric offset.
#[must_use]
pub fn parse_offset_date_time(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_e| DateTime::parse_from_rfc2822(s))
        .ok()
        .or_else(|| {
            OFFSET_DATE_TIME_FORMATS
                .iter()
                .find_map(|format| DateTime::parse_from_str(s, format).ok())
        })
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Trims `s`, or rejects surrounding whitespace outright when trimming is
/// disabled. Some chrono layouts skip leading whitespace on their own.
fn prepare<'a>(
    s: &'a str,
    config: &CoercionConfig,
    target: &TargetType,
) -> CoerceResult<&'a str> {
    let trimmed = s.trim();
    if config.trim_text || trimmed.len() == s.len() {
        Ok(trimmed)
    } else {
        Err(CoerceError::text_cast(s, target))
    }
}

fn unix_or_cast(n: i64, target: &TargetType) -> CoerceResult<DateTime<Utc>> {
    from_unix(n).ok_or_else(|| CoerceError::text_cast(&n.to_string(), target))
}

/// ## Summary
/// Converts `value` into a calendar date.
///
/// Offset date-times are normalised to UTC before the date is taken. Text is
/// tried as a date, an offset date-time, a local date-time and finally an
/// integer epoch.
///
/// ## Errors
/// Returns `CoerceError::InvalidCast` for unsupported kinds, unparsable text
/// or an epoch outside the representable range.
pub fn to_date(value: &Value, config: &CoercionConfig) -> CoerceResult<NaiveDate> {
    const TARGET: TargetType = TargetType::Date;

    match value {
        Value::Date(date) => Ok(*date),
        Value::LocalDateTime(dt) => Ok(dt.date()),
        Value::OffsetDateTime(dto) => Ok(dto.naive_utc().date()),
        Value::Int64(n) => unix_or_cast(*n, &TARGET).map(|dt| dt.date_naive()),
        Value::Int32(n) => unix_or_cast(i64::from(*n), &TARGET).map(|dt| dt.date_naive()),
        Value::Text(s) => {
            let s = prepare(s, config, &TARGET)?;

            parse_date(s)
                .or_else(|| parse_offset_date_time(s).map(|dto| dto.naive_utc().date()))
                .or_else(|| parse_local_date_time(s).map(|dt| dt.date()))
                .or_else(|| parse_unix(s).map(|dt| dt.date_naive()))
                .ok_or_else(|| CoerceError::text_cast(s, &TARGET))
        }
        other => Err(CoerceError::kind_cast(other.kind(), &TARGET)),
    }
}

/// ## Summary
/// Converts `value` into a date-time without offset.
///
/// Offset date-times and epochs yield their UTC wall-clock components; a
/// date becomes midnight. Text is tried as an integer epoch, a local
/// date-time, an offset date-time and finally a date.
///
/// ## Errors
/// Returns `CoerceError::InvalidCast` for unsupported kinds, unparsable text
/// or an epoch outside the representable range.
pub fn to_local_date_time(value: &Value, config: &CoercionConfig) -> CoerceResult<NaiveDateTime> {
    const TARGET: TargetType = TargetType::LocalDateTime;

    match value {
        Value::LocalDateTime(dt) => Ok(*dt),
        Value::OffsetDateTime(dto) => Ok(dto.naive_utc()),
        Value::Date(date) => Ok(midnight(*date)),
        Value::Int64(n) => unix_or_cast(*n, &TARGET).map(|dt| dt.naive_utc()),
        Value::Int32(n) => unix_or_cast(i64::from(*n), &TARGET).map(|dt| dt.naive_utc()),
        Value::Text(s) => {
            let s = prepare(s, config, &TARGET)?;

            parse_unix(s)
                .map(|dt| dt.naive_utc())
                .or_else(|| parse_local_date_time(s))
                .or_else(|| parse_offset_date_time(s).map(|dto| dto.naive_utc()))
                .or_else(|| parse_date(s).map(midnight))
                .ok_or_else(|| CoerceError::text_cast(s, &TARGET))
        }
        other => Err(CoerceError::kind_cast(other.kind(), &TARGET)),
    }
}

/// ## Summary
/// Converts `value` into a date-time with offset.
///
/// Local date-times and dates keep their wall-clock components and receive
/// the offset chosen by `config.naive_offset`. Epochs are UTC. Text is tried
/// as an integer epoch, an offset date-time, a local date-time and finally a
/// date.
///
/// ## Errors
/// Returns `CoerceError::InvalidCast` for unsupported kinds, unparsable text,
/// an epoch outside the representable range or an offset that cannot be
/// attached.
pub fn to_offset_date_time(
    value: &Value,
    config: &CoercionConfig,
) -> CoerceResult<DateTime<FixedOffset>> {
    const TARGET: TargetType = TargetType::OffsetDateTime;

    let policy = config.naive_offset;

    match value {
        Value::OffsetDateTime(dto) => Ok(*dto),
        Value::LocalDateTime(dt) => policy
            .attach(*dt)
            .ok_or_else(|| CoerceError::text_cast(&value.to_string(), &TARGET)),
        Value::Date(date) => policy
            .attach(midnight(*date))
            .ok_or_else(|| CoerceError::text_cast(&value.to_string(), &TARGET)),
        Value::Int64(n) => unix_or_cast(*n, &TARGET).map(|dt| dt.fixed_offset()),
        Value::Int32(n) => unix_or_cast(i64::from(*n), &TARGET).map(|dt| dt.fixed_offset()),
        Value::Text(s) => {
            let s = prepare(s, config, &TARGET)?;

            parse_unix(s)
                .map(|dt| dt.fixed_offset())
                .or_else(|| parse_offset_date_time(s))
                .or_else(|| parse_local_date_time(s).and_then(|dt| policy.attach(dt)))
                .or_else(|| parse_date(s).and_then(|date| policy.attach(midnight(date))))
                .ok_or_else(|| CoerceError::text_cast(s, &TARGET))
        }
        other => Err(CoerceError::kind_cast(other.kind(), &TARGET)),
    }
}
