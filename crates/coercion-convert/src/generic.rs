//! Fallback conversions for targets without a dedicated converter.

use std::fmt;

use coercion_core::types::TargetType;
use uuid::Uuid;

use crate::error::ConversionError;
use crate::value::Value;

/// Conversion provider consulted for every target the coercer does not
/// handle itself.
///
/// Implementations are shared between calls and must not keep per-call state.
pub trait GenericConverter: Send + Sync + fmt::Debug {
    /// ## Summary
    /// Converts `value` into `target`. `target` is passed exactly as the
    /// caller gave it, `Nullable` wrappers included.
    ///
    /// ## Errors
    /// Returns a `ConversionError` when the value cannot be represented as `target`.
    fn convert(&self, value: &Value, target: &TargetType) -> Result<Value, ConversionError>;
}

/// Default provider: numeric widening and checked narrowing, boolean and
/// numeric text, textual forms, and UUID from text or ULID.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardConverter;

/// 2^63, the first float outside the `i64` range.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl GenericConverter for StandardConverter {
    fn convert(&self, value: &Value, target: &TargetType) -> Result<Value, ConversionError> {
        if target.accepts(value.kind()) {
            return Ok(value.clone());
        }

        match target {
            // Blank form fields mean "no value" for optional targets
            TargetType::Nullable(_) if value.as_text().is_some_and(|s| s.trim().is_empty()) => {
                Ok(Value::Null)
            }
            TargetType::Nullable(inner) => self.convert(value, inner),
            TargetType::Text => Ok(Value::Text(value.to_string())),
            TargetType::Bool => to_bool(value, target).map(Value::Bool),
            TargetType::Int32 => to_int32(value, target).map(Value::Int32),
            TargetType::Int64 => to_int64(value, target).map(Value::Int64),
            TargetType::Float64 => to_float64(value, target).map(Value::Float64),
            TargetType::Uuid => to_uuid(value, target).map(Value::Uuid),
            _ => Err(unsupported(value, target)),
        }
    }
}

fn unsupported(value: &Value, target: &TargetType) -> ConversionError {
    ConversionError::Unsupported {
        from: value.kind(),
        to: target.clone(),
    }
}

fn invalid_format(text: &str, target: &TargetType) -> ConversionError {
    ConversionError::InvalidFormat {
        text: text.to_string(),
        to: target.clone(),
    }
}

fn overflow(value: impl fmt::Display, target: &TargetType) -> ConversionError {
    ConversionError::Overflow {
        value: value.to_string(),
        to: target.clone(),
    }
}

fn to_bool(value: &Value, target: &TargetType) -> Result<bool, ConversionError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Int32(0) | Value::Int64(0) => Ok(false),
        Value::Int32(1) | Value::Int64(1) => Ok(true),
        Value::Int32(_) | Value::Int64(_) => Err(invalid_format(&value.to_string(), target)),
        Value::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "y" | "on" => Ok(true),
            "false" | "0" | "no" | "n" | "off" => Ok(false),
            _ => Err(invalid_format(s, target)),
        },
        other => Err(unsupported(other, target)),
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Range and fraction are checked before the cast"
)]
fn float_to_int64(f: f64, target: &TargetType) -> Result<i64, ConversionError> {
    if f.fract() != 0.0 {
        return Err(invalid_format(&f.to_string(), target));
    }
    if !(-I64_BOUND..I64_BOUND).contains(&f) {
        return Err(overflow(f, target));
    }
    Ok(f as i64)
}

fn to_int64(value: &Value, target: &TargetType) -> Result<i64, ConversionError> {
    match value {
        Value::Int32(n) => Ok(i64::from(*n)),
        Value::Int64(n) => Ok(*n),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Float64(f) => float_to_int64(*f, target),
        Value::Text(s) => {
            let trimmed = s.trim();
            match trimmed.parse::<i64>() {
                Ok(n) => Ok(n),
                Err(_e) => trimmed
                    .parse::<f64>()
                    .map_err(|_e| invalid_format(s, target))
                    .and_then(|f| float_to_int64(f, target)),
            }
        }
        other => Err(unsupported(other, target)),
    }
}

fn to_int32(value: &Value, target: &TargetType) -> Result<i32, ConversionError> {
    let wide = to_int64(value, target)?;
    i32::try_from(wide).map_err(|_e| overflow(wide, target))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "Integers beyond 2^53 round to the nearest float, as a numeric cast would"
)]
fn to_float64(value: &Value, target: &TargetType) -> Result<f64, ConversionError> {
    match value {
        Value::Float64(f) => Ok(*f),
        Value::Int32(n) => Ok(f64::from(*n)),
        Value::Int64(n) => Ok(*n as f64),
        Value::Bool(b) => Ok(f64::from(u8::from(*b))),
        Value::Text(s) => s.trim().parse().map_err(|_e| invalid_format(s, target)),
        other => Err(unsupported(other, target)),
    }
}

fn to_uuid(value: &Value, target: &TargetType) -> Result<Uuid, ConversionError> {
    match value {
        Value::Uuid(id) => Ok(*id),
        Value::Ulid(id) => Ok(Uuid::from_u128(id.0)),
        Value::Text(s) => Uuid::parse_str(s.trim()).map_err(|_e| invalid_format(s, target)),
        other => Err(unsupported(other, target)),
    }
}
