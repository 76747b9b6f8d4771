//! Runtime value model.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use coercion_core::types::ValueKind;
use ulid::Ulid;
use uuid::Uuid;

/// A loosely-typed runtime value.
///
/// `Object` stands in for application-defined composite types, `Array` for
/// generic containers and `Bytes` for enumerable data that is not text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    Text(String),
    Uuid(Uuid),
    Ulid(Ulid),
    Date(NaiveDate),
    LocalDateTime(NaiveDateTime),
    OffsetDateTime(DateTime<FixedOffset>),
    Bytes(Vec<u8>),
    Array(Vec<Value>),
    /// Ordered field list of a composite value.
    Object(Vec<(String, Value)>),
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int32(_) => ValueKind::Int32,
            Self::Int64(_) => ValueKind::Int64,
            Self::Float64(_) => ValueKind::Float64,
            Self::Text(_) => ValueKind::Text,
            Self::Uuid(_) => ValueKind::Uuid,
            Self::Ulid(_) => ValueKind::Ulid,
            Self::Date(_) => ValueKind::Date,
            Self::LocalDateTime(_) => ValueKind::LocalDateTime,
            Self::OffsetDateTime(_) => ValueKind::OffsetDateTime,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Application-defined composite value.
    #[must_use]
    pub const fn is_user_defined(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Array or generic container.
    #[must_use]
    pub const fn is_array_like(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Enumerable collection other than text.
    #[must_use]
    pub const fn is_enumerable(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Bytes(_))
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// ## Summary
    /// Converts into a JSON value. Identifiers and temporal values become
    /// strings in their canonical text form, bytes become lowercase hex.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;

        match self {
            Self::Null => Json::Null,
            Self::Bool(b) => Json::Bool(*b),
            Self::Int32(n) => Json::from(*n),
            Self::Int64(n) => Json::from(*n),
            Self::Float64(f) => serde_json::Number::from_f64(*f).map_or(Json::Null, Json::Number),
            Self::Text(s) => Json::String(s.clone()),
            Self::Array(items) => Json::Array(items.iter().map(Self::to_json).collect()),
            Self::Object(fields) => Json::Object(
                fields
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect(),
            ),
            other => Json::String(other.to_string()),
        }
    }
}

/// Textual form of the value. This is what ULID parsing and text targets see.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int32(n) => write!(f, "{n}"),
            Self::Int64(n) => write!(f, "{n}"),
            Self::Float64(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Uuid(id) => write!(f, "{id}"),
            Self::Ulid(id) => write!(f, "{id}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::LocalDateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            Self::OffsetDateTime(dto) => f.write_str(&dto.to_rfc3339()),
            Self::Bytes(bytes) => f.write_str(&hex::encode(bytes)),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(fields) => {
                f.write_str("{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Float64(n.as_f64().unwrap_or(f64::NAN)), Self::Int64),
            Json::String(s) => Self::Text(s),
            Json::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Json::Object(fields) => Self::Object(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

value_from! {
    bool => Bool,
    i32 => Int32,
    i64 => Int64,
    f64 => Float64,
    String => Text,
    Uuid => Uuid,
    Ulid => Ulid,
    NaiveDate => Date,
    NaiveDateTime => LocalDateTime,
    DateTime<FixedOffset> => OffsetDateTime,
    Vec<u8> => Bytes,
    Vec<Value> => Array,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::OffsetDateTime(dt.fixed_offset())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
