use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeZone, Utc};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Runtime kind of a value, independent of any particular value representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int32,
    Int64,
    Float64,
    Text,
    Uuid,
    Ulid,
    Date,
    LocalDateTime,
    OffsetDateTime,
    Bytes,
    Array,
    Object,
}

impl ValueKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::Text => "text",
            Self::Uuid => "uuid",
            Self::Ulid => "ulid",
            Self::Date => "date",
            Self::LocalDateTime => "datetime",
            Self::OffsetDateTime => "datetimeoffset",
            Self::Bytes => "bytes",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor of the type a value should be coerced into.
///
/// `Nullable` wraps another descriptor; dispatch always happens on the
/// innermost type (see [`TargetType::underlying`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// Accepts every value as-is.
    Any,
    Bool,
    Int32,
    Int64,
    Float64,
    Text,
    Uuid,
    Ulid,
    /// Calendar date without a time.
    Date,
    /// Date and time without an offset.
    LocalDateTime,
    /// Date and time with a UTC offset.
    OffsetDateTime,
    Bytes,
    Array,
    Object,
    Nullable(Box<TargetType>),
}

impl TargetType {
    #[must_use]
    pub fn nullable(inner: Self) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// ## Summary
    /// Strips every `Nullable` layer and returns the type used for dispatch.
    #[must_use]
    pub fn underlying(&self) -> &Self {
        match self {
            Self::Nullable(inner) => inner.underlying(),
            other => other,
        }
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// Concrete value kind this target names, `None` for `Any` and `Nullable`.
    #[must_use]
    pub const fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Any | Self::Nullable(_) => None,
            Self::Bool => Some(ValueKind::Bool),
            Self::Int32 => Some(ValueKind::Int32),
            Self::Int64 => Some(ValueKind::Int64),
            Self::Float64 => Some(ValueKind::Float64),
            Self::Text => Some(ValueKind::Text),
            Self::Uuid => Some(ValueKind::Uuid),
            Self::Ulid => Some(ValueKind::Ulid),
            Self::Date => Some(ValueKind::Date),
            Self::LocalDateTime => Some(ValueKind::LocalDateTime),
            Self::OffsetDateTime => Some(ValueKind::OffsetDateTime),
            Self::Bytes => Some(ValueKind::Bytes),
            Self::Array => Some(ValueKind::Array),
            Self::Object => Some(ValueKind::Object),
        }
    }

    /// ## Summary
    /// Returns `true` when a value of `kind` can be handed out as this target
    /// without any conversion.
    #[must_use]
    pub fn accepts(&self, kind: ValueKind) -> bool {
        match self {
            Self::Any => true,
            Self::Nullable(inner) => kind == ValueKind::Null || inner.accepts(kind),
            other => other.kind() == Some(kind),
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Nullable(inner) => write!(f, "{inner}?"),
            other => match other.kind() {
                Some(kind) => f.write_str(kind.as_str()),
                None => Ok(()),
            },
        }
    }
}

impl FromStr for TargetType {
    type Err = CoreError;

    /// Parses names such as `date`, `datetimeoffset`, `int32?` or
    /// `nullable<ulid>`. Matching is case-insensitive.
    fn from_str(s: &str) -> CoreResult<Self> {
        let name = s.trim().to_ascii_lowercase();

        if let Some(inner) = name.strip_suffix('?') {
            return inner.parse().map(Self::nullable);
        }

        for prefix in ["nullable<", "option<"] {
            if let Some(inner) = name
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_suffix('>'))
            {
                return inner.parse().map(Self::nullable);
            }
        }

        let target = match name.as_str() {
            "any" => Self::Any,
            "bool" | "boolean" => Self::Bool,
            "int" | "int32" | "i32" => Self::Int32,
            "long" | "int64" | "i64" => Self::Int64,
            "float" | "double" | "float64" | "f64" => Self::Float64,
            "text" | "string" | "str" => Self::Text,
            "uuid" | "guid" => Self::Uuid,
            "ulid" => Self::Ulid,
            "date" | "dateonly" => Self::Date,
            "datetime" | "local_datetime" | "naive_datetime" => Self::LocalDateTime,
            "datetimeoffset" | "offset_datetime" | "timestamp" => Self::OffsetDateTime,
            "bytes" => Self::Bytes,
            "array" | "list" => Self::Array,
            "object" | "map" | "record" => Self::Object,
            _ => return Err(CoreError::InvalidTypeName(s.to_string())),
        };

        Ok(target)
    }
}

/// Offset attached when a date-time without offset information has to become
/// an offset date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NaiveOffsetPolicy {
    /// Treat naive values as UTC.
    #[default]
    Utc,
    /// Use the executing system's offset in effect at that local time.
    Local,
    /// A fixed offset in seconds east of UTC.
    Fixed(i32),
}

impl NaiveOffsetPolicy {
    /// ## Summary
    /// Checks that a `Fixed` offset lies within ±24 hours.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidOffset` for an out-of-range fixed offset.
    pub fn validate(self) -> CoreResult<()> {
        match self {
            Self::Fixed(seconds) if FixedOffset::east_opt(seconds).is_none() => {
                Err(CoreError::InvalidOffset(seconds))
            }
            _ => Ok(()),
        }
    }

    /// ## Summary
    /// Offset this policy assigns to `naive`.
    ///
    /// For `Local`, a time skipped by a DST transition takes the offset in
    /// effect at the same UTC instant; an ambiguous time takes the earlier one.
    #[must_use]
    pub fn offset_for(self, naive: &NaiveDateTime) -> Option<FixedOffset> {
        match self {
            Self::Utc => Some(Utc.fix()),
            Self::Local => Some(
                Local
                    .offset_from_local_datetime(naive)
                    .earliest()
                    .unwrap_or_else(|| Local.offset_from_utc_datetime(naive)),
            ),
            Self::Fixed(seconds) => FixedOffset::east_opt(seconds),
        }
    }

    /// ## Summary
    /// Keeps the wall-clock components of `naive` and attaches this policy's offset.
    #[must_use]
    pub fn attach(self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        let offset = self.offset_for(&naive)?;
        naive.and_local_timezone(offset).single()
    }
}
