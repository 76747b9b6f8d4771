use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use coercion_core::types::TargetType;
use ulid::Ulid;
use uuid::Uuid;

use crate::value::Value;

/// A Rust type that can be produced by [`crate::Coercer::convert_as`].
pub trait Coercible: Sized {
    /// Target the value is coerced into before extraction.
    fn target() -> TargetType;

    /// Extracts `Self` from a value of the matching kind.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! coercible {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Coercible for $ty {
                fn target() -> TargetType {
                    TargetType::$variant
                }

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

coercible! {
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
}
