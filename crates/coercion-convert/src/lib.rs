//! Best-effort coercion of loosely-typed values into a requested type.
//!
//! ## Summary
//! [`Coercer::convert_to`] takes a [`Value`] (usually built from JSON, a query
//! string or a form field) and a [`TargetType`]. Values that already fit are
//! handed back untouched. ULID and the three temporal targets have dedicated
//! converters; everything else is delegated to a [`GenericConverter`].

pub mod coercer;
pub mod error;
pub mod generic;
pub mod temporal;
pub mod typed;
pub mod value;

pub use coercer::Coercer;
pub use coercion_core::types::{NaiveOffsetPolicy, TargetType, ValueKind};
pub use error::{CoerceError, CoerceResult, ConversionError};
pub use generic::{GenericConverter, StandardConverter};
pub use typed::Coercible;
pub use value::Value;
