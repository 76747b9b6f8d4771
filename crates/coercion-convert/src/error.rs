use coercion_core::types::{TargetType, ValueKind};
use thiserror::Error;

/// Errors raised by a [`crate::GenericConverter`].
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Cannot convert {from} to {to}")]
    Unsupported { from: ValueKind, to: TargetType },

    #[error("Invalid {to} format: '{text}'")]
    InvalidFormat { text: String, to: TargetType },

    #[error("Value {value} is out of range for {to}")]
    Overflow { value: String, to: TargetType },
}

/// Errors surfaced by [`crate::Coercer`].
#[derive(Error, Debug)]
pub enum CoerceError {
    /// No temporal input shape matched, or every text parse failed.
    #[error("{0}")]
    InvalidCast(String),

    #[error(transparent)]
    InvalidIdentifier(#[from] ulid::DecodeError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl CoerceError {
    pub(crate) fn text_cast(text: &str, target: &TargetType) -> Self {
        Self::InvalidCast(format!("Cannot convert '{text}' to {target}."))
    }

    pub(crate) fn kind_cast(kind: ValueKind, target: &TargetType) -> Self {
        Self::InvalidCast(format!("Cannot convert '{kind}' to {target}."))
    }

    #[must_use]
    pub const fn is_invalid_cast(&self) -> bool {
        matches!(self, Self::InvalidCast(_))
    }
}

pub type CoerceResult<T> = std::result::Result<T, CoerceError>;
