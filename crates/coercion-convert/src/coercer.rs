use std::sync::Arc;

use coercion_core::config::{CoercionConfig, Settings};
use coercion_core::error::CoreResult;
use coercion_core::types::TargetType;
use ulid::Ulid;

use crate::error::{CoerceError, CoerceResult};
use crate::generic::{GenericConverter, StandardConverter};
use crate::temporal;
use crate::typed::Coercible;
use crate::value::Value;

/// Coerces loosely-typed values into a requested [`TargetType`].
///
/// Cheap to clone; the generic provider is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Coercer {
    config: CoercionConfig,
    generic: Arc<dyn GenericConverter>,
}

impl Default for Coercer {
    fn default() -> Self {
        Self::with_config(CoercionConfig::default())
    }
}

impl Coercer {
    #[must_use]
    pub fn new(config: CoercionConfig, generic: Arc<dyn GenericConverter>) -> Self {
        Self { config, generic }
    }

    /// Uses [`StandardConverter`] as the generic provider.
    #[must_use]
    pub fn with_config(config: CoercionConfig) -> Self {
        Self::new(config, Arc::new(StandardConverter))
    }

    /// ## Summary
    /// Builds a coercer from loaded settings.
    ///
    /// ## Errors
    /// Returns an error if the coercion settings are invalid.
    pub fn from_settings(settings: &Settings) -> CoreResult<Self> {
        settings.coercion.validate()?;
        Ok(Self::with_config(settings.coercion.clone()))
    }

    #[must_use]
    pub const fn config(&self) -> &CoercionConfig {
        &self.config
    }

    /// ## Summary
    /// Converts `value` into `target`.
    ///
    /// - `None` and `Value::Null` yield `None` for every target.
    /// - Values that already fit the target, composite objects, arrays and
    ///   other non-text collections are returned unchanged.
    /// - `Nullable` targets dispatch on their underlying type.
    /// - ULID targets parse the value's text form; the temporal targets use
    ///   the converters in [`crate::temporal`]; everything else goes to the
    ///   generic provider with the original value and target.
    ///
    /// ## Errors
    /// - `CoerceError::InvalidCast` from the temporal converters.
    /// - `CoerceError::InvalidIdentifier` when ULID text is malformed.
    /// - `CoerceError::Conversion` with the generic provider's error, unchanged.
    pub fn convert_to(
        &self,
        value: Option<Value>,
        target: &TargetType,
    ) -> CoerceResult<Option<Value>> {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            return Ok(None);
        };

        if Self::passes_through(&value, target) {
            tracing::trace!(kind = %value.kind(), %target, "Value returned unchanged");
            return Ok(Some(value));
        }

        let converted = match target.underlying() {
            TargetType::Ulid => Value::Ulid(self.parse_ulid(&value)?),
            TargetType::Date => Value::Date(temporal::to_date(&value, &self.config)?),
            TargetType::LocalDateTime => {
                Value::LocalDateTime(temporal::to_local_date_time(&value, &self.config)?)
            }
            TargetType::OffsetDateTime => {
                Value::OffsetDateTime(temporal::to_offset_date_time(&value, &self.config)?)
            }
            _ => {
                tracing::debug!(kind = %value.kind(), %target, "Delegating to generic converter");
                self.generic.convert(&value, target)?
            }
        };

        tracing::trace!(from = %value.kind(), to = %converted.kind(), "Value converted");

        Ok((!converted.is_null()).then_some(converted))
    }

    /// ## Summary
    /// Converts `value` and extracts it as `T`.
    ///
    /// ## Errors
    /// Returns the errors of [`Coercer::convert_to`], or
    /// `ConversionError::Unsupported` when the value was passed through
    /// unchanged as a kind other than `T` (objects, arrays, bytes).
    pub fn convert_as<T: Coercible>(&self, value: Value) -> CoerceResult<Option<T>> {
        let target = T::target();

        let Some(converted) = self.convert_to(Some(value), &target)? else {
            return Ok(None);
        };

        let kind = converted.kind();
        T::from_value(converted).map(Some).ok_or_else(|| {
            crate::error::ConversionError::Unsupported { from: kind, to: target }.into()
        })
    }

    fn passes_through(value: &Value, target: &TargetType) -> bool {
        target.accepts(value.kind())
            || value.is_user_defined()
            || value.is_array_like()
            || value.is_enumerable()
    }

    fn parse_ulid(&self, value: &Value) -> CoerceResult<Ulid> {
        let text = value.to_string();
        let text = if self.config.trim_text {
            text.trim()
        } else {
            text.as_str()
        };
        Ulid::from_string(text).map_err(CoerceError::from)
    }
}
