use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::CoreResult;
use crate::types::NaiveOffsetPolicy;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub coercion: CoercionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoercionConfig {
    /// Offset attached to date-times that carry none.
    pub naive_offset: NaiveOffsetPolicy,
    /// Strip surrounding whitespace from text before parsing it.
    pub trim_text: bool,
}

impl Default for CoercionConfig {
    fn default() -> Self {
        Self {
            naive_offset: NaiveOffsetPolicy::Utc,
            trim_text: true,
        }
    }
}

impl CoercionConfig {
    /// ## Errors
    /// Returns an error if the configured offset policy is out of range.
    pub fn validate(&self) -> CoreResult<()> {
        self.naive_offset.validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, `COERCE_`-prefixed environment
    /// variables and an optional `config.toml`.
    ///
    /// Nested keys use a double underscore, e.g. `COERCE_COERCION__NAIVE_OFFSET=local`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("coercion.naive_offset", "utc")?
            .set_default("coercion.trim_text", true)?
            .set_default("logging.level", "info")?
            // Environment
            .add_source(
                config::Environment::with_prefix("COERCE")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file, then
/// validates it.
///
/// ## Errors
/// Returns an error if loading, deserializing or validating the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    settings.coercion.validate()?;

    tracing::debug!(naive_offset = ?settings.coercion.naive_offset, "Coercion settings validated");

    Ok(settings)
}
