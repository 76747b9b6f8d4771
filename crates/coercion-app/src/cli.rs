use anyhow::{Context, Result};
use coercion_convert::{Coercer, TargetType, Value};

/// Coerce loosely-typed values into a target type.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "coerce", version)]
pub struct Cli {
    /// Target type, e.g. `date`, `datetime`, `datetimeoffset`, `ulid`, `int32?`
    pub target: TargetType,

    /// Values to convert
    #[arg(required = true)]
    pub values: Vec<String>,

    /// Read each value as a JSON document instead of plain text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// ## Summary
    /// Builds the input value for one raw argument.
    ///
    /// ## Errors
    /// Returns an error if `--json` is set and the argument is not valid JSON.
    pub fn input(&self, raw: &str) -> Result<Value> {
        if self.json {
            let json: serde_json::Value =
                serde_json::from_str(raw).with_context(|| format!("Invalid JSON: {raw}"))?;
            Ok(Value::from(json))
        } else {
            Ok(Value::from(raw))
        }
    }

    /// ## Summary
    /// Converts every value and renders one output line per value.
    ///
    /// Successful conversions render the converted value (`null` for no
    /// value); failures render the error.
    #[must_use]
    pub fn run(&self, coercer: &Coercer) -> Vec<Result<String>> {
        self.values
            .iter()
            .map(|raw| -> Result<String> {
                let input = self.input(raw)?;
                let converted = coercer.convert_to(Some(input), &self.target)?;
                Ok(converted.map_or_else(|| "null".to_string(), |value| value.to_string()))
            })
            .collect()
    }
}
