//! Integration tests for value coercion.

mod json_inputs;
mod properties;
mod temporal_text;
