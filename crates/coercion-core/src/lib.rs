//! Shared building blocks for value coercion: target descriptors, runtime
//! kinds, text formats, configuration and core errors.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
