use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid type name: {0}")]
    InvalidTypeName(String),

    #[error("Invalid UTC offset: {0} seconds")]
    InvalidOffset(i32),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
