use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid must be at least 5x5, got {rows}x{cols}")]
    InvalidDimension { rows: u16, cols: u16 },
    #[error("Percentage must be between 1 and 100, got {0}")]
    InvalidDensity(i32),
}

pub type Result<T> = core::result::Result<T, GridError>;
