//! Motion engine error types

use thiserror::Error;

/// Errors raised while validating motion configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("particle pool must hold at least one particle")]
    EmptyPool,

    #[error("invalid range for {field}: min {min} is greater than max {max}")]
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("non-finite value for {0}")]
    NonFinite(&'static str),

    #[error("invalid simulation bounds: {0}")]
    InvalidBounds(String),

    #[error("breakpoint width must be positive, got {0}")]
    InvalidBreakpoint(f32),
}

/// Result type for motion operations
pub type Result<T> = std::result::Result<T, MotionError>;
