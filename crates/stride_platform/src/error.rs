//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    /// Viewport with a non-positive or non-finite dimension
    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    /// Device pixel ratio that cannot scale a surface
    #[error("Invalid device pixel ratio: {0}")]
    InvalidPixelRatio(f32),

    /// Event source failed
    #[error("Event loop error: {0}")]
    EventLoop(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
