//! Engine error type.

use thiserror::Error;

/// Errors reported by grid construction, cell access, and rule configuration.
///
/// Nothing here is raised during `advance()`: rule values are validated when
/// they are built, and a cell with no applicable rule falls back to the
/// documented empty default rather than an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("invalid rule specification: {0}")]
    InvalidRuleSpec(String),
}
