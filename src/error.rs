//! Errors raised when building geometry or collider settings from untrusted input.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A rectangle extent was given with a negative width or height.
    #[error("rectangle extent must be non-negative, got {width}x{height}")]
    NegativeExtent { width: i32, height: i32 },
    /// The corner tie tolerance must be a finite, non-negative number.
    #[error("tie tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
