//! Error types for tessella-core
//!
//! Provides a unified error type for the raster, mask and histogram
//! containers. Each variant captures enough context for diagnostics
//! without exposing internal layout details.

use thiserror::Error;

/// Tessella core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Buffer or grid shape does not match the declared dimensions
    #[error("shape mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    ShapeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Data buffer length does not match width * height
    #[error("buffer length mismatch: expected {expected} cells, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    /// Coordinate outside the grid
    #[error("coordinate out of bounds: ({x}, {y}) in {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Binary mask cell holding something other than 0 or 1
    #[error("invalid mask value {value} at index {index}")]
    InvalidMaskValue { index: usize, value: u8 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
