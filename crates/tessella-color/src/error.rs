//! Error types for tessella-color

use thiserror::Error;

/// Errors that can occur during intensity analysis
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] tessella_core::Error),

    /// Histogram requested with no bins
    #[error("invalid bin count: {0} (must be >= 1)")]
    InvalidBinCount(usize),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
