//! Tessella Core - Basic data structures for mask decomposition
//!
//! This crate provides the fundamental data structures used throughout
//! Tessella:
//!
//! - [`Raster`] - Grayscale intensity grid
//! - [`Mask`] - Binary foreground grid, mutable during square packing
//! - [`LabelMap`] - Per-pixel cluster labels from an external clustering routine
//! - [`Bounds`] / [`SquareRegion`] / [`ScaledRegion`] - Regions
//! - [`Histogram`] - Equal-width intensity histogram
//! - [`find_peaks`] - Local maxima filtered by prominence

pub mod error;
pub mod geometry;
pub mod histogram;
pub mod label;
pub mod mask;
pub mod peaks;
pub mod raster;

pub use error::{Error, Result};
pub use geometry::{Bounds, ScaledRegion, SquareRegion};
pub use histogram::Histogram;
pub use label::LabelMap;
pub use mask::Mask;
pub use peaks::{Peak, find_peaks, local_maxima, prominence};
pub use raster::Raster;
