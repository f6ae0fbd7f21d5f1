//! Tessella Color - Intensity analysis ahead of clustering
//!
//! This crate provides the two intensity heuristics that run before an
//! image is handed to the clustering routine:
//!
//! - **Diagonal thresholding** ([`threshold`]): Background cutoff from the
//!   flat low stretches of the raster's main diagonal
//! - **Cluster-count estimation** ([`segment`]): Number of clusters from the
//!   prominent peaks of the non-zero intensity histogram
//!
//! # Example
//!
//! ```
//! use tessella_color::{PeakCountOptions, estimate_cluster_count};
//! use tessella_core::Raster;
//!
//! let raster = Raster::from_fn(32, 32, |x, _| if x < 16 { 0 } else { 120 }).unwrap();
//! let estimate = estimate_cluster_count(&raster, 1, &PeakCountOptions::default()).unwrap();
//! assert_eq!(estimate.k, 2);
//! ```

pub mod error;
pub mod segment;
pub mod threshold;

// Re-export core types
pub use tessella_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export threshold types and functions
pub use threshold::{
    ColorWarning, DEFAULT_MARGIN_FRACTION, DEFAULT_OFFSET_FRACTION, DEFAULT_RISE_FRACTION,
    DEFAULT_SEARCH_FRACTION, DiagonalThreshold, DiagonalThresholdOptions,
    diagonal_mask_background, low_slope_points,
};

// Re-export segmentation types and functions
pub use segment::{
    ClusterCountEstimate, DEFAULT_BINS, DEFAULT_PROMINENCE_FRACTION, PeakCountOptions,
    choose_cluster_count, estimate_cluster_count,
};
