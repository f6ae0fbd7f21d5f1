//! tessella-region - Region processing for Tessella
//!
//! This crate provides the spatial half of the decomposition:
//!
//! - **Boundary finding** - Inclusive bounding box of a mask's foreground
//! - **Square packing** - Greedy decomposition of a mask into squares
//! - **Region assembly** - Per-cluster packing and mapping back to the
//!   original raster
//!
//! # Examples
//!
//! ## Packing a mask
//!
//! ```
//! use tessella_core::Mask;
//! use tessella_region::{PackOptions, pack_mask};
//!
//! let mask = Mask::from_fn(10, 10, |_, _| true).unwrap();
//! let result = pack_mask(&mask, &PackOptions::default()).unwrap();
//!
//! // Cap is ceil(10 * 0.2) = 2
//! assert_eq!(result.max_box_size, 2);
//! assert_eq!(result.regions.len(), 25);
//! ```
//!
//! ## Assembling cluster regions
//!
//! ```
//! use tessella_core::{Bounds, LabelMap};
//! use tessella_region::{OrchestratorOptions, assemble_regions};
//!
//! let labels = LabelMap::from_rows(&[
//!     [0u32, 0, 0, 0],
//!     [0, 1, 1, 0],
//!     [0, 1, 1, 0],
//!     [0, 0, 0, 0],
//! ]).unwrap();
//! let bounds = Bounds::new(0, 4, 0, 4).unwrap();
//! let layout = assemble_regions(&labels, 2, &bounds, 128, &OrchestratorOptions::default())
//!     .unwrap();
//!
//! // Label 0 holds the corner and is skipped
//! assert_eq!(layout.background_labels, vec![0]);
//! assert_eq!(layout.local.len(), 4);
//! ```

pub mod boundary;
pub mod error;
pub mod orchestrate;
pub mod pack;

// Re-export core types
pub use tessella_core;

pub use boundary::find_boundaries;
pub use error::{RegionError, RegionResult};
pub use orchestrate::{
    DEFAULT_WORKING_RESOLUTION, OrchestratorOptions, RegionLayout, assemble_regions,
    collect_cluster_regions, to_original_coordinates,
};
pub use pack::{
    DEFAULT_MAX_BOX_FRACTION, PackOptions, PackResult, cap_box_size, pack_mask, pack_squares,
    square_size_at,
};
