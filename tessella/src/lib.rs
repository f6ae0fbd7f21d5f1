//! Tessella - Square decomposition of segmented intensity images
//!
//! Covers each intensity cluster of an image with non-overlapping
//! axis-aligned squares.
//!
//! # Overview
//!
//! - Foreground bounds and greedy square packing of binary masks
//! - Background thresholding from the raster's main diagonal
//! - Cluster-count estimation from intensity histogram peaks
//! - A per-image run with pluggable resizing, hull, enhancement and
//!   clustering collaborators
//!
//! # Example
//!
//! ```
//! use tessella::{Mask, SquareRegion};
//! use tessella::region::pack_squares;
//!
//! let mut mask = Mask::from_fn(4, 4, |x, y| x < 2 && y < 2).unwrap();
//! let regions = pack_squares(&mut mask, 4);
//! assert_eq!(regions, vec![SquareRegion::new(0, 0, 2)]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use tessella_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use tessella_color as color;
pub use tessella_pipeline as pipeline;
pub use tessella_region as region;
