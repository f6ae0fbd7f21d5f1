//! tessella-pipeline - Per-image segmentation run
//!
//! Chains resizing, boundary search, diagonal thresholding, cluster-count
//! estimation, clustering and square packing into one call,
//! [`segment_image`]. The image-processing stages that Tessella does not
//! implement itself (resizing, seed mask, hull, enhancement, clustering,
//! rendering) are supplied through the traits in [`collaborator`].
//!
//! # Example
//!
//! ```
//! use tessella_core::{LabelMap, Mask, Raster};
//! use tessella_pipeline::{Collaborators, PipelineOptions, PipelineResult, segment_image};
//!
//! fn keep(raster: &Raster, _w: u32, _h: u32) -> PipelineResult<Raster> {
//!     Ok(raster.clone())
//! }
//! fn seed(raster: &Raster) -> PipelineResult<Mask> {
//!     Ok(raster.threshold_above(0))
//! }
//! fn hull(mask: &Mask) -> PipelineResult<Mask> {
//!     Ok(mask.clone())
//! }
//! fn enhance(raster: &Raster) -> PipelineResult<Raster> {
//!     Ok(raster.clone())
//! }
//! fn cluster(raster: &Raster, _k: usize) -> PipelineResult<LabelMap> {
//!     let labels = raster.as_slice().iter().map(|&v| u32::from(v != 0)).collect();
//!     Ok(LabelMap::from_vec(raster.width(), raster.height(), labels)?)
//! }
//!
//! let raster = Raster::from_fn(16, 16, |x, y| {
//!     let (dx, dy) = (x as i64 - 8, y as i64 - 8);
//!     (60 - dx * dx - dy * dy).max(0) as u32
//! }).unwrap();
//! let collaborators = Collaborators {
//!     resizer: &keep,
//!     seeder: &seed,
//!     hull: &hull,
//!     enhancer: &enhance,
//!     clusterer: &cluster,
//! };
//! let options = PipelineOptions { working_resolution: 16, ..Default::default() };
//! let outcome = segment_image(&raster, 1, &collaborators, &options).unwrap();
//! assert_eq!(outcome.k(), 2);
//! assert!(!outcome.regions().is_empty());
//! ```

pub mod collaborator;
pub mod error;
pub mod run;

pub use tessella_color;
pub use tessella_core;
pub use tessella_region;

pub use collaborator::{
    Clusterer, Collaborators, Enhancer, ForegroundSeeder, HullFiller, Renderer, Resizer,
};
pub use error::{PipelineError, PipelineResult, Stage};
pub use run::{PipelineOptions, SegmentationOutcome, segment_and_render, segment_image};
