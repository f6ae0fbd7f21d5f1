//! Pluggable collaborators
//!
//! Resizing, seed-mask generation, hull filling, enhancement, clustering
//! and rendering are supplied by the caller. Each trait has a blanket
//! implementation for closures of the matching shape, so a caller can
//! pass a function or a configured backend interchangeably.
//!
//! Implementations report their own failures with
//! [`PipelineError::collaborator`](crate::PipelineError::collaborator).

use crate::SegmentationOutcome;
use crate::error::PipelineResult;
use tessella_core::{LabelMap, Mask, Raster};

/// Resamples a raster to a fixed size.
pub trait Resizer {
    /// Return `raster` resampled to `width` x `height`.
    fn resize(&self, raster: &Raster, width: u32, height: u32) -> PipelineResult<Raster>;
}

/// Produces the seed mask the foreground bounds are taken from.
///
/// Typically a sharpen, blur and adaptive-threshold chain. The polarity of
/// the result does not matter; it is normalized so that the top-left cell
/// is background.
pub trait ForegroundSeeder {
    /// Seed mask for `raster`, same dimensions.
    fn seed(&self, raster: &Raster) -> PipelineResult<Mask>;
}

/// Fills the convex hull of a mask's foreground.
pub trait HullFiller {
    /// Hull of `mask`, same dimensions.
    fn fill_hull(&self, mask: &Mask) -> PipelineResult<Mask>;
}

/// Second enhancement pass over the hull-filtered raster.
///
/// Zero cells should stay zero; they are excluded from the intensity
/// histogram as background.
pub trait Enhancer {
    /// Enhanced copy of `raster`, same dimensions.
    fn enhance(&self, raster: &Raster) -> PipelineResult<Raster>;
}

/// Assigns every cell one of `k` labels.
pub trait Clusterer {
    /// Label map over `raster` with labels in `0..k`.
    fn cluster(&self, raster: &Raster, k: usize) -> PipelineResult<LabelMap>;
}

/// Consumes the outcome of a run, e.g. to draw the squares over the input.
pub trait Renderer {
    /// Render `outcome` for the `original` raster it was computed from.
    fn render(&self, original: &Raster, outcome: &SegmentationOutcome) -> PipelineResult<()>;
}

impl<F> Resizer for F
where
    F: Fn(&Raster, u32, u32) -> PipelineResult<Raster>,
{
    fn resize(&self, raster: &Raster, width: u32, height: u32) -> PipelineResult<Raster> {
        self(raster, width, height)
    }
}

impl<F> ForegroundSeeder for F
where
    F: Fn(&Raster) -> PipelineResult<Mask>,
{
    fn seed(&self, raster: &Raster) -> PipelineResult<Mask> {
        self(raster)
    }
}

impl<F> HullFiller for F
where
    F: Fn(&Mask) -> PipelineResult<Mask>,
{
    fn fill_hull(&self, mask: &Mask) -> PipelineResult<Mask> {
        self(mask)
    }
}

impl<F> Enhancer for F
where
    F: Fn(&Raster) -> PipelineResult<Raster>,
{
    fn enhance(&self, raster: &Raster) -> PipelineResult<Raster> {
        self(raster)
    }
}

impl<F> Clusterer for F
where
    F: Fn(&Raster, usize) -> PipelineResult<LabelMap>,
{
    fn cluster(&self, raster: &Raster, k: usize) -> PipelineResult<LabelMap> {
        self(raster, k)
    }
}

impl<F> Renderer for F
where
    F: Fn(&Raster, &SegmentationOutcome) -> PipelineResult<()>,
{
    fn render(&self, original: &Raster, outcome: &SegmentationOutcome) -> PipelineResult<()> {
        self(original, outcome)
    }
}

/// The set of collaborators a run needs.
pub struct Collaborators<'a> {
    /// Resizes the input to the working resolution
    pub resizer: &'a dyn Resizer,
    /// Builds the seed mask for the boundary search
    pub seeder: &'a dyn ForegroundSeeder,
    /// Fills the hull of the thresholded foreground
    pub hull: &'a dyn HullFiller,
    /// Enhances the hull-filtered raster
    pub enhancer: &'a dyn Enhancer,
    /// Clusters the enhanced raster
    pub clusterer: &'a dyn Clusterer,
}
