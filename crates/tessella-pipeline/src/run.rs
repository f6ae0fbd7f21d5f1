//! Per-image run
//!
//! Chains every stage from the raw input raster to squares in the input's
//! coordinates:
//!
//! 1. Resize to `working_resolution` x `working_resolution`
//! 2. Seed mask, normalized so the top-left cell is background
//! 3. Foreground bounds of the seed mask
//! 4. Crop of the resized raster (last bounds row and column excluded)
//! 5. Diagonal background threshold of the crop
//! 6. Hull of the thresholded foreground
//! 7. Hull-filtered raster: `crop + ceil(offset_fraction * range)` inside
//!    the hull, 0 outside
//! 8. Enhancement
//! 9. Cluster-count estimate from the enhanced raster
//! 10. Clustering into `K` labels
//! 11. Per-cluster square packing and mapping back to the input
//!
//! The first failing stage aborts the run.

use crate::collaborator::{Collaborators, Renderer};
use crate::error::{PipelineError, PipelineResult, Stage};
use log::debug;
use tessella_color::{
    ClusterCountEstimate, DEFAULT_OFFSET_FRACTION, DiagonalThreshold, DiagonalThresholdOptions,
    PeakCountOptions, diagonal_mask_background, estimate_cluster_count,
};
use tessella_core::{Bounds, Error, LabelMap, Raster, ScaledRegion, SquareRegion};
use tessella_region::{
    DEFAULT_WORKING_RESOLUTION, OrchestratorOptions, PackOptions, RegionLayout, assemble_regions,
    find_boundaries,
};

/// Options for a per-image run
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Side length of the square working raster
    pub working_resolution: u32,
    /// Lift applied inside the hull, as a fraction of the diagonal range
    pub offset_fraction: f64,
    /// Diagonal thresholding options
    pub threshold: DiagonalThresholdOptions,
    /// Cluster-count estimation options
    pub peaks: PeakCountOptions,
    /// Square packing options
    pub pack: PackOptions,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            working_resolution: DEFAULT_WORKING_RESOLUTION,
            offset_fraction: DEFAULT_OFFSET_FRACTION,
            threshold: DiagonalThresholdOptions::default(),
            peaks: PeakCountOptions::default(),
            pack: PackOptions::default(),
        }
    }
}

impl PipelineOptions {
    fn validate(&self) -> PipelineResult<()> {
        if self.working_resolution == 0 {
            return Err(PipelineError::InvalidParameters(
                "working_resolution must be > 0".into(),
            ));
        }
        if !self.offset_fraction.is_finite() || self.offset_fraction < 0.0 {
            return Err(PipelineError::InvalidParameters(format!(
                "offset_fraction must be finite and non-negative, got {}",
                self.offset_fraction
            )));
        }
        Ok(())
    }
}

/// Everything a run produces, for inspection or rendering
#[derive(Debug, Clone)]
pub struct SegmentationOutcome {
    /// Row count of the input raster, the basis of the scale factor
    pub original_height: u32,
    /// Foreground bounds within the working raster
    pub bounds: Bounds,
    /// Crop of the working raster
    pub crop: Raster,
    /// Diagonal threshold of the crop
    pub threshold: DiagonalThreshold,
    /// Offset added inside the hull
    pub offset: u32,
    /// Cluster-count estimate
    pub estimate: ClusterCountEstimate,
    /// Labels returned by the clusterer
    pub labels: LabelMap,
    /// Packed squares, local and rescaled
    pub layout: RegionLayout,
}

impl SegmentationOutcome {
    /// Squares in the input raster's coordinates.
    pub fn regions(&self) -> &[ScaledRegion] {
        &self.layout.scaled
    }

    /// Squares in the crop's coordinates.
    pub fn local_regions(&self) -> &[SquareRegion] {
        &self.layout.local
    }

    /// Number of clusters requested from the clusterer.
    pub fn k(&self) -> usize {
        self.estimate.k
    }
}

fn ensure_shape(expected: (u32, u32), actual: (u32, u32)) -> PipelineResult<()> {
    if expected != actual {
        return Err(Error::ShapeMismatch { expected, actual }.into());
    }
    Ok(())
}

/// Segment `raster` into squares, one set per non-background cluster.
///
/// # Arguments
///
/// * `raster` - Input intensity raster at its original size
/// * `comps` - Number of components expected in the image
/// * `collaborators` - Resizing, seeding, hull, enhancement and clustering
/// * `options` - Run options
///
/// # Errors
///
/// - [`PipelineError::InvalidParameters`] for invalid options
/// - [`PipelineError::Collaborator`] when a collaborator fails
/// - [`PipelineError::Core`] with a shape mismatch when a collaborator
///   returns the wrong dimensions
/// - [`PipelineError::Region`] with an empty mask when the seed mask has
///   no foreground
pub fn segment_image(
    raster: &Raster,
    comps: usize,
    collaborators: &Collaborators<'_>,
    options: &PipelineOptions,
) -> PipelineResult<SegmentationOutcome> {
    options.validate()?;
    let res = options.working_resolution;
    let original_height = raster.height();

    let resized = collaborators.resizer.resize(raster, res, res)?;
    ensure_shape((res, res), resized.dimensions())?;

    let seed = collaborators.seeder.seed(&resized)?;
    ensure_shape(resized.dimensions(), seed.dimensions())?;
    let seed = seed.with_background_zero();

    let bounds = find_boundaries(&seed)?;
    let crop = resized.crop(&bounds)?;
    debug!(
        "bounds x {}..={} y {}..={}, crop {}x{}",
        bounds.min_x,
        bounds.max_x,
        bounds.min_y,
        bounds.max_y,
        crop.width(),
        crop.height()
    );

    let threshold = diagonal_mask_background(&crop, &options.threshold)?;
    let hull = collaborators.hull.fill_hull(&threshold.foreground)?;
    ensure_shape(crop.dimensions(), hull.dimensions())?;

    let offset = threshold.foreground_offset(options.offset_fraction);
    let filtered = crop.fill_masked(&hull, offset)?;
    let enhanced = collaborators.enhancer.enhance(&filtered)?;
    ensure_shape(crop.dimensions(), enhanced.dimensions())?;

    let estimate = estimate_cluster_count(&enhanced, comps, &options.peaks)?;
    let labels = collaborators.clusterer.cluster(&enhanced, estimate.k)?;
    ensure_shape(crop.dimensions(), labels.dimensions())?;

    let orchestrator = OrchestratorOptions {
        working_resolution: res,
        pack: options.pack.clone(),
    };
    let layout = assemble_regions(&labels, estimate.k, &bounds, original_height, &orchestrator)?;

    Ok(SegmentationOutcome {
        original_height,
        bounds,
        crop,
        threshold,
        offset,
        estimate,
        labels,
        layout,
    })
}

/// Run [`segment_image`] and hand the outcome to `renderer`.
///
/// # Errors
///
/// Any error from [`segment_image`], or
/// [`PipelineError::Collaborator`] for [`Stage::Render`] if the renderer
/// fails.
pub fn segment_and_render(
    raster: &Raster,
    comps: usize,
    collaborators: &Collaborators<'_>,
    renderer: &dyn Renderer,
    options: &PipelineOptions,
) -> PipelineResult<SegmentationOutcome> {
    let outcome = segment_image(raster, comps, collaborators, options)?;
    renderer.render(raster, &outcome).map_err(|e| match e {
        PipelineError::Collaborator { .. } => e,
        other => PipelineError::collaborator(Stage::Render, other.to_string()),
    })?;
    Ok(outcome)
}
