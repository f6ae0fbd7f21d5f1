//! Per-cluster packing and coordinate mapping
//!
//! Takes the label map produced by the clustering routine over the
//! cropped working raster, packs every non-background cluster into
//! squares, and maps the result back to the original raster.
//!
//! # Background detection
//!
//! A cluster whose mask covers the top-left cell of the working raster
//! is taken to be background and is not packed. This assumes the corner
//! of the crop always shows the field and not the specimen.

use crate::error::{RegionError, RegionResult};
use crate::pack::{PackOptions, pack_mask};
use log::debug;
use tessella_core::{Bounds, LabelMap, ScaledRegion, SquareRegion};

/// Default side length of the square working raster
pub const DEFAULT_WORKING_RESOLUTION: u32 = 128;

/// Options for region assembly
#[derive(Debug, Clone)]
pub struct OrchestratorOptions {
    /// Side length of the working raster the label map was computed on
    pub working_resolution: u32,
    /// Square packing options applied to every cluster
    pub pack: PackOptions,
}

impl Default for OrchestratorOptions {
    fn default() -> Self {
        Self {
            working_resolution: DEFAULT_WORKING_RESOLUTION,
            pack: PackOptions::default(),
        }
    }
}

/// Squares of every packed cluster, in local and original coordinates
#[derive(Debug, Clone, Default)]
pub struct RegionLayout {
    /// Squares in the label map's coordinates, label order then packing order
    pub local: Vec<SquareRegion>,
    /// The same squares translated and scaled to the original raster
    pub scaled: Vec<ScaledRegion>,
    /// Labels skipped as background
    pub background_labels: Vec<u32>,
    /// Number of squares contributed by each packed label
    pub per_label: Vec<(u32, usize)>,
}

/// Pack every non-background label `0..k` of `labels`.
///
/// Returns the squares concatenated in label order and the labels that
/// were skipped as background.
///
/// # Errors
///
/// Propagates [`RegionError::InvalidParameters`] from the packing options.
pub fn collect_cluster_regions(
    labels: &LabelMap,
    k: usize,
    options: &PackOptions,
) -> RegionResult<(Vec<SquareRegion>, Vec<u32>)> {
    let mut regions = Vec::new();
    let mut background = Vec::new();

    for label in 0..k as u32 {
        match pack_label(labels, label, options)? {
            Some(packed) => regions.extend(packed),
            None => background.push(label),
        }
    }

    Ok((regions, background))
}

/// Map squares from the cropped working raster to the original raster.
///
/// Each anchor is shifted by `(bounds.min_x, bounds.min_y)`, then anchor
/// and size are multiplied by `original_height / working_resolution`.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if `working_resolution` is 0.
pub fn to_original_coordinates(
    regions: &[SquareRegion],
    bounds: &Bounds,
    original_height: u32,
    working_resolution: u32,
) -> RegionResult<Vec<ScaledRegion>> {
    if working_resolution == 0 {
        return Err(RegionError::InvalidParameters(
            "working_resolution must be > 0".into(),
        ));
    }
    let factor = original_height as f64 / working_resolution as f64;
    Ok(regions
        .iter()
        .map(|r| r.translate(bounds.min_x, bounds.min_y).scale(factor))
        .collect())
}

/// Pack all clusters and map the squares back to the original raster.
///
/// # Arguments
///
/// * `labels` - Label map over the cropped working raster
/// * `k` - Number of clusters requested from the clustering routine
/// * `bounds` - Crop bounds within the working raster
/// * `original_height` - Row count of the original, unresized raster
/// * `options` - Working resolution and packing options
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] for invalid options.
pub fn assemble_regions(
    labels: &LabelMap,
    k: usize,
    bounds: &Bounds,
    original_height: u32,
    options: &OrchestratorOptions,
) -> RegionResult<RegionLayout> {
    let mut layout = RegionLayout::default();

    for label in 0..k as u32 {
        match pack_label(labels, label, &options.pack)? {
            Some(packed) => {
                layout.per_label.push((label, packed.len()));
                layout.local.extend(packed);
            }
            None => layout.background_labels.push(label),
        }
    }

    layout.scaled = to_original_coordinates(
        &layout.local,
        bounds,
        original_height,
        options.working_resolution,
    )?;
    debug!(
        "{} squares from {} clusters ({} background)",
        layout.local.len(),
        layout.per_label.len(),
        layout.background_labels.len()
    );
    Ok(layout)
}

/// Squares for one label, or `None` if the label is background.
fn pack_label(
    labels: &LabelMap,
    label: u32,
    options: &PackOptions,
) -> RegionResult<Option<Vec<SquareRegion>>> {
    let mask = labels.mask_for(label);
    if mask.top_left_is_foreground() {
        debug!("label {} covers the top-left cell, skipped as background", label);
        return Ok(None);
    }
    let packed = pack_mask(&mask, options)?;
    debug!("label {}: {} squares", label, packed.regions.len());
    Ok(Some(packed.regions))
}
