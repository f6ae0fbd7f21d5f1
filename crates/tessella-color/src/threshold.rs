//! Diagonal background thresholding
//!
//! Picks an intensity cutoff between a dark background and a bright
//! specimen by looking only at the main diagonal of the working raster.
//! The diagonal crosses background near both corners, so the flat,
//! low-valued stretches along it give a background level that is not
//! pulled around by bright outliers the way a global mean or Otsu
//! threshold would be.
//!
//! # Algorithm
//!
//! With `rng = max - min` of the diagonal:
//!
//! 1. `search_cutoff = ceil(search_fraction * rng)`,
//!    `max_rise = ceil(rise_fraction * rng)`
//! 2. Keep the first diagonal sample, then every later sample whose step
//!    from its predecessor is `< max_rise` and whose value is
//!    `< search_cutoff` (the "low-slope points").
//! 3. `cutoff = ceil(max(low-slope points) + margin_fraction * rng)`
//! 4. Foreground is every raster cell `> cutoff`.
//!
//! A flat diagonal (`rng == 0`) is accepted: the cutoff becomes the
//! diagonal value itself and a [`ColorWarning::DegenerateRange`] is
//! attached to the result.

use crate::{ColorError, ColorResult};
use log::{debug, warn};
use tessella_core::{Mask, Raster};

/// Default fraction of the diagonal range below which samples may be background
pub const DEFAULT_SEARCH_FRACTION: f64 = 0.1;

/// Default fraction of the diagonal range allowed as a step between samples
pub const DEFAULT_RISE_FRACTION: f64 = 0.01;

/// Default fraction of the diagonal range added above the background level
pub const DEFAULT_MARGIN_FRACTION: f64 = 0.1;

/// Default fraction of the diagonal range added to foreground intensities
pub const DEFAULT_OFFSET_FRACTION: f64 = 0.2;

/// Options for diagonal background thresholding
#[derive(Debug, Clone)]
pub struct DiagonalThresholdOptions {
    /// Samples must be below `ceil(search_fraction * rng)` to count as background
    pub search_fraction: f64,
    /// Steps must be below `ceil(rise_fraction * rng)` to count as flat
    pub rise_fraction: f64,
    /// Margin above the background level, as a fraction of `rng`
    pub margin_fraction: f64,
}

impl Default for DiagonalThresholdOptions {
    fn default() -> Self {
        Self {
            search_fraction: DEFAULT_SEARCH_FRACTION,
            rise_fraction: DEFAULT_RISE_FRACTION,
            margin_fraction: DEFAULT_MARGIN_FRACTION,
        }
    }
}

impl DiagonalThresholdOptions {
    fn validate(&self) -> ColorResult<()> {
        for (name, value) in [
            ("search_fraction", self.search_fraction),
            ("rise_fraction", self.rise_fraction),
            ("margin_fraction", self.margin_fraction),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ColorError::InvalidParameters(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Non-fatal conditions reported alongside a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWarning {
    /// The diagonal is constant; the cutoff equals that constant
    DegenerateRange {
        /// The constant diagonal value
        value: u32,
    },
}

/// Result of diagonal background thresholding
#[derive(Debug, Clone)]
pub struct DiagonalThreshold {
    /// Cells strictly above [`cutoff`](Self::cutoff)
    pub foreground: Mask,
    /// `max - min` of the diagonal
    pub range: u32,
    /// Intensity cutoff
    pub cutoff: u32,
    /// Diagonal samples judged to be flat background
    pub low_slope_points: Vec<u32>,
    /// Set when the diagonal range is zero
    pub warning: Option<ColorWarning>,
}

impl DiagonalThreshold {
    /// `ceil(fraction * range)`, the lift applied to foreground intensities
    /// before clustering so they stay clear of the zeroed background.
    pub fn foreground_offset(&self, fraction: f64) -> u32 {
        (self.range as f64 * fraction).ceil() as u32
    }

    /// True when the diagonal was flat.
    pub fn is_degenerate(&self) -> bool {
        self.warning.is_some()
    }
}

/// Collect the low-slope points of a diagonal.
///
/// The first sample is always kept. A later sample `d[i]` is kept when
/// `|d[i - 1] - d[i]| < max_rise` and `d[i] < search_cutoff`.
///
/// # Examples
///
/// ```
/// use tessella_color::low_slope_points;
///
/// let diag = [3, 3, 3, 4, 4, 90, 100, 100];
/// assert_eq!(low_slope_points(&diag, 1.0, 10.0), vec![3, 3, 3, 4]);
/// ```
pub fn low_slope_points(diagonal: &[u32], max_rise: f64, search_cutoff: f64) -> Vec<u32> {
    let Some(&first) = diagonal.first() else {
        return Vec::new();
    };
    let mut points = vec![first];
    for pair in diagonal.windows(2) {
        let step = (pair[0] as f64 - pair[1] as f64).abs();
        if step < max_rise && (pair[1] as f64) < search_cutoff {
            points.push(pair[1]);
        }
    }
    points
}

/// Threshold a raster using the background level found along its diagonal.
///
/// Non-square rasters use the diagonal of their leading square
/// (`min(width, height)` samples).
///
/// # Arguments
///
/// * `raster` - Working-resolution raster (possibly cropped)
/// * `options` - Fractions controlling the search
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if any fraction is negative
/// or not finite.
pub fn diagonal_mask_background(
    raster: &Raster,
    options: &DiagonalThresholdOptions,
) -> ColorResult<DiagonalThreshold> {
    options.validate()?;

    let diagonal = raster.diagonal();
    let min = diagonal.iter().copied().min().unwrap_or(0);
    let max = diagonal.iter().copied().max().unwrap_or(0);
    let range = max - min;
    let rng = range as f64;

    let search_cutoff = (rng * options.search_fraction).ceil();
    let max_rise = (rng * options.rise_fraction).ceil();
    let points = low_slope_points(&diagonal, max_rise, search_cutoff);
    let background_level = points.iter().copied().max().unwrap_or(0);
    let cutoff = (background_level as f64 + options.margin_fraction * rng).ceil() as u32;

    let warning = if range == 0 {
        warn!(
            "diagonal is flat at {}; cutoff degenerates to the diagonal value",
            min
        );
        Some(ColorWarning::DegenerateRange { value: min })
    } else {
        None
    };

    debug!(
        "diagonal range {} (search < {}, rise < {}), {} low-slope points, cutoff {}",
        range,
        search_cutoff,
        max_rise,
        points.len(),
        cutoff
    );

    Ok(DiagonalThreshold {
        foreground: raster.threshold_above(cutoff),
        range,
        cutoff,
        low_slope_points: points,
        warning,
    })
}
