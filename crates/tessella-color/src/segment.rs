//! Cluster-count estimation
//!
//! Chooses how many intensity clusters to ask the clustering routine for,
//! by counting the prominent peaks of the histogram of non-zero
//! intensities and reconciling that count with the number of components
//! the caller expects.
//!
//! # Decision rule
//!
//! ```text
//! if num_peaks < 2 || |num_peaks - comps| >= 2   =>  K = comps + 1
//! else                                           =>  K = num_peaks + 1
//! ```
//!
//! The extra cluster in both branches is reserved for the background.
//! Histograms that disagree wildly with the expectation are treated as
//! noise and the expectation wins.

use crate::{ColorError, ColorResult};
use log::debug;
use tessella_core::{Histogram, Raster, find_peaks};

/// Default number of histogram bins
pub const DEFAULT_BINS: usize = 20;

/// Default minimum peak prominence, as a fraction of the tallest bin
pub const DEFAULT_PROMINENCE_FRACTION: f64 = 0.05;

/// Options for cluster-count estimation
#[derive(Debug, Clone)]
pub struct PeakCountOptions {
    /// Number of histogram bins (must be >= 1)
    pub bins: usize,
    /// Minimum prominence as a fraction of the largest bin count
    pub prominence_fraction: f64,
}

impl Default for PeakCountOptions {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            prominence_fraction: DEFAULT_PROMINENCE_FRACTION,
        }
    }
}

/// Result of cluster-count estimation
#[derive(Debug, Clone)]
pub struct ClusterCountEstimate {
    /// Histogram of the non-zero intensities
    pub histogram: Histogram,
    /// Histogram bin indices of the prominent peaks
    pub peak_bins: Vec<usize>,
    /// Number of prominent peaks
    pub num_peaks: usize,
    /// Chosen number of clusters, background included
    pub k: usize,
}

/// Apply the decision rule to a peak count and an expected component count.
///
/// # Examples
///
/// ```
/// use tessella_color::choose_cluster_count;
///
/// assert_eq!(choose_cluster_count(3, 3), 4);
/// assert_eq!(choose_cluster_count(1, 3), 4); // too few peaks
/// assert_eq!(choose_cluster_count(5, 3), 4); // too far from expectation
/// assert_eq!(choose_cluster_count(4, 3), 5); // close enough, trust the peaks
/// ```
pub fn choose_cluster_count(num_peaks: usize, comps: usize) -> usize {
    if num_peaks < 2 || num_peaks.abs_diff(comps) >= 2 {
        comps + 1
    } else {
        num_peaks + 1
    }
}

/// Estimate the cluster count for `raster`.
///
/// Zero-valued cells are background and excluded from the histogram. A
/// zero count is appended after the last bin so that a peak in the
/// rightmost bin can still be detected.
///
/// # Arguments
///
/// * `raster` - Enhanced intensity raster, background already zeroed
/// * `comps` - Number of components the caller expects
/// * `options` - Bin count and prominence threshold
///
/// # Errors
///
/// Returns [`ColorError::InvalidBinCount`] if `options.bins` is 0 and
/// [`ColorError::InvalidParameters`] for a negative or non-finite
/// prominence fraction.
pub fn estimate_cluster_count(
    raster: &Raster,
    comps: usize,
    options: &PeakCountOptions,
) -> ColorResult<ClusterCountEstimate> {
    if options.bins == 0 {
        return Err(ColorError::InvalidBinCount(options.bins));
    }
    if !options.prominence_fraction.is_finite() || options.prominence_fraction < 0.0 {
        return Err(ColorError::InvalidParameters(format!(
            "prominence_fraction must be finite and non-negative, got {}",
            options.prominence_fraction
        )));
    }

    let values: Vec<u32> = raster.nonzero_values().collect();
    let histogram = Histogram::from_values(&values, options.bins)?;

    let mut signal: Vec<f64> = histogram.counts().iter().map(|&c| c as f64).collect();
    signal.push(0.0);
    let min_prominence = histogram.max_count() as f64 * options.prominence_fraction;
    let peak_bins: Vec<usize> = find_peaks(&signal, min_prominence)
        .into_iter()
        .map(|p| p.index)
        .collect();

    let num_peaks = peak_bins.len();
    let k = choose_cluster_count(num_peaks, comps);
    debug!(
        "{} non-zero samples, peaks at bins {:?}, expected {} components, K = {}",
        values.len(),
        peak_bins,
        comps,
        k
    );

    Ok(ClusterCountEstimate {
        histogram,
        peak_bins,
        num_peaks,
        k,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_cluster_count_band() {
        assert_eq!(choose_cluster_count(0, 1), 2);
        assert_eq!(choose_cluster_count(2, 1), 3);
        assert_eq!(choose_cluster_count(3, 1), 2);
        assert_eq!(choose_cluster_count(2, 3), 3);
        assert_eq!(choose_cluster_count(2, 4), 5);
    }

    #[test]
    fn test_zero_bins() {
        let raster = Raster::new(4, 4).unwrap();
        let options = PeakCountOptions {
            bins: 0,
            ..Default::default()
        };
        assert!(matches!(
            estimate_cluster_count(&raster, 2, &options),
            Err(ColorError::InvalidBinCount(0))
        ));
    }

    #[test]
    fn test_all_background() {
        let raster = Raster::new(8, 8).unwrap();
        let est = estimate_cluster_count(&raster, 2, &PeakCountOptions::default()).unwrap();
        assert_eq!(est.num_peaks, 0);
        assert_eq!(est.k, 3);
        assert_eq!(est.histogram.total(), 0);
    }

    #[test]
    fn test_single_level_widened_span() {
        // A single intensity widens the span to [89.5, 90.5] and fills bin 10
        let raster = Raster::from_fn(4, 4, |x, _| if x < 2 { 0 } else { 90 }).unwrap();
        let est = estimate_cluster_count(&raster, 1, &PeakCountOptions::default()).unwrap();
        assert_eq!(est.peak_bins, vec![10]);
        assert_eq!(est.num_peaks, 1);
        assert_eq!(est.k, 2);
    }
}
