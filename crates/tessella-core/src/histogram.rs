//! Histogram - Equal-width intensity histogram
//!
//! Bins span `[min, max]` of the sampled values with `bins + 1` evenly
//! spaced edges. Every bin is half-open `[edge[i], edge[i + 1])` except the
//! last, which also includes the right edge so the maximum value is
//! counted. When all samples are equal the span is widened to
//! `[v - 0.5, v + 0.5]`; with no samples the span is `[0, 1]` and every
//! count is zero.

use crate::error::{Error, Result};

/// Equal-width histogram of integer intensities
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    counts: Vec<u64>,
    edges: Vec<f64>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width buckets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `bins` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessella_core::Histogram;
    ///
    /// let hist = Histogram::from_values(&[1, 2, 2, 3, 10], 3).unwrap();
    /// assert_eq!(hist.counts(), &[4, 0, 1]);
    /// assert_eq!(hist.edges()[0], 1.0);
    /// assert_eq!(hist.edges()[3], 10.0);
    /// ```
    pub fn from_values(values: &[u32], bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(Error::InvalidParameter("bins must be >= 1".to_string()));
        }

        let (mut first, mut last) = match (values.iter().min(), values.iter().max()) {
            (Some(&lo), Some(&hi)) => (lo as f64, hi as f64),
            _ => (0.0, 1.0),
        };
        if first == last {
            first -= 0.5;
            last += 0.5;
        }

        let step = (last - first) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| first + i as f64 * step).collect();
        edges.push(last);

        let mut counts = vec![0u64; bins];
        let norm = bins as f64 / (last - first);
        for &v in values {
            let v = v as f64;
            let mut idx = ((v - first) * norm) as usize;
            if idx >= bins {
                idx = bins - 1;
            }
            // Floating-point rounding can land one bin off; settle against the edges.
            if v < edges[idx] && idx > 0 {
                idx -= 1;
            } else if idx + 1 < bins && v >= edges[idx + 1] {
                idx += 1;
            }
            counts[idx] += 1;
        }

        Ok(Self { counts, edges })
    }

    /// Number of bins.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if the histogram has no bins (never the case once built).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Per-bin counts.
    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// The `len() + 1` bin edges.
    #[inline]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Total number of samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest bin count.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `(right edge, count)` for every bin.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.edges[1..].iter().copied().zip(self.counts.iter().copied())
    }
}
