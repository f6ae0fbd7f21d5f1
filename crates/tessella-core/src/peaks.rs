//! Local maxima and topographic prominence of a 1-D signal
//!
//! A sample is a local maximum when it is strictly higher than its left
//! neighbour and the next *different* sample to its right is lower. Flat
//! tops are reported once, at the midpoint of the plateau (rounded down).
//! The first and last samples are never maxima.
//!
//! The prominence of a peak is its height above the higher of the two
//! lowest points reached when walking outwards on each side until a
//! strictly higher sample (or the signal end) is met.

/// A local maximum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Sample index (plateau midpoint for flat tops)
    pub index: usize,
    /// Topographic prominence
    pub prominence: f64,
}

/// Indices of all local maxima, in increasing order.
pub fn local_maxima(signal: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    if signal.len() < 3 {
        return peaks;
    }
    let last = signal.len() - 1;
    let mut i = 1;
    while i < last {
        if signal[i - 1] < signal[i] {
            let mut ahead = i + 1;
            while ahead < last && signal[ahead] == signal[i] {
                ahead += 1;
            }
            if signal[ahead] < signal[i] {
                peaks.push((i + ahead - 1) / 2);
                i = ahead;
            }
        }
        i += 1;
    }
    peaks
}

/// Prominence of the sample at `peak`.
///
/// # Panics
///
/// Panics if `peak` is out of range.
pub fn prominence(signal: &[f64], peak: usize) -> f64 {
    let height = signal[peak];

    let mut left_min = height;
    let mut i = peak as isize;
    while i >= 0 && signal[i as usize] <= height {
        left_min = left_min.min(signal[i as usize]);
        i -= 1;
    }

    let mut right_min = height;
    let mut j = peak;
    while j < signal.len() && signal[j] <= height {
        right_min = right_min.min(signal[j]);
        j += 1;
    }

    height - left_min.max(right_min)
}

/// Local maxima whose prominence is at least `min_prominence`.
///
/// # Examples
///
/// ```
/// use tessella_core::find_peaks;
///
/// let signal = [0.0, 5.0, 1.0, 2.0, 1.5, 8.0, 0.0];
/// let peaks = find_peaks(&signal, 1.0);
/// let indices: Vec<usize> = peaks.iter().map(|p| p.index).collect();
/// assert_eq!(indices, vec![1, 5]);
/// ```
pub fn find_peaks(signal: &[f64], min_prominence: f64) -> Vec<Peak> {
    local_maxima(signal)
        .into_iter()
        .map(|index| Peak {
            index,
            prominence: prominence(signal, index),
        })
        .filter(|p| p.prominence >= min_prominence)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_never_peaks() {
        assert!(local_maxima(&[5.0, 1.0, 5.0]).is_empty());
        assert!(local_maxima(&[1.0, 2.0]).is_empty());
        assert!(local_maxima(&[]).is_empty());
    }

    #[test]
    fn test_plateau_midpoint() {
        // Plateau at 1..=4, midpoint (1 + 4) / 2 = 2
        assert_eq!(local_maxima(&[0.0, 3.0, 3.0, 3.0, 3.0, 1.0]), vec![2]);
        // Plateau running into the final sample is not a peak
        assert!(local_maxima(&[0.0, 3.0, 3.0, 3.0]).is_empty());
    }

    #[test]
    fn test_trailing_zero_exposes_edge_peak() {
        let hist = [1.0, 2.0, 9.0];
        assert!(local_maxima(&hist).is_empty());
        let padded = [1.0, 2.0, 9.0, 0.0];
        assert_eq!(local_maxima(&padded), vec![2]);
        assert_eq!(prominence(&padded, 2), 8.0);
    }

    #[test]
    fn test_prominence_uses_higher_base() {
        // Left walk reaches 0 at index 0, right walk stops at 10 having seen 2
        let signal = [0.0, 6.0, 2.0, 10.0, 0.0];
        assert_eq!(prominence(&signal, 1), 4.0);
        assert_eq!(prominence(&signal, 3), 10.0);
    }

    #[test]
    fn test_filter_by_prominence() {
        let signal = [0.0, 4.0, 3.5, 5.0, 0.0, 1.0, 0.0];
        let peaks = find_peaks(&signal, 0.9);
        let idx: Vec<usize> = peaks.iter().map(|p| p.index).collect();
        // Index 1 (prominence 0.5) is dropped, index 3 (5.0) and 5 (1.0) kept
        assert_eq!(idx, vec![3, 5]);
    }
}
