//! Greedy square packing
//!
//! Decomposes the foreground of a binary mask into non-overlapping
//! axis-aligned squares whose union is exactly the foreground.
//!
//! # Algorithm
//!
//! 1. Collect every foreground cell in column-major order (see
//!    [`Mask::foreground_column_major`]). This order is the tie-break
//!    between competing squares and is part of the output contract.
//! 2. Visit the cells in that order. A cell already cleared by an earlier
//!    square is skipped.
//! 3. Otherwise grow the largest all-foreground square anchored at the
//!    cell (top-left corner), limited by the bottom edge, the right edge,
//!    and `max_box_size`.
//! 4. Record the square and clear its cells in the mask.
//!
//! No cell is ever set back to foreground, so each visited anchor either
//! is skipped or strictly shrinks the remaining foreground, and the pass
//! ends after one sweep of the initial list.
//!
//! The packing is greedy and depends on anchor order; it is not a
//! minimum-count tiling.

use crate::error::{RegionError, RegionResult};
use log::debug;
use tessella_core::{Mask, SquareRegion};

/// Default square size cap, as a fraction of the smaller mask dimension
pub const DEFAULT_MAX_BOX_FRACTION: f64 = 0.2;

/// Options for square packing
#[derive(Debug, Clone)]
pub struct PackOptions {
    /// Cap on square side length, as a fraction of `min(width, height)`
    ///
    /// The cap is `ceil(min(width, height) * max_box_fraction)`.
    pub max_box_fraction: f64,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            max_box_fraction: DEFAULT_MAX_BOX_FRACTION,
        }
    }
}

/// Result of packing a private copy of a mask
#[derive(Debug, Clone)]
pub struct PackResult {
    /// Squares in the order they were claimed
    pub regions: Vec<SquareRegion>,
    /// Cap used for square side length
    pub max_box_size: u32,
    /// The mask after packing (all cells cleared unless the cap was 0)
    pub remaining: Mask,
}

/// Square side cap: `ceil(min(width, height) * fraction)`.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] unless `fraction` is finite
/// and greater than 0.
pub fn cap_box_size(width: u32, height: u32, fraction: f64) -> RegionResult<u32> {
    if !fraction.is_finite() || fraction <= 0.0 {
        return Err(RegionError::InvalidParameters(format!(
            "max_box_fraction must be finite and > 0, got {}",
            fraction
        )));
    }
    Ok((width.min(height) as f64 * fraction).ceil() as u32)
}

/// Side length of the largest all-foreground square anchored at `(x, y)`.
///
/// The limit is `min(height - y, width - x, max_box_size)`. The square is
/// grown one ring at a time (new right column plus new bottom row), which
/// gives the same answer as testing every size in increasing order and
/// stopping at the first that fails. An anchor that is itself background
/// yields 0.
pub fn square_size_at(mask: &Mask, x: u32, y: u32, max_box_size: u32) -> u32 {
    if x >= mask.width() || y >= mask.height() {
        return 0;
    }
    let limit = (mask.height() - y).min(mask.width() - x).min(max_box_size);

    let mut size = 0;
    while size < limit
        && mask.column_run_is_foreground(x + size, y, size + 1)
        && mask.row_run_is_foreground(x, y + size, size)
    {
        size += 1;
    }
    size
}

/// Pack the foreground of `mask` into squares, clearing it in place.
///
/// The caller hands over exclusive access for the duration of the pass;
/// use [`pack_mask`] to keep the original.
///
/// A `max_box_size` of 0 records a size-0 square per foreground cell and
/// clears nothing.
///
/// # Examples
///
/// ```
/// use tessella_core::{Mask, SquareRegion};
/// use tessella_region::pack_squares;
///
/// let mut mask = Mask::from_rows(&[
///     [1u8, 1, 1],
///     [1, 1, 1],
/// ]).unwrap();
/// let regions = pack_squares(&mut mask, 2);
/// assert_eq!(regions, vec![SquareRegion::new(0, 0, 2), SquareRegion::new(2, 0, 1),
///                          SquareRegion::new(2, 1, 1)]);
/// assert!(mask.is_blank());
/// ```
pub fn pack_squares(mask: &mut Mask, max_box_size: u32) -> Vec<SquareRegion> {
    let anchors = mask.foreground_column_major();
    let mut regions = Vec::new();

    // Anchors are consumed front to back and never re-queued.
    for (x, y) in anchors {
        if !mask.is_foreground(x, y) {
            continue;
        }
        let size = square_size_at(mask, x, y, max_box_size);
        let region = SquareRegion::new(x, y, size);
        mask.clear_square(&region);
        regions.push(region);
    }

    debug!(
        "packed {}x{} mask into {} squares (cap {})",
        mask.width(),
        mask.height(),
        regions.len(),
        max_box_size
    );
    regions
}

/// Pack a private copy of `mask`, deriving the cap from `options`.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] for an invalid
/// `max_box_fraction`.
pub fn pack_mask(mask: &Mask, options: &PackOptions) -> RegionResult<PackResult> {
    let max_box_size = cap_box_size(mask.width(), mask.height(), options.max_box_fraction)?;
    let mut remaining = mask.clone();
    let regions = pack_squares(&mut remaining, max_box_size);
    Ok(PackResult {
        regions,
        max_box_size,
        remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_box_size() {
        assert_eq!(cap_box_size(128, 128, 0.2).unwrap(), 26);
        assert_eq!(cap_box_size(40, 90, 0.2).unwrap(), 8);
        assert_eq!(cap_box_size(3, 7, 0.2).unwrap(), 1);
        assert!(cap_box_size(10, 10, 0.0).is_err());
        assert!(cap_box_size(10, 10, f64::INFINITY).is_err());
    }

    #[test]
    fn test_square_size_limits() {
        let mask = Mask::from_fn(5, 5, |_, _| true).unwrap();
        assert_eq!(square_size_at(&mask, 0, 0, 10), 5);
        assert_eq!(square_size_at(&mask, 0, 0, 3), 3);
        assert_eq!(square_size_at(&mask, 3, 1, 10), 2);
        assert_eq!(square_size_at(&mask, 1, 4, 10), 1);
        assert_eq!(square_size_at(&mask, 5, 0, 10), 0);
    }

    #[test]
    fn test_square_size_stops_at_hole() {
        let mask = Mask::from_rows(&[
            [1u8, 1, 1, 1],
            [1, 1, 1, 1],
            [1, 1, 0, 1],
            [1, 1, 1, 1],
        ])
        .unwrap();
        assert_eq!(square_size_at(&mask, 0, 0, 4), 2);
        assert_eq!(square_size_at(&mask, 2, 2, 4), 0);
        assert_eq!(square_size_at(&mask, 1, 0, 4), 2);
        assert_eq!(square_size_at(&mask, 3, 0, 4), 1);
    }

    #[test]
    fn test_column_major_tie_break() {
        // An L-shape where row-major and column-major anchors disagree
        let mut mask = Mask::from_rows(&[[1u8, 1, 1], [1, 1, 0], [1, 1, 0]]).unwrap();
        let regions = pack_squares(&mut mask, 3);
        assert_eq!(
            regions,
            vec![
                SquareRegion::new(0, 0, 2),
                SquareRegion::new(0, 2, 1),
                SquareRegion::new(1, 2, 1),
                SquareRegion::new(2, 0, 1),
            ]
        );
    }

    #[test]
    fn test_zero_cap_claims_nothing() {
        let mut mask = Mask::from_fn(2, 2, |_, _| true).unwrap();
        let regions = pack_squares(&mut mask, 0);
        assert_eq!(regions.len(), 4);
        assert!(regions.iter().all(|r| r.size == 0));
        assert_eq!(mask.count_foreground(), 4);
    }

    #[test]
    fn test_pack_mask_keeps_original() {
        let mask = Mask::from_fn(10, 10, |_, _| true).unwrap();
        let result = pack_mask(&mask, &PackOptions::default()).unwrap();
        assert_eq!(result.max_box_size, 2);
        assert_eq!(result.regions.len(), 25);
        assert!(result.remaining.is_blank());
        assert_eq!(mask.count_foreground(), 100);
    }
}
