//! Foreground bounding box

use crate::error::{RegionError, RegionResult};
use tessella_core::{Bounds, Mask};

/// Find the inclusive bounding box of the foreground cells of `mask`.
///
/// # Errors
///
/// Returns [`RegionError::EmptyMask`] if no cell is foreground.
///
/// # Examples
///
/// ```
/// use tessella_core::Mask;
/// use tessella_region::find_boundaries;
///
/// let mask = Mask::from_fn(10, 10, |x, y| x == 5 && y == 7).unwrap();
/// let bounds = find_boundaries(&mask).unwrap();
/// assert_eq!(bounds.as_tuple(), (5, 5, 7, 7));
/// ```
pub fn find_boundaries(mask: &Mask) -> RegionResult<Bounds> {
    let mut found: Option<(u32, u32, u32, u32)> = None;

    for y in 0..mask.height() {
        for x in 0..mask.width() {
            if !mask.is_foreground(x, y) {
                continue;
            }
            found = Some(match found {
                None => (x, x, y, y),
                Some((min_x, max_x, min_y, max_y)) => {
                    (min_x.min(x), max_x.max(x), min_y.min(y), max_y.max(y))
                }
            });
        }
    }

    let (min_x, max_x, min_y, max_y) = found.ok_or(RegionError::EmptyMask)?;
    Ok(Bounds::new(min_x, max_x, min_y, max_y)?)
}
