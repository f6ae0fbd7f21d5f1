//! Bounds, SquareRegion, ScaledRegion - Rectangle and square regions
//!
//! All three are small `Copy` types. `Bounds` is an inclusive bounding box
//! in (column, row) terms, `SquareRegion` is a square in a mask's local
//! pixel grid, and `ScaledRegion` is the same square expressed in the
//! coordinate system of another (usually larger) raster.

use crate::error::{Error, Result};

/// Inclusive bounding box of foreground cells
///
/// `min_x..=max_x` are columns and `min_y..=max_y` are rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Leftmost foreground column
    pub min_x: u32,
    /// Rightmost foreground column
    pub max_x: u32,
    /// Topmost foreground row
    pub min_y: u32,
    /// Bottommost foreground row
    pub max_y: u32,
}

impl Bounds {
    /// Create bounds, checking that the minimums do not exceed the maximums
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `min_x > max_x` or `min_y > max_y`.
    pub fn new(min_x: u32, max_x: u32, min_y: u32, max_y: u32) -> Result<Self> {
        if min_x > max_x || min_y > max_y {
            return Err(Error::InvalidParameter(format!(
                "bounds are inverted: x {}..={}, y {}..={}",
                min_x, max_x, min_y, max_y
            )));
        }
        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    /// Inclusive width (number of foreground columns spanned)
    #[inline]
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Inclusive height (number of foreground rows spanned)
    #[inline]
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Check if a point lies inside the bounds
    #[inline]
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Return the bounds as the `(min_x, max_x, min_y, max_y)` tuple
    #[inline]
    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.min_x, self.max_x, self.min_y, self.max_y)
    }
}

/// An axis-aligned square in a mask's local pixel grid
///
/// The square covers columns `x..x + size` and rows `y..y + size`.
/// A size of 0 is a degenerate square that covers no cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareRegion {
    /// Left column
    pub x: u32,
    /// Top row
    pub y: u32,
    /// Side length
    pub size: u32,
}

impl SquareRegion {
    /// Create a new square region
    pub const fn new(x: u32, y: u32, size: u32) -> Self {
        Self { x, y, size }
    }

    /// Right column (exclusive)
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.size
    }

    /// Bottom row (exclusive)
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.size
    }

    /// Number of cells covered
    #[inline]
    pub fn area(&self) -> u64 {
        self.size as u64 * self.size as u64
    }

    /// Check if the square covers no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Check if a cell is inside the square
    #[inline]
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this square shares at least one cell with another
    pub fn overlaps(&self, other: &SquareRegion) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Shift the anchor by `(dx, dy)`, keeping the size
    pub fn translate(&self, dx: u32, dy: u32) -> SquareRegion {
        SquareRegion {
            x: self.x + dx,
            y: self.y + dy,
            size: self.size,
        }
    }

    /// Multiply anchor and size by `factor`
    pub fn scale(&self, factor: f64) -> ScaledRegion {
        ScaledRegion {
            x: self.x as f64 * factor,
            y: self.y as f64 * factor,
            size: self.size as f64 * factor,
        }
    }

    /// Iterate over every `(x, y)` cell of the square, row by row
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| (x, y)))
    }
}

/// A square expressed in a rescaled coordinate system
///
/// Produced by [`SquareRegion::scale`]; values are generally fractional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScaledRegion {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Side length
    pub size: f64,
}
