//! Mask - Binary foreground grid
//!
//! A `Mask` stores one byte per cell, each either 0 (background) or 1
//! (foreground), row-major. Masks are mutable: the square packer clears
//! cells as they are claimed.
//!
//! # Visiting order
//!
//! [`Mask::foreground_column_major`] enumerates foreground cells column by
//! column (all rows of column 0 top to bottom, then column 1, ...). This
//! is the same as scanning the transposed mask row by row, and it is the
//! order the packer uses to break ties between competing squares.

use crate::error::{Error, Result};
use crate::geometry::SquareRegion;
use crate::raster::{cell_count, check_dimensions};

/// Binary foreground grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Mask {
    /// Create an all-background mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; cell_count(width, height)],
        })
    }

    /// Wrap a row-major buffer of 0/1 cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] on a length mismatch and
    /// [`Error::InvalidMaskValue`] if any cell is neither 0 nor 1.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = cell_count(width, height);
        if data.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        if let Some((index, &value)) = data.iter().enumerate().find(|&(_, &v)| v > 1) {
            return Err(Error::InvalidMaskValue { index, value });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a mask from a list of equal-length rows of 0/1 cells.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        check_dimensions(width, height)?;
        let mut data = Vec::with_capacity(cell_count(width, height));
        for row in rows {
            let row = row.as_ref();
            if row.len() as u32 != width {
                return Err(Error::ShapeMismatch {
                    expected: (width, height),
                    actual: (row.len() as u32, height),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(width, height, data)
    }

    /// Build a mask by evaluating `f(x, y)` for every cell.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> bool,
    {
        check_dimensions(width, height)?;
        let mut data = Vec::with_capacity(cell_count(width, height));
        for y in 0..height {
            for x in 0..width {
                data.push(u8::from(f(x, y)));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build from cells already known to be 0/1 with a matching length.
    pub(crate) fn from_cells_unchecked(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), cell_count(width, height));
        Self {
            width,
            height,
            data,
        }
    }

    /// Get the mask width (columns).
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the mask height (rows).
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Row-major view of the cells.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Check whether `(x, y)` is foreground. Cells outside the grid are background.
    #[inline]
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.data[self.index(x, y)] != 0
    }

    /// Set or clear a single cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] outside the grid.
    pub fn set(&mut self, x: u32, y: u32, foreground: bool) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = u8::from(foreground);
        Ok(())
    }

    /// Number of foreground cells.
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// True when no cell is foreground.
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    /// Check the top-left cell.
    #[inline]
    pub fn top_left_is_foreground(&self) -> bool {
        self.data[0] != 0
    }

    /// Swap foreground and background.
    pub fn invert(&self) -> Mask {
        let data = self.data.iter().map(|&v| 1 - v).collect();
        Mask::from_cells_unchecked(self.width, self.height, data)
    }

    /// Return the mask with its top-left cell as background, inverting if needed.
    pub fn with_background_zero(self) -> Mask {
        if self.top_left_is_foreground() {
            self.invert()
        } else {
            self
        }
    }

    /// Foreground cells as `(x, y)`, in column-major order.
    pub fn foreground_column_major(&self) -> Vec<(u32, u32)> {
        let mut coords = Vec::new();
        for x in 0..self.width {
            for y in 0..self.height {
                if self.data[self.index(x, y)] != 0 {
                    coords.push((x, y));
                }
            }
        }
        coords
    }

    /// Check whether the `len`-cell horizontal run starting at `(x, y)` is all foreground.
    ///
    /// Runs that leave the grid are not foreground.
    pub fn row_run_is_foreground(&self, x: u32, y: u32, len: u32) -> bool {
        if y >= self.height || x + len > self.width {
            return false;
        }
        let start = self.index(x, y);
        self.data[start..start + len as usize].iter().all(|&v| v != 0)
    }

    /// Check whether the `len`-cell vertical run starting at `(x, y)` is all foreground.
    pub fn column_run_is_foreground(&self, x: u32, y: u32, len: u32) -> bool {
        if x >= self.width || y + len > self.height {
            return false;
        }
        (y..y + len).all(|row| self.data[self.index(x, row)] != 0)
    }

    /// Check whether every cell of `square` is foreground.
    ///
    /// A zero-size square is trivially foreground.
    pub fn is_square_foreground(&self, square: &SquareRegion) -> bool {
        (square.y..square.bottom()).all(|y| self.row_run_is_foreground(square.x, y, square.size))
    }

    /// Clear every cell of `square`, clipping at the grid edge.
    pub fn clear_square(&mut self, square: &SquareRegion) {
        let right = square.right().min(self.width);
        let bottom = square.bottom().min(self.height);
        for y in square.y..bottom {
            let start = (y * self.width) as usize;
            if square.x < right {
                self.data[start + square.x as usize..start + right as usize].fill(0);
            }
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_rejects_non_binary() {
        let err = Mask::from_vec(2, 2, vec![0, 1, 2, 0]).unwrap_err();
        assert!(matches!(err, Error::InvalidMaskValue { index: 2, value: 2 }));
    }

    #[test]
    fn test_column_major_order() {
        let mask = Mask::from_rows(&[[1u8, 1, 0], [1, 0, 1]]).unwrap();
        assert_eq!(
            mask.foreground_column_major(),
            vec![(0, 0), (0, 1), (1, 0), (2, 1)]
        );
    }

    #[test]
    fn test_invert_and_background_zero() {
        let mask = Mask::from_rows(&[[1u8, 0], [1, 1]]).unwrap();
        let inv = mask.invert();
        assert_eq!(inv.as_slice(), &[0, 1, 0, 0]);
        assert_eq!(mask.clone().with_background_zero(), inv);
        assert_eq!(inv.clone().with_background_zero(), inv);
    }

    #[test]
    fn test_square_checks() {
        let mask = Mask::from_rows(&[[1u8, 1, 1], [1, 1, 0], [1, 1, 1]]).unwrap();
        assert!(mask.is_square_foreground(&SquareRegion::new(0, 0, 2)));
        assert!(!mask.is_square_foreground(&SquareRegion::new(0, 0, 3)));
        assert!(mask.is_square_foreground(&SquareRegion::new(2, 2, 0)));
        assert!(!mask.is_square_foreground(&SquareRegion::new(2, 2, 2)));
        assert!(mask.column_run_is_foreground(0, 0, 3));
        assert!(!mask.column_run_is_foreground(2, 0, 2));
    }

    #[test]
    fn test_clear_square_clips() {
        let mut mask = Mask::from_fn(3, 3, |_, _| true).unwrap();
        mask.clear_square(&SquareRegion::new(1, 1, 5));
        assert_eq!(mask.as_slice(), &[1, 1, 1, 1, 0, 0, 1, 0, 0]);
        assert_eq!(mask.count_foreground(), 5);
        assert!(!mask.is_blank());
    }
}
