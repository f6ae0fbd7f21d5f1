//! Raster - Grayscale intensity grid
//!
//! A `Raster` is a `width` x `height` grid of non-negative integer
//! intensities stored row-major in a single `Vec<u32>`. Rasters are
//! produced by preprocessing collaborators and treated as immutable
//! afterwards; every transform here returns a new raster or mask.
//!
//! # Coordinates
//!
//! Cells are addressed as `(x, y)` = (column, row), with `(0, 0)` at the
//! top-left corner.

use crate::error::{Error, Result};
use crate::geometry::Bounds;
use crate::mask::Mask;

/// Grayscale intensity grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl Raster {
    /// Create a new raster with every cell set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessella_core::Raster;
    ///
    /// let raster = Raster::new(128, 96).unwrap();
    /// assert_eq!(raster.width(), 128);
    /// assert_eq!(raster.height(), 96);
    /// assert_eq!(raster.get(3, 4), Some(0));
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; cell_count(width, height)],
        })
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::BufferLength`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = cell_count(width, height);
        if data.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a raster from a list of equal-length rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the rows are ragged.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
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
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a raster by evaluating `f(x, y)` for every cell.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> u32,
    {
        check_dimensions(width, height)?;
        let mut data = Vec::with_capacity(cell_count(width, height));
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the raster width (columns).
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the raster height (rows).
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the intensity at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.data[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set the intensity at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] outside the grid.
    pub fn set(&mut self, x: u32, y: u32, value: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = value;
        Ok(())
    }

    /// Row-major view of all intensities.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    /// Consume the raster, returning the row-major buffer.
    pub fn into_vec(self) -> Vec<u32> {
        self.data
    }

    /// Slice of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u32] {
        let start = (y * self.width) as usize;
        &self.data[start..start + self.width as usize]
    }

    /// The main diagonal: cells `(i, i)` for `i < min(width, height)`.
    pub fn diagonal(&self) -> Vec<u32> {
        let n = self.width.min(self.height);
        (0..n).map(|i| self.data[self.index(i, i)]).collect()
    }

    /// Minimum and maximum intensity over the whole raster.
    pub fn min_max(&self) -> (u32, u32) {
        let mut min = u32::MAX;
        let mut max = 0;
        for &v in &self.data {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }

    /// Iterate over the intensities that are not zero, row-major.
    pub fn nonzero_values(&self) -> impl Iterator<Item = u32> + '_ {
        self.data.iter().copied().filter(|&v| v != 0)
    }

    /// Crop to columns `min_x..max_x` and rows `min_y..max_y`.
    ///
    /// The maximum column and row of `bounds` are *excluded*, so a crop
    /// from inclusive foreground bounds drops the last foreground column
    /// and row. Downstream boxes are translated by `(min_x, min_y)` only,
    /// so this keeps them aligned with the source raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] when the crop would be empty
    /// (a single-column or single-row bounds) and [`Error::OutOfBounds`]
    /// when the bounds exceed the raster.
    pub fn crop(&self, bounds: &Bounds) -> Result<Raster> {
        if bounds.max_x >= self.width || bounds.max_y >= self.height {
            return Err(Error::OutOfBounds {
                x: bounds.max_x,
                y: bounds.max_y,
                width: self.width,
                height: self.height,
            });
        }
        let w = bounds.max_x - bounds.min_x;
        let h = bounds.max_y - bounds.min_y;
        check_dimensions(w, h)?;

        let mut data = Vec::with_capacity(cell_count(w, h));
        for y in bounds.min_y..bounds.max_y {
            let row = self.row(y);
            data.extend_from_slice(&row[bounds.min_x as usize..bounds.max_x as usize]);
        }
        Ok(Raster {
            width: w,
            height: h,
            data,
        })
    }

    /// Foreground mask of the cells strictly above `cutoff`.
    pub fn threshold_above(&self, cutoff: u32) -> Mask {
        let cells = self.data.iter().map(|&v| u8::from(v > cutoff)).collect();
        Mask::from_cells_unchecked(self.width, self.height, cells)
    }

    /// Keep `value + offset` where `mask` is foreground and 0 elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the mask and raster differ in size.
    pub fn fill_masked(&self, mask: &Mask, offset: u32) -> Result<Raster> {
        if mask.dimensions() != self.dimensions() {
            return Err(Error::ShapeMismatch {
                expected: self.dimensions(),
                actual: mask.dimensions(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(mask.as_slice())
            .map(|(&v, &m)| if m != 0 { v.saturating_add(offset) } else { 0 })
            .collect();
        Ok(Raster {
            width: self.width,
            height: self.height,
            data,
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }
}

pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(())
}

#[inline]
pub(crate) fn cell_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}
