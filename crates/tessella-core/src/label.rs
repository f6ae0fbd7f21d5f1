//! LabelMap - Per-pixel cluster labels
//!
//! Produced by an external clustering routine over a raster; each cell
//! holds the integer label of the cluster it was assigned to.

use crate::error::{Error, Result};
use crate::mask::Mask;
use crate::raster::{cell_count, check_dimensions};

/// Per-pixel cluster labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
}

impl LabelMap {
    /// Wrap a row-major label buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `labels.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, labels: Vec<u32>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = cell_count(width, height);
        if labels.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: labels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            labels,
        })
    }

    /// Build a label map from equal-length rows.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        check_dimensions(width, height)?;
        let mut labels = Vec::with_capacity(cell_count(width, height));
        for row in rows {
            let row = row.as_ref();
            if row.len() as u32 != width {
                return Err(Error::ShapeMismatch {
                    expected: (width, height),
                    actual: (row.len() as u32, height),
                });
            }
            labels.extend_from_slice(row);
        }
        Ok(Self {
            width,
            height,
            labels,
        })
    }

    /// Get the width (columns).
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height (rows).
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Label at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.labels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Row-major view of the labels.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.labels
    }

    /// Largest label present.
    pub fn max_label(&self) -> u32 {
        self.labels.iter().copied().max().unwrap_or(0)
    }

    /// Mask of the cells carrying `label`.
    pub fn mask_for(&self, label: u32) -> Mask {
        let cells = self.labels.iter().map(|&l| u8::from(l == label)).collect();
        Mask::from_cells_unchecked(self.width, self.height, cells)
    }
}
