//! Element, row, column and block access for [`Matrix`].
//!
//! Readers copy into a caller-provided destination whose shape selects the
//! extent; writers copy from a source the same way. Index errors are
//! reported as [`CoreError::BadIndex`], destination size errors as
//! [`CoreError::DimensionMismatch`]. Nothing is written on error.

use crate::error::{CoreError, Result};
use crate::vector::Vector;

use super::Matrix;

impl Matrix {
    /// Read element `(r, c)`.
    pub fn value(&self, r: usize, c: usize) -> Result<f32> {
        self.check_index(r, c)?;
        Ok(self.at(r, c))
    }

    /// Overwrite element `(r, c)`.
    pub fn write_value(&mut self, r: usize, c: usize, value: f32) -> Result<()> {
        self.check_index(r, c)?;
        self.data[r * self.cols + c] = value;
        Ok(())
    }

    /// Copy row `r` into `y`, which must have `cols` elements.
    pub fn row(&self, r: usize, y: &mut Vector) -> Result<()> {
        self.check_index(r, 0)?;
        if y.len() != self.cols {
            return Err(CoreError::length_mismatch(self.cols, y.len()));
        }
        y.as_mut_slice()
            .copy_from_slice(&self.data[r * self.cols..(r + 1) * self.cols]);
        Ok(())
    }

    /// Overwrite row `r` with `v`, which must have `cols` elements.
    pub fn write_row(&mut self, r: usize, v: &Vector) -> Result<()> {
        self.check_index(r, 0)?;
        if v.len() != self.cols {
            return Err(CoreError::length_mismatch(self.cols, v.len()));
        }
        let cols = self.cols;
        self.data[r * cols..(r + 1) * cols].copy_from_slice(v.as_slice());
        Ok(())
    }

    /// Copy column `c` into `y`, which must have `rows` elements.
    pub fn col(&self, c: usize, y: &mut Vector) -> Result<()> {
        self.check_index(0, c)?;
        if y.len() != self.rows {
            return Err(CoreError::length_mismatch(self.rows, y.len()));
        }
        for (i, yi) in y.as_mut_slice().iter_mut().enumerate() {
            *yi = self.at(i, c);
        }
        Ok(())
    }

    /// Overwrite column `c` with `v`, which must have `rows` elements.
    pub fn write_col(&mut self, c: usize, v: &Vector) -> Result<()> {
        self.check_index(0, c)?;
        if v.len() != self.rows {
            return Err(CoreError::length_mismatch(self.rows, v.len()));
        }
        let cols = self.cols;
        for (i, &x) in v.iter().enumerate() {
            self.data[i * cols + c] = x;
        }
        Ok(())
    }

    /// Copy the block whose top-left corner is `(r, c)` and whose shape is
    /// `y.shape()` into `y`.
    pub fn submatrix(&self, r: usize, c: usize, y: &mut Matrix) -> Result<()> {
        self.check_block(r, c, y.shape())?;
        let (h, w) = y.shape();
        for i in 0..h {
            let src = (r + i) * self.cols + c;
            y.data[i * w..(i + 1) * w].copy_from_slice(&self.data[src..src + w]);
        }
        Ok(())
    }

    /// Overwrite the block at `(r, c)` with `src`.
    pub fn write_submatrix(&mut self, r: usize, c: usize, src: &Matrix) -> Result<()> {
        self.check_block(r, c, src.shape())?;
        let (h, w) = src.shape();
        for i in 0..h {
            let dst = (r + i) * self.cols + c;
            self.data[dst..dst + w].copy_from_slice(&src.data[i * w..(i + 1) * w]);
        }
        Ok(())
    }

    /// Deep-copy `src` into this matrix's existing buffer.
    pub fn copy_from(&mut self, src: &Matrix) -> Result<()> {
        self.check_same_shape(src)?;
        self.data.copy_from_slice(&src.data);
        Ok(())
    }

    fn check_index(&self, r: usize, c: usize) -> Result<()> {
        if r >= self.rows || c >= self.cols {
            return Err(CoreError::BadIndex {
                index: vec![r, c],
                shape: vec![self.rows, self.cols],
            });
        }
        Ok(())
    }

    fn check_block(&self, r: usize, c: usize, (h, w): (usize, usize)) -> Result<()> {
        let fits = r.checked_add(h).is_some_and(|end| end <= self.rows)
            && c.checked_add(w).is_some_and(|end| end <= self.cols);
        if !fits {
            return Err(CoreError::BadIndex {
                index: vec![r, c],
                shape: vec![self.rows, self.cols],
            });
        }
        Ok(())
    }
}
