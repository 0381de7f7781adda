//! Dense row-major single-precision matrix.
//!
//! A [`Matrix`] exclusively owns a `rows * cols` buffer in which element
//! `(i, j)` lives at `i * cols + j`. Both dimensions are positive. Cloning
//! performs a deep copy; dropping releases the buffer.

mod create;
mod display;
mod indexing;
mod ops;
mod reshape;
mod structure;

use crate::error::{CoreError, Result};

/// A dense `rows x cols` matrix of `f32` stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Create a matrix that takes ownership of a row-major buffer.
    ///
    /// Returns [`CoreError::Undersized`] for a zero dimension and
    /// [`CoreError::DimensionMismatch`] if `data.len() != rows * cols`.
    ///
    /// ```
    /// # use densa_core::Matrix;
    /// let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m.value(1, 0).unwrap(), 4.0);
    /// ```
    pub fn from_vec(data: Vec<f32>, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(CoreError::Undersized {
                needed: 1,
                got: rows.min(cols),
            });
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(CoreError::MemError { requested: usize::MAX })?;
        if data.len() != expected {
            return Err(CoreError::length_mismatch(expected, data.len()));
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix from a slice of equally long rows.
    pub fn from_rows(rows: &[&[f32]]) -> Result<Self> {
        let ncols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(rows.len() * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(CoreError::length_mismatch(ncols, row.len()));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(data, rows.len(), ncols)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// The row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the matrix and return its row-major buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    // ------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------

    /// Both dimensions must agree.
    pub(crate) fn check_same_shape(&self, other: &Matrix) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(CoreError::shape_mismatch(self.shape(), other.shape()));
        }
        Ok(())
    }

    pub(crate) fn check_square(&self) -> Result<()> {
        if self.rows != self.cols {
            return Err(CoreError::NonSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Swap in a buffer computed elsewhere, keeping the shape.
    pub(crate) fn replace_data(&mut self, rows: usize, cols: usize, data: Vec<f32>) {
        debug_assert_eq!(data.len(), rows * cols);
        self.rows = rows;
        self.cols = cols;
        self.data = data;
    }

    #[inline]
    pub(crate) fn at(&self, i: usize, j: usize) -> f32 {
        self.data[i * self.cols + j]
    }
}

/// First row, first column and length of the `k`-th diagonal of a
/// `rows x cols` matrix. `k > 0` is above the main diagonal. The length is
/// zero when the diagonal lies outside the matrix.
pub(crate) fn diagonal_span(rows: usize, cols: usize, k: isize) -> (usize, usize, usize) {
    let off = k.unsigned_abs();
    if k >= 0 {
        (0, off, rows.min(cols.saturating_sub(off)))
    } else {
        (off, 0, rows.saturating_sub(off).min(cols))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::Status;

    #[test]
    fn test_from_vec() {
        let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.numel(), 6);
        assert_eq!(m.at(1, 2), 6.0);
    }

    #[test]
    fn test_from_vec_errors() {
        assert_eq!(
            Matrix::from_vec(vec![1.0, 2.0, 3.0], 2, 2)
                .unwrap_err()
                .status(),
            Status::DimensionMismatch
        );
        assert_eq!(
            Matrix::from_vec(vec![], 0, 2).unwrap_err().status(),
            Status::Undersized
        );
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        assert!(Matrix::from_rows(&[&[1.0, 2.0], &[3.0]]).is_err());
        assert!(Matrix::from_rows(&[]).is_err());
    }

    #[test]
    fn test_check_same_shape_requires_both_dims() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(3, 2);
        let c = Matrix::zeros(2, 2);
        assert!(a.check_same_shape(&b).is_err());
        assert!(a.check_same_shape(&c).is_err());
        assert!(a.check_same_shape(&a.clone()).is_ok());
    }

    #[test]
    fn test_diagonal_span() {
        assert_eq!(diagonal_span(3, 3, 0), (0, 0, 3));
        assert_eq!(diagonal_span(3, 3, 1), (0, 1, 2));
        assert_eq!(diagonal_span(3, 3, -2), (2, 0, 1));
        assert_eq!(diagonal_span(2, 4, 1), (0, 1, 2));
        assert_eq!(diagonal_span(3, 3, 3).2, 0);
        assert_eq!(diagonal_span(3, 3, -5).2, 0);
    }

    #[test]
    fn test_check_square() {
        assert!(Matrix::zeros(3, 3).check_square().is_ok());
        assert_eq!(
            Matrix::zeros(2, 3).check_square().unwrap_err(),
            CoreError::NonSquare { rows: 2, cols: 3 }
        );
    }
}
