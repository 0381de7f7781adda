//! Matrix creation and fill routines.

use crate::error::{CoreError, Result};
use crate::storage::try_alloc;
use crate::vector::Vector;

use super::{Matrix, diagonal_span};

impl Matrix {
    /// Create a zero-filled `rows x cols` matrix.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be positive");
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create a zero-filled matrix, reporting allocation failure.
    pub fn try_zeros(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(CoreError::Undersized {
                needed: 1,
                got: rows.min(cols),
            });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(CoreError::MemError { requested: usize::MAX })?;
        Ok(Self {
            rows,
            cols,
            data: try_alloc(len)?,
        })
    }

    /// Create a matrix filled with a constant value.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn full(rows: usize, cols: usize, value: f32) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be positive");
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    ///
    /// ```
    /// # use densa_core::Matrix;
    /// let i = Matrix::eye(2);
    /// assert_eq!(i.as_slice(), &[1.0, 0.0, 0.0, 1.0]);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Create the square matrix whose `k`-th diagonal is `v` and whose other
    /// entries are zero. The order is `v.len() + |k|`.
    pub fn from_diagonal(v: &Vector, k: isize) -> Self {
        let n = v.len() + k.unsigned_abs();
        let mut m = Self::zeros(n, n);
        let (r0, c0, _) = diagonal_span(n, n, k);
        for (p, &x) in v.iter().enumerate() {
            m.data[(r0 + p) * n + c0 + p] = x;
        }
        m
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Set every element to zero.
    pub fn zero(&mut self) {
        self.fill(0.0);
    }

    /// Overwrite with the identity. The matrix must be square.
    pub fn set_identity(&mut self) -> Result<()> {
        self.check_square()?;
        self.zero();
        let n = self.rows;
        for i in 0..n {
            self.data[i * n + i] = 1.0;
        }
        Ok(())
    }

    /// Zero the matrix, then write `v` along the `k`-th diagonal.
    ///
    /// The matrix must be square and `v.len()` must equal `n - |k|`.
    pub fn set_diagonal(&mut self, v: &Vector, k: isize) -> Result<()> {
        self.check_square()?;
        let (r0, c0, len) = diagonal_span(self.rows, self.cols, k);
        if v.len() != len {
            return Err(CoreError::length_mismatch(len, v.len()));
        }
        self.zero();
        let n = self.cols;
        for (p, &x) in v.iter().enumerate() {
            self.data[(r0 + p) * n + c0 + p] = x;
        }
        Ok(())
    }
}
