//! Transpose, diagonal and triangle extraction.

use crate::error::{CoreError, Result};
use crate::property::MatrixProperty;
use crate::vector::Vector;

use super::{Matrix, diagonal_span};

impl Matrix {
    /// Return the transpose as a new `cols x rows` matrix.
    ///
    /// ```
    /// # use densa_core::Matrix;
    /// let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    /// ```
    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = self.shape();
        let mut data = vec![0.0; rows * cols];
        for i in 0..rows {
            for j in 0..cols {
                data[j * rows + i] = self.data[i * cols + j];
            }
        }
        Matrix {
            rows: cols,
            cols: rows,
            data,
        }
    }

    /// Copy the `k`-th diagonal into a new vector. `k > 0` selects a
    /// superdiagonal, `k < 0` a subdiagonal.
    ///
    /// Returns [`CoreError::BadIndex`] when the diagonal lies outside the
    /// matrix.
    pub fn diagonal(&self, k: isize) -> Result<Vector> {
        let (r0, c0, len) = diagonal_span(self.rows, self.cols, k);
        if len == 0 {
            return Err(self.bad_diagonal(k));
        }
        let data = (0..len).map(|p| self.at(r0 + p, c0 + p)).collect();
        Vector::from_vec(data)
    }

    /// Return a copy that keeps one triangle and zeroes the rest.
    ///
    /// `TriLower` keeps entries with `j <= i + k`, `TriUpper` keeps entries
    /// with `j >= i + k`. `triangle(TriLower, 0)` is the lower triangle with
    /// its diagonal, `triangle(TriUpper, 1)` the strict upper triangle.
    /// Any other property is rejected with [`CoreError::BadProperty`].
    pub fn triangle(&self, property: MatrixProperty, k: isize) -> Result<Matrix> {
        let keep: fn(isize, isize, isize) -> bool = match property {
            MatrixProperty::TriLower => |i, j, k| j <= i + k,
            MatrixProperty::TriUpper => |i, j, k| j >= i + k,
            other => {
                return Err(CoreError::BadProperty {
                    property: other,
                    operation: "triangle",
                });
            }
        };
        let mut out = self.clone();
        let cols = self.cols;
        for (idx, v) in out.data.iter_mut().enumerate() {
            let (i, j) = ((idx / cols) as isize, (idx % cols) as isize);
            if !keep(i, j, k) {
                *v = 0.0;
            }
        }
        Ok(out)
    }

    /// Subtract `d` from the `k`-th diagonal in place.
    pub fn sub_diagonal_assign(&mut self, d: &Vector, k: isize) -> Result<()> {
        let (r0, c0, len) = diagonal_span(self.rows, self.cols, k);
        if len == 0 {
            return Err(self.bad_diagonal(k));
        }
        if d.len() != len {
            return Err(CoreError::length_mismatch(len, d.len()));
        }
        let cols = self.cols;
        for (p, &x) in d.iter().enumerate() {
            self.data[(r0 + p) * cols + c0 + p] -= x;
        }
        Ok(())
    }

    fn bad_diagonal(&self, k: isize) -> CoreError {
        let (r0, c0, _) = diagonal_span(self.rows, self.cols, k);
        CoreError::BadIndex {
            index: vec![r0, c0],
            shape: vec![self.rows, self.cols],
        }
    }
}
