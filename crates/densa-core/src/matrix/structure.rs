//! Structural detectors.
//!
//! All tests are exact: an entry is zero only if it compares equal to
//! `0.0`, and symmetry requires bitwise-equal mirrored values (up to the
//! sign of zero). Every scan stops at the first counterexample.

use crate::property::MatrixProperty;

use super::Matrix;

impl Matrix {
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Square with `A[i][j] == A[j][i]` for all `i < j`.
    pub fn is_symmetric(&self) -> bool {
        self.is_square()
            && (0..self.rows).all(|i| (i + 1..self.cols).all(|j| self.at(i, j) == self.at(j, i)))
    }

    /// Square with every off-diagonal entry equal to zero.
    pub fn is_diagonal(&self) -> bool {
        self.is_square() && self.zero_outside(|i, j| i == j)
    }

    /// Square with every entry strictly above the diagonal equal to zero.
    pub fn is_tri_lower(&self) -> bool {
        self.is_square() && self.zero_outside(|i, j| j <= i)
    }

    /// Square with every entry strictly below the diagonal equal to zero.
    pub fn is_tri_upper(&self) -> bool {
        self.is_square() && self.zero_outside(|i, j| j >= i)
    }

    /// Square with every entry outside the three central diagonals equal to
    /// zero.
    pub fn is_tridiagonal(&self) -> bool {
        self.is_square() && self.zero_outside(|i, j| i.abs_diff(j) <= 1)
    }

    /// Square with `|A[i][i]| >= sum_{j != i} |A[i][j]|` on every row.
    pub fn is_diagonally_dominant(&self) -> bool {
        self.is_square()
            && (0..self.rows).all(|i| {
                let row = &self.data[i * self.cols..(i + 1) * self.cols];
                let off: f32 = row
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, v)| v.abs())
                    .sum();
                row[i].abs() >= off
            })
    }

    /// Check whether a property hint actually holds for this matrix.
    ///
    /// Returns `None` for hints that cannot be decided by a structural scan
    /// (`PositiveDefinite`). `Hermitian` is checked as `Symmetric`.
    ///
    /// ```
    /// # use densa_core::{Matrix, MatrixProperty};
    /// let m = Matrix::eye(3);
    /// assert_eq!(m.verify_property(MatrixProperty::TriUpper), Some(true));
    /// assert_eq!(m.verify_property(MatrixProperty::PositiveDefinite), None);
    /// ```
    pub fn verify_property(&self, property: MatrixProperty) -> Option<bool> {
        match property {
            MatrixProperty::General => Some(true),
            MatrixProperty::Square => Some(self.is_square()),
            MatrixProperty::Symmetric | MatrixProperty::Hermitian => Some(self.is_symmetric()),
            MatrixProperty::TriLower => Some(self.is_tri_lower()),
            MatrixProperty::TriUpper => Some(self.is_tri_upper()),
            MatrixProperty::Tridiagonal => Some(self.is_tridiagonal()),
            MatrixProperty::DiagonallyDominant => Some(self.is_diagonally_dominant()),
            MatrixProperty::PositiveDefinite => None,
        }
    }

    /// Every entry `(i, j)` for which `keep(i, j)` is false equals zero.
    fn zero_outside(&self, keep: impl Fn(usize, usize) -> bool) -> bool {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .all(|(idx, &v)| keep(idx / cols, idx % cols) || v == 0.0)
    }
}
