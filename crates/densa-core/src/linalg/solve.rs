//! Triangular and diagonal solves.
//!
//! Each solve has an out-of-place form that copies the right-hand side into
//! the destination and an `_in_place` form that overwrites the right-hand
//! side with the solution. Substitution runs over the destination only, so
//! neither form needs a staging buffer. The coefficient matrix is trusted
//! to have the declared structure and a non-zero diagonal.

use crate::blas::{self, Uplo};
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;
use crate::property::MatrixProperty;
use crate::vector::Vector;

// ======================================================================
// Triangular
// ======================================================================

/// Solve `A * Y = B` for triangular `A`.
///
/// `property` must be `TriLower` (forward substitution) or `TriUpper`
/// (back substitution); only that triangle of `A` is read.
///
/// ```
/// # use densa_core::{Matrix, MatrixProperty, linalg};
/// let a = Matrix::from_rows(&[&[2.0, 0.0], &[1.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[&[4.0], &[6.0]]).unwrap();
/// let mut y = Matrix::zeros(2, 1);
/// linalg::trisolve(&a, MatrixProperty::TriLower, &b, &mut y).unwrap();
/// assert_eq!(y.as_slice(), &[2.0, 1.0]);
/// ```
pub fn trisolve(a: &Matrix, property: MatrixProperty, b: &Matrix, y: &mut Matrix) -> Result<()> {
    let uplo = check_triangular(a, property, "trisolve")?;
    check_rhs_rows(a, b.rows())?;
    y.copy_from(b)?;
    strsm_into(a, uplo, y);
    Ok(())
}

/// Solve `A * X = B` for triangular `A`, overwriting `B` with `X`.
pub fn trisolve_in_place(a: &Matrix, property: MatrixProperty, b: &mut Matrix) -> Result<()> {
    let uplo = check_triangular(a, property, "trisolve")?;
    check_rhs_rows(a, b.rows())?;
    strsm_into(a, uplo, b);
    Ok(())
}

/// Solve `A * y = b` for triangular `A` and a single right-hand side.
pub fn vtrisolve(a: &Matrix, property: MatrixProperty, b: &Vector, y: &mut Vector) -> Result<()> {
    let uplo = check_triangular(a, property, "vtrisolve")?;
    check_rhs_rows(a, b.len())?;
    y.copy_from(b)?;
    blas::strsv(uplo, a.rows(), a.as_slice(), a.cols(), y.as_mut_slice());
    Ok(())
}

/// Solve `A * x = b` for triangular `A`, overwriting `b` with `x`.
pub fn vtrisolve_in_place(a: &Matrix, property: MatrixProperty, b: &mut Vector) -> Result<()> {
    let uplo = check_triangular(a, property, "vtrisolve")?;
    check_rhs_rows(a, b.len())?;
    blas::strsv(uplo, a.rows(), a.as_slice(), a.cols(), b.as_mut_slice());
    Ok(())
}

// ======================================================================
// Diagonal
// ======================================================================

/// Solve `A * Y = B` for diagonal `A`: row `i` of `Y` is row `i` of `B`
/// divided by `A[i][i]`. Off-diagonal entries of `A` are ignored.
pub fn diagsolve(a: &Matrix, b: &Matrix, y: &mut Matrix) -> Result<()> {
    a.check_square()?;
    check_rhs_rows(a, b.rows())?;
    y.copy_from(b)?;
    scale_rows(a, y);
    Ok(())
}

/// Solve `A * X = B` for diagonal `A`, overwriting `B` with `X`.
pub fn diagsolve_in_place(a: &Matrix, b: &mut Matrix) -> Result<()> {
    a.check_square()?;
    check_rhs_rows(a, b.rows())?;
    scale_rows(a, b);
    Ok(())
}

/// Solve `A * y = b` for diagonal `A`.
pub fn vdiagsolve(a: &Matrix, b: &Vector, y: &mut Vector) -> Result<()> {
    a.check_square()?;
    check_rhs_rows(a, b.len())?;
    y.copy_from(b)?;
    scale_elements(a, y);
    Ok(())
}

/// Solve `A * x = b` for diagonal `A`, overwriting `b` with `x`.
pub fn vdiagsolve_in_place(a: &Matrix, b: &mut Vector) -> Result<()> {
    a.check_square()?;
    check_rhs_rows(a, b.len())?;
    scale_elements(a, b);
    Ok(())
}

// ======================================================================
// Helpers
// ======================================================================

fn check_triangular(a: &Matrix, property: MatrixProperty, operation: &'static str) -> Result<Uplo> {
    let uplo = property
        .uplo()
        .ok_or(CoreError::BadProperty { property, operation })?;
    a.check_square()?;
    Ok(uplo)
}

fn check_rhs_rows(a: &Matrix, rows: usize) -> Result<()> {
    if rows != a.rows() {
        return Err(CoreError::length_mismatch(a.rows(), rows));
    }
    Ok(())
}

fn strsm_into(a: &Matrix, uplo: Uplo, x: &mut Matrix) {
    let (m, n) = x.shape();
    blas::strsm(uplo, m, n, 1.0, a.as_slice(), a.cols(), x.as_mut_slice(), n);
}

fn scale_rows(a: &Matrix, x: &mut Matrix) {
    let cols = x.cols();
    for (i, row) in x.as_mut_slice().chunks_exact_mut(cols).enumerate() {
        let d = a.at(i, i);
        for v in row {
            *v /= d;
        }
    }
}

fn scale_elements(a: &Matrix, x: &mut Vector) {
    for (i, v) in x.as_mut_slice().iter_mut().enumerate() {
        *v /= a.at(i, i);
    }
}
