//! Matrix products with aliasing resolution and property-hinted dispatch.
//!
//! The kernels in [`blas`](crate::blas) cannot write into a buffer they are
//! reading. Out-of-place products (`multiply`, `multiply_ext`, `vmult`)
//! write straight into a distinct destination, which the borrow checker
//! guarantees. The aliased forms (`*_into_left`, `*_into_right`,
//! `multiply_square`, `vmult_in_place`) compute into a staging buffer and
//! swap it in once the product is complete, except where a triangular
//! kernel already updates the overwritten operand in place.
//!
//! Staging buffers are allocated fallibly. On allocation failure the
//! operands are left untouched and [`CoreError::MemError`] is returned.

use crate::blas::{self, Side, Uplo};
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;
use crate::property::MatrixProperty;
use crate::storage::try_alloc;
use crate::vector::Vector;

// ======================================================================
// General products
// ======================================================================

/// `Y = A * B`.
///
/// Requires `A.cols == B.rows` and `Y` of shape `(A.rows, B.cols)`.
///
/// ```
/// # use densa_core::{Matrix, linalg};
/// let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[&[5.0, 6.0], &[7.0, 8.0]]).unwrap();
/// let mut y = Matrix::zeros(2, 2);
/// linalg::multiply(&a, &b, &mut y).unwrap();
/// assert_eq!(y.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix, y: &mut Matrix) -> Result<()> {
    check_product(a, b)?;
    check_output(y, (a.rows(), b.cols()))?;
    gemm_into(a, b, y.as_mut_slice());
    Ok(())
}

/// `A = A * B`, staged. `B` must be square of order `A.cols`.
pub fn multiply_into_left(a: &mut Matrix, b: &Matrix) -> Result<()> {
    check_product(a, b)?;
    check_output(a, (a.rows(), b.cols()))?;
    let staged = stage(a.shape(), "left operand", |out| gemm_into(a, b, out))?;
    a.replace_data(a.rows(), a.cols(), staged);
    Ok(())
}

/// `B = A * B`, staged. `A` must be square of order `B.rows`.
pub fn multiply_into_right(a: &Matrix, b: &mut Matrix) -> Result<()> {
    check_product(a, b)?;
    check_output(b, (a.rows(), b.cols()))?;
    let staged = stage(b.shape(), "right operand", |out| gemm_into(a, b, out))?;
    b.replace_data(b.rows(), b.cols(), staged);
    Ok(())
}

/// `A = A * A`, staged. `A` must be square.
pub fn multiply_square(a: &mut Matrix) -> Result<()> {
    a.check_square()?;
    let staged = stage(a.shape(), "both operands", |out| gemm_into(a, a, out))?;
    a.replace_data(a.rows(), a.cols(), staged);
    Ok(())
}

/// `y = A * x`.
pub fn vmult(a: &Matrix, x: &Vector, y: &mut Vector) -> Result<()> {
    if x.len() != a.cols() {
        return Err(CoreError::length_mismatch(a.cols(), x.len()));
    }
    if y.len() != a.rows() {
        return Err(CoreError::length_mismatch(a.rows(), y.len()));
    }
    gemv_into(a, x, y.as_mut_slice());
    Ok(())
}

/// `x = A * x`, staged. `A` must be square of order `x.len()`.
pub fn vmult_in_place(a: &Matrix, x: &mut Vector) -> Result<()> {
    a.check_square()?;
    if x.len() != a.cols() {
        return Err(CoreError::length_mismatch(a.cols(), x.len()));
    }
    let staged = stage((x.len(), 1), "right operand", |out| gemv_into(a, x, out))?;
    x.replace_data(staged);
    Ok(())
}

// ======================================================================
// Property-hinted products
// ======================================================================

/// Kernel selected for a hinted product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kernel {
    /// `A` triangular: `TRMM` from the left over a copy of `B`.
    TriLeft(Uplo),
    /// `B` triangular: `TRMM` from the right over a copy of `A`.
    TriRight(Uplo),
    /// `A` symmetric, read from its upper triangle.
    SymLeft,
    /// `B` symmetric, read from its upper triangle.
    SymRight,
    General,
}

/// Pick the kernel for `A * B` from the two hints, in priority order:
/// triangular `A`, triangular `B`, symmetric `A`, symmetric `B`, general.
/// Every operand hinted triangular or symmetric must be square, whether or
/// not its hint selects the kernel.
fn select_kernel(
    a: &Matrix,
    prop_a: MatrixProperty,
    b: &Matrix,
    prop_b: MatrixProperty,
) -> Result<Kernel> {
    if is_structured(prop_a) {
        a.check_square()?;
    }
    if is_structured(prop_b) {
        b.check_square()?;
    }
    let kernel = if let Some(uplo) = prop_a.uplo() {
        Kernel::TriLeft(uplo)
    } else if let Some(uplo) = prop_b.uplo() {
        Kernel::TriRight(uplo)
    } else if prop_a.is_symmetric() {
        Kernel::SymLeft
    } else if prop_b.is_symmetric() {
        Kernel::SymRight
    } else {
        Kernel::General
    };
    Ok(kernel)
}

fn is_structured(prop: MatrixProperty) -> bool {
    prop.is_triangular() || prop.is_symmetric()
}

/// Run `kernel` for `A * B` into `out`, a distinct `A.rows x B.cols` buffer.
fn run_kernel(kernel: Kernel, a: &Matrix, b: &Matrix, out: &mut [f32]) {
    let (m, n) = (a.rows(), b.cols());
    match kernel {
        Kernel::TriLeft(uplo) => {
            out.copy_from_slice(b.as_slice());
            blas::strmm(Side::Left, uplo, m, n, 1.0, a.as_slice(), a.cols(), out, n);
        }
        Kernel::TriRight(uplo) => {
            out.copy_from_slice(a.as_slice());
            blas::strmm(Side::Right, uplo, m, n, 1.0, b.as_slice(), b.cols(), out, n);
        }
        Kernel::SymLeft => blas::ssymm(
            Side::Left,
            Uplo::Upper,
            m,
            n,
            1.0,
            a.as_slice(),
            a.cols(),
            b.as_slice(),
            b.cols(),
            0.0,
            out,
            n,
        ),
        Kernel::SymRight => blas::ssymm(
            Side::Right,
            Uplo::Upper,
            m,
            n,
            1.0,
            b.as_slice(),
            b.cols(),
            a.as_slice(),
            a.cols(),
            0.0,
            out,
            n,
        ),
        Kernel::General => gemm_into(a, b, out),
    }
}

/// `Y = A * B` using the kernel implied by the property hints.
///
/// A triangular hint on `A` takes precedence, then a triangular hint on `B`,
/// then a symmetric (or Hermitian) hint on `A`, then on `B`. Symmetric
/// operands are read from their upper triangle only; triangular operands
/// from the hinted triangle only. Hints are trusted, not verified.
///
/// Returns [`CoreError::NonSquare`] if an operand hinted triangular or
/// symmetric is not square.
///
/// ```
/// # use densa_core::{Matrix, MatrixProperty, linalg};
/// // Only the upper triangle of a symmetric operand is read.
/// let s = Matrix::from_rows(&[&[2.0, 1.0], &[99.0, 3.0]]).unwrap();
/// let b = Matrix::eye(2);
/// let mut y = Matrix::zeros(2, 2);
/// linalg::multiply_ext(&s, MatrixProperty::Symmetric, &b, MatrixProperty::General, &mut y)
///     .unwrap();
/// assert_eq!(y.as_slice(), &[2.0, 1.0, 1.0, 3.0]);
/// ```
pub fn multiply_ext(
    a: &Matrix,
    prop_a: MatrixProperty,
    b: &Matrix,
    prop_b: MatrixProperty,
    y: &mut Matrix,
) -> Result<()> {
    check_product(a, b)?;
    let kernel = select_kernel(a, prop_a, b, prop_b)?;
    check_output(y, (a.rows(), b.cols()))?;
    run_kernel(kernel, a, b, y.as_mut_slice());
    Ok(())
}

/// `A = A * B` using the hinted kernel. `B` must be square of order
/// `A.cols`. A triangular `B` is applied to `A` in place; every other
/// kernel is staged.
pub fn multiply_ext_into_left(
    a: &mut Matrix,
    prop_a: MatrixProperty,
    b: &Matrix,
    prop_b: MatrixProperty,
) -> Result<()> {
    check_product(a, b)?;
    let kernel = select_kernel(a, prop_a, b, prop_b)?;
    check_output(a, (a.rows(), b.cols()))?;
    let (m, n) = a.shape();
    if let Kernel::TriRight(uplo) = kernel {
        blas::strmm(Side::Right, uplo, m, n, 1.0, b.as_slice(), b.cols(), a.as_mut_slice(), n);
        return Ok(());
    }
    let staged = stage((m, n), "left operand", |out| run_kernel(kernel, a, b, out))?;
    a.replace_data(m, n, staged);
    Ok(())
}

/// `B = A * B` using the hinted kernel. `A` must be square of order
/// `B.rows`. A triangular `A` is applied to `B` in place; every other
/// kernel is staged.
pub fn multiply_ext_into_right(
    a: &Matrix,
    prop_a: MatrixProperty,
    b: &mut Matrix,
    prop_b: MatrixProperty,
) -> Result<()> {
    check_product(a, b)?;
    let kernel = select_kernel(a, prop_a, b, prop_b)?;
    check_output(b, (a.rows(), b.cols()))?;
    let (m, n) = b.shape();
    if let Kernel::TriLeft(uplo) = kernel {
        blas::strmm(Side::Left, uplo, m, n, 1.0, a.as_slice(), a.cols(), b.as_mut_slice(), n);
        return Ok(());
    }
    let staged = stage((m, n), "right operand", |out| run_kernel(kernel, a, b, out))?;
    b.replace_data(m, n, staged);
    Ok(())
}

/// `A = A * A` using the kernel implied by `prop`, staged. `A` must be
/// square. The hint describes both factors, as with
/// `multiply_ext(&a, prop, &a, prop, ..)`.
///
/// ```
/// # use densa_core::{Matrix, MatrixProperty, linalg};
/// let mut a = Matrix::from_rows(&[&[1.0, 2.0], &[0.0, 3.0]]).unwrap();
/// linalg::multiply_ext_square(&mut a, MatrixProperty::TriUpper).unwrap();
/// assert_eq!(a.as_slice(), &[1.0, 8.0, 0.0, 9.0]);
/// ```
pub fn multiply_ext_square(a: &mut Matrix, prop: MatrixProperty) -> Result<()> {
    a.check_square()?;
    let kernel = select_kernel(a, prop, a, prop)?;
    let staged = stage(a.shape(), "both operands", |out| run_kernel(kernel, a, a, out))?;
    a.replace_data(a.rows(), a.cols(), staged);
    Ok(())
}

// ======================================================================
// Convenience methods
// ======================================================================

impl Matrix {
    /// Return `self * other` as a new matrix.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        check_product(self, other)?;
        let mut y = Matrix::try_zeros(self.rows(), other.cols())?;
        gemm_into(self, other, y.as_mut_slice());
        Ok(y)
    }

    /// Return `self * x` as a new vector.
    pub fn matvec(&self, x: &Vector) -> Result<Vector> {
        let mut y = Vector::try_zeros(self.rows())?;
        vmult(self, x, &mut y)?;
        Ok(y)
    }
}

// ======================================================================
// Helpers
// ======================================================================

fn check_product(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(CoreError::DimensionMismatch {
            expected: vec![a.cols()],
            got: vec![b.rows()],
        });
    }
    Ok(())
}

fn check_output(y: &Matrix, expected: (usize, usize)) -> Result<()> {
    if y.shape() != expected {
        return Err(CoreError::shape_mismatch(expected, y.shape()));
    }
    Ok(())
}

fn gemm_into(a: &Matrix, b: &Matrix, out: &mut [f32]) {
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    blas::sgemm(m, n, k, 1.0, a.as_slice(), k, b.as_slice(), n, 0.0, out, n);
}

fn gemv_into(a: &Matrix, x: &Vector, out: &mut [f32]) {
    let (m, n) = a.shape();
    blas::sgemv(m, n, 1.0, a.as_slice(), n, x.as_slice(), 0.0, out);
}

/// Allocate a `rows x cols` staging buffer and let `compute` fill it.
fn stage(
    (rows, cols): (usize, usize),
    aliased: &str,
    compute: impl FnOnce(&mut [f32]),
) -> Result<Vec<f32>> {
    log::trace!("staging {rows}x{cols} product, output aliases the {aliased}");
    let mut buf = try_alloc(rows * cols)?;
    compute(&mut buf);
    Ok(buf)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::Status;
    use proptest::prelude::*;

    fn mat_f32(rows: &[&[f32]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    fn counting(rows: usize, cols: usize) -> Matrix {
        let data: Vec<f32> = (1..=rows * cols).map(|x| x as f32).collect();
        Matrix::from_vec(data, rows, cols).unwrap()
    }

    const ALL_HINTS: [MatrixProperty; 4] = [
        MatrixProperty::TriLower,
        MatrixProperty::TriUpper,
        MatrixProperty::Symmetric,
        MatrixProperty::Hermitian,
    ];

    #[test]
    fn test_multiply_rectangular() {
        let a = counting(2, 3);
        let b = counting(3, 2);
        let mut y = Matrix::full(2, 2, f32::NAN);
        multiply(&a, &b, &mut y).unwrap();
        assert_eq!(y, mat_f32(&[&[22.0, 28.0], &[49.0, 64.0]]));
    }

    #[test]
    fn test_multiply_shape_errors_leave_output() {
        let a = counting(2, 3);
        let mut y = Matrix::full(2, 2, 7.0);
        assert_eq!(
            Status::of(&multiply(&a, &a, &mut y)),
            Status::DimensionMismatch
        );
        let b = counting(3, 3);
        assert_eq!(
            Status::of(&multiply(&a, &b, &mut y)),
            Status::DimensionMismatch
        );
        assert_eq!(y, Matrix::full(2, 2, 7.0));
    }

    #[test]
    fn test_identity_multiply() {
        let b = counting(3, 4);
        let i = Matrix::eye(3);
        let mut y = Matrix::zeros(3, 4);
        multiply(&i, &b, &mut y).unwrap();
        assert_eq!(y, b);

        let mut z = Matrix::zeros(3, 4);
        multiply_ext(&i, MatrixProperty::Symmetric, &b, MatrixProperty::General, &mut z).unwrap();
        assert_eq!(z, b);
    }

    #[test]
    fn test_aliased_general_products() {
        let a = counting(2, 2);
        let b = mat_f32(&[&[0.0, 1.0], &[1.0, 0.0]]);
        let mut expected = Matrix::zeros(2, 2);
        multiply(&a, &b, &mut expected).unwrap();

        let mut left = a.clone();
        multiply_into_left(&mut left, &b).unwrap();
        assert_eq!(left, expected);

        let mut right = b.clone();
        multiply_into_right(&a, &mut right).unwrap();
        assert_eq!(right, expected);

        let mut sq = a.clone();
        multiply_square(&mut sq).unwrap();
        assert_eq!(sq, mat_f32(&[&[7.0, 10.0], &[15.0, 22.0]]));
    }

    #[test]
    fn test_aliased_products_reject_shape_change() {
        let mut a = counting(2, 3);
        let b = counting(3, 2);
        assert_eq!(
            Status::of(&multiply_into_left(&mut a, &b)),
            Status::DimensionMismatch
        );
        assert_eq!(a, counting(2, 3));
        assert_eq!(Status::of(&multiply_square(&mut a)), Status::NonSquare);
    }

    #[test]
    fn test_vmult() {
        let a = counting(2, 3);
        let x = Vector::from_slice(&[1.0, 0.0, -1.0]).unwrap();
        let mut y = Vector::zeros(2);
        vmult(&a, &x, &mut y).unwrap();
        assert_eq!(y.as_slice(), &[-2.0, -2.0]);
        assert_eq!(a.matvec(&x).unwrap(), y);

        let mut short = Vector::zeros(3);
        assert_eq!(
            Status::of(&vmult(&a, &x, &mut short)),
            Status::DimensionMismatch
        );

        let sq = counting(2, 2);
        let mut v = Vector::from_slice(&[1.0, 1.0]).unwrap();
        vmult_in_place(&sq, &mut v).unwrap();
        assert_eq!(v.as_slice(), &[3.0, 7.0]);
    }

    #[test]
    fn test_triangular_hint_reads_one_triangle() {
        // The hinted triangle is used even though the full matrix is dense.
        let a = counting(3, 3);
        let b = Matrix::eye(3);
        let mut y = Matrix::zeros(3, 3);
        multiply_ext(&a, MatrixProperty::TriLower, &b, MatrixProperty::General, &mut y).unwrap();
        assert_eq!(y, a.triangle(MatrixProperty::TriLower, 0).unwrap());

        multiply_ext(&b, MatrixProperty::General, &a, MatrixProperty::TriUpper, &mut y).unwrap();
        assert_eq!(y, a.triangle(MatrixProperty::TriUpper, 0).unwrap());
    }

    #[test]
    fn test_dispatch_priority() {
        let a = counting(2, 2);
        let b = counting(2, 2);
        // Triangular A wins over symmetric B.
        assert_eq!(
            select_kernel(&a, MatrixProperty::TriUpper, &b, MatrixProperty::Symmetric).unwrap(),
            Kernel::TriLeft(Uplo::Upper)
        );
        // Triangular B wins over symmetric A.
        assert_eq!(
            select_kernel(&a, MatrixProperty::Symmetric, &b, MatrixProperty::TriLower).unwrap(),
            Kernel::TriRight(Uplo::Lower)
        );
        assert_eq!(
            select_kernel(&a, MatrixProperty::Hermitian, &b, MatrixProperty::Symmetric).unwrap(),
            Kernel::SymLeft
        );
        assert_eq!(
            select_kernel(&a, MatrixProperty::Tridiagonal, &b, MatrixProperty::Symmetric).unwrap(),
            Kernel::SymRight
        );
        assert_eq!(
            select_kernel(&a, MatrixProperty::Square, &b, MatrixProperty::PositiveDefinite)
                .unwrap(),
            Kernel::General
        );
    }

    #[test]
    fn test_hint_on_non_square_operand() {
        let a = counting(2, 3);
        let b = counting(3, 3);
        let mut y = Matrix::full(2, 3, 1.0);
        assert_eq!(
            Status::of(&multiply_ext(
                &a,
                MatrixProperty::TriLower,
                &b,
                MatrixProperty::General,
                &mut y
            )),
            Status::NonSquare
        );
        assert_eq!(
            Status::of(&multiply_ext(
                &b,
                MatrixProperty::General,
                &a.transpose(),
                MatrixProperty::Symmetric,
                &mut Matrix::zeros(3, 2)
            )),
            Status::NonSquare
        );
        // A hinted square operand is fine next to a rectangular one.
        multiply_ext(&a, MatrixProperty::General, &b, MatrixProperty::TriUpper, &mut y).unwrap();
        assert_eq!(y, a.matmul(&b.triangle(MatrixProperty::TriUpper, 0).unwrap()).unwrap());
    }

    #[test]
    fn test_losing_hint_still_requires_square() {
        // TriLower on A selects the kernel, but B is still hinted symmetric.
        let b = counting(2, 3);
        let mut y = Matrix::full(2, 3, 7.0);
        assert_eq!(
            Status::of(&multiply_ext(
                &Matrix::eye(2),
                MatrixProperty::TriLower,
                &b,
                MatrixProperty::Symmetric,
                &mut y
            )),
            Status::NonSquare
        );
        assert_eq!(y, Matrix::full(2, 3, 7.0));

        let mut left = b.clone();
        assert_eq!(
            Status::of(&multiply_ext_into_left(
                &mut left,
                MatrixProperty::Hermitian,
                &Matrix::eye(3),
                MatrixProperty::TriUpper
            )),
            Status::NonSquare
        );
        assert_eq!(left, b);
    }

    #[test]
    fn test_hinted_square() {
        let mut s = mat_f32(&[&[1.0, 2.0], &[2.0, 3.0]]);
        multiply_ext_square(&mut s, MatrixProperty::Symmetric).unwrap();
        assert_eq!(s, mat_f32(&[&[5.0, 8.0], &[8.0, 13.0]]));

        let mut l = mat_f32(&[&[1.0, 0.0], &[3.0, 4.0]]);
        multiply_ext_square(&mut l, MatrixProperty::TriLower).unwrap();
        assert_eq!(l, mat_f32(&[&[1.0, 0.0], &[15.0, 16.0]]));

        let mut rect = counting(2, 3);
        assert_eq!(
            Status::of(&multiply_ext_square(&mut rect, MatrixProperty::General)),
            Status::NonSquare
        );
        assert_eq!(rect, counting(2, 3));
    }

    #[test]
    fn test_symmetric_right() {
        let a = counting(2, 2);
        let s = mat_f32(&[&[1.0, 2.0], &[-50.0, 3.0]]);
        let full = mat_f32(&[&[1.0, 2.0], &[2.0, 3.0]]);
        let mut y = Matrix::zeros(2, 2);
        multiply_ext(&a, MatrixProperty::General, &s, MatrixProperty::Symmetric, &mut y).unwrap();
        assert_eq!(y, a.matmul(&full).unwrap());
    }

    fn square_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
        (1usize..5).prop_flat_map(|n| {
            (
                prop::collection::vec(-4i8..5, n * n),
                prop::collection::vec(-4i8..5, n * n),
            )
                .prop_map(move |(a, b)| {
                    let to_mat =
                        |v: Vec<i8>| Matrix::from_vec(v.into_iter().map(f32::from).collect(), n, n);
                    (to_mat(a).unwrap(), to_mat(b).unwrap())
                })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_identity_multiply_every_path(
            (b, _) in square_pair(),
        ) {
            let i = Matrix::eye(b.rows());
            let mut y = Matrix::zeros(b.rows(), b.cols());
            multiply(&i, &b, &mut y).unwrap();
            prop_assert_eq!(&y, &b);
            for hint in ALL_HINTS {
                multiply_ext(&i, hint, &b, MatrixProperty::General, &mut y).unwrap();
                prop_assert_eq!(&y, &b);
            }
        }

        #[test]
        fn prop_staged_products_match_out_of_place((a, b) in square_pair()) {
            // Small integers keep every product exact in f32.
            let n = a.rows();
            let mut expected = Matrix::zeros(n, n);

            for hint in ALL_HINTS {
                multiply_ext(&a, hint, &b, MatrixProperty::General, &mut expected).unwrap();
                let mut left = a.clone();
                multiply_ext_into_left(&mut left, hint, &b, MatrixProperty::General).unwrap();
                prop_assert_eq!(&left, &expected);
                let mut right = b.clone();
                multiply_ext_into_right(&a, hint, &mut right, MatrixProperty::General).unwrap();
                prop_assert_eq!(&right, &expected);

                multiply_ext(&a, MatrixProperty::General, &b, hint, &mut expected).unwrap();
                let mut left = a.clone();
                multiply_ext_into_left(&mut left, MatrixProperty::General, &b, hint).unwrap();
                prop_assert_eq!(&left, &expected);
                let mut right = b.clone();
                multiply_ext_into_right(&a, MatrixProperty::General, &mut right, hint).unwrap();
                prop_assert_eq!(&right, &expected);

                multiply_ext(&a, hint, &a.clone(), hint, &mut expected).unwrap();
                let mut square = a.clone();
                multiply_ext_square(&mut square, hint).unwrap();
                prop_assert_eq!(&square, &expected);
            }

            multiply(&a, &b, &mut expected).unwrap();
            let mut left = a.clone();
            multiply_into_left(&mut left, &b).unwrap();
            prop_assert_eq!(&left, &expected);
            let mut right = b.clone();
            multiply_into_right(&a, &mut right).unwrap();
            prop_assert_eq!(&right, &expected);
        }
    }
}
