//! Row-major single-precision BLAS kernels.
//!
//! This module is the numeric backend of the crate. Every routine follows
//! the CBLAS row-major calling convention: matrices are raw slices with an
//! explicit leading dimension (`lda`, the stride between consecutive rows),
//! and `alpha`/`beta` scale the product and the prior destination contents.
//!
//! | Level | Kernels | Complexity |
//! |-------|---------|------------|
//! | L1 | [`sdot`], [`snrm2`], [`sasum`] | O(n) |
//! | L2 | [`sgemv`], [`sger`], [`strsv`] | O(n^2) |
//! | L3 | [`sgemm`], [`ssymm`], [`strmm`], [`strsm`] | O(n^3) |
//!
//! Arguments are validated by the calling layer; here they are only checked
//! with `debug_assert!`. Whenever `beta` is zero the destination is
//! overwritten without being read.

/// Which side of the product the structured matrix sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Which triangle of a matrix is referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Uplo {
    Upper,
    Lower,
}

// ======================================================================
// BLAS Level 1: vector operations, O(n)
// ======================================================================

/// Inner product `sum(x_i * y_i)`.
///
/// ```
/// # use densa_core::blas::sdot;
/// assert_eq!(sdot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
/// ```
pub fn sdot(x: &[f32], y: &[f32]) -> f32 {
    debug_assert_eq!(x.len(), y.len(), "sdot: length mismatch");
    x.iter().zip(y).fold(0.0, |acc, (&a, &b)| acc + a * b)
}

/// Euclidean norm `sqrt(sum(x_i^2))`.
pub fn snrm2(x: &[f32]) -> f32 {
    x.iter().fold(0.0_f32, |acc, &v| acc + v * v).sqrt()
}

/// Sum of absolute values `sum(|x_i|)`.
pub fn sasum(x: &[f32]) -> f32 {
    x.iter().fold(0.0_f32, |acc, &v| acc + v.abs())
}

// ======================================================================
// BLAS Level 2: matrix-vector operations, O(n^2)
// ======================================================================

/// General matrix-vector multiply: `y = alpha * A * x + beta * y`.
///
/// `A` is `m x n` with leading dimension `lda`, `x` has `n` elements and
/// `y` has `m`.
#[allow(clippy::many_single_char_names, clippy::too_many_arguments)]
pub fn sgemv(
    m: usize,
    n: usize,
    alpha: f32,
    a: &[f32],
    lda: usize,
    x: &[f32],
    beta: f32,
    y: &mut [f32],
) {
    debug_assert!(lda >= n);
    debug_assert!(x.len() >= n && y.len() >= m);

    for (i, yi) in y.iter_mut().enumerate().take(m) {
        let row = &a[i * lda..i * lda + n];
        let sum = sdot(row, &x[..n]);
        *yi = if beta == 0.0 {
            alpha * sum
        } else {
            alpha * sum + beta * *yi
        };
    }
}

/// Rank-1 update: `A = alpha * x * y^T + A`.
///
/// `A` is `m x n` with leading dimension `lda`.
#[allow(clippy::many_single_char_names)]
pub fn sger(m: usize, n: usize, alpha: f32, x: &[f32], y: &[f32], a: &mut [f32], lda: usize) {
    debug_assert!(lda >= n);
    for (i, &xi) in x.iter().enumerate().take(m) {
        let scaled = alpha * xi;
        let row = &mut a[i * lda..i * lda + n];
        for (aij, &yj) in row.iter_mut().zip(y) {
            *aij += scaled * yj;
        }
    }
}

/// Triangular solve `A * x = b` for a single right-hand side, in place.
///
/// On entry `x` holds `b`; on exit it holds the solution. Only the `uplo`
/// triangle of the `n x n` matrix `A` is read, including its diagonal.
pub fn strsv(uplo: Uplo, n: usize, a: &[f32], lda: usize, x: &mut [f32]) {
    debug_assert!(lda >= n && x.len() >= n);
    match uplo {
        Uplo::Lower => {
            // Forward substitution
            for i in 0..n {
                let row = &a[i * lda..i * lda + i];
                let sum = x[i] - sdot(row, &x[..i]);
                x[i] = sum / a[i * lda + i];
            }
        }
        Uplo::Upper => {
            // Back substitution
            for i in (0..n).rev() {
                let row = &a[i * lda + i + 1..i * lda + n];
                let sum = x[i] - sdot(row, &x[i + 1..n]);
                x[i] = sum / a[i * lda + i];
            }
        }
    }
}

// ======================================================================
// BLAS Level 3: matrix-matrix operations, O(n^3)
// ======================================================================

/// General matrix-matrix multiply: `C = alpha * A * B + beta * C`.
///
/// `A` is `m x k`, `B` is `k x n`, `C` is `m x n`.
///
/// ```
/// # use densa_core::blas::sgemm;
/// let a = [1.0, 2.0, 3.0, 4.0];
/// let b = [5.0, 6.0, 7.0, 8.0];
/// let mut c = [0.0; 4];
/// sgemm(2, 2, 2, 1.0, &a, 2, &b, 2, 0.0, &mut c, 2);
/// assert_eq!(c, [19.0, 22.0, 43.0, 50.0]);
/// ```
#[allow(clippy::many_single_char_names, clippy::too_many_arguments)]
pub fn sgemm(
    m: usize,
    n: usize,
    k: usize,
    alpha: f32,
    a: &[f32],
    lda: usize,
    b: &[f32],
    ldb: usize,
    beta: f32,
    c: &mut [f32],
    ldc: usize,
) {
    debug_assert!(lda >= k && ldb >= n && ldc >= n);

    // ijk loop order (row-major friendly for A and C)
    for i in 0..m {
        let a_row = i * lda;
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                sum += a[a_row + p] * b[p * ldb + j];
            }
            let c_idx = i * ldc + j;
            c[c_idx] = if beta == 0.0 {
                alpha * sum
            } else {
                alpha * sum + beta * c[c_idx]
            };
        }
    }
}

/// Symmetric matrix-matrix multiply.
///
/// - `Side::Left`: `C = alpha * S * B + beta * C` with `S` of order `m`.
/// - `Side::Right`: `C = alpha * B * S + beta * C` with `S` of order `n`.
///
/// Only the `uplo` triangle of `S` (stored in `a`) is read; the other half
/// is implied by symmetry. `B` and `C` are `m x n`.
#[allow(clippy::many_single_char_names, clippy::too_many_arguments)]
pub fn ssymm(
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: f32,
    a: &[f32],
    lda: usize,
    b: &[f32],
    ldb: usize,
    beta: f32,
    c: &mut [f32],
    ldc: usize,
) {
    debug_assert!(ldb >= n && ldc >= n);
    let sym = |i: usize, j: usize| -> f32 {
        let stored = match uplo {
            Uplo::Upper => i <= j,
            Uplo::Lower => i >= j,
        };
        if stored { a[i * lda + j] } else { a[j * lda + i] }
    };

    for i in 0..m {
        for j in 0..n {
            let sum = match side {
                Side::Left => (0..m).fold(0.0, |acc, p| acc + sym(i, p) * b[p * ldb + j]),
                Side::Right => (0..n).fold(0.0, |acc, p| acc + b[i * ldb + p] * sym(p, j)),
            };
            let c_idx = i * ldc + j;
            c[c_idx] = if beta == 0.0 {
                alpha * sum
            } else {
                alpha * sum + beta * c[c_idx]
            };
        }
    }
}

/// Triangular matrix-matrix multiply, overwriting `B`.
///
/// - `Side::Left`: `B = alpha * T * B` with `T` of order `m`.
/// - `Side::Right`: `B = alpha * B * T` with `T` of order `n`.
///
/// Only the `uplo` triangle of `T` (stored in `a`) is read. The loop orders
/// are chosen so every element of `B` is consumed before it is overwritten.
#[allow(clippy::many_single_char_names, clippy::too_many_arguments)]
pub fn strmm(
    side: Side,
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: f32,
    a: &[f32],
    lda: usize,
    b: &mut [f32],
    ldb: usize,
) {
    debug_assert!(ldb >= n);
    match (side, uplo) {
        (Side::Left, Uplo::Upper) => {
            for i in 0..m {
                for j in 0..n {
                    let sum = (i..m).fold(0.0, |acc, p| acc + a[i * lda + p] * b[p * ldb + j]);
                    b[i * ldb + j] = alpha * sum;
                }
            }
        }
        (Side::Left, Uplo::Lower) => {
            for i in (0..m).rev() {
                for j in 0..n {
                    let sum = (0..=i).fold(0.0, |acc, p| acc + a[i * lda + p] * b[p * ldb + j]);
                    b[i * ldb + j] = alpha * sum;
                }
            }
        }
        (Side::Right, Uplo::Upper) => {
            for i in 0..m {
                for j in (0..n).rev() {
                    let sum = (0..=j).fold(0.0, |acc, p| acc + b[i * ldb + p] * a[p * lda + j]);
                    b[i * ldb + j] = alpha * sum;
                }
            }
        }
        (Side::Right, Uplo::Lower) => {
            for i in 0..m {
                for j in 0..n {
                    let sum = (j..n).fold(0.0, |acc, p| acc + b[i * ldb + p] * a[p * lda + j]);
                    b[i * ldb + j] = alpha * sum;
                }
            }
        }
    }
}

/// Triangular solve with multiple right-hand sides: `T * X = alpha * B`.
///
/// `T` (stored in `a`) is `m x m`; `B` is `m x n` and is overwritten by `X`.
/// Lower triangles are solved by forward substitution, upper triangles by
/// back substitution, one right-hand-side column at a time.
#[allow(clippy::many_single_char_names, clippy::too_many_arguments)]
pub fn strsm(
    uplo: Uplo,
    m: usize,
    n: usize,
    alpha: f32,
    a: &[f32],
    lda: usize,
    b: &mut [f32],
    ldb: usize,
) {
    debug_assert!(lda >= m && ldb >= n);

    if alpha != 1.0 {
        for i in 0..m {
            for v in &mut b[i * ldb..i * ldb + n] {
                *v *= alpha;
            }
        }
    }

    match uplo {
        Uplo::Lower => {
            for i in 0..m {
                let diag_inv = 1.0 / a[i * lda + i];
                for j in 0..n {
                    let mut sum = b[i * ldb + j];
                    for p in 0..i {
                        sum -= a[i * lda + p] * b[p * ldb + j];
                    }
                    b[i * ldb + j] = sum * diag_inv;
                }
            }
        }
        Uplo::Upper => {
            for i in (0..m).rev() {
                let diag_inv = 1.0 / a[i * lda + i];
                for j in 0..n {
                    let mut sum = b[i * ldb + j];
                    for p in (i + 1)..m {
                        sum -= a[i * lda + p] * b[p * ldb + j];
                    }
                    b[i * ldb + j] = sum * diag_inv;
                }
            }
        }
    }
}
