//! Jacobi iteration: `x <- D^-1 (b - R x)` with `A = D + R`.

use crate::error::Result;
use crate::linalg::vmult;
use crate::matrix::Matrix;
use crate::storage::try_copy;
use crate::vector::Vector;

use super::{SolveReport, SolverConfig, Sweep, solve};

struct JacobiSplit {
    /// Diagonal of `A`.
    diag: Vector,
    /// `A` with its diagonal zeroed.
    r: Matrix,
    scratch: Vector,
}

impl JacobiSplit {
    fn new(a: &Matrix) -> Result<Self> {
        let diag = a.diagonal(0)?;
        let mut r = Matrix::from_vec(try_copy(a.as_slice())?, a.rows(), a.cols())?;
        r.sub_diagonal_assign(&diag, 0)?;
        Ok(Self {
            scratch: Vector::try_zeros(diag.len())?,
            diag,
            r,
        })
    }
}

impl Sweep for JacobiSplit {
    const NAME: &'static str = "jacobi";

    fn sweep(&mut self, b: &Vector, x: &mut Vector) -> Result<()> {
        vmult(&self.r, x, &mut self.scratch)?;
        self.scratch.sub_from_assign(b)?;
        self.scratch.div_elementwise_assign(&self.diag)?;
        x.copy_from(&self.scratch)
    }
}

/// Solve `A * y = b` by Jacobi iteration.
///
/// Starts from `guess` (or zero), sweeps until the relative residual is at
/// most the configured tolerance or `config.max_iterations` sweeps have run,
/// and writes the final iterate to `y`. The starting iterate is tested
/// first, so an initial guess that already converges costs no sweep.
///
/// # Errors
///
/// [`CoreError::NonSquare`](crate::CoreError::NonSquare) if `A` is not
/// square; [`CoreError::DimensionMismatch`](crate::CoreError::DimensionMismatch)
/// if `b`, `y` or `guess` does not have `A.rows` elements. `y` is untouched
/// on error. Failing to converge is not an error.
///
/// ```
/// # use densa_core::{Matrix, Vector};
/// # use densa_core::iterative::{jacobi, SolverConfig};
/// let a = Matrix::from_rows(&[&[4.0, 1.0], &[1.0, 3.0]]).unwrap();
/// let b = Vector::from_slice(&[1.0, 2.0]).unwrap();
/// let mut y = Vector::zeros(2);
/// let report = jacobi(&a, &b, &mut y, None, &SolverConfig::default()).unwrap();
/// assert!(report.converged);
/// assert!((y.value(0).unwrap() - 1.0 / 11.0).abs() < 1e-5);
/// ```
pub fn jacobi(
    a: &Matrix,
    b: &Vector,
    y: &mut Vector,
    guess: Option<&Vector>,
    config: &SolverConfig,
) -> Result<SolveReport> {
    solve(a, b, y, guess, config, JacobiSplit::new)
}
