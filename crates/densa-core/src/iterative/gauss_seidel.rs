//! Gauss-Seidel iteration: `x <- L*^-1 (b - U x)` with `A = L* + U`.

use crate::error::Result;
use crate::linalg::{vmult, vtrisolve};
use crate::matrix::Matrix;
use crate::property::MatrixProperty;
use crate::vector::Vector;

use super::{SolveReport, SolverConfig, Sweep, solve};

struct GaussSeidelSplit {
    /// Lower triangle of `A`, diagonal included.
    lower: Matrix,
    /// Strict upper triangle of `A`.
    upper: Matrix,
    scratch: Vector,
}

impl GaussSeidelSplit {
    fn new(a: &Matrix) -> Result<Self> {
        Ok(Self {
            lower: a.triangle(MatrixProperty::TriLower, 0)?,
            upper: a.triangle(MatrixProperty::TriUpper, 1)?,
            scratch: Vector::try_zeros(a.rows())?,
        })
    }
}

impl Sweep for GaussSeidelSplit {
    const NAME: &'static str = "gauss-seidel";

    fn sweep(&mut self, b: &Vector, x: &mut Vector) -> Result<()> {
        vmult(&self.upper, x, &mut self.scratch)?;
        self.scratch.sub_from_assign(b)?;
        vtrisolve(&self.lower, MatrixProperty::TriLower, &self.scratch, x)
    }
}

/// Solve `A * y = b` by Gauss-Seidel iteration.
///
/// Same contract as [`jacobi`](super::jacobi): the final iterate is written
/// to `y`, and the report tells whether the tolerance was reached.
///
/// ```
/// # use densa_core::{Matrix, Vector};
/// # use densa_core::iterative::{gauss_seidel, SolverConfig};
/// let a = Matrix::from_rows(&[&[4.0, 1.0], &[1.0, 3.0]]).unwrap();
/// let b = Vector::from_slice(&[1.0, 2.0]).unwrap();
/// let mut y = Vector::zeros(2);
/// let config = SolverConfig::new().with_max_iterations(50);
/// let report = gauss_seidel(&a, &b, &mut y, None, &config).unwrap();
/// assert!(report.converged);
/// assert!((y.value(1).unwrap() - 7.0 / 11.0).abs() < 1e-5);
/// ```
pub fn gauss_seidel(
    a: &Matrix,
    b: &Vector,
    y: &mut Vector,
    guess: Option<&Vector>,
    config: &SolverConfig,
) -> Result<SolveReport> {
    solve(a, b, y, guess, config, GaussSeidelSplit::new)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::Status;
    use crate::iterative::jacobi;
    use crate::iterative::tests::{dominant4, init_logger};

    #[test]
    fn test_gauss_seidel_converges() {
        init_logger();
        let (a, b) = dominant4();
        let mut y = Vector::zeros(4);
        let config = SolverConfig::new()
            .with_tolerance(1e-7)
            .with_max_iterations(100);
        let report = gauss_seidel(&a, &b, &mut y, None, &config).unwrap();

        assert!(report.converged);
        assert!(report.relative_residual <= 1e-7);
        for (got, want) in y.iter().zip([1.0, 2.0, -1.0, 1.0]) {
            assert!((got - want).abs() < 1e-5, "{got} vs {want}");
        }
    }

    #[test]
    fn test_faster_than_jacobi() {
        let (a, b) = dominant4();
        let config = SolverConfig::new().with_max_iterations(100);
        let mut y = Vector::zeros(4);
        let gs = gauss_seidel(&a, &b, &mut y, None, &config).unwrap();
        let jac = jacobi(&a, &b, &mut y, None, &config).unwrap();
        assert!(gs.converged && jac.converged);
        assert!(gs.iterations < jac.iterations);
    }

    #[test]
    fn test_first_sweep_is_forward_substitution() {
        let (a, b) = dominant4();
        let mut y = Vector::zeros(4);
        let config = SolverConfig::new().with_max_iterations(1);
        gauss_seidel(&a, &b, &mut y, None, &config).unwrap();

        let mut expected = Vector::zeros(4);
        let lower = a.triangle(MatrixProperty::TriLower, 0).unwrap();
        vtrisolve(&lower, MatrixProperty::TriLower, &b, &mut expected).unwrap();
        assert_eq!(y, expected);
    }

    #[test]
    fn test_guess_is_used() {
        let (a, b) = dominant4();
        let guess = Vector::from_slice(&[1.0, 2.0, -1.0, 1.0]).unwrap();
        let mut y = Vector::zeros(4);
        let report = gauss_seidel(&a, &b, &mut y, Some(&guess), &SolverConfig::default()).unwrap();
        assert_eq!(report.iterations, 0);
        assert_eq!(y, guess);
    }

    #[test]
    fn test_non_square() {
        let b = Vector::zeros(2);
        let mut y = Vector::zeros(2);
        assert_eq!(
            Status::of(&gauss_seidel(
                &Matrix::zeros(2, 3),
                &b,
                &mut y,
                None,
                &SolverConfig::default()
            )),
            Status::NonSquare
        );
    }
}
