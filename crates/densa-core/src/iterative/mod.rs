//! Stationary iterative solvers for `A * x = b`.
//!
//! Both solvers split `A` once, then repeat a sweep `x <- M^-1 (b - N x)`
//! until the relative residual `||A x - b|| / ||b||` drops to the
//! configured tolerance or the iteration cap is reached:
//!
//! | Solver | `M` | `N` |
//! |--------|-----|-----|
//! | [`jacobi`] | diagonal of `A` | `A` minus its diagonal |
//! | [`gauss_seidel`] | lower triangle of `A` with diagonal | strict upper triangle |
//!
//! Convergence is guaranteed for strictly diagonally dominant `A`; for other
//! matrices the iteration may stall or diverge, which is reported through
//! [`SolveReport::converged`] rather than as an error.

mod gauss_seidel;
mod jacobi;

pub use gauss_seidel::gauss_seidel;
pub use jacobi::jacobi;

use core::fmt;

use crate::error::{CoreError, Result};
use crate::linalg::vmult;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Relative residual at which a solve is considered converged.
pub const DEFAULT_TOLERANCE: f32 = 1e-6;

/// Sweep cap applied unless the caller chooses another.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

// ======================================================================
// Configuration
// ======================================================================

/// Stopping criteria shared by the iterative solvers.
///
/// ```
/// # use densa_core::iterative::SolverConfig;
/// let config = SolverConfig::new().with_tolerance(1e-5).with_max_iterations(200);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(SolverConfig::new().with_tolerance(4.0).effective_tolerance(), 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Target relative residual, in `(0, 1]`.
    pub tolerance: f32,
    /// Maximum number of sweeps. Zero returns the starting iterate.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// The tolerance actually used: values outside `(0, 1]`, including
    /// non-finite ones, are replaced by [`DEFAULT_TOLERANCE`].
    pub fn effective_tolerance(&self) -> f32 {
        if self.tolerance > 0.0 && self.tolerance <= 1.0 {
            self.tolerance
        } else {
            log::warn!(
                "tolerance {} is outside (0, 1], using {DEFAULT_TOLERANCE}",
                self.tolerance
            );
            DEFAULT_TOLERANCE
        }
    }
}

// ======================================================================
// Report
// ======================================================================

/// Outcome of an iterative solve.
///
/// Exhausting the iteration cap is not an error: the best iterate is still
/// written to the output and `converged` is `false`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveReport {
    /// Sweeps performed.
    pub iterations: usize,
    /// `||A x - b|| / ||b||` of the returned iterate, or `||A x - b||` when
    /// `b` is zero.
    pub relative_residual: f32,
    /// Whether the residual reached the tolerance.
    pub converged: bool,
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SolveReport {{ {}, iters: {}, residual: {:.2e} }}",
            if self.converged { "converged" } else { "not converged" },
            self.iterations,
            self.relative_residual
        )
    }
}

// ======================================================================
// Shared control loop
// ======================================================================

/// One splitting of `A`, applied as `x <- M^-1 (b - N x)`.
pub(crate) trait Sweep {
    const NAME: &'static str;

    /// Overwrite `x` with the next iterate.
    fn sweep(&mut self, b: &Vector, x: &mut Vector) -> Result<()>;
}

/// Drive `sweep` from the starting iterate until convergence or the cap,
/// then copy the final iterate into `y`.
///
/// The residual of the starting iterate is tested before the first sweep,
/// so a guess that already meets the tolerance returns with
/// `iterations == 0` instead of sweeping once.
///
/// All shapes are validated before `y` is touched.
pub(crate) fn solve<S: Sweep>(
    a: &Matrix,
    b: &Vector,
    y: &mut Vector,
    guess: Option<&Vector>,
    config: &SolverConfig,
    split: impl FnOnce(&Matrix) -> Result<S>,
) -> Result<SolveReport> {
    a.check_square()?;
    let n = a.rows();
    if b.len() != n {
        return Err(CoreError::length_mismatch(n, b.len()));
    }
    if y.len() != n {
        return Err(CoreError::length_mismatch(n, y.len()));
    }
    let mut x = Vector::try_zeros(n)?;
    if let Some(g) = guess {
        x.copy_from(g)?;
    }

    let tolerance = config.effective_tolerance();
    let mut sweeper = split(a)?;
    let mut residual = Residual::new(a, b)?;

    log::debug!(
        "{}: n = {n}, tolerance = {tolerance:e}, max_iterations = {}",
        S::NAME,
        config.max_iterations
    );

    let mut rel = residual.of(&x)?;
    let mut iterations = 0;
    let mut converged = rel <= tolerance;
    while !converged && iterations < config.max_iterations {
        sweeper.sweep(b, &mut x)?;
        iterations += 1;
        rel = residual.of(&x)?;
        log::trace!("{}: iteration {iterations}, residual {rel:e}", S::NAME);
        if !rel.is_finite() {
            log::warn!("{}: residual became non-finite after {iterations} iterations", S::NAME);
            break;
        }
        converged = rel <= tolerance;
    }

    if !converged && rel.is_finite() {
        log::warn!(
            "{}: no convergence after {iterations} iterations (residual {rel:e})",
            S::NAME
        );
    }
    y.copy_from(&x)?;

    let report = SolveReport {
        iterations,
        relative_residual: rel,
        converged,
    };
    log::debug!("{}: finished, {report}", S::NAME);
    Ok(report)
}

/// Residual evaluator with its own scratch vector.
struct Residual<'a> {
    a: &'a Matrix,
    b: &'a Vector,
    scale: f32,
    r: Vector,
}

impl<'a> Residual<'a> {
    fn new(a: &'a Matrix, b: &'a Vector) -> Result<Self> {
        let norm = b.norm2();
        Ok(Self {
            a,
            b,
            scale: if norm == 0.0 { 1.0 } else { norm },
            r: Vector::try_zeros(b.len())?,
        })
    }

    /// `||A x - b|| / ||b||`.
    fn of(&mut self, x: &Vector) -> Result<f32> {
        vmult(self.a, x, &mut self.r)?;
        self.r.sub_assign(self.b)?;
        Ok(self.r.norm2() / self.scale)
    }
}
