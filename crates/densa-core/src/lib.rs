//! `densa-core`: single-precision dense linear algebra.
//!
//! Provides row-major [`Matrix`] and [`Vector`] value types, BLAS-style
//! kernels, property-hinted products and solves, and the Jacobi and
//! Gauss-Seidel iterative solvers.
//!
//! # Design
//!
//! - **Aliasing through the borrow checker.** An operation whose output is
//!   also an input is a separate function that borrows that operand
//!   mutably (`a.add_assign(&b)`, `linalg::multiply_into_left(&mut a, &b)`).
//!   Forms that need it stage the result through a temporary buffer.
//! - **Errors leave outputs untouched.** Every fallible operation validates
//!   all shapes before writing and returns a [`CoreError`]; [`Status`]
//!   gives the numeric code of any result.
//! - **Hints, not facts.** A [`MatrixProperty`] passed to an operation is
//!   trusted. [`Matrix::verify_property`] checks one explicitly.
//!
//! ```
//! use densa_core::prelude::*;
//!
//! let a = Matrix::from_rows(&[&[4.0, 1.0], &[1.0, 3.0]])?;
//! let b = Vector::from_slice(&[1.0, 2.0])?;
//! let mut x = Vector::zeros(2);
//! let report = gauss_seidel(&a, &b, &mut x, None, &SolverConfig::default())?;
//! assert!(report.converged);
//! # Ok::<(), densa_core::CoreError>(())
//! ```

pub mod blas;
pub mod error;
pub mod iterative;
pub mod linalg;
pub mod matrix;
pub mod property;
mod storage;
pub mod vector;

// Re-export key types at crate root for convenience.
pub use error::{CoreError, Result, Status};
pub use matrix::Matrix;
pub use property::MatrixProperty;
pub use vector::Vector;

/// Items intended for glob-import: `use densa_core::prelude::*;`
pub mod prelude {
    pub use crate::error::{CoreError, Result, Status};
    pub use crate::iterative::{SolveReport, SolverConfig, gauss_seidel, jacobi};
    pub use crate::linalg::{
        diagsolve, multiply, multiply_ext, trisolve, vdiagsolve, vmult, vtrisolve,
    };
    pub use crate::matrix::Matrix;
    pub use crate::property::MatrixProperty;
    pub use crate::vector::Vector;
}
