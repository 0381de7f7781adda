//! # Densa
//!
//! Dense single-precision linear algebra in pure Rust.
//!
//! One `use densa::prelude::*;` gives you matrices, vectors, hinted
//! products, triangular and diagonal solves, and the Jacobi and
//! Gauss-Seidel solvers.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Matrices, vectors, kernels, solvers |
//! | `serde` | `Serialize`/`Deserialize` for solver configuration, reports and property hints |

pub use densa_core as core;

/// Glob-import convenience: `use densa::prelude::*;`
pub mod prelude {
    pub use densa_core::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_solves_through_umbrella() {
        let a = Matrix::eye(3);
        let b = Vector::full(3, 2.0);
        let mut x = Vector::zeros(3);
        let report = jacobi(&a, &b, &mut x, None, &SolverConfig::default()).unwrap();
        assert!(report.converged);
        assert_eq!(x, b);
    }
}
