//! Vector arithmetic and reductions.
//!
//! Element-wise operations come from [`impl_elementwise!`]; reductions and
//! the outer product go through the [`blas`](crate::blas) kernels.

use crate::blas;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;
use crate::storage::impl_elementwise;

use super::Vector;

impl_elementwise!(Vector);

impl Vector {
    /// Inner product with another vector of the same length.
    ///
    /// ```
    /// # use densa_core::Vector;
    /// let a = Vector::linspace(0.0, 3.0, 4).unwrap();
    /// let b = Vector::linspace(1.0, 4.0, 4).unwrap();
    /// assert_eq!(a.dot(&b).unwrap(), 20.0);
    /// ```
    pub fn dot(&self, other: &Vector) -> Result<f32> {
        self.check_same_shape(other)?;
        Ok(blas::sdot(self.as_slice(), other.as_slice()))
    }

    /// Euclidean (L2) norm.
    pub fn norm2(&self) -> f32 {
        blas::snrm2(self.as_slice())
    }

    /// Sum of absolute values (L1 norm).
    pub fn abs_sum(&self) -> f32 {
        blas::sasum(self.as_slice())
    }

    /// Sum of all elements.
    pub fn sum(&self) -> f32 {
        self.iter().sum()
    }

    /// Smallest element.
    pub fn min(&self) -> f32 {
        self.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Largest element.
    pub fn max(&self) -> f32 {
        self.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Smallest and largest element in one pass.
    pub fn min_max(&self) -> (f32, f32) {
        self.iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Outer product `Y = a * b^T`, overwriting `Y`.
    ///
    /// `Y` must have shape `a.len() x b.len()`.
    pub fn outer(a: &Vector, b: &Vector, y: &mut Matrix) -> Result<()> {
        if y.shape() != (a.len(), b.len()) {
            return Err(CoreError::shape_mismatch((a.len(), b.len()), y.shape()));
        }
        let lda = y.cols();
        y.zero();
        blas::sger(
            a.len(),
            b.len(),
            1.0,
            a.as_slice(),
            b.as_slice(),
            y.as_mut_slice(),
            lda,
        );
        Ok(())
    }
}
