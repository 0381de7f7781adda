//! Vector creation and fill routines.

use crate::error::{CoreError, Result};
use crate::storage::try_alloc;

use super::Vector;

impl Vector {
    /// Create a zero-filled vector.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    ///
    /// ```
    /// # use densa_core::Vector;
    /// let v = Vector::zeros(3);
    /// assert_eq!(v.as_slice(), &[0.0, 0.0, 0.0]);
    /// ```
    pub fn zeros(len: usize) -> Self {
        assert!(len > 0, "vector length must be positive");
        Self {
            data: vec![0.0; len],
        }
    }

    /// Create a zero-filled vector, reporting allocation failure.
    pub fn try_zeros(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(CoreError::Undersized { needed: 1, got: 0 });
        }
        Ok(Self {
            data: try_alloc(len)?,
        })
    }

    /// Create a vector filled with a constant value.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn full(len: usize, value: f32) -> Self {
        assert!(len > 0, "vector length must be positive");
        Self {
            data: vec![value; len],
        }
    }

    /// Create `n` evenly spaced values from `start` to `end` (inclusive).
    ///
    /// Returns [`CoreError::Undersized`] if `n < 2`.
    ///
    /// ```
    /// # use densa_core::Vector;
    /// let v = Vector::linspace(0.0, 3.0, 4).unwrap();
    /// assert_eq!(v.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    /// ```
    pub fn linspace(start: f32, end: f32, n: usize) -> Result<Self> {
        if n < 2 {
            return Err(CoreError::Undersized { needed: 2, got: n });
        }
        let mut v = Self::try_zeros(n)?;
        v.fill_linspace(start, end)?;
        Ok(v)
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Set every element to zero.
    pub fn zero(&mut self) {
        self.fill(0.0);
    }

    /// Overwrite with evenly spaced values from `start` to `end` (inclusive).
    pub fn fill_linspace(&mut self, start: f32, end: f32) -> Result<()> {
        let n = self.len();
        if n < 2 {
            return Err(CoreError::Undersized { needed: 2, got: n });
        }
        let step = (end - start) / (n - 1) as f32;
        for (i, v) in self.data.iter_mut().enumerate() {
            *v = start + step * i as f32;
        }
        // Exact end point regardless of step rounding.
        self.data[n - 1] = end;
        Ok(())
    }
}
