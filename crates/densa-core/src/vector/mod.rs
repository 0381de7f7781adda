//! Dense single-precision vector.
//!
//! A [`Vector`] exclusively owns a contiguous buffer of at least one
//! element. Cloning performs a deep copy; dropping releases the buffer.

mod create;
mod display;
mod ops;

use crate::error::{CoreError, Result};

/// A dense vector of `f32` with a fixed, positive length.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    data: Vec<f32>,
}

#[allow(clippy::len_without_is_empty)]
impl Vector {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Create a vector that takes ownership of `data`.
    ///
    /// Returns [`CoreError::Undersized`] if `data` is empty.
    pub fn from_vec(data: Vec<f32>) -> Result<Self> {
        if data.is_empty() {
            return Err(CoreError::Undersized { needed: 1, got: 0 });
        }
        Ok(Self { data })
    }

    /// Create a vector from a slice (copies the data).
    pub fn from_slice(data: &[f32]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of elements. Always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the vector and return the underlying buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.data.iter()
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// Read the element at `pos`.
    pub fn value(&self, pos: usize) -> Result<f32> {
        self.data
            .get(pos)
            .copied()
            .ok_or_else(|| self.bad_index(pos))
    }

    /// Overwrite the element at `pos`.
    pub fn write_value(&mut self, pos: usize, value: f32) -> Result<()> {
        let len = self.len();
        match self.data.get_mut(pos) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(CoreError::BadIndex {
                index: vec![pos],
                shape: vec![len],
            }),
        }
    }

    /// Copy `y.len()` elements starting at `pos` into `y`.
    pub fn subvec(&self, pos: usize, y: &mut Vector) -> Result<()> {
        let range = self.block(pos, y.len())?;
        y.data.copy_from_slice(&self.data[range]);
        Ok(())
    }

    /// Overwrite `y.len()` elements starting at `pos` with the contents of `y`.
    pub fn write_subvec(&mut self, pos: usize, y: &Vector) -> Result<()> {
        let range = self.block(pos, y.len())?;
        self.data[range].copy_from_slice(&y.data);
        Ok(())
    }

    /// Deep-copy `src` into this vector's existing buffer.
    pub fn copy_from(&mut self, src: &Vector) -> Result<()> {
        self.check_same_shape(src)?;
        self.data.copy_from_slice(&src.data);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------

    pub(crate) fn check_same_shape(&self, other: &Vector) -> Result<()> {
        if self.len() != other.len() {
            return Err(CoreError::length_mismatch(self.len(), other.len()));
        }
        Ok(())
    }

    /// Swap in a buffer of the same length computed elsewhere.
    pub(crate) fn replace_data(&mut self, data: Vec<f32>) {
        debug_assert_eq!(data.len(), self.data.len());
        self.data = data;
    }

    fn block(&self, pos: usize, len: usize) -> Result<std::ops::Range<usize>> {
        match pos.checked_add(len) {
            Some(end) if end <= self.len() => Ok(pos..end),
            _ => Err(self.bad_index(pos)),
        }
    }

    fn bad_index(&self, pos: usize) -> CoreError {
        CoreError::BadIndex {
            index: vec![pos],
            shape: vec![self.len()],
        }
    }
}
