//! Buffer allocation and the element-wise operation generator shared by
//! [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix).

use crate::error::{CoreError, Result};

/// Allocate a zeroed buffer, reporting allocation failure instead of aborting.
pub(crate) fn try_alloc(len: usize) -> Result<Vec<f32>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| CoreError::MemError { requested: len })?;
    data.resize(len, 0.0);
    Ok(data)
}

/// Allocate a copy of `src`, reporting allocation failure instead of aborting.
pub(crate) fn try_copy(src: &[f32]) -> Result<Vec<f32>> {
    let mut data = Vec::new();
    data.try_reserve_exact(src.len())
        .map_err(|_| CoreError::MemError {
            requested: src.len(),
        })?;
    data.extend_from_slice(src);
    Ok(data)
}

/// Generates the element-wise arithmetic of a dense value type.
///
/// The type must provide `as_slice`, `as_mut_slice` and
/// `check_same_shape(&self, &Self) -> Result<()>`.
///
/// Each binary operation comes in an out-of-place form `op(a, b, &mut y)`,
/// a left-aliased form `a.op_assign(&b)` (`a = a op b`) and, for the
/// non-commutative operations, a right-aliased form `b.op_from_assign(&a)`
/// (`b = a op b`). Every output element is read and written in the same
/// step, so none of the forms needs a staging buffer. Shapes are validated
/// before anything is written.
macro_rules! impl_elementwise {
    ($ty:ty) => {
        $crate::storage::impl_elementwise!(@binary $ty, add, add_assign, +, "sum");
        $crate::storage::impl_elementwise!(@binary $ty, sub, sub_assign, -, "difference");
        $crate::storage::impl_elementwise!(@binary $ty, mul_elementwise, mul_elementwise_assign, *, "product");
        $crate::storage::impl_elementwise!(@binary $ty, div_elementwise, div_elementwise_assign, /, "quotient");
        $crate::storage::impl_elementwise!(@from $ty, sub_from_assign, -, "difference");
        $crate::storage::impl_elementwise!(@from $ty, div_from_assign, /, "quotient");
        $crate::storage::impl_elementwise!(@scalar $ty, add_scalar, add_scalar_assign, +, "sum");
        $crate::storage::impl_elementwise!(@scalar $ty, sub_scalar, sub_scalar_assign, -, "difference");
        $crate::storage::impl_elementwise!(@scalar $ty, mul_scalar, mul_scalar_assign, *, "product");
        $crate::storage::impl_elementwise!(@scalar $ty, div_scalar, div_scalar_assign, /, "quotient");
    };

    (@binary $ty:ty, $name:ident, $assign:ident, $op:tt, $what:literal) => {
        impl $ty {
            #[doc = concat!("Element-wise ", $what, " `y = a ", stringify!($op), " b`.")]
            ///
            /// All three operands must have the same shape; `y` is left
            /// untouched on mismatch.
            pub fn $name(a: &Self, b: &Self, y: &mut Self) -> $crate::Result<()> {
                a.check_same_shape(b)?;
                a.check_same_shape(y)?;
                for ((yi, &ai), &bi) in y
                    .as_mut_slice()
                    .iter_mut()
                    .zip(a.as_slice())
                    .zip(b.as_slice())
                {
                    *yi = ai $op bi;
                }
                Ok(())
            }

            #[doc = concat!("In-place element-wise ", $what, " `self = self ", stringify!($op), " rhs`.")]
            pub fn $assign(&mut self, rhs: &Self) -> $crate::Result<()> {
                self.check_same_shape(rhs)?;
                for (yi, &bi) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
                    *yi = *yi $op bi;
                }
                Ok(())
            }
        }
    };

    (@from $ty:ty, $name:ident, $op:tt, $what:literal) => {
        impl $ty {
            #[doc = concat!("In-place element-wise ", $what, " `self = lhs ", stringify!($op), " self`.")]
            pub fn $name(&mut self, lhs: &Self) -> $crate::Result<()> {
                self.check_same_shape(lhs)?;
                for (yi, &ai) in self.as_mut_slice().iter_mut().zip(lhs.as_slice()) {
                    *yi = ai $op *yi;
                }
                Ok(())
            }
        }
    };

    (@scalar $ty:ty, $name:ident, $assign:ident, $op:tt, $what:literal) => {
        impl $ty {
            #[doc = concat!("Scalar ", $what, " `y = a ", stringify!($op), " s`, broadcast to every element.")]
            pub fn $name(a: &Self, s: f32, y: &mut Self) -> $crate::Result<()> {
                a.check_same_shape(y)?;
                for (yi, &ai) in y.as_mut_slice().iter_mut().zip(a.as_slice()) {
                    *yi = ai $op s;
                }
                Ok(())
            }

            #[doc = concat!("In-place scalar ", $what, " `self = self ", stringify!($op), " s`.")]
            pub fn $assign(&mut self, s: f32) {
                for yi in self.as_mut_slice() {
                    *yi = *yi $op s;
                }
            }
        }
    };
}

pub(crate) use impl_elementwise;
