//! Element-wise matrix arithmetic.
//!
//! Every output cell depends only on the input cells at the same position,
//! so the left-aliased (`_assign`) and right-aliased (`_from_assign`) forms
//! are computed in place. Shapes must match in both dimensions.

use crate::storage::impl_elementwise;

use super::Matrix;

impl_elementwise!(Matrix);
