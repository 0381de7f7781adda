//! Structural property hints for matrices.
//!
//! A [`MatrixProperty`] is a promise made by the caller. Operations that
//! accept one trust it without checking, so a false hint produces
//! meaningless numbers rather than an error. Use
//! [`Matrix::verify_property`](crate::Matrix::verify_property) to check a
//! hint when in doubt.

use crate::blas::Uplo;

/// Closed set of structural hints accepted by the dispatching operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixProperty {
    /// No structure assumed.
    #[default]
    General,
    Symmetric,
    /// Zero strictly above the diagonal.
    TriLower,
    /// Zero strictly below the diagonal.
    TriUpper,
    Tridiagonal,
    /// Equal to its conjugate transpose; identical to `Symmetric` for real data.
    Hermitian,
    PositiveDefinite,
    DiagonallyDominant,
    Square,
}

impl MatrixProperty {
    /// Whether the hint names a triangular matrix.
    #[inline]
    pub fn is_triangular(self) -> bool {
        matches!(self, Self::TriLower | Self::TriUpper)
    }

    /// Whether a symmetric product kernel may be used.
    #[inline]
    pub fn is_symmetric(self) -> bool {
        matches!(self, Self::Symmetric | Self::Hermitian)
    }

    /// The stored triangle for triangular hints.
    pub(crate) fn uplo(self) -> Option<Uplo> {
        match self {
            Self::TriLower => Some(Uplo::Lower),
            Self::TriUpper => Some(Uplo::Upper),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_general() {
        assert_eq!(MatrixProperty::default(), MatrixProperty::General);
    }

    #[test]
    fn test_triangular() {
        assert!(MatrixProperty::TriLower.is_triangular());
        assert!(MatrixProperty::TriUpper.is_triangular());
        assert!(!MatrixProperty::Tridiagonal.is_triangular());
        assert_eq!(MatrixProperty::TriLower.uplo(), Some(Uplo::Lower));
        assert_eq!(MatrixProperty::Symmetric.uplo(), None);
    }

    #[test]
    fn test_hermitian_counts_as_symmetric() {
        assert!(MatrixProperty::Hermitian.is_symmetric());
        assert!(MatrixProperty::Symmetric.is_symmetric());
        assert!(!MatrixProperty::PositiveDefinite.is_symmetric());
    }
}
