use thiserror::Error;

use crate::property::MatrixProperty;

/// All runtime errors returned by `densa-core`.
///
/// Every variant corresponds to one non-zero [`Status`] code. When an
/// operation returns `Err`, its output argument has not been written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Operand shapes do not match the required layout.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// A buffer of `requested` elements could not be allocated.
    #[error("failed to allocate a buffer of {requested} elements")]
    MemError { requested: usize },

    /// An element, row, column or block index is out of bounds.
    #[error("index {index:?} out of bounds for shape {shape:?}")]
    BadIndex {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    /// A dimension or buffer is smaller than the operation needs.
    #[error("undersized operand: need at least {needed} elements, got {got}")]
    Undersized { needed: usize, got: usize },

    /// A square-only operation received a rectangular matrix.
    #[error("matrix of shape {rows}x{cols} is not square")]
    NonSquare { rows: usize, cols: usize },

    /// The property hint is not one the operation accepts.
    #[error("property {property:?} is not valid for {operation}")]
    BadProperty {
        property: MatrixProperty,
        operation: &'static str,
    },
}

impl CoreError {
    /// Status code of this error.
    pub fn status(&self) -> Status {
        match self {
            Self::DimensionMismatch { .. } => Status::DimensionMismatch,
            Self::MemError { .. } => Status::MemError,
            Self::BadIndex { .. } => Status::BadIndex,
            Self::Undersized { .. } => Status::Undersized,
            Self::NonSquare { .. } => Status::NonSquare,
            Self::BadProperty { .. } => Status::BadProperty,
        }
    }

    pub(crate) fn shape_mismatch(expected: (usize, usize), got: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: vec![expected.0, expected.1],
            got: vec![got.0, got.1],
        }
    }

    pub(crate) fn length_mismatch(expected: usize, got: usize) -> Self {
        Self::DimensionMismatch {
            expected: vec![expected],
            got: vec![got],
        }
    }
}

/// Numeric status codes, stable across releases.
///
/// ```
/// # use densa_core::{Status, Vector};
/// let a = Vector::zeros(3);
/// let b = Vector::zeros(4);
/// let mut y = Vector::zeros(3);
/// let res = Vector::add(&a, &b, &mut y);
/// assert_eq!(Status::of(&res), Status::DimensionMismatch);
/// assert_eq!(Status::of(&res).code(), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Status {
    Good = 0,
    DimensionMismatch = -1,
    MemError = -2,
    BadIndex = -3,
    Undersized = -4,
    NonSquare = -5,
    BadProperty = -6,
}

impl Status {
    /// The integer code.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Status of a finished operation: `Good` for `Ok`, the error's code otherwise.
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Self::Good,
            Err(e) => e.status(),
        }
    }
}

impl From<&CoreError> for Status {
    fn from(err: &CoreError) -> Self {
        err.status()
    }
}

/// Convenience alias used throughout `densa-core`.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::Good.code(), 0);
        assert_eq!(Status::DimensionMismatch.code(), -1);
        assert_eq!(Status::MemError.code(), -2);
        assert_eq!(Status::BadIndex.code(), -3);
        assert_eq!(Status::Undersized.code(), -4);
        assert_eq!(Status::NonSquare.code(), -5);
        assert_eq!(Status::BadProperty.code(), -6);
    }

    #[test]
    fn test_error_to_status() {
        let err = CoreError::NonSquare { rows: 2, cols: 3 };
        assert_eq!(err.status(), Status::NonSquare);
        assert_eq!(Status::from(&err), Status::NonSquare);

        let err = CoreError::BadProperty {
            property: MatrixProperty::General,
            operation: "trisolve",
        };
        assert_eq!(err.status(), Status::BadProperty);
    }

    #[test]
    fn test_status_of_result() {
        let ok: Result<()> = Ok(());
        assert_eq!(Status::of(&ok), Status::Good);
        let err: Result<()> = Err(CoreError::MemError { requested: 8 });
        assert_eq!(Status::of(&err), Status::MemError);
    }

    #[test]
    fn test_display() {
        let err = CoreError::shape_mismatch((2, 3), (3, 2));
        assert_eq!(
            err.to_string(),
            "dimension mismatch: expected [2, 3], got [3, 2]"
        );
        let err = CoreError::NonSquare { rows: 2, cols: 3 };
        assert_eq!(err.to_string(), "matrix of shape 2x3 is not square");
    }
}
