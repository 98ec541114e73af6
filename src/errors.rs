//! Error types for the checked constructors
//!
//! The conversions themselves are total and never fail. Errors only arise when
//! a caller asks for validation of raw input, e.g. a matrix that should be a
//! proper rotation or an axis that must have non-zero length.

use thiserror::Error;

/// Main error type for rotation construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RotationError {
    /// The matrix deviates from orthonormality by more than the tolerance
    #[error("Matrix is not orthonormal: max |R^T R - I| entry is {deviation}")]
    NotOrthonormal {
        /// Largest absolute entry of `R^T R - I`
        deviation: f64,
    },

    /// The matrix is orthonormal but has a negative determinant (a reflection)
    #[error("Matrix is not a proper rotation: determinant is {determinant}")]
    ImproperRotation {
        /// Determinant of the rejected matrix
        determinant: f64,
    },

    /// A rotation axis of zero length was supplied
    #[error("Rotation axis has zero length")]
    ZeroAxis,

    /// A quaternion of zero norm was supplied
    #[error("Quaternion has zero norm")]
    ZeroQuaternion,

    /// An input component was NaN or infinite
    #[error("Rotation has non-finite components")]
    NonFinite,
}

/// Extension of the Result type for rotation operations
pub type Result<T> = std::result::Result<T, RotationError>;
