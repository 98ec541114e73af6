//! Rotation matrix
//!
//! The matrix is stored as the active rotation operator acting on column
//! vectors: `v' = R v`. For Euler angles `(z, y, x)` this is
//! `R = R_z(z) R_y(y) R_x(x)`.

use std::fmt;

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use simba::scalar::SupersetOf;

use super::{AnyRotation, EulerAnglesZyx, Rotation, RotationKind, RotationQuaternion};
use crate::constants::ORTHONORMALITY_TOLERANCE;
use crate::errors::{Result, RotationError};
use crate::numeric::{constant, Scalar};

/// Rotation stored as a 3x3 orthonormal matrix with determinant +1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationMatrix<T: Scalar> {
    matrix: Matrix3<T>,
}

/// Rotation matrix with double primitive type
pub type RotationMatrixD = RotationMatrix<f64>;
/// Rotation matrix with float primitive type
pub type RotationMatrixF = RotationMatrix<f32>;

impl<T: Scalar> RotationMatrix<T> {
    /// Wraps a matrix without checking that it is a rotation
    pub fn new(matrix: Matrix3<T>) -> Self {
        Self { matrix }
    }

    /// Wraps a matrix after checking orthonormality and a positive determinant
    ///
    /// # Errors
    ///
    /// - [`RotationError::NonFinite`] if any entry is NaN or infinite
    /// - [`RotationError::NotOrthonormal`] if any entry of `R^T R - I` exceeds
    ///   [`ORTHONORMALITY_TOLERANCE`]
    /// - [`RotationError::ImproperRotation`] if the determinant is negative
    pub fn try_new(matrix: Matrix3<T>) -> Result<Self> {
        if !matrix.iter().all(|v| v.is_finite()) {
            return Err(RotationError::NonFinite);
        }
        let rotation = Self { matrix };

        let deviation = rotation.orthonormality_error();
        let tolerance: T = constant(ORTHONORMALITY_TOLERANCE);
        if !(deviation <= tolerance) {
            return Err(RotationError::NotOrthonormal {
                deviation: deviation.to_f64(),
            });
        }

        let determinant = matrix.determinant();
        if determinant < T::zero() {
            return Err(RotationError::ImproperRotation {
                determinant: determinant.to_f64(),
            });
        }

        Ok(rotation)
    }

    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// The underlying matrix
    pub fn matrix(&self) -> &Matrix3<T> {
        &self.matrix
    }

    /// Same as [`RotationMatrix::matrix`], named after the other representations
    pub fn to_implementation(&self) -> &Matrix3<T> {
        &self.matrix
    }

    /// Transposed matrix, which is the inverse rotation
    pub fn transposed(&self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }

    /// Largest absolute entry of `R^T R - I`
    ///
    /// Non-finite entries propagate, so a matrix holding NaN never reports a
    /// finite deviation.
    pub fn orthonormality_error(&self) -> T {
        let gram = self.matrix.transpose() * self.matrix - Matrix3::identity();
        gram.iter().fold(T::zero(), |acc, &v| {
            let deviation = v.abs();
            // `max` would drop NaN here
            if deviation > acc || !deviation.is_finite() {
                deviation
            } else {
                acc
            }
        })
    }

    /// Whether `R^T R` is within `tolerance` of the identity, entry by entry
    pub fn is_orthonormal(&self, tolerance: T) -> bool {
        self.orthonormality_error() <= tolerance
    }

    /// Casts to another scalar precision
    pub fn cast<U: Scalar + SupersetOf<T>>(&self) -> RotationMatrix<U> {
        RotationMatrix {
            matrix: self.matrix.cast::<U>(),
        }
    }
}

impl<T: Scalar> Default for RotationMatrix<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> fmt::Display for RotationMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{} {} {}",
                self.matrix[(row, 0)],
                self.matrix[(row, 1)],
                self.matrix[(row, 2)]
            )?;
        }
        Ok(())
    }
}

impl<T: Scalar> From<RotationQuaternion<T>> for RotationMatrix<T> {
    fn from(q: RotationQuaternion<T>) -> Self {
        q.to_rotation_matrix()
    }
}

impl<T: Scalar> From<EulerAnglesZyx<T>> for RotationMatrix<T> {
    /// Closed form of `R_z(z) R_y(y) R_x(x)`
    fn from(zyx: EulerAnglesZyx<T>) -> Self {
        let (sz, cz) = zyx.z().sin_cos();
        let (sy, cy) = zyx.y().sin_cos();
        let (sx, cx) = zyx.x().sin_cos();

        #[rustfmt::skip]
        let matrix = Matrix3::new(
            cz * cy, cz * sy * sx - sz * cx, cz * sy * cx + sz * sx,
            sz * cy, sz * sy * sx + cz * cx, sz * sy * cx - cz * sx,
            -sy,     cy * sx,                cy * cx,
        );
        Self { matrix }
    }
}

impl<T: Scalar> Rotation<T> for RotationMatrix<T> {
    fn kind(&self) -> RotationKind {
        RotationKind::RotationMatrix
    }

    fn as_any(&self) -> AnyRotation<T> {
        AnyRotation::RotationMatrix(*self)
    }

    fn to_quaternion(&self) -> RotationQuaternion<T> {
        RotationQuaternion::from(*self)
    }

    fn to_rotation_matrix(&self) -> RotationMatrix<T> {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_try_new_accepts_rotation() {
        let r = RotationMatrixD::from(EulerAnglesZyx::new(0.3, -0.2, 1.4));
        assert!(RotationMatrixD::try_new(*r.matrix()).is_ok());
        assert!(RotationMatrixD::try_new(Matrix3::identity()).is_ok());
    }

    #[test]
    fn test_try_new_rejects_non_orthonormal() {
        let scaled = Matrix3::identity() * 2.0;
        match RotationMatrixD::try_new(scaled) {
            Err(RotationError::NotOrthonormal { deviation }) => {
                assert_relative_eq!(deviation, 3.0, epsilon = 1e-12)
            }
            other => panic!("Expected NotOrthonormal, got {:?}", other),
        }
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert_eq!(
            RotationMatrixD::try_new(Matrix3::from_element(f64::NAN)),
            Err(RotationError::NonFinite)
        );

        let mut almost_identity = Matrix3::identity();
        almost_identity[(1, 2)] = f64::NAN;
        assert_eq!(
            RotationMatrixD::try_new(almost_identity),
            Err(RotationError::NonFinite)
        );

        almost_identity[(1, 2)] = f64::INFINITY;
        assert_eq!(
            RotationMatrixD::try_new(almost_identity),
            Err(RotationError::NonFinite)
        );
    }

    #[test]
    fn test_orthonormality_error_propagates_nan() {
        let nan = RotationMatrixD::new(Matrix3::from_element(f64::NAN));
        assert!(nan.orthonormality_error().is_nan());
        assert!(!nan.is_orthonormal(1.0));

        let mut m = Matrix3::identity();
        m[(0, 0)] = f64::NAN;
        let one_nan = RotationMatrixD::new(m);
        assert!(!one_nan.orthonormality_error().is_finite());
        assert!(!one_nan.is_orthonormal(1.0));
    }

    #[test]
    fn test_try_new_rejects_reflection() {
        let reflection = Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0);
        assert_eq!(
            RotationMatrixD::try_new(reflection),
            Err(RotationError::ImproperRotation { determinant: -1.0 })
        );
    }

    #[test]
    fn test_from_yaw_only() {
        let r = RotationMatrixD::from(EulerAnglesZyx::new(FRAC_PI_4, 0.0, 0.0));
        let (s, c) = FRAC_PI_4.sin_cos();
        let expected = Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(*r.matrix(), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_closed_form_matches_quaternion() {
        let zyx = EulerAnglesZyx::new(-2.1, 0.6, 0.25);
        let closed = RotationMatrixD::from(zyx);
        let via_quaternion = RotationQuaternion::from(zyx).to_rotation_matrix();
        assert_relative_eq!(*closed.matrix(), *via_quaternion.matrix(), epsilon = 1e-12);
    }

    #[test]
    fn test_transposed_is_inverse() {
        let r = RotationMatrixD::from(EulerAnglesZyx::new(0.5, 0.4, -0.3));
        let product = r.matrix() * r.transposed().matrix();
        assert_relative_eq!(product, Matrix3::identity(), epsilon = 1e-12);
        assert!(r.is_orthonormal(1e-12));
    }

    #[test]
    fn test_display_rows() {
        assert_eq!(RotationMatrixD::identity().to_string(), "1 0 0\n0 1 0\n0 0 1");
    }
}
