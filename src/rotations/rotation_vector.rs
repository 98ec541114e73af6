//! Rotation vector: the rotation axis scaled by the rotation angle

use std::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use simba::scalar::SupersetOf;

use super::{AngleAxis, AnyRotation, Rotation, RotationKind, RotationQuaternion};
use crate::numeric::Scalar;

/// Rotation stored as `angle * axis`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationVector<T: Scalar> {
    vector: Vector3<T>,
}

/// Rotation vector with double primitive type
pub type RotationVectorD = RotationVector<f64>;
/// Rotation vector with float primitive type
pub type RotationVectorF = RotationVector<f32>;

impl<T: Scalar> RotationVector<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self {
            vector: Vector3::new(x, y, z),
        }
    }

    pub fn from_vector(vector: Vector3<T>) -> Self {
        Self { vector }
    }

    pub fn identity() -> Self {
        Self {
            vector: Vector3::zeros(),
        }
    }

    pub fn vector(&self) -> Vector3<T> {
        self.vector
    }

    /// Rotation angle in radians, the length of the vector
    pub fn angle(&self) -> T {
        self.vector.norm()
    }

    /// Casts to another scalar precision
    pub fn cast<U: Scalar + SupersetOf<T>>(&self) -> RotationVector<U> {
        RotationVector {
            vector: self.vector.cast::<U>(),
        }
    }
}

impl<T: Scalar> Default for RotationVector<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> fmt::Display for RotationVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.vector[0], self.vector[1], self.vector[2])
    }
}

impl<T: Scalar> Rotation<T> for RotationVector<T> {
    fn kind(&self) -> RotationKind {
        RotationKind::RotationVector
    }

    fn as_any(&self) -> AnyRotation<T> {
        AnyRotation::RotationVector(*self)
    }

    fn to_quaternion(&self) -> RotationQuaternion<T> {
        RotationQuaternion::from(AngleAxis::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_is_norm() {
        let rv = RotationVectorD::new(3.0, 0.0, 4.0);
        assert_relative_eq!(rv.angle(), 5.0, epsilon = 1e-15);
        assert_eq!(RotationVectorD::identity().angle(), 0.0);
    }

    #[test]
    fn test_to_quaternion_matches_angle_axis() {
        let rv = RotationVectorD::new(0.0, 0.7, 0.0);
        let expected = RotationQuaternion::from(AngleAxis::new(0.7, 0.0, 1.0, 0.0));
        assert_relative_eq!(rv.to_quaternion().angle_to(&expected), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cast() {
        let rv = RotationVectorD::new(0.1, 0.2, 0.3);
        let rvf: RotationVectorF = rv.cast();
        assert_relative_eq!(rvf.vector()[2], 0.3_f32, epsilon = 1e-7);
    }
}
