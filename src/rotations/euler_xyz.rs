//! Euler angles in the X-Y'-Z'' (roll-pitch-yaw) sequence
//!
//! Only the parts needed to convert into other representations live here.

use std::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use simba::scalar::SupersetOf;

use super::{AnyRotation, Rotation, RotationKind, RotationQuaternion};
use crate::numeric::Scalar;

/// Intrinsic rotation about X, then the new Y', then the new Z''
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerAnglesXyz<T: Scalar> {
    /// Angles in the order [roll; pitch; yaw]
    xyz: Vector3<T>,
}

/// X-Y'-Z'' Euler angles with double primitive type
pub type EulerAnglesXyzD = EulerAnglesXyz<f64>;
/// X-Y'-Z'' Euler angles with float primitive type
pub type EulerAnglesXyzF = EulerAnglesXyz<f32>;

impl<T: Scalar> EulerAnglesXyz<T> {
    /// Creates the rotation from roll (X), pitch (Y') and yaw (Z'') in radians
    pub fn new(roll: T, pitch: T, yaw: T) -> Self {
        Self {
            xyz: Vector3::new(roll, pitch, yaw),
        }
    }

    pub fn identity() -> Self {
        Self {
            xyz: Vector3::zeros(),
        }
    }

    pub fn roll(&self) -> T {
        self.xyz[0]
    }

    pub fn pitch(&self) -> T {
        self.xyz[1]
    }

    pub fn yaw(&self) -> T {
        self.xyz[2]
    }

    pub fn x(&self) -> T {
        self.xyz[0]
    }

    pub fn y(&self) -> T {
        self.xyz[1]
    }

    pub fn z(&self) -> T {
        self.xyz[2]
    }

    /// Angles as a vector in the order (x, y, z)
    pub fn vector(&self) -> Vector3<T> {
        self.xyz
    }

    /// Casts to another scalar precision
    pub fn cast<U: Scalar + SupersetOf<T>>(&self) -> EulerAnglesXyz<U> {
        EulerAnglesXyz {
            xyz: self.xyz.cast::<U>(),
        }
    }
}

impl<T: Scalar> Default for EulerAnglesXyz<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> fmt::Display for EulerAnglesXyz<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.xyz[0], self.xyz[1], self.xyz[2])
    }
}

impl<T: Scalar> Rotation<T> for EulerAnglesXyz<T> {
    fn kind(&self) -> RotationKind {
        RotationKind::EulerAnglesXyz
    }

    fn as_any(&self) -> AnyRotation<T> {
        AnyRotation::EulerAnglesXyz(*self)
    }

    fn to_quaternion(&self) -> RotationQuaternion<T> {
        RotationQuaternion::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotations::AngleAxis;
    use approx::assert_relative_eq;

    #[test]
    fn test_accessors() {
        let xyz = EulerAnglesXyzD::new(0.1, 0.2, 0.3);
        assert_eq!((xyz.roll(), xyz.pitch(), xyz.yaw()), (0.1, 0.2, 0.3));
        assert_eq!((xyz.x(), xyz.y(), xyz.z()), (0.1, 0.2, 0.3));
        assert_eq!(xyz.to_string(), "0.1 0.2 0.3");
    }

    #[test]
    fn test_single_axis_rotations() {
        let roll = EulerAnglesXyzD::new(0.4, 0.0, 0.0).to_quaternion();
        let expected = RotationQuaternion::from(AngleAxis::new(0.4, 1.0, 0.0, 0.0));
        assert_relative_eq!(roll.angle_to(&expected), 0.0, epsilon = 1e-12);

        let pitch = EulerAnglesXyzD::new(0.0, -0.9, 0.0).to_quaternion();
        let expected = RotationQuaternion::from(AngleAxis::new(-0.9, 0.0, 1.0, 0.0));
        assert_relative_eq!(pitch.angle_to(&expected), 0.0, epsilon = 1e-12);
    }
}
