//! Axis-angle rotation

use std::fmt;

use nalgebra::{Unit, Vector3};
use serde::{Deserialize, Serialize};
use simba::scalar::SupersetOf;

use super::{AnyRotation, Rotation, RotationKind, RotationQuaternion, RotationVector};
use crate::errors::{Result, RotationError};
use crate::numeric::Scalar;

/// Rotation by `angle` radians about a unit-length `axis`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleAxis<T: Scalar> {
    angle: T,
    axis: Vector3<T>,
}

/// Axis-angle rotation with double primitive type
pub type AngleAxisD = AngleAxis<f64>;
/// Axis-angle rotation with float primitive type
pub type AngleAxisF = AngleAxis<f32>;

impl<T: Scalar> AngleAxis<T> {
    /// Creates a rotation of `angle` radians about the axis `(x, y, z)`
    ///
    /// The axis is normalized and must have non-zero length; use
    /// [`AngleAxis::try_new`] to check.
    pub fn new(angle: T, x: T, y: T, z: T) -> Self {
        Self {
            angle,
            axis: Vector3::new(x, y, z).normalize(),
        }
    }

    /// Creates a rotation about the axis `(x, y, z)`, rejecting a zero or
    /// non-finite axis and a non-finite angle
    pub fn try_new(angle: T, x: T, y: T, z: T) -> Result<Self> {
        if ![angle, x, y, z].iter().all(|v| v.is_finite()) {
            return Err(RotationError::NonFinite);
        }
        let axis = Unit::try_new(Vector3::new(x, y, z), T::zero()).ok_or(RotationError::ZeroAxis)?;
        Ok(Self {
            angle,
            axis: axis.into_inner(),
        })
    }

    /// Identity rotation: zero angle about the X axis
    pub fn identity() -> Self {
        Self {
            angle: T::zero(),
            axis: Vector3::x(),
        }
    }

    /// Rotation angle in radians
    pub fn angle(&self) -> T {
        self.angle
    }

    /// Unit rotation axis
    pub fn axis(&self) -> Vector3<T> {
        self.axis
    }

    /// Unit rotation axis as an nalgebra `Unit`
    pub fn unit_axis(&self) -> Unit<Vector3<T>> {
        Unit::new_unchecked(self.axis)
    }

    /// Casts to another scalar precision
    pub fn cast<U: Scalar + SupersetOf<T>>(&self) -> AngleAxis<U> {
        AngleAxis {
            angle: nalgebra::convert(self.angle),
            axis: self.axis.cast::<U>(),
        }
    }
}

impl<T: Scalar> Default for AngleAxis<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> fmt::Display for AngleAxis<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.angle, self.axis[0], self.axis[1], self.axis[2]
        )
    }
}

impl<T: Scalar> From<RotationVector<T>> for AngleAxis<T> {
    /// Splits the vector into its length (angle) and direction (axis)
    ///
    /// The zero vector becomes the identity rotation.
    fn from(rotation_vector: RotationVector<T>) -> Self {
        let angle = rotation_vector.angle();
        if angle == T::zero() {
            return Self::identity();
        }
        Self {
            angle,
            axis: rotation_vector.vector() / angle,
        }
    }
}

impl<T: Scalar> Rotation<T> for AngleAxis<T> {
    fn kind(&self) -> RotationKind {
        RotationKind::AngleAxis
    }

    fn as_any(&self) -> AnyRotation<T> {
        AnyRotation::AngleAxis(*self)
    }

    fn to_quaternion(&self) -> RotationQuaternion<T> {
        RotationQuaternion::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_normalizes_axis() {
        let aa = AngleAxisD::new(0.5, 0.0, 3.0, 4.0);
        assert_eq!(aa.angle(), 0.5);
        assert_relative_eq!(aa.axis()[1], 0.6, epsilon = 1e-15);
        assert_relative_eq!(aa.axis()[2], 0.8, epsilon = 1e-15);
    }

    #[test]
    fn test_try_new_rejects_zero_axis() {
        assert_eq!(
            AngleAxisD::try_new(1.0, 0.0, 0.0, 0.0),
            Err(RotationError::ZeroAxis)
        );
        let aa = AngleAxisD::try_new(1.0, 0.0, 0.0, 2.0).unwrap();
        assert_eq!(aa.axis(), Vector3::z());
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert_eq!(
            AngleAxisD::try_new(1.0, f64::NAN, 0.0, 0.0),
            Err(RotationError::NonFinite)
        );
        assert_eq!(
            AngleAxisD::try_new(f64::INFINITY, 0.0, 0.0, 1.0),
            Err(RotationError::NonFinite)
        );
    }

    #[test]
    fn test_from_rotation_vector() {
        let aa = AngleAxisD::from(RotationVector::new(0.0, 0.0, -2.0));
        assert_relative_eq!(aa.angle(), 2.0, epsilon = 1e-15);
        assert_eq!(aa.axis(), -Vector3::z());

        let identity = AngleAxisD::from(RotationVector::new(0.0, 0.0, 0.0));
        assert_eq!(identity, AngleAxisD::identity());
    }

    #[test]
    fn test_display() {
        let aa = AngleAxisD::new(1.5, 1.0, 0.0, 0.0);
        assert_eq!(aa.to_string(), "1.5 1 0 0");
    }
}
