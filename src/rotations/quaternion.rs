//! Unit quaternion rotation, the hub most conversions route through

use std::fmt;

use nalgebra::{Quaternion, Rotation3, UnitQuaternion, Vector3};
use rand::Rng;
use serde::{Deserialize, Serialize};
use simba::scalar::SupersetOf;

use super::{
    AngleAxis, AnyRotation, EulerAnglesXyz, EulerAnglesZyx, Rotation, RotationKind,
    RotationMatrix, RotationVector,
};
use crate::errors::{Result, RotationError};
use crate::numeric::{constant, Scalar};

/// Rotation stored as a unit quaternion `w + xi + yj + zk`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationQuaternion<T: Scalar> {
    unit: UnitQuaternion<T>,
}

/// Unit quaternion rotation with double primitive type
pub type RotationQuaternionD = RotationQuaternion<f64>;
/// Unit quaternion rotation with float primitive type
pub type RotationQuaternionF = RotationQuaternion<f32>;

impl<T: Scalar> RotationQuaternion<T> {
    /// Creates a rotation from quaternion components, normalizing them
    ///
    /// The components must not all be zero; use [`RotationQuaternion::try_new`]
    /// to check.
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self {
            unit: UnitQuaternion::from_quaternion(Quaternion::new(w, x, y, z)),
        }
    }

    /// Creates a rotation from quaternion components, rejecting a zero or
    /// non-finite quaternion
    pub fn try_new(w: T, x: T, y: T, z: T) -> Result<Self> {
        let q = Quaternion::new(w, x, y, z);
        if !q.coords.iter().all(|v| v.is_finite()) {
            return Err(RotationError::NonFinite);
        }
        if q.norm() == T::zero() {
            return Err(RotationError::ZeroQuaternion);
        }
        Ok(Self {
            unit: UnitQuaternion::from_quaternion(q),
        })
    }

    /// Identity rotation
    pub fn identity() -> Self {
        Self {
            unit: UnitQuaternion::identity(),
        }
    }

    /// Wraps an existing nalgebra unit quaternion
    pub fn from_unit_quaternion(unit: UnitQuaternion<T>) -> Self {
        Self { unit }
    }

    /// Samples a rotation uniformly on SO(3) (Shoemake's method)
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let u1: f64 = rng.gen();
        let u2: f64 = rng.gen();
        let u3: f64 = rng.gen();

        let a = (1.0 - u1).sqrt();
        let b = u1.sqrt();
        let (s2, c2) = (std::f64::consts::TAU * u2).sin_cos();
        let (s3, c3) = (std::f64::consts::TAU * u3).sin_cos();

        Self::new(
            constant(a * s2),
            constant(a * c2),
            constant(b * s3),
            constant(b * c3),
        )
    }

    /// The underlying nalgebra unit quaternion
    pub fn to_implementation(&self) -> &UnitQuaternion<T> {
        &self.unit
    }

    /// Real part
    pub fn w(&self) -> T {
        self.unit.quaternion().scalar()
    }

    /// First imaginary component
    pub fn x(&self) -> T {
        self.unit.quaternion().imag()[0]
    }

    /// Second imaginary component
    pub fn y(&self) -> T {
        self.unit.quaternion().imag()[1]
    }

    /// Third imaginary component
    pub fn z(&self) -> T {
        self.unit.quaternion().imag()[2]
    }

    /// Conjugate quaternion, which is the inverse for unit length
    pub fn conjugated(&self) -> Self {
        Self {
            unit: self.unit.conjugate(),
        }
    }

    /// Inverse rotation
    pub fn inverted(&self) -> Self {
        self.conjugated()
    }

    /// Inverts the rotation in place
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverted();
        self
    }

    /// Rotation matrix of this quaternion (active, column-vector convention)
    pub fn to_rotation_matrix(&self) -> RotationMatrix<T> {
        RotationMatrix::new(self.unit.to_rotation_matrix().into_inner())
    }

    /// Angle in `[0, π]` of the rotation taking `self` to `other`
    ///
    /// Insensitive to the sign of either quaternion.
    pub fn angle_to(&self, other: &Self) -> T {
        let delta = self.unit.inverse() * other.unit;
        let two = T::one() + T::one();
        two * delta.imag().norm().atan2(delta.scalar().abs())
    }

    /// Casts to another scalar precision
    pub fn cast<U: Scalar + SupersetOf<T>>(&self) -> RotationQuaternion<U> {
        let coords = self.unit.quaternion().coords.cast::<U>();
        RotationQuaternion {
            unit: UnitQuaternion::from_quaternion(Quaternion::from(coords)),
        }
    }
}

impl<T: Scalar> Default for RotationQuaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> fmt::Display for RotationQuaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.w(), self.x(), self.y(), self.z())
    }
}

impl<T: Scalar> From<AngleAxis<T>> for RotationQuaternion<T> {
    fn from(aa: AngleAxis<T>) -> Self {
        Self {
            unit: UnitQuaternion::from_axis_angle(&aa.unit_axis(), aa.angle()),
        }
    }
}

impl<T: Scalar> From<RotationVector<T>> for RotationQuaternion<T> {
    fn from(rotation_vector: RotationVector<T>) -> Self {
        Self::from(AngleAxis::from(rotation_vector))
    }
}

impl<T: Scalar> From<RotationMatrix<T>> for RotationQuaternion<T> {
    fn from(rotation: RotationMatrix<T>) -> Self {
        let rotation = Rotation3::from_matrix_unchecked(*rotation.matrix());
        Self {
            unit: UnitQuaternion::from_rotation_matrix(&rotation),
        }
    }
}

impl<T: Scalar> From<EulerAnglesXyz<T>> for RotationQuaternion<T> {
    /// Intrinsic X, then Y', then Z'': `q = q_x * q_y * q_z`
    fn from(xyz: EulerAnglesXyz<T>) -> Self {
        let qx = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), xyz.x());
        let qy = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), xyz.y());
        let qz = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), xyz.z());
        Self {
            unit: qx * qy * qz,
        }
    }
}

impl<T: Scalar> From<EulerAnglesZyx<T>> for RotationQuaternion<T> {
    /// Intrinsic Z, then Y', then X'': `q = q_z * q_y * q_x`
    fn from(zyx: EulerAnglesZyx<T>) -> Self {
        let qz = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), zyx.z());
        let qy = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), zyx.y());
        let qx = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), zyx.x());
        Self {
            unit: qz * qy * qx,
        }
    }
}

impl<T: Scalar> Rotation<T> for RotationQuaternion<T> {
    fn kind(&self) -> RotationKind {
        RotationKind::RotationQuaternion
    }

    fn as_any(&self) -> AnyRotation<T> {
        AnyRotation::RotationQuaternion(*self)
    }

    fn to_quaternion(&self) -> RotationQuaternion<T> {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_new_normalizes() {
        let q = RotationQuaternionD::new(2.0, 0.0, 0.0, 0.0);
        assert_eq!(q.w(), 1.0);
        assert_eq!(q, RotationQuaternionD::identity());

        let q = RotationQuaternionD::new(1.0, 1.0, 1.0, 1.0);
        assert_relative_eq!(q.w(), 0.5, epsilon = 1e-15);
        assert_relative_eq!(q.z(), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_try_new_rejects_zero() {
        assert_eq!(
            RotationQuaternionD::try_new(0.0, 0.0, 0.0, 0.0),
            Err(RotationError::ZeroQuaternion)
        );
        assert!(RotationQuaternionD::try_new(0.0, 0.0, 0.0, 3.0).is_ok());
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert_eq!(
            RotationQuaternionD::try_new(f64::NAN, 0.0, 0.0, 0.0),
            Err(RotationError::NonFinite)
        );
        assert_eq!(
            RotationQuaternionD::try_new(1.0, 0.0, f64::INFINITY, 0.0),
            Err(RotationError::NonFinite)
        );
    }

    #[test]
    fn test_inverse_is_conjugate() {
        let q = RotationQuaternionD::new(0.9, 0.1, -0.3, 0.2);
        let inv = q.inverted();
        assert_relative_eq!(inv.w(), q.w(), epsilon = 1e-15);
        assert_relative_eq!(inv.x(), -q.x(), epsilon = 1e-15);
        assert_relative_eq!(inv.y(), -q.y(), epsilon = 1e-15);
        assert_relative_eq!(inv.z(), -q.z(), epsilon = 1e-15);

        let mut q2 = q;
        q2.invert().invert();
        assert_eq!(q2, q);
    }

    #[test]
    fn test_angle_to_ignores_sign() {
        let q = RotationQuaternionD::new(0.5, 0.5, -0.5, 0.5);
        let minus_q = RotationQuaternionD::new(-0.5, -0.5, 0.5, -0.5);
        assert_relative_eq!(q.angle_to(&minus_q), 0.0, epsilon = 1e-12);

        let a = RotationQuaternionD::from(AngleAxis::new(0.2, 0.0, 0.0, 1.0));
        let b = RotationQuaternionD::from(AngleAxis::new(0.5, 0.0, 0.0, 1.0));
        assert_relative_eq!(a.angle_to(&b), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_from_euler_zyx_matches_axis_order() {
        // Yaw only is a rotation about Z
        let q = RotationQuaternionD::from(EulerAnglesZyx::new(FRAC_PI_2, 0.0, 0.0));
        let expected = RotationQuaternionD::from(AngleAxis::new(FRAC_PI_2, 0.0, 0.0, 1.0));
        assert_relative_eq!(q.angle_to(&expected), 0.0, epsilon = 1e-12);

        // ZYX with reversed angles equals XYZ of the reversed sequence only for
        // commuting cases; check a general case against explicit products
        let zyx = EulerAnglesZyx::new(0.3, -0.4, 1.1);
        let q = RotationQuaternionD::from(zyx);
        let explicit = RotationQuaternionD::from(AngleAxis::new(0.3, 0.0, 0.0, 1.0))
            .to_implementation()
            * RotationQuaternionD::from(AngleAxis::new(-0.4, 0.0, 1.0, 0.0)).to_implementation()
            * RotationQuaternionD::from(AngleAxis::new(1.1, 1.0, 0.0, 0.0)).to_implementation();
        let explicit = RotationQuaternionD::from_unit_quaternion(explicit);
        assert_relative_eq!(q.angle_to(&explicit), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_from_euler_xyz() {
        let xyz = EulerAnglesXyz::new(0.0, 0.0, PI / 3.0);
        let q = RotationQuaternionD::from(xyz);
        let expected = RotationQuaternionD::from(AngleAxis::new(PI / 3.0, 0.0, 0.0, 1.0));
        assert_relative_eq!(q.angle_to(&expected), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matrix_roundtrip() {
        let mut rng = StdRng::seed_from_u64(424242);
        for _ in 0..50 {
            let q = RotationQuaternionD::random(&mut rng);
            let back = RotationQuaternionD::from(q.to_rotation_matrix());
            assert_relative_eq!(q.angle_to(&back), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_random_is_unit() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let q = RotationQuaternionF::random(&mut rng);
            let norm = (q.w() * q.w() + q.x() * q.x() + q.y() * q.y() + q.z() * q.z()).sqrt();
            assert_relative_eq!(norm, 1.0_f32, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_cast() {
        let q = RotationQuaternionD::new(0.9, 0.1, -0.3, 0.2);
        let qf: RotationQuaternionF = q.cast();
        assert_relative_eq!(qf.w() as f64, q.w(), epsilon = 1e-6);
        assert_relative_eq!(qf.y() as f64, q.y(), epsilon = 1e-6);
    }
}
