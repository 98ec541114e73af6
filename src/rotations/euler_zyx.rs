//! # Z-Y'-X'' Euler Angles (yaw, pitch, roll)
//!
//! [`EulerAnglesZyx`] describes a rotation as three consecutive rotations about
//! body axes: first by yaw about Z, then by pitch about the once-rotated Y',
//! then by roll about the twice-rotated X''. The rotation matrix is
//! `R = R_z(yaw) R_y(pitch) R_x(roll)`.
//!
//! ## Internal Storage
//!
//! The angles are stored in a `Vector3` in the order (z, y, x), i.e.
//! [yaw; pitch; roll]. Construction never checks or normalizes ranges; any
//! real value is accepted for any component.
//!
//! ## Canonical Form
//!
//! Many triples denote the same rotation. [`EulerAnglesZyx::unique`] picks a
//! single representative in [-π, π) × [-π/2, π/2] × [-π, π). At the gimbal
//! lock (pitch = ±π/2) only `yaw + roll` (pitch -π/2) or `yaw - roll`
//! (pitch +π/2) is observable, so the canonical form puts the whole free angle
//! into yaw and sets roll to zero.
//!
//! ## Examples
//!
//! ```rust
//! use rotations::rotations::{EulerAnglesZyxD, RotationMatrix};
//! use std::f64::consts::PI;
//!
//! let zyx = EulerAnglesZyxD::new(2.0 * PI + 0.1, 0.2, -0.3);
//! let unique = zyx.unique();
//! assert!((unique.yaw() - 0.1).abs() < 1e-12);
//!
//! // Round trip through the rotation matrix
//! let back = EulerAnglesZyxD::from(RotationMatrix::from(unique));
//! assert!((back.pitch() - 0.2).abs() < 1e-12);
//! ```

use std::fmt;

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use simba::scalar::SupersetOf;

use super::{
    AngleAxis, AnyRotation, EulerAnglesXyz, Rotation, RotationKind, RotationMatrix,
    RotationQuaternion, RotationVector,
};
use crate::constants::{EXTRACTION_ORTHONORMALITY_TOLERANCE, UNIQUE_TOLERANCE};
use crate::numeric::{constant, wrap_angle, Scalar};

/// Euler angles rotation (Z-Y'-X'' / yaw-pitch-roll)
///
/// A small `Copy` value holding three angles in radians. See the
/// [module documentation](self) for the conventions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerAnglesZyx<T: Scalar> {
    /// Angles in the order [yaw; pitch; roll]
    zyx: Vector3<T>,
}

/// Active Euler angles rotation (Z,Y',X'' / yaw,pitch,roll) with double primitive type
pub type EulerAnglesZyxD = EulerAnglesZyx<f64>;
/// Active Euler angles rotation (Z,Y',X'' / yaw,pitch,roll) with float primitive type
pub type EulerAnglesZyxF = EulerAnglesZyx<f32>;
/// Passive Euler angles rotation (Z,Y',X'' / yaw,pitch,roll) with double primitive type
pub type EulerAnglesZyxPD = EulerAnglesZyx<f64>;
/// Passive Euler angles rotation (Z,Y',X'' / yaw,pitch,roll) with float primitive type
pub type EulerAnglesZyxPF = EulerAnglesZyx<f32>;

/// Yaw-pitch-roll name for [`EulerAnglesZyx`]
pub type EulerAnglesYpr<T> = EulerAnglesZyx<T>;
/// Active yaw-pitch-roll Euler angles with double primitive type
pub type EulerAnglesYprD = EulerAnglesYpr<f64>;
/// Active yaw-pitch-roll Euler angles with float primitive type
pub type EulerAnglesYprF = EulerAnglesYpr<f32>;
/// Passive yaw-pitch-roll Euler angles with double primitive type
pub type EulerAnglesYprPD = EulerAnglesYpr<f64>;
/// Passive yaw-pitch-roll Euler angles with float primitive type
pub type EulerAnglesYprPF = EulerAnglesYpr<f32>;

impl<T: Scalar> EulerAnglesZyx<T> {
    /// Creates the rotation from yaw (Z), pitch (Y') and roll (X'') in radians
    ///
    /// No range checking is performed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rotations::rotations::EulerAnglesZyxD;
    ///
    /// let zyx = EulerAnglesZyxD::new(0.1, 0.2, 0.3);
    /// assert_eq!(zyx.yaw(), 0.1);
    /// assert_eq!(zyx.pitch(), 0.2);
    /// assert_eq!(zyx.roll(), 0.3);
    /// ```
    pub fn new(yaw: T, pitch: T, roll: T) -> Self {
        Self {
            zyx: Vector3::new(yaw, pitch, roll),
        }
    }

    /// Creates the rotation from a vector ordered [yaw; pitch; roll]
    pub fn from_vector(zyx: Vector3<T>) -> Self {
        Self { zyx }
    }

    /// Identity rotation (0, 0, 0)
    pub fn identity() -> Self {
        Self {
            zyx: Vector3::zeros(),
        }
    }

    /// Replaces this rotation with the conversion of `other`
    ///
    /// ```rust
    /// use rotations::rotations::{EulerAnglesZyxD, RotationQuaternionD};
    ///
    /// let mut zyx = EulerAnglesZyxD::new(1.0, 2.0, 3.0);
    /// zyx.assign(RotationQuaternionD::identity());
    /// assert_eq!(zyx, EulerAnglesZyxD::identity());
    /// ```
    pub fn assign<R>(&mut self, other: R) -> &mut Self
    where
        Self: From<R>,
    {
        *self = Self::from(other);
        self
    }

    /// Returns the angles as a vector in the order (z, y, x)
    pub fn vector(&self) -> Vector3<T> {
        self.zyx
    }

    /// Read access to the underlying vector
    pub fn to_implementation(&self) -> &Vector3<T> {
        &self.zyx
    }

    /// Write access to the underlying vector
    pub fn to_implementation_mut(&mut self) -> &mut Vector3<T> {
        &mut self.zyx
    }

    /// Yaw (Z) angle
    pub fn yaw(&self) -> T {
        self.zyx[0]
    }

    /// Pitch (Y') angle
    pub fn pitch(&self) -> T {
        self.zyx[1]
    }

    /// Roll (X'') angle
    pub fn roll(&self) -> T {
        self.zyx[2]
    }

    pub fn set_yaw(&mut self, yaw: T) {
        self.zyx[0] = yaw;
    }

    pub fn set_pitch(&mut self, pitch: T) {
        self.zyx[1] = pitch;
    }

    pub fn set_roll(&mut self, roll: T) {
        self.zyx[2] = roll;
    }

    /// Z angle, same as [`EulerAnglesZyx::yaw`]
    pub fn z(&self) -> T {
        self.zyx[0]
    }

    /// Y' angle, same as [`EulerAnglesZyx::pitch`]
    pub fn y(&self) -> T {
        self.zyx[1]
    }

    /// X'' angle, same as [`EulerAnglesZyx::roll`]
    pub fn x(&self) -> T {
        self.zyx[2]
    }

    pub fn set_z(&mut self, z: T) {
        self.zyx[0] = z;
    }

    pub fn set_y(&mut self, y: T) {
        self.zyx[1] = y;
    }

    pub fn set_x(&mut self, x: T) {
        self.zyx[2] = x;
    }

    /// Sets the rotation to identity
    pub fn set_identity(&mut self) -> &mut Self {
        self.zyx = Vector3::zeros();
        self
    }

    /// Returns the inverse rotation
    ///
    /// Computed by conjugating the equivalent unit quaternion, which sidesteps
    /// the singular cases of a closed-form Euler inverse.
    pub fn inverted(&self) -> Self {
        Self::from(RotationQuaternion::from(*self).inverted())
    }

    /// Inverts the rotation in place
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverted();
        self
    }

    /// Returns the canonical angles of this rotation
    ///
    /// The result lies in [-π, π) × [-π/2, π/2] × [-π, π) and denotes the same
    /// rotation. Pitch within [`UNIQUE_TOLERANCE`] of ±π/2 is treated as gimbal
    /// lock: roll is folded into yaw and set to zero. Pitch is +π/2 only for
    /// rotations that have no representative with a smaller pitch.
    ///
    /// The operation is idempotent: `zyx.unique().unique() == zyx.unique()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rotations::rotations::EulerAnglesZyxD;
    /// use std::f64::consts::{FRAC_PI_2, PI};
    ///
    /// // Pitch beyond π/2 is reflected back
    /// let unique = EulerAnglesZyxD::new(0.0, 2.0, 0.0).unique();
    /// assert!((unique.pitch() - (PI - 2.0)).abs() < 1e-12);
    ///
    /// // Gimbal lock: only yaw - roll matters at pitch +π/2
    /// let unique = EulerAnglesZyxD::new(0.3, FRAC_PI_2, 0.2).unique();
    /// assert!((unique.yaw() - 0.1).abs() < 1e-12);
    /// assert_eq!(unique.roll(), 0.0);
    /// ```
    pub fn unique(&self) -> Self {
        let pi = T::pi();
        let half_pi = T::frac_pi_2();
        let tolerance: T = constant(UNIQUE_TOLERANCE);

        let mut z = wrap_angle(self.z());
        let mut y = wrap_angle(self.y());
        let mut x = wrap_angle(self.x());

        if y < -half_pi - tolerance {
            (z, y, x) = (shift_by_pi(z), -(y + pi), shift_by_pi(x));
        } else if y <= -half_pi + tolerance {
            if y < -half_pi {
                (z, y, x) = (shift_by_pi(z), -(y + pi), shift_by_pi(x));
            }
            log::trace!("pitch {} at lower gimbal lock, folding roll {} into yaw", y, x);
            z = wrap_angle(z + x);
            x = T::zero();
        } else if y < half_pi - tolerance {
            // regular case, already unique
        } else if y <= half_pi + tolerance {
            if y > half_pi {
                (z, y, x) = (shift_by_pi(z), -(y - pi), shift_by_pi(x));
            }
            log::trace!("pitch {} at upper gimbal lock, folding roll {} into yaw", y, x);
            z = wrap_angle(z - x);
            x = T::zero();
        } else {
            (z, y, x) = (shift_by_pi(z), -(y - pi), shift_by_pi(x));
        }

        Self::new(z, y, x)
    }

    /// Replaces the angles with [`EulerAnglesZyx::unique`]
    pub fn set_unique(&mut self) -> &mut Self {
        *self = self.unique();
        self
    }

    /// Casts each angle to another scalar precision
    ///
    /// ```rust
    /// use rotations::rotations::{EulerAnglesZyxD, EulerAnglesZyxF};
    ///
    /// let zyx = EulerAnglesZyxD::new(0.5, 0.25, -1.0);
    /// let single: EulerAnglesZyxF = zyx.cast();
    /// assert_eq!(single.yaw(), 0.5_f32);
    /// ```
    pub fn cast<U: Scalar + SupersetOf<T>>(&self) -> EulerAnglesZyx<U> {
        EulerAnglesZyx {
            zyx: self.zyx.cast::<U>(),
        }
    }
}

/// Moves an angle in [-π, π) by half a turn, staying in [-π, π)
fn shift_by_pi<T: Scalar>(angle: T) -> T {
    if angle < T::zero() {
        // a tiny negative angle plus π rounds to π itself
        wrap_angle(angle + T::pi())
    } else {
        angle - T::pi()
    }
}

impl<T: Scalar> Default for EulerAnglesZyx<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> fmt::Display for EulerAnglesZyx<T> {
    /// Prints "yaw pitch roll" separated by single spaces
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.z(), self.y(), self.x())
    }
}

impl<T: Scalar> Rotation<T> for EulerAnglesZyx<T> {
    fn kind(&self) -> RotationKind {
        RotationKind::EulerAnglesZyx
    }

    fn as_any(&self) -> AnyRotation<T> {
        AnyRotation::EulerAnglesZyx(*self)
    }

    fn to_quaternion(&self) -> RotationQuaternion<T> {
        RotationQuaternion::from(*self)
    }

    fn to_rotation_matrix(&self) -> RotationMatrix<T> {
        RotationMatrix::from(*self)
    }
}

// Conversions into Euler angles. The destination precision `T` is chosen
// independently of the source precision `S`.

impl<T, S> From<AngleAxis<S>> for EulerAnglesZyx<T>
where
    T: Scalar + SupersetOf<S>,
    S: Scalar,
{
    fn from(aa: AngleAxis<S>) -> Self {
        Self::from(RotationQuaternion::<T>::from(aa.cast::<T>()))
    }
}

impl<T, S> From<RotationVector<S>> for EulerAnglesZyx<T>
where
    T: Scalar + SupersetOf<S>,
    S: Scalar,
{
    fn from(rotation_vector: RotationVector<S>) -> Self {
        Self::from(AngleAxis::<S>::from(rotation_vector))
    }
}

impl<T, S> From<RotationQuaternion<S>> for EulerAnglesZyx<T>
where
    T: Scalar + SupersetOf<S>,
    S: Scalar,
{
    fn from(q: RotationQuaternion<S>) -> Self {
        Self::from(q.to_rotation_matrix())
    }
}

impl<T, S> From<RotationMatrix<S>> for EulerAnglesZyx<T>
where
    T: Scalar + SupersetOf<S>,
    S: Scalar,
{
    /// Reads the angles off the transposed matrix `R_B = R^T`
    ///
    /// With `r_ij` the 1-indexed entries of `R_B`:
    /// yaw = atan2(r12, r11), pitch = -asin(r13), roll = atan2(r23, r33).
    /// Near gimbal lock (|r13| close to 1) yaw and roll are ill-conditioned;
    /// use [`EulerAnglesZyx::unique`] on the result for a canonical value.
    fn from(rotation: RotationMatrix<S>) -> Self {
        let r_b: Matrix3<T> = rotation.matrix().transpose().cast::<T>();

        let tolerance: T = constant(UNIQUE_TOLERANCE);
        // non-finite input is extracted without diagnosis
        debug_assert!(
            {
                let bound: T = constant(EXTRACTION_ORTHONORMALITY_TOLERANCE);
                !r_b.iter().all(|v| v.is_finite())
                    || RotationMatrix::new(r_b).orthonormality_error() <= bound
            },
            "Euler angle extraction from a matrix that is not a rotation"
        );

        let r11 = r_b[(0, 0)];
        let r12 = r_b[(0, 1)];
        let r13 = r_b[(0, 2)].clamp(-T::one(), T::one());
        let r23 = r_b[(1, 2)];
        let r33 = r_b[(2, 2)];

        if r13.abs() > T::one() - tolerance {
            log::trace!("extracting Euler angles near gimbal lock, r13 = {}", r13);
        }

        Self::new(r12.atan2(r11), -r13.asin(), r23.atan2(r33))
    }
}

impl<T, S> From<EulerAnglesXyz<S>> for EulerAnglesZyx<T>
where
    T: Scalar + SupersetOf<S>,
    S: Scalar,
{
    fn from(xyz: EulerAnglesXyz<S>) -> Self {
        Self::from(RotationQuaternion::<T>::from(xyz.cast::<T>()))
    }
}

impl<T, S> From<AnyRotation<S>> for EulerAnglesZyx<T>
where
    T: Scalar + SupersetOf<S>,
    S: Scalar,
{
    fn from(rotation: AnyRotation<S>) -> Self {
        match rotation {
            AnyRotation::AngleAxis(r) => Self::from(r),
            AnyRotation::RotationVector(r) => Self::from(r),
            AnyRotation::RotationQuaternion(r) => Self::from(r),
            AnyRotation::RotationMatrix(r) => Self::from(r),
            AnyRotation::EulerAnglesXyz(r) => Self::from(r),
            AnyRotation::EulerAnglesZyx(r) => r.cast::<T>(),
        }
    }
}
